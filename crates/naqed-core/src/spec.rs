use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::SpecError;
use crate::markers::Markers;

pub type FieldMap = IndexMap<String, FieldSpec>;

/// Custom type name (marker stripped) to its fields, in declaration order.
pub type CustomTypeRegistry = IndexMap<String, FieldMap>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinScalar {
    Boolean,
    Id,
    String,
    Float,
    Int,
}

impl BuiltinScalar {
    pub fn from_spec_name(name: &str) -> Option<Self> {
        match name {
            "BOOL" => Some(Self::Boolean),
            "ID" => Some(Self::Id),
            "STRING" => Some(Self::String),
            "FLOAT" => Some(Self::Float),
            "INT" => Some(Self::Int),
            _ => None,
        }
    }

    pub fn spec_name(&self) -> &'static str {
        match self {
            Self::Boolean => "BOOL",
            Self::Id => "ID",
            Self::String => "STRING",
            Self::Float => "FLOAT",
            Self::Int => "INT",
        }
    }

    pub fn sdl_name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Id => "ID",
            Self::String => "String",
            Self::Float => "Float",
            Self::Int => "Int",
        }
    }
}

/// A bare type name: either a built-in scalar or a reference to a custom type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NamedType {
    Scalar(BuiltinScalar),
    Custom(String),
}

impl NamedType {
    /// Names outside the scalar table are custom type references.
    pub fn parse(name: &str) -> Self {
        match BuiltinScalar::from_spec_name(name) {
            Some(scalar) => Self::Scalar(scalar),
            None => Self::Custom(name.to_string()),
        }
    }

    pub fn custom_name(&self) -> Option<&str> {
        match self {
            Self::Scalar(_) => None,
            Self::Custom(name) => Some(name),
        }
    }
}

impl From<BuiltinScalar> for NamedType {
    fn from(value: BuiltinScalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for NamedType {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// The static shape of an executable field: its declared result and arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicEntry {
    pub result: NamedType,
    pub args: FieldMap,
}

impl DynamicEntry {
    pub fn new(result: impl Into<NamedType>) -> Self {
        Self {
            result: result.into(),
            args: FieldMap::new(),
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.args.insert(name.into(), spec);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldSpec {
    Named(NamedType),
    List(Box<FieldSpec>),
    /// A field map without a result marker. Not resolvable to a type name.
    Object(FieldMap),
    Dynamic(DynamicEntry),
}

impl FieldSpec {
    pub fn scalar(scalar: BuiltinScalar) -> Self {
        Self::Named(NamedType::Scalar(scalar))
    }

    pub fn custom(name: impl Into<String>) -> Self {
        Self::Named(NamedType::Custom(name.into()))
    }

    pub fn list(inner: FieldSpec) -> Self {
        Self::List(Box::new(inner))
    }

    /// Arguments declared on this field. Only dynamic entries carry any.
    pub fn args(&self) -> Option<&FieldMap> {
        match self {
            Self::Dynamic(entry) => Some(&entry.args),
            _ => None,
        }
    }
}

impl From<DynamicEntry> for FieldSpec {
    fn from(value: DynamicEntry) -> Self {
        Self::Dynamic(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub name: String,
    pub kind: OperationKind,
    pub spec: FieldSpec,
}

/// A normalized specification. Operations and custom types keep the order in
/// which they were declared.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct Specification {
    operations: Vec<Operation>,
    custom_types: CustomTypeRegistry,
}

impl Specification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, name: impl Into<String>, spec: impl Into<FieldSpec>) -> Self {
        self.operations.push(Operation {
            name: name.into(),
            kind: OperationKind::Query,
            spec: spec.into(),
        });
        self
    }

    pub fn with_mutation(mut self, name: impl Into<String>, spec: impl Into<FieldSpec>) -> Self {
        self.operations.push(Operation {
            name: name.into(),
            kind: OperationKind::Mutation,
            spec: spec.into(),
        });
        self
    }

    pub fn with_type<K>(
        mut self,
        name: impl Into<String>,
        fields: impl IntoIterator<Item = (K, FieldSpec)>,
    ) -> Self
    where
        K: Into<String>,
    {
        let fields = fields.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.custom_types.insert(name.into(), fields);
        self
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn queries(&self) -> impl Iterator<Item = &Operation> {
        self.operations_of(OperationKind::Query)
    }

    pub fn mutations(&self) -> impl Iterator<Item = &Operation> {
        self.operations_of(OperationKind::Mutation)
    }

    fn operations_of(&self, kind: OperationKind) -> impl Iterator<Item = &Operation> {
        self.operations.iter().filter(move |o| o.kind == kind)
    }

    pub fn custom_types(&self) -> &CustomTypeRegistry {
        &self.custom_types
    }

    pub fn custom_type(&self, name: &str) -> Option<&FieldMap> {
        self.custom_types.get(name)
    }

    /// Normalizes a raw JSON specification using the given markers.
    pub fn from_value(value: &Value, markers: &Markers) -> Result<Self, SpecError> {
        let Value::Object(entries) = value else {
            return Err(SpecError::NotAnObject {
                found: value_kind(value),
            });
        };

        let normalizer = Normalizer { markers };
        let mut spec = Specification::new();

        for (key, value) in entries {
            if let Some(name) = markers.mutation_name(key) {
                let name = non_empty(key, name)?;
                spec.operations.push(Operation {
                    name: name.to_string(),
                    kind: OperationKind::Mutation,
                    spec: normalizer.field_spec(key, value)?,
                });
            } else if let Some(name) = markers.type_name(key) {
                let name = non_empty(key, name)?;
                let Value::Object(fields) = value else {
                    return Err(SpecError::CustomTypeNotObject {
                        path: key.clone(),
                        found: value_kind(value),
                    });
                };
                spec.custom_types
                    .insert(name.to_string(), normalizer.field_map(key, fields)?);
            } else {
                let name = non_empty(key, key)?;
                spec.operations.push(Operation {
                    name: name.to_string(),
                    kind: OperationKind::Query,
                    spec: normalizer.field_spec(key, value)?,
                });
            }
        }

        tracing::debug!(
            operations = spec.operations.len(),
            custom_types = spec.custom_types.len(),
            "normalized specification"
        );

        Ok(spec)
    }
}

impl TryFrom<Value> for Specification {
    type Error = SpecError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value, &Markers::default())
    }
}

impl FromStr for Specification {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s).map_err(SpecError::Json)?;
        Self::from_value(&value, &Markers::default())
    }
}

struct Normalizer<'m> {
    markers: &'m Markers,
}

impl Normalizer<'_> {
    fn field_spec(&self, path: &str, value: &Value) -> Result<FieldSpec, SpecError> {
        match value {
            Value::String(name) => Ok(FieldSpec::Named(NamedType::parse(name))),
            Value::Array(items) => match items.as_slice() {
                [inner] => Ok(FieldSpec::list(
                    self.field_spec(&format!("{path}[0]"), inner)?,
                )),
                _ => Err(SpecError::ListArity {
                    path: path.to_string(),
                    len: items.len(),
                }),
            },
            Value::Object(map) => self.object(path, map),
            Value::Null | Value::Bool(_) | Value::Number(_) => Err(SpecError::UnsupportedValue {
                path: path.to_string(),
                found: value_kind(value),
            }),
        }
    }

    fn object(&self, path: &str, map: &Map<String, Value>) -> Result<FieldSpec, SpecError> {
        // typed-object form, e.g. {"name": "STRING"}
        if map.len() == 1 {
            if let Some(Value::String(name)) = map.get("name") {
                return Ok(FieldSpec::Named(NamedType::parse(name)));
            }
        }

        let results = map
            .keys()
            .filter_map(|k| self.markers.result_name(k).map(|name| (k, name)))
            .collect::<Vec<_>>();

        let result = match results.as_slice() {
            [] => return Ok(FieldSpec::Object(self.field_map(path, map)?)),
            [(_, name)] => NamedType::parse(name),
            _ => {
                return Err(SpecError::AmbiguousResult {
                    path: path.to_string(),
                    keys: results.iter().map(|(k, _)| k.to_string()).collect(),
                })
            }
        };

        let mut args = FieldMap::new();
        for (key, value) in map {
            if let Some(arg) = self.markers.argument_name(key) {
                args.insert(arg.to_string(), self.field_spec(&child(path, key), value)?);
            } else if self.markers.result_name(key).is_none() {
                tracing::warn!(path, key = %key, "ignoring unmarked key in dynamic entry");
            }
        }

        Ok(FieldSpec::Dynamic(DynamicEntry { result, args }))
    }

    fn field_map(&self, path: &str, map: &Map<String, Value>) -> Result<FieldMap, SpecError> {
        map.iter()
            .map(|(key, value)| Ok((key.clone(), self.field_spec(&child(path, key), value)?)))
            .collect()
    }
}

fn child(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn non_empty<'a>(entry: &str, name: &'a str) -> Result<&'a str, SpecError> {
    if name.is_empty() {
        return Err(SpecError::EmptyName {
            entry: entry.to_string(),
        });
    }
    Ok(name)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn normalize(value: Value) -> Result<Specification, SpecError> {
        Specification::from_value(&value, &Markers::default())
    }

    #[test]
    fn scalar_names_map_through_the_table() {
        assert_eq!(
            NamedType::parse("BOOL"),
            NamedType::Scalar(BuiltinScalar::Boolean)
        );
        assert_eq!(NamedType::parse("INT"), NamedType::Scalar(BuiltinScalar::Int));
        assert_eq!(NamedType::parse("Int"), NamedType::Custom("Int".into()));
        assert_eq!(BuiltinScalar::Id.sdl_name(), "ID");
        assert_eq!(BuiltinScalar::Boolean.spec_name(), "BOOL");
    }

    #[test]
    fn top_level_entries_are_classified_by_marker() {
        let spec = normalize(json!({
            "$User": { "name": "STRING", "tags": ["STRING"] },
            "users": { "$User": null },
            "~createUser": { "$User": null, "$name": "STRING" },
        }))
        .unwrap();

        assert_eq!(spec.custom_types().len(), 1);
        assert_eq!(
            spec.custom_type("User").unwrap().get("tags"),
            Some(&FieldSpec::list(FieldSpec::scalar(BuiltinScalar::String)))
        );
        assert_eq!(spec.queries().map(|o| o.name.as_str()).collect::<Vec<_>>(), vec!["users"]);
        assert_eq!(
            spec.mutations().next().unwrap().spec,
            FieldSpec::from(
                DynamicEntry::new("User").with_arg("name", FieldSpec::scalar(BuiltinScalar::String))
            )
        );
    }

    #[test]
    fn typed_object_form_is_a_named_type() {
        let spec = normalize(json!({ "$A": { "id": { "name": "ID" }, "b": { "name": "B" } } })).unwrap();
        let fields = spec.custom_type("A").unwrap();

        assert_eq!(fields["id"], FieldSpec::scalar(BuiltinScalar::Id));
        assert_eq!(fields["b"], FieldSpec::custom("B"));
    }

    #[test]
    fn object_without_result_marker_stays_an_object() {
        let spec = normalize(json!({ "nested": { "inner": "STRING" } })).unwrap();

        assert!(matches!(spec.operations()[0].spec, FieldSpec::Object(_)));
    }

    #[test]
    fn ignores_unmarked_keys_in_dynamic_entries() {
        let spec = normalize(json!({ "test": { "$STRING": null, "note": "x", "$id": "ID" } })).unwrap();
        let args = spec.operations()[0].spec.args().unwrap();

        assert_eq!(args.keys().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn preserves_declaration_order() {
        let spec = normalize(json!({ "$B": {}, "$A": {}, "$C": {} })).unwrap();

        assert_eq!(
            spec.custom_types().keys().collect::<Vec<_>>(),
            vec!["B", "A", "C"]
        );
    }

    #[test]
    fn rejects_lists_without_exactly_one_type() {
        let err = normalize(json!({ "$A": { "tags": ["STRING", "INT"] } })).unwrap_err();

        assert!(matches!(err, SpecError::ListArity { ref path, len: 2 } if path == "$A.tags"));
    }

    #[test]
    fn rejects_ambiguous_results() {
        let err = normalize(json!({ "test": { "$STRING": null, "$INT": null } })).unwrap_err();

        assert!(matches!(err, SpecError::AmbiguousResult { .. }));
    }

    #[test]
    fn rejects_non_object_custom_types_and_documents() {
        assert!(matches!(
            normalize(json!({ "$A": "STRING" })).unwrap_err(),
            SpecError::CustomTypeNotObject { found: "string", .. }
        ));
        assert!(matches!(
            normalize(json!(["STRING"])).unwrap_err(),
            SpecError::NotAnObject { found: "array" }
        ));
        assert!(matches!(
            normalize(json!({ "~": { "$STRING": null } })).unwrap_err(),
            SpecError::EmptyName { .. }
        ));
        assert!(matches!(
            normalize(json!({ "": { "$STRING": null } })).unwrap_err(),
            SpecError::EmptyName { .. }
        ));
        assert!(matches!(
            normalize(json!({ "$A": { "count": 3 } })).unwrap_err(),
            SpecError::UnsupportedValue { found: "number", .. }
        ));
    }

    #[test]
    fn parses_from_json_text() {
        let spec: Specification = r#"{ "hello": { "$STRING": true } }"#.parse().unwrap();
        let deserialized: Specification =
            serde_json::from_str(r#"{ "hello": { "$STRING": true } }"#).unwrap();

        assert_eq!(spec, deserialized);
        assert!(matches!(
            "{ nope".parse::<Specification>().unwrap_err(),
            SpecError::Json(_)
        ));
    }

    #[test]
    fn builder_matches_normalized_json() {
        let built = Specification::new()
            .with_type(
                "A",
                [
                    ("name", FieldSpec::scalar(BuiltinScalar::String)),
                    ("b", FieldSpec::custom("B")),
                ],
            )
            .with_mutation(
                "CreateA",
                DynamicEntry::new("A").with_arg("input", FieldSpec::list(FieldSpec::custom("A"))),
            );
        let normalized = normalize(json!({
            "$A": { "name": "STRING", "b": "B" },
            "~CreateA": { "$A": null, "$input": ["A"] },
        }))
        .unwrap();

        assert_eq!(built, normalized);
    }
}
