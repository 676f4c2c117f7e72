pub mod format;
pub mod templates;

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use eyre::Context;
use itertools::Itertools;
use naqed_core::{FieldSpec, Specification};

use crate::errors::CodegenError;
use crate::functions::{custom_type_name, CommonFunctions};
use crate::generator::Generator;
use crate::options::GeneratorOptions;
use crate::synthesizer::InputTypeSynthesizer;

use self::format::FormatTypeFunc;
use self::templates::input_tmpl::render_input;
use self::templates::object_tmpl::render_object;
use self::templates::operation_tmpl::render_operations;

#[derive(Default)]
pub struct SdlGenerator {
    pub options: GeneratorOptions,
}

impl SdlGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }
}

impl Generator for SdlGenerator {
    fn generate(&self, spec: &Specification) -> eyre::Result<String> {
        let document = SdlDocument::build(spec, &self.options)
            .context("could not generate sdl document")?;

        Ok(document.to_string())
    }
}

/// Rendered blocks of an SDL document, section by section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SdlDocument {
    pub custom_types: Vec<String>,
    pub input_types: Vec<String>,
    pub query: Option<String>,
    pub mutation: Option<String>,
}

impl SdlDocument {
    pub fn build(spec: &Specification, options: &GeneratorOptions) -> Result<Self, CodegenError> {
        check_references(spec)?;

        let naming = options.naming();
        let funcs = CommonFunctions::new(Arc::new(FormatTypeFunc::new(naming.clone())));
        let indent = options.indent.as_str();

        let custom_types = spec
            .custom_types()
            .iter()
            .map(|(name, fields)| {
                tracing::debug!(name = %name, fields = fields.len(), "rendering object type");
                render_object(&funcs, indent, name, fields)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let required = spec.mutations().flat_map(|op| {
            op.spec
                .args()
                .into_iter()
                .flatten()
                .filter_map(move |(arg, arg_spec)| {
                    custom_type_name(arg_spec)
                        .map(|source| (source.to_string(), format!("{}.{arg}", op.name)))
                })
        });

        let input_defs =
            InputTypeSynthesizer::new(&funcs, spec.custom_types(), &*naming).synthesize(required)?;

        let query = render_operations(&funcs, indent, "Query", spec.queries())?;
        let mutation = render_operations(&funcs, indent, "Mutation", spec.mutations())?;

        let roots = [("Query", &query), ("Mutation", &mutation)]
            .into_iter()
            .filter_map(|(root, block)| block.as_ref().map(|_| root));
        check_unique_names(
            spec.custom_types()
                .keys()
                .map(String::as_str)
                .chain(input_defs.iter().map(|def| def.name.as_str()))
                .chain(roots),
        )?;

        let input_types = input_defs
            .iter()
            .map(|def| render_input(indent, def))
            .collect::<Vec<_>>();

        tracing::debug!(
            custom_types = custom_types.len(),
            input_types = input_types.len(),
            query = query.is_some(),
            mutation = mutation.is_some(),
            "built sdl document"
        );

        Ok(Self {
            custom_types,
            input_types,
            query,
            mutation,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.blocks().next().is_none()
    }

    /// Blocks in document order: custom types, input types, Query, Mutation.
    pub fn blocks(&self) -> impl Iterator<Item = &String> {
        self.custom_types
            .iter()
            .chain(&self.input_types)
            .chain(&self.query)
            .chain(&self.mutation)
            .filter(|block| !block.is_empty())
    }
}

impl fmt::Display for SdlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.blocks().join("\n\n"))
    }
}

/// Every custom type named by a custom type field, an operation result or an
/// operation argument must be declared.
fn check_references(spec: &Specification) -> Result<(), CodegenError> {
    let check = |field: String, field_spec: &FieldSpec| match custom_type_name(field_spec) {
        Some(name) if spec.custom_type(name).is_none() => {
            Err(CodegenError::UnresolvedTypeReference {
                name: name.to_string(),
                field,
            })
        }
        _ => Ok(()),
    };

    for (type_name, fields) in spec.custom_types() {
        for (field, field_spec) in fields {
            check(format!("{type_name}.{field}"), field_spec)?;
        }
    }

    for op in spec.operations() {
        check(op.name.clone(), &op.spec)?;
        for (arg, arg_spec) in op.spec.args().into_iter().flatten() {
            check(format!("{}.{arg}", op.name), arg_spec)?;
        }
    }

    Ok(())
}

/// Object, input and root type names share one namespace in the document.
fn check_unique_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<(), CodegenError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(CodegenError::DuplicateTypeName {
                name: name.to_string(),
            });
        }
    }

    Ok(())
}
