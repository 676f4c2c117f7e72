use std::collections::VecDeque;

use indexmap::{IndexMap, IndexSet};
use naqed_core::CustomTypeRegistry;

use crate::errors::CodegenError;
use crate::functions::{custom_type_name, CommonFunctions};
use crate::naming::InputNaming;

/// An input type derived from a custom type, with its field types resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct InputTypeDef {
    pub name: String,
    pub source: String,
    pub fields: Vec<(String, String)>,
    /// Custom types this definition names through its fields.
    pub refs: IndexSet<String>,
}

pub struct InputTypeSynthesizer<'a> {
    funcs: &'a CommonFunctions,
    registry: &'a CustomTypeRegistry,
    naming: &'a dyn InputNaming,
}

impl<'a> InputTypeSynthesizer<'a> {
    pub fn new(
        funcs: &'a CommonFunctions,
        registry: &'a CustomTypeRegistry,
        naming: &'a dyn InputNaming,
    ) -> Self {
        Self {
            funcs,
            registry,
            naming,
        }
    }

    /// Derives the closure of input types needed by `required`.
    ///
    /// Each item pairs a custom type name with the field that requires it, the
    /// latter only used to report undeclared types. Definitions come back in
    /// the order they were discovered. Every derived name enters the memo at
    /// most once, so cyclic and diamond-shaped references terminate.
    pub fn synthesize<I>(&self, required: I) -> Result<Vec<InputTypeDef>, CodegenError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut queue = required.into_iter().collect::<VecDeque<_>>();
        let mut memo: IndexMap<String, InputTypeDef> = IndexMap::new();

        while let Some((source, referrer)) = queue.pop_front() {
            let name = self.naming.input_name(&source);
            if memo.contains_key(&name) {
                tracing::trace!(input = %name, "input type already synthesized");
                continue;
            }

            let (def, pending) = self.derive(source, name, &referrer)?;
            tracing::debug!(
                input = %def.name,
                source = %def.source,
                refs = def.refs.len(),
                "synthesized input type"
            );

            queue.extend(pending);
            memo.insert(def.name.clone(), def);
        }

        Ok(memo.into_values().collect())
    }

    /// Resolves one input type, returning it with the (type, field) pairs
    /// still to visit.
    fn derive(
        &self,
        source: String,
        name: String,
        referrer: &str,
    ) -> Result<(InputTypeDef, Vec<(String, String)>), CodegenError> {
        let Some(fields) = self.registry.get(&source) else {
            return Err(CodegenError::UnresolvedTypeReference {
                name: source,
                field: referrer.to_string(),
            });
        };

        let mut refs = IndexSet::new();
        let mut pending = Vec::new();
        let mut resolved = Vec::with_capacity(fields.len());
        for (field, spec) in fields {
            let path = format!("{source}.{field}");
            resolved.push((field.clone(), self.funcs.format_input_type(&path, spec)?));
            if let Some(r) = custom_type_name(spec) {
                if refs.insert(r.to_string()) {
                    pending.push((r.to_string(), path));
                }
            }
        }

        let def = InputTypeDef {
            name,
            source,
            fields: resolved,
            refs,
        };

        Ok((def, pending))
    }
}
