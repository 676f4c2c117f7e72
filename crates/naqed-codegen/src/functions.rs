use std::sync::Arc;

use naqed_core::{BuiltinScalar, FieldSpec, NamedType};

use crate::errors::CodegenError;

pub trait FormatTypeFuncs {
    fn format_kind_list(&self, representation: &str) -> String;
    fn format_kind_scalar(&self, scalar: BuiltinScalar) -> String;
    fn format_kind_object(&self, ref_name: &str) -> String;
    fn format_kind_input_object(&self, ref_name: &str) -> String;
}

pub type DynFormatTypeFuncs = Arc<dyn FormatTypeFuncs + Send + Sync>;

/// Resolves field specs to type names for output and input positions.
pub struct CommonFunctions {
    format_type_funcs: DynFormatTypeFuncs,
}

impl CommonFunctions {
    pub fn new(funcs: DynFormatTypeFuncs) -> Self {
        Self {
            format_type_funcs: funcs,
        }
    }

    /// Type name of `spec` where an argument or input field expects it. Custom
    /// types are named as their generated input types.
    pub fn format_input_type(&self, field: &str, spec: &FieldSpec) -> Result<String, CodegenError> {
        self.format_type(field, spec, true)
    }

    pub fn format_output_type(
        &self,
        field: &str,
        spec: &FieldSpec,
    ) -> Result<String, CodegenError> {
        self.format_type(field, spec, false)
    }

    fn format_type(&self, field: &str, spec: &FieldSpec, input: bool) -> Result<String, CodegenError> {
        match spec {
            FieldSpec::List(inner) => {
                let inner_type = self.format_type(field, inner, input)?;
                Ok(self.format_type_funcs.format_kind_list(&inner_type))
            }
            FieldSpec::Named(named) => Ok(self.format_named(named, input)),
            FieldSpec::Dynamic(entry) => Ok(self.format_named(&entry.result, input)),
            FieldSpec::Object(_) => Err(CodegenError::MalformedFieldSpec {
                field: field.to_string(),
            }),
        }
    }

    fn format_named(&self, named: &NamedType, input: bool) -> String {
        match named {
            NamedType::Scalar(scalar) => self.format_type_funcs.format_kind_scalar(*scalar),
            NamedType::Custom(name) if input => {
                self.format_type_funcs.format_kind_input_object(name)
            }
            NamedType::Custom(name) => self.format_type_funcs.format_kind_object(name),
        }
    }
}

/// The custom type a field spec ends up naming, looking through lists and
/// dynamic results.
pub fn custom_type_name(spec: &FieldSpec) -> Option<&str> {
    match spec {
        FieldSpec::List(inner) => custom_type_name(inner),
        FieldSpec::Named(named) => named.custom_name(),
        FieldSpec::Dynamic(entry) => entry.result.custom_name(),
        FieldSpec::Object(_) => None,
    }
}
