use std::sync::Arc;

use derive_builder::Builder;

use crate::naming::{DynInputNaming, SuffixNaming};

#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(default, setter(into), build_fn(validate = "Self::validate"))]
pub struct GeneratorOptions {
    /// Prefix written before every field line inside a block.
    pub indent: String,
    /// Appended to a custom type name to name its generated input type.
    pub input_suffix: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent: "  ".into(),
            input_suffix: "Input".into(),
        }
    }
}

impl GeneratorOptions {
    pub fn builder() -> GeneratorOptionsBuilder {
        GeneratorOptionsBuilder::default()
    }

    pub fn naming(&self) -> DynInputNaming {
        Arc::new(SuffixNaming::new(self.input_suffix.clone()))
    }
}

impl GeneratorOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        // an empty suffix would give input types the names of their object types
        if let Some(suffix) = &self.input_suffix {
            if suffix.is_empty() {
                return Err("input_suffix must not be empty".into());
            }
        }
        if let Some(indent) = &self.indent {
            if indent.chars().any(|c| !c.is_whitespace()) {
                return Err(format!("indent must be whitespace, got {indent:?}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::GeneratorOptions;

    #[test]
    fn builder_defaults() {
        let options = GeneratorOptions::builder().build().unwrap();

        assert_eq!(options, GeneratorOptions::default());
        assert_eq!(options.naming().input_name("A"), "AInput");
    }

    #[test]
    fn builder_overrides() {
        let options = GeneratorOptions::builder()
            .indent("    ")
            .input_suffix("Args")
            .build()
            .unwrap();

        assert_eq!(options.indent, "    ");
        assert_eq!(options.naming().input_name("A"), "AArgs");
    }

    #[test]
    fn rejects_empty_suffix() {
        let err = GeneratorOptions::builder().input_suffix("").build().unwrap_err();

        assert!(err.to_string().contains("input_suffix"));
    }

    #[test]
    fn rejects_non_whitespace_indent() {
        assert!(GeneratorOptions::builder().indent("--").build().is_err());
    }
}
