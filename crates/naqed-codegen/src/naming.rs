use std::sync::Arc;

/// Derives the name of the input type generated for a custom type.
///
/// `input_name` must be deterministic: the same source type always yields the
/// same input name, which is how synthesis recognizes types it already emitted.
pub trait InputNaming {
    fn input_name(&self, source: &str) -> String;
}

pub type DynInputNaming = Arc<dyn InputNaming + Send + Sync>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuffixNaming {
    suffix: String,
}

impl SuffixNaming {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl Default for SuffixNaming {
    fn default() -> Self {
        Self::new("Input")
    }
}

impl InputNaming for SuffixNaming {
    fn input_name(&self, source: &str) -> String {
        format!("{source}{}", self.suffix)
    }
}
