use std::sync::Arc;

use naqed_core::Specification;

pub trait Generator {
    fn generate(&self, spec: &Specification) -> eyre::Result<String>;
}

pub type DynGenerator = Arc<dyn Generator + Send + Sync>;
