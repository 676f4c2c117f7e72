pub mod errors;
pub mod functions;
mod generator;
pub mod naming;
pub mod options;
pub mod sdl;
pub mod synthesizer;

use indexmap::IndexMap;
use naqed_core::Specification;
use serde::Serialize;

pub use self::errors::CodegenError;
pub use self::generator::{DynGenerator, Generator};
pub use self::options::{GeneratorOptions, GeneratorOptionsBuilder};
pub use self::sdl::{SdlDocument, SdlGenerator};

pub fn generate(spec: &Specification, generator: DynGenerator) -> eyre::Result<String> {
    generator.generate(spec)
}

/// Field resolvers keyed by root type and field name.
///
/// Generation never binds executable behavior, so this is always empty; the
/// resolver runtime fills in its own.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolverMap(IndexMap<String, IndexMap<String, String>>);

impl ResolverMap {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The schema a specification describes: SDL type definitions plus the
/// (empty) resolver map handed to the execution engine alongside them.
pub struct SchemaDocument<'a> {
    spec: &'a Specification,
    options: GeneratorOptions,
}

impl<'a> SchemaDocument<'a> {
    pub fn new(spec: &'a Specification) -> Self {
        Self::with_options(spec, GeneratorOptions::default())
    }

    pub fn with_options(spec: &'a Specification, options: GeneratorOptions) -> Self {
        Self { spec, options }
    }

    /// Regenerates the SDL document from the specification on every call.
    pub fn type_defs(&self) -> Result<String, CodegenError> {
        SdlDocument::build(self.spec, &self.options).map(|document| document.to_string())
    }

    pub fn resolvers(&self) -> ResolverMap {
        ResolverMap::default()
    }
}
