use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecError {
    #[error("specification must be an object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("entry `{entry}` has an empty name after its marker")]
    EmptyName { entry: String },
    #[error("custom type `{path}` must be an object of fields, found {found}")]
    CustomTypeNotObject { path: String, found: &'static str },
    #[error("list at `{path}` must wrap exactly one type, found {len}")]
    ListArity { path: String, len: usize },
    #[error("entry at `{path}` declares more than one result type: {keys:?}")]
    AmbiguousResult { path: String, keys: Vec<String> },
    #[error("unsupported {found} value at `{path}`")]
    UnsupportedValue { path: String, found: &'static str },
    #[error("failed to parse specification")]
    Json(#[source] serde_json::Error),
}
