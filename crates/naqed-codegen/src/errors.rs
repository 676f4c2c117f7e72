use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CodegenError {
    #[error("field `{field}` has no result type marker")]
    MalformedFieldSpec { field: String },
    #[error("field `{field}` references undeclared type `{name}`")]
    UnresolvedTypeReference { name: String, field: String },
    #[error("type `{name}` is defined more than once")]
    DuplicateTypeName { name: String },
}
