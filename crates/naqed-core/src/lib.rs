pub mod errors;
pub mod markers;
pub mod spec;

pub use errors::SpecError;
pub use markers::Markers;
pub use spec::{
    BuiltinScalar, CustomTypeRegistry, DynamicEntry, FieldMap, FieldSpec, NamedType, Operation,
    OperationKind, Specification,
};
