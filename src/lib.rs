pub mod errors;
pub mod graphql;
pub mod model;

pub use errors::{SchemaError, SchemaResult};
pub use graphql::{InputFieldType, MutationAction, MutationFields, MutationSchema, TypeRegistry};
pub use model::{
    FieldDescriptor, FieldFilter, ModelBuilder, ModelDescriptor, ModelFields, ScalarKind,
};
