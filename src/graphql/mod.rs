pub mod mutation;
pub mod registry;
pub mod types;

pub use mutation::{MutationAction, MutationSchema};
pub use registry::TypeRegistry;
pub use types::{InputFieldType, MutationFields};
