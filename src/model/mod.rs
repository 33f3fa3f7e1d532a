pub mod builder;
pub mod descriptor;
pub mod fields;

pub use builder::ModelBuilder;
pub use descriptor::{FieldDescriptor, ModelDescriptor, ScalarKind};
pub use fields::{FieldFilter, ModelFields};
