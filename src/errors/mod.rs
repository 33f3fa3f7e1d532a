//! Error types for schema derivation
//!
//! Every failure in this crate is a schema-build failure: it surfaces while
//! the application assembles its GraphQL schema, never at request time.

pub mod schema;

pub use schema::SchemaError;

/// Result type alias for schema derivation operations
pub type SchemaResult<T> = Result<T, SchemaError>;
