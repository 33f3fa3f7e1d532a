//! Schema derivation errors
//!
//! These represent programmer errors in mutation or model declarations.
//! They are not recoverable: callers propagate them so that an application
//! building its schema eagerly fails at startup.

use thiserror::Error;

/// Errors raised while deriving mutation schemas from model descriptors
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Model declared without a name
    #[error("model name cannot be empty")]
    EmptyModelName,

    /// Field name declared twice on the same model
    #[error("duplicate field '{field}' on model '{model}'")]
    DuplicateField {
        /// Model carrying the duplicate
        model: String,
        /// The repeated field name
        field: String,
    },

    /// Mutation declared without an output node type
    #[error("mutation for model '{0}' requires a node type name")]
    MissingNode(String),

    /// Input type name registered twice with different field sets
    #[error("input type '{0}' already registered with a different shape")]
    TypeConflict(String),
}
