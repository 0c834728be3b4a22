//! # Schema Errors
//!
//! Error types for schema registry bookkeeping.
//!
//! Validation outcomes are never errors: the matcher reports `false` plus
//! diagnostics. Errors here cover only registry misuse.

use thiserror::Error;

/// Result type for schema registry operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Registry bookkeeping errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A name can be bound to a schema only once
    #[error("Schema '{0}' is already registered")]
    DuplicateSchema(String),

    /// Lookup of a name that was never registered
    #[error("Schema '{0}' not found")]
    UnknownSchema(String),
}
