//! Schema subsystem for treecheck
//!
//! Schemas are declarative descriptors of the shape a subtree must have,
//! built directly as Rust data with embedded predicate callbacks.
//!
//! # Design Principles
//!
//! - Exactly one form per concern: rule variants are explicit tagged unions,
//!   never probed at runtime
//! - Permissive by default: undeclared children are ignored unless an
//!   aggregate rule says otherwise
//! - Registered schema names are bind-once
//! - Building a schema never validates anything

mod errors;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use registry::SchemaRegistry;
pub use types::{
    ChildCheck, ChildRule, ChildrenCheck, ChildrenRule, PropertyCheck, PropertyRule, SchemaNode,
};
