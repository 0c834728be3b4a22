//! treecheck - a strict, declarative structural validator for live object trees
//!
//! A schema describes the expected shape of a subtree (class, properties,
//! children); the matcher walks the schema against a live tree and collects
//! human-readable diagnostics.
//!
//! # Design Principles
//!
//! - Schemas are plain data plus predicate callbacks, no schema language
//! - Failures are reported as diagnostics, never raised
//! - Deterministic validation: same tree and schema, same diagnostics
//! - The tree is read through a capability trait and never mutated

pub mod counting;
pub mod node;
pub mod report;
pub mod schema;
pub mod validate;
