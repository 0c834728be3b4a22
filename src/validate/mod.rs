//! Validation subsystem for treecheck
//!
//! The matcher walks a schema against a live tree, depth-first, appending
//! diagnostics as it goes. Combinators build richer validators out of
//! existing ones.
//!
//! # Design Principles
//!
//! - Failures compose by boolean AND up the recursion
//! - Diagnostics are best-effort prose, intentionally redundant in places
//! - Recursion depth is bounded by schema depth, not tree size

mod combinators;
mod matcher;

pub use combinators::{
    all_children_of_class, combine_child_validators, combine_children_validators,
    combine_property_validators, no_children_duplicates, property_is_not_undefined,
};
pub use matcher::{validate, validate_tree};
