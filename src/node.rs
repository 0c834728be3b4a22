//! Capability interface onto the live object tree.
//!
//! The validator never owns or constructs tree nodes; it reads them through
//! this trait. Host applications implement it over whatever their runtime
//! tree actually is (a scene graph, a widget hierarchy, a parsed document).
//!
//! Property values are surfaced as [`Value`]. An absent property is `None`;
//! a present `Value::Null` is a value like any other.

pub use serde_json::Value;

/// Read-only view of one node in the tree under validation.
///
/// Implementations must not mutate the tree from inside these methods. The
/// validator holds a borrow for the duration of a single validation call and
/// nothing longer.
pub trait TreeNode {
    /// Class membership test. Whether this is exact-class equality or an
    /// ancestry walk is the host's decision.
    fn is_a(&self, class: &str) -> bool;

    /// The node's own name, used to detect duplicate siblings.
    fn name(&self) -> &str;

    /// Human-readable identity of this node, used only inside diagnostic
    /// text. Typically the full path from the tree root.
    fn full_path(&self) -> String;

    /// Current value of a named property, or `None` if the node has no such
    /// property.
    fn property(&self, name: &str) -> Option<Value>;

    /// Direct child with exactly this name, if any.
    fn child(&self, name: &str) -> Option<&dyn TreeNode>;

    /// All direct children, in tree order.
    fn children(&self) -> Vec<&dyn TreeNode>;
}
