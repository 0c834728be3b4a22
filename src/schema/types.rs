//! Schema node and rule definitions.
//!
//! A [`SchemaNode`] declares what a tree node must look like:
//!
//! - an optional class the node must satisfy,
//! - expectations on named properties ([`PropertyRule`]),
//! - expectations on children ([`ChildrenRule`]), either one aggregate
//!   callback over the whole child list or a map of per-name entries.
//!
//! Every expectation kind is an explicit enum variant, so the matcher
//! dispatches by exhaustive case analysis. Callback rules hold boxed
//! closures and therefore carry no `Clone` or `Serialize`.

use std::collections::BTreeMap;
use std::fmt;

use crate::node::{TreeNode, Value};
use crate::report::Warnings;

/// Property predicate. Receives the current value (`None` when the property
/// is absent), the warning log, the owning node, and the property name.
pub type PropertyCheck = Box<dyn Fn(Option<&Value>, &mut Warnings, &dyn TreeNode, &str) -> bool>;

/// Named-child predicate. Receives the child (`None` when no child of that
/// name exists), the warning log, and the declared name.
pub type ChildCheck = Box<dyn Fn(Option<&dyn TreeNode>, &mut Warnings, &str) -> bool>;

/// Whole-child-list predicate. Receives the complete, unfiltered child list
/// and the warning log.
pub type ChildrenCheck = Box<dyn Fn(&[&dyn TreeNode], &mut Warnings) -> bool>;

/// Expectation on a single named property.
pub enum PropertyRule {
    /// The property must equal this value exactly. An absent property never
    /// matches a literal.
    Equals(Value),
    /// The property is judged by a callback.
    Check(PropertyCheck),
}

impl PropertyRule {
    /// Literal equality rule.
    pub fn equals(value: impl Into<Value>) -> Self {
        PropertyRule::Equals(value.into())
    }

    /// Callback rule.
    pub fn check<F>(check: F) -> Self
    where
        F: Fn(Option<&Value>, &mut Warnings, &dyn TreeNode, &str) -> bool + 'static,
    {
        PropertyRule::Check(Box::new(check))
    }
}

impl fmt::Debug for PropertyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyRule::Equals(value) => f.debug_tuple("Equals").field(value).finish(),
            PropertyRule::Check(_) => f.write_str("Check(..)"),
        }
    }
}

/// Expectation on a single named child.
pub enum ChildRule {
    /// The child must exist and satisfy a nested schema, unless the nested
    /// schema is marked optional.
    Tree(SchemaNode),
    /// The child must exist and be of this class.
    Class(String),
    /// The child (present or not) is judged by a callback.
    Check(ChildCheck),
    /// The child only needs to exist.
    Exists,
}

impl ChildRule {
    /// Nested-schema rule.
    pub fn tree(schema: SchemaNode) -> Self {
        ChildRule::Tree(schema)
    }

    /// Must-exist-with-class rule.
    pub fn class(class: impl Into<String>) -> Self {
        ChildRule::Class(class.into())
    }

    /// Callback rule.
    pub fn check<F>(check: F) -> Self
    where
        F: Fn(Option<&dyn TreeNode>, &mut Warnings, &str) -> bool + 'static,
    {
        ChildRule::Check(Box::new(check))
    }
}

impl fmt::Debug for ChildRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildRule::Tree(schema) => f.debug_tuple("Tree").field(schema).finish(),
            ChildRule::Class(class) => f.debug_tuple("Class").field(class).finish(),
            ChildRule::Check(_) => f.write_str("Check(..)"),
            ChildRule::Exists => f.write_str("Exists"),
        }
    }
}

/// Expectation on a node's children. Exactly one form applies: either one
/// callback over the full child list or a map of per-name entries. Only the
/// aggregate form can be strict about undeclared children.
pub enum ChildrenRule {
    /// One callback applied once to the complete child list.
    Aggregate(ChildrenCheck),
    /// Per-name entries; children not named here are never inspected.
    Named(BTreeMap<String, ChildRule>),
}

impl ChildrenRule {
    /// Aggregate rule from any child-list predicate.
    pub fn aggregate<F>(check: F) -> Self
    where
        F: Fn(&[&dyn TreeNode], &mut Warnings) -> bool + 'static,
    {
        ChildrenRule::Aggregate(Box::new(check))
    }

    /// Named rule from `(name, entry)` pairs.
    pub fn named<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, ChildRule)>,
        S: Into<String>,
    {
        ChildrenRule::Named(
            entries
                .into_iter()
                .map(|(name, rule)| (name.into(), rule))
                .collect(),
        )
    }
}

impl fmt::Debug for ChildrenRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildrenRule::Aggregate(_) => f.write_str("Aggregate(..)"),
            ChildrenRule::Named(entries) => f.debug_tuple("Named").field(entries).finish(),
        }
    }
}

/// Declarative descriptor of one tree node's expected shape.
///
/// An empty schema (no class, no properties, no children) accepts any node.
#[derive(Debug, Default)]
pub struct SchemaNode {
    /// Class the node must satisfy, if declared.
    pub class: Option<String>,
    /// Only meaningful when this schema is embedded as a named child: an
    /// absent child is then accepted silently.
    pub optional: bool,
    /// Per-property expectations.
    pub properties: Option<BTreeMap<String, PropertyRule>>,
    /// Child expectations, in exactly one of the two forms.
    pub children: Option<ChildrenRule>,
}

impl SchemaNode {
    /// Empty schema, accepts anything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `body` with its class set to `class`. Purely a construction
    /// convenience; nothing is validated here.
    pub fn of_class(class: impl Into<String>, body: SchemaNode) -> Self {
        SchemaNode {
            class: Some(class.into()),
            ..body
        }
    }

    /// Marks this schema optional when embedded as a named child.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Adds one property expectation.
    pub fn with_property(mut self, name: impl Into<String>, rule: PropertyRule) -> Self {
        self.properties
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), rule);
        self
    }

    /// Adds one named-child expectation. Replaces an aggregate children rule
    /// if one was previously set, since the two forms cannot be mixed.
    pub fn with_child(mut self, name: impl Into<String>, rule: ChildRule) -> Self {
        if !matches!(self.children, Some(ChildrenRule::Named(_))) {
            self.children = Some(ChildrenRule::Named(BTreeMap::new()));
        }
        if let Some(ChildrenRule::Named(entries)) = &mut self.children {
            entries.insert(name.into(), rule);
        }
        self
    }

    /// Sets the children expectation wholesale.
    pub fn with_children(mut self, rule: ChildrenRule) -> Self {
        self.children = Some(rule);
        self
    }
}
