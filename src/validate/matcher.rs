//! Recursive schema matcher.
//!
//! Check order within one node, with exact short-circuit points:
//!
//! 1. Class: a mismatch fails the node immediately; nothing else runs.
//! 2. Properties: every declared property is evaluated, then the step
//!    passes or fails as a whole. Children are not checked after a failed
//!    property step.
//! 3. Children: either one aggregate callback over the full child list, or
//!    every declared named entry evaluated independently followed by one
//!    summary diagnostic if any failed.
//!
//! Undeclared children are never inspected. The walk is synchronous and
//! never mutates the tree.

use tracing::{debug, trace};

use crate::node::{TreeNode, Value};
use crate::report::Warnings;
use crate::schema::{ChildRule, ChildrenRule, PropertyRule, SchemaNode};

/// Validates a tree against a schema, appending diagnostics to `warnings`.
///
/// Returns `true` iff every declared expectation holds. The log is append
/// only: entries present before the call survive it.
pub fn validate_tree(node: &dyn TreeNode, schema: &SchemaNode, warnings: &mut Warnings) -> bool {
    trace!(path = %node.full_path(), "validating node");

    if let Some(class) = &schema.class {
        if !node.is_a(class) {
            warnings.push(format!(
                "Instance {} should be of class {}",
                node.full_path(),
                class
            ));
            debug!(path = %node.full_path(), class = %class, "class mismatch");
            return false;
        }
    }

    if let Some(properties) = &schema.properties {
        let mut no_errors = true;
        for (name, rule) in properties {
            match rule {
                PropertyRule::Check(check) => {
                    let value = node.property(name);
                    if !check(value.as_ref(), warnings, node, name) {
                        warnings.push(format!(
                            "Property {} of {} does not satisfy its validator",
                            name,
                            node.full_path()
                        ));
                        no_errors = false;
                    }
                }
                PropertyRule::Equals(expected) => {
                    if node.property(name).as_ref() != Some(expected) {
                        warnings.push(format!(
                            "Property {} of {} should be of kind {} with value {}",
                            name,
                            node.full_path(),
                            value_kind(expected),
                            expected
                        ));
                        no_errors = false;
                    }
                }
            }
        }
        if !no_errors {
            debug!(path = %node.full_path(), "property step failed");
            return false;
        }
    }

    if let Some(rule) = &schema.children {
        match rule {
            ChildrenRule::Aggregate(check) => {
                let children = node.children();
                if !check(&children, warnings) {
                    warnings.push(format!(
                        "Children of {} did not satisfy the validator",
                        node.full_path()
                    ));
                    return false;
                }
            }
            ChildrenRule::Named(entries) => {
                let mut no_errors = true;
                for (name, entry) in entries {
                    if !check_named_child(node, name, entry, warnings) {
                        no_errors = false;
                    }
                }
                if !no_errors {
                    warnings.push(format!(
                        "Children of {} did not satisfy the validators",
                        node.full_path()
                    ));
                    return false;
                }
            }
        }
    }

    true
}

/// Validates with a fresh log, returning the outcome and the diagnostics.
pub fn validate(node: &dyn TreeNode, schema: &SchemaNode) -> (bool, Warnings) {
    let mut warnings = Warnings::new();
    let passed = validate_tree(node, schema, &mut warnings);
    (passed, warnings)
}

/// Evaluates one named-child entry. Failures are reported here; the caller
/// only aggregates the booleans.
fn check_named_child(
    parent: &dyn TreeNode,
    name: &str,
    entry: &ChildRule,
    warnings: &mut Warnings,
) -> bool {
    let child = parent.child(name);
    match entry {
        ChildRule::Check(check) => {
            if check(child, warnings, name) {
                true
            } else {
                warnings.push(format!(
                    "Child {} of {} did not satisfy the validator",
                    name,
                    parent.full_path()
                ));
                false
            }
        }
        ChildRule::Tree(schema) => check_child_schema(parent, name, child, schema, warnings),
        ChildRule::Class(class) => {
            // A bare class entry behaves as a nested schema declaring only
            // that class, and is never optional.
            let schema = SchemaNode::of_class(class.clone(), SchemaNode::new());
            check_child_schema(parent, name, child, &schema, warnings)
        }
        ChildRule::Exists => {
            if child.is_some() {
                true
            } else {
                warnings.push(format!(
                    "Child {} is missing from {}",
                    name,
                    parent.full_path()
                ));
                false
            }
        }
    }
}

fn check_child_schema(
    parent: &dyn TreeNode,
    name: &str,
    child: Option<&dyn TreeNode>,
    schema: &SchemaNode,
    warnings: &mut Warnings,
) -> bool {
    match child {
        None if schema.optional => true,
        None => {
            warnings.push(format!(
                "Child {} is missing from {}",
                name,
                parent.full_path()
            ));
            false
        }
        Some(child) => {
            if validate_tree(child, schema, warnings) {
                true
            } else {
                warnings.push(format!("Child {} does not satisfy its schema", name));
                false
            }
        }
    }
}

/// Kind name of a value for diagnostic text.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
