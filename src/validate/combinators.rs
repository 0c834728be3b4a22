//! Validator combinators.
//!
//! Higher-order helpers that build new validators out of existing ones, plus
//! the stock validators most schemas want. Combined validators always run
//! every constituent, so no diagnostic is lost to short-circuiting.

use crate::counting::count_element_by;
use crate::node::{TreeNode, Value};
use crate::report::Warnings;
use crate::schema::{ChildCheck, ChildrenCheck, PropertyCheck};

/// Combines property validators into one that runs them all and passes iff
/// all passed.
pub fn combine_property_validators(validators: Vec<PropertyCheck>) -> PropertyCheck {
    Box::new(
        move |value: Option<&Value>, warnings: &mut Warnings, node: &dyn TreeNode, name: &str| {
            let mut success = true;
            for validator in &validators {
                let passed = validator(value, warnings, node, name);
                success = success && passed;
            }
            success
        },
    )
}

/// Combines named-child validators into one that runs them all and passes
/// iff all passed.
pub fn combine_child_validators(validators: Vec<ChildCheck>) -> ChildCheck {
    Box::new(
        move |child: Option<&dyn TreeNode>, warnings: &mut Warnings, name: &str| {
            let mut success = true;
            for validator in &validators {
                let passed = validator(child, warnings, name);
                success = success && passed;
            }
            success
        },
    )
}

/// Combines child-list validators into one that runs them all and passes
/// iff all passed.
pub fn combine_children_validators(validators: Vec<ChildrenCheck>) -> ChildrenCheck {
    Box::new(
        move |children: &[&dyn TreeNode], warnings: &mut Warnings| {
            let mut success = true;
            for validator in &validators {
                let passed = validator(children, warnings);
                success = success && passed;
            }
            success
        },
    )
}

/// Child-list validator requiring every child to be of `class`. Reports one
/// diagnostic per offending child.
pub fn all_children_of_class(class: impl Into<String>) -> ChildrenCheck {
    let class = class.into();
    Box::new(
        move |children: &[&dyn TreeNode], warnings: &mut Warnings| {
            let mut success = true;
            for child in children {
                if child.is_a(&class) {
                    continue;
                }
                success = false;
                warnings.push(format!(
                    "Child {} should be of class {}",
                    child.full_path(),
                    class
                ));
            }
            success
        },
    )
}

/// Child-list validator rejecting duplicate names. Every child whose name is
/// shared gets its own diagnostic, so two children named "x" yield two
/// diagnostics.
pub fn no_children_duplicates(children: &[&dyn TreeNode], warnings: &mut Warnings) -> bool {
    let mut success = true;
    for child in children {
        let sharing_name = count_element_by(children, &child.name(), |node| node.name());
        if sharing_name <= 1 {
            continue;
        }
        success = false;
        warnings.push(format!("Duplicated child {}", child.full_path()));
    }
    success
}

/// Property validator rejecting absent properties. A present `Value::Null`
/// passes; only absence fails.
pub fn property_is_not_undefined(
    value: Option<&Value>,
    warnings: &mut Warnings,
    node: &dyn TreeNode,
    name: &str,
) -> bool {
    if value.is_none() {
        warnings.push(format!(
            "Property {} is undefined in {}",
            name,
            node.full_path()
        ));
    }
    value.is_some()
}
