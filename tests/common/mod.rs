//! Shared in-memory tree fixture for integration tests.

use std::collections::BTreeMap;

use treecheck::node::{TreeNode, Value};

/// Simple owned tree node. Class membership is exact-match, except that
/// every node also counts as an "Instance", which stands in for a host
/// object model with a common base class.
pub struct TestNode {
    class: String,
    name: String,
    properties: BTreeMap<String, Value>,
    children: Vec<TestNode>,
}

impl TestNode {
    pub fn new(class: &str, name: &str) -> Self {
        Self {
            class: class.to_string(),
            name: name.to_string(),
            properties: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_property(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(name.to_string(), value.into());
        self
    }

    pub fn with_child(mut self, child: TestNode) -> Self {
        self.children.push(child);
        self
    }
}

impl TreeNode for TestNode {
    fn is_a(&self, class: &str) -> bool {
        self.class == class || class == "Instance"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn full_path(&self) -> String {
        self.name.clone()
    }

    fn property(&self, name: &str) -> Option<Value> {
        self.properties.get(name).cloned()
    }

    fn child(&self, name: &str) -> Option<&dyn TreeNode> {
        self.children
            .iter()
            .find(|c| c.name == name)
            .map(|c| c as &dyn TreeNode)
    }

    fn children(&self) -> Vec<&dyn TreeNode> {
        self.children.iter().map(|c| c as &dyn TreeNode).collect()
    }
}
