//! In-memory registry of named schemas.
//!
//! Registration is bind-once: a name can never be rebound to a different
//! schema, so a validation result can always be traced back to the schema
//! that produced it. Schemas embed predicate callbacks and therefore live
//! only in memory; there is no persistence.

use std::collections::BTreeMap;

use tracing::debug;

use crate::node::TreeNode;
use crate::report::Warnings;
use crate::validate::validate_tree;

use super::errors::{SchemaError, SchemaResult};
use super::types::SchemaNode;

/// Named schema registry with bind-once registration.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, SchemaNode>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            schemas: BTreeMap::new(),
        }
    }

    /// Registers a schema under a name.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicateSchema` if the name is already bound.
    pub fn register(&mut self, name: impl Into<String>, schema: SchemaNode) -> SchemaResult<()> {
        let name = name.into();
        if self.schemas.contains_key(&name) {
            return Err(SchemaError::DuplicateSchema(name));
        }
        debug!(schema = %name, "registered schema");
        self.schemas.insert(name, schema);
        Ok(())
    }

    /// Looks up a schema by name.
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.schemas.get(name)
    }

    /// Whether a schema with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Registered names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// Validates a node against the named schema.
    ///
    /// The boolean and the appended diagnostics follow the same contract as
    /// [`validate_tree`].
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::UnknownSchema` if the name was never registered.
    pub fn validate(
        &self,
        name: &str,
        node: &dyn TreeNode,
        warnings: &mut Warnings,
    ) -> SchemaResult<bool> {
        let schema = self
            .schemas
            .get(name)
            .ok_or_else(|| SchemaError::UnknownSchema(name.to_string()))?;
        Ok(validate_tree(node, schema, warnings))
    }
}
