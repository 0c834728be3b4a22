//! Diagnostic collection for validation runs.
//!
//! One `Warnings` instance is created per top-level validation call and
//! threaded by mutable reference through the entire recursive walk. The
//! engine only ever appends; it never clears or replaces the log. Concurrent
//! validations must each use their own instance.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered, append-only log of human-readable diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warnings {
    entries: Vec<String>,
}

impl Warnings {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends one diagnostic.
    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.push(message.into());
    }

    /// Number of diagnostics collected so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the diagnostics in append order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// The diagnostics as a slice, in append order.
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Consumes the log, yielding the raw diagnostics.
    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

impl fmt::Display for Warnings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl IntoIterator for Warnings {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
