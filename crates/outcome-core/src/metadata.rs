//! Metadata attached to every outcome
//!
//! Passive storage: a creation timestamp, an append-only list of warnings and
//! a free-form context map. Each [`Outcome`](crate::Outcome) owns exactly one
//! `Metadata`, created fresh at construction.
//!
//! Mutation goes through `&mut self` and is not synchronized. Sharing one
//! outcome between concurrent writers needs an external lock.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{now, Timestamp};

/// Auxiliary record carried by an outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Creation instant
    timestamp: Timestamp,

    /// Warnings, in insertion order
    warnings: Vec<String>,

    /// Free-form context (last write wins)
    context: HashMap<String, serde_json::Value>,
}

impl Metadata {
    /// Create empty metadata stamped with the current time
    pub fn new() -> Self {
        Self {
            timestamp: now(),
            warnings: Vec::new(),
            context: HashMap::new(),
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Append a warning
    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Append several warnings, keeping their order
    pub fn extend_warnings<I, S>(&mut self, warnings: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.warnings.extend(warnings.into_iter().map(Into::into));
    }

    pub fn context(&self) -> &HashMap<String, serde_json::Value> {
        &self.context
    }

    /// Look up a single context entry
    pub fn context_value(&self, key: &str) -> Option<&serde_json::Value> {
        self.context.get(key)
    }

    /// Insert or overwrite a context entry, returning the previous value
    pub fn insert_context(
        &mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Option<serde_json::Value> {
        self.context.insert(key.into(), value.into())
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new()
    }
}
