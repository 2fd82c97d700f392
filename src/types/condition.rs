//! The `Condition` block of a policy statement.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::values::Values;

/// Condition operator (`StringEquals`, `ArnLikeIfExists`, ...) to condition
/// key (`aws:SourceArn`, ...) to one or many values.
///
/// Operators and keys are kept as written; matching on keys is
/// case-insensitive and happens in the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition(BTreeMap<String, BTreeMap<String, Values>>);

impl Condition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one operator/key entry and return the updated condition.
    pub fn with_entry(
        mut self,
        operator: impl Into<String>,
        key: impl Into<String>,
        values: impl Into<Values>,
    ) -> Self {
        self.0
            .entry(operator.into())
            .or_default()
            .insert(key.into(), values.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Operator names in sorted order.
    pub fn operators(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Every `(operator, key, values)` triple, sorted by operator then key.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &Values)> {
        self.0.iter().flat_map(|(operator, keys)| {
            keys.iter()
                .map(move |(key, values)| (operator.as_str(), key.as_str(), values))
        })
    }
}
