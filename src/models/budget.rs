//! Budget limits
//!
//! Per-category spending ceilings. They are independent of every other
//! collection and only ever compared against summed expenses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::money::Money;

/// Mapping from category name to its limit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetLimits(BTreeMap<String, Money>);

impl BudgetLimits {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the limit for a category
    pub fn set(&mut self, category: impl Into<String>, limit: Money) {
        self.0.insert(category.into(), limit);
    }

    /// Limit for a category, if one was set
    pub fn get(&self, category: &str) -> Option<Money> {
        self.0.get(category).copied()
    }

    /// Limit for a category, zero when unset
    pub fn limit_or_zero(&self, category: &str) -> Money {
        self.get(category).unwrap_or_default()
    }

    /// Iterate over `(category, limit)` pairs in category order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
