//! Storage keys
//!
//! Every collection lives under its own key and is rewritten in full on
//! each change.

use std::fmt;

/// One durable key per collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageKey {
    Expenses,
    Incomes,
    Budgets,
    SavingsGoals,
    Investments,
    Bills,
    Transactions,
}

impl StorageKey {
    /// All keys in load order
    pub const ALL: [StorageKey; 7] = [
        StorageKey::Expenses,
        StorageKey::Incomes,
        StorageKey::Budgets,
        StorageKey::SavingsGoals,
        StorageKey::Investments,
        StorageKey::Bills,
        StorageKey::Transactions,
    ];

    /// The key name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expenses => "finance-expenses",
            Self::Incomes => "finance-incomes",
            Self::Budgets => "finance-budgets",
            Self::SavingsGoals => "finance-savings-goals",
            Self::Investments => "finance-investments",
            Self::Bills => "finance-bills",
            Self::Transactions => "finance-transactions",
        }
    }

    /// File name used by the file backend
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_distinct() {
        let names: HashSet<_> = StorageKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            StorageKey::SavingsGoals.file_name(),
            "finance-savings-goals.json"
        );
    }
}
