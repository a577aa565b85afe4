//! Transaction log consistency
//!
//! Persistence writes a source collection and the transaction log as two
//! separate keys, so an interrupted write can leave them out of step. This
//! check finds such drift without repairing it.

use std::collections::HashSet;

use crate::models::{RecordId, Transaction, TransactionKind};

use super::FinanceStore;

/// Drift between the transaction log and its source collections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsistencyReport {
    /// Log entries whose expense, income or investment no longer exists
    pub orphaned_transactions: Vec<Transaction>,
    /// Source records with no matching log entry
    pub missing_transactions: Vec<(TransactionKind, RecordId)>,
    /// Ids that appear more than once in the log for the same kind
    pub duplicate_transactions: Vec<(TransactionKind, RecordId)>,
}

impl ConsistencyReport {
    pub(super) fn check(store: &FinanceStore) -> Self {
        let sources: [(TransactionKind, Vec<&RecordId>); 3] = [
            (
                TransactionKind::Expense,
                store.expenses().iter().map(|e| &e.id).collect(),
            ),
            (
                TransactionKind::Income,
                store.incomes().iter().map(|i| &i.id).collect(),
            ),
            (
                TransactionKind::Investment,
                store.investments().iter().map(|i| &i.id).collect(),
            ),
        ];

        let mut report = Self::default();
        let mut seen: HashSet<(TransactionKind, &RecordId)> = HashSet::new();

        for txn in store.transactions() {
            if !txn.kind.has_source_record() {
                continue;
            }
            if !seen.insert((txn.kind, &txn.id)) {
                report
                    .duplicate_transactions
                    .push((txn.kind, txn.id.clone()));
                continue;
            }
            let owned = sources
                .iter()
                .find(|(kind, _)| *kind == txn.kind)
                .is_some_and(|(_, ids)| ids.contains(&&txn.id));
            if !owned {
                report.orphaned_transactions.push(txn.clone());
            }
        }

        for (kind, ids) in &sources {
            for id in ids {
                if !seen.contains(&(*kind, *id)) {
                    report.missing_transactions.push((*kind, (*id).clone()));
                }
            }
        }

        report
    }

    /// True when no drift was found
    pub fn is_consistent(&self) -> bool {
        self.orphaned_transactions.is_empty()
            && self.missing_transactions.is_empty()
            && self.duplicate_transactions.is_empty()
    }

    /// Total number of problems found
    pub fn issue_count(&self) -> usize {
        self.orphaned_transactions.len()
            + self.missing_transactions.len()
            + self.duplicate_transactions.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Expense, Money};
    use crate::storage::{MemoryBackend, StorageKey};
    use crate::store::FinanceStore;

    #[test]
    fn test_consistent_store() {
        let mut store = FinanceStore::open(MemoryBackend::new()).unwrap();
        store
            .add_expense(Expense::new(Money::from_units(5), "food", "").with_id("e1"))
            .unwrap();

        let report = store.consistency_report();
        assert!(report.is_consistent());
        assert_eq!(report.issue_count(), 0);
    }

    #[test]
    fn test_detects_drift_between_keys() {
        let backend = MemoryBackend::new();
        backend.insert_raw(
            StorageKey::Expenses,
            r#"[{"id":"e1","amount":100,"category":"food","date":"2025-01-01T00:00:00Z"}]"#,
        );
        backend.insert_raw(
            StorageKey::Transactions,
            r#"[
                {"id":"gone","type":"expense","amount":100,"date":"2025-01-01T00:00:00Z"},
                {"id":"g1-5","type":"savings","amount":100,"date":"2025-01-01T00:00:00Z"}
            ]"#,
        );

        let store = FinanceStore::open(backend).unwrap();
        let report = store.consistency_report();

        assert_eq!(report.orphaned_transactions.len(), 1);
        assert_eq!(report.orphaned_transactions[0].id, "gone");
        assert_eq!(report.missing_transactions.len(), 1);
        assert_eq!(report.missing_transactions[0].1, "e1");
        assert_eq!(report.issue_count(), 2);
    }
}
