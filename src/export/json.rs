//! JSON Export functionality
//!
//! Exports every collection of the store to JSON with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    Bill, BudgetLimits, Expense, Income, Investment, SavingsGoal, Transaction, TransactionKind,
};
use crate::store::FinanceStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub expenses: Vec<Expense>,
    pub incomes: Vec<Income>,
    pub budget_limits: BudgetLimits,
    pub savings_goals: Vec<SavingsGoal>,
    pub investments: Vec<Investment>,
    pub bills: Vec<Bill>,
    pub transactions: Vec<Transaction>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub income_count: usize,
    pub goal_count: usize,
    pub investment_count: usize,
    pub bill_count: usize,
    pub transaction_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Create a new full export from the store
    pub fn from_store(store: &FinanceStore) -> Self {
        let transactions = store.transactions().to_vec();

        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.to_rfc3339());
        let latest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.to_rfc3339());

        let metadata = ExportMetadata {
            expense_count: store.expenses().len(),
            income_count: store.incomes().len(),
            goal_count: store.savings_goals().len(),
            investment_count: store.investments().len(),
            bill_count: store.bills().len(),
            transaction_count: transactions.len(),
            earliest_transaction,
            latest_transaction,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: store.expenses().to_vec(),
            incomes: store.incomes().to_vec(),
            budget_limits: store.budget_limits().clone(),
            savings_goals: store.savings_goals().to_vec(),
            investments: store.investments().to_vec(),
            bills: store.bills().to_vec(),
            transactions,
            metadata,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        // Derived transactions must point at an exported source record
        for txn in &self.transactions {
            let owned = match txn.kind {
                TransactionKind::Expense => self.expenses.iter().any(|e| e.id == txn.id),
                TransactionKind::Income => self.incomes.iter().any(|i| i.id == txn.id),
                TransactionKind::Investment => self.investments.iter().any(|i| i.id == txn.id),
                TransactionKind::Savings => true,
            };
            if !owned {
                return Err(format!(
                    "Transaction {} references unknown {} record",
                    txn.id,
                    txn.kind.to_string().to_lowercase()
                ));
            }
        }

        if self.metadata.transaction_count != self.transactions.len() {
            return Err(format!(
                "Metadata lists {} transactions, export contains {}",
                self.metadata.transaction_count,
                self.transactions.len()
            ));
        }

        Ok(())
    }
}

/// Export all data to JSON
pub fn export_full_json<W: Write>(
    store: &FinanceStore,
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    let export = FullExport::from_store(store);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, SavingsGoalPatch};
    use crate::storage::MemoryBackend;
    use chrono::NaiveDate;

    fn create_test_store() -> FinanceStore {
        let mut store = FinanceStore::open(MemoryBackend::new()).unwrap();
        store
            .add_expense(Expense::new(Money::from_units(120), "food", "Lunch").with_id("e1"))
            .unwrap();
        store
            .add_income(Income::new(Money::from_units(900), "freelance", "Client").with_id("i1"))
            .unwrap();
        store
            .add_savings_goal(
                SavingsGoal::new(
                    "Fund",
                    Money::from_units(1000),
                    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                    "emergency",
                    "🚨",
                )
                .with_id("g1"),
            )
            .unwrap();
        store
            .update_savings_goal(
                &"g1".into(),
                &SavingsGoalPatch::current_amount(Money::from_units(100)),
            )
            .unwrap();
        store
    }

    #[test]
    fn test_full_export() {
        let store = create_test_store();
        let export = FullExport::from_store(&store);

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.expense_count, 1);
        assert_eq!(export.metadata.transaction_count, 3);
        assert!(export.metadata.earliest_transaction.is_some());
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let store = create_test_store();

        let mut json_output = Vec::new();
        export_full_json(&store, &mut json_output, true).unwrap();

        let imported: FullExport = serde_json::from_slice(&json_output).unwrap();
        assert!(imported.validate().is_ok());
        assert_eq!(imported.expenses, store.expenses());
        assert_eq!(imported.savings_goals[0].current_amount, Money::from_units(100));
    }

    #[test]
    fn test_validate_rejects_orphans() {
        let store = create_test_store();
        let mut export = FullExport::from_store(&store);
        export.expenses.clear();

        let err = export.validate().unwrap_err();
        assert!(err.contains("unknown expense record"));
    }
}
