//! The finance store
//!
//! [`FinanceStore`] owns the in-memory copy of every collection and mirrors
//! each change to its storage key. It is passed explicitly (`&FinanceStore` /
//! `&mut FinanceStore`) to whatever needs it; there is no global instance.
//!
//! Expenses, incomes and investments each append a derived [`Transaction`]
//! sharing their id when added, and take it with them when removed. Raising a
//! savings goal's saved amount appends a savings transaction for the
//! difference. Bills and budget limits never touch the log.

mod consistency;
mod state;

pub use consistency::ConsistencyReport;
pub use state::StoreState;

use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    Bill, BillPatch, BudgetLimits, Expense, Income, Investment, Money, Record, RecordId,
    SavingsGoal, SavingsGoalPatch, Transaction, TransactionKind,
};
use crate::storage::{decode_json, encode_json, StorageBackend, StorageKey};

/// Authoritative in-memory finance data mirrored to a [`StorageBackend`]
pub struct FinanceStore {
    backend: Box<dyn StorageBackend>,
    state: StoreState,
    expenses: Vec<Expense>,
    incomes: Vec<Income>,
    budget_limits: BudgetLimits,
    savings_goals: Vec<SavingsGoal>,
    investments: Vec<Investment>,
    bills: Vec<Bill>,
    transactions: Vec<Transaction>,
}

impl FinanceStore {
    /// Create an empty, not yet loaded store on top of `backend`
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            state: StoreState::Uninitialized,
            expenses: Vec::new(),
            incomes: Vec::new(),
            budget_limits: BudgetLimits::new(),
            savings_goals: Vec::new(),
            investments: Vec::new(),
            bills: Vec::new(),
            transactions: Vec::new(),
        }
    }

    /// Create a store and load it
    pub fn open(backend: impl StorageBackend + 'static) -> FinanceResult<Self> {
        let mut store = Self::new(backend);
        store.load()?;
        Ok(store)
    }

    /// Current lifecycle phase
    pub fn state(&self) -> StoreState {
        self.state
    }

    /// Where the data lives
    pub fn location(&self) -> String {
        self.backend.describe()
    }

    /// Load every collection from the backend
    ///
    /// Missing keys load as empty collections. Malformed or unreadable keys are
    /// logged and also load as empty. Only a backend that cannot be prepared
    /// fails the load, leaving the store in [`StoreState::LoadFailed`].
    pub fn load(&mut self) -> FinanceResult<()> {
        if !self.state.can_start_loading() {
            return Err(FinanceError::NotReady(self.state));
        }

        self.state = StoreState::Loading;
        info!(location = %self.backend.describe(), "Loading finance data");

        if let Err(e) = self.backend.prepare() {
            warn!(error = %e, "Storage medium unavailable");
            self.state = StoreState::LoadFailed;
            return Err(e);
        }

        let backend = self.backend.as_ref();
        self.expenses = load_collection(backend, StorageKey::Expenses);
        self.incomes = load_collection(backend, StorageKey::Incomes);
        self.budget_limits = load_collection(backend, StorageKey::Budgets);
        self.savings_goals = load_collection(backend, StorageKey::SavingsGoals);
        self.investments = load_collection(backend, StorageKey::Investments);
        self.bills = load_collection(backend, StorageKey::Bills);
        self.transactions = load_collection(backend, StorageKey::Transactions);

        self.state = StoreState::Ready;
        debug!(
            expenses = self.expenses.len(),
            incomes = self.incomes.len(),
            goals = self.savings_goals.len(),
            investments = self.investments.len(),
            bills = self.bills.len(),
            transactions = self.transactions.len(),
            "Finance data loaded"
        );
        Ok(())
    }

    fn ensure_ready(&self) -> FinanceResult<()> {
        if self.state.accepts_writes() {
            Ok(())
        } else {
            Err(FinanceError::NotReady(self.state))
        }
    }

    /// Rewrite one collection in full
    fn persist(&mut self, key: StorageKey) -> FinanceResult<()> {
        self.ensure_ready()?;

        let contents = match key {
            StorageKey::Expenses => encode_json(&self.expenses)?,
            StorageKey::Incomes => encode_json(&self.incomes)?,
            StorageKey::Budgets => encode_json(&self.budget_limits)?,
            StorageKey::SavingsGoals => encode_json(&self.savings_goals)?,
            StorageKey::Investments => encode_json(&self.investments)?,
            StorageKey::Bills => encode_json(&self.bills)?,
            StorageKey::Transactions => encode_json(&self.transactions)?,
        };

        debug!(key = %key, bytes = contents.len(), "Persisting collection");
        self.backend.write(key, &contents)
    }

    /// Drop the derived transaction of a removed source record
    fn retract_transaction(&mut self, id: &RecordId, kind: TransactionKind) {
        self.transactions
            .retain(|txn| !(txn.id == *id && txn.kind == kind));
    }

    // --- Expenses ---

    /// Record an expense and its transaction
    pub fn add_expense(&mut self, expense: Expense) -> FinanceResult<()> {
        self.ensure_ready()?;
        self.transactions.push(Transaction::from_expense(&expense));
        self.expenses.push(expense);
        self.persist(StorageKey::Expenses)?;
        self.persist(StorageKey::Transactions)
    }

    /// Remove an expense and its transaction; returns whether it existed
    pub fn remove_expense(&mut self, id: &RecordId) -> FinanceResult<bool> {
        self.ensure_ready()?;
        let removed = remove_by_id(&mut self.expenses, id);
        self.retract_transaction(id, TransactionKind::Expense);
        self.persist(StorageKey::Expenses)?;
        self.persist(StorageKey::Transactions)?;
        Ok(removed)
    }

    // --- Incomes ---

    /// Record an income and its transaction
    pub fn add_income(&mut self, income: Income) -> FinanceResult<()> {
        self.ensure_ready()?;
        self.transactions.push(Transaction::from_income(&income));
        self.incomes.push(income);
        self.persist(StorageKey::Incomes)?;
        self.persist(StorageKey::Transactions)
    }

    /// Remove an income and its transaction; returns whether it existed
    pub fn remove_income(&mut self, id: &RecordId) -> FinanceResult<bool> {
        self.ensure_ready()?;
        let removed = remove_by_id(&mut self.incomes, id);
        self.retract_transaction(id, TransactionKind::Income);
        self.persist(StorageKey::Incomes)?;
        self.persist(StorageKey::Transactions)?;
        Ok(removed)
    }

    // --- Budget limits ---

    /// Insert or replace the limit for a category
    pub fn set_budget_limit(
        &mut self,
        category: impl Into<String>,
        amount: Money,
    ) -> FinanceResult<()> {
        self.ensure_ready()?;
        self.budget_limits.set(category, amount);
        self.persist(StorageKey::Budgets)
    }

    // --- Savings goals ---

    /// Add a savings goal; the initial saved amount is not logged
    pub fn add_savings_goal(&mut self, goal: SavingsGoal) -> FinanceResult<()> {
        self.ensure_ready()?;
        self.savings_goals.push(goal);
        self.persist(StorageKey::SavingsGoals)
    }

    /// Merge `patch` into a goal
    ///
    /// When the saved amount goes up, exactly one savings transaction carrying
    /// the increase is appended. Decreases are not logged.
    pub fn update_savings_goal(
        &mut self,
        id: &RecordId,
        patch: &SavingsGoalPatch,
    ) -> FinanceResult<SavingsGoal> {
        self.ensure_ready()?;

        let goal = self
            .savings_goals
            .iter_mut()
            .find(|g| g.id == *id)
            .ok_or_else(|| FinanceError::goal_not_found(id.as_str()))?;

        // Contributions are described with the name and category held before the merge
        let before = goal.clone();
        patch.apply_to(goal);
        let updated = goal.clone();

        let logged = updated.current_amount > before.current_amount;
        if logged {
            let delta = updated.current_amount - before.current_amount;
            self.transactions
                .push(Transaction::savings_contribution(&before, delta, Utc::now()));
        }

        self.persist(StorageKey::SavingsGoals)?;
        if logged {
            self.persist(StorageKey::Transactions)?;
        }

        Ok(updated)
    }

    /// Remove a goal; its past contributions stay in the log
    pub fn remove_savings_goal(&mut self, id: &RecordId) -> FinanceResult<bool> {
        self.ensure_ready()?;
        let removed = remove_by_id(&mut self.savings_goals, id);
        self.persist(StorageKey::SavingsGoals)?;
        Ok(removed)
    }

    // --- Investments ---

    /// Record an investment and its transaction
    pub fn add_investment(&mut self, investment: Investment) -> FinanceResult<()> {
        self.ensure_ready()?;
        self.transactions
            .push(Transaction::from_investment(&investment));
        self.investments.push(investment);
        self.persist(StorageKey::Investments)?;
        self.persist(StorageKey::Transactions)
    }

    /// Remove an investment and its transaction; returns whether it existed
    pub fn remove_investment(&mut self, id: &RecordId) -> FinanceResult<bool> {
        self.ensure_ready()?;
        let removed = remove_by_id(&mut self.investments, id);
        self.retract_transaction(id, TransactionKind::Investment);
        self.persist(StorageKey::Investments)?;
        self.persist(StorageKey::Transactions)?;
        Ok(removed)
    }

    // --- Bills ---

    pub fn add_bill(&mut self, bill: Bill) -> FinanceResult<()> {
        self.ensure_ready()?;
        self.bills.push(bill);
        self.persist(StorageKey::Bills)
    }

    /// Merge `patch` into a bill
    pub fn update_bill(&mut self, id: &RecordId, patch: &BillPatch) -> FinanceResult<Bill> {
        self.ensure_ready()?;

        let bill = self
            .bills
            .iter_mut()
            .find(|b| b.id == *id)
            .ok_or_else(|| FinanceError::bill_not_found(id.as_str()))?;
        patch.apply_to(bill);
        let updated = bill.clone();

        self.persist(StorageKey::Bills)?;
        Ok(updated)
    }

    pub fn remove_bill(&mut self, id: &RecordId) -> FinanceResult<bool> {
        self.ensure_ready()?;
        let removed = remove_by_id(&mut self.bills, id);
        self.persist(StorageKey::Bills)?;
        Ok(removed)
    }

    /// Delete every key and empty every collection
    pub fn clear(&mut self) -> FinanceResult<()> {
        self.ensure_ready()?;
        for key in StorageKey::ALL {
            self.backend.remove(key)?;
        }

        self.expenses.clear();
        self.incomes.clear();
        self.budget_limits = BudgetLimits::new();
        self.savings_goals.clear();
        self.investments.clear();
        self.bills.clear();
        self.transactions.clear();
        info!("Cleared all finance data");
        Ok(())
    }

    // --- Collections ---

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn incomes(&self) -> &[Income] {
        &self.incomes
    }

    pub fn budget_limits(&self) -> &BudgetLimits {
        &self.budget_limits
    }

    pub fn savings_goals(&self) -> &[SavingsGoal] {
        &self.savings_goals
    }

    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    /// The transaction log in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn find_savings_goal(&self, id: &RecordId) -> Option<&SavingsGoal> {
        self.savings_goals.iter().find(|g| g.id == *id)
    }

    pub fn find_bill(&self, id: &RecordId) -> Option<&Bill> {
        self.bills.iter().find(|b| b.id == *id)
    }

    // --- Aggregates (recomputed on every call) ---

    pub fn total_income(&self) -> Money {
        self.incomes.iter().map(|i| i.amount).sum()
    }

    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Income minus expenses
    pub fn balance(&self) -> Money {
        self.total_income() - self.total_expenses()
    }

    /// Sum of the saved amounts of all goals
    pub fn total_savings(&self) -> Money {
        self.savings_goals.iter().map(|g| g.current_amount).sum()
    }

    pub fn total_investments(&self) -> Money {
        self.investments.iter().map(|i| i.amount).sum()
    }

    /// Cross-check the transaction log against its source collections
    pub fn consistency_report(&self) -> ConsistencyReport {
        ConsistencyReport::check(self)
    }
}

fn load_collection<T>(backend: &dyn StorageBackend, key: StorageKey) -> T
where
    T: DeserializeOwned + Default,
{
    match backend.read(key) {
        Ok(Some(contents)) => decode_json(&contents).unwrap_or_else(|e| {
            warn!(key = %key, error = %e, "Ignoring malformed collection");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            warn!(key = %key, error = %e, "Failed to read collection");
            T::default()
        }
    }
}

fn remove_by_id<T: Record>(items: &mut Vec<T>, id: &RecordId) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinancePaths;
    use crate::storage::{FileBackend, MemoryBackend};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn ready_store() -> (MemoryBackend, FinanceStore) {
        let backend = MemoryBackend::new();
        let store = FinanceStore::open(backend.clone()).unwrap();
        (backend, store)
    }

    fn expense(id: &str, units: i64, category: &str) -> Expense {
        Expense::new(Money::from_units(units), category, "test").with_id(id)
    }

    fn income(id: &str, units: i64, kind: &str) -> Income {
        Income::new(Money::from_units(units), kind, "Acme").with_id(id)
    }

    fn goal(id: &str, target: i64, current: i64) -> SavingsGoal {
        SavingsGoal::new(
            "Emergency",
            Money::from_units(target),
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            "emergency",
            "🚨",
        )
        .with_id(id)
        .with_current(Money::from_units(current))
    }

    fn bill(id: &str) -> Bill {
        Bill::new(
            "Electricity",
            Money::from_units(1200),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            "Utilities",
        )
        .with_id(id)
    }

    /// Backend whose writes always fail
    struct ReadOnlyBackend;

    impl StorageBackend for ReadOnlyBackend {
        fn prepare(&mut self) -> FinanceResult<()> {
            Ok(())
        }
        fn read(&self, _key: StorageKey) -> FinanceResult<Option<String>> {
            Ok(None)
        }
        fn write(&mut self, key: StorageKey, _contents: &str) -> FinanceResult<()> {
            Err(FinanceError::Storage(format!("{} is read-only", key)))
        }
        fn remove(&mut self, _key: StorageKey) -> FinanceResult<()> {
            Ok(())
        }
        fn describe(&self) -> String {
            "read-only".into()
        }
    }

    /// Backend that refuses writes to a single key
    #[derive(Clone)]
    struct FailingKeyBackend {
        inner: MemoryBackend,
        failing: StorageKey,
    }

    impl StorageBackend for FailingKeyBackend {
        fn prepare(&mut self) -> FinanceResult<()> {
            self.inner.prepare()
        }
        fn read(&self, key: StorageKey) -> FinanceResult<Option<String>> {
            self.inner.read(key)
        }
        fn write(&mut self, key: StorageKey, contents: &str) -> FinanceResult<()> {
            if key == self.failing {
                return Err(FinanceError::Storage(format!("{} write failed", key)));
            }
            self.inner.write(key, contents)
        }
        fn remove(&mut self, key: StorageKey) -> FinanceResult<()> {
            self.inner.remove(key)
        }
        fn describe(&self) -> String {
            "failing-key".into()
        }
    }

    /// Backend that cannot be prepared
    struct UnavailableBackend;

    impl StorageBackend for UnavailableBackend {
        fn prepare(&mut self) -> FinanceResult<()> {
            Err(FinanceError::Storage("medium unavailable".into()))
        }
        fn read(&self, _key: StorageKey) -> FinanceResult<Option<String>> {
            Ok(None)
        }
        fn write(&mut self, _key: StorageKey, _contents: &str) -> FinanceResult<()> {
            Ok(())
        }
        fn remove(&mut self, _key: StorageKey) -> FinanceResult<()> {
            Ok(())
        }
        fn describe(&self) -> String {
            "unavailable".into()
        }
    }

    #[test]
    fn test_mutations_rejected_before_load() {
        let backend = MemoryBackend::new();
        let mut store = FinanceStore::new(backend.clone());

        assert_eq!(store.state(), StoreState::Uninitialized);
        let err = store.add_expense(expense("1", 10, "food")).unwrap_err();
        assert!(err.is_not_ready());
        assert!(store.expenses().is_empty());
        assert!(backend.is_empty());
    }

    #[test]
    fn test_load_failure_then_retry() {
        let mut store = FinanceStore::new(UnavailableBackend);
        assert!(store.load().is_err());
        assert_eq!(store.state(), StoreState::LoadFailed);
        assert!(store
            .set_budget_limit("food", Money::from_units(1))
            .unwrap_err()
            .is_not_ready());
        // A retry is permitted; it fails again on the same medium
        assert!(store.load().is_err());
    }

    #[test]
    fn test_load_does_not_write() {
        let backend = MemoryBackend::new();
        let store = FinanceStore::open(backend.clone()).unwrap();
        assert_eq!(store.state(), StoreState::Ready);
        assert!(backend.is_empty());
    }

    #[test]
    fn test_malformed_collection_loads_empty() {
        let backend = MemoryBackend::new();
        backend.insert_raw(StorageKey::Expenses, "{not json");
        backend.insert_raw(
            StorageKey::Budgets,
            r#"{"food": 50000}"#,
        );

        let store = FinanceStore::open(backend.clone()).unwrap();
        assert_eq!(store.state(), StoreState::Ready);
        assert!(store.expenses().is_empty());
        assert_eq!(
            store.budget_limits().get("food"),
            Some(Money::from_units(500))
        );
        // Nothing is rewritten until a mutation happens
        assert_eq!(
            backend.raw(StorageKey::Expenses).as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_add_expense_appends_transaction() {
        let (backend, mut store) = ready_store();
        store.add_expense(expense("e1", 1000, "food")).unwrap();

        assert_eq!(store.expenses().len(), 1);
        assert_eq!(store.transactions().len(), 1);
        let txn = &store.transactions()[0];
        assert_eq!(txn.id, "e1");
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert!(backend.raw(StorageKey::Expenses).is_some());
        assert!(backend.raw(StorageKey::Transactions).is_some());
    }

    #[test]
    fn test_scenario_income_and_expense_totals() {
        let (_backend, mut store) = ready_store();
        store.add_expense(expense("e1", 1000, "food")).unwrap();
        store.add_income(income("i1", 5000, "salary")).unwrap();

        assert_eq!(store.total_expenses(), Money::from_units(1000));
        assert_eq!(store.total_income(), Money::from_units(5000));
        assert_eq!(store.balance(), Money::from_units(4000));
        let rate = Money::ratio_percent(store.balance(), store.total_income());
        assert!((rate - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_one_transaction_per_present_source_record() {
        let (_backend, mut store) = ready_store();
        store.add_expense(expense("e1", 10, "food")).unwrap();
        store.add_expense(expense("e2", 20, "transport")).unwrap();
        store.add_income(income("i1", 100, "salary")).unwrap();
        store
            .add_investment(
                Investment::new("Index", "mutual_fund", Money::from_units(50), 12.0).with_id("v1"),
            )
            .unwrap();
        store.remove_expense(&RecordId::new("e1")).unwrap();
        store.add_income(income("i2", 30, "freelance")).unwrap();
        store.remove_investment(&RecordId::new("v1")).unwrap();

        let mut txn_ids: Vec<_> = store
            .transactions()
            .iter()
            .map(|t| t.id.as_str().to_string())
            .collect();
        txn_ids.sort();
        assert_eq!(txn_ids, vec!["e2", "i1", "i2"]);
        assert!(store.consistency_report().is_consistent());
        assert_eq!(store.balance(), store.total_income() - store.total_expenses());
    }

    #[test]
    fn test_remove_preserves_order_of_the_rest() {
        let (_backend, mut store) = ready_store();
        for id in ["a", "b", "c", "d"] {
            store.add_expense(expense(id, 1, "food")).unwrap();
        }

        assert!(store.remove_expense(&RecordId::new("b")).unwrap());
        assert!(!store.remove_expense(&RecordId::new("zzz")).unwrap());

        let ids: Vec<_> = store.expenses().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "d"]);
        let txn_ids: Vec<_> = store.transactions().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(txn_ids, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_only_retracts_matching_kind() {
        let (_backend, mut store) = ready_store();
        store.add_expense(expense("same", 10, "food")).unwrap();
        store.add_income(income("same", 10, "salary")).unwrap();

        store.remove_expense(&RecordId::new("same")).unwrap();

        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.transactions()[0].kind, TransactionKind::Income);
    }

    #[test]
    fn test_scenario_goal_contribution() {
        let (_backend, mut store) = ready_store();
        store.add_savings_goal(goal("g1", 10000, 0)).unwrap();
        assert!(store.transactions().is_empty());

        let updated = store
            .update_savings_goal(
                &RecordId::new("g1"),
                &SavingsGoalPatch::current_amount(Money::from_units(2000)),
            )
            .unwrap();

        assert!((updated.progress() - 20.0).abs() < 1e-9);
        assert_eq!(store.transactions().len(), 1);
        let txn = &store.transactions()[0];
        assert_eq!(txn.kind, TransactionKind::Savings);
        assert_eq!(txn.amount, Money::from_units(2000));
        assert_eq!(store.total_savings(), Money::from_units(2000));
    }

    #[test]
    fn test_goal_decrease_logs_nothing() {
        let (_backend, mut store) = ready_store();
        store.add_savings_goal(goal("g1", 10000, 5000)).unwrap();

        store
            .update_savings_goal(
                &RecordId::new("g1"),
                &SavingsGoalPatch::current_amount(Money::from_units(3000)),
            )
            .unwrap();
        store
            .update_savings_goal(
                &RecordId::new("g1"),
                &SavingsGoalPatch {
                    name: Some("Rainy day".into()),
                    ..SavingsGoalPatch::default()
                },
            )
            .unwrap();

        assert!(store.transactions().is_empty());
        assert_eq!(store.total_savings(), Money::from_units(3000));
        assert_eq!(store.savings_goals()[0].name, "Rainy day");
    }

    #[test]
    fn test_contribution_logged_even_when_goal_write_fails() {
        let backend = FailingKeyBackend {
            inner: MemoryBackend::new(),
            failing: StorageKey::SavingsGoals,
        };
        let mut store = FinanceStore::open(backend).unwrap();
        store.savings_goals.push(goal("g1", 100, 0));

        let err = store
            .update_savings_goal(
                &RecordId::new("g1"),
                &SavingsGoalPatch::current_amount(Money::from_units(40)),
            )
            .unwrap_err();

        assert!(matches!(err, FinanceError::Storage(_)));
        assert_eq!(store.total_savings(), Money::from_units(40));
        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.transactions()[0].amount, Money::from_units(40));
    }

    #[test]
    fn test_contribution_described_with_pre_patch_goal() {
        let (_backend, mut store) = ready_store();
        store.add_savings_goal(goal("g1", 10000, 0)).unwrap();

        let updated = store
            .update_savings_goal(
                &RecordId::new("g1"),
                &SavingsGoalPatch {
                    name: Some("Rainy day".into()),
                    category: Some("other".into()),
                    current_amount: Some(Money::from_units(500)),
                    ..SavingsGoalPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Rainy day");
        let txn = &store.transactions()[0];
        assert_eq!(txn.description, "Contribution to Emergency");
        assert_eq!(txn.category.as_deref(), Some("emergency"));
    }

    #[test]
    fn test_total_savings_sums_goals() {
        let (_backend, mut store) = ready_store();
        store.add_savings_goal(goal("g1", 100, 40)).unwrap();
        store.add_savings_goal(goal("g2", 100, 25)).unwrap();
        assert_eq!(store.total_savings(), Money::from_units(65));

        store.remove_savings_goal(&RecordId::new("g1")).unwrap();
        assert_eq!(store.total_savings(), Money::from_units(25));
    }

    #[test]
    fn test_update_missing_goal_is_not_found() {
        let (_backend, mut store) = ready_store();
        let err = store
            .update_savings_goal(&RecordId::new("nope"), &SavingsGoalPatch::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_removing_goal_keeps_contributions() {
        let (_backend, mut store) = ready_store();
        store.add_savings_goal(goal("g1", 100, 0)).unwrap();
        store
            .update_savings_goal(
                &RecordId::new("g1"),
                &SavingsGoalPatch::current_amount(Money::from_units(10)),
            )
            .unwrap();
        store.remove_savings_goal(&RecordId::new("g1")).unwrap();

        assert_eq!(store.transactions().len(), 1);
    }

    #[test]
    fn test_bill_update_and_remove() {
        let (_backend, mut store) = ready_store();
        store.add_bill(bill("b1")).unwrap();
        store.add_bill(bill("b2")).unwrap();

        let updated = store
            .update_bill(&RecordId::new("b1"), &BillPatch::paid(true))
            .unwrap();
        assert!(updated.paid);
        assert!(store.find_bill(&RecordId::new("b1")).unwrap().paid);

        assert!(store.remove_bill(&RecordId::new("b2")).unwrap());
        assert_eq!(store.bills().len(), 1);
        assert!(store.transactions().is_empty());

        assert!(store
            .update_bill(&RecordId::new("b2"), &BillPatch::paid(true))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_scenario_budget_limit_exceeded() {
        let (_backend, mut store) = ready_store();
        store
            .set_budget_limit("food", Money::from_units(500))
            .unwrap();
        store.add_expense(expense("e1", 350, "food")).unwrap();
        store.add_expense(expense("e2", 250, "food")).unwrap();

        let spent: Money = store
            .expenses()
            .iter()
            .filter(|e| e.category == "food")
            .map(|e| e.amount)
            .sum();
        let limit = store.budget_limits().get("food").unwrap();
        assert_eq!(spent, Money::from_units(600));
        assert_eq!(spent - limit, Money::from_units(100));
    }

    #[test]
    fn test_round_trip_through_backend() {
        let (backend, mut store) = ready_store();
        store.add_expense(expense("e1", 10, "food")).unwrap();
        store.add_income(income("i1", 100, "salary")).unwrap();
        store.add_savings_goal(goal("g1", 1000, 0)).unwrap();
        store
            .update_savings_goal(
                &RecordId::new("g1"),
                &SavingsGoalPatch::current_amount(Money::from_units(5)),
            )
            .unwrap();
        store
            .add_investment(Investment::new("Gold", "gold", Money::from_units(70), 8.5).with_id("v1"))
            .unwrap();
        store.add_bill(bill("b1")).unwrap();
        store
            .set_budget_limit("food", Money::from_units(500))
            .unwrap();

        let reloaded = FinanceStore::open(backend).unwrap();
        assert_eq!(reloaded.expenses(), store.expenses());
        assert_eq!(reloaded.incomes(), store.incomes());
        assert_eq!(reloaded.savings_goals(), store.savings_goals());
        assert_eq!(reloaded.investments(), store.investments());
        assert_eq!(reloaded.bills(), store.bills());
        assert_eq!(reloaded.transactions(), store.transactions());
        assert_eq!(reloaded.budget_limits(), store.budget_limits());
    }

    #[test]
    fn test_round_trip_through_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        {
            let mut store = FinanceStore::open(FileBackend::new(paths.data_dir())).unwrap();
            store.add_expense(expense("e1", 42, "shopping")).unwrap();
        }

        let store = FinanceStore::open(FileBackend::new(paths.data_dir())).unwrap();
        assert_eq!(store.expenses().len(), 1);
        assert_eq!(store.expenses()[0].category, "shopping");
        assert!(paths.data_dir().join("finance-expenses.json").exists());
    }

    #[test]
    fn test_write_failure_propagates() {
        let mut store = FinanceStore::open(ReadOnlyBackend).unwrap();
        let err = store.add_bill(bill("b1")).unwrap_err();
        assert!(matches!(err, FinanceError::Storage(_)));
        // The in-memory change is not rolled back
        assert_eq!(store.bills().len(), 1);
    }

    #[test]
    fn test_clear_empties_everything() {
        let (backend, mut store) = ready_store();
        store.add_expense(expense("e1", 10, "food")).unwrap();
        store
            .set_budget_limit("food", Money::from_units(5))
            .unwrap();

        store.clear().unwrap();

        assert!(store.expenses().is_empty());
        assert!(store.transactions().is_empty());
        assert!(store.budget_limits().is_empty());
        assert!(backend.is_empty());
    }
}
