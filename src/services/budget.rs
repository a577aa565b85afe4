//! Budget service
//!
//! Compares spending per category with the limits set in the store and
//! derives suggested limits from income.

use std::fmt;

use crate::error::{FinanceError, FinanceResult};
use crate::models::category::{suggested_percent, BUDGET_CATEGORIES};
use crate::models::{Expense, Money};
use crate::store::FinanceStore;

/// Share of income at which a budget is flagged as near its limit
pub const NEAR_LIMIT_PERCENT: f64 = 80.0;

/// Limits written by the 50-30-20 plan, as shares of income
pub const FIFTY_THIRTY_TWENTY: &[(&str, f64)] = &[
    ("needs", 50.0),
    ("wants", 30.0),
    ("savings", 20.0),
    ("food", 15.0),
    ("transport", 10.0),
    ("bills", 25.0),
    ("shopping", 15.0),
    ("entertainment", 15.0),
];

/// Sum of the expenses recorded under `category`
pub fn category_spend(expenses: &[Expense], category: &str) -> Money {
    expenses
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.amount)
        .sum()
}

/// How spending compares with a limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetState {
    UnderBudget,
    NearLimit,
    OverBudget,
}

impl fmt::Display for BudgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnderBudget => write!(f, "On track"),
            Self::NearLimit => write!(f, "Near limit"),
            Self::OverBudget => write!(f, "Over budget"),
        }
    }
}

/// Spending against the limit of one category
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    /// Spent as a share of the limit; 0 when no limit is set
    pub percentage: f64,
    pub state: BudgetState,
}

impl BudgetStatus {
    pub fn evaluate(category: impl Into<String>, limit: Money, spent: Money) -> Self {
        let percentage = if limit.is_positive() {
            Money::ratio_percent(spent, limit)
        } else {
            0.0
        };
        let state = if percentage > 100.0 {
            BudgetState::OverBudget
        } else if percentage > NEAR_LIMIT_PERCENT {
            BudgetState::NearLimit
        } else {
            BudgetState::UnderBudget
        };

        Self {
            category: category.into(),
            limit,
            spent,
            percentage,
            state,
        }
    }

    /// Whether a positive limit is set
    pub fn is_active(&self) -> bool {
        self.limit.is_positive()
    }

    /// Amount spent beyond the limit, zero when within it
    pub fn overage(&self) -> Money {
        if self.state == BudgetState::OverBudget {
            self.spent - self.limit
        } else {
            Money::zero()
        }
    }
}

/// A suggested limit for a budget category
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSuggestion {
    pub category: &'static str,
    pub name: &'static str,
    pub percent: f64,
    pub amount: Money,
}

/// Service for budget limits
pub struct BudgetService<'a> {
    store: &'a mut FinanceStore,
}

impl<'a> BudgetService<'a> {
    pub fn new(store: &'a mut FinanceStore) -> Self {
        Self { store }
    }

    /// Income used as the base for suggestions: the given monthly figure when
    /// it is positive, otherwise the recorded total
    pub fn base_income(&self, monthly_income: Option<Money>) -> Money {
        monthly_income
            .filter(|m| m.is_positive())
            .unwrap_or_else(|| self.store.total_income())
    }

    /// Set a limit directly
    pub fn set_limit(&mut self, category: &str, amount: Money) -> FinanceResult<()> {
        if category.trim().is_empty() {
            return Err(FinanceError::Validation("Category is required".into()));
        }
        if amount.is_negative() {
            return Err(FinanceError::Validation(
                "Budget limit cannot be negative".into(),
            ));
        }
        self.store.set_budget_limit(category.trim(), amount)
    }

    /// Suggested limits for every budget category
    pub fn suggestions(&self, monthly_income: Option<Money>) -> Vec<BudgetSuggestion> {
        let income = self.base_income(monthly_income);
        BUDGET_CATEGORIES
            .iter()
            .map(|c| BudgetSuggestion {
                category: c.id,
                name: c.name,
                percent: c.suggested_percent,
                amount: income.percent(c.suggested_percent),
            })
            .collect()
    }

    /// Apply the suggested share for one category; returns the new limit
    pub fn apply_suggestion(
        &mut self,
        category: &str,
        monthly_income: Option<Money>,
    ) -> FinanceResult<Money> {
        let percent = suggested_percent(category).ok_or_else(|| {
            FinanceError::Validation(format!("No suggested share for category '{}'", category))
        })?;
        let amount = self.base_income(monthly_income).percent(percent);
        self.store.set_budget_limit(category, amount)?;
        Ok(amount)
    }

    /// Write the 50-30-20 plan; returns the limits that were set
    pub fn apply_fifty_thirty_twenty(
        &mut self,
        monthly_income: Option<Money>,
    ) -> FinanceResult<Vec<(&'static str, Money)>> {
        let income = self.base_income(monthly_income);
        let mut applied = Vec::with_capacity(FIFTY_THIRTY_TWENTY.len());
        for (category, percent) in FIFTY_THIRTY_TWENTY {
            let amount = income.percent(*percent);
            self.store.set_budget_limit(*category, amount)?;
            applied.push((*category, amount));
        }
        Ok(applied)
    }

    /// Status of one category
    pub fn status(&self, category: &str) -> BudgetStatus {
        BudgetStatus::evaluate(
            category,
            self.store.budget_limits().limit_or_zero(category),
            category_spend(self.store.expenses(), category),
        )
    }

    /// Status of every budget category, followed by any other category that
    /// has a limit
    pub fn all_statuses(&self) -> Vec<BudgetStatus> {
        let mut statuses: Vec<BudgetStatus> =
            BUDGET_CATEGORIES.iter().map(|c| self.status(c.id)).collect();
        for (category, _) in self.store.budget_limits().iter() {
            if !statuses.iter().any(|s| s.category == category) {
                statuses.push(self.status(category));
            }
        }
        statuses
    }

    /// Categories with a positive limit
    pub fn active_budgets(&self) -> Vec<BudgetStatus> {
        self.all_statuses()
            .into_iter()
            .filter(BudgetStatus::is_active)
            .collect()
    }

    /// Categories spending beyond their limit
    pub fn over_budget(&self) -> Vec<BudgetStatus> {
        self.active_budgets()
            .into_iter()
            .filter(|s| s.state == BudgetState::OverBudget)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Income;
    use crate::storage::MemoryBackend;

    fn create_test_store() -> FinanceStore {
        FinanceStore::open(MemoryBackend::new()).unwrap()
    }

    #[test]
    fn test_status_thresholds() {
        let limit = Money::from_units(100);
        assert_eq!(
            BudgetStatus::evaluate("food", limit, Money::from_units(80)).state,
            BudgetState::UnderBudget
        );
        assert_eq!(
            BudgetStatus::evaluate("food", limit, Money::from_units(81)).state,
            BudgetState::NearLimit
        );
        assert_eq!(
            BudgetStatus::evaluate("food", limit, Money::from_units(100)).state,
            BudgetState::NearLimit
        );
        assert_eq!(
            BudgetStatus::evaluate("food", limit, Money::from_units(101)).state,
            BudgetState::OverBudget
        );

        let unset = BudgetStatus::evaluate("food", Money::zero(), Money::from_units(50));
        assert_eq!(unset.percentage, 0.0);
        assert!(!unset.is_active());
        assert_eq!(unset.overage(), Money::zero());
    }

    #[test]
    fn test_over_budget_by_hundred() {
        let mut store = create_test_store();
        store
            .add_expense(Expense::new(Money::from_units(350), "food", "").with_id("1"))
            .unwrap();
        store
            .add_expense(Expense::new(Money::from_units(250), "food", "").with_id("2"))
            .unwrap();

        let mut service = BudgetService::new(&mut store);
        service.set_limit("food", Money::from_units(500)).unwrap();

        let status = service.status("food");
        assert_eq!(status.spent, Money::from_units(600));
        assert_eq!(status.state, BudgetState::OverBudget);
        assert_eq!(status.overage(), Money::from_units(100));
        assert_eq!(service.over_budget().len(), 1);
    }

    #[test]
    fn test_suggestions_use_recorded_income_by_default() {
        let mut store = create_test_store();
        store
            .add_income(Income::new(Money::from_units(10000), "salary", "Acme"))
            .unwrap();
        let service = BudgetService::new(&mut store);

        let suggestions = service.suggestions(None);
        assert_eq!(suggestions.len(), 6);
        assert_eq!(suggestions[0].category, "food");
        assert_eq!(suggestions[0].amount, Money::from_units(3000));

        let custom = service.suggestions(Some(Money::from_units(20000)));
        assert_eq!(custom[1].amount, Money::from_units(3000));
    }

    #[test]
    fn test_apply_suggestion() {
        let mut store = create_test_store();
        let mut service = BudgetService::new(&mut store);

        let amount = service
            .apply_suggestion("transport", Some(Money::from_units(40000)))
            .unwrap();
        assert_eq!(amount, Money::from_units(6000));
        assert!(service.apply_suggestion("pets", None).is_err());
        assert_eq!(
            store.budget_limits().get("transport"),
            Some(Money::from_units(6000))
        );
    }

    #[test]
    fn test_fifty_thirty_twenty() {
        let mut store = create_test_store();
        let mut service = BudgetService::new(&mut store);

        let applied = service
            .apply_fifty_thirty_twenty(Some(Money::from_units(100000)))
            .unwrap();
        assert_eq!(applied.len(), 8);

        let limits = store.budget_limits();
        assert_eq!(limits.get("needs"), Some(Money::from_units(50000)));
        assert_eq!(limits.get("wants"), Some(Money::from_units(30000)));
        assert_eq!(limits.get("savings"), Some(Money::from_units(20000)));
        assert_eq!(limits.get("bills"), Some(Money::from_units(25000)));
        assert_eq!(limits.get("entertainment"), Some(Money::from_units(15000)));
    }

    #[test]
    fn test_negative_limit_rejected() {
        let mut store = create_test_store();
        let mut service = BudgetService::new(&mut store);
        assert!(service
            .set_limit("food", Money::from_cents(-1))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_all_statuses_include_custom_categories() {
        let mut store = create_test_store();
        let mut service = BudgetService::new(&mut store);
        service.set_limit("pets", Money::from_units(10)).unwrap();

        let statuses = service.all_statuses();
        assert_eq!(statuses.len(), 7);
        assert_eq!(statuses.last().unwrap().category, "pets");
        assert_eq!(service.active_budgets().len(), 1);
    }
}
