//! Read-only view of the figures the advisor reasons about

use crate::models::{BudgetLimits, Money, SavingsGoal};
use crate::services::dashboard::{savings_rate, CategoryTotal, DashboardService};
use crate::store::FinanceStore;

/// Everything the advisor rules look at, detached from the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvisorSnapshot {
    pub total_income: Money,
    pub total_expenses: Money,
    pub total_savings: Money,
    pub total_investments: Money,
    /// Expense totals per category in first-seen order
    pub category_totals: Vec<CategoryTotal>,
    pub budget_limits: BudgetLimits,
    pub goals: Vec<SavingsGoal>,
}

impl AdvisorSnapshot {
    pub fn from_store(store: &FinanceStore) -> Self {
        Self {
            total_income: store.total_income(),
            total_expenses: store.total_expenses(),
            total_savings: store.total_savings(),
            total_investments: store.total_investments(),
            category_totals: DashboardService::new(store).expenses_by_category(),
            budget_limits: store.budget_limits().clone(),
            goals: store.savings_goals().to_vec(),
        }
    }

    pub fn savings_rate(&self) -> f64 {
        savings_rate(self.total_income, self.total_expenses)
    }

    pub fn net_worth(&self) -> Money {
        self.total_income - self.total_expenses + self.total_savings + self.total_investments
    }

    /// Highest-spending category; on a tie the one seen first wins
    pub fn top_category(&self) -> Option<&CategoryTotal> {
        self.category_totals.iter().fold(None, |top, candidate| match top {
            Some(current) if current.amount >= candidate.amount => Some(current),
            _ => Some(candidate),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(category: &str, units: i64) -> CategoryTotal {
        CategoryTotal {
            category: category.to_string(),
            amount: Money::from_units(units),
        }
    }

    #[test]
    fn test_top_category_first_wins_ties() {
        let snapshot = AdvisorSnapshot {
            category_totals: vec![total("food", 300), total("shopping", 500), total("bills", 500)],
            ..AdvisorSnapshot::default()
        };
        assert_eq!(snapshot.top_category().unwrap().category, "shopping");

        assert!(AdvisorSnapshot::default().top_category().is_none());
    }

    #[test]
    fn test_net_worth() {
        let snapshot = AdvisorSnapshot {
            total_income: Money::from_units(1000),
            total_expenses: Money::from_units(400),
            total_savings: Money::from_units(50),
            total_investments: Money::from_units(25),
            ..AdvisorSnapshot::default()
        };
        assert_eq!(snapshot.net_worth(), Money::from_units(675));
        assert!((snapshot.savings_rate() - 60.0).abs() < 1e-9);
    }
}
