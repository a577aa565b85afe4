//! Dashboard service
//!
//! Headline numbers and breakdowns recomputed from the store on every call.

use crate::models::{Money, Transaction};
use crate::store::FinanceStore;

/// Share of income not spent, as a percentage; 0 when there is no income
pub fn savings_rate(income: Money, expenses: Money) -> f64 {
    Money::ratio_percent(income - expenses, income)
}

/// A category (or income type) and the amount recorded under it
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Money,
}

/// Sum amounts per label, keeping the order in which labels first appear
fn group_totals<'r>(items: impl Iterator<Item = (&'r str, Money)>) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for (label, amount) in items {
        match totals.iter_mut().find(|t| t.category == label) {
            Some(total) => total.amount += amount,
            None => totals.push(CategoryTotal {
                category: label.to_string(),
                amount,
            }),
        }
    }
    totals
}

/// Headline figures of the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    pub total_savings: Money,
    pub total_investments: Money,
    pub savings_rate: f64,
    /// Balance plus savings plus investments
    pub net_worth: Money,
    pub expense_count: usize,
    pub income_count: usize,
    pub goal_count: usize,
    pub investment_count: usize,
    pub unpaid_bill_count: usize,
    pub transaction_count: usize,
}

/// Service for dashboard figures
pub struct DashboardService<'a> {
    store: &'a FinanceStore,
}

impl<'a> DashboardService<'a> {
    pub fn new(store: &'a FinanceStore) -> Self {
        Self { store }
    }

    /// Savings rate of the whole data set
    pub fn savings_rate(&self) -> f64 {
        savings_rate(self.store.total_income(), self.store.total_expenses())
    }

    pub fn summary(&self) -> DashboardSummary {
        let store = self.store;
        let balance = store.balance();

        DashboardSummary {
            total_income: store.total_income(),
            total_expenses: store.total_expenses(),
            balance,
            total_savings: store.total_savings(),
            total_investments: store.total_investments(),
            savings_rate: self.savings_rate(),
            net_worth: balance + store.total_savings() + store.total_investments(),
            expense_count: store.expenses().len(),
            income_count: store.incomes().len(),
            goal_count: store.savings_goals().len(),
            investment_count: store.investments().len(),
            unpaid_bill_count: store.bills().iter().filter(|b| !b.paid).count(),
            transaction_count: store.transactions().len(),
        }
    }

    /// Expense totals per category, in first-seen order
    pub fn expenses_by_category(&self) -> Vec<CategoryTotal> {
        group_totals(
            self.store
                .expenses()
                .iter()
                .map(|e| (e.category.as_str(), e.amount)),
        )
    }

    /// Income totals per type, in first-seen order
    pub fn income_by_type(&self) -> Vec<CategoryTotal> {
        group_totals(
            self.store
                .incomes()
                .iter()
                .map(|i| (i.income_type.as_str(), i.amount)),
        )
    }

    /// Transaction history, newest first
    pub fn transaction_history(&self) -> Vec<&'a Transaction> {
        let mut history: Vec<&Transaction> = self.store.transactions().iter().collect();
        history.sort_by(|a, b| b.date.cmp(&a.date));
        history
    }

    /// The last `count` logged transactions, most recently logged first
    pub fn recent_transactions(&self, count: usize) -> Vec<&'a Transaction> {
        self.store
            .transactions()
            .iter()
            .rev()
            .take(count)
            .collect()
    }
}
