//! Transaction model
//!
//! Transactions are a derived log: they are synthesized from expenses,
//! incomes, investments and savings contributions, never entered directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::Expense;
use super::ids::RecordId;
use super::income::Income;
use super::investment::Investment;
use super::money::Money;
use super::savings_goal::SavingsGoal;

/// What produced a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
    Investment,
    Savings,
}

impl TransactionKind {
    /// Whether the transaction mirrors a record that owns it by id
    pub fn has_source_record(&self) -> bool {
        !matches!(self, Self::Savings)
    }

    /// Sign shown in front of the amount in listings
    pub fn sign(&self) -> &'static str {
        match self {
            Self::Income => "+",
            _ => "-",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Investment => write!(f, "Investment"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}

/// An entry of the transaction log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Money,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Transaction {
    /// Log entry for a newly recorded expense (shares the expense id)
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            id: expense.id.clone(),
            kind: TransactionKind::Expense,
            amount: expense.amount,
            description: expense.description.clone(),
            date: expense.date,
            category: Some(expense.category.clone()),
        }
    }

    /// Log entry for a newly recorded income (shares the income id)
    pub fn from_income(income: &Income) -> Self {
        Self {
            id: income.id.clone(),
            kind: TransactionKind::Income,
            amount: income.amount,
            description: format!("{} - {}", income.income_type, income.source),
            date: income.date,
            category: None,
        }
    }

    /// Log entry for a newly recorded investment (shares the investment id)
    pub fn from_investment(investment: &Investment) -> Self {
        Self {
            id: investment.id.clone(),
            kind: TransactionKind::Investment,
            amount: investment.amount,
            description: format!("{} - {}", investment.investment_type, investment.name),
            date: investment.date,
            category: None,
        }
    }

    /// Log entry for money added to a savings goal
    pub fn savings_contribution(goal: &SavingsGoal, delta: Money, at: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::contribution(&goal.id, at),
            kind: TransactionKind::Savings,
            amount: delta,
            description: format!("Contribution to {}", goal.name),
            date: at,
            category: Some(goal.category.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_from_expense() {
        let expense = Expense::new(Money::from_units(250), "food", "Groceries").with_id("e1");
        let txn = Transaction::from_expense(&expense);

        assert_eq!(txn.id, "e1");
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.amount, Money::from_units(250));
        assert_eq!(txn.description, "Groceries");
        assert_eq!(txn.category.as_deref(), Some("food"));
        assert_eq!(txn.date, expense.date);
    }

    #[test]
    fn test_from_income_and_investment_descriptions() {
        let income = Income::new(Money::from_units(5000), "salary", "Acme");
        assert_eq!(Transaction::from_income(&income).description, "salary - Acme");
        assert_eq!(Transaction::from_income(&income).category, None);

        let inv = Investment::new("Nifty 50", "mutual_fund", Money::from_units(1000), 12.0);
        assert_eq!(
            Transaction::from_investment(&inv).description,
            "mutual_fund - Nifty 50"
        );
    }

    #[test]
    fn test_savings_contribution() {
        let goal = SavingsGoal::new(
            "Trip",
            Money::from_units(10000),
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            "travel",
            "✈️",
        )
        .with_id("g9");
        let at = Utc::now();
        let txn = Transaction::savings_contribution(&goal, Money::from_units(2000), at);

        assert_eq!(txn.kind, TransactionKind::Savings);
        assert_eq!(txn.description, "Contribution to Trip");
        assert!(txn.id.as_str().starts_with("g9-"));
        assert_eq!(txn.category.as_deref(), Some("travel"));
    }

    #[test]
    fn test_kind_serializes_lowercase_under_type() {
        let income = Income::new(Money::from_units(1), "salary", "x");
        let json = serde_json::to_value(Transaction::from_income(&income)).unwrap();
        assert_eq!(json["type"], "income");
        assert!(json.get("category").is_none());
    }
}
