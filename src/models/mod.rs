//! Core data models for Kiro Finance
//!
//! This module contains the record types the finance store keeps: expenses,
//! incomes, savings goals, investments, bills, the derived transaction log
//! and per-category budget limits.

pub mod bill;
pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod income;
pub mod investment;
pub mod money;
pub mod savings_goal;
pub mod transaction;

pub use bill::{Bill, BillPatch};
pub use budget::BudgetLimits;
pub use expense::Expense;
pub use ids::RecordId;
pub use income::Income;
pub use investment::Investment;
pub use money::Money;
pub use savings_goal::{SavingsGoal, SavingsGoalPatch};
pub use transaction::{Transaction, TransactionKind};

/// A stored record addressable by id
pub trait Record {
    fn id(&self) -> &RecordId;
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> &RecordId {
                    &self.id
                }
            }
        )*
    };
}

impl_record!(Expense, Income, SavingsGoal, Investment, Bill, Transaction);
