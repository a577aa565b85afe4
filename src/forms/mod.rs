//! Entry forms
//!
//! Raw user input (as typed on the command line) is turned into records here,
//! before anything reaches the store. Missing required fields produce the same
//! notice for the whole form; optional fields fall back to their defaults.

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::category::goal_icon;
use crate::models::{
    Bill, BillPatch, Expense, Income, Investment, Money, SavingsGoal, SavingsGoalPatch,
};

/// Date format accepted by every form
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Description given to expenses entered without one
pub const DEFAULT_EXPENSE_DESCRIPTION: &str = "Expense";

/// Source given to incomes entered without one
pub const DEFAULT_INCOME_SOURCE: &str = "Income";

/// Treat blank input as absent
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a non-negative amount
pub fn parse_amount(raw: &str) -> FinanceResult<Money> {
    let amount = Money::parse(raw).map_err(|e| {
        FinanceError::Validation(format!(
            "Invalid amount '{}'. Use a format like '1500' or '249.99' ({})",
            raw, e
        ))
    })?;
    if amount.is_negative() {
        return Err(FinanceError::Validation(format!(
            "Amount cannot be negative: {}",
            raw
        )));
    }
    Ok(amount)
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(raw: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        FinanceError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", raw))
    })
}

/// Parse a percentage such as an annual return
pub fn parse_percent(raw: &str) -> FinanceResult<f64> {
    raw.trim()
        .trim_end_matches('%')
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FinanceError::Validation(format!("Invalid percentage '{}'", raw)))
}

/// Input of the expense tracker
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub amount: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl ExpenseForm {
    pub fn into_expense(self) -> FinanceResult<Expense> {
        let (Some(amount), Some(category)) = (present(self.amount), present(self.category))
        else {
            return Err(FinanceError::Validation(
                "Please enter amount and category".into(),
            ));
        };

        let description = present(self.description)
            .unwrap_or_else(|| DEFAULT_EXPENSE_DESCRIPTION.to_string());
        let expense = Expense::new(parse_amount(&amount)?, category, description);
        expense
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        Ok(expense)
    }
}

/// Input of the income tracker
#[derive(Debug, Clone, Default)]
pub struct IncomeForm {
    pub amount: Option<String>,
    pub income_type: Option<String>,
    pub source: Option<String>,
}

impl IncomeForm {
    pub fn into_income(self) -> FinanceResult<Income> {
        let (Some(amount), Some(income_type)) = (present(self.amount), present(self.income_type))
        else {
            return Err(FinanceError::Validation(
                "Please enter amount and income type".into(),
            ));
        };

        let source =
            present(self.source).unwrap_or_else(|| DEFAULT_INCOME_SOURCE.to_string());
        let income = Income::new(parse_amount(&amount)?, income_type, source);
        income
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        Ok(income)
    }
}

/// Input for recording an investment
#[derive(Debug, Clone, Default)]
pub struct InvestmentForm {
    pub name: Option<String>,
    pub investment_type: Option<String>,
    pub amount: Option<String>,
    pub returns: Option<String>,
}

impl InvestmentForm {
    pub fn into_investment(self) -> FinanceResult<Investment> {
        let (Some(name), Some(investment_type), Some(amount)) = (
            present(self.name),
            present(self.investment_type),
            present(self.amount),
        ) else {
            return Err(FinanceError::Validation(
                "Please enter name, type and amount".into(),
            ));
        };

        let returns = match present(self.returns) {
            Some(raw) => parse_percent(&raw)?,
            None => 0.0,
        };
        let investment = Investment::new(name, investment_type, parse_amount(&amount)?, returns);
        investment
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        Ok(investment)
    }
}

/// Input of the savings planner's "new goal" form
#[derive(Debug, Clone, Default)]
pub struct SavingsGoalForm {
    pub name: Option<String>,
    pub target_amount: Option<String>,
    pub current_amount: Option<String>,
    pub deadline: Option<String>,
    pub category: Option<String>,
}

impl SavingsGoalForm {
    pub fn into_goal(self) -> FinanceResult<SavingsGoal> {
        let (Some(name), Some(target), Some(deadline), Some(category)) = (
            present(self.name),
            present(self.target_amount),
            present(self.deadline),
            present(self.category),
        ) else {
            return Err(FinanceError::Validation("Please fill in all fields".into()));
        };

        let current = match present(self.current_amount) {
            Some(raw) => parse_amount(&raw)?,
            None => Money::zero(),
        };
        let icon = goal_icon(&category);
        let goal = SavingsGoal::new(name, parse_amount(&target)?, parse_date(&deadline)?, category, icon)
            .with_current(current);
        goal.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        Ok(goal)
    }
}

/// Edits to an existing goal; every field optional
#[derive(Debug, Clone, Default)]
pub struct SavingsGoalEdit {
    pub name: Option<String>,
    pub target_amount: Option<String>,
    pub current_amount: Option<String>,
    pub deadline: Option<String>,
    pub category: Option<String>,
}

impl SavingsGoalEdit {
    /// Build a validated patch; a new category also brings its icon
    pub fn into_patch(self) -> FinanceResult<SavingsGoalPatch> {
        let patch = SavingsGoalPatch {
            name: self.name,
            target_amount: self.target_amount.as_deref().map(parse_amount).transpose()?,
            current_amount: self.current_amount.as_deref().map(parse_amount).transpose()?,
            deadline: self.deadline.as_deref().map(parse_date).transpose()?,
            icon: self.category.as_deref().map(|c| goal_icon(c).to_string()),
            category: self.category,
        };
        if patch.is_empty() {
            return Err(FinanceError::Validation("Nothing to update".into()));
        }
        patch
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        Ok(patch)
    }
}

/// Input of the bills reminder
#[derive(Debug, Clone)]
pub struct BillForm {
    pub name: Option<String>,
    pub amount: Option<String>,
    pub due_date: Option<String>,
    pub category: Option<String>,
    pub recurring: bool,
}

impl Default for BillForm {
    fn default() -> Self {
        Self {
            name: None,
            amount: None,
            due_date: None,
            category: None,
            recurring: true,
        }
    }
}

impl BillForm {
    pub fn into_bill(self) -> FinanceResult<Bill> {
        let (Some(name), Some(amount), Some(due_date), Some(category)) = (
            present(self.name),
            present(self.amount),
            present(self.due_date),
            present(self.category),
        ) else {
            return Err(FinanceError::Validation(
                "Please fill in all required fields".into(),
            ));
        };

        let mut bill = Bill::new(name, parse_amount(&amount)?, parse_date(&due_date)?, category);
        bill.recurring = self.recurring;
        bill.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        Ok(bill)
    }
}

/// Edits to an existing bill; every field optional
#[derive(Debug, Clone, Default)]
pub struct BillEdit {
    pub name: Option<String>,
    pub amount: Option<String>,
    pub due_date: Option<String>,
    pub category: Option<String>,
    pub recurring: Option<bool>,
    pub paid: Option<bool>,
}

impl BillEdit {
    pub fn into_patch(self) -> FinanceResult<BillPatch> {
        let patch = BillPatch {
            name: self.name,
            amount: self.amount.as_deref().map(parse_amount).transpose()?,
            due_date: self.due_date.as_deref().map(parse_date).transpose()?,
            category: self.category,
            recurring: self.recurring,
            paid: self.paid,
        };
        if patch.is_empty() {
            return Err(FinanceError::Validation("Nothing to update".into()));
        }
        patch
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        Ok(patch)
    }
}
