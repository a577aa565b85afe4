//! Bill reminder model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::RecordId;
use super::money::Money;

/// Validation errors for bills and their patches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillValidationError {
    EmptyName,
    NegativeAmount,
}

impl std::fmt::Display for BillValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Bill name cannot be empty"),
            Self::NegativeAmount => write!(f, "Bill amount cannot be negative"),
        }
    }
}

impl std::error::Error for BillValidationError {}

/// A bill with a due date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: RecordId,
    pub name: String,
    pub amount: Money,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub paid: bool,
}

impl Bill {
    /// Create an unpaid, recurring bill
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        due_date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            name: name.into(),
            amount,
            due_date,
            category: category.into(),
            recurring: true,
            paid: false,
        }
    }

    /// Replace the generated id
    pub fn with_id(mut self, id: impl Into<RecordId>) -> Self {
        self.id = id.into();
        self
    }

    /// Days from `today` until the due date (negative when overdue)
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }

    /// Validate the bill
    pub fn validate(&self) -> Result<(), BillValidationError> {
        if self.name.trim().is_empty() {
            return Err(BillValidationError::EmptyName);
        }
        if self.amount.is_negative() {
            return Err(BillValidationError::NegativeAmount);
        }
        Ok(())
    }
}

/// A typed partial update of a bill; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillPatch {
    pub name: Option<String>,
    pub amount: Option<Money>,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub recurring: Option<bool>,
    pub paid: Option<bool>,
}

impl BillPatch {
    /// Patch that only sets the paid flag
    pub fn paid(paid: bool) -> Self {
        Self {
            paid: Some(paid),
            ..Self::default()
        }
    }

    /// True when the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Validate the fields the patch sets
    pub fn validate(&self) -> Result<(), BillValidationError> {
        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Err(BillValidationError::EmptyName);
        }
        if matches!(self.amount, Some(amount) if amount.is_negative()) {
            return Err(BillValidationError::NegativeAmount);
        }
        Ok(())
    }

    /// Merge the patch into `bill`
    pub fn apply_to(&self, bill: &mut Bill) {
        if let Some(name) = &self.name {
            bill.name = name.clone();
        }
        if let Some(amount) = self.amount {
            bill.amount = amount;
        }
        if let Some(due_date) = self.due_date {
            bill.due_date = due_date;
        }
        if let Some(category) = &self.category {
            bill.category = category.clone();
        }
        if let Some(recurring) = self.recurring {
            bill.recurring = recurring;
        }
        if let Some(paid) = self.paid {
            bill.paid = paid;
        }
    }
}
