//! Income model
//!
//! A single income record (salary, freelance payment, ...). Same lifecycle
//! as an expense: created and deleted only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::RecordId;
use super::money::Money;

/// Validation errors for incomes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NegativeAmount,
    MissingType,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Income amount cannot be negative"),
            Self::MissingType => write!(f, "Income type is required"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// A recorded income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: RecordId,
    pub amount: Money,
    #[serde(rename = "type")]
    pub income_type: String,
    #[serde(default)]
    pub source: String,
    pub date: DateTime<Utc>,
}

impl Income {
    /// Create an income dated now with a timestamp-derived id
    pub fn new(amount: Money, income_type: impl Into<String>, source: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::from_timestamp(now),
            amount,
            income_type: income_type.into(),
            source: source.into(),
            date: now,
        }
    }

    /// Replace the generated id
    pub fn with_id(mut self, id: impl Into<RecordId>) -> Self {
        self.id = id.into();
        self
    }

    /// Validate the income
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.amount.is_negative() {
            return Err(IncomeValidationError::NegativeAmount);
        }
        if self.income_type.trim().is_empty() {
            return Err(IncomeValidationError::MissingType);
        }
        Ok(())
    }
}
