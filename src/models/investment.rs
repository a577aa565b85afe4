//! Investment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::RecordId;
use super::money::Money;

/// Validation errors for investments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvestmentValidationError {
    EmptyName,
    NegativeAmount,
}

impl std::fmt::Display for InvestmentValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Investment name cannot be empty"),
            Self::NegativeAmount => write!(f, "Investment amount cannot be negative"),
        }
    }
}

impl std::error::Error for InvestmentValidationError {}

/// A holding in the investment portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub investment_type: String,
    pub amount: Money,
    /// Expected or realised return in percent
    #[serde(default)]
    pub returns: f64,
    pub date: DateTime<Utc>,
}

impl Investment {
    /// Create an investment dated now with a timestamp-derived id
    pub fn new(
        name: impl Into<String>,
        investment_type: impl Into<String>,
        amount: Money,
        returns: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::from_timestamp(now),
            name: name.into(),
            investment_type: investment_type.into(),
            amount,
            returns,
            date: now,
        }
    }

    /// Replace the generated id
    pub fn with_id(mut self, id: impl Into<RecordId>) -> Self {
        self.id = id.into();
        self
    }

    /// Validate the investment
    pub fn validate(&self) -> Result<(), InvestmentValidationError> {
        if self.name.trim().is_empty() {
            return Err(InvestmentValidationError::EmptyName);
        }
        if self.amount.is_negative() {
            return Err(InvestmentValidationError::NegativeAmount);
        }
        Ok(())
    }
}
