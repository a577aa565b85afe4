//! Savings goal model
//!
//! A named target amount with a deadline. The saved amount moves through
//! [`SavingsGoalPatch`], which is the only supported way to edit a goal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::RecordId;
use super::money::Money;

/// Validation errors for savings goals and their patches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavingsGoalValidationError {
    EmptyName,
    NonPositiveTarget,
    NegativeCurrent,
}

impl std::fmt::Display for SavingsGoalValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget => write!(f, "Target amount must be greater than zero"),
            Self::NegativeCurrent => write!(f, "Saved amount cannot be negative"),
        }
    }
}

impl std::error::Error for SavingsGoalValidationError {}

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: RecordId,
    pub name: String,
    pub target_amount: Money,
    #[serde(default)]
    pub current_amount: Money,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub icon: String,
}

impl SavingsGoal {
    /// Create a goal with nothing saved yet
    pub fn new(
        name: impl Into<String>,
        target_amount: Money,
        deadline: NaiveDate,
        category: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            deadline,
            category: category.into(),
            icon: icon.into(),
        }
    }

    /// Replace the generated id
    pub fn with_id(mut self, id: impl Into<RecordId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the amount already saved
    pub fn with_current(mut self, current: Money) -> Self {
        self.current_amount = current;
        self
    }

    /// Percentage of the target reached; a zero target counts as reached
    pub fn progress(&self) -> f64 {
        if self.target_amount.is_zero() {
            return 100.0;
        }
        Money::ratio_percent(self.current_amount, self.target_amount)
    }

    /// Amount still missing (negative once the goal is exceeded)
    pub fn remaining(&self) -> Money {
        self.target_amount - self.current_amount
    }

    /// Whether the saved amount has reached the target
    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), SavingsGoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(SavingsGoalValidationError::EmptyName);
        }
        if !self.target_amount.is_positive() {
            return Err(SavingsGoalValidationError::NonPositiveTarget);
        }
        if self.current_amount.is_negative() {
            return Err(SavingsGoalValidationError::NegativeCurrent);
        }
        Ok(())
    }
}

/// A typed partial update of a savings goal; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavingsGoalPatch {
    pub name: Option<String>,
    pub target_amount: Option<Money>,
    pub current_amount: Option<Money>,
    pub deadline: Option<NaiveDate>,
    pub category: Option<String>,
    pub icon: Option<String>,
}

impl SavingsGoalPatch {
    /// Patch that only sets the saved amount
    pub fn current_amount(amount: Money) -> Self {
        Self {
            current_amount: Some(amount),
            ..Self::default()
        }
    }

    /// True when the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Validate the fields the patch sets
    pub fn validate(&self) -> Result<(), SavingsGoalValidationError> {
        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Err(SavingsGoalValidationError::EmptyName);
        }
        if matches!(self.target_amount, Some(target) if !target.is_positive()) {
            return Err(SavingsGoalValidationError::NonPositiveTarget);
        }
        if matches!(self.current_amount, Some(current) if current.is_negative()) {
            return Err(SavingsGoalValidationError::NegativeCurrent);
        }
        Ok(())
    }

    /// Merge the patch into `goal`
    pub fn apply_to(&self, goal: &mut SavingsGoal) {
        if let Some(name) = &self.name {
            goal.name = name.clone();
        }
        if let Some(target) = self.target_amount {
            goal.target_amount = target;
        }
        if let Some(current) = self.current_amount {
            goal.current_amount = current;
        }
        if let Some(deadline) = self.deadline {
            goal.deadline = deadline;
        }
        if let Some(category) = &self.category {
            goal.category = category.clone();
        }
        if let Some(icon) = &self.icon {
            goal.icon = icon.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal() -> SavingsGoal {
        SavingsGoal::new(
            "New phone",
            Money::from_units(10000),
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            "phone",
            "📱",
        )
        .with_id("g1")
    }

    #[test]
    fn test_progress_and_remaining() {
        let goal = goal().with_current(Money::from_units(2000));
        assert!((goal.progress() - 20.0).abs() < 1e-9);
        assert_eq!(goal.remaining(), Money::from_units(8000));
        assert!(!goal.is_complete());
    }

    #[test]
    fn test_zero_target_counts_as_reached() {
        let mut goal = goal();
        goal.target_amount = Money::zero();
        assert_eq!(goal.progress(), 100.0);
    }

    #[test]
    fn test_patch_merges_only_set_fields() {
        let mut goal = goal();
        let patch = SavingsGoalPatch {
            name: Some("Laptop".into()),
            current_amount: Some(Money::from_units(500)),
            ..SavingsGoalPatch::default()
        };
        patch.apply_to(&mut goal);

        assert_eq!(goal.name, "Laptop");
        assert_eq!(goal.current_amount, Money::from_units(500));
        assert_eq!(goal.target_amount, Money::from_units(10000));
        assert_eq!(goal.icon, "📱");
    }

    #[test]
    fn test_patch_validation() {
        assert!(SavingsGoalPatch::default().is_empty());
        let patch = SavingsGoalPatch::current_amount(Money::from_cents(-1));
        assert_eq!(
            patch.validate(),
            Err(SavingsGoalValidationError::NegativeCurrent)
        );
        let patch = SavingsGoalPatch {
            target_amount: Some(Money::zero()),
            ..SavingsGoalPatch::default()
        };
        assert_eq!(
            patch.validate(),
            Err(SavingsGoalValidationError::NonPositiveTarget)
        );
    }
}
