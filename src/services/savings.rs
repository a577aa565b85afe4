//! Savings planner
//!
//! Goal progress, deadlines and the monthly amount still needed, plus
//! contributions that raise a goal's saved amount.

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, RecordId, SavingsGoal, SavingsGoalPatch};
use crate::store::FinanceStore;

/// Days counted as one month when spreading the remaining amount
const DAYS_PER_MONTH: f64 = 30.0;

/// Whole days left until `deadline`, rounded up; negative once it has passed
pub fn days_left(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

/// Amount to put aside every month to reach the goal by its deadline
///
/// With no days left the whole remaining amount is due now.
pub fn monthly_required(goal: &SavingsGoal, today: NaiveDate) -> Money {
    let remaining = goal.remaining();
    let days = days_left(goal.deadline, today);
    if days > 0 {
        let months = days as f64 / DAYS_PER_MONTH;
        Money::from_cents((remaining.cents() as f64 / months).round() as i64)
    } else {
        remaining
    }
}

/// Planner view of one goal
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub goal: SavingsGoal,
    pub progress: f64,
    pub remaining: Money,
    pub days_left: i64,
    pub monthly_required: Money,
}

impl GoalProgress {
    pub fn compute(goal: &SavingsGoal, today: NaiveDate) -> Self {
        Self {
            progress: goal.progress(),
            remaining: goal.remaining(),
            days_left: days_left(goal.deadline, today),
            monthly_required: monthly_required(goal, today),
            goal: goal.clone(),
        }
    }

    pub fn is_overdue(&self) -> bool {
        self.days_left < 0 && !self.goal.is_complete()
    }
}

/// Service for savings goals
pub struct SavingsService<'a> {
    store: &'a mut FinanceStore,
}

impl<'a> SavingsService<'a> {
    pub fn new(store: &'a mut FinanceStore) -> Self {
        Self { store }
    }

    pub fn create(&mut self, goal: SavingsGoal) -> FinanceResult<SavingsGoal> {
        goal.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        self.store.add_savings_goal(goal.clone())?;
        Ok(goal)
    }

    /// Progress of every goal as of `today`
    pub fn progress(&self, today: NaiveDate) -> Vec<GoalProgress> {
        self.store
            .savings_goals()
            .iter()
            .map(|g| GoalProgress::compute(g, today))
            .collect()
    }

    /// Add money to a goal; the store logs the contribution
    pub fn contribute(&mut self, id: &RecordId, amount: Money) -> FinanceResult<SavingsGoal> {
        if !amount.is_positive() {
            return Err(FinanceError::Validation(
                "Contribution must be greater than zero".into(),
            ));
        }

        let goal = self
            .store
            .find_savings_goal(id)
            .ok_or_else(|| FinanceError::goal_not_found(id.as_str()))?;
        let patch = SavingsGoalPatch::current_amount(goal.current_amount + amount);
        self.store.update_savings_goal(id, &patch)
    }

    /// Apply a validated patch
    pub fn update(&mut self, id: &RecordId, patch: &SavingsGoalPatch) -> FinanceResult<SavingsGoal> {
        patch
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        self.store.update_savings_goal(id, patch)
    }

    /// Remove a goal, failing when it does not exist
    pub fn delete(&mut self, id: &RecordId) -> FinanceResult<()> {
        if self.store.remove_savings_goal(id)? {
            Ok(())
        } else {
            Err(FinanceError::goal_not_found(id.as_str()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use crate::storage::MemoryBackend;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(target: i64, current: i64, deadline: NaiveDate) -> SavingsGoal {
        SavingsGoal::new("Laptop", Money::from_units(target), deadline, "phone", "📱")
            .with_id("g1")
            .with_current(Money::from_units(current))
    }

    #[test]
    fn test_monthly_required() {
        let today = date(2025, 1, 1);
        // 90 days is three months
        let g = goal(4000, 1000, date(2025, 4, 1));
        assert_eq!(days_left(g.deadline, today), 90);
        assert_eq!(monthly_required(&g, today), Money::from_units(1000));

        // Past the deadline the remainder is due at once
        let g = goal(4000, 1000, date(2024, 12, 1));
        assert_eq!(monthly_required(&g, today), Money::from_units(3000));
        assert!(GoalProgress::compute(&g, today).is_overdue());
    }

    #[test]
    fn test_contribute_logs_transaction() {
        let mut store = FinanceStore::open(MemoryBackend::new()).unwrap();
        let mut service = SavingsService::new(&mut store);
        service.create(goal(10000, 0, date(2026, 1, 1))).unwrap();

        let updated = service
            .contribute(&RecordId::new("g1"), Money::from_units(2000))
            .unwrap();
        assert_eq!(updated.current_amount, Money::from_units(2000));
        let updated = service
            .contribute(&RecordId::new("g1"), Money::from_units(500))
            .unwrap();
        assert_eq!(updated.current_amount, Money::from_units(2500));

        let txns = store.transactions();
        assert_eq!(txns.len(), 2);
        assert!(txns.iter().all(|t| t.kind == TransactionKind::Savings));
        assert_eq!(txns[1].amount, Money::from_units(500));
        assert_eq!(txns[0].description, "Contribution to Laptop");
    }

    #[test]
    fn test_contribute_rejects_non_positive() {
        let mut store = FinanceStore::open(MemoryBackend::new()).unwrap();
        let mut service = SavingsService::new(&mut store);
        service.create(goal(100, 0, date(2026, 1, 1))).unwrap();

        assert!(service
            .contribute(&RecordId::new("g1"), Money::zero())
            .unwrap_err()
            .is_validation());
        assert!(service
            .contribute(&RecordId::new("missing"), Money::from_units(1))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_create_rejects_zero_target() {
        let mut store = FinanceStore::open(MemoryBackend::new()).unwrap();
        let mut service = SavingsService::new(&mut store);
        assert!(service.create(goal(0, 0, date(2026, 1, 1))).is_err());
        assert!(store.savings_goals().is_empty());
    }

    #[test]
    fn test_delete_missing_goal() {
        let mut store = FinanceStore::open(MemoryBackend::new()).unwrap();
        let mut service = SavingsService::new(&mut store);
        assert!(service.delete(&RecordId::new("nope")).unwrap_err().is_not_found());
    }
}
