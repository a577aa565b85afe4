//! Bills reminder
//!
//! Upcoming and paid bills with their due status.

use std::fmt;

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Bill, BillPatch, Money, RecordId};
use crate::store::FinanceStore;

/// Default window, in days, for flagging a bill as due soon
pub const DUE_SOON_DAYS: i64 = 3;

/// Where a bill stands relative to its due date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    DueSoon,
    Upcoming,
}

impl DueStatus {
    /// Classify by days until due; `due_soon_days` is inclusive
    pub fn from_days(days: i64, due_soon_days: i64) -> Self {
        if days < 0 {
            Self::Overdue
        } else if days <= due_soon_days {
            Self::DueSoon
        } else {
            Self::Upcoming
        }
    }
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overdue => write!(f, "Overdue"),
            Self::DueSoon => write!(f, "Due soon"),
            Self::Upcoming => write!(f, "Upcoming"),
        }
    }
}

/// A bill with its due status as of some day
#[derive(Debug, Clone, PartialEq)]
pub struct BillReminder {
    pub bill: Bill,
    pub days_until_due: i64,
    pub status: DueStatus,
}

/// Service for bills
pub struct BillService<'a> {
    store: &'a mut FinanceStore,
    due_soon_days: i64,
}

impl<'a> BillService<'a> {
    pub fn new(store: &'a mut FinanceStore) -> Self {
        Self {
            store,
            due_soon_days: DUE_SOON_DAYS,
        }
    }

    /// Use a different due-soon window
    pub fn with_due_soon_days(mut self, days: i64) -> Self {
        self.due_soon_days = days;
        self
    }

    pub fn create(&mut self, bill: Bill) -> FinanceResult<Bill> {
        bill.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        self.store.add_bill(bill.clone())?;
        Ok(bill)
    }

    /// Unpaid bills sorted by due date
    pub fn upcoming(&self, today: NaiveDate) -> Vec<BillReminder> {
        let mut unpaid: Vec<&Bill> = self.store.bills().iter().filter(|b| !b.paid).collect();
        unpaid.sort_by_key(|b| b.due_date);
        unpaid
            .into_iter()
            .map(|bill| {
                let days = bill.days_until_due(today);
                BillReminder {
                    bill: bill.clone(),
                    days_until_due: days,
                    status: DueStatus::from_days(days, self.due_soon_days),
                }
            })
            .collect()
    }

    /// Bills marked as paid, in stored order
    pub fn paid(&self) -> Vec<Bill> {
        self.store.bills().iter().filter(|b| b.paid).cloned().collect()
    }

    /// Sum of unpaid bill amounts
    pub fn total_unpaid(&self) -> Money {
        self.store
            .bills()
            .iter()
            .filter(|b| !b.paid)
            .map(|b| b.amount)
            .sum()
    }

    /// Flip the paid flag
    pub fn toggle_paid(&mut self, id: &RecordId) -> FinanceResult<Bill> {
        let bill = self
            .store
            .find_bill(id)
            .ok_or_else(|| FinanceError::bill_not_found(id.as_str()))?;
        let patch = BillPatch::paid(!bill.paid);
        self.store.update_bill(id, &patch)
    }

    /// Apply a validated patch
    pub fn update(&mut self, id: &RecordId, patch: &BillPatch) -> FinanceResult<Bill> {
        patch
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        self.store.update_bill(id, patch)
    }

    /// Remove a bill, failing when it does not exist
    pub fn delete(&mut self, id: &RecordId) -> FinanceResult<()> {
        if self.store.remove_bill(id)? {
            Ok(())
        } else {
            Err(FinanceError::bill_not_found(id.as_str()))
        }
    }
}
