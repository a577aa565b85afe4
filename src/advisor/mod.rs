//! Rule-based financial advisor
//!
//! The advisor is not a model: it applies a fixed set of rules to a snapshot
//! of the store and renders canned recommendations. A configurable pause
//! before answering keeps the pacing of the interactive version.

mod rules;
mod snapshot;

pub use rules::{
    evaluate, Advice, CashFlow, GoalAdvice, InvestmentAdvice, SpendingInsight, ACTION_ITEMS,
    RECOMMENDED_SAVINGS_RATE,
};
pub use snapshot::AdvisorSnapshot;

use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::store::FinanceStore;

/// Produces advice after an optional delay
#[derive(Debug, Clone)]
pub struct Advisor {
    delay: Duration,
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl Advisor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Advisor that answers immediately
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Analyse the store and return the advice
    pub fn advise(&self, store: &FinanceStore) -> Advice {
        let snapshot = AdvisorSnapshot::from_store(store);
        if !self.delay.is_zero() {
            debug!(delay_ms = self.delay.as_millis() as u64, "Preparing advice");
            thread::sleep(self.delay);
        }
        evaluate(&snapshot)
    }
}
