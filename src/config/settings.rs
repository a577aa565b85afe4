//! User settings for Kiro Finance
//!
//! Display preferences plus the knobs of the advisor, reports and bill reminders.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::error::FinanceError;
use crate::reports::DEFAULT_RECENT_TRANSACTIONS;
use crate::services::bills::DUE_SOON_DAYS;

/// User settings for Kiro Finance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Artificial delay before the advisor answers, in milliseconds
    #[serde(default = "default_advisor_delay_ms")]
    pub advisor_delay_ms: u64,

    /// Number of transactions listed in the "recent transactions" report page
    #[serde(default = "default_recent_transactions")]
    pub recent_transactions: usize,

    /// Bills due within this many days are flagged as due soon
    #[serde(default = "default_due_soon_days")]
    pub due_soon_days: i64,
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_advisor_delay_ms() -> u64 {
    1500
}

fn default_recent_transactions() -> usize {
    DEFAULT_RECENT_TRANSACTIONS
}

fn default_due_soon_days() -> i64 {
    DUE_SOON_DAYS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            advisor_delay_ms: default_advisor_delay_ms(),
            recent_transactions: default_recent_transactions(),
            due_soon_days: default_due_soon_days(),
        }
    }
}

impl Settings {
    /// The advisor delay as a [`Duration`]
    pub fn advisor_delay(&self) -> Duration {
        Duration::from_millis(self.advisor_delay_ms)
    }

    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinanceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FinanceError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
