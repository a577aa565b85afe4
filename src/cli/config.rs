//! Configuration CLI commands

use clap::Subcommand;

use crate::config::paths::FinancePaths;
use crate::config::settings::Settings;
use crate::error::{FinanceError, FinanceResult};

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show paths and settings
    Show,

    /// Change a setting
    Set {
        /// Setting name (currency_symbol, date_format, advisor_delay_ms,
        /// recent_transactions, due_soon_days)
        key: String,
        /// New value
        value: String,
    },
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> FinanceResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| FinanceError::Validation(format!("Invalid value for {}: '{}'", key, value)))
}

/// Apply `value` to the setting named `key`
pub fn apply_setting(settings: &mut Settings, key: &str, value: &str) -> FinanceResult<()> {
    match key {
        "currency_symbol" => settings.currency_symbol = value.to_string(),
        "date_format" => {
            if value.trim().is_empty() {
                return Err(FinanceError::Validation("Date format cannot be empty".into()));
            }
            settings.date_format = value.to_string();
        }
        "advisor_delay_ms" => settings.advisor_delay_ms = parse_number(key, value)?,
        "recent_transactions" => settings.recent_transactions = parse_number(key, value)?,
        "due_soon_days" => settings.due_soon_days = parse_number(key, value)?,
        other => {
            return Err(FinanceError::Config(format!("Unknown setting '{}'", other)));
        }
    }
    Ok(())
}

/// Handle a config command
pub fn handle_config_command(
    paths: &FinancePaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> FinanceResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("Kiro Finance Configuration");
            println!("==========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Reports directory: {}", paths.reports_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  currency_symbol:     {}", settings.currency_symbol);
            println!("  date_format:         {}", settings.date_format);
            println!("  advisor_delay_ms:    {}", settings.advisor_delay_ms);
            println!("  recent_transactions: {}", settings.recent_transactions);
            println!("  due_soon_days:       {}", settings.due_soon_days);
        }

        ConfigCommands::Set { key, value } => {
            apply_setting(settings, &key, &value)?;
            settings.save(paths)?;
            println!("Set {} = {}", key, value);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_setting() {
        let mut settings = Settings::default();
        apply_setting(&mut settings, "advisor_delay_ms", "0").unwrap();
        apply_setting(&mut settings, "currency_symbol", "$").unwrap();

        assert_eq!(settings.advisor_delay_ms, 0);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_apply_setting_rejects_bad_input() {
        let mut settings = Settings::default();
        assert!(apply_setting(&mut settings, "due_soon_days", "soon").is_err());
        assert!(matches!(
            apply_setting(&mut settings, "theme", "dark"),
            Err(FinanceError::Config(_))
        ));
    }
}
