//! Investment calculator CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_projection;
use crate::error::FinanceResult;
use crate::forms::{parse_amount, parse_percent};
use crate::services::calculator::{lumpsum, sip, DEFAULT_ANNUAL_RATE};

/// Calculator subcommands
#[derive(Subcommand)]
pub enum CalcCommands {
    /// Future value of a monthly SIP
    Sip {
        /// Monthly instalment
        monthly: String,
        /// Expected annual return in percent
        #[arg(short, long)]
        rate: Option<String>,
        /// Investment period in years
        #[arg(short, long)]
        years: f64,
    },

    /// Future value of a one-off investment
    Lumpsum {
        /// Amount invested
        amount: String,
        /// Expected annual return in percent
        #[arg(short, long)]
        rate: Option<String>,
        /// Investment period in years
        #[arg(short, long)]
        years: f64,
    },
}

fn rate_or_default(rate: Option<String>) -> FinanceResult<f64> {
    rate.as_deref()
        .map(parse_percent)
        .transpose()
        .map(|r| r.unwrap_or(DEFAULT_ANNUAL_RATE))
}

/// Handle a calculator command
pub fn handle_calc_command(settings: &Settings, cmd: CalcCommands) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CalcCommands::Sip {
            monthly,
            rate,
            years,
        } => {
            let monthly = parse_amount(&monthly)?;
            let rate = rate_or_default(rate)?;
            let projection = sip(monthly.to_major(), rate, years)?;
            let title = format!(
                "SIP of {}/month for {} years at {}%",
                monthly.format_compact(symbol),
                years,
                rate
            );
            println!("{}", format_projection(&title, &projection, symbol));
        }

        CalcCommands::Lumpsum {
            amount,
            rate,
            years,
        } => {
            let amount = parse_amount(&amount)?;
            let rate = rate_or_default(rate)?;
            let projection = lumpsum(amount.to_major(), rate, years)?;
            let title = format!(
                "Lumpsum of {} for {} years at {}%",
                amount.format_compact(symbol),
                years,
                rate
            );
            println!("{}", format_projection(&title, &projection, symbol));
        }
    }

    Ok(())
}
