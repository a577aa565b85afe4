//! CLI command for the financial report
//!
//! Renders the report into a paginated text document under the reports
//! directory, optionally also exporting its tables to CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use crate::config::paths::FinancePaths;
use crate::config::settings::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::reports::{FinancialReport, ReportPeriod};
use crate::store::FinanceStore;

/// Report options
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Report period (monthly or yearly)
    #[arg(short, long, default_value = "monthly")]
    pub period: String,

    /// Directory to write the report into (defaults to the reports directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also export the report tables to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Print the report to the terminal as well
    #[arg(long)]
    pub print: bool,
}

/// Handle the report command
pub fn handle_report_command(
    store: &FinanceStore,
    settings: &Settings,
    paths: &FinancePaths,
    args: ReportArgs,
) -> FinanceResult<()> {
    let period: ReportPeriod = args.period.parse()?;
    let report = FinancialReport::generate(
        store,
        period,
        Local::now().date_naive(),
        settings.recent_transactions,
    );

    let document = report.to_document(&settings.currency_symbol, &settings.date_format);
    let dir = args.output.unwrap_or_else(|| paths.reports_dir());
    let path = dir.join(report.file_name());
    document.save(&path)?;

    println!(
        "{} saved to: {} ({} page(s))",
        report.title(),
        path.display(),
        document.page_count()
    );

    if let Some(csv_path) = args.csv {
        let file = File::create(&csv_path).map_err(|e| {
            FinanceError::Export(format!(
                "Failed to create file {}: {}",
                csv_path.display(),
                e
            ))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Report tables exported to: {}", csv_path.display());
    }

    if args.print {
        println!();
        print!("{}", document.render());
    }

    Ok(())
}
