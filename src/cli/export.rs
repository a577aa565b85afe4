//! CLI command for data export
//!
//! Writes the full store to JSON or YAML, or the transaction log or
//! expenses to CSV.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{FinanceError, FinanceResult};
use crate::export::{
    export_expenses_csv, export_full_json, export_full_yaml, export_transactions_csv, FullExport,
};
use crate::store::FinanceStore;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transaction log)
    Csv,
    /// CSV format (expenses only)
    ExpensesCsv,
    /// JSON format (full data)
    Json,
    /// YAML format (full data, human-readable)
    Yaml,
}

/// Export options
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Show what would be exported without writing anything
    #[arg(long)]
    pub info: bool,
}

/// Handle the export command
pub fn handle_export_command(store: &FinanceStore, args: ExportArgs) -> FinanceResult<()> {
    if args.info {
        return handle_export_info(store);
    }

    let output = args.output.ok_or_else(|| {
        FinanceError::Validation("An output file is required unless --info is given".into())
    })?;
    let file = File::create(&output).map_err(|e| {
        FinanceError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => {
            export_transactions_csv(store, &mut writer)?;
            println!(
                "Exported {} transactions to: {}",
                store.transactions().len(),
                output.display()
            );
        }
        ExportFormat::ExpensesCsv => {
            export_expenses_csv(store, &mut writer)?;
            println!(
                "Exported {} expenses to: {}",
                store.expenses().len(),
                output.display()
            );
        }
        ExportFormat::Json => {
            export_full_json(store, &mut writer, args.pretty)?;
            println!("Full data exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            export_full_yaml(store, &mut writer)?;
            println!("Full data exported to: {}", output.display());
        }
    }

    writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))
}

/// Show export information
fn handle_export_info(store: &FinanceStore) -> FinanceResult<()> {
    let export = FullExport::from_store(store);
    let meta = &export.metadata;

    println!("Export Information");
    println!("==================");
    println!("Schema version: {}", export.schema_version);
    println!("App version:    {}", export.app_version);
    println!();
    println!("Expenses:      {}", meta.expense_count);
    println!("Incomes:       {}", meta.income_count);
    println!("Savings goals: {}", meta.goal_count);
    println!("Investments:   {}", meta.investment_count);
    println!("Bills:         {}", meta.bill_count);
    println!("Transactions:  {}", meta.transaction_count);
    if let (Some(earliest), Some(latest)) = (&meta.earliest_transaction, &meta.latest_transaction)
    {
        println!("Date range:    {} to {}", earliest, latest);
    }

    Ok(())
}
