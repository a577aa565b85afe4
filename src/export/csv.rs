//! CSV Export functionality
//!
//! Exports the transaction log and the expense list in a
//! spreadsheet-compatible format.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::store::FinanceStore;

fn export_err(e: csv::Error) -> FinanceError {
    FinanceError::Export(e.to_string())
}

/// Export the transaction log to CSV, in logged order
pub fn export_transactions_csv<W: Write>(store: &FinanceStore, writer: &mut W) -> FinanceResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(["ID", "Date", "Type", "Description", "Category", "Amount"])
        .map_err(export_err)?;

    for txn in store.transactions() {
        let amount = format!("{:.2}", txn.amount.to_major());
        let date = txn.date.to_rfc3339();
        let kind = txn.kind.to_string();
        csv_writer
            .write_record([
                txn.id.as_str(),
                date.as_str(),
                kind.as_str(),
                txn.description.as_str(),
                txn.category.as_deref().unwrap_or(""),
                amount.as_str(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))
}

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(store: &FinanceStore, writer: &mut W) -> FinanceResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(["ID", "Date", "Category", "Description", "Amount"])
        .map_err(export_err)?;

    for expense in store.expenses() {
        let amount = format!("{:.2}", expense.amount.to_major());
        let date = expense.date.to_rfc3339();
        csv_writer
            .write_record([
                expense.id.as_str(),
                date.as_str(),
                expense.category.as_str(),
                expense.description.as_str(),
                amount.as_str(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))
}
