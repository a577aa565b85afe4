//! YAML Export functionality
//!
//! Exports all data to YAML format for human-readable backup.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::FullExport;
use crate::store::FinanceStore;

/// Export all data to YAML format
pub fn export_full_yaml<W: Write>(store: &FinanceStore, writer: &mut W) -> FinanceResult<()> {
    let export = FullExport::from_store(store);
    let export_err = |e: std::io::Error| FinanceError::Export(e.to_string());

    writeln!(writer, "# Kiro Finance Data Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer, "#").map_err(export_err)?;
    writeln!(
        writer,
        "# Keep it secure - it contains all your financial data."
    )
    .map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}
