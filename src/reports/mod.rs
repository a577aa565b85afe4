//! Reports module for Kiro Finance
//!
//! Provides the financial report and the paginated text document it is
//! rendered into.

pub mod document;
pub mod financial;

pub use document::{Page, ReportDocument, PAGE_BREAK, PAGE_LINES};
pub use financial::{
    BreakdownRow, FinancialReport, GoalRow, ReportPeriod, ReportSummary,
    DEFAULT_RECENT_TRANSACTIONS,
};
