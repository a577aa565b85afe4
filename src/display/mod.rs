//! Display formatting for terminal output
//!
//! Provides utilities for formatting records and computed views for terminal
//! display. Tables are drawn with `tabled`.

pub mod planning;
pub mod records;

pub use planning::{
    format_bill_reminders, format_budget_statuses, format_budget_suggestions,
    format_dashboard, format_goal_progress, format_projection,
};
pub use records::{
    format_expense_list, format_income_list, format_investment_list, format_transaction_list,
};

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

/// Draw a table with a header row; columns listed in `right_aligned` are
/// aligned to the right
pub fn table<I, R>(header: &[&str], rows: I, right_aligned: &[usize]) -> String
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = String>,
{
    let mut builder = Builder::default();
    builder.push_record(header.iter().map(|h| h.to_string()));
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    for &column in right_aligned {
        table.modify(Columns::single(column), Alignment::right());
    }
    table.to_string()
}

/// Number of lines a rendered block occupies
pub fn line_count(text: &str) -> usize {
    text.lines().count()
}
