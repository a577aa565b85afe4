//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod bill;
pub mod budget;
pub mod calc;
pub mod config;
pub mod export;
pub mod goal;
pub mod overview;
pub mod records;
pub mod report;

pub use bill::{handle_bill_command, BillCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use calc::{handle_calc_command, CalcCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportArgs};
pub use goal::{handle_goal_command, GoalCommands};
pub use overview::{
    handle_advise_command, handle_doctor_command, handle_summary_command,
    handle_transactions_command, AdviseArgs, TransactionArgs,
};
pub use records::{
    handle_expense_command, handle_income_command, handle_invest_command, ExpenseCommands,
    IncomeCommands, InvestCommands,
};
pub use report::{handle_report_command, ReportArgs};
