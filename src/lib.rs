//! Kiro Finance - personal finance tracking from the terminal
//!
//! This library provides the core functionality for Kiro Finance: a local
//! store of expenses, incomes, savings goals, investments and bills with a
//! derived transaction log, and the planners, advisor and reports built on
//! top of it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, incomes, goals, bills, etc.)
//! - `storage`: Key-value storage backends (JSON files or memory)
//! - `store`: The finance store and its lifecycle
//! - `forms`: Validation of raw user input into records
//! - `services`: Business logic layer
//! - `advisor`: Rule-based financial recommendations
//! - `reports`: The paginated financial report
//! - `export`: JSON, YAML and CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use kiro_finance::models::{Expense, Money};
//! use kiro_finance::storage::MemoryBackend;
//! use kiro_finance::store::FinanceStore;
//!
//! let mut store = FinanceStore::open(MemoryBackend::new())?;
//! store.add_expense(Expense::new(Money::from_units(250), "food", "Lunch"))?;
//! assert_eq!(store.transactions().len(), 1);
//! ```

pub mod advisor;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod forms;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod store;

pub use error::{FinanceError, FinanceResult};
