//! Expense, income and investment CLI commands
//!
//! The three trackers share a shape: add through a form, list, remove by id.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_list, format_income_list, format_investment_list};
use crate::error::{FinanceError, FinanceResult};
use crate::forms::{ExpenseForm, IncomeForm, InvestmentForm};
use crate::models::RecordId;
use crate::store::FinanceStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount (e.g., "250" or "250.50")
        amount: Option<String>,
        /// Category (food, transport, shopping, bills, entertainment, other)
        #[arg(short, long)]
        category: Option<String>,
        /// What the money was spent on
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List all expenses
    List,

    /// Remove an expense and its transaction
    Remove {
        /// Expense ID
        id: String,
    },
}

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record income
    Add {
        /// Amount
        amount: Option<String>,
        /// Income type (salary, freelance, business, investment, other)
        #[arg(short = 't', long = "type")]
        income_type: Option<String>,
        /// Where the money came from
        #[arg(short, long)]
        source: Option<String>,
    },

    /// List all income
    List,

    /// Remove an income record and its transaction
    Remove {
        /// Income ID
        id: String,
    },
}

/// Investment subcommands
#[derive(Subcommand)]
pub enum InvestCommands {
    /// Record an investment
    Add {
        /// Investment name
        name: Option<String>,
        /// Investment type (e.g., "Mutual Fund", "Stocks")
        #[arg(short = 't', long = "type")]
        investment_type: Option<String>,
        /// Amount invested
        #[arg(short, long)]
        amount: Option<String>,
        /// Expected annual returns in percent
        #[arg(short, long)]
        returns: Option<String>,
    },

    /// List the portfolio
    List,

    /// Remove an investment and its transaction
    Remove {
        /// Investment ID
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &mut FinanceStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> FinanceResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
        } => {
            let expense = ExpenseForm {
                amount,
                category,
                description,
            }
            .into_expense()?;
            store.add_expense(expense.clone())?;

            println!(
                "Added expense: {} ({})",
                expense.amount.format_with_symbol(&settings.currency_symbol),
                expense.category
            );
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List => {
            println!(
                "{}",
                format_expense_list(store.expenses(), &settings.currency_symbol, &settings.date_format)
            );
        }

        ExpenseCommands::Remove { id } => {
            let id = RecordId::from(id);
            if !store.remove_expense(&id)? {
                return Err(FinanceError::expense_not_found(id.as_str()));
            }
            println!("Removed expense {}", id);
        }
    }

    Ok(())
}

/// Handle an income command
pub fn handle_income_command(
    store: &mut FinanceStore,
    settings: &Settings,
    cmd: IncomeCommands,
) -> FinanceResult<()> {
    match cmd {
        IncomeCommands::Add {
            amount,
            income_type,
            source,
        } => {
            let income = IncomeForm {
                amount,
                income_type,
                source,
            }
            .into_income()?;
            store.add_income(income.clone())?;

            println!(
                "Added income: {} ({})",
                income.amount.format_with_symbol(&settings.currency_symbol),
                income.income_type
            );
            println!("  ID: {}", income.id);
        }

        IncomeCommands::List => {
            println!(
                "{}",
                format_income_list(store.incomes(), &settings.currency_symbol, &settings.date_format)
            );
        }

        IncomeCommands::Remove { id } => {
            let id = RecordId::from(id);
            if !store.remove_income(&id)? {
                return Err(FinanceError::income_not_found(id.as_str()));
            }
            println!("Removed income {}", id);
        }
    }

    Ok(())
}

/// Handle an investment command
pub fn handle_invest_command(
    store: &mut FinanceStore,
    settings: &Settings,
    cmd: InvestCommands,
) -> FinanceResult<()> {
    match cmd {
        InvestCommands::Add {
            name,
            investment_type,
            amount,
            returns,
        } => {
            let investment = InvestmentForm {
                name,
                investment_type,
                amount,
                returns,
            }
            .into_investment()?;
            store.add_investment(investment.clone())?;

            println!(
                "Added investment: {} ({}, {})",
                investment.name,
                investment.investment_type,
                investment.amount.format_with_symbol(&settings.currency_symbol)
            );
            println!("  ID: {}", investment.id);
        }

        InvestCommands::List => {
            println!(
                "{}",
                format_investment_list(store.investments(), &settings.currency_symbol)
            );
        }

        InvestCommands::Remove { id } => {
            let id = RecordId::from(id);
            if !store.remove_investment(&id)? {
                return Err(FinanceError::investment_not_found(id.as_str()));
            }
            println!("Removed investment {}", id);
        }
    }

    Ok(())
}
