//! Budget CLI commands
//!
//! Implements CLI commands for category limits, income-based suggestions and
//! the 50-30-20 plan.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_statuses, format_budget_suggestions};
use crate::error::FinanceResult;
use crate::forms::parse_amount;
use crate::services::BudgetService;
use crate::store::FinanceStore;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the limit of a category
    Set {
        /// Category name
        category: String,
        /// Limit (e.g., "500" or "500.00")
        amount: String,
    },

    /// Suggest limits from income
    Suggest {
        /// Monthly income to base suggestions on (defaults to recorded income)
        #[arg(short, long)]
        income: Option<String>,
        /// Apply the suggestion for this category
        #[arg(long)]
        apply: Option<String>,
    },

    /// Apply the 50-30-20 rule to category limits
    Rule {
        /// Monthly income to base the plan on (defaults to recorded income)
        #[arg(short, long)]
        income: Option<String>,
    },

    /// Show spending against limits
    Show {
        /// Include categories without a limit
        #[arg(long)]
        all: bool,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &mut FinanceStore,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let mut service = BudgetService::new(store);

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let amount = parse_amount(&amount)?;
            service.set_limit(&category, amount)?;
            println!(
                "Budget for {} set to {}",
                category.trim(),
                amount.format_with_symbol(symbol)
            );
        }

        BudgetCommands::Suggest { income, apply } => {
            let income = income.as_deref().map(parse_amount).transpose()?;

            if let Some(category) = apply {
                let amount = service.apply_suggestion(&category, income)?;
                println!(
                    "Budget for {} set to {}",
                    category,
                    amount.format_with_symbol(symbol)
                );
                return Ok(());
            }

            println!(
                "Suggested limits for income of {}",
                service.base_income(income).format_with_symbol(symbol)
            );
            println!("{}", format_budget_suggestions(&service.suggestions(income), symbol));
        }

        BudgetCommands::Rule { income } => {
            let income = income.as_deref().map(parse_amount).transpose()?;
            let base = service.base_income(income);
            let applied = service.apply_fifty_thirty_twenty(income)?;

            println!(
                "Applied 50-30-20 rule to income of {}",
                base.format_with_symbol(symbol)
            );
            for (category, amount) in applied {
                println!("  {:<15} {}", category, amount.format_with_symbol(symbol));
            }
        }

        BudgetCommands::Show { all } => {
            let statuses = if all {
                service.all_statuses()
            } else {
                service.active_budgets()
            };
            println!("{}", format_budget_statuses(&statuses, symbol));

            let over = service.over_budget();
            if !over.is_empty() {
                println!();
                let names: Vec<&str> = over.iter().map(|s| s.category.as_str()).collect();
                println!("Over budget: {}", names.join(", "));
            }
        }
    }

    Ok(())
}
