//! Savings goal CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_goal_progress;
use crate::error::FinanceResult;
use crate::forms::{parse_amount, SavingsGoalEdit, SavingsGoalForm};
use crate::models::RecordId;
use crate::services::SavingsService;
use crate::store::FinanceStore;

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal name
        name: Option<String>,
        /// Target amount
        #[arg(short, long)]
        target: Option<String>,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
        /// Goal category (emergency, travel, phone, car, house, education, other)
        #[arg(short, long)]
        category: Option<String>,
        /// Amount already saved
        #[arg(long)]
        current: Option<String>,
    },

    /// Show progress of every goal
    List,

    /// Add money to a goal
    Contribute {
        /// Goal ID
        id: String,
        /// Amount to add
        amount: String,
    },

    /// Edit a goal
    Update {
        /// Goal ID
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New target amount
        #[arg(short, long)]
        target: Option<String>,
        /// New saved amount
        #[arg(long)]
        current: Option<String>,
        /// New deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete a goal
    Remove {
        /// Goal ID
        id: String,
    },
}

/// Handle a savings goal command
pub fn handle_goal_command(
    store: &mut FinanceStore,
    settings: &Settings,
    cmd: GoalCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let mut service = SavingsService::new(store);

    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
            category,
            current,
        } => {
            let goal = service.create(
                SavingsGoalForm {
                    name,
                    target_amount: target,
                    current_amount: current,
                    deadline,
                    category,
                }
                .into_goal()?,
            )?;

            println!("Created goal: {} {}", goal.icon, goal.name);
            println!(
                "  Target: {} by {}",
                goal.target_amount.format_with_symbol(symbol),
                goal.deadline.format(&settings.date_format)
            );
            println!("  ID: {}", goal.id);
        }

        GoalCommands::List => {
            let today = Local::now().date_naive();
            println!(
                "{}",
                format_goal_progress(&service.progress(today), symbol, &settings.date_format)
            );
        }

        GoalCommands::Contribute { id, amount } => {
            let amount = parse_amount(&amount)?;
            let goal = service.contribute(&RecordId::from(id), amount)?;

            println!(
                "Added {} to {}: {} of {} ({:.1}%)",
                amount.format_with_symbol(symbol),
                goal.name,
                goal.current_amount.format_with_symbol(symbol),
                goal.target_amount.format_with_symbol(symbol),
                goal.progress()
            );
        }

        GoalCommands::Update {
            id,
            name,
            target,
            current,
            deadline,
            category,
        } => {
            let patch = SavingsGoalEdit {
                name,
                target_amount: target,
                current_amount: current,
                deadline,
                category,
            }
            .into_patch()?;
            let goal = service.update(&RecordId::from(id), &patch)?;

            println!("Updated goal: {} {}", goal.icon, goal.name);
        }

        GoalCommands::Remove { id } => {
            let id = RecordId::from(id);
            service.delete(&id)?;
            println!("Removed goal {}", id);
        }
    }

    Ok(())
}
