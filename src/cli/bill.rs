//! Bill reminder CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_bill_reminders;
use crate::error::FinanceResult;
use crate::forms::{BillEdit, BillForm};
use crate::models::RecordId;
use crate::services::BillService;
use crate::store::FinanceStore;

/// Bill subcommands
#[derive(Subcommand)]
pub enum BillCommands {
    /// Add a bill reminder
    Add {
        /// Bill name
        name: Option<String>,
        /// Amount due
        #[arg(short, long)]
        amount: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(short, long = "due")]
        due_date: Option<String>,
        /// Bill category (e.g., "Utilities", "Rent/Mortgage")
        #[arg(short, long)]
        category: Option<String>,
        /// The bill does not repeat
        #[arg(long)]
        one_off: bool,
    },

    /// List upcoming bills
    List {
        /// Also list bills already paid
        #[arg(long)]
        all: bool,
    },

    /// Mark a bill paid, or unpaid again
    Toggle {
        /// Bill ID
        id: String,
    },

    /// Edit a bill
    Update {
        /// Bill ID
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New due date (YYYY-MM-DD)
        #[arg(short, long = "due")]
        due_date: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// Whether the bill repeats
        #[arg(long)]
        recurring: Option<bool>,
        /// Whether the bill is paid
        #[arg(long)]
        paid: Option<bool>,
    },

    /// Delete a bill
    Remove {
        /// Bill ID
        id: String,
    },
}

/// Handle a bill command
pub fn handle_bill_command(
    store: &mut FinanceStore,
    settings: &Settings,
    cmd: BillCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let mut service = BillService::new(store).with_due_soon_days(settings.due_soon_days);

    match cmd {
        BillCommands::Add {
            name,
            amount,
            due_date,
            category,
            one_off,
        } => {
            let bill = service.create(
                BillForm {
                    name,
                    amount,
                    due_date,
                    category,
                    recurring: !one_off,
                }
                .into_bill()?,
            )?;

            println!(
                "Added bill: {} ({}) due {}",
                bill.name,
                bill.amount.format_with_symbol(symbol),
                bill.due_date.format(&settings.date_format)
            );
            println!("  ID: {}", bill.id);
        }

        BillCommands::List { all } => {
            let today = Local::now().date_naive();
            println!(
                "{}",
                format_bill_reminders(&service.upcoming(today), symbol, &settings.date_format)
            );
            println!(
                "Total unpaid: {}",
                service.total_unpaid().format_with_symbol(symbol)
            );

            if all {
                let paid = service.paid();
                if !paid.is_empty() {
                    println!();
                    println!("Paid:");
                    for bill in paid {
                        println!(
                            "  {} {} ({})",
                            bill.id,
                            bill.name,
                            bill.amount.format_with_symbol(symbol)
                        );
                    }
                }
            }
        }

        BillCommands::Toggle { id } => {
            let bill = service.toggle_paid(&RecordId::from(id))?;
            let state = if bill.paid { "paid" } else { "unpaid" };
            println!("Marked {} as {}", bill.name, state);
        }

        BillCommands::Update {
            id,
            name,
            amount,
            due_date,
            category,
            recurring,
            paid,
        } => {
            let patch = BillEdit {
                name,
                amount,
                due_date,
                category,
                recurring,
                paid,
            }
            .into_patch()?;
            let bill = service.update(&RecordId::from(id), &patch)?;

            println!("Updated bill: {}", bill.name);
        }

        BillCommands::Remove { id } => {
            let id = RecordId::from(id);
            service.delete(&id)?;
            println!("Removed bill {}", id);
        }
    }

    Ok(())
}
