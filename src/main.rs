use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use kiro_finance::cli::{
    handle_advise_command, handle_bill_command, handle_budget_command, handle_calc_command,
    handle_config_command, handle_doctor_command, handle_expense_command, handle_export_command,
    handle_goal_command, handle_income_command, handle_invest_command, handle_report_command,
    handle_summary_command, handle_transactions_command,
};
use kiro_finance::config::{paths::FinancePaths, settings::Settings};
use kiro_finance::storage::FileBackend;
use kiro_finance::store::FinanceStore;

#[derive(Parser)]
#[command(
    name = "kiro",
    version,
    about = "Personal finance tracker",
    long_about = "Kiro Finance tracks expenses, income, investments, savings goals \
                  and bills from the command line, with budgets, a rule-based \
                  advisor and printable reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense tracker commands
    #[command(subcommand)]
    Expense(kiro_finance::cli::ExpenseCommands),

    /// Income tracker commands
    #[command(subcommand)]
    Income(kiro_finance::cli::IncomeCommands),

    /// Investment portfolio commands
    #[command(subcommand)]
    Invest(kiro_finance::cli::InvestCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(kiro_finance::cli::GoalCommands),

    /// Bill reminder commands
    #[command(subcommand)]
    Bill(kiro_finance::cli::BillCommands),

    /// Budget planner commands
    #[command(subcommand)]
    Budget(kiro_finance::cli::BudgetCommands),

    /// Show the transaction history
    #[command(alias = "txn")]
    Transactions(kiro_finance::cli::TransactionArgs),

    /// Show the dashboard summary
    Summary,

    /// Get recommendations from the financial advisor
    Advise(kiro_finance::cli::AdviseArgs),

    /// Generate a financial report
    Report(kiro_finance::cli::ReportArgs),

    /// Export data
    Export(kiro_finance::cli::ExportArgs),

    /// Investment calculators
    #[command(subcommand)]
    Calc(kiro_finance::cli::CalcCommands),

    /// Check the transaction log for drift
    Doctor,

    /// Show or change configuration
    #[command(subcommand)]
    Config(kiro_finance::cli::ConfigCommands),
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinancePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Kiro Finance - personal finance tracker");
        println!();
        println!("Run 'kiro --help' for usage information.");
        return Ok(());
    };

    // Commands that don't touch stored records
    let command = match command {
        Commands::Config(cmd) => {
            handle_config_command(&paths, &mut settings, cmd)?;
            return Ok(());
        }
        Commands::Calc(cmd) => {
            handle_calc_command(&settings, cmd)?;
            return Ok(());
        }
        other => other,
    };

    // Initialize storage
    paths.ensure_directories()?;
    let mut store = FinanceStore::open(FileBackend::new(paths.data_dir()))?;

    match command {
        Commands::Expense(cmd) => handle_expense_command(&mut store, &settings, cmd)?,
        Commands::Income(cmd) => handle_income_command(&mut store, &settings, cmd)?,
        Commands::Invest(cmd) => handle_invest_command(&mut store, &settings, cmd)?,
        Commands::Goal(cmd) => handle_goal_command(&mut store, &settings, cmd)?,
        Commands::Bill(cmd) => handle_bill_command(&mut store, &settings, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&mut store, &settings, cmd)?,
        Commands::Transactions(args) => handle_transactions_command(&store, &settings, args)?,
        Commands::Summary => handle_summary_command(&store, &settings)?,
        Commands::Advise(args) => handle_advise_command(&store, &settings, args)?,
        Commands::Report(args) => handle_report_command(&store, &settings, &paths, args)?,
        Commands::Export(args) => handle_export_command(&store, args)?,
        Commands::Doctor => handle_doctor_command(&store)?,
        Commands::Config(_) | Commands::Calc(_) => {}
    }

    Ok(())
}
