//! Read-only CLI commands: dashboard summary, transaction history, advisor
//! and the consistency check

use std::time::Duration;

use clap::Args;

use crate::advisor::Advisor;
use crate::config::settings::Settings;
use crate::display::{format_dashboard, format_transaction_list, table};
use crate::error::FinanceResult;
use crate::services::DashboardService;
use crate::store::FinanceStore;

/// Transaction history options
#[derive(Args, Debug)]
pub struct TransactionArgs {
    /// Number of transactions to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,

    /// Show the most recently logged first instead of sorting by date
    #[arg(long)]
    pub recent: bool,
}

/// Advisor options
#[derive(Args, Debug)]
pub struct AdviseArgs {
    /// Answer immediately instead of waiting for the configured delay
    #[arg(long)]
    pub no_delay: bool,
}

/// Show the dashboard
pub fn handle_summary_command(store: &FinanceStore, settings: &Settings) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let service = DashboardService::new(store);
    let summary = service.summary();

    println!("Kiro Finance Dashboard");
    println!("======================");
    println!("{}", format_dashboard(&summary, symbol));

    let categories = service.expenses_by_category();
    if !categories.is_empty() {
        println!();
        println!("Spending by category:");
        for total in categories {
            println!(
                "  {:<15} {}",
                total.category,
                total.amount.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

/// Show the transaction history
pub fn handle_transactions_command(
    store: &FinanceStore,
    settings: &Settings,
    args: TransactionArgs,
) -> FinanceResult<()> {
    let service = DashboardService::new(store);
    let transactions = if args.recent {
        service.recent_transactions(args.limit)
    } else {
        service
            .transaction_history()
            .into_iter()
            .take(args.limit)
            .collect()
    };

    println!(
        "{}",
        format_transaction_list(
            &transactions,
            &settings.currency_symbol,
            &settings.date_format
        )
    );
    if transactions.len() < store.transactions().len() {
        println!(
            "Showing {} of {} transactions",
            transactions.len(),
            store.transactions().len()
        );
    }

    Ok(())
}

/// Run the advisor and print its recommendations
pub fn handle_advise_command(
    store: &FinanceStore,
    settings: &Settings,
    args: AdviseArgs,
) -> FinanceResult<()> {
    let advisor = if args.no_delay {
        Advisor::immediate()
    } else {
        Advisor::new(settings.advisor_delay())
    };

    if advisor.delay() > Duration::ZERO {
        println!("Analyzing your finances...");
    }
    let advice = advisor.advise(store);
    println!("{}", advice.render(&settings.currency_symbol));

    Ok(())
}

/// Check the transaction log against its source collections
pub fn handle_doctor_command(store: &FinanceStore) -> FinanceResult<()> {
    let report = store.consistency_report();

    println!("Data location: {}", store.location());
    println!("Store state:   {}", store.state());

    if report.is_consistent() {
        println!("No problems found.");
        return Ok(());
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(report.issue_count());
    for txn in &report.orphaned_transactions {
        rows.push(vec![
            "Orphaned transaction".to_string(),
            txn.kind.to_string(),
            txn.id.to_string(),
        ]);
    }
    for (kind, id) in &report.missing_transactions {
        rows.push(vec![
            "Missing transaction".to_string(),
            kind.to_string(),
            id.to_string(),
        ]);
    }
    for (kind, id) in &report.duplicate_transactions {
        rows.push(vec![
            "Duplicate transaction".to_string(),
            kind.to_string(),
            id.to_string(),
        ]);
    }

    println!("{}", table(&["Problem", "Kind", "ID"], rows, &[]));
    println!("{} problem(s) found", report.issue_count());

    Ok(())
}
