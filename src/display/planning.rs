//! Dashboard and planner views

use crate::services::{
    BillReminder, BudgetState, BudgetStatus, BudgetSuggestion, DashboardSummary, DueStatus,
    GoalProgress, Projection,
};

use super::table;

/// Format the dashboard summary
pub fn format_dashboard(summary: &DashboardSummary, symbol: &str) -> String {
    let money = |m: crate::models::Money| m.format_with_symbol(symbol);
    let rows = vec![
        vec!["Total Income".to_string(), money(summary.total_income)],
        vec!["Total Expenses".to_string(), money(summary.total_expenses)],
        vec!["Balance".to_string(), money(summary.balance)],
        vec!["Total Savings".to_string(), money(summary.total_savings)],
        vec!["Total Investments".to_string(), money(summary.total_investments)],
        vec!["Net Worth".to_string(), money(summary.net_worth)],
        vec![
            "Savings Rate".to_string(),
            format!("{:.1}%", summary.savings_rate),
        ],
    ];

    format!(
        "{}\n{} expense(s), {} income record(s), {} goal(s), {} investment(s), {} unpaid bill(s)",
        table(&["Metric", "Value"], rows, &[1]),
        summary.expense_count,
        summary.income_count,
        summary.goal_count,
        summary.investment_count,
        summary.unpaid_bill_count
    )
}

/// Format budget statuses; categories without a limit show as "not set"
pub fn format_budget_statuses(statuses: &[BudgetStatus], symbol: &str) -> String {
    if statuses.is_empty() {
        return "Set budgets to track progress.".to_string();
    }

    let rows = statuses.iter().map(|s| {
        if !s.is_active() {
            return vec![
                s.category.clone(),
                "not set".to_string(),
                s.spent.format_with_symbol(symbol),
                String::new(),
                String::new(),
            ];
        }
        let note = match s.state {
            BudgetState::OverBudget => format!(
                "{} by {}",
                s.state,
                s.overage().format_with_symbol(symbol)
            ),
            _ => s.state.to_string(),
        };
        vec![
            s.category.clone(),
            s.limit.format_with_symbol(symbol),
            s.spent.format_with_symbol(symbol),
            format!("{:.0}%", s.percentage),
            note,
        ]
    });

    table(&["Category", "Limit", "Spent", "Used", "Status"], rows, &[1, 2, 3])
}

/// Format suggested limits
pub fn format_budget_suggestions(suggestions: &[BudgetSuggestion], symbol: &str) -> String {
    let rows = suggestions.iter().map(|s| {
        vec![
            s.category.to_string(),
            s.name.to_string(),
            format!("{:.0}%", s.percent),
            s.amount.format_with_symbol(symbol),
        ]
    });
    table(&["ID", "Category", "Share", "Suggested"], rows, &[2, 3])
}

/// Format savings goal progress
pub fn format_goal_progress(goals: &[GoalProgress], symbol: &str, date_format: &str) -> String {
    if goals.is_empty() {
        return "No savings goals yet.".to_string();
    }

    let rows = goals.iter().map(|g| {
        let days = if g.goal.is_complete() {
            "reached".to_string()
        } else if g.days_left < 0 {
            "overdue".to_string()
        } else {
            g.days_left.to_string()
        };
        let monthly = if g.goal.is_complete() {
            String::new()
        } else {
            g.monthly_required.format_with_symbol(symbol)
        };
        vec![
            g.goal.id.to_string(),
            format!("{} {}", g.goal.icon, g.goal.name),
            g.goal.current_amount.format_with_symbol(symbol),
            g.goal.target_amount.format_with_symbol(symbol),
            format!("{:.1}%", g.progress),
            g.goal.deadline.format(date_format).to_string(),
            days,
            monthly,
        ]
    });

    table(
        &["ID", "Goal", "Saved", "Target", "Progress", "Deadline", "Days Left", "Per Month"],
        rows,
        &[2, 3, 4, 6, 7],
    )
}

/// Format bill reminders
pub fn format_bill_reminders(bills: &[BillReminder], symbol: &str, date_format: &str) -> String {
    if bills.is_empty() {
        return "No upcoming bills.".to_string();
    }

    let rows = bills.iter().map(|r| {
        let when = match r.status {
            DueStatus::Overdue => format!("{} ({} days ago)", r.status, -r.days_until_due),
            DueStatus::DueSoon if r.days_until_due == 0 => "Due today".to_string(),
            _ => format!("{} (in {} days)", r.status, r.days_until_due),
        };
        vec![
            r.bill.id.to_string(),
            r.bill.name.clone(),
            r.bill.category.clone(),
            r.bill.amount.format_with_symbol(symbol),
            r.bill.due_date.format(date_format).to_string(),
            when,
            if r.bill.recurring { "yes" } else { "no" }.to_string(),
        ]
    });

    table(
        &["ID", "Bill", "Category", "Amount", "Due", "Status", "Recurring"],
        rows,
        &[3],
    )
}

/// Format a calculator projection
pub fn format_projection(title: &str, projection: &Projection, symbol: &str) -> String {
    let amount = |v: f64| crate::models::Money::from_major(v).format_with_symbol(symbol);
    let rows = vec![
        vec!["Invested".to_string(), amount(projection.invested)],
        vec!["Est. Returns".to_string(), amount(projection.returns)],
        vec!["Total Value".to_string(), amount(projection.total)],
    ];
    format!("{}\n{}", title, table(&["", "Amount"], rows, &[1]))
}
