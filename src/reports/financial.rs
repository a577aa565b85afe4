//! Financial Report
//!
//! A one-shot snapshot of the whole data set: summary figures, expense and
//! income breakdowns, savings goals, the investment portfolio and the most
//! recently logged transactions.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::display::table;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Investment, Money, Transaction};
use crate::services::dashboard::{savings_rate, CategoryTotal, DashboardService};
use crate::store::FinanceStore;

use super::document::ReportDocument;

/// Transactions listed on the last page unless configured otherwise
pub const DEFAULT_RECENT_TRANSACTIONS: usize = 10;

/// Report flavour; only the title and file name depend on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl ReportPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly Financial Report",
            Self::Yearly => "Yearly Financial Report",
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportPeriod {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" | "annual" => Ok(Self::Yearly),
            other => Err(FinanceError::Validation(format!(
                "Unknown report period '{}'. Use monthly or yearly",
                other
            ))),
        }
    }
}

/// Headline figures of the report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    pub total_savings: Money,
    pub total_investments: Money,
    pub savings_rate: f64,
}

/// An expense category with its share of all spending
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub category: String,
    pub amount: Money,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalRow {
    pub name: String,
    pub target: Money,
    pub current: Money,
    pub progress: f64,
}

/// Financial Report
#[derive(Debug, Clone)]
pub struct FinancialReport {
    pub period: ReportPeriod,
    pub generated_on: NaiveDate,
    pub summary: ReportSummary,
    pub expense_breakdown: Vec<BreakdownRow>,
    pub income_by_type: Vec<CategoryTotal>,
    pub goals: Vec<GoalRow>,
    pub investments: Vec<Investment>,
    /// Most recently logged first
    pub recent_transactions: Vec<Transaction>,
}

impl FinancialReport {
    /// Generate a report from the current contents of the store
    pub fn generate(
        store: &FinanceStore,
        period: ReportPeriod,
        generated_on: NaiveDate,
        recent_count: usize,
    ) -> Self {
        let dashboard = DashboardService::new(store);
        let total_expenses = store.total_expenses();

        let summary = ReportSummary {
            total_income: store.total_income(),
            total_expenses,
            balance: store.balance(),
            total_savings: store.total_savings(),
            total_investments: store.total_investments(),
            savings_rate: savings_rate(store.total_income(), total_expenses),
        };

        let expense_breakdown = dashboard
            .expenses_by_category()
            .into_iter()
            .map(|t| BreakdownRow {
                percentage: Money::ratio_percent(t.amount, total_expenses),
                category: t.category,
                amount: t.amount,
            })
            .collect();

        let goals = store
            .savings_goals()
            .iter()
            .map(|g| GoalRow {
                name: g.name.clone(),
                target: g.target_amount,
                current: g.current_amount,
                progress: g.progress(),
            })
            .collect();

        Self {
            period,
            generated_on,
            summary,
            expense_breakdown,
            income_by_type: dashboard.income_by_type(),
            goals,
            investments: store.investments().to_vec(),
            recent_transactions: dashboard
                .recent_transactions(recent_count)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.period.title()
    }

    /// `financial-report-<period>-<YYYY-MM-DD>.txt`
    pub fn file_name(&self) -> String {
        format!(
            "financial-report-{}-{}.txt",
            self.period,
            self.generated_on.format("%Y-%m-%d")
        )
    }

    /// Lay the report out on pages
    pub fn to_document(&self, symbol: &str, date_format: &str) -> ReportDocument {
        let money = |m: Money| m.format_with_symbol(symbol);
        let mut doc = ReportDocument::new();

        doc.push_text("Kiro Finance");
        doc.push_text(self.title());
        doc.push_text(&format!(
            "Generated on: {}",
            self.generated_on.format(date_format)
        ));

        let s = &self.summary;
        let summary_rows = vec![
            vec!["Total Income".to_string(), money(s.total_income)],
            vec!["Total Expenses".to_string(), money(s.total_expenses)],
            vec!["Balance".to_string(), money(s.balance)],
            vec!["Total Savings".to_string(), money(s.total_savings)],
            vec!["Total Investments".to_string(), money(s.total_investments)],
            vec!["Savings Rate".to_string(), format!("{:.1}%", s.savings_rate)],
        ];
        doc.push_section(
            "Financial Summary",
            &table(&["Metric", "Amount"], summary_rows, &[1]),
        );

        doc.add_page();
        let breakdown_rows = self.expense_breakdown.iter().map(|r| {
            vec![
                r.category.clone(),
                money(r.amount),
                format!("{:.1}%", r.percentage),
            ]
        });
        doc.push_section(
            "Expense Breakdown",
            &table(&["Category", "Amount", "Percentage"], breakdown_rows, &[1, 2]),
        );

        let income_rows = self
            .income_by_type
            .iter()
            .map(|t| vec![t.category.clone(), money(t.amount)]);
        doc.push_section(
            "Income Sources",
            &table(&["Source", "Amount"], income_rows, &[1]),
        );

        if !self.goals.is_empty() {
            doc.add_page();
            let goal_rows = self.goals.iter().map(|g| {
                vec![
                    g.name.clone(),
                    money(g.target),
                    money(g.current),
                    format!("{:.1}%", g.progress),
                ]
            });
            doc.push_section(
                "Savings Goals Progress",
                &table(&["Goal", "Target", "Current", "Progress"], goal_rows, &[1, 2, 3]),
            );
        }

        if !self.investments.is_empty() {
            // Stays on the current page when it fits
            let investment_rows = self.investments.iter().map(|i| {
                vec![
                    i.name.clone(),
                    i.investment_type.clone(),
                    money(i.amount),
                    format!("{:.1}%", i.returns),
                ]
            });
            doc.push_section(
                "Investment Portfolio",
                &table(&["Investment", "Type", "Amount", "Returns"], investment_rows, &[2, 3]),
            );
        }

        if !self.recent_transactions.is_empty() {
            doc.add_page();
            let txn_rows = self.recent_transactions.iter().map(|t| {
                vec![
                    t.date.format(date_format).to_string(),
                    t.kind.to_string(),
                    t.description.clone(),
                    money(t.amount),
                ]
            });
            doc.push_section(
                "Recent Transactions",
                &table(&["Date", "Type", "Description", "Amount"], txn_rows, &[3]),
            );
        }

        doc
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str, date_format: &str) -> String {
        self.to_document(symbol, date_format).render()
    }

    /// Export the report data to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinanceResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| FinanceError::Export(e.to_string());

        csv_writer
            .write_record(["Section", "Item", "Amount", "Percentage"])
            .map_err(export_err)?;

        let s = &self.summary;
        for (label, amount) in [
            ("Total Income", s.total_income),
            ("Total Expenses", s.total_expenses),
            ("Balance", s.balance),
            ("Total Savings", s.total_savings),
            ("Total Investments", s.total_investments),
        ] {
            let amount = format!("{:.2}", amount.to_major());
            csv_writer
                .write_record(["Summary", label, amount.as_str(), ""])
                .map_err(export_err)?;
        }
        let rate = format!("{:.1}", s.savings_rate);
        csv_writer
            .write_record(["Summary", "Savings Rate", "", rate.as_str()])
            .map_err(export_err)?;

        let mut rows: Vec<(&str, &str, Money, Option<f64>)> = Vec::new();
        rows.extend(
            self.expense_breakdown
                .iter()
                .map(|r| ("Expenses", r.category.as_str(), r.amount, Some(r.percentage))),
        );
        rows.extend(
            self.income_by_type
                .iter()
                .map(|t| ("Income", t.category.as_str(), t.amount, None)),
        );
        rows.extend(
            self.goals
                .iter()
                .map(|g| ("Savings Goals", g.name.as_str(), g.current, Some(g.progress))),
        );
        rows.extend(
            self.investments
                .iter()
                .map(|i| ("Investments", i.name.as_str(), i.amount, Some(i.returns))),
        );

        for (section, item, amount, percentage) in rows {
            let amount = format!("{:.2}", amount.to_major());
            let percentage = percentage.map(|p| format!("{:.1}", p)).unwrap_or_default();
            csv_writer
                .write_record([section, item, amount.as_str(), percentage.as_str()])
                .map_err(export_err)?;
        }

        csv_writer
            .flush()
            .map_err(|e| FinanceError::Export(e.to_string()))?;
        Ok(())
    }
}
