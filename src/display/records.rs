//! Record listings
//!
//! Tables of expenses, incomes, investments and the transaction log.

use crate::models::category::{expense_category_label, income_type_label};
use crate::models::{Expense, Income, Investment, Money, Transaction};

use super::table;

/// Format a list of expenses as a table with a total line
pub fn format_expense_list(expenses: &[Expense], symbol: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.".to_string();
    }

    let rows = expenses.iter().map(|e| {
        vec![
            e.id.to_string(),
            e.date.format(date_format).to_string(),
            expense_category_label(&e.category),
            e.description.clone(),
            e.amount.format_with_symbol(symbol),
        ]
    });
    let total: Money = expenses.iter().map(|e| e.amount).sum();

    format!(
        "{}\nTotal: {} across {} expense(s)",
        table(&["ID", "Date", "Category", "Description", "Amount"], rows, &[4]),
        total.format_with_symbol(symbol),
        expenses.len()
    )
}

/// Format a list of incomes as a table with a total line
pub fn format_income_list(incomes: &[Income], symbol: &str, date_format: &str) -> String {
    if incomes.is_empty() {
        return "No income recorded yet.".to_string();
    }

    let rows = incomes.iter().map(|i| {
        vec![
            i.id.to_string(),
            i.date.format(date_format).to_string(),
            income_type_label(&i.income_type),
            i.source.clone(),
            i.amount.format_with_symbol(symbol),
        ]
    });
    let total: Money = incomes.iter().map(|i| i.amount).sum();

    format!(
        "{}\nTotal: {}",
        table(&["ID", "Date", "Type", "Source", "Amount"], rows, &[4]),
        total.format_with_symbol(symbol)
    )
}

/// Format the investment portfolio
pub fn format_investment_list(investments: &[Investment], symbol: &str) -> String {
    if investments.is_empty() {
        return "No investments recorded yet.".to_string();
    }

    let rows = investments.iter().map(|i| {
        vec![
            i.id.to_string(),
            i.name.clone(),
            i.investment_type.clone(),
            i.amount.format_with_symbol(symbol),
            format!("{:.1}%", i.returns),
        ]
    });
    let total: Money = investments.iter().map(|i| i.amount).sum();

    format!(
        "{}\nTotal invested: {}",
        table(&["ID", "Name", "Type", "Amount", "Returns"], rows, &[3, 4]),
        total.format_with_symbol(symbol)
    )
}

/// Format transactions in the given order, with a signed amount column
pub fn format_transaction_list(
    transactions: &[&Transaction],
    symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions yet. Start by adding income or expenses.".to_string();
    }

    let rows = transactions.iter().map(|t| {
        vec![
            t.date.format(date_format).to_string(),
            t.kind.to_string(),
            t.description.clone(),
            t.category.clone().unwrap_or_default(),
            format!("{}{}", t.kind.sign(), t.amount.format_with_symbol(symbol)),
        ]
    });

    table(&["Date", "Type", "Description", "Category", "Amount"], rows, &[4])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lists() {
        assert_eq!(
            format_expense_list(&[], "₹", "%Y-%m-%d"),
            "No expenses recorded yet."
        );
        assert!(format_transaction_list(&[], "₹", "%Y-%m-%d").starts_with("No transactions"));
    }

    #[test]
    fn test_expense_list_shows_label_and_total() {
        let expenses = vec![
            Expense::new(Money::from_units(1000), "food", "Groceries"),
            Expense::new(Money::from_cents(4550), "pets", "Vet"),
        ];
        let out = format_expense_list(&expenses, "₹", "%Y-%m-%d");
        assert!(out.contains("🍔 Food & Dining"));
        assert!(out.contains("pets"));
        assert!(out.contains("Total: ₹1,045.50 across 2 expense(s)"));
    }

    #[test]
    fn test_transaction_signs() {
        let income = Income::new(Money::from_units(10), "salary", "Acme");
        let expense = Expense::new(Money::from_units(5), "food", "Tea");
        let txns = [
            Transaction::from_income(&income),
            Transaction::from_expense(&expense),
        ];
        let refs: Vec<&Transaction> = txns.iter().collect();
        let out = format_transaction_list(&refs, "$", "%Y-%m-%d");
        assert!(out.contains("+$10.00"));
        assert!(out.contains("-$5.00"));
        assert!(out.contains("salary - Acme"));
    }
}
