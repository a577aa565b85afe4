//! Built-in category catalogs
//!
//! Categories and types are free-text labels on the records; these tables only
//! supply display labels, icons and suggested budget shares for the well-known
//! values. Unknown labels are shown verbatim.

/// A known label with its display text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Expense categories offered by the expense tracker
pub const EXPENSE_CATEGORIES: &[CatalogEntry] = &[
    CatalogEntry { value: "food", label: "Food & Dining", icon: "🍔" },
    CatalogEntry { value: "transport", label: "Transport", icon: "🚗" },
    CatalogEntry { value: "shopping", label: "Shopping", icon: "🛍️" },
    CatalogEntry { value: "bills", label: "Bills & Utilities", icon: "📱" },
    CatalogEntry { value: "entertainment", label: "Entertainment", icon: "🎬" },
    CatalogEntry { value: "other", label: "Other", icon: "📦" },
];

/// Income types offered by the income tracker
pub const INCOME_TYPES: &[CatalogEntry] = &[
    CatalogEntry { value: "salary", label: "Salary", icon: "💼" },
    CatalogEntry { value: "freelance", label: "Freelance", icon: "💻" },
    CatalogEntry { value: "business", label: "Business", icon: "🏢" },
    CatalogEntry { value: "investment", label: "Investment", icon: "📈" },
    CatalogEntry { value: "other", label: "Other", icon: "💰" },
];

/// Savings goal categories; the icon is copied onto new goals
pub const GOAL_CATEGORIES: &[CatalogEntry] = &[
    CatalogEntry { value: "emergency", label: "Emergency Fund", icon: "🚨" },
    CatalogEntry { value: "travel", label: "Travel", icon: "✈️" },
    CatalogEntry { value: "phone", label: "Phone/Gadget", icon: "📱" },
    CatalogEntry { value: "car", label: "Vehicle", icon: "🚗" },
    CatalogEntry { value: "house", label: "House", icon: "🏠" },
    CatalogEntry { value: "education", label: "Education", icon: "🎓" },
    CatalogEntry { value: "other", label: "Other", icon: "💰" },
];

/// Icon for goals whose category is not in the catalog
pub const DEFAULT_GOAL_ICON: &str = "💰";

/// Bill categories offered by the bills reminder
pub const BILL_CATEGORIES: &[&str] = &[
    "Utilities",
    "Rent/Mortgage",
    "Insurance",
    "Subscriptions",
    "Credit Card",
    "Loan/EMI",
    "Phone",
    "Internet",
    "Other",
];

/// A budget category with its suggested share of monthly income
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub suggested_percent: f64,
}

/// Budget categories tracked by the budget assistant
pub const BUDGET_CATEGORIES: &[BudgetCategory] = &[
    BudgetCategory { id: "food", name: "Food & Dining", suggested_percent: 30.0 },
    BudgetCategory { id: "transport", name: "Transport", suggested_percent: 15.0 },
    BudgetCategory { id: "shopping", name: "Shopping", suggested_percent: 20.0 },
    BudgetCategory { id: "bills", name: "Bills & Utilities", suggested_percent: 15.0 },
    BudgetCategory { id: "entertainment", name: "Entertainment", suggested_percent: 10.0 },
    BudgetCategory { id: "other", name: "Other", suggested_percent: 10.0 },
];

fn find<'a>(table: &'a [CatalogEntry], value: &str) -> Option<&'a CatalogEntry> {
    table.iter().find(|entry| entry.value == value)
}

/// Display label of an expense category, falling back to the raw value
pub fn expense_category_label(value: &str) -> String {
    find(EXPENSE_CATEGORIES, value)
        .map(|e| format!("{} {}", e.icon, e.label))
        .unwrap_or_else(|| value.to_string())
}

/// Display label of an income type, falling back to the raw value
pub fn income_type_label(value: &str) -> String {
    find(INCOME_TYPES, value)
        .map(|e| format!("{} {}", e.icon, e.label))
        .unwrap_or_else(|| value.to_string())
}

/// Icon for a goal category
pub fn goal_icon(category: &str) -> &'static str {
    find(GOAL_CATEGORIES, category)
        .map(|e| e.icon)
        .unwrap_or(DEFAULT_GOAL_ICON)
}

/// Suggested income share for a budget category
pub fn suggested_percent(category: &str) -> Option<f64> {
    BUDGET_CATEGORIES
        .iter()
        .find(|c| c.id == category)
        .map(|c| c.suggested_percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(expense_category_label("food"), "🍔 Food & Dining");
        assert_eq!(expense_category_label("pets"), "pets");
        assert_eq!(income_type_label("salary"), "💼 Salary");
    }

    #[test]
    fn test_goal_icon() {
        assert_eq!(goal_icon("travel"), "✈️");
        assert_eq!(goal_icon("wedding"), DEFAULT_GOAL_ICON);
    }

    #[test]
    fn test_suggested_percentages_cover_income() {
        let total: f64 = BUDGET_CATEGORIES.iter().map(|c| c.suggested_percent).sum();
        assert_eq!(total, 100.0);
        assert_eq!(suggested_percent("transport"), Some(15.0));
        assert_eq!(suggested_percent("needs"), None);
    }
}
