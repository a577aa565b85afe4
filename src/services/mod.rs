//! Service layer for Kiro Finance
//!
//! The service layer provides business logic on top of the finance store:
//! validation, computed views and the planners behind each CLI area.

pub mod bills;
pub mod budget;
pub mod calculator;
pub mod dashboard;
pub mod savings;

pub use bills::{BillReminder, BillService, DueStatus};
pub use budget::{BudgetService, BudgetState, BudgetStatus, BudgetSuggestion};
pub use calculator::Projection;
pub use dashboard::{CategoryTotal, DashboardService, DashboardSummary};
pub use savings::{GoalProgress, SavingsService};
