//! Advisor rules
//!
//! Pure evaluation of an [`AdvisorSnapshot`] into structured advice, and the
//! text rendering of that advice.

use crate::models::money::DEFAULT_SYMBOL;
use crate::models::Money;

use super::snapshot::AdvisorSnapshot;

/// Savings rate below which the advisor asks for more saving
pub const RECOMMENDED_SAVINGS_RATE: f64 = 20.0;

/// Idle savings above which the advisor suggests investing
pub const INVESTABLE_SAVINGS: Money = Money::from_units(50_000);

/// Goals below this progress get a monthly allocation suggestion
pub const LAGGING_GOAL_PROGRESS: f64 = 50.0;

/// Months over which a lagging goal's remainder is spread
const CATCH_UP_MONTHS: i64 = 12;

/// Closing recommendations, always shown
pub const ACTION_ITEMS: [&str; 5] = [
    "Track all expenses daily for better awareness",
    "Build an emergency fund covering 6 months of expenses",
    "Review and optimize subscriptions and recurring expenses",
    "Set specific financial goals with deadlines",
    "Diversify investments across different asset classes",
];

/// Income against expenses
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CashFlow {
    /// Expenses exceed income by this much
    Deficit { excess: Money },
    LowSavings { rate: f64 },
    Healthy { rate: f64 },
}

/// The category with the most spending
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingInsight {
    pub category: String,
    pub amount: Money,
    /// Spending beyond the category's limit, when one is set and exceeded
    pub overage: Option<Money>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalAdvice {
    pub name: String,
    pub progress: f64,
    /// Monthly allocation suggested for goals lagging behind
    pub suggested_monthly: Option<Money>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvestmentAdvice {
    /// Nothing invested while savings pile up
    Opportunity { savings: Money },
    Portfolio { invested: Money },
}

/// The full, deterministic output of the advisor
#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    pub cash_flow: CashFlow,
    pub spending: Option<SpendingInsight>,
    pub goals: Vec<GoalAdvice>,
    pub investments: Option<InvestmentAdvice>,
}

/// `amount / months`, rounded up to a whole currency unit
fn per_month_rounded_up(amount: Money, months: i64) -> Money {
    let divisor = months * 100;
    let cents = amount.cents();
    let units = cents / divisor + i64::from(cents % divisor > 0);
    Money::from_units(units)
}

/// Apply every rule to the snapshot
pub fn evaluate(snapshot: &AdvisorSnapshot) -> Advice {
    let rate = snapshot.savings_rate();
    let cash_flow = if snapshot.total_expenses > snapshot.total_income {
        CashFlow::Deficit {
            excess: snapshot.total_expenses - snapshot.total_income,
        }
    } else if rate < RECOMMENDED_SAVINGS_RATE {
        CashFlow::LowSavings { rate }
    } else {
        CashFlow::Healthy { rate }
    };

    let spending = snapshot.top_category().map(|top| {
        let limit = snapshot.budget_limits.limit_or_zero(&top.category);
        SpendingInsight {
            category: top.category.clone(),
            amount: top.amount,
            overage: (!limit.is_zero() && top.amount > limit).then(|| top.amount - limit),
        }
    });

    let goals = snapshot
        .goals
        .iter()
        .map(|goal| {
            let progress = goal.progress();
            GoalAdvice {
                name: goal.name.clone(),
                progress,
                suggested_monthly: (progress < LAGGING_GOAL_PROGRESS)
                    .then(|| per_month_rounded_up(goal.remaining(), CATCH_UP_MONTHS)),
            }
        })
        .collect();

    let investments = if snapshot.total_investments.is_zero()
        && snapshot.total_savings > INVESTABLE_SAVINGS
    {
        Some(InvestmentAdvice::Opportunity {
            savings: snapshot.total_savings,
        })
    } else if snapshot.total_investments.is_positive() {
        Some(InvestmentAdvice::Portfolio {
            invested: snapshot.total_investments,
        })
    } else {
        None
    };

    Advice {
        cash_flow,
        spending,
        goals,
        investments,
    }
}

impl Advice {
    /// Render the advice as a text report using `symbol` for amounts
    pub fn render(&self, symbol: &str) -> String {
        let money = |m: Money| m.format_compact(symbol);
        let mut out = String::from("📊 Financial Analysis & Recommendations:\n\n");

        out.push_str(&match self.cash_flow {
            CashFlow::Deficit { excess } => format!(
                "⚠️ URGENT: Your expenses exceed your income by {}.\n\
                 • Review and cut non-essential expenses immediately\n\
                 • Consider additional income sources\n\n",
                money(excess)
            ),
            CashFlow::LowSavings { rate } => format!(
                "💡 Your savings rate is {:.1}%, which is below the recommended 20%.\n\
                 • Try to increase savings by reducing discretionary spending\n\
                 • Aim to save at least 20% of your income\n\n",
                rate
            ),
            CashFlow::Healthy { rate } => format!(
                "✅ Great job! Your savings rate of {:.1}% is healthy.\n\
                 • Keep maintaining this discipline\n\n",
                rate
            ),
        });

        if let Some(insight) = &self.spending {
            out.push_str("💸 Spending Insights:\n");
            out.push_str(&format!(
                "• Your highest spending category is '{}' at {}\n",
                insight.category,
                money(insight.amount)
            ));
            if let Some(overage) = insight.overage {
                out.push_str(&format!(
                    "• You've exceeded your budget for {} by {}\n",
                    insight.category,
                    money(overage)
                ));
            }
            out.push('\n');
        }

        if !self.goals.is_empty() {
            out.push_str("🎯 Savings Goals Progress:\n");
            for goal in &self.goals {
                out.push_str(&format!("• {}: {:.1}% complete\n", goal.name, goal.progress));
                if let Some(monthly) = goal.suggested_monthly {
                    out.push_str(&format!(
                        "  Consider allocating {}/month to reach your goal\n",
                        money(monthly)
                    ));
                }
            }
            out.push('\n');
        }

        match self.investments {
            Some(InvestmentAdvice::Opportunity { savings }) => {
                out.push_str("📈 Investment Opportunity:\n");
                out.push_str(&format!("• You have {} in savings\n", money(savings)));
                out.push_str("• Consider investing a portion for better returns\n");
                out.push_str("• Start with low-risk options like index funds or SIPs\n\n");
            }
            Some(InvestmentAdvice::Portfolio { invested }) => {
                out.push_str("📈 Investment Portfolio:\n");
                out.push_str(&format!("• Current investments: {}\n", money(invested)));
                out.push_str("• Continue regular investments for long-term wealth building\n\n");
            }
            None => {}
        }

        out.push_str("💪 Action Items:\n");
        let items: Vec<String> = ACTION_ITEMS
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item))
            .collect();
        out.push_str(&items.join("\n"));
        out
    }
}

impl std::fmt::Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(DEFAULT_SYMBOL))
    }
}
