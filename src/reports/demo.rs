//! Demo dataset
//!
//! Fixed figures shown when no ledger data is used. The period label is
//! carried through but never changes the numbers.

use chrono::NaiveDate;

use crate::models::{
    CategoryShare, Expense, ExpenseCategory, Insight, InsightKind, MonthlyTrend, ReportData,
    WeeklySpending,
};

/// Monthly budget used by the demo trend
pub const DEMO_MONTHLY_BUDGET: f64 = 1500.0;

/// Demo report figures
pub fn demo_report(period: &str) -> ReportData {
    tracing::debug!(period, "Building demo report");

    let monthly_trend = [
        ("Jan", 1200.0),
        ("Feb", 1100.0),
        ("Mar", 1300.0),
        ("Apr", 950.0),
        ("May", 1450.0),
        ("Jun", 1250.0),
    ]
    .into_iter()
    .map(|(month, amount)| MonthlyTrend::new(month, amount, DEMO_MONTHLY_BUDGET))
    .collect();

    let category_breakdown = vec![
        CategoryShare::new("Food & Dining", 450.0, 32.0),
        CategoryShare::new("Transportation", 320.0, 23.0),
        CategoryShare::new("Shopping", 280.0, 20.0),
        CategoryShare::new("Utilities", 200.0, 14.0),
        CategoryShare::new("Entertainment", 150.0, 11.0),
    ];

    let weekly_spending = vec![
        WeeklySpending::new("Week 1", 280.0),
        WeeklySpending::new("Week 2", 350.0),
        WeeklySpending::new("Week 3", 420.0),
        WeeklySpending::new("Week 4", 300.0),
    ];

    let insights = vec![
        Insight::new(
            InsightKind::Positive,
            "Great job!",
            "You spent 15% less on dining out this month compared to last month.",
        ),
        Insight::new(
            InsightKind::Warning,
            "Budget Alert",
            "You're approaching your monthly shopping budget limit.",
        ),
        Insight::new(
            InsightKind::Info,
            "Spending Pattern",
            "Your highest spending day is typically Friday.",
        ),
        Insight::new(
            InsightKind::Positive,
            "Savings Opportunity",
            "You could save $120/month by reducing subscription services.",
        ),
    ];

    ReportData {
        monthly_trend,
        category_breakdown,
        weekly_spending,
        insights,
    }
}

/// Sample ledger entries used by `--demo`
pub fn demo_expenses() -> Vec<Expense> {
    let entries: [(f64, ExpenseCategory, (i32, u32, u32), &str); 8] = [
        (45.50, ExpenseCategory::Food, (2024, 7, 1), "Lunch at Italian restaurant with colleagues"),
        (120.00, ExpenseCategory::Transportation, (2024, 6, 30), "Monthly gas fill-up for commuting"),
        (89.99, ExpenseCategory::Shopping, (2024, 6, 29), "New wireless headphones from online store"),
        (25.00, ExpenseCategory::Food, (2024, 6, 28), "Morning coffee and pastry"),
        (150.00, ExpenseCategory::Utilities, (2024, 6, 27), "Monthly electricity bill payment"),
        (75.50, ExpenseCategory::Entertainment, (2024, 6, 26), "Movie tickets and snacks"),
        (200.00, ExpenseCategory::Healthcare, (2024, 6, 25), "Dentist appointment and cleaning"),
        (35.00, ExpenseCategory::Transportation, (2024, 6, 24), "Uber ride to airport"),
    ];

    entries
        .into_iter()
        .filter_map(|(amount, category, (y, m, d), description)| {
            NaiveDate::from_ymd_opt(y, m, d)
                .map(|date| Expense::new(amount, category, date, description))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_report_shape() {
        let data = demo_report("6months");
        assert_eq!(data.monthly_trend.len(), 6);
        assert_eq!(data.category_breakdown.len(), 5);
        assert_eq!(data.weekly_spending.len(), 4);
        assert_eq!(data.insights.len(), 4);

        let jun = &data.monthly_trend[5];
        assert_eq!(jun.month, "Jun");
        assert_eq!(jun.variance(), -250.0);
    }

    #[test]
    fn test_demo_report_ignores_period() {
        assert_eq!(demo_report("1month"), demo_report("1year"));
    }

    #[test]
    fn test_demo_expenses_are_valid() {
        let expenses = demo_expenses();
        assert_eq!(expenses.len(), 8);
        assert!(expenses.iter().all(|e| e.validate().is_ok()));

        let total: f64 = expenses.iter().map(|e| e.amount).sum();
        assert!((total - 740.99).abs() < 1e-9);
    }
}
