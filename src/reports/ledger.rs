//! Report figures aggregated from recorded expenses
//!
//! Expenses are filtered to the requested period, then grouped three ways:
//! by calendar month, by category, and by week of the month.

use chrono::{Datelike, Months, NaiveDate};
use std::collections::{BTreeMap, HashMap};

use crate::export::format_currency;
use crate::models::{
    CategoryShare, Expense, ExpenseCategory, Insight, InsightKind, MonthlyTrend, ReportData,
    WeeklySpending,
};

/// Period labels offered by the CLI
pub const PERIODS: [&str; 4] = ["1month", "3months", "6months", "1year"];

/// Number of months covered by a known period label
///
/// Unknown labels are opaque and cover the whole ledger.
pub fn period_months(period: &str) -> Option<u32> {
    match period {
        "1month" => Some(1),
        "3months" => Some(3),
        "6months" => Some(6),
        "1year" => Some(12),
        _ => None,
    }
}

/// Whether a date falls within `period` ending on `as_of`
fn in_period(date: NaiveDate, period: &str, as_of: NaiveDate) -> bool {
    if date > as_of {
        return false;
    }
    match period_months(period).and_then(|n| as_of.checked_sub_months(Months::new(n))) {
        Some(start) => date > start,
        None => true,
    }
}

/// Build report figures for a period of the ledger
pub fn ledger_report(
    expenses: &[Expense],
    period: &str,
    as_of: NaiveDate,
    monthly_budget: f64,
) -> ReportData {
    let selected: Vec<Expense> = expenses
        .iter()
        .filter(|e| in_period(e.date, period, as_of))
        .cloned()
        .collect();

    tracing::debug!(
        period,
        %as_of,
        selected = selected.len(),
        total = expenses.len(),
        "Building ledger report"
    );

    ReportData::from_expenses(&selected, monthly_budget)
}

impl ReportData {
    /// Aggregate expenses into report figures
    pub fn from_expenses(expenses: &[Expense], monthly_budget: f64) -> Self {
        let mut by_month: BTreeMap<(i32, u32), f64> = BTreeMap::new();
        let mut by_category: HashMap<ExpenseCategory, f64> = HashMap::new();
        let mut by_week: BTreeMap<u32, f64> = BTreeMap::new();

        for expense in expenses {
            *by_month
                .entry((expense.date.year(), expense.date.month()))
                .or_insert(0.0) += expense.amount;
            *by_category.entry(expense.category).or_insert(0.0) += expense.amount;
            *by_week.entry(week_of_month(expense.date)).or_insert(0.0) += expense.amount;
        }

        let monthly_trend: Vec<MonthlyTrend> = by_month
            .into_iter()
            .filter_map(|((year, month), amount)| {
                let label = NaiveDate::from_ymd_opt(year, month, 1)?.format("%b").to_string();
                Some(MonthlyTrend::new(label, amount, monthly_budget))
            })
            .collect();

        let total: f64 = by_category.values().sum();
        let mut categories: Vec<(ExpenseCategory, f64)> = by_category.into_iter().collect();
        // Largest first; ties keep category order
        categories.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let category_breakdown: Vec<CategoryShare> = categories
            .into_iter()
            .map(|(category, value)| {
                let percentage = if total > 0.0 {
                    (value / total * 100.0).round()
                } else {
                    0.0
                };
                CategoryShare::new(category.name(), value, percentage)
            })
            .collect();

        let weekly_spending = by_week
            .into_iter()
            .map(|(week, amount)| WeeklySpending::new(format!("Week {}", week), amount))
            .collect();

        let insights = generate_insights(&monthly_trend, &category_breakdown);

        Self {
            monthly_trend,
            category_breakdown,
            weekly_spending,
            insights,
        }
    }
}

/// 1-based week of the month: days 1-7 are week 1, 29-31 week 5
fn week_of_month(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

fn generate_insights(months: &[MonthlyTrend], categories: &[CategoryShare]) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Some(latest) = months.last() {
        let variance = latest.variance();
        if variance > 0.0 {
            insights.push(Insight::new(
                InsightKind::Warning,
                "Budget Alert",
                format!(
                    "You went {} over your {} budget in {}.",
                    format_currency(variance),
                    format_currency(latest.budget),
                    latest.month
                ),
            ));
        } else {
            insights.push(Insight::new(
                InsightKind::Positive,
                "Great job!",
                format!(
                    "You stayed {} under budget in {}.",
                    format_currency(-variance),
                    latest.month
                ),
            ));
        }
    }

    if let [.., previous, latest] = months {
        if previous.amount > 0.0 {
            let change = (latest.amount - previous.amount) / previous.amount * 100.0;
            let direction = if change < 0.0 { "less" } else { "more" };
            insights.push(Insight::new(
                InsightKind::Info,
                "Spending Pattern",
                format!(
                    "You spent {}% {} in {} than in {}.",
                    change.abs().round(),
                    direction,
                    latest.month,
                    previous.month
                ),
            ));
        }
    }

    if let Some(top) = categories.first() {
        insights.push(Insight::new(
            InsightKind::Info,
            "Top Category",
            format!(
                "{} accounts for {}% of your spending.",
                top.name, top.percentage
            ),
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::demo_expenses;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(amount: f64, category: ExpenseCategory, on: NaiveDate) -> Expense {
        Expense::new(amount, category, on, "")
    }

    #[test]
    fn test_period_months() {
        assert_eq!(period_months("1month"), Some(1));
        assert_eq!(period_months("1year"), Some(12));
        assert_eq!(period_months("Q3"), None);
        assert!(PERIODS.iter().all(|p| period_months(p).is_some()));
    }

    #[test]
    fn test_from_expenses_groups_three_ways() {
        let expenses = vec![
            expense(100.0, ExpenseCategory::Food, date(2024, 5, 2)),
            expense(300.0, ExpenseCategory::Travel, date(2024, 6, 9)),
            expense(100.0, ExpenseCategory::Food, date(2024, 6, 30)),
        ];

        let data = ReportData::from_expenses(&expenses, 250.0);

        let months: Vec<_> = data
            .monthly_trend
            .iter()
            .map(|m| (m.month.as_str(), m.amount, m.budget))
            .collect();
        assert_eq!(months, vec![("May", 100.0, 250.0), ("Jun", 400.0, 250.0)]);

        assert_eq!(data.category_breakdown[0], CategoryShare::new("Travel", 300.0, 60.0));
        assert_eq!(data.category_breakdown[1], CategoryShare::new("Food", 200.0, 40.0));

        let weeks: Vec<_> = data
            .weekly_spending
            .iter()
            .map(|w| (w.week.as_str(), w.amount))
            .collect();
        assert_eq!(weeks, vec![("Week 1", 100.0), ("Week 2", 300.0), ("Week 5", 100.0)]);
    }

    #[test]
    fn test_months_span_years_chronologically() {
        let expenses = vec![
            expense(10.0, ExpenseCategory::Other, date(2024, 1, 5)),
            expense(10.0, ExpenseCategory::Other, date(2023, 12, 5)),
        ];
        let data = ReportData::from_expenses(&expenses, 0.0);
        let labels: Vec<_> = data.monthly_trend.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(labels, vec!["Dec", "Jan"]);
    }

    #[test]
    fn test_insights_follow_latest_month() {
        let expenses = vec![
            expense(200.0, ExpenseCategory::Food, date(2024, 5, 10)),
            expense(150.0, ExpenseCategory::Food, date(2024, 6, 10)),
        ];

        let under = ReportData::from_expenses(&expenses, 180.0);
        assert_eq!(under.insights[0].kind, InsightKind::Positive);
        assert!(under.insights[0].description.contains("$30.00 under budget in Jun"));
        assert!(under.insights[1].description.contains("25% less in Jun than in May"));
        assert_eq!(under.insights[2].title, "Top Category");

        let over = ReportData::from_expenses(&expenses, 100.0);
        assert_eq!(over.insights[0].kind, InsightKind::Warning);
        assert!(over.insights[0].description.contains("$50.00 over your $100.00 budget"));
    }

    #[test]
    fn test_empty_ledger_produces_empty_report() {
        let data = ReportData::from_expenses(&[], 1500.0);
        assert!(data.is_empty());
        assert!(data.insights.is_empty());
    }

    #[test]
    fn test_ledger_report_filters_by_period() {
        let expenses = demo_expenses();

        let month = ledger_report(&expenses, "1month", date(2024, 7, 1), 1500.0);
        let total: f64 = month.category_breakdown.iter().map(|c| c.value).sum();
        assert!((total - 740.99).abs() < 1e-9);

        let narrow = ledger_report(&expenses, "1month", date(2024, 7, 31), 1500.0);
        assert_eq!(narrow.monthly_trend.len(), 1);
        assert_eq!(narrow.monthly_trend[0].amount, 45.5);

        let future = ledger_report(&expenses, "custom", date(2024, 6, 26), 1500.0);
        assert!(future.weekly_spending.iter().all(|w| w.amount > 0.0));
        let total: f64 = future.category_breakdown.iter().map(|c| c.value).sum();
        assert!((total - 310.5).abs() < 1e-9);
    }
}
