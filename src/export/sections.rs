//! Tabular view of a report, shared by the CSV and PDF encoders
//!
//! Every encoding lays out the same three sections in the same order:
//! monthly trend, category breakdown, weekly spending. Insights are
//! display-only and never appear here.

use crate::models::ReportData;

use super::format::{format_currency, format_percentage};

/// Title written at the top of every report artifact
pub const REPORT_TITLE: &str = "Expense Report";

/// Heading line for the period label
pub fn period_line(period: &str) -> String {
    format!("Period: {}", period)
}

/// One titled table of already-formatted cells
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub title: &'static str,
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}

pub const MONTHLY_TREND_TITLE: &str = "Monthly Spending Trend";
pub const MONTHLY_TREND_COLUMNS: &[&str] = &["Month", "Spent", "Budget", "Variance"];
pub const CATEGORY_TITLE: &str = "Category Breakdown";
pub const CATEGORY_COLUMNS: &[&str] = &["Category", "Amount", "Percentage"];
pub const WEEKLY_TITLE: &str = "Weekly Spending";
pub const WEEKLY_COLUMNS: &[&str] = &["Week", "Amount"];

/// Build the report sections in their fixed order
pub fn report_sections(data: &ReportData) -> [ReportSection; 3] {
    let monthly = data
        .monthly_trend
        .iter()
        .map(|m| {
            vec![
                m.month.clone(),
                format_currency(m.amount),
                format_currency(m.budget),
                format_currency(m.variance()),
            ]
        })
        .collect();

    let categories = data
        .category_breakdown
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                format_currency(c.value),
                format_percentage(c.percentage),
            ]
        })
        .collect();

    let weekly = data
        .weekly_spending
        .iter()
        .map(|w| vec![w.week.clone(), format_currency(w.amount)])
        .collect();

    [
        ReportSection {
            title: MONTHLY_TREND_TITLE,
            columns: MONTHLY_TREND_COLUMNS,
            rows: monthly,
        },
        ReportSection {
            title: CATEGORY_TITLE,
            columns: CATEGORY_COLUMNS,
            rows: categories,
        },
        ReportSection {
            title: WEEKLY_TITLE,
            columns: WEEKLY_COLUMNS,
            rows: weekly,
        },
    ]
}
