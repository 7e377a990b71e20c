//! Report formatting for terminal output
//!
//! Shows the headline metrics, the three report sections as tables, a bar
//! chart of the category shares and the insights list.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::export::{format_currency, report_sections, ReportSection};
use crate::models::{InsightKind, ReportData};
use crate::reports::ReportSummary;

use super::{format_bar, separator, truncate};

const BAR_WIDTH: usize = 24;
const LABEL_WIDTH: usize = 16;

fn section_table(section: &ReportSection) -> String {
    let mut builder = Builder::default();
    builder.push_record(section.columns.iter().copied());
    for row in &section.rows {
        builder.push_record(row.iter().cloned());
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

fn optional_currency(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), format_currency)
}

/// Format a full report for the terminal
pub fn format_report(data: &ReportData, period: &str) -> String {
    let summary = ReportSummary::from_report(data);
    let mut output = String::new();

    output.push_str(&format!("Expense Report ({})\n", period));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!(
        "Total Spent:      {}\n",
        format_currency(summary.total_spent)
    ));
    output.push_str(&format!(
        "Average Monthly:  {}\n",
        optional_currency(summary.average_monthly)
    ));
    output.push_str(&format!(
        "Budget Variance:  {}\n",
        optional_currency(summary.budget_variance)
    ));

    for section in report_sections(data) {
        output.push_str(&format!("\n{}\n", section.title));
        output.push_str(&section_table(&section));
        output.push('\n');
    }

    if !data.category_breakdown.is_empty() {
        output.push_str("\nSpending by Category\n");
        let max = data
            .category_breakdown
            .iter()
            .map(|c| c.value)
            .fold(0.0, f64::max);
        for share in &data.category_breakdown {
            output.push_str(&format!(
                "{:<width$} {} {}\n",
                truncate(&share.name, LABEL_WIDTH),
                format_bar(share.value, max, BAR_WIDTH),
                format_currency(share.value),
                width = LABEL_WIDTH
            ));
        }
    }

    if !data.insights.is_empty() {
        output.push_str("\nInsights\n");
        for insight in &data.insights {
            let marker = match insight.kind {
                InsightKind::Positive => "+",
                InsightKind::Warning => "!",
                InsightKind::Info => "i",
            };
            output.push_str(&format!(
                "[{}] {}: {}\n",
                marker, insight.title, insight.description
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::demo_report;

    #[test]
    fn test_format_demo_report() {
        let output = format_report(&demo_report("6months"), "6months");

        assert!(output.starts_with("Expense Report (6months)"));
        assert!(output.contains("Total Spent:      $1400.00"));
        assert!(output.contains("Budget Variance:  $-250.00"));
        assert!(output.contains("Monthly Spending Trend"));
        assert!(output.contains("$-300.00"));
        assert!(output.contains("Food & Dining"));
        assert!(output.contains("[!] Budget Alert"));
    }

    #[test]
    fn test_format_empty_report() {
        let output = format_report(&ReportData::default(), "1month");
        assert!(output.contains("Average Monthly:  -"));
        assert!(output.contains("Weekly Spending"));
        assert!(!output.contains("Insights"));
    }
}
