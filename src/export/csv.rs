//! CSV report export
//!
//! Line-oriented layout: title, period, a blank line, then one block per
//! section (section title, column header, one line per row), with blocks
//! separated by a blank line.
//!
//! Fields containing a delimiter, quote, or line break are quoted RFC 4180
//! style. All other fields are written verbatim, so ordinary reports are
//! identical to a plain comma join.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ReportData;

use super::sections::{period_line, report_sections, REPORT_TITLE};

/// Write a report as delimited text
pub fn write_report_csv<W: Write>(
    data: &ReportData,
    period: &str,
    writer: &mut W,
) -> ExpenseResult<()> {
    writeln!(writer, "{}", escape_csv(REPORT_TITLE)).map_err(export_err)?;
    writeln!(writer, "{}", escape_csv(&period_line(period))).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    for (index, section) in report_sections(data).iter().enumerate() {
        if index > 0 {
            writeln!(writer).map_err(export_err)?;
        }

        writeln!(writer, "{}", section.title).map_err(export_err)?;
        writeln!(writer, "{}", section.columns.join(",")).map_err(export_err)?;

        for row in &section.rows {
            let line: Vec<String> = row.iter().map(|field| escape_csv(field)).collect();
            writeln!(writer, "{}", line.join(",")).map_err(export_err)?;
        }
    }

    Ok(())
}

fn export_err(e: std::io::Error) -> ExpenseError {
    ExpenseError::Export(e.to_string())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryShare, Insight, InsightKind, MonthlyTrend, WeeklySpending};

    fn render(data: &ReportData, period: &str) -> String {
        let mut out = Vec::new();
        write_report_csv(data, period, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample() -> ReportData {
        ReportData {
            monthly_trend: vec![MonthlyTrend::new("Jan", 1200.0, 1500.0)],
            category_breakdown: vec![CategoryShare::new("Food", 450.0, 32.0)],
            weekly_spending: vec![WeeklySpending::new("Week 1", 280.0)],
            insights: vec![Insight::new(
                InsightKind::Info,
                "Spending Pattern",
                "Your highest spending day is typically Friday.",
            )],
        }
    }

    #[test]
    fn test_end_to_end_lines() {
        let csv = render(&sample(), "6months");
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Expense Report",
                "Period: 6months",
                "",
                "Monthly Spending Trend",
                "Month,Spent,Budget,Variance",
                "Jan,$1200.00,$1500.00,$-300.00",
                "",
                "Category Breakdown",
                "Category,Amount,Percentage",
                "Food,$450.00,32%",
                "",
                "Weekly Spending",
                "Week,Amount",
                "Week 1,$280.00",
            ]
        );
    }

    #[test]
    fn test_halfway_cents_round_up_in_rows() {
        let data = ReportData {
            monthly_trend: vec![MonthlyTrend::new("Jan", 1250.125, 1000.0)],
            ..ReportData::default()
        };
        let csv = render(&data, "6months");
        assert!(csv.contains("Jan,$1250.13,$1000.00,$250.13\n"));
    }

    #[test]
    fn test_insights_not_exported() {
        let csv = render(&sample(), "6months");
        assert!(!csv.contains("Friday"));
    }

    #[test]
    fn test_empty_sections_keep_headers() {
        let csv = render(&ReportData::default(), "1month");
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[3], "Monthly Spending Trend");
        assert_eq!(lines[4], "Month,Spent,Budget,Variance");
        // Next line is the separator before the category section
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "Category Breakdown");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_fields_with_delimiters_are_quoted() {
        let mut data = sample();
        data.category_breakdown[0].name = "Food & Dining, out".into();
        data.weekly_spending[0].week = "Week \"1\"".into();

        let csv = render(&data, "q1, 2024");
        assert!(csv.contains("\"Period: q1, 2024\"\n"));
        assert!(csv.contains("\"Food & Dining, out\",$450.00,32%\n"));
        assert!(csv.contains("\"Week \"\"1\"\"\",$280.00\n"));
    }

    #[test]
    fn test_nan_formatted_as_is() {
        let mut data = sample();
        data.monthly_trend[0].amount = f64::NAN;

        let csv = render(&data, "6months");
        assert!(csv.contains("Jan,$NaN,$1500.00,$NaN\n"));
    }
}
