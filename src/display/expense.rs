//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::export::format_currency;
use crate::models::Expense;
use crate::services::ExpenseStats;

use super::truncate;

const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, date_format: &str) -> Self {
        let description = if expense.description.is_empty() {
            "No description".to_string()
        } else {
            truncate(&expense.description, DESCRIPTION_WIDTH)
        };

        Self {
            id: expense.id.to_string(),
            date: expense.date.format(date_format).to_string(),
            category: expense.category.to_string(),
            amount: format_currency(expense.amount),
            description,
        }
    }
}

/// Format a list of expenses as a table
pub fn format_expense_list(expenses: &[Expense], date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow::new(e, date_format))
        .collect();

    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!(
        "{}\n{} expense(s), {} total",
        table,
        expenses.len(),
        format_currency(total)
    )
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!("Amount:      {}\n", format_currency(expense.amount)));
    output.push_str(&format!("Category:    {}\n", expense.category));

    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }

    output
}

/// Format dashboard statistics
pub fn format_stats(stats: &ExpenseStats) -> String {
    format!(
        "Total Expenses:   {}\n\
         This Month:       {}\n\
         Per Day Average:  {}\n\
         Transactions:     {}\n",
        format_currency(stats.total),
        format_currency(stats.this_month),
        format_currency(stats.average_per_day),
        stats.count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;
    use chrono::NaiveDate;

    fn sample() -> Expense {
        Expense::new(
            89.99,
            ExpenseCategory::Shopping,
            NaiveDate::from_ymd_opt(2024, 6, 29).unwrap(),
            "New wireless headphones from online store",
        )
    }

    #[test]
    fn test_expense_list_table() {
        let output = format_expense_list(&[sample()], "%Y-%m-%d");
        assert!(output.contains("Category"));
        assert!(output.contains("2024-06-29"));
        assert!(output.contains("$89.99"));
        assert!(output.contains("1 expense(s), $89.99 total"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&[], "%Y-%m-%d"), "No expenses found.");
    }

    #[test]
    fn test_details() {
        let expense = sample();
        let output = format_expense_details(&expense);
        assert!(output.contains(&expense.id.to_string()));
        assert!(output.contains("Shopping"));
    }

    #[test]
    fn test_stats() {
        let stats = ExpenseStats {
            total: 740.99,
            this_month: 45.5,
            average_per_day: 92.62375,
            count: 8,
        };
        let output = format_stats(&stats);
        assert!(output.contains("$740.99"));
        assert!(output.contains("$92.62"));
        assert!(output.contains("Transactions:     8"));
    }
}
