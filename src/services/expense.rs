//! Expense service
//!
//! Business logic for the expense ledger: validated create/update/delete,
//! filtering, dashboard statistics and demo seeding.

use chrono::{Datelike, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseCategory};
use crate::reports::demo_expenses;
use crate::storage::Storage;

/// Filter applied when listing expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Case-insensitive substring over description and category
    pub search: Option<String>,
    /// Exact category
    pub category: Option<ExpenseCategory>,
}

impl ExpenseFilter {
    pub fn matches(&self, expense: &Expense) -> bool {
        let search_ok = self
            .search
            .as_deref()
            .map_or(true, |term| expense.matches_search(term));
        let category_ok = self.category.map_or(true, |c| expense.category == c);
        search_ok && category_ok
    }
}

/// Fields to replace on an existing expense; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<f64>,
    pub category: Option<ExpenseCategory>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Dashboard statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpenseStats {
    /// Sum of every expense
    pub total: f64,
    /// Sum of expenses in the current calendar month
    pub this_month: f64,
    /// Total divided by the number of days between first and last expense
    pub average_per_day: f64,
    pub count: usize,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    pub fn create(
        &self,
        amount: f64,
        category: ExpenseCategory,
        date: NaiveDate,
        description: &str,
    ) -> ExpenseResult<Expense> {
        let expense = Expense::new(amount, category, date, description.trim());

        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        tracing::info!(id = %expense.id, amount, %category, "Added expense");
        Ok(expense)
    }

    /// Resolve an expense reference, failing with `NotFound`
    pub fn find(&self, reference: &str) -> ExpenseResult<Expense> {
        self.storage
            .expenses
            .find(reference)?
            .ok_or_else(|| ExpenseError::expense_not_found(reference))
    }

    /// Replace fields of an existing expense, keeping its id
    pub fn update(&self, reference: &str, update: ExpenseUpdate) -> ExpenseResult<Expense> {
        let mut expense = self.find(reference)?;

        if let Some(amount) = update.amount {
            expense.amount = amount;
        }
        if let Some(category) = update.category {
            expense.category = category;
        }
        if let Some(date) = update.date {
            expense.date = date;
        }
        if let Some(description) = update.description {
            expense.description = description.trim().to_string();
        }
        expense.updated_at = chrono::Utc::now();

        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        tracing::info!(id = %expense.id, "Updated expense");
        Ok(expense)
    }

    /// Delete an expense, returning the removed entry
    pub fn delete(&self, reference: &str) -> ExpenseResult<Expense> {
        let expense = self.find(reference)?;

        self.storage.expenses.delete(expense.id)?;
        self.storage.expenses.save()?;

        tracing::info!(id = %expense.id, "Deleted expense");
        Ok(expense)
    }

    /// List expenses matching a filter, newest first
    pub fn list(&self, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        Ok(self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect())
    }

    /// Dashboard statistics as of `today`
    pub fn stats(&self, today: NaiveDate) -> ExpenseResult<ExpenseStats> {
        let expenses = self.storage.expenses.get_all()?;

        let total: f64 = expenses.iter().map(|e| e.amount).sum();
        let this_month = expenses
            .iter()
            .filter(|e| e.date.year() == today.year() && e.date.month() == today.month())
            .map(|e| e.amount)
            .sum();

        let first = expenses.iter().map(|e| e.date).min();
        let last = expenses.iter().map(|e| e.date).max();
        let average_per_day = match (first, last) {
            (Some(first), Some(last)) => {
                let days = (last - first).num_days() + 1;
                total / days as f64
            }
            _ => 0.0,
        };

        Ok(ExpenseStats {
            total,
            this_month,
            average_per_day,
            count: expenses.len(),
        })
    }

    /// Insert the demo expenses if the ledger is empty
    ///
    /// Returns the number of expenses added.
    pub fn seed_demo(&self) -> ExpenseResult<usize> {
        if self.storage.expenses.count()? > 0 {
            tracing::debug!("Ledger not empty, skipping demo data");
            return Ok(0);
        }

        let expenses = demo_expenses();
        let count = expenses.len();
        for expense in expenses {
            self.storage.expenses.upsert(expense)?;
        }
        self.storage.expenses.save()?;

        tracing::info!(count, "Seeded demo expenses");
        Ok(count)
    }
}
