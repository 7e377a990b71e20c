//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
}

/// Newest date first, then most recently created
fn sort_newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), ExpenseError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for expense in file_data.expenses {
            data.insert(expense.id, expense);
        }

        tracing::debug!(count = data.len(), "loaded expenses");
        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        let expenses = self.get_all()?;
        write_json_atomic(&self.path, &ExpenseData { expenses })
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Resolve a user-supplied reference (display ID, UUID, or UUID prefix)
    ///
    /// Returns `Validation` when the reference is ambiguous.
    pub fn find(&self, reference: &str) -> Result<Option<Expense>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut matches = data.values().filter(|e| e.id.matches(reference));
        let first = matches.next().cloned();
        if matches.next().is_some() {
            return Err(ExpenseError::Validation(format!(
                "Expense reference '{}' is ambiguous",
                reference
            )));
        }
        Ok(first)
    }

    /// Get all expenses, newest first
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut expenses);
        Ok(expenses)
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense, returning whether it existed
    pub fn delete(&self, id: ExpenseId) -> Result<bool, ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Number of stored expenses
    pub fn count(&self) -> Result<usize, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn expense_on(day: u32, amount: f64) -> Expense {
        Expense::new(
            amount,
            ExpenseCategory::Food,
            NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            "Coffee",
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();

        let expense = expense_on(28, 25.0);
        let id = expense.id;
        repo.upsert(expense).unwrap();
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo2.load().unwrap();
        let loaded = repo2.get(id).unwrap().unwrap();
        assert_eq!(loaded.amount, 25.0);
    }

    #[test]
    fn test_get_all_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(expense_on(1, 10.0)).unwrap();
        repo.upsert(expense_on(30, 20.0)).unwrap();
        repo.upsert(expense_on(15, 30.0)).unwrap();

        let days: Vec<_> = repo
            .get_all()
            .unwrap()
            .iter()
            .map(|e| e.date.format("%d").to_string())
            .collect();
        assert_eq!(days, vec!["30", "15", "01"]);
    }

    #[test]
    fn test_find_by_display_id_and_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let expense = expense_on(3, 12.0);
        let id = expense.id;
        repo.upsert(expense).unwrap();

        let found = repo.find(&id.to_string()).unwrap().unwrap();
        assert_eq!(found.id, id);

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert!(repo.find(&id.to_string()).unwrap().is_none());
    }
}
