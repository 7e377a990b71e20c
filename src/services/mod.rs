//! Service layer
//!
//! Business logic on top of the storage layer: validation, filtering,
//! statistics and CSV import.

pub mod expense;
pub mod import;

pub use expense::{ExpenseFilter, ExpenseService, ExpenseStats, ExpenseUpdate};
pub use import::{ImportResult, ImportService};
