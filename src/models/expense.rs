//! Expense model
//!
//! A single spending entry in the ledger. Amounts are stored as positive
//! floating-point currency values; rounding to cents happens at display time.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseId;
use crate::export::format_currency;

/// Maximum description length accepted by validation
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Spending category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transportation,
    Shopping,
    Utilities,
    Entertainment,
    Healthcare,
    Education,
    Travel,
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 9] = [
        Self::Food,
        Self::Transportation,
        Self::Shopping,
        Self::Utilities,
        Self::Entertainment,
        Self::Healthcare,
        Self::Education,
        Self::Travel,
        Self::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = ExpenseValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ExpenseValidationError::UnknownCategory(wanted.to_string()))
    }
}

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent (always positive)
    pub amount: f64,

    /// Spending category
    pub category: ExpenseCategory,

    /// Date of the expense
    pub date: NaiveDate,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// When the expense was created
    pub created_at: DateTime<Utc>,

    /// When the expense was last modified
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        amount: f64,
        category: ExpenseCategory,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            amount,
            category,
            date,
            description: description.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::NonFiniteAmount);
        }

        if self.amount <= 0.0 {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        let len = self.description.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            return Err(ExpenseValidationError::DescriptionTooLong(len));
        }

        Ok(())
    }

    /// Case-insensitive match against description or category name
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.description.to_lowercase().contains(&term)
            || self.category.name().to_lowercase().contains(&term)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date,
            self.category,
            format_currency(self.amount),
            self.description
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonFiniteAmount,
    NonPositiveAmount,
    DescriptionTooLong(usize),
    UnknownCategory(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteAmount => write!(f, "Amount must be a number"),
            Self::NonPositiveAmount => write!(f, "Amount must be a positive number"),
            Self::DescriptionTooLong(len) => write!(
                f,
                "Description too long ({} chars, max {})",
                len, MAX_DESCRIPTION_LEN
            ),
            Self::UnknownCategory(name) => write!(
                f,
                "Unknown category '{}'. Expected one of: Food, Transportation, Shopping, \
                 Utilities, Entertainment, Healthcare, Education, Travel, Other",
                name
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
