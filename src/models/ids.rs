//! Strongly-typed ID wrapper for expenses

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Display prefix for expense IDs
const EXPENSE_PREFIX: &str = "exp-";

/// Unique identifier of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an ID from a full UUID string, with or without the display prefix
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        let s = s.strip_prefix(EXPENSE_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Check whether a user-supplied reference (short display form, full
    /// UUID, or a UUID prefix) points at this ID
    pub fn matches(&self, reference: &str) -> bool {
        let reference = reference.trim();
        let reference = reference.strip_prefix(EXPENSE_PREFIX).unwrap_or(reference);
        !reference.is_empty() && self.0.to_string().starts_with(&reference.to_lowercase())
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", EXPENSE_PREFIX, &self.0.to_string()[..8])
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
