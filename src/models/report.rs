//! Aggregated report data
//!
//! `ReportData` is the read-only input of the report exporters. It is built
//! fresh for each report period and discarded once an artifact is written.
//! Field names serialize in camelCase to match the dashboard's JSON payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Spending against budget for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// Month label, e.g. "Jan"
    pub month: String,
    /// Amount spent
    pub amount: f64,
    /// Budget for the month
    pub budget: f64,
}

impl MonthlyTrend {
    pub fn new(month: impl Into<String>, amount: f64, budget: f64) -> Self {
        Self {
            month: month.into(),
            amount,
            budget,
        }
    }

    /// Spending minus budget; positive means over budget
    pub fn variance(&self) -> f64 {
        self.amount - self.budget
    }
}

/// Share of spending for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category label
    pub name: String,
    /// Amount spent in the category
    pub value: f64,
    /// Supplied share of total spending, 0-100 (not re-derived)
    pub percentage: f64,
}

impl CategoryShare {
    pub fn new(name: impl Into<String>, value: f64, percentage: f64) -> Self {
        Self {
            name: name.into(),
            value,
            percentage,
        }
    }
}

/// Spending total for one week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySpending {
    /// Week label, e.g. "Week 1"
    pub week: String,
    pub amount: f64,
}

impl WeeklySpending {
    pub fn new(week: impl Into<String>, amount: f64) -> Self {
        Self {
            week: week.into(),
            amount,
        }
    }
}

/// Tone of an insight message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Warning,
    Info,
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A display-only observation about spending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}

impl Insight {
    pub fn new(kind: InsightKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Aggregated figures for one report period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    /// Chronologically ordered monthly spending vs budget
    pub monthly_trend: Vec<MonthlyTrend>,
    /// Spending per category
    pub category_breakdown: Vec<CategoryShare>,
    /// Spending per week
    pub weekly_spending: Vec<WeeklySpending>,
    /// Observations shown alongside the figures
    pub insights: Vec<Insight>,
}

impl ReportData {
    /// Check whether every section is empty
    pub fn is_empty(&self) -> bool {
        self.monthly_trend.is_empty()
            && self.category_breakdown.is_empty()
            && self.weekly_spending.is_empty()
            && self.insights.is_empty()
    }
}
