//! Key metrics shown above the report charts

use serde::{Deserialize, Serialize};

use crate::models::ReportData;

/// Headline numbers derived from report figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Sum of the category breakdown values
    pub total_spent: f64,
    /// Mean monthly amount; `None` without monthly figures
    pub average_monthly: Option<f64>,
    /// Latest month amount minus its budget; `None` without monthly figures
    pub budget_variance: Option<f64>,
}

impl ReportSummary {
    pub fn from_report(data: &ReportData) -> Self {
        let total_spent = data.category_breakdown.iter().map(|c| c.value).sum();

        let months = &data.monthly_trend;
        let average_monthly = if months.is_empty() {
            None
        } else {
            Some(months.iter().map(|m| m.amount).sum::<f64>() / months.len() as f64)
        };

        Self {
            total_spent,
            average_monthly,
            budget_variance: months.last().map(|m| m.variance()),
        }
    }

    /// Whether the latest month stayed within budget
    pub fn within_budget(&self) -> bool {
        self.budget_variance.map_or(true, |v| v <= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::demo_report;

    #[test]
    fn test_demo_summary() {
        let summary = ReportSummary::from_report(&demo_report("6months"));
        assert_eq!(summary.total_spent, 1400.0);
        assert!((summary.average_monthly.unwrap() - 7250.0 / 6.0).abs() < 1e-9);
        assert_eq!(summary.budget_variance, Some(-250.0));
        assert!(summary.within_budget());
    }

    #[test]
    fn test_empty_summary() {
        let summary = ReportSummary::from_report(&ReportData::default());
        assert_eq!(summary.total_spent, 0.0);
        assert_eq!(summary.average_monthly, None);
        assert_eq!(summary.budget_variance, None);
        assert!(summary.within_budget());
    }
}
