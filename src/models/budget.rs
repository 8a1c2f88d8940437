//! Budget limits and budget status
//!
//! A limit caps monthly spending in one expense category. The status types
//! describe how far a category's spend has progressed toward its limit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::money::Money;

/// Spending limits keyed by expense category name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetLimits(BTreeMap<String, Money>);

impl BudgetLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: &str) -> Option<Money> {
        self.0.get(category).copied()
    }

    /// Insert or replace the limit for a category
    pub fn set(&mut self, category: impl Into<String>, limit: Money) -> Option<Money> {
        self.0.insert(category.into(), limit)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Limits in category-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.0.iter().map(|(name, limit)| (name.as_str(), *limit))
    }
}

impl FromIterator<(String, Money)> for BudgetLimits {
    fn from_iter<I: IntoIterator<Item = (String, Money)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Alert colour for a budget status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Green,
    Yellow,
    Red,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Green => write!(f, "green"),
            Self::Yellow => write!(f, "yellow"),
            Self::Red => write!(f, "red"),
        }
    }
}

/// Classification of a category's spend against its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    NoLimit,
    OnTrack,
    Warning,
    DangerZone,
    OverBudget,
}

impl BudgetStatus {
    /// Label shown next to progress bars
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoLimit => "No limit set",
            Self::OnTrack => "On track",
            Self::Warning => "Warning",
            Self::DangerZone => "Danger zone",
            Self::OverBudget => "Over budget",
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        match self {
            Self::NoLimit => None,
            Self::OnTrack => Some(Severity::Green),
            Self::Warning => Some(Severity::Yellow),
            Self::DangerZone | Self::OverBudget => Some(Severity::Red),
        }
    }

    /// Whether this status belongs in the alert feed
    pub fn is_alert(&self) -> bool {
        matches!(self.severity(), Some(Severity::Yellow | Severity::Red))
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of evaluating one category against its limit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetEvaluation {
    pub spent: Money,
    pub limit: Option<Money>,
    /// Spend as a percentage of the limit; `None` when no limit applies
    pub percentage: Option<f64>,
    pub status: BudgetStatus,
}

impl BudgetEvaluation {
    pub fn severity(&self) -> Option<Severity> {
        self.status.severity()
    }

    /// Amount left before the limit is reached (negative when over)
    pub fn remaining(&self) -> Option<Money> {
        self.limit.map(|limit| limit - self.spent)
    }
}

/// A category that has crossed the warning threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetAlert {
    pub category: String,
    pub spent: Money,
    pub limit: Money,
    pub percentage: f64,
    pub status: BudgetStatus,
    pub severity: Severity,
}

/// Evaluation for one limited category, used for progress bars
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryProgress {
    pub category: String,
    pub evaluation: BudgetEvaluation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_set_and_replace() {
        let mut limits = BudgetLimits::new();
        assert!(limits.set("Food", Money::from_units(100)).is_none());
        assert_eq!(
            limits.set("Food", Money::from_units(200)),
            Some(Money::from_units(100))
        );
        assert_eq!(limits.get("Food"), Some(Money::from_units(200)));
        assert_eq!(limits.len(), 1);
    }

    #[test]
    fn test_limits_serialize_as_map() {
        let limits: BudgetLimits = vec![("Food".to_string(), Money::from_units(250))]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&limits).unwrap();
        assert_eq!(json, r#"{"Food":25000}"#);
    }

    #[test]
    fn test_status_labels_and_severity() {
        assert_eq!(BudgetStatus::NoLimit.label(), "No limit set");
        assert_eq!(BudgetStatus::OverBudget.to_string(), "Over budget");
        assert_eq!(BudgetStatus::DangerZone.severity(), Some(Severity::Red));
        assert_eq!(BudgetStatus::Warning.severity(), Some(Severity::Yellow));
        assert_eq!(BudgetStatus::OnTrack.severity(), Some(Severity::Green));
        assert!(BudgetStatus::Warning.is_alert());
        assert!(!BudgetStatus::OnTrack.is_alert());
        assert!(!BudgetStatus::NoLimit.is_alert());
    }
}
