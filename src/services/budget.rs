//! Budget evaluation
//!
//! Classifies category spend against configured limits and builds the
//! dashboard alert feed.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{
    BudgetAlert, BudgetEvaluation, BudgetLimits, BudgetStatus, CategoryProgress, Money,
};

/// Percentage thresholds, checked from the top down
const OVER_BUDGET_PERCENT: i128 = 100;
const DANGER_PERCENT: i128 = 90;
const WARNING_PERCENT: i128 = 70;

/// Classify `spent` against `limit`
///
/// Threshold checks compare `spent * 100` with `limit * threshold` in integer
/// cents, so 70%, 90% and 100% are hit exactly.
pub fn evaluate_budget(spent: Money, limit: Option<Money>) -> BudgetEvaluation {
    let limit = match limit {
        Some(limit) if limit.is_positive() => limit,
        _ => {
            return BudgetEvaluation {
                spent,
                limit: None,
                percentage: None,
                status: BudgetStatus::NoLimit,
            }
        }
    };

    let scaled_spent = i128::from(spent.cents()) * 100;
    let reaches = |percent: i128| scaled_spent >= i128::from(limit.cents()) * percent;

    let status = if reaches(OVER_BUDGET_PERCENT) {
        BudgetStatus::OverBudget
    } else if reaches(DANGER_PERCENT) {
        BudgetStatus::DangerZone
    } else if reaches(WARNING_PERCENT) {
        BudgetStatus::Warning
    } else {
        BudgetStatus::OnTrack
    };

    BudgetEvaluation {
        spent,
        limit: Some(limit),
        percentage: Some(spent.cents() as f64 * 100.0 / limit.cents() as f64),
        status,
    }
}

/// Categories at warning level or worse, highest percentage first
///
/// Equal percentages are ordered by category name.
pub fn get_alerts(category_totals: &BTreeMap<String, Money>, limits: &BudgetLimits) -> Vec<BudgetAlert> {
    let mut alerts: Vec<BudgetAlert> = category_totals
        .iter()
        .filter_map(|(category, spent)| {
            let evaluation = evaluate_budget(*spent, limits.get(category));
            let severity = evaluation.severity()?;
            if !evaluation.status.is_alert() {
                return None;
            }
            Some(BudgetAlert {
                category: category.clone(),
                spent: *spent,
                limit: evaluation.limit?,
                percentage: evaluation.percentage?,
                status: evaluation.status,
                severity,
            })
        })
        .collect();

    alerts.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    alerts
}

/// Evaluation for every category that has a limit, by category name
///
/// Categories with a limit but no spending show as on track at 0%.
pub fn budget_progress(
    category_totals: &BTreeMap<String, Money>,
    limits: &BudgetLimits,
) -> Vec<CategoryProgress> {
    limits
        .iter()
        .map(|(category, limit)| {
            let spent = category_totals.get(category).copied().unwrap_or_default();
            CategoryProgress {
                category: category.to_string(),
                evaluation: evaluate_budget(spent, Some(limit)),
            }
        })
        .collect()
}
