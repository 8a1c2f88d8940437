//! Period aggregation
//!
//! Filters transactions into a budget cycle and totals them by type and by
//! expense category.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Money, Period, Transaction, TransactionKind};

/// Totals for one budget cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub period: Period,
    pub income: Money,
    pub expenses: Money,
    /// Income minus expenses; negative when overspent
    pub balance: Money,
    /// Expense totals per category; income never appears here
    pub category_totals: BTreeMap<String, Money>,
    /// Transactions inside the period, in the order they were recorded
    pub transactions: Vec<Transaction>,
}

/// One slice of the expense breakdown chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    /// Share of total expenses, 0-100
    pub percentage: f64,
}

/// Aggregate the transactions that fall inside `period`
pub fn aggregate(transactions: &[Transaction], period: &Period) -> PeriodSummary {
    let mut income = Money::zero();
    let mut expenses = Money::zero();
    let mut category_totals: BTreeMap<String, Money> = BTreeMap::new();
    let mut in_period = Vec::new();

    for txn in transactions.iter().filter(|t| period.contains(t.date)) {
        match txn.kind {
            TransactionKind::Income => income += txn.amount,
            TransactionKind::Expense => {
                expenses += txn.amount;
                *category_totals.entry(txn.category.clone()).or_default() += txn.amount;
            }
        }
        in_period.push(txn.clone());
    }

    PeriodSummary {
        period: *period,
        income,
        expenses,
        balance: income - expenses,
        category_totals,
        transactions: in_period,
    }
}

impl PeriodSummary {
    /// Expense total for a category, zero when nothing was spent
    pub fn spent_in(&self, category: &str) -> Money {
        self.category_totals.get(category).copied().unwrap_or_default()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// The last `count` recorded transactions, most recent first
    pub fn recent(&self, count: usize) -> Vec<&Transaction> {
        let skip = self.transactions.len().saturating_sub(count);
        self.transactions[skip..].iter().rev().collect()
    }

    /// Each expense category's share of total expenses
    ///
    /// Largest first; equal amounts are ordered by category name.
    pub fn category_breakdown(&self) -> Vec<CategoryShare> {
        let total = self.expenses.cents();
        let mut shares: Vec<CategoryShare> = self
            .category_totals
            .iter()
            .map(|(category, amount)| CategoryShare {
                category: category.clone(),
                amount: *amount,
                percentage: if total == 0 {
                    0.0
                } else {
                    amount.cents() as f64 * 100.0 / total as f64
                },
            })
            .collect();

        // BTreeMap iteration is already name-ordered, and the sort is stable
        shares.sort_by(|a, b| b.amount.cmp(&a.amount));
        shares
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(kind: TransactionKind, units: i64, category: &str, on: NaiveDate) -> Transaction {
        Transaction::new(kind, Money::from_units(units), category, on).unwrap()
    }

    fn july() -> Period {
        Period::new(date(2025, 7, 1), date(2025, 7, 31))
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(TransactionKind::Expense, 4500, "Food", date(2025, 7, 3)),
            txn(TransactionKind::Income, 85_000, "Salary", date(2025, 7, 1)),
            txn(TransactionKind::Expense, 45_000, "Housing", date(2025, 7, 5)),
        ]
    }

    #[test]
    fn test_totals() {
        let summary = aggregate(&sample(), &july());

        assert_eq!(summary.income, Money::from_units(85_000));
        assert_eq!(summary.expenses, Money::from_units(49_500));
        assert_eq!(summary.balance, Money::from_units(35_500));
        assert_eq!(summary.category_totals.len(), 2);
        assert_eq!(summary.spent_in("Food"), Money::from_units(4500));
        assert_eq!(summary.spent_in("Housing"), Money::from_units(45_000));
        assert!(!summary.category_totals.contains_key("Salary"));
    }

    #[test]
    fn test_empty_input() {
        let summary = aggregate(&[], &july());
        assert!(summary.income.is_zero());
        assert!(summary.expenses.is_zero());
        assert!(summary.balance.is_zero());
        assert!(summary.category_totals.is_empty());
        assert!(summary.transactions.is_empty());
    }

    #[test]
    fn test_filters_by_inclusive_period() {
        let transactions = vec![
            txn(TransactionKind::Expense, 10, "Food", date(2025, 6, 30)),
            txn(TransactionKind::Expense, 20, "Food", date(2025, 7, 1)),
            txn(TransactionKind::Expense, 30, "Food", date(2025, 7, 31)),
            txn(TransactionKind::Expense, 40, "Food", date(2025, 8, 1)),
        ];
        let summary = aggregate(&transactions, &july());
        assert_eq!(summary.expenses, Money::from_units(50));
        assert_eq!(summary.transaction_count(), 2);
    }

    #[test]
    fn test_negative_balance() {
        let transactions = vec![
            txn(TransactionKind::Income, 100, "Salary", date(2025, 7, 1)),
            txn(TransactionKind::Expense, 250, "Bills", date(2025, 7, 2)),
        ];
        let summary = aggregate(&transactions, &july());
        assert_eq!(summary.balance, Money::from_units(-150));
    }

    #[test]
    fn test_invariants_hold() {
        let mut transactions = sample();
        transactions.push(Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(1),
            "Food",
            date(2025, 7, 9),
        )
        .unwrap());
        transactions.push(Transaction::new(
            TransactionKind::Income,
            Money::from_cents(33),
            "Gift",
            date(2025, 7, 9),
        )
        .unwrap());

        let summary = aggregate(&transactions, &july());
        assert_eq!(summary.income - summary.expenses, summary.balance);
        let category_sum: Money = summary.category_totals.values().sum();
        assert_eq!(category_sum, summary.expenses);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let transactions = sample();
        let first = aggregate(&transactions, &july());
        let second = aggregate(&transactions, &july());
        assert_eq!(first, second);
    }

    #[test]
    fn test_preserves_insertion_order_and_recent() {
        let summary = aggregate(&sample(), &july());
        let categories: Vec<_> = summary.transactions.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(categories, vec!["Food", "Salary", "Housing"]);

        let recent: Vec<_> = summary.recent(2).iter().map(|t| t.category.as_str()).collect();
        assert_eq!(recent, vec!["Housing", "Salary"]);
        assert_eq!(summary.recent(10).len(), 3);
    }

    #[test]
    fn test_category_breakdown() {
        let mut transactions = sample();
        transactions.push(txn(TransactionKind::Expense, 4500, "Bills", date(2025, 7, 4)));
        let summary = aggregate(&transactions, &july());
        let breakdown = summary.category_breakdown();

        let order: Vec<_> = breakdown.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(order, vec!["Housing", "Bills", "Food"]);
        assert_eq!(breakdown[0].percentage, 45_000.0 * 100.0 / 54_000.0);

        let total: f64 = breakdown.iter().map(|s| s.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_empty_when_no_expenses() {
        let summary = aggregate(&[], &july());
        assert!(summary.category_breakdown().is_empty());
    }
}
