//! The budget ledger
//!
//! Owns every piece of engine state: recorded transactions, the category
//! registry, budget limits, the cycle start day and user settings. Mutators
//! validate first and only then touch state, so a rejected call leaves the
//! ledger exactly as it was.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{MahanaError, MahanaResult};
use crate::models::{
    BudgetAlert, BudgetLimits, CategoryProgress, CategoryRegistry, CycleDay, Money,
    MonthOverflow, NewTransaction, Period, Transaction, TransactionKind,
};

use super::aggregate::{aggregate, PeriodSummary};
use super::budget::{budget_progress, get_alerts};
use super::period::PeriodResolver;

/// In-memory engine state
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    categories: CategoryRegistry,
    limits: BudgetLimits,
    cycle_day: CycleDay,
    settings: Settings,
}

impl Ledger {
    /// A fresh ledger with default categories and no data
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from previously persisted parts
    pub fn from_parts(
        transactions: Vec<Transaction>,
        categories: CategoryRegistry,
        limits: BudgetLimits,
        cycle_day: CycleDay,
        settings: Settings,
    ) -> Self {
        Self {
            transactions,
            categories,
            limits,
            cycle_day,
            settings,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn limits(&self) -> &BudgetLimits {
        &self.limits
    }

    pub fn cycle_day(&self) -> CycleDay {
        self.cycle_day
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }

    // === Mutations ===

    /// Validate and append a transaction
    ///
    /// The category must be registered for the transaction's type; the
    /// registry's spelling is stored.
    pub fn add_transaction(&mut self, new: NewTransaction) -> MahanaResult<Transaction> {
        let kind = new.kind;
        let requested = new.category.trim().to_string();
        let mut txn = new.into_transaction()?;

        let canonical = self
            .categories
            .find(kind, &requested)
            .ok_or_else(|| MahanaError::category_not_found(format!("{} ({})", requested, kind)))?;
        txn.category = canonical.to_string();

        info!(
            id = %txn.id.short(),
            kind = %txn.kind,
            amount = %txn.amount,
            category = %txn.category,
            "transaction added"
        );
        self.transactions.push(txn.clone());
        Ok(txn)
    }

    /// Register a new category name for a transaction type
    pub fn add_category(&mut self, kind: TransactionKind, name: &str) -> MahanaResult<String> {
        let added = self.categories.add(kind, name)?;
        info!(kind = %kind, category = %added, "category added");
        Ok(added)
    }

    /// Set or replace the spending limit of an expense category
    ///
    /// `limit` is parsed as a decimal amount and must be positive.
    pub fn set_budget_limit(&mut self, category: &str, limit: &str) -> MahanaResult<Money> {
        let category = category.trim();
        if category.is_empty() {
            return Err(MahanaError::Validation("Category is required".into()));
        }
        if limit.trim().is_empty() {
            return Err(MahanaError::Validation("Limit is required".into()));
        }

        let limit = Money::parse(limit)?;
        if !limit.is_positive() {
            return Err(MahanaError::Validation(format!(
                "Budget limit must be greater than zero, got {}",
                limit
            )));
        }

        let canonical = self
            .categories
            .find(TransactionKind::Expense, category)
            .ok_or_else(|| MahanaError::category_not_found(format!("{} (expense)", category)))?
            .to_string();

        let previous = self.limits.set(canonical.clone(), limit);
        info!(category = %canonical, limit = %limit, previous = ?previous, "budget limit set");
        Ok(limit)
    }

    /// Change the day of the month on which budget cycles begin
    pub fn update_cycle_day(&mut self, day: u32) -> MahanaResult<CycleDay> {
        let day = CycleDay::new(day)?;
        debug!(from = %self.cycle_day, to = %day, "cycle day updated");
        self.cycle_day = day;
        Ok(day)
    }

    /// Choose how cycle days missing from short months are resolved
    pub fn set_month_overflow(&mut self, overflow: MonthOverflow) {
        debug!(from = %self.settings.month_overflow, to = %overflow, "month overflow updated");
        self.settings.month_overflow = overflow;
    }

    /// Remove every transaction, returning how many were removed
    ///
    /// Categories, limits and settings are kept.
    pub fn reset_transactions(&mut self) -> usize {
        let removed = self.transactions.len();
        self.transactions.clear();
        info!(removed, "all transactions removed");
        removed
    }

    /// Switch the display currency; amounts are not converted
    pub fn update_currency(&mut self, code: &str) -> MahanaResult<()> {
        self.settings.set_currency(code)?;
        info!(code = %self.settings.currency_code, "currency updated");
        Ok(())
    }

    /// Mark the first-run budget setup as done (or dismissed)
    pub fn complete_budget_setup(&mut self) {
        self.settings.budget_setup_completed = true;
    }

    /// Whether the first-run budget setup prompt should be shown
    pub fn needs_budget_setup(&self) -> bool {
        !self.settings.budget_setup_completed && self.limits.is_empty()
    }

    // === Queries ===

    pub fn resolver(&self) -> PeriodResolver {
        PeriodResolver::new(self.cycle_day, self.settings.month_overflow)
    }

    /// The budget cycle containing `today`
    pub fn current_period(&self, today: NaiveDate) -> Period {
        self.resolver().period_for_date(today)
    }

    /// Totals for the budget cycle containing `today`
    pub fn summary(&self, today: NaiveDate) -> PeriodSummary {
        self.summary_for(&self.current_period(today))
    }

    /// Totals for an arbitrary period
    pub fn summary_for(&self, period: &Period) -> PeriodSummary {
        aggregate(&self.transactions, period)
    }

    /// Limited categories at warning level or worse in the current cycle
    pub fn alerts(&self, today: NaiveDate) -> Vec<BudgetAlert> {
        get_alerts(&self.summary(today).category_totals, &self.limits)
    }

    /// Progress against every configured limit in the current cycle
    pub fn budget_progress(&self, today: NaiveDate) -> Vec<CategoryProgress> {
        budget_progress(&self.summary(today).category_totals, &self.limits)
    }

    /// The latest `count` transactions of the current cycle, newest first
    pub fn recent_transactions(&self, today: NaiveDate, count: usize) -> Vec<Transaction> {
        self.summary(today)
            .recent(count)
            .into_iter()
            .cloned()
            .collect()
    }
}
