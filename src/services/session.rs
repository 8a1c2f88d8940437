//! Persistent session
//!
//! A [`Session`] loads a [`Ledger`] from a [`Store`] once and writes back the
//! affected keys after every successful mutation. Persistence is best effort:
//! a failed save is logged and the in-memory ledger stays authoritative.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::{MahanaPaths, Settings};
use crate::error::MahanaResult;
use crate::models::{
    BudgetLimits, CategoryRegistry, CycleDay, Money, MonthOverflow, NewTransaction, Transaction,
    TransactionKind,
};
use crate::storage::{load, save, JsonFileStore, StorageKey, Store};

use super::aggregate::PeriodSummary;
use super::ledger::Ledger;

/// A ledger bound to its persistence collaborator
pub struct Session {
    ledger: Ledger,
    store: Box<dyn Store>,
}

impl Session {
    /// Load every key from `store`, using defaults for anything missing
    pub fn open(store: Box<dyn Store>) -> Self {
        let source = store.as_ref();
        let transactions: Vec<Transaction> = load(source, StorageKey::Transactions, Vec::new())
            .into_iter()
            .filter(|txn: &Transaction| match txn.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!(id = %txn.id, error = %e, "dropping invalid stored transaction");
                    false
                }
            })
            .collect();
        let limits: BudgetLimits = load(source, StorageKey::BudgetLimits, BudgetLimits::new());
        let cycle_day: CycleDay = load(source, StorageKey::CycleStartDay, CycleDay::default());
        let categories: CategoryRegistry =
            load(source, StorageKey::Categories, CategoryRegistry::default());
        let settings: Settings = load(source, StorageKey::Settings, Settings::default());

        debug!(
            transactions = transactions.len(),
            limits = limits.len(),
            cycle_day = %cycle_day,
            "session loaded"
        );

        Self {
            ledger: Ledger::from_parts(transactions, categories, limits, cycle_day, settings),
            store,
        }
    }

    /// Open a session backed by JSON files under `paths`
    pub fn open_files(paths: MahanaPaths) -> Self {
        info!(dir = %paths.data_dir().display(), "opening data directory");
        Self::open(Box::new(JsonFileStore::new(paths)))
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn persist(&self, key: StorageKey) -> bool {
        let store = self.store.as_ref();
        match key {
            StorageKey::Transactions => save(store, key, self.ledger.transactions()),
            StorageKey::BudgetLimits => save(store, key, self.ledger.limits()),
            StorageKey::CycleStartDay => save(store, key, &self.ledger.cycle_day()),
            StorageKey::Categories => save(store, key, self.ledger.categories()),
            StorageKey::Settings => save(store, key, self.ledger.settings()),
        }
    }

    /// Write every key, reporting whether all saves succeeded
    pub fn persist_all(&self) -> bool {
        StorageKey::all()
            .iter()
            .fold(true, |ok, key| self.persist(*key) && ok)
    }

    pub fn add_transaction(&mut self, new: NewTransaction) -> MahanaResult<Transaction> {
        let txn = self.ledger.add_transaction(new)?;
        self.persist(StorageKey::Transactions);
        Ok(txn)
    }

    pub fn add_category(&mut self, kind: TransactionKind, name: &str) -> MahanaResult<String> {
        let added = self.ledger.add_category(kind, name)?;
        self.persist(StorageKey::Categories);
        Ok(added)
    }

    pub fn set_budget_limit(&mut self, category: &str, limit: &str) -> MahanaResult<Money> {
        let limit = self.ledger.set_budget_limit(category, limit)?;
        self.persist(StorageKey::BudgetLimits);
        Ok(limit)
    }

    pub fn update_cycle_day(&mut self, day: u32) -> MahanaResult<CycleDay> {
        let day = self.ledger.update_cycle_day(day)?;
        self.persist(StorageKey::CycleStartDay);
        Ok(day)
    }

    pub fn set_month_overflow(&mut self, overflow: MonthOverflow) {
        self.ledger.set_month_overflow(overflow);
        self.persist(StorageKey::Settings);
    }

    pub fn reset_transactions(&mut self) -> usize {
        let removed = self.ledger.reset_transactions();
        self.persist(StorageKey::Transactions);
        removed
    }

    pub fn update_currency(&mut self, code: &str) -> MahanaResult<()> {
        self.ledger.update_currency(code)?;
        self.persist(StorageKey::Settings);
        Ok(())
    }

    pub fn complete_budget_setup(&mut self) {
        self.ledger.complete_budget_setup();
        self.persist(StorageKey::Settings);
    }

    /// Shorthand for the current cycle's summary
    pub fn summary(&self, today: NaiveDate) -> PeriodSummary {
        self.ledger.summary(today)
    }
}
