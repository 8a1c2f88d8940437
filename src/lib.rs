//! Mahana Budget - personal budget tracking with monthly budget cycles
//!
//! This library provides the budget ledger engine: users record income and
//! expense transactions, and the engine totals them for a "budget cycle"
//! (a month-long window that may start on any day of the month) and classifies
//! spending against per-category limits.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data types (money, transactions, categories, limits, periods)
//! - `services`: Period resolution, aggregation, budget evaluation, the ledger
//!   and the persistent session
//! - `storage`: Key-value persistence (JSON files or memory)
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `display`, `export`, `cli`: The command-line front end
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use mahana::models::{NewTransaction, TransactionKind};
//! use mahana::services::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.update_cycle_day(15).unwrap();
//!
//! let today = NaiveDate::from_ymd_opt(2025, 7, 10).unwrap();
//! ledger
//!     .add_transaction(NewTransaction::new(TransactionKind::Expense, "4500", "Food", today))
//!     .unwrap();
//!
//! let summary = ledger.summary(today);
//! assert_eq!(summary.period.start, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
//! assert_eq!(summary.expenses.units(), 4500);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{MahanaError, MahanaResult};
