//! Core data models for Mahana Budget
//!
//! This module contains the data structures of the budgeting domain:
//! transactions, the category registry, budget limits and budget cycles.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{
    BudgetAlert, BudgetEvaluation, BudgetLimits, BudgetStatus, CategoryProgress, Severity,
};
pub use category::CategoryRegistry;
pub use ids::TransactionId;
pub use money::Money;
pub use period::{CycleDay, MonthOverflow, Period};
pub use transaction::{NewTransaction, Transaction, TransactionKind};
