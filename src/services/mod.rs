//! Service layer for Mahana Budget
//!
//! Pure computations (period resolution, aggregation, budget evaluation) plus
//! the stateful ledger and the session that persists it.

pub mod aggregate;
pub mod budget;
pub mod ledger;
pub mod period;
pub mod session;

pub use aggregate::{aggregate, CategoryShare, PeriodSummary};
pub use budget::{budget_progress, evaluate_budget, get_alerts};
pub use ledger::Ledger;
pub use period::{resolve_period, PeriodResolver};
pub use session::Session;
