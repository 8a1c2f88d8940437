//! Display formatting for terminal output
//!
//! Turns engine results into tables and text blocks. Every formatter takes
//! the currency symbol to print in front of amounts.

pub mod budget;
pub mod category;
pub mod summary;
pub mod transaction;

pub use budget::{format_alerts, format_limits, format_progress, progress_bar};
pub use category::format_category_list;
pub use summary::{format_breakdown, format_summary};
pub use transaction::{format_transaction_details, format_transaction_table};
