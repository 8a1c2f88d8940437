//! Export module for Mahana Budget
//!
//! - CSV: transactions of a budget cycle (spreadsheet-compatible)
//! - JSON: the complete ledger, versioned

pub mod csv;
pub mod json;

pub use csv::export_transactions_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
