//! JSON export of the complete ledger
//!
//! Everything the session persists, in one versioned document.

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::MahanaResult;
use crate::models::{BudgetLimits, CategoryRegistry, CycleDay, Transaction};
use crate::services::Ledger;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub settings: Settings,
    pub cycle_start_day: CycleDay,
    pub categories: CategoryRegistry,
    pub budget_limits: BudgetLimits,
    pub transactions: Vec<Transaction>,
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub earliest_transaction: Option<NaiveDate>,
    pub latest_transaction: Option<NaiveDate>,
}

impl FullExport {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let transactions = ledger.transactions().to_vec();

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            earliest_transaction: transactions.iter().map(|t| t.date).min(),
            latest_transaction: transactions.iter().map(|t| t.date).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            settings: ledger.settings().clone(),
            cycle_start_day: ledger.cycle_day(),
            categories: ledger.categories().clone(),
            budget_limits: ledger.limits().clone(),
            transactions,
            metadata,
        }
    }
}

/// Write the whole ledger as pretty-printed JSON
pub fn export_full_json<W: Write>(ledger: &Ledger, mut writer: W) -> MahanaResult<()> {
    let export = FullExport::from_ledger(ledger);
    serde_json::to_writer_pretty(&mut writer, &export)?;
    writeln!(writer)?;
    Ok(())
}
