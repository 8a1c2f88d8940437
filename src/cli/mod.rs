//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session.

pub mod budget;
pub mod category;
pub mod export;
pub mod report;
pub mod settings;
pub mod transaction;

pub use budget::{
    handle_cycle_command, handle_limit_command, handle_setup_done, CycleCommands, LimitCommands,
};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export, ExportArgs};
pub use report::{handle_alerts, handle_progress, handle_summary, CycleArgs};
pub use settings::{handle_config, handle_currency, handle_reset};
pub use transaction::{handle_add, handle_list, AddArgs, ListArgs};

use chrono::NaiveDate;

use crate::error::{MahanaError, MahanaResult};

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> MahanaResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        MahanaError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD format.", s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2025-07-20 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 20).unwrap()
        );
        assert!(parse_date("20/07/2025").unwrap_err().is_validation());
        assert!(parse_date("2025-02-30").is_err());
    }
}
