//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};

use crate::error::{MahanaError, MahanaResult};
use crate::export::{export_full_json, export_transactions_csv};
use crate::services::Session;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transactions only)
    Csv,
    /// JSON format (full ledger)
    Json,
}

/// Arguments for `mahana export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file path; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Budget cycle relative to the current one, for CSV (-1 = previous)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,

    /// Export every transaction instead of one cycle, for CSV
    #[arg(long, conflicts_with = "offset")]
    pub all: bool,
}

/// Handle `mahana export`
pub fn handle_export(session: &Session, today: NaiveDate, args: ExportArgs) -> MahanaResult<()> {
    let writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                MahanaError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    let ledger = session.ledger();

    match args.format {
        ExportFormat::Csv => {
            let count = if args.all {
                export_transactions_csv(ledger.transactions(), writer)?
            } else {
                let period = ledger.resolver().period_offset(today, args.offset);
                let summary = ledger.summary_for(&period);
                export_transactions_csv(&summary.transactions, writer)?
            };
            if let Some(path) = &args.output {
                println!("Exported {} transactions to {}", count, path.display());
            }
        }
        ExportFormat::Json => {
            export_full_json(ledger, writer)?;
            if let Some(path) = &args.output {
                println!("Exported full ledger to {}", path.display());
            }
        }
    }

    Ok(())
}
