//! Transaction CLI commands
//!
//! Recording and listing transactions.

use chrono::NaiveDate;
use clap::Args;

use crate::display::transaction::{format_transaction_details, format_transaction_table};
use crate::error::MahanaResult;
use crate::models::{NewTransaction, TransactionKind};
use crate::services::Session;

use super::parse_date;

/// Arguments for `mahana add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction type: income or expense
    pub kind: TransactionKind,

    /// Amount (e.g., "4500" or "4,500.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Category name (see 'mahana category list')
    pub category: String,

    /// Free-text description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `mahana list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Number of transactions to show
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,

    /// Budget cycle relative to the current one (-1 = previous)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,

    /// Show every recorded transaction in the order it was added
    #[arg(long, conflicts_with = "offset")]
    pub all: bool,
}

/// Handle `mahana add`
pub fn handle_add(session: &mut Session, today: NaiveDate, args: AddArgs) -> MahanaResult<()> {
    let date = match args.date {
        Some(date) => parse_date(&date)?,
        None => today,
    };

    let mut new = NewTransaction::new(args.kind, args.amount, args.category, date);
    if let Some(description) = args.description {
        new = new.description(description);
    }

    let txn = session.add_transaction(new)?;
    let symbol = &session.ledger().settings().currency_symbol;

    println!("Recorded {} {}", txn.kind.as_str(), txn.id.short());
    print!("{}", format_transaction_details(&txn, symbol));

    Ok(())
}

/// Handle `mahana list`
pub fn handle_list(session: &Session, today: NaiveDate, args: ListArgs) -> MahanaResult<()> {
    let ledger = session.ledger();
    let symbol = &ledger.settings().currency_symbol;

    if args.all {
        let transactions = ledger.transactions();
        let skip = transactions.len().saturating_sub(args.limit);
        println!(
            "Showing {} of {} transactions",
            transactions.len() - skip,
            transactions.len()
        );
        print!("{}", format_transaction_table(&transactions[skip..], symbol));
        return Ok(());
    }

    let resolver = ledger.resolver();
    let period = resolver.period_offset(today, args.offset);
    let summary = ledger.summary_for(&period);

    println!(
        "{} ({} transactions)",
        resolver.format_period_friendly(&period),
        summary.transaction_count()
    );
    print!("{}", format_transaction_table(summary.recent(args.limit), symbol));

    Ok(())
}
