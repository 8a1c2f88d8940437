//! Report CLI commands
//!
//! Cycle summary, budget progress and the alert feed.

use chrono::NaiveDate;
use clap::Args;

use crate::display::budget::{format_alerts, format_progress};
use crate::display::summary::format_summary;
use crate::error::MahanaResult;
use crate::services::{budget_progress, get_alerts, Session};

/// Arguments shared by the cycle reports
#[derive(Args, Debug)]
pub struct CycleArgs {
    /// Budget cycle relative to the current one (-1 = previous)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,
}

/// Handle `mahana summary`
pub fn handle_summary(session: &Session, today: NaiveDate, args: CycleArgs) -> MahanaResult<()> {
    let ledger = session.ledger();
    let resolver = ledger.resolver();
    let period = resolver.period_offset(today, args.offset);
    let summary = ledger.summary_for(&period);

    print!(
        "{}",
        format_summary(
            &summary,
            &resolver.format_period_friendly(&period),
            &ledger.settings().currency_symbol
        )
    );

    if args.offset == 0 && ledger.needs_budget_setup() {
        println!();
        println!("Tip: no budget limits yet. Run 'mahana limit set <category> <amount>'");
        println!("     or 'mahana setup-done' to stop seeing this.");
    }

    Ok(())
}

/// Handle `mahana alerts`
pub fn handle_alerts(session: &Session, today: NaiveDate, args: CycleArgs) -> MahanaResult<()> {
    let ledger = session.ledger();
    let period = ledger.resolver().period_offset(today, args.offset);
    let summary = ledger.summary_for(&period);
    let alerts = get_alerts(&summary.category_totals, ledger.limits());

    print!(
        "{}",
        format_alerts(&alerts, &ledger.settings().currency_symbol)
    );
    Ok(())
}

/// Handle `mahana progress`
pub fn handle_progress(session: &Session, today: NaiveDate, args: CycleArgs) -> MahanaResult<()> {
    let ledger = session.ledger();
    let resolver = ledger.resolver();
    let period = resolver.period_offset(today, args.offset);
    let summary = ledger.summary_for(&period);
    let progress = budget_progress(&summary.category_totals, ledger.limits());

    println!("Budget progress: {}", resolver.format_period_friendly(&period));
    print!(
        "{}",
        format_progress(&progress, &ledger.settings().currency_symbol)
    );
    Ok(())
}
