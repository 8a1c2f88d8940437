//! Settings CLI commands
//!
//! Display currency, configuration overview and resetting transactions.

use crate::config::settings::CURRENCIES;
use crate::config::MahanaPaths;
use crate::error::{MahanaError, MahanaResult};
use crate::services::Session;

/// Handle `mahana currency [CODE]`
///
/// Without a code, lists the supported currencies.
pub fn handle_currency(session: &mut Session, code: Option<String>) -> MahanaResult<()> {
    match code {
        Some(code) => {
            session.update_currency(&code)?;
            let settings = session.ledger().settings();
            println!(
                "Currency set to {} ({})",
                settings.currency_code, settings.currency_symbol
            );
        }
        None => {
            let current = &session.ledger().settings().currency_code;
            println!("Supported currencies:");
            for (code, symbol) in CURRENCIES {
                let marker = if *code == current.as_str() { "*" } else { " " };
                println!("  {} {} {}", marker, code, symbol);
            }
        }
    }

    Ok(())
}

/// Handle `mahana reset`
pub fn handle_reset(session: &mut Session, confirmed: bool) -> MahanaResult<()> {
    let count = session.ledger().transactions().len();

    if !confirmed {
        return Err(MahanaError::Validation(format!(
            "This deletes all {} transactions. Re-run with --yes to confirm",
            count
        )));
    }

    let removed = session.reset_transactions();
    println!("Deleted {} transactions. Categories and limits were kept.", removed);
    Ok(())
}

/// Handle `mahana config`
pub fn handle_config(session: &Session, paths: &MahanaPaths) -> MahanaResult<()> {
    let ledger = session.ledger();
    let settings = ledger.settings();

    println!("Mahana Budget Configuration");
    println!("===========================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Data directory:  {}", paths.data_dir().display());
    println!();
    println!("Settings:");
    println!(
        "  Currency:        {} ({})",
        settings.currency_code, settings.currency_symbol
    );
    println!("  Cycle start day: {}", ledger.cycle_day());
    println!("  Month overflow:  {}", settings.month_overflow);
    println!(
        "  Budget setup:    {}",
        if ledger.needs_budget_setup() { "pending" } else { "done" }
    );
    println!();
    println!("Data:");
    println!("  Transactions:    {}", ledger.transactions().len());
    println!("  Budget limits:   {}", ledger.limits().len());

    Ok(())
}
