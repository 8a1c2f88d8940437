//! Budget configuration CLI commands
//!
//! Spending limits and the budget cycle start day.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::budget::format_limits;
use crate::error::MahanaResult;
use crate::models::{MonthOverflow, TransactionKind};
use crate::services::Session;

/// Limit subcommands
#[derive(Subcommand, Debug)]
pub enum LimitCommands {
    /// Set or replace the spending limit of an expense category
    Set {
        /// Expense category name
        category: String,
        /// Limit per budget cycle (e.g., "25000")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List configured limits
    List,
}

/// Cycle subcommands
#[derive(Subcommand, Debug)]
pub enum CycleCommands {
    /// Show the cycle start day and recent cycles
    Show {
        /// Number of cycles to list, ending with the current one
        #[arg(short, long, default_value_t = 3)]
        count: usize,
    },

    /// Change the day of the month on which cycles start (1-31)
    Set {
        day: u32,
    },

    /// Choose how start days missing from short months are handled
    Overflow {
        /// roll: move into the next month; clamp: use the month's last day
        policy: MonthOverflow,
    },
}

/// Handle a limit command
pub fn handle_limit_command(session: &mut Session, cmd: LimitCommands) -> MahanaResult<()> {
    match cmd {
        LimitCommands::Set { category, amount } => {
            let limit = session.set_budget_limit(&category, &amount)?;
            let ledger = session.ledger();
            let canonical = ledger
                .categories()
                .find(TransactionKind::Expense, &category)
                .unwrap_or(category.trim());
            println!(
                "Budget limit for {} set to {}",
                canonical,
                ledger.format_money(limit)
            );
        }

        LimitCommands::List => {
            let ledger = session.ledger();
            print!(
                "{}",
                format_limits(ledger.limits(), &ledger.settings().currency_symbol)
            );
        }
    }

    Ok(())
}

/// Handle a cycle command
pub fn handle_cycle_command(
    session: &mut Session,
    today: NaiveDate,
    cmd: CycleCommands,
) -> MahanaResult<()> {
    match cmd {
        CycleCommands::Show { count } => {
            let ledger = session.ledger();
            let resolver = ledger.resolver();
            let current = resolver.period_for_date(today);

            println!("Cycle start day: {}", ledger.cycle_day());
            println!("Month overflow:  {}", ledger.settings().month_overflow);
            println!();

            for period in resolver.recent_periods(today, count.max(1)) {
                let marker = if period == current { "*" } else { " " };
                println!(
                    "{} {}  ({} days)",
                    marker,
                    resolver.format_period_friendly(&period),
                    period.num_days()
                );
            }
        }

        CycleCommands::Set { day } => {
            let day = session.update_cycle_day(day)?;
            let period = session.ledger().current_period(today);
            println!("Budget cycles now start on day {}", day);
            println!(
                "Current cycle: {}",
                session.ledger().resolver().format_period_friendly(&period)
            );
        }

        CycleCommands::Overflow { policy } => {
            session.set_month_overflow(policy);
            let period = session.ledger().current_period(today);
            println!("Month overflow policy set to {}", policy);
            println!(
                "Current cycle: {}",
                session.ledger().resolver().format_period_friendly(&period)
            );
        }
    }

    Ok(())
}

/// Handle `mahana setup-done`
pub fn handle_setup_done(session: &mut Session) -> MahanaResult<()> {
    session.complete_budget_setup();
    println!("Budget setup marked as complete.");
    Ok(())
}
