//! Category CLI commands

use clap::Subcommand;

use crate::display::category::format_category_list;
use crate::error::MahanaResult;
use crate::models::TransactionKind;
use crate::services::Session;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List registered categories
    List {
        /// Only show income or expense categories
        kind: Option<TransactionKind>,
    },

    /// Register a new category
    Add {
        /// Transaction type the category applies to: income or expense
        kind: TransactionKind,
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(session: &mut Session, cmd: CategoryCommands) -> MahanaResult<()> {
    match cmd {
        CategoryCommands::List { kind } => {
            let ledger = session.ledger();
            print!(
                "{}",
                format_category_list(
                    ledger.categories(),
                    ledger.limits(),
                    kind,
                    &ledger.settings().currency_symbol
                )
            );
        }

        CategoryCommands::Add { kind, name } => {
            let added = session.add_category(kind, &name)?;
            println!("Added {} category: {}", kind.as_str(), added);
        }
    }

    Ok(())
}
