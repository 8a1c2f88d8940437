//! Transaction display formatting
//!
//! Renders transaction lists as tables and single transactions as detail
//! blocks.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Transaction, TransactionKind};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, symbol: &str) -> Self {
        let sign = match txn.kind {
            TransactionKind::Income => "+",
            TransactionKind::Expense => "-",
        };
        Self {
            id: txn.id.short(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: txn.kind.to_string(),
            category: txn.category.clone(),
            description: truncate(&txn.description, 30),
            amount: format!("{}{}", sign, txn.amount.format_with_symbol(symbol)),
        }
    }
}

/// Format transactions as a table, in the order given
pub fn format_transaction_table<'a, I>(transactions: I, symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let rows: Vec<TransactionRow> = transactions
        .into_iter()
        .map(|txn| TransactionRow::new(txn, symbol))
        .collect();

    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id.short()));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output.push_str(&format!(
        "Recorded:    {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
