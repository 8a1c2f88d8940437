//! Period summary formatting

use tabled::{settings::Style, Table, Tabled};

use crate::services::PeriodSummary;

#[derive(Tabled)]
struct ShareRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Format the totals of a budget cycle followed by the expense breakdown
pub fn format_summary(summary: &PeriodSummary, period_label: &str, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget cycle: {}\n", period_label));
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Income:       {:>16}\n",
        summary.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Expenses:     {:>16}\n",
        summary.expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Balance:      {:>16}\n",
        summary.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Transactions: {:>16}\n",
        summary.transaction_count()
    ));

    let breakdown = format_breakdown(summary, symbol);
    if !breakdown.is_empty() {
        output.push('\n');
        output.push_str("Spending by category:\n");
        output.push_str(&breakdown);
    }

    output
}

/// Format each expense category's share of total spending
///
/// Returns an empty string when nothing was spent.
pub fn format_breakdown(summary: &PeriodSummary, symbol: &str) -> String {
    let rows: Vec<ShareRow> = summary
        .category_breakdown()
        .into_iter()
        .map(|share| ShareRow {
            category: share.category,
            amount: share.amount.format_with_symbol(symbol),
            share: format!("{:.1}%", share.percentage),
        })
        .collect();

    if rows.is_empty() {
        return String::new();
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}
