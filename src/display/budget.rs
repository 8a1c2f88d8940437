//! Budget limit, progress and alert formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::{BudgetAlert, BudgetLimits, CategoryProgress, Severity};

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct ProgressRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Progress")]
    bar: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct LimitRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
}

fn severity_icon(severity: Option<Severity>) -> &'static str {
    match severity {
        Some(Severity::Red) => "🔴",
        Some(Severity::Yellow) => "🟡",
        Some(Severity::Green) => "🟢",
        None => "  ",
    }
}

/// Text progress bar, full at 100% and beyond
pub fn progress_bar(percentage: f64) -> String {
    let clamped = percentage.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>5.1}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        percentage
    )
}

/// Format progress for every limited category
pub fn format_progress(progress: &[CategoryProgress], symbol: &str) -> String {
    if progress.is_empty() {
        return "No budget limits set.\n\nRun 'mahana limit set <category> <amount>' to add one.\n"
            .to_string();
    }

    let rows: Vec<ProgressRow> = progress
        .iter()
        .map(|p| {
            let eval = &p.evaluation;
            ProgressRow {
                category: p.category.clone(),
                spent: eval.spent.format_with_symbol(symbol),
                limit: eval
                    .limit
                    .map(|l| l.format_with_symbol(symbol))
                    .unwrap_or_else(|| "-".to_string()),
                bar: eval.percentage.map(progress_bar).unwrap_or_default(),
                status: format!("{} {}", severity_icon(eval.severity()), eval.status),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format the alert feed, most urgent first
pub fn format_alerts(alerts: &[BudgetAlert], symbol: &str) -> String {
    if alerts.is_empty() {
        return "No budget alerts. All categories are on track.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("Budget alerts ({}):\n", alerts.len()));

    for alert in alerts {
        output.push_str(&format!(
            "  {} {}: {} of {} ({:.0}%) - {}\n",
            severity_icon(Some(alert.severity)),
            alert.category,
            alert.spent.format_with_symbol(symbol),
            alert.limit.format_with_symbol(symbol),
            alert.percentage,
            alert.status
        ));
    }

    output
}

/// Format configured limits
pub fn format_limits(limits: &BudgetLimits, symbol: &str) -> String {
    if limits.is_empty() {
        return "No budget limits set.\n".to_string();
    }

    let rows: Vec<LimitRow> = limits
        .iter()
        .map(|(category, limit)| LimitRow {
            category: category.to_string(),
            limit: limit.format_with_symbol(symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}
