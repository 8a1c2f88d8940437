//! Category display formatting

use crate::models::{BudgetLimits, CategoryRegistry, TransactionKind};

/// Format the registered categories for one or both transaction types
///
/// Expense categories that carry a budget limit show it next to the name.
pub fn format_category_list(
    registry: &CategoryRegistry,
    limits: &BudgetLimits,
    kind: Option<TransactionKind>,
    symbol: &str,
) -> String {
    let kinds: Vec<TransactionKind> = match kind {
        Some(kind) => vec![kind],
        None => TransactionKind::all().to_vec(),
    };

    let mut output = String::new();

    for (i, kind) in kinds.iter().enumerate() {
        let names = registry.list(*kind);
        output.push_str(&format!("{} categories ({}):\n", kind, names.len()));

        if names.is_empty() {
            output.push_str("  (none)\n");
        }

        for (j, name) in names.iter().enumerate() {
            let prefix = if j == names.len() - 1 { "└── " } else { "├── " };
            let limit = match (kind, limits.get(name)) {
                (TransactionKind::Expense, Some(limit)) => {
                    format!(" (limit: {})", limit.format_with_symbol(symbol))
                }
                _ => String::new(),
            };
            output.push_str(&format!("  {}{}{}\n", prefix, name, limit));
        }

        if i < kinds.len() - 1 {
            output.push('\n');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_lists_both_kinds() {
        let output = format_category_list(
            &CategoryRegistry::default(),
            &BudgetLimits::new(),
            None,
            "$",
        );
        assert!(output.contains("Income categories (6):"));
        assert!(output.contains("Expense categories (10):"));
        assert!(output.contains("└── Miscellaneous"));
    }

    #[test]
    fn test_shows_limits_for_expenses() {
        let mut limits = BudgetLimits::new();
        limits.set("Food", Money::from_units(250));

        let output = format_category_list(
            &CategoryRegistry::default(),
            &limits,
            Some(TransactionKind::Expense),
            "$",
        );
        assert!(output.contains("Food (limit: $250.00)"));
        assert!(!output.contains("Salary"));
    }

    #[test]
    fn test_empty_registry() {
        let output = format_category_list(
            &CategoryRegistry::empty(),
            &BudgetLimits::new(),
            Some(TransactionKind::Income),
            "$",
        );
        assert!(output.contains("(none)"));
    }
}
