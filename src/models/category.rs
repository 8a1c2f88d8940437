//! Category registry
//!
//! Holds the valid category names for each transaction type. Categories are
//! seeded with defaults and can only be appended to.

use serde::{Deserialize, Serialize};

use super::transaction::TransactionKind;
use crate::error::{MahanaError, MahanaResult};

/// Longest accepted category name, in characters
pub const MAX_CATEGORY_NAME_LEN: usize = 50;

pub const DEFAULT_INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Freelance",
    "Investment",
    "Business",
    "Gift",
    "Other",
];

pub const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Entertainment",
    "Bills",
    "Shopping",
    "Health",
    "Education",
    "Other",
    "Gifts & Donations",
    "Miscellaneous",
];

/// Category names per transaction type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRegistry {
    #[serde(default)]
    pub income: Vec<String>,
    #[serde(default)]
    pub expense: Vec<String>,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self {
            income: DEFAULT_INCOME_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            expense: DEFAULT_EXPENSE_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CategoryRegistry {
    /// A registry with no categories at all
    pub fn empty() -> Self {
        Self {
            income: Vec::new(),
            expense: Vec::new(),
        }
    }

    /// Categories for one transaction type, in insertion order
    pub fn list(&self, kind: TransactionKind) -> &[String] {
        match kind {
            TransactionKind::Income => &self.income,
            TransactionKind::Expense => &self.expense,
        }
    }

    fn list_mut(&mut self, kind: TransactionKind) -> &mut Vec<String> {
        match kind {
            TransactionKind::Income => &mut self.income,
            TransactionKind::Expense => &mut self.expense,
        }
    }

    /// Find the registered spelling of a category (case-insensitive)
    pub fn find(&self, kind: TransactionKind, name: &str) -> Option<&str> {
        let needle = name.trim().to_lowercase();
        self.list(kind)
            .iter()
            .find(|c| c.to_lowercase() == needle)
            .map(String::as_str)
    }

    pub fn contains(&self, kind: TransactionKind, name: &str) -> bool {
        self.find(kind, name).is_some()
    }

    /// Append a category after trimming it
    ///
    /// Blank names are rejected, as are names already registered for the
    /// same type (compared case-insensitively).
    pub fn add(&mut self, kind: TransactionKind, name: &str) -> MahanaResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MahanaError::Validation(
                "Category name cannot be empty".into(),
            ));
        }
        if name.chars().count() > MAX_CATEGORY_NAME_LEN {
            return Err(MahanaError::Validation(format!(
                "Category name is too long ({} characters, max {})",
                name.chars().count(),
                MAX_CATEGORY_NAME_LEN
            )));
        }
        if let Some(existing) = self.find(kind, name) {
            return Err(MahanaError::duplicate_category(existing));
        }

        let name = name.to_string();
        self.list_mut(kind).push(name.clone());
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_seeded() {
        let registry = CategoryRegistry::default();
        assert_eq!(registry.list(TransactionKind::Income).len(), 6);
        assert!(registry.contains(TransactionKind::Expense, "Food"));
        assert!(registry.contains(TransactionKind::Expense, "Gifts & Donations"));
        assert!(registry.contains(TransactionKind::Expense, "Miscellaneous"));
        assert!(!registry.contains(TransactionKind::Income, "Food"));
    }

    #[test]
    fn test_add_trims_and_appends() {
        let mut registry = CategoryRegistry::default();
        let added = registry.add(TransactionKind::Expense, "  Housing ").unwrap();
        assert_eq!(added, "Housing");
        assert_eq!(
            registry.list(TransactionKind::Expense).last().map(String::as_str),
            Some("Housing")
        );
    }

    #[test]
    fn test_add_rejects_empty() {
        let mut registry = CategoryRegistry::default();
        let before = registry.clone();
        assert!(registry.add(TransactionKind::Income, "   ").unwrap_err().is_validation());
        assert_eq!(registry, before);
    }

    #[test]
    fn test_add_rejects_duplicates_case_insensitively() {
        let mut registry = CategoryRegistry::default();
        let before = registry.clone();
        let err = registry.add(TransactionKind::Expense, "food").unwrap_err();
        assert!(matches!(err, MahanaError::Duplicate { .. }));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_same_name_allowed_across_types() {
        let mut registry = CategoryRegistry::empty();
        registry.add(TransactionKind::Income, "Rent").unwrap();
        registry.add(TransactionKind::Expense, "Rent").unwrap();
        assert!(registry.contains(TransactionKind::Income, "rent"));
        assert!(registry.contains(TransactionKind::Expense, "RENT"));
    }

    #[test]
    fn test_find_returns_registered_spelling() {
        let registry = CategoryRegistry::default();
        assert_eq!(registry.find(TransactionKind::Expense, " bills "), Some("Bills"));
    }
}
