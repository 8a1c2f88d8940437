//! Transaction model
//!
//! An income or expense record. Transactions are appended to the ledger,
//! never edited, and only removed by a full reset.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::{Money, MAX_AMOUNT_CENTS};
use crate::error::{MahanaError, MahanaResult};

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = MahanaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(MahanaError::Validation(format!(
                "Unknown transaction type '{}', expected income or expense",
                other
            ))),
        }
    }
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Non-negative amount
    pub amount: Money,

    /// Category name, as spelled in the registry
    pub category: String,

    #[serde(default)]
    pub description: String,

    /// The day the money moved
    pub date: NaiveDate,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Build a transaction from already-validated parts
    ///
    /// Rejects negative amounts and blank categories; registry membership is
    /// checked by the ledger, which knows the registry.
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> MahanaResult<Self> {
        let txn = Self {
            id: TransactionId::new(),
            kind,
            amount,
            category: category.into().trim().to_string(),
            description: String::new(),
            date,
            created_at: Utc::now(),
        };
        txn.validate()?;
        Ok(txn)
    }

    /// Check the amount and category invariants
    ///
    /// Records read back from storage skip [`Transaction::new`], so the
    /// session runs them through this before trusting them.
    pub fn validate(&self) -> MahanaResult<()> {
        if self.category.trim().is_empty() {
            return Err(MahanaError::Validation("Category is required".into()));
        }
        if self.amount.is_negative() {
            return Err(MahanaError::Validation(format!(
                "Amount cannot be negative: {}",
                self.amount
            )));
        }
        if !self.amount.is_within_bounds() {
            return Err(MahanaError::Validation(format!(
                "Amount exceeds the maximum of {}",
                Money::from_cents(MAX_AMOUNT_CENTS)
            )));
        }
        Ok(())
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into().trim().to_string();
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.category
        )
    }
}

/// Raw input for a new transaction, as collected by a form or the CLI
///
/// The amount stays a string until the ledger parses it, so malformed input
/// is rejected with a typed error instead of leaking into totals.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: String,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub fn new(
        kind: TransactionKind,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            amount: amount.into(),
            category: category.into(),
            description: None,
            date,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parse and validate into a transaction
    pub fn into_transaction(self) -> MahanaResult<Transaction> {
        if self.amount.trim().is_empty() {
            return Err(MahanaError::Validation("Amount is required".into()));
        }
        let amount = Money::parse(&self.amount)?;
        let txn = Transaction::new(self.kind, amount, self.category, self.date)?;
        Ok(match self.description {
            Some(description) => txn.with_description(description),
            None => txn,
        })
    }
}
