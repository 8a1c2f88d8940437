//! CSV export of transactions
//!
//! One row per transaction with the header
//! `id,date,type,category,description,amount`. Amounts are plain decimals
//! without a currency symbol so spreadsheets can sum them.

use std::io::Write;

use serde::Serialize;

use crate::error::MahanaResult;
use crate::models::Transaction;

#[derive(Serialize)]
struct CsvRow<'a> {
    id: String,
    date: String,
    #[serde(rename = "type")]
    kind: &'a str,
    category: &'a str,
    description: &'a str,
    amount: String,
}

impl<'a> From<&'a Transaction> for CsvRow<'a> {
    fn from(txn: &'a Transaction) -> Self {
        Self {
            id: txn.id.to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: txn.kind.as_str(),
            category: &txn.category,
            description: &txn.description,
            amount: txn.amount.to_string(),
        }
    }
}

/// Write transactions as CSV, returning the number of rows written
///
/// The header is written even when there are no transactions.
pub fn export_transactions_csv<'a, I, W>(transactions: I, writer: W) -> MahanaResult<usize>
where
    I: IntoIterator<Item = &'a Transaction>,
    W: Write,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(["id", "date", "type", "category", "description", "amount"])?;

    let mut count = 0;
    for txn in transactions {
        csv_writer.serialize(CsvRow::from(txn))?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_header_only_when_empty() {
        let mut buffer = Vec::new();
        let count = export_transactions_csv(std::iter::empty(), &mut buffer).unwrap();

        assert_eq!(count, 0);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "id,date,type,category,description,amount\n"
        );
    }

    #[test]
    fn test_rows() {
        let food = Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(450_050),
            "Food",
            date(2025, 7, 3),
        )
        .unwrap()
        .with_description("Dinner, with friends");
        let salary = Transaction::new(
            TransactionKind::Income,
            Money::from_units(85000),
            "Salary",
            date(2025, 7, 1),
        )
        .unwrap();

        let mut buffer = Vec::new();
        let count = export_transactions_csv([&food, &salary], &mut buffer).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            format!(
                "{},2025-07-03,expense,Food,\"Dinner, with friends\",4500.50",
                food.id
            )
        );
        assert_eq!(
            lines[2],
            format!("{},2025-07-01,income,Salary,,85000.00", salary.id)
        );
    }

    #[test]
    fn test_output_reads_back() {
        let txn = Transaction::new(
            TransactionKind::Expense,
            Money::from_units(12),
            "Gifts & Donations",
            date(2025, 7, 3),
        )
        .unwrap()
        .with_description("Said \"thanks\"");

        let mut buffer = Vec::new();
        export_transactions_csv([&txn], &mut buffer).unwrap();

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[3], "Gifts & Donations");
        assert_eq!(&record[4], "Said \"thanks\"");
        assert_eq!(&record[5], "12.00");
    }
}
