use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::Transaction;

/// What to do with a row whose date or amount does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MalformedRows {
    /// Abort the load with row-numbered context.
    Fail,
    /// Warn on stderr and drop the row.
    Skip,
}

#[derive(Debug, Clone)]
pub(crate) struct CsvOptions {
    /// Primary date format; common bank formats are tried as fallbacks.
    pub(crate) date_format: String,
    pub(crate) on_malformed: MalformedRows,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".into(),
            on_malformed: MalformedRows::Fail,
        }
    }
}

/// Loads headerless three-column exports: date, description, amount.
pub(crate) struct CsvImporter;

impl CsvImporter {
    pub(crate) fn load(path: &Path, options: &CsvOptions) -> Result<Vec<Transaction>> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

        let mut rows: Vec<Vec<String>> = Vec::new();
        for result in rdr.records() {
            let record = result.context("Failed to read CSV record")?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Self::parse(&rows, options)
    }

    pub(crate) fn parse(rows: &[Vec<String>], options: &CsvOptions) -> Result<Vec<Transaction>> {
        let mut transactions = Vec::new();

        for (i, row) in rows.iter().enumerate() {
            let date_str = row.first().map(|s| s.trim()).unwrap_or_default();

            // Blank lines show up as rows with an empty date field
            if date_str.is_empty() {
                continue;
            }

            match parse_row(row, date_str, &options.date_format, i) {
                Ok(txn) => transactions.push(txn),
                Err(err) => match options.on_malformed {
                    MalformedRows::Fail => return Err(err),
                    MalformedRows::Skip => eprintln!("Warning: skipping row {}: {err:#}", i + 1),
                },
            }
        }

        Ok(transactions)
    }
}

fn parse_row(row: &[String], date_str: &str, date_format: &str, index: usize) -> Result<Transaction> {
    let date = parse_date(date_str, date_format)
        .with_context(|| format!("Row {}: failed to parse date '{}'", index + 1, date_str))?;

    let description = row
        .get(1)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let raw_amount = row
        .get(2)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow::anyhow!("Row {}: missing amount column", index + 1))?;
    let amount = parse_decimal(raw_amount)
        .with_context(|| format!("Row {}: failed to parse amount '{}'", index + 1, raw_amount))?;

    Ok(Transaction {
        date,
        description,
        amount,
    })
}

fn parse_date(s: &str, fmt: &str) -> Result<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
        return Ok(d);
    }
    // Fallback: try common formats
    for fallback in &["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y", "%m/%d/%y", "%d/%m/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fallback) {
            return Ok(d);
        }
    }
    anyhow::bail!("Could not parse date: {}", s)
}

fn parse_decimal(s: &str) -> Result<Decimal> {
    let cleaned = s
        .replace(['$', ','], "")
        .replace('(', "-")
        .replace(')', "")
        .trim()
        .to_string();
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_str(&cleaned.replace('"', "")))
        .with_context(|| format!("Failed to parse '{s}' as decimal"))
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
