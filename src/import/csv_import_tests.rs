#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;
use std::io::Write;

fn make_csv_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn row(date: &str, desc: &str, amount: &str) -> Vec<String> {
    vec![date.into(), desc.into(), amount.into()]
}

// ── parse_decimal ─────────────────────────────────────────────

#[test]
fn test_parse_decimal_basic() {
    assert_eq!(parse_decimal("100.50").unwrap(), dec!(100.50));
    assert_eq!(parse_decimal("-42.99").unwrap(), dec!(-42.99));
}

#[test]
fn test_parse_decimal_with_currency() {
    assert_eq!(parse_decimal("$1,234.56").unwrap(), dec!(1234.56));
    assert_eq!(parse_decimal("-$99.99").unwrap(), dec!(-99.99));
}

#[test]
fn test_parse_decimal_parentheses_negative() {
    assert_eq!(parse_decimal("(500.00)").unwrap(), dec!(-500.00));
}

#[test]
fn test_parse_decimal_quoted() {
    assert_eq!(parse_decimal("\"100.00\"").unwrap(), dec!(100.00));
}

#[test]
fn test_parse_decimal_integer() {
    assert_eq!(parse_decimal("42").unwrap(), dec!(42));
}

#[test]
fn test_parse_decimal_invalid() {
    assert!(parse_decimal("not_a_number").is_err());
    assert!(parse_decimal("").is_err());
}

// ── parse_date ────────────────────────────────────────────────

#[test]
fn test_parse_date_iso_format() {
    let d = parse_date("2023-01-15", "%Y-%m-%d").unwrap();
    assert_eq!(d, chrono::NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
}

#[test]
fn test_parse_date_fallback() {
    // Wrong primary format, should fall back and still parse
    let d = parse_date("01/15/2023", "%Y-%m-%d").unwrap();
    assert_eq!(d, chrono::NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
}

#[test]
fn test_parse_date_invalid() {
    assert!(parse_date("not-a-date", "%Y-%m-%d").is_err());
    assert!(parse_date("", "%Y-%m-%d").is_err());
}

// ── CsvImporter::parse ────────────────────────────────────────

#[test]
fn test_parse_basic_rows() {
    let rows = vec![
        row("2023-01-05", "UBER TRIP", "-20.00"),
        row("2023-01-10", "NETFLIX.COM", "-15.00"),
    ];
    let txns = CsvImporter::parse(&rows, &CsvOptions::default()).unwrap();
    assert_eq!(txns.len(), 2);
    assert_eq!(
        txns[0].date,
        chrono::NaiveDate::from_ymd_opt(2023, 1, 5).unwrap()
    );
    assert_eq!(txns[0].description, "UBER TRIP");
    assert_eq!(txns[0].amount, dec!(-20.00));
}

#[test]
fn test_parse_trims_fields() {
    let rows = vec![row("  2023-01-05  ", "  UBER TRIP  ", "  -20.00  ")];
    let txns = CsvImporter::parse(&rows, &CsvOptions::default()).unwrap();
    assert_eq!(txns[0].description, "UBER TRIP");
    assert_eq!(txns[0].amount, dec!(-20.00));
}

#[test]
fn test_parse_skips_blank_rows() {
    let rows = vec![
        row("2023-01-05", "UBER TRIP", "-20.00"),
        row("", "", ""),
        row("2023-01-10", "NETFLIX.COM", "-15.00"),
    ];
    let txns = CsvImporter::parse(&rows, &CsvOptions::default()).unwrap();
    assert_eq!(txns.len(), 2);
}

#[test]
fn test_parse_bad_amount_fails_by_default() {
    let rows = vec![row("2023-01-05", "UBER TRIP", "twenty")];
    let err = CsvImporter::parse(&rows, &CsvOptions::default()).unwrap_err();
    assert!(err.to_string().contains("Row 1"));
}

#[test]
fn test_parse_missing_amount_column_fails() {
    let rows = vec![vec!["2023-01-05".to_string(), "UBER TRIP".to_string()]];
    assert!(CsvImporter::parse(&rows, &CsvOptions::default()).is_err());
}

#[test]
fn test_parse_skip_mode_drops_bad_rows() {
    let options = CsvOptions {
        on_malformed: MalformedRows::Skip,
        ..CsvOptions::default()
    };
    let rows = vec![
        row("2023-01-05", "UBER TRIP", "-20.00"),
        row("2023-01-06", "BAD ROW", "oops"),
        row("not-a-date", "WORSE ROW", "-1.00"),
        row("2023-01-10", "NETFLIX.COM", "-15.00"),
    ];
    let txns = CsvImporter::parse(&rows, &options).unwrap();
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[1].description, "NETFLIX.COM");
}

#[test]
fn test_parse_empty_input() {
    let rows: Vec<Vec<String>> = vec![];
    let txns = CsvImporter::parse(&rows, &CsvOptions::default()).unwrap();
    assert!(txns.is_empty());
}

// ── CsvImporter::load ─────────────────────────────────────────

#[test]
fn test_load_from_file() {
    let csv = "2023-01-05,UBER TRIP,-20.00\n2023-01-10,NETFLIX.COM,-15.00\n";
    let file = make_csv_file(csv);
    let txns = CsvImporter::load(file.path(), &CsvOptions::default()).unwrap();
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[1].amount, dec!(-15.00));
}

#[test]
fn test_load_quoted_description_with_comma() {
    let csv = "2023-01-05,\"TASTE CAFE & MARKETPLACE, INDY\",-30.00\n";
    let file = make_csv_file(csv);
    let txns = CsvImporter::load(file.path(), &CsvOptions::default()).unwrap();
    assert_eq!(txns[0].description, "TASTE CAFE & MARKETPLACE, INDY");
}

#[test]
fn test_load_missing_file() {
    let path = std::path::Path::new("/definitely/not/a/file.csv");
    assert!(CsvImporter::load(path, &CsvOptions::default()).is_err());
}
