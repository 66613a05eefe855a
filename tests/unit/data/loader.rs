//! Unit tests for CSV loading and validation

use rollsignal::data::load_table;
use rollsignal::JobError;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

fn write_csv(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_load_valid_table() {
    let (_dir, path) = write_csv("timestamp,open,close\n1,9.5,10\n2,10,10.5\n3,10.5,11.25\n");
    let table = load_table(&path, "close", b',').unwrap();
    assert_eq!(table.values, vec![10.0, 10.5, 11.25]);
    assert_eq!(table.columns, vec!["timestamp", "open", "close"]);
    assert_eq!(table.column, "close");
    assert_eq!(table.len(), 3);
}

#[test]
fn test_load_trims_whitespace() {
    let (_dir, path) = write_csv("timestamp, close\n1, 10.0 \n2,  11\n");
    let table = load_table(&path, "close", b',').unwrap();
    assert_eq!(table.values, vec![10.0, 11.0]);
}

#[test]
fn test_load_custom_delimiter() {
    let (_dir, path) = write_csv("timestamp;close\n1;1.5\n2;2.5\n");
    let table = load_table(&path, "close", b';').unwrap();
    assert_eq!(table.values, vec![1.5, 2.5]);
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_table(&dir.path().join("nope.csv"), "close", b',').unwrap_err();
    assert!(matches!(err, JobError::NotFound(_)));
}

#[test]
fn test_directory_is_not_a_file() {
    let dir = tempdir().unwrap();
    let err = load_table(dir.path(), "close", b',').unwrap_err();
    assert!(matches!(err, JobError::NotFound(_)));
}

#[test]
fn test_empty_file_is_format_error() {
    let (_dir, path) = write_csv("");
    let err = load_table(&path, "close", b',').unwrap_err();
    assert!(matches!(err, JobError::Format(_)));
}

#[test]
fn test_header_only_is_schema_error() {
    let (_dir, path) = write_csv("timestamp,close\n");
    let err = load_table(&path, "close", b',').unwrap_err();
    assert!(matches!(err, JobError::Schema(_)));
}

#[test]
fn test_missing_column_is_schema_error() {
    let (_dir, path) = write_csv("timestamp,price\n1,10\n");
    let err = load_table(&path, "close", b',').unwrap_err();
    assert!(matches!(err, JobError::Schema(_)));
    assert!(err.to_string().contains("close"));
}

#[test]
fn test_ragged_rows_are_format_error() {
    let (_dir, path) = write_csv("timestamp,close\n1,10\n2,11,extra\n");
    let err = load_table(&path, "close", b',').unwrap_err();
    assert!(matches!(err, JobError::Format(_)));
}

#[test]
fn test_non_numeric_value_is_schema_error() {
    let (_dir, path) = write_csv("timestamp,close\n1,10\n2,abc\n");
    let err = load_table(&path, "close", b',').unwrap_err();
    assert!(matches!(err, JobError::Schema(_)));
    assert!(err.to_string().contains("row 2"));
}

#[test]
fn test_blank_value_is_schema_error() {
    let (_dir, path) = write_csv("timestamp,close\n1,10\n2,\n");
    let err = load_table(&path, "close", b',').unwrap_err();
    assert!(matches!(err, JobError::Schema(_)));
}

#[test]
fn test_blank_header_is_format_error() {
    let (_dir, path) = write_csv("timestamp,,close\n1,2,3\n");
    let err = load_table(&path, "close", b',').unwrap_err();
    assert!(matches!(err, JobError::Format(_)));
}
