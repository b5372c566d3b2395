//! Tests for dataset loading from disk.

use std::fs;

use comarca_ingest::{IngestError, load_dataset};
use comarca_model::Record;

const CSV: &str = "\
Comarca,Unidade ID,Unidade,Vara,Código
Capital, U01 ,1ª Unidade,3ª Vara Cível,101
Capital,U02,2ª Unidade,1ª Vara Criminal,
,,,,
Marabá,U30,Vara Única,Vara Única,  300
";

const JSON: &str = r#"[
  {"comarca": "Capital", "unidadeId": "U01", "unidade": "1ª Unidade", "vara": "3ª Vara Cível", "codigo": "101"},
  {"comarca": "Capital", "unidadeId": "U02", "unidade": "2ª Unidade", "vara": "1ª Vara Criminal", "codigo": ""},
  {"comarca": "Marabá ", "unidadeId": "U30", "unidade": "Vara Única", "vara": "Vara Única", "codigo": " 300"}
]"#;

fn expected() -> Vec<Record> {
    vec![
        Record::new("Capital", "U01", "1ª Unidade", "3ª Vara Cível").with_codigo("101"),
        Record::new("Capital", "U02", "2ª Unidade", "1ª Vara Criminal"),
        Record::new("Marabá", "U30", "Vara Única", "Vara Única").with_codigo("300"),
    ]
}

#[test]
fn csv_and_json_load_the_same_records() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let csv_path = dir.path().join("comarcas.csv");
    let json_path = dir.path().join("comarcas.json");
    fs::write(&csv_path, CSV).expect("write csv");
    fs::write(&json_path, JSON).expect("write json");

    let from_csv = load_dataset(&csv_path).expect("load csv");
    let from_json = load_dataset(&json_path).expect("load json");

    assert_eq!(from_csv, expected());
    assert_eq!(from_json, expected());
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("comarcas.xlsx");
    fs::write(&path, "irrelevant").expect("write file");

    let error = load_dataset(&path).unwrap_err();
    assert!(matches!(error, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let error = load_dataset(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(error, IngestError::Io { .. }));
    assert!(error.to_string().contains("absent.csv"));
}

#[test]
fn malformed_json_reports_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{\"comarca\": ").expect("write json");

    let error = load_dataset(&path).unwrap_err();
    assert!(matches!(error, IngestError::Json { .. }));
    assert!(error.to_string().contains("broken.json"));
}

#[test]
fn json_numeric_codes_load_as_text() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("numeric.json");
    fs::write(
        &path,
        r#"[{"comarca": "Capital", "unidadeId": "U01", "unidade": "1ª Unidade", "vara": "3ª Vara Cível", "codigo": 101}]"#,
    )
    .expect("write json");

    let records = load_dataset(&path).expect("load json");
    assert_eq!(records[0].codigo.as_deref(), Some("101"));
}

#[test]
fn csv_with_displayed_code_heading_keeps_codes() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("exported.csv");
    fs::write(
        &path,
        "Comarca,Unidade ID,Unidade,Vara,Código PJE\nCapital,U01,1ª Unidade,3ª Vara Cível,101\n",
    )
    .expect("write csv");

    let records = load_dataset(&path).expect("load csv");
    assert_eq!(records[0].codigo.as_deref(), Some("101"));
}
