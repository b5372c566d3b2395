//! Tests for comarca-model types.

use comarca_model::{CascadeOptions, Field, FilterSelection, OptionSet, Record, SidebarNode};

#[test]
fn record_deserializes_camel_case_keys() {
    let json = r#"{
        "comarca": "Capital",
        "unidadeId": "U01",
        "unidade": "1ª Unidade",
        "vara": "3ª Vara Cível",
        "codigo": "101"
    }"#;
    let record: Record = serde_json::from_str(json).expect("deserialize record");
    assert_eq!(record.unidade_id, "U01");
    assert_eq!(record.codigo.as_deref(), Some("101"));
}

#[test]
fn record_with_empty_or_missing_codigo_has_no_code() {
    let empty = r#"{"comarca":"Capital","unidadeId":"U02","unidade":"2ª Unidade","vara":"1ª Vara Criminal","codigo":""}"#;
    let missing = r#"{"comarca":"Capital","unidadeId":"U02","unidade":"2ª Unidade","vara":"1ª Vara Criminal"}"#;
    let null = r#"{"comarca":"Capital","unidadeId":"U02","unidade":"2ª Unidade","vara":"1ª Vara Criminal","codigo":null}"#;
    for json in [empty, missing, null] {
        let record: Record = serde_json::from_str(json).expect("deserialize record");
        assert_eq!(record.codigo, None, "{json}");
    }
}

#[test]
fn record_accepts_numeric_codigo() {
    let integer = r#"{"comarca":"Capital","unidadeId":"U01","unidade":"1ª Unidade","vara":"3ª Vara Cível","codigo":101}"#;
    let float = r#"{"comarca":"Capital","unidadeId":"U01","unidade":"1ª Unidade","vara":"3ª Vara Cível","codigo":7.0}"#;
    let record: Record = serde_json::from_str(integer).expect("deserialize record");
    assert_eq!(record.codigo.as_deref(), Some("101"));
    let record: Record = serde_json::from_str(float).expect("deserialize record");
    assert_eq!(record.codigo.as_deref(), Some("7"));
}

#[test]
fn record_rejects_non_scalar_codigo() {
    let json = r#"{"comarca":"Capital","unidadeId":"U01","unidade":"1ª Unidade","vara":"3ª Vara Cível","codigo":[101]}"#;
    assert!(serde_json::from_str::<Record>(json).is_err());
}

#[test]
fn record_accepts_snake_case_unit_id() {
    let json = r#"{"comarca":"Capital","unidade_id":"U03","unidade":"3ª Unidade","vara":"Vara Única"}"#;
    let record: Record = serde_json::from_str(json).expect("deserialize record");
    assert_eq!(record.unidade_id, "U03");
}

#[test]
fn selection_serializes_unset_fields_as_null() {
    let selection = FilterSelection::new().with(Field::Comarca, "Capital");
    let json = serde_json::to_value(&selection).expect("serialize selection");
    assert_eq!(json["comarca"], "Capital");
    assert!(json["unidade"].is_null());
}

#[test]
fn cascade_options_have_no_comarca_slot() {
    let options = CascadeOptions {
        unidade: OptionSet::from(vec!["1ª Unidade".to_string()]),
        ..CascadeOptions::default()
    };
    assert!(options.get(Field::Comarca).is_none());
    assert!(options.get(Field::Unidade).unwrap().contains("1ª Unidade"));
    assert!(options.get(Field::Codigo).unwrap().is_empty());
}

#[test]
fn sidebar_node_uses_camel_case_keys() {
    let node = SidebarNode {
        comarca_name: "Capital".to_string(),
        units: vec![],
    };
    let json = serde_json::to_string(&node).expect("serialize node");
    assert_eq!(json, r#"{"comarcaName":"Capital","units":[]}"#);
}
