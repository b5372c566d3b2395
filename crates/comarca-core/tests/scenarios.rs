//! End-to-end behavior of the filter session and sidebar on small datasets.

use comarca_core::{
    Dataset, FilterSession, build_sidebar, derive_options, matches, normalize, search_sidebar,
};
use comarca_model::{Field, FilterSelection, OptionSet, Record};

fn capital_dataset() -> Vec<Record> {
    vec![
        Record::new("Capital", "U01", "1ª Unidade", "3ª Vara Cível").with_codigo("101"),
        Record::new("Capital", "U02", "2ª Unidade", "1ª Vara Criminal").with_codigo(""),
    ]
}

fn values(options: &OptionSet) -> Vec<&str> {
    options.iter().map(String::as_str).collect()
}

#[test]
fn normalization_examples() {
    assert_eq!(normalize(None), "");
    assert_eq!(normalize(Some("3º Vara")), "3 vara");
    assert_eq!(normalize(Some("Comarca de São Paulo")), "comarca de sao paulo");
}

#[test]
fn ordinal_search_examples() {
    assert!(!matches("21ª Vara Criminal", "1"));
    assert!(matches("1ª Vara Criminal", "1"));
}

#[test]
fn unidade_options_for_comarca_are_numeric() {
    let records = capital_dataset();
    let selection = FilterSelection::new().with(Field::Comarca, "Capital");
    let options = derive_options(&records, &selection);
    assert_eq!(values(&options.unidade), vec!["1ª Unidade", "2ª Unidade"]);
}

#[test]
fn selecting_unidade_narrows_vara_and_codigo() {
    let mut session = FilterSession::new(Dataset::new(capital_dataset()));
    session.select(Field::Comarca, "Capital");
    session.select(Field::Unidade, "2ª Unidade");
    assert_eq!(values(session.options(Field::Vara)), vec!["1ª Vara Criminal"]);
    assert!(session.options(Field::Codigo).is_empty());
}

#[test]
fn comarca_change_resets_stale_unidade() {
    let mut records = capital_dataset();
    records.push(Record::new("Marabá", "U30", "Vara Única", "Vara Única").with_codigo("300"));
    let mut session = FilterSession::new(Dataset::new(records));

    session.select(Field::Comarca, "Capital");
    session.select(Field::Unidade, "2ª Unidade");
    session.select(Field::Vara, "1ª Vara Criminal");

    let reset = session.select(Field::Comarca, "Marabá");
    assert_eq!(reset, vec![Field::Unidade, Field::Vara]);
    assert_eq!(session.selection().get(Field::Unidade), None);
    assert_eq!(values(session.options(Field::Unidade)), vec!["Vara Única"]);
    assert_eq!(values(session.options(Field::Codigo)), vec!["300"]);
    assert_eq!(session.results().len(), 1);
}

#[test]
fn stats_follow_the_result_set() {
    let mut session = FilterSession::new(Dataset::new(capital_dataset()));
    let all = session.stats();
    assert_eq!((all.total_results, all.comarcas, all.unidades), (2, 1, 2));

    session.select(Field::Vara, "civel");
    let narrowed = session.stats();
    assert_eq!((narrowed.total_results, narrowed.comarcas, narrowed.unidades), (1, 1, 1));

    session.select(Field::Vara, "tributária");
    assert_eq!(session.stats().total_results, 0);
}

#[test]
fn sidebar_for_capital() {
    let nodes = build_sidebar(&capital_dataset());
    assert_eq!(nodes.len(), 1);
    let capital = &nodes[0];
    assert_eq!(capital.comarca_name, "Capital");
    let units: Vec<&str> = capital.units.iter().map(|u| u.unit_name.as_str()).collect();
    assert_eq!(units, vec!["1ª Unidade", "2ª Unidade"]);
    for unit in &capital.units {
        assert_eq!(unit.vara_count, unit.varas.len());
        assert!(unit.varas.iter().all(|vara| vara.present));
    }
    assert_eq!(capital.units[0].varas[0].vara_name, "3ª Vara Cível");
    assert_eq!(capital.units[1].varas[0].vara_name, "1ª Vara Criminal");
}

#[test]
fn sidebar_search_by_ordinal_unit() {
    let nodes = build_sidebar(&capital_dataset());
    let view = search_sidebar(&nodes, "2ª unidade");
    assert_eq!(view.unit_count(), 1);
    assert_eq!(view.comarcas[0].units[0].unit_name, "2ª Unidade");
    assert!(!view.comarcas[0].units[0].expanded);
}

#[test]
fn dataset_apply_agrees_with_free_function() {
    let records = capital_dataset();
    let dataset = Dataset::new(records.clone());
    let selection = FilterSelection::new().with(Field::Unidade, "unidade");
    let memoized: Vec<&Record> = dataset.apply(&selection);
    let direct = comarca_core::apply(&records, &selection);
    assert_eq!(memoized, direct);
}
