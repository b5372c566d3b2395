//! Comarca → unidade → vara tree and its free-text search.

use std::collections::HashMap;

use comarca_model::{
    ComarcaView, Record, SidebarNode, SidebarView, UnitNode, UnitView, VaraEntry,
};

use crate::collation::{collate, distinct_sorted, distinct_sorted_refs, numeric_leading_cmp};
use crate::matcher::SearchTerm;

/// Group records into the sidebar tree.
///
/// Comarcas are collated; units and varas are ordered by their leading
/// number. Every vara comes from the data, so each is marked present.
pub fn build_sidebar(records: &[Record]) -> Vec<SidebarNode> {
    let mut comarcas: Vec<&str> = Vec::new();
    let mut units_by_comarca: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut varas_by_unit: HashMap<(&str, &str), Vec<&str>> = HashMap::new();

    for record in records {
        let comarca = record.comarca.as_str();
        let unidade = record.unidade.as_str();
        units_by_comarca
            .entry(comarca)
            .or_insert_with(|| {
                comarcas.push(comarca);
                Vec::new()
            })
            .push(unidade);
        varas_by_unit
            .entry((comarca, unidade))
            .or_default()
            .push(record.vara.as_str());
    }

    let nodes: Vec<SidebarNode> = distinct_sorted_refs(comarcas, collate)
        .into_iter()
        .map(|comarca| {
            let unit_names = units_by_comarca.get(comarca).cloned().unwrap_or_default();
            let units = distinct_sorted_refs(unit_names, numeric_leading_cmp)
                .into_iter()
                .map(|unidade| {
                    let vara_names = varas_by_unit
                        .get(&(comarca, unidade))
                        .cloned()
                        .unwrap_or_default();
                    let varas: Vec<VaraEntry> = distinct_sorted(vara_names, numeric_leading_cmp)
                        .into_iter()
                        .map(|vara_name| VaraEntry {
                            vara_name,
                            present: true,
                        })
                        .collect();
                    UnitNode {
                        unit_name: unidade.to_string(),
                        vara_count: varas.len(),
                        varas,
                    }
                })
                .collect();
            SidebarNode {
                comarca_name: comarca.to_string(),
                units,
            }
        })
        .collect();

    tracing::debug!(comarcas = nodes.len(), "built sidebar");
    nodes
}

/// Visible part of the sidebar for a search term.
///
/// A matching comarca shows all of its units. Otherwise a unit shows when
/// its name matches, or shows expanded when one of its varas matches.
/// Comarcas without a visible unit are hidden. A blank term shows
/// everything collapsed.
pub fn search_sidebar(nodes: &[SidebarNode], term: &str) -> SidebarView {
    let term = SearchTerm::new(term);
    let comarcas = nodes
        .iter()
        .filter_map(|node| {
            if term.is_empty() || term.matches(&node.comarca_name) {
                return Some(comarca_view(node, node.units.iter().map(collapsed).collect()));
            }
            let units: Vec<UnitView> = node
                .units
                .iter()
                .filter_map(|unit| {
                    if term.matches(&unit.unit_name) {
                        Some(collapsed(unit))
                    } else if unit.varas.iter().any(|vara| term.matches(&vara.vara_name)) {
                        Some(UnitView {
                            expanded: true,
                            ..collapsed(unit)
                        })
                    } else {
                        None
                    }
                })
                .collect();
            (!units.is_empty()).then(|| comarca_view(node, units))
        })
        .collect();
    SidebarView { comarcas }
}

fn comarca_view(node: &SidebarNode, units: Vec<UnitView>) -> ComarcaView {
    ComarcaView {
        comarca_name: node.comarca_name.clone(),
        units,
    }
}

fn collapsed(unit: &UnitNode) -> UnitView {
    UnitView {
        unit_name: unit.unit_name.clone(),
        vara_count: unit.vara_count,
        expanded: false,
        varas: unit.varas.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::new("Capital", "U02", "2ª Unidade", "1ª Vara Criminal"),
            Record::new("Capital", "U01", "1ª Unidade", "3ª Vara Cível"),
            Record::new("Capital", "U01", "1ª Unidade", "1ª Vara Cível"),
            Record::new("Capital", "U01", "1ª Unidade", "1ª Vara Cível"),
            Record::new("Altamira", "U40", "Vara Única", "Vara Única"),
        ]
    }

    #[test]
    fn groups_and_orders_the_tree() {
        let nodes = build_sidebar(&records());
        let comarcas: Vec<&str> = nodes.iter().map(|n| n.comarca_name.as_str()).collect();
        assert_eq!(comarcas, vec!["Altamira", "Capital"]);

        let capital = &nodes[1];
        let units: Vec<&str> = capital.units.iter().map(|u| u.unit_name.as_str()).collect();
        assert_eq!(units, vec!["1ª Unidade", "2ª Unidade"]);

        let first = &capital.units[0];
        let varas: Vec<&str> = first.varas.iter().map(|v| v.vara_name.as_str()).collect();
        assert_eq!(varas, vec!["1ª Vara Cível", "3ª Vara Cível"]);
        assert_eq!(first.vara_count, 2);
        assert!(first.varas.iter().all(|v| v.present));
    }

    #[test]
    fn blank_search_shows_everything_collapsed() {
        let nodes = build_sidebar(&records());
        let view = search_sidebar(&nodes, "  ");
        assert_eq!(view.comarcas.len(), 2);
        assert_eq!(view.unit_count(), 3);
        assert!(view.comarcas.iter().flat_map(|c| &c.units).all(|u| !u.expanded));
    }

    #[test]
    fn comarca_match_shows_all_units() {
        let nodes = build_sidebar(&records());
        let view = search_sidebar(&nodes, "capital");
        assert_eq!(view.comarcas.len(), 1);
        assert_eq!(view.comarcas[0].units.len(), 2);
    }

    #[test]
    fn vara_match_expands_its_unit() {
        let nodes = build_sidebar(&records());
        let view = search_sidebar(&nodes, "criminal");
        assert_eq!(view.comarcas.len(), 1);
        let units = &view.comarcas[0].units;
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].unit_name, "2ª Unidade");
        assert!(units[0].expanded);
    }

    #[test]
    fn ordinal_search_respects_number_boundaries() {
        let nodes = build_sidebar(&records());
        let view = search_sidebar(&nodes, "3ª");
        assert_eq!(view.comarcas.len(), 1);
        let units = &view.comarcas[0].units;
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].unit_name, "1ª Unidade");
        assert!(units[0].expanded);
    }

    #[test]
    fn no_match_hides_everything() {
        let nodes = build_sidebar(&records());
        assert!(search_sidebar(&nodes, "trabalhista").is_empty());
    }
}
