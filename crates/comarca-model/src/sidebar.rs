//! Hierarchical comarca → unidade → vara view model.

use serde::{Deserialize, Serialize};

/// A comarca and the units observed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarNode {
    pub comarca_name: String,
    pub units: Vec<UnitNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitNode {
    pub unit_name: String,
    /// Number of varas listed under this unit.
    pub vara_count: usize,
    pub varas: Vec<VaraEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaraEntry {
    pub vara_name: String,
    /// Always true: varas are enumerated from the data itself.
    pub present: bool,
}

/// Sidebar after a free-text search: only visible comarcas and units remain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarView {
    pub comarcas: Vec<ComarcaView>,
}

impl SidebarView {
    pub fn is_empty(&self) -> bool {
        self.comarcas.is_empty()
    }

    pub fn unit_count(&self) -> usize {
        self.comarcas.iter().map(|comarca| comarca.units.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComarcaView {
    pub comarca_name: String,
    pub units: Vec<UnitView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitView {
    pub unit_name: String,
    pub vara_count: usize,
    /// Set when the unit is shown because one of its varas matched.
    pub expanded: bool,
    pub varas: Vec<VaraEntry>,
}
