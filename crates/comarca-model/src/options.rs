//! Option lists offered by the filter dropdowns.

use serde::{Deserialize, Serialize};

use crate::record::Field;

/// Ordered, duplicate-free values for one dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSet(Vec<String>);

impl OptionSet {
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|option| option == value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl From<Vec<String>> for OptionSet {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Option sets of the fields that depend on upstream selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeOptions {
    pub unidade: OptionSet,
    pub vara: OptionSet,
    pub codigo: OptionSet,
}

impl CascadeOptions {
    /// `None` for `comarca`, whose list never depends on other selections.
    pub fn get(&self, field: Field) -> Option<&OptionSet> {
        match field {
            Field::Comarca => None,
            Field::Unidade => Some(&self.unidade),
            Field::Vara => Some(&self.vara),
            Field::Codigo => Some(&self.codigo),
        }
    }
}
