//! Dropdown selections.

use serde::{Deserialize, Serialize};

use crate::record::Field;

/// The current value of each filter dropdown.
///
/// An unset field imposes no constraint. Blank values are never stored, so
/// `Some("")` cannot occur.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    comarca: Option<String>,
    unidade: Option<String>,
    vara: Option<String>,
    codigo: Option<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterSelection::set`].
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Set a field. A blank value clears it.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        *self.slot_mut(field) = if value.trim().is_empty() {
            None
        } else {
            Some(value)
        };
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    pub fn is_set(&self, field: Field) -> bool {
        self.slot(field).is_some()
    }

    /// True when no field constrains the result.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| !self.is_set(*field))
    }

    /// Set fields in cascade order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Comarca => &self.comarca,
            Field::Unidade => &self.unidade,
            Field::Vara => &self.vara,
            Field::Codigo => &self.codigo,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Comarca => &mut self.comarca,
            Field::Unidade => &mut self.unidade,
            Field::Vara => &mut self.vara,
            Field::Codigo => &mut self.codigo,
        }
    }
}
