//! Reference records and the fields a user can filter on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ModelError;

/// One row of the court reference table.
///
/// `unidade_id` and `unidade` pair with exactly one `comarca`; `vara` is
/// scoped under `(comarca, unidade)`. A blank `codigo` is stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub comarca: String,
    #[serde(alias = "unidade_id")]
    pub unidade_id: String,
    pub unidade: String,
    pub vara: String,
    /// PJE system code.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub codigo: Option<String>,
}

impl Record {
    pub fn new(
        comarca: impl Into<String>,
        unidade_id: impl Into<String>,
        unidade: impl Into<String>,
        vara: impl Into<String>,
    ) -> Self {
        Self {
            comarca: comarca.into(),
            unidade_id: unidade_id.into(),
            unidade: unidade.into(),
            vara: vara.into(),
            codigo: None,
        }
    }

    /// Attach a PJE code. Blank codes are treated as absent.
    #[must_use]
    pub fn with_codigo(mut self, codigo: impl Into<String>) -> Self {
        self.codigo = non_blank(codigo.into());
        self
    }

    /// Raw value of a filterable field; an absent code reads as `""`.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Comarca => &self.comarca,
            Field::Unidade => &self.unidade,
            Field::Vara => &self.vara,
            Field::Codigo => self.codigo.as_deref().unwrap_or(""),
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// A PJE code as found in JSON datasets: text or a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCode {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl RawCode {
    fn into_text(self) -> String {
        match self {
            RawCode::Text(text) => text,
            RawCode::Integer(number) => number.to_string(),
            RawCode::Float(number) => number.to_string(),
        }
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<RawCode>::deserialize(deserializer)?;
    Ok(value.map(RawCode::into_text).and_then(non_blank))
}

/// A filterable column, in cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Comarca,
    Unidade,
    Vara,
    Codigo,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Comarca, Field::Unidade, Field::Vara, Field::Codigo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Comarca => "comarca",
            Field::Unidade => "unidade",
            Field::Vara => "vara",
            Field::Codigo => "codigo",
        }
    }

    /// Column heading shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Comarca => "Comarca",
            Field::Unidade => "Unidade",
            Field::Vara => "Vara",
            Field::Codigo => "Código PJE",
        }
    }

    /// Whether changing this field reshapes the option sets of other fields.
    pub fn drives_cascade(&self) -> bool {
        matches!(self, Field::Comarca | Field::Unidade)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "comarca" => Ok(Field::Comarca),
            "unidade" => Ok(Field::Unidade),
            "vara" => Ok(Field::Vara),
            "codigo" | "código" | "codigo_pje" | "código pje" | "codigo pje" => {
                Ok(Field::Codigo)
            }
            _ => Err(ModelError::UnknownField(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_codigo_is_absent() {
        let record = Record::new("Capital", "U1", "1ª Unidade", "1ª Vara").with_codigo("  ");
        assert_eq!(record.codigo, None);
        assert_eq!(record.field(Field::Codigo), "");
    }

    #[test]
    fn field_round_trips_through_str() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
        assert!("comarcas".parse::<Field>().is_err());
    }

    #[test]
    fn field_parses_user_spellings() {
        assert_eq!(" Unidade ".parse::<Field>().unwrap(), Field::Unidade);
        assert_eq!("código".parse::<Field>().unwrap(), Field::Codigo);
        assert_eq!(Field::Codigo.label().parse::<Field>().unwrap(), Field::Codigo);
        let error = "juiz".parse::<Field>().unwrap_err();
        assert_eq!(error.to_string(), "unknown filter field: juiz");
    }
}
