//! Reading the reference table from disk.
//!
//! CSV files need a header row naming `comarca`, `unidadeId`, `unidade`
//! and `vara`; `codigo` (or `Código PJE`) is optional. Header names are compared without
//! case, accents, spaces or underscores, so `Unidade ID` and `unidade_id`
//! both work. JSON files hold an array of record objects.

use std::path::Path;

use comarca_model::Record;

use crate::checks::check_dataset;
use crate::error::{IngestError, Result};

/// Supported dataset encodings, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    Json,
}

impl DatasetFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Load a dataset file and log any consistency issues it contains.
pub fn load_dataset(path: &Path) -> Result<Vec<Record>> {
    let format = DatasetFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let bytes = std::fs::read(path).map_err(|e| IngestError::io(path, e))?;
    let records = match format {
        DatasetFormat::Csv => parse_csv(&bytes, path)?,
        DatasetFormat::Json => parse_json(&bytes, path)?,
    };

    tracing::info!(path = %path.display(), records = records.len(), "loaded dataset");
    for issue in check_dataset(&records) {
        tracing::warn!(path = %path.display(), "{issue}");
    }
    Ok(records)
}

/// Parse CSV bytes; `path` is only used in error messages.
pub fn parse_csv(bytes: &[u8], path: &Path) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|e| IngestError::csv(path, &e))?
        .clone();

    let columns = Columns::locate(&headers, path)?;
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| IngestError::csv(path, &e))?;
        if row.iter().all(str::is_empty) {
            continue;
        }
        records.push(columns.record(&row));
    }
    Ok(records)
}

/// Parse a JSON array of records; `path` is only used in error messages.
pub fn parse_json(bytes: &[u8], path: &Path) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_slice(bytes).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(records.into_iter().map(tidy).collect())
}

/// Accepted headings for the optional code column, including the
/// `Código PJE` label the table is displayed with.
const CODIGO_HEADERS: [&str; 3] = ["codigo", "codigoPje", "pje"];

struct Columns {
    comarca: usize,
    unidade_id: usize,
    unidade: usize,
    vara: usize,
    codigo: Option<usize>,
}

impl Columns {
    fn locate(headers: &csv::StringRecord, path: &Path) -> Result<Self> {
        let required = |name: &str| {
            header_index(headers, name).ok_or_else(|| IngestError::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            })
        };
        let columns = Self {
            comarca: required("comarca")?,
            unidade_id: required("unidadeId")?,
            unidade: required("unidade")?,
            vara: required("vara")?,
            codigo: CODIGO_HEADERS
                .iter()
                .find_map(|name| header_index(headers, name)),
        };
        if columns.codigo.is_none() {
            tracing::warn!(
                path = %path.display(),
                "no codigo column; records load without PJE codes"
            );
        }
        Ok(columns)
    }

    fn record(&self, row: &csv::StringRecord) -> Record {
        let cell = |idx: usize| row.get(idx).unwrap_or("").to_string();
        let record = Record::new(
            cell(self.comarca),
            cell(self.unidade_id),
            cell(self.unidade),
            cell(self.vara),
        );
        match self.codigo {
            Some(idx) => record.with_codigo(cell(idx)),
            None => record,
        }
    }
}

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    let wanted = header_key(name);
    headers.iter().position(|h| header_key(h) == wanted)
}

fn header_key(header: &str) -> String {
    header
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .map(|ch| match ch {
            'ó' | 'ò' | 'ô' | 'õ' => 'o',
            other => other,
        })
        .collect()
}

fn tidy(record: Record) -> Record {
    let tidied = Record::new(
        record.comarca.trim(),
        record.unidade_id.trim(),
        record.unidade.trim(),
        record.vara.trim(),
    );
    match record.codigo {
        Some(code) => tidied.with_codigo(code.trim()),
        None => tidied,
    }
}
