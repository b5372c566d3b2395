pub mod checks;
pub mod error;
pub mod loader;

pub use checks::{DatasetIssue, check_dataset};
pub use error::{IngestError, Result};
pub use loader::{DatasetFormat, load_dataset, parse_csv, parse_json};
