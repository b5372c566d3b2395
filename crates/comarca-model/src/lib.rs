//! Data model for the comarca reference table.

pub mod error;
pub mod options;
pub mod record;
pub mod selection;
pub mod sidebar;
pub mod stats;

pub use error::{ModelError, Result};
pub use options::{CascadeOptions, OptionSet};
pub use record::{Field, Record};
pub use selection::FilterSelection;
pub use sidebar::{ComarcaView, SidebarNode, SidebarView, UnitNode, UnitView, VaraEntry};
pub use stats::DatasetStats;
