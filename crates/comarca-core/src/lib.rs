//! Normalization, matching, filtering and option cascade for the comarca table.
//!
//! Every operation here is a pure function of an immutable record set and
//! never fails: missing text is empty, unset selections are unconstrained,
//! and "no match" is an empty result.

pub mod cascade;
pub mod collation;
pub mod dataset;
pub mod filter;
pub mod matcher;
pub mod normalize;
pub mod session;
pub mod sidebar;
pub mod stats;

pub use cascade::{
    CascadeUpdate, cascade, codigo_options, comarca_options, derive_options, reconcile,
    unidade_options, vara_options,
};
pub use dataset::{Dataset, NormalizedRecord};
pub use filter::apply;
pub use matcher::{SearchTerm, matches, option_matches};
pub use normalize::{normalize, normalize_text};
pub use session::FilterSession;
pub use sidebar::{build_sidebar, search_sidebar};
pub use stats::summarize;
