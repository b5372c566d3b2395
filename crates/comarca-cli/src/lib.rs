//! CLI library components for the comarca reference table.

#![allow(missing_docs)]

pub mod logging;
pub mod query;
pub mod render;
