//! CLI argument definitions for the comarca table.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use comarca_model::{Field, FilterSelection};

#[derive(Parser)]
#[command(
    name = "comarca",
    version,
    about = "Court reference table - filter comarcas, unidades, varas and PJE codes",
    long_about = "Filter the court reference table (comarca, unidade, vara, código PJE).\n\n\
                  Matching ignores case, accents and punctuation. Dependent option lists\n\
                  follow the selected comarca and unidade."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the records matching the filters, with summary counts.
    Table(TableArgs),

    /// Print the dropdown options left after applying the selections in cascade order.
    Options(OptionsArgs),

    /// Print the comarca / unidade / vara tree, optionally narrowed by a search.
    Sidebar(SidebarArgs),

    /// Print the normalized form of each text.
    Normalize(NormalizeArgs),

    /// Check whether a search term matches a text (exit status 0 on match, 2 otherwise).
    Match(MatchArgs),
}

#[derive(Args)]
pub struct DatasetArg {
    /// Dataset file (.csv or .json).
    #[arg(value_name = "DATASET")]
    pub path: PathBuf,
}

#[derive(Args, Default)]
pub struct SelectionArgs {
    /// Comarca filter.
    #[arg(long)]
    pub comarca: Option<String>,

    /// Unidade filter.
    #[arg(long)]
    pub unidade: Option<String>,

    /// Vara filter.
    #[arg(long)]
    pub vara: Option<String>,

    /// Código PJE filter.
    #[arg(long)]
    pub codigo: Option<String>,
}

impl SelectionArgs {
    /// Selections in cascade order, skipping unset flags.
    pub fn entries(&self) -> Vec<(Field, &str)> {
        [
            (Field::Comarca, &self.comarca),
            (Field::Unidade, &self.unidade),
            (Field::Vara, &self.vara),
            (Field::Codigo, &self.codigo),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|value| (field, value)))
        .collect()
    }

    pub fn to_selection(&self) -> FilterSelection {
        self.entries()
            .into_iter()
            .fold(FilterSelection::new(), |selection, (field, value)| {
                selection.with(field, value)
            })
    }
}

#[derive(Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub dataset: DatasetArg,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct OptionsArgs {
    #[command(flatten)]
    pub dataset: DatasetArg,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Only list the options of this field (comarca, unidade, vara, codigo).
    #[arg(long, value_name = "FIELD")]
    pub field: Option<Field>,

    /// Keep only options containing this text (as typed into a dropdown).
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SidebarArgs {
    #[command(flatten)]
    pub dataset: DatasetArg,

    /// Free-text search; numbers match whole ordinals ("1ª" does not find "21ª").
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// List the varas of every unit, not only of units expanded by the search.
    #[arg(long)]
    pub expand: bool,

    /// Emit JSON instead of a tree.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// Texts to normalize.
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,
}

#[derive(Args)]
pub struct MatchArgs {
    /// Candidate text, e.g. a vara name.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Search term.
    #[arg(value_name = "TERM")]
    pub term: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
