use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span};

use comarca_cli::query::{match_exit_code, option_lists, replay_selections};
use comarca_cli::render::{render_options, render_results, render_sidebar};
use comarca_core::{Dataset, FilterSession, build_sidebar, normalize_text, search_sidebar, summarize};
use comarca_ingest::load_dataset;
use comarca_model::{DatasetStats, Field, FilterSelection, Record};

use crate::cli::{MatchArgs, NormalizeArgs, OptionsArgs, SidebarArgs, TableArgs};

pub fn run_table(args: &TableArgs) -> Result<()> {
    let dataset = open_dataset(&args.dataset.path)?;
    let selection = args.selection.to_selection();
    let results = dataset.apply(&selection);
    let stats = summarize(results.iter().copied());
    info!(results = stats.total_results, "filters applied");

    if args.json {
        let report = TableReport {
            selection: &selection,
            stats: &stats,
            records: &results,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_results(&results, &stats));
    }
    Ok(())
}

pub fn run_options(args: &OptionsArgs) -> Result<()> {
    let dataset = open_dataset(&args.dataset.path)?;
    let mut session = FilterSession::new(dataset);
    let reset = replay_selections(&mut session, &args.selection.entries());

    let fields: Vec<Field> = match args.field {
        Some(field) => vec![field],
        None => Field::ALL.to_vec(),
    };
    let lists = option_lists(&session, &fields, args.search.as_deref().unwrap_or(""));
    debug!(lists = lists.len(), reset = reset.len(), "options derived");

    if args.json {
        let report = OptionsReport {
            selection: session.selection(),
            reset: reset.iter().map(Field::as_str).collect(),
            options: lists
                .iter()
                .map(|(field, options)| OptionList {
                    field: field.as_str(),
                    options: options.clone(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for field in &reset {
        eprintln!("note: {} selection cleared by the cascade", field.label());
    }
    for (index, (field, options)) in lists.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print!("{}", render_options(*field, options));
    }
    Ok(())
}

pub fn run_sidebar(args: &SidebarArgs) -> Result<()> {
    let dataset = open_dataset(&args.dataset.path)?;
    let _span = info_span!("sidebar").entered();
    let nodes = build_sidebar(dataset.records());
    let view = search_sidebar(&nodes, args.search.as_deref().unwrap_or(""));
    debug!(
        comarcas = view.comarcas.len(),
        units = view.unit_count(),
        "sidebar built"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_sidebar(&view, args.expand));
    }
    Ok(())
}

pub fn run_normalize(args: &NormalizeArgs) {
    for text in &args.texts {
        println!("{}", normalize_text(text));
    }
}

/// Returns the process exit status.
pub fn run_match(args: &MatchArgs) -> i32 {
    let code = match_exit_code(&args.text, &args.term);
    println!("{}", if code == 0 { "match" } else { "no match" });
    code
}

fn open_dataset(path: &Path) -> Result<Dataset> {
    let records =
        load_dataset(path).with_context(|| format!("load dataset {}", path.display()))?;
    Ok(Dataset::new(records))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TableReport<'a> {
    selection: &'a FilterSelection,
    stats: &'a DatasetStats,
    records: &'a [&'a Record],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OptionsReport<'a> {
    selection: &'a FilterSelection,
    reset: Vec<&'static str>,
    options: Vec<OptionList<'a>>,
}

#[derive(Serialize)]
struct OptionList<'a> {
    field: &'static str,
    options: Vec<&'a str>,
}
