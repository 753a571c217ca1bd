//! `lineage` - interactive query tool over gene mutation graphs.
//!
//! Loads a gene graph file once, then answers reachability, step,
//! cost and path queries on standard input. With `--strict` the file
//! is fully validated and the print/explore command set is active.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use lineage_core::{load_graph, GeneGraph, LoadOptions};
use tracing_subscriber::EnvFilter;

mod commands;
mod repl;

use repl::Variant;

/// Interactive query tool over a gene mutation graph.
#[derive(Parser, Debug)]
#[command(name = "lineage")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Gene graph file to load
    file: PathBuf,

    /// Validate the file strictly and use the print/explore command set
    #[arg(long, env = "LINEAGE_STRICT")]
    strict: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let (options, variant) = if args.strict {
        (LoadOptions::strict(), Variant::Strict)
    } else {
        (LoadOptions::loose(), Variant::Primary)
    };

    let graph = match load_graph(&args.file, options) {
        Ok(graph) => graph,
        Err(err) if args.strict && err.is_malformed() => {
            eprintln!("Invalid file format. Exiting program.");
            return ExitCode::from(3);
        }
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(genes = graph.len(), strict = args.strict, "graph loaded");

    if let Err(err) = run_session(&graph, variant) {
        eprintln!("{} {err:#}", "error:".red().bold());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_session(graph: &GeneGraph, variant: Variant) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(graph, variant, stdin.lock(), stdout.lock()).context("query session failed")?;
    Ok(())
}
