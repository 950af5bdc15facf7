#![forbid(unsafe_code)]

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use treeline::cli::Args;
use treeline::logging;
use treeline::run::{render_roots, write_outcomes};
use treeline::tree::FsTreeBuilder;

fn main() -> ExitCode {
    match run_app() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("treeline: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Render every requested root. Returns whether all of them succeeded.
fn run_app() -> Result<bool> {
    let args = Args::parse().validated();
    logging::init(args.verbose, args.quiet);
    debug!("parsed arguments: {args:?}");

    let config = args.tree_config();
    let outcomes = render_roots(&FsTreeBuilder, &args.paths, &config);

    let stdout = io::stdout();
    let stderr = io::stderr();
    write_outcomes(&outcomes, &mut stdout.lock(), &mut stderr.lock())
        .context("failed to write output")
}
