#![forbid(unsafe_code)]
//! Writes shell completions and the man page for `treeline`.
//!
//! Usage: `generate-assets [OUT_DIR]` (default `dist`).

use anyhow::Context;
use clap::{CommandFactory, ValueEnum};
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use std::fs;
use std::path::{Path, PathBuf};
use treeline::cli::Args;

const BIN_NAME: &str = "treeline";

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    let written = write_completions(&out_dir.join("completions"))?;
    write_man_page(&out_dir.join("man"))?;

    eprintln!(
        "generated {} completion scripts and a man page under {}",
        written,
        out_dir.display()
    );
    Ok(())
}

fn write_completions(dir: &Path) -> anyhow::Result<usize> {
    fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;
    let shells = Shell::value_variants();
    for shell in shells {
        let mut cmd = Args::command();
        generate_to(*shell, &mut cmd, BIN_NAME, dir)
            .with_context(|| format!("failed to write {shell} completions"))?;
    }
    Ok(shells.len())
}

fn write_man_page(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;
    let mut buffer = Vec::new();
    Man::new(Args::command()).render(&mut buffer)?;
    let target = dir.join(format!("{BIN_NAME}.1"));
    fs::write(&target, buffer).with_context(|| format!("{}: cannot write", target.display()))
}
