//! Build and render every requested root, isolating failures per root.

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::error::TreeError;
use crate::render::render;
use crate::tree::{TreeBuilder, TreeConfig};

/// The rendered diagram for one root, or the error that stopped it.
#[derive(Debug)]
pub struct RootOutcome {
    pub path: PathBuf,
    pub result: Result<String, TreeError>,
}

/// Build and render each path in order. A failing root never affects the others.
pub fn render_roots<B: TreeBuilder>(
    builder: &B,
    paths: &[PathBuf],
    config: &TreeConfig,
) -> Vec<RootOutcome> {
    paths
        .iter()
        .map(|path| {
            let result = builder.build_tree(path, config).map(|tree| render(&tree));
            debug!(path = %path.display(), ok = result.is_ok(), "rendered root");
            RootOutcome {
                path: path.clone(),
                result,
            }
        })
        .collect()
}

/// Write diagrams to `out` and errors to `err`. Returns `true` if every root succeeded.
pub fn write_outcomes(
    outcomes: &[RootOutcome],
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut all_ok = true;
    for outcome in outcomes {
        match &outcome.result {
            Ok(diagram) => writeln!(out, "{diagram}")?,
            Err(e) => {
                all_ok = false;
                writeln!(err, "treeline: {e}")?;
            }
        }
    }
    out.flush()?;
    Ok(all_ok)
}
