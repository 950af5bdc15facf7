use std::fs;
use std::io;
use std::mem;
use std::path::{Path, PathBuf};
use std::vec;

use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use super::{AccessPolicy, Node, TreeConfig};
use crate::error::TreeError;

/// A visible entry of a listed directory.
struct Listed {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// A directory whose children are still being assembled.
struct Frame {
    node: Node,
    pending: vec::IntoIter<Listed>,
}

impl Frame {
    fn new(node: Node, entries: Vec<Listed>) -> Self {
        Self {
            node,
            pending: entries.into_iter(),
        }
    }
}

/// Result of visiting one listed entry.
enum Step {
    Leaf(Node),
    Enter(Frame),
}

/// Build the tree rooted at `root`.
///
/// Only `root` is canonicalized; nested entries keep their listed paths and
/// symbolic links below the root are recorded as file-like leaves. Traversal
/// uses an explicit stack so deep hierarchies cannot exhaust the call stack.
pub fn build_tree(root: &Path, config: &TreeConfig) -> Result<Node, TreeError> {
    let resolved = root
        .canonicalize()
        .map_err(|e| TreeError::from_io(root, e))?;
    let metadata = fs::metadata(&resolved).map_err(|e| TreeError::from_io(&resolved, e))?;
    let name = resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| resolved.display().to_string());

    debug!(root = %resolved.display(), show_hidden = config.show_hidden, "building tree");

    if !metadata.is_dir() {
        return Ok(Node::leaf(name, resolved, false));
    }

    // The root is never replaced by a marker: an unreadable root fails outright.
    let entries = list_dir(&resolved, config)?;
    if entries.is_empty() {
        return Ok(Node::leaf(name, resolved, true));
    }

    // `current` is the directory being filled; `parents` holds its open ancestors.
    let mut current = Frame::new(Node::leaf(name, resolved, true), entries);
    let mut parents: Vec<Frame> = Vec::new();
    loop {
        match current.pending.next() {
            Some(entry) => match visit(entry, config)? {
                Step::Leaf(node) => current.node.push_child(node),
                Step::Enter(child) => parents.push(mem::replace(&mut current, child)),
            },
            None => match parents.pop() {
                Some(parent) => {
                    let done = mem::replace(&mut current, parent);
                    current.node.push_child(done.node);
                }
                None => return Ok(current.node),
            },
        }
    }
}

fn visit(entry: Listed, config: &TreeConfig) -> Result<Step, TreeError> {
    if !entry.is_dir {
        return Ok(Step::Leaf(Node::leaf(entry.name, entry.path, false)));
    }

    match list_dir(&entry.path, config) {
        Ok(children) if children.is_empty() => {
            Ok(Step::Leaf(Node::leaf(entry.name, entry.path, true)))
        }
        Ok(children) => Ok(Step::Enter(Frame::new(
            Node::leaf(entry.name, entry.path, true),
            children,
        ))),
        Err(err) => match config.on_access_denied {
            AccessPolicy::Fail => Err(err),
            AccessPolicy::Mark => {
                warn!(path = %entry.path.display(), "marking unreadable directory: {err}");
                let message = match &err {
                    TreeError::AccessDenied { source, .. } | TreeError::Io { source, .. } => {
                        source.to_string()
                    }
                    TreeError::PathNotFound { .. } => "vanished during traversal".to_string(),
                };
                Ok(Step::Leaf(Node::inaccessible(entry.name, entry.path, message)))
            }
        },
    }
}

/// List the immediate, visible entries of `dir`, sorted by byte-wise name.
fn list_dir(dir: &Path, config: &TreeConfig) -> Result<Vec<Listed>, TreeError> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                let depth = e.depth();
                let path = e.path().unwrap_or(dir).to_path_buf();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "directory walk failed"));
                match entry_error(dir, depth, &path, source) {
                    Some(err) => return Err(err),
                    None => continue,
                }
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        // Filter hidden entries
        if !config.show_hidden && name.starts_with('.') {
            continue;
        }

        let is_dir = entry.file_type().is_dir();
        entries.push(Listed {
            name,
            path: entry.into_path(),
            is_dir,
        });
    }

    trace!(dir = %dir.display(), entries = entries.len(), "listed directory");
    Ok(entries)
}

/// Classify a listing failure. Errors on the directory itself keep their own
/// path; a failing child is charged to `dir`, except a child that vanished
/// after readdir, which is skipped (`None`).
fn entry_error(dir: &Path, depth: usize, path: &Path, source: io::Error) -> Option<TreeError> {
    if depth == 0 {
        return Some(TreeError::from_io(path, source));
    }
    if source.kind() == io::ErrorKind::NotFound {
        warn!(path = %path.display(), "skipping entry that vanished during listing");
        return None;
    }
    Some(match source.kind() {
        io::ErrorKind::PermissionDenied => TreeError::AccessDenied {
            path: dir.to_path_buf(),
            source,
        },
        _ => TreeError::Io {
            path: dir.to_path_buf(),
            source,
        },
    })
}
