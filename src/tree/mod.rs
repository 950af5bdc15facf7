//! Directory tree model and construction.

pub(crate) mod walk;

use std::path::{Path, PathBuf};

use crate::error::TreeError;

pub use walk::build_tree;

/// One filesystem entry and, for directories, its visible children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Display name (filename component only).
    pub name: String,
    /// Full path. For a root built from disk this is the canonical path.
    pub path: PathBuf,
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Visible children, sorted by name.
    pub children: Vec<Node>,
    /// Number of file-like entries among `children`.
    pub direct_file_count: usize,
    /// Number of directories among `children`.
    pub direct_subdir_count: usize,
    /// Listing error if this directory was kept as an inaccessible marker.
    pub error: Option<String>,
}

impl Node {
    /// A childless node at `path`.
    pub fn leaf(name: impl Into<String>, path: impl Into<PathBuf>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir,
            children: Vec::new(),
            direct_file_count: 0,
            direct_subdir_count: 0,
            error: None,
        }
    }

    /// A file leaf whose path is its name. Handy for building trees by hand.
    pub fn file(name: &str) -> Self {
        Self::leaf(name, name, false)
    }

    /// A directory whose path is its name. `children` are sorted by
    /// byte-wise name before they are attached.
    pub fn dir(name: &str, mut children: Vec<Node>) -> Self {
        children.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
        let mut node = Self::leaf(name, name, true);
        for child in children {
            node.push_child(child);
        }
        node
    }

    /// A directory that could not be listed.
    pub fn inaccessible(name: impl Into<String>, path: impl Into<PathBuf>, error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::leaf(name, path, true)
        }
    }

    /// Replace the node's path, keeping everything else.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Append a child and bump the matching direct count.
    pub(crate) fn push_child(&mut self, child: Node) {
        if child.is_dir {
            self.direct_subdir_count += 1;
        } else {
            self.direct_file_count += 1;
        }
        self.children.push(child);
    }

    /// Total directories and files below this node (the node itself excluded).
    pub fn summary(&self) -> TreeSummary {
        let mut summary = TreeSummary::default();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            summary.directories += node.direct_subdir_count;
            summary.files += node.direct_file_count;
            stack.extend(node.children.iter());
        }
        summary
    }
}

/// Aggregate counts printed under a rendered tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
    pub directories: usize,
    pub files: usize,
}

/// What to do when a nested directory cannot be listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum AccessPolicy {
    /// Keep the directory as a leaf carrying the error message.
    #[default]
    Mark,
    /// Abort the whole root with `AccessDenied`.
    Fail,
}

/// Configuration for tree building.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    /// Whether to include hidden entries (dotfiles).
    pub show_hidden: bool,
    /// Handling of unreadable nested directories.
    pub on_access_denied: AccessPolicy,
}

/// Abstraction over tree construction so it can be swapped or mocked.
pub trait TreeBuilder {
    fn build_tree(&self, root: &Path, config: &TreeConfig) -> Result<Node, TreeError>;
}

/// Default `TreeBuilder` that reads the real filesystem.
pub struct FsTreeBuilder;

impl TreeBuilder for FsTreeBuilder {
    fn build_tree(&self, root: &Path, config: &TreeConfig) -> Result<Node, TreeError> {
        build_tree(root, config)
    }
}

/// Build the tree under `path` with the default access policy.
pub fn build(path: impl AsRef<Path>, show_hidden: bool) -> Result<Node, TreeError> {
    let config = TreeConfig {
        show_hidden,
        ..TreeConfig::default()
    };
    build_tree(path.as_ref(), &config)
}
