#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use treeline::tree::{Node, TreeConfig};

/// Default TreeConfig: hidden entries excluded, unreadable directories marked.
pub fn default_tree_config() -> TreeConfig {
    TreeConfig::default()
}

/// TreeConfig with hidden entries included.
pub fn show_hidden_config() -> TreeConfig {
    TreeConfig {
        show_hidden: true,
        ..TreeConfig::default()
    }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    populate(tmp.path(), paths);
    tmp
}

/// Add the given relative paths under an existing directory.
pub fn populate(root: &Path, paths: &[&str]) {
    for p in paths {
        let full = root.join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
}

/// Names of a node's direct children.
pub fn child_names(node: &Node) -> Vec<&str> {
    node.children.iter().map(|c| c.name.as_str()).collect()
}

/// Find a direct child by name.
pub fn child<'a>(node: &'a Node, name: &str) -> &'a Node {
    node.children
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("no child named {name:?} in {:?}", child_names(node)))
}

/// Rendered output with the root's first line removed, so assertions do not
/// depend on the temporary directory's path.
pub fn body(rendered: &str) -> String {
    rendered.split_once('\n').map(|(_, rest)| rest.to_string()).unwrap_or_default()
}
