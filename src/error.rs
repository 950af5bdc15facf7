//! Errors raised while building a tree.

use std::io;
use std::path::{Path, PathBuf};

/// Failure to build the tree for one root path.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("{}: No such file or directory", .path.display())]
    PathNotFound { path: PathBuf },
    #[error("{}: cannot list directory: {source}", .path.display())]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TreeError {
    /// Classify an I/O error raised for `path`.
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => TreeError::PathNotFound { path },
            io::ErrorKind::PermissionDenied => TreeError::AccessDenied { path, source },
            _ => TreeError::Io { path, source },
        }
    }

    /// The path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            TreeError::PathNotFound { path }
            | TreeError::AccessDenied { path, .. }
            | TreeError::Io { path, .. } => path,
        }
    }
}
