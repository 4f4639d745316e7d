use std::io;
use std::path::{Path, PathBuf};

/// Why [`mkdir`](crate::mkdir) did not produce a new directory.
#[derive(Debug, thiserror::Error)]
pub enum MkdirError {
    /// The target was already occupied by a file or directory.
    #[error("directory already exists: {}", .path.display())]
    AlreadyExists { path: PathBuf },
    /// The create primitive reported a failure.
    #[error("failed to create directory: {}", .path.display())]
    CreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MkdirError {
    /// Absolute path of the offending target.
    pub fn path(&self) -> &Path {
        match self {
            MkdirError::AlreadyExists { path } | MkdirError::CreationFailed { path, .. } => path,
        }
    }
}
