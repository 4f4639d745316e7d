use std::path::{Path, PathBuf};

use crate::error::MkdirError;
use crate::filesystem::{FileSystem, LocalFs};

/// Create `parent/name` on the local filesystem.
///
/// See [`mkdir_with`].
pub fn mkdir(parent: impl AsRef<Path>, name: impl AsRef<Path>) -> Result<PathBuf, MkdirError> {
    mkdir_with(&LocalFs, parent.as_ref(), name.as_ref())
}

/// Create the directory `parent/name`, plus any missing ancestors.
///
/// Fails with [`MkdirError::AlreadyExists`] if anything already occupies the
/// target, in which case nothing is created. Returns the joined path on success.
pub fn mkdir_with<F: FileSystem + ?Sized>(
    fs: &F,
    parent: &Path,
    name: &Path,
) -> Result<PathBuf, MkdirError> {
    let target = parent.join(name);

    if fs.exists(&target) {
        return Err(MkdirError::AlreadyExists {
            path: absolute(&target),
        });
    }

    fs.create_dir_all(&target)
        .map_err(|source| MkdirError::CreationFailed {
            path: absolute(&target),
            source,
        })?;

    Ok(target)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_owned())
}
