use std::path::Path;

use tracing::{debug, trace};

use crate::filesystem::{FileSystem, LocalFs};

/// Delete `path` from the local filesystem, recursing into directories.
///
/// See [`delete_with`].
pub fn delete(path: impl AsRef<Path>) -> bool {
    delete_with(&LocalFs, path.as_ref())
}

/// Delete `path` and everything below it.
///
/// Children are removed depth-first before their parent. A path that does not
/// exist once its children are gone counts as deleted, so deleting a missing
/// path returns `true`.
///
/// The result only reflects the final removal of `path` itself. A child that
/// cannot be removed is not reported on its own; it surfaces as `false` only
/// because its parent directory is still non-empty.
pub fn delete_with<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> bool {
    if let Ok(children) = fs.read_dir(path) {
        for child in children {
            delete_with(fs, &child);
        }
    }

    if !fs.exists(path) {
        return true;
    }

    match fs.remove(path) {
        Ok(()) => {
            trace!(path = %path.display(), "removed");
            true
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "remove failed");
            false
        }
    }
}
