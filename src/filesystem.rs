use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[cfg(test)]
pub(crate) mod memory;

/// The filesystem primitives [`delete`](crate::delete) and [`mkdir`](crate::mkdir)
/// are built on.
pub trait FileSystem {
    /// Immediate children of `path`, in whatever order the backend yields them.
    ///
    /// Fails when `path` is missing or is not a directory.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    fn exists(&self, path: &Path) -> bool;

    /// Remove a file, a link or an empty directory.
    fn remove(&self, path: &Path) -> io::Result<()>;

    /// Create `path` and every missing ancestor.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
///
/// Symbolic links are never followed. `read_dir` on a link to a directory
/// fails with `NotADirectory`, so [`delete`](crate::delete) removes the link
/// itself and leaves the target's contents alone. `exists` looks at the link,
/// not its target, so a dangling link exists and gets removed. Both differ
/// from link-following APIs such as `Path::exists` and `std::fs::read_dir`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        if !fs::symlink_metadata(path)?.is_dir() {
            return Err(io::Error::from(io::ErrorKind::NotADirectory));
        }

        fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect()
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        if fs::symlink_metadata(path)?.is_dir() {
            fs::remove_dir(path)
        } else {
            fs::remove_file(path)
        }
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}
