use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use super::FileSystem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Entry {
    File,
    Dir,
}

/// In-memory tree used to drive failure paths that are awkward to provoke on a
/// real disk.
#[derive(Default)]
pub(crate) struct MemoryFs {
    entries: RefCell<BTreeMap<PathBuf, Entry>>,
    locked: RefCell<BTreeSet<PathBuf>>,
    deny_create: Cell<bool>,
}

impl MemoryFs {
    pub(crate) fn add_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.add_ancestors(path);
        self.entries.borrow_mut().insert(path.to_owned(), Entry::Dir);
    }

    pub(crate) fn add_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.add_ancestors(path);
        self.entries.borrow_mut().insert(path.to_owned(), Entry::File);
    }

    /// Make every later `remove` of `path` fail with `PermissionDenied`.
    pub(crate) fn lock(&self, path: impl AsRef<Path>) {
        self.locked.borrow_mut().insert(path.as_ref().to_owned());
    }

    /// Make every later `create_dir_all` fail with `PermissionDenied`.
    pub(crate) fn deny_create(&self) {
        self.deny_create.set(true);
    }

    pub(crate) fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.entries.borrow().get(path.as_ref()) == Some(&Entry::Dir)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    fn add_ancestors(&self, path: &Path) {
        let mut entries = self.entries.borrow_mut();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            entries.entry(ancestor.to_owned()).or_insert(Entry::Dir);
        }
    }

    fn children(&self, path: &Path) -> Vec<PathBuf> {
        self.entries
            .borrow()
            .keys()
            .filter(|key| key.parent() == Some(path))
            .cloned()
            .collect()
    }
}

impl FileSystem for MemoryFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let entry = self.entries.borrow().get(path).copied();
        match entry {
            Some(Entry::Dir) => Ok(self.children(path)),
            Some(Entry::File) => Err(io::Error::from(io::ErrorKind::NotADirectory)),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.entries.borrow().contains_key(path)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        if self.locked.borrow().contains(path) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        let entry = self.entries.borrow().get(path).copied();
        match entry {
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
            Some(Entry::Dir) if !self.children(path).is_empty() => {
                Err(io::Error::from(io::ErrorKind::DirectoryNotEmpty))
            }
            Some(_) => {
                self.entries.borrow_mut().remove(path);
                Ok(())
            }
        }
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        if self.deny_create.get() {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        let blocked = path
            .ancestors()
            .any(|p| self.entries.borrow().get(p) == Some(&Entry::File));
        if blocked {
            return Err(io::Error::from(io::ErrorKind::NotADirectory));
        }
        self.add_dir(path);
        Ok(())
    }
}
