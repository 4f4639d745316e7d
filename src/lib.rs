//! Filesystem helpers: recursive delete and guarded single-directory creation.
//!
//! Both operations run synchronously against whatever [`FileSystem`] they are
//! handed. The free functions [`delete`] and [`mkdir`] use [`LocalFs`].

mod error;
mod filesystem;
mod mkdir;
mod remove;

pub use self::error::MkdirError;
pub use self::filesystem::{FileSystem, LocalFs};
pub use self::mkdir::{mkdir, mkdir_with};
pub use self::remove::{delete, delete_with};
