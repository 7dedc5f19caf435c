use std::io;
use std::path::{Path, PathBuf};

use crate::entry::{Attributes, EntryKind};

/// Primitive file system operations.
///
/// Methods take `&self`; implementations that keep state use interior
/// mutability. No synchronization is expected from implementors.
pub trait FileProvider {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// What exists at `path`, or `None` if nothing does.
    fn kind(&self, path: &Path) -> Option<EntryKind>;

    /// Removes a file, or a directory with everything below it.
    fn remove(&self, path: &Path) -> io::Result<()>;

    /// Creates or truncates a file. `None` content writes an empty file.
    fn create_file(
        &self,
        path: &Path,
        content: Option<&str>,
        attributes: Option<&Attributes>,
    ) -> io::Result<()>;

    /// Creates a directory. With `recursive`, missing parents are created and
    /// an existing directory is not an error.
    fn create_dir(
        &self,
        path: &Path,
        recursive: bool,
        attributes: Option<&Attributes>,
    ) -> io::Result<()>;

    /// Names of the direct children of a directory.
    /// Applies the writable attribute keys to something that already exists.
    fn set_attributes(&self, path: &Path, attributes: &Attributes) -> io::Result<()>;

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;

    fn read_attributes(&self, path: &Path) -> io::Result<Attributes>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn current_dir(&self) -> PathBuf;
}

impl<P: FileProvider + ?Sized> FileProvider for &P {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn kind(&self, path: &Path) -> Option<EntryKind> {
        (**self).kind(path)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        (**self).remove(path)
    }

    fn create_file(
        &self,
        path: &Path,
        content: Option<&str>,
        attributes: Option<&Attributes>,
    ) -> io::Result<()> {
        (**self).create_file(path, content, attributes)
    }

    fn create_dir(
        &self,
        path: &Path,
        recursive: bool,
        attributes: Option<&Attributes>,
    ) -> io::Result<()> {
        (**self).create_dir(path, recursive, attributes)
    }

    fn set_attributes(&self, path: &Path, attributes: &Attributes) -> io::Result<()> {
        (**self).set_attributes(path, attributes)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        (**self).list_dir(path)
    }

    fn read_attributes(&self, path: &Path) -> io::Result<Attributes> {
        (**self).read_attributes(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn current_dir(&self) -> PathBuf {
        (**self).current_dir()
    }
}
