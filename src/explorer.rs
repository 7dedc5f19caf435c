//! The public entry point.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::entry::{Entry, EntryKind};
use crate::error::{ExplorerError, Result};
use crate::fs::{FileProvider, OsFileProvider};
use crate::ops::{
    BatchFileOperation, BatchFolderOperation, SingleFileOperation, SingleFolderOperation,
    TreeReader, TreeWriter, WriteReport, WriteStrategy, delete_entry,
};
use crate::path::PathResolver;

/// Reads, writes and deletes entry trees through a [`FileProvider`].
///
/// Operations run to completion on the calling thread. Nothing is cached
/// between calls, so one `Explorer` can be reused freely, or a new one built
/// wherever it is needed.
#[derive(Debug, Clone)]
pub struct Explorer<P: FileProvider = OsFileProvider> {
    provider: P,
    resolver: PathResolver,
}

impl Explorer<OsFileProvider> {
    /// An explorer over the host file system.
    pub fn new() -> Self {
        Self::with_provider(OsFileProvider)
    }
}

impl Default for Explorer<OsFileProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: FileProvider> Explorer<P> {
    pub fn with_provider(provider: P) -> Self {
        Self::with_config(provider, Config::default())
    }

    pub fn with_config(provider: P, config: Config) -> Self {
        Self {
            provider,
            resolver: config.resolver(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn current_directory_path(&self) -> PathBuf {
        self.provider.current_dir()
    }

    /// Joins `path` and `suffix` the way every operation resolves targets.
    pub fn resolve(&self, path: &str, suffix: &str) -> String {
        self.resolver.resolve(path, suffix)
    }

    /// Whether anything exists at `path`.
    pub fn is_file_exist(&self, path: &str) -> bool {
        self.provider.exists(Path::new(path))
    }

    /// Whether `path` is a file (`true`) or a directory (`false`).
    ///
    /// # Errors
    ///
    /// `PathDidNotExist` if nothing is there.
    pub fn is_file(&self, path: &str) -> Result<bool> {
        match self.provider.kind(Path::new(path)) {
            Some(kind) => Ok(kind == EntryKind::File),
            None => Err(ExplorerError::PathDidNotExist(path.into())),
        }
    }

    /// Scans the directory at `path`.
    ///
    /// Folders are only returned when `include_folders` is set, and only get
    /// their children filled in when `recursive` is set too. Files carry their
    /// text content and attributes when those could be read.
    ///
    /// # Errors
    ///
    /// - `DirectoryNotValid` if `path` (or a nested folder) cannot be listed
    /// - `PathDidNotExist` if a listed name vanished before it was probed
    pub fn read(&self, path: &str, include_folders: bool, recursive: bool) -> Result<Vec<Entry>> {
        TreeReader::new(&self.provider, &self.resolver, include_folders, recursive).read(path)
    }

    #[deprecated(since = "0.2.0", note = "renamed to `read`")]
    pub fn list(&self, path: &str, include_folders: bool, recursive: bool) -> Result<Vec<Entry>> {
        self.read(path, include_folders, recursive)
    }

    /// Writes `entries` into the directory `path` as one batch.
    ///
    /// # Errors
    ///
    /// - `PathDidNotExist` if `path` is empty
    /// - `MultipleErrors` with every failure, after rolling back the entries
    ///   that were written (`Safe` and `Overwrite` only; `Skippable` records
    ///   failures in the report instead)
    pub fn write(&self, entries: &[Entry], path: &str, strategy: WriteStrategy) -> Result<WriteReport> {
        TreeWriter::new(&self.provider, &self.resolver, strategy).write_all(entries, path)
    }

    /// Writes a single entry into `path`.
    ///
    /// Unlike [`write`](Self::write) the entry's own failure is returned as is
    /// (`FileExist`, `WriteError`, ...). A folder whose children failed still
    /// reports `MultipleErrors` for that child batch.
    pub fn write_entry(&self, entry: &Entry, path: &str, strategy: WriteStrategy) -> Result<WriteReport> {
        TreeWriter::new(&self.provider, &self.resolver, strategy).write_one(entry, path)
    }

    #[deprecated(since = "0.2.0", note = "use `write_entry`")]
    pub fn write_file(&self, op: &SingleFileOperation, strategy: WriteStrategy) -> Result<WriteReport> {
        self.write_entry(&op.target.clone().into(), &op.path, strategy)
    }

    #[deprecated(since = "0.2.0", note = "use `write`")]
    pub fn write_files(&self, op: &BatchFileOperation, strategy: WriteStrategy) -> Result<WriteReport> {
        self.write(&op.entries(), &op.path, strategy)
    }

    #[deprecated(since = "0.2.0", note = "use `write_entry`")]
    pub fn write_folder(
        &self,
        op: &SingleFolderOperation,
        strategy: WriteStrategy,
    ) -> Result<WriteReport> {
        self.write_entry(&op.target.clone().into(), &op.path, strategy)
    }

    #[deprecated(since = "0.2.0", note = "use `write`")]
    pub fn write_folders(
        &self,
        op: &BatchFolderOperation,
        strategy: WriteStrategy,
    ) -> Result<WriteReport> {
        self.write(&op.entries(), &op.path, strategy)
    }

    /// Deletes `entry` from the directory `path`.
    ///
    /// The provider's error is passed through unchanged.
    pub fn delete(&self, entry: &Entry, path: &str) -> io::Result<()> {
        delete_entry(&self.provider, &self.resolver, entry, path)
    }

    #[deprecated(since = "0.2.0", note = "use `delete`")]
    pub fn delete_file(&self, op: &SingleFileOperation) -> io::Result<()> {
        self.delete(&op.target.clone().into(), &op.path)
    }

    #[deprecated(since = "0.2.0", note = "use `delete`")]
    pub fn delete_folder(&self, op: &SingleFolderOperation) -> io::Result<()> {
        self.delete(&op.target.clone().into(), &op.path)
    }
}
