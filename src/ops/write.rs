//! Persisting entry trees to disk.
//!
//! ## Execution
//!
//! 1. **Validate**: destination path must be non-empty, entry names must be
//!    non-empty.
//! 2. **Gate**: the [`WriteStrategy`] decides what happens when a file target
//!    already exists.
//! 3. **Write**: files are created with their content and attributes; folders
//!    are created (with parents), then their children are written into them
//!    as one sibling batch.
//! 4. **Rollback** (`Safe`/`Overwrite` only): when any sibling of a batch
//!    fails, every sibling that succeeded is undone and the failures come
//!    back as one [`ExplorerError::MultipleErrors`].
//!
//! Under `Skippable` nothing is rolled back; failures are recorded in the
//! [`WriteReport`] and the walk continues.
//!
//! Whatever the strategy, an entry that fails leaves nothing behind that it
//! did not find on disk. A failed `Safe`/`Overwrite` call also removes the
//! missing destination directories it created.

use std::path::{Path, PathBuf};

use super::operation::WriteStrategy;
use super::report::{WriteReport, WriteStatus};
use super::transaction::{self, Applied};
use crate::entry::{Attributes, Entry, EntryKind, File, Folder, attr};
use crate::error::{ExplorerError, Result};
use crate::fs::FileProvider;
use crate::path::PathResolver;

pub(crate) struct TreeWriter<'a, P: FileProvider + ?Sized> {
    provider: &'a P,
    resolver: &'a PathResolver,
    strategy: WriteStrategy,
    report: WriteReport,
}

impl<'a, P: FileProvider + ?Sized> TreeWriter<'a, P> {
    pub fn new(provider: &'a P, resolver: &'a PathResolver, strategy: WriteStrategy) -> Self {
        Self {
            provider,
            resolver,
            strategy,
            report: WriteReport::default(),
        }
    }

    /// Writes `entries` as one batch into `path`.
    pub fn write_all(mut self, entries: &[Entry], path: &str) -> Result<WriteReport> {
        ensure_destination(path)?;
        let missing = self.first_missing_ancestor(path);
        let result = self.write_batch(entries, path);
        self.finish(result, missing)
    }

    /// Writes a single entry. Its own failure comes back as is, not wrapped.
    pub fn write_one(mut self, entry: &Entry, path: &str) -> Result<WriteReport> {
        ensure_destination(path)?;
        let missing = self.first_missing_ancestor(path);
        let result = self.write_entry(entry, path);
        self.finish(result, missing)
    }

    fn finish<T>(self, result: Result<T>, missing: Option<PathBuf>) -> Result<WriteReport> {
        match result {
            Ok(_) => Ok(self.report),
            Err(e) => {
                if let Some(root) = missing.filter(|root| self.provider.exists(root)) {
                    self.discard(root, EntryKind::Directory);
                }
                Err(e)
            }
        }
    }

    /// Topmost directory on the way to `path` that does not exist yet.
    fn first_missing_ancestor(&self, path: &str) -> Option<PathBuf> {
        let destination = self.resolver.resolve(path, "");
        let mut missing = None;
        for ancestor in Path::new(&destination).ancestors() {
            let is_root = ancestor.parent().is_none();
            if is_root || ancestor.as_os_str().is_empty() || self.provider.exists(ancestor) {
                break;
            }
            missing = Some(ancestor.to_path_buf());
        }
        missing
    }

    fn write_batch(&mut self, entries: &[Entry], path: &str) -> Result<Vec<Applied>> {
        let mut applied = Vec::new();
        let mut errors = Vec::new();

        // Attempt every sibling before deciding; the aggregate error lists
        // all of them.
        for entry in entries {
            match self.write_entry(entry, path) {
                Ok(Some(done)) => applied.push(done),
                Ok(None) => {}
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            return Ok(applied);
        }

        log::debug!(
            "{} of {} entries failed in {}",
            errors.len(),
            entries.len(),
            path
        );
        transaction::rollback(self.provider, &applied);
        Err(ExplorerError::MultipleErrors(errors))
    }

    /// `Ok(None)` means nothing was put on disk that a rollback would undo:
    /// the entry was skipped, or its failure was recorded under `Skippable`.
    fn write_entry(&mut self, entry: &Entry, path: &str) -> Result<Option<Applied>> {
        match entry {
            Entry::File(file) => self.write_file(file, path),
            Entry::Folder(folder) => self.write_folder(folder, path),
        }
    }

    fn write_file(&mut self, file: &File, path: &str) -> Result<Option<Applied>> {
        if file.name.is_empty() {
            let target = self.resolver.resolve(path, "");
            return self.fail(target, EntryKind::File, ExplorerError::FileNotValid(file.name.clone()));
        }

        let target = self.resolver.resolve(path, &file.file_name());
        let exists = self.provider.exists(Path::new(&target));

        match self.strategy {
            WriteStrategy::Safe if exists => {
                let error = ExplorerError::FileExist(target.clone().into());
                return self.fail(target, EntryKind::File, error);
            }
            WriteStrategy::Skippable if exists => {
                self.report.push(target, EntryKind::File, WriteStatus::Skipped);
                return Ok(None);
            }
            _ => {}
        }

        if let Err(source) = self.provider.create_file(
            Path::new(&target),
            file.content.as_deref(),
            file.attributes.as_ref(),
        ) {
            // Content may have landed before the attributes failed.
            if !exists && self.provider.exists(Path::new(&target)) {
                self.discard(PathBuf::from(&target), EntryKind::File);
            }
            let error = ExplorerError::WriteError {
                path: target.clone().into(),
                source,
            };
            return self.fail(target, EntryKind::File, error);
        }

        self.report.push(target.as_str(), EntryKind::File, WriteStatus::Written);
        Ok(Some(Applied::File(target.into())))
    }

    fn write_folder(&mut self, folder: &Folder, path: &str) -> Result<Option<Applied>> {
        if folder.name.is_empty() {
            let target = self.resolver.resolve(path, "");
            let error = ExplorerError::DirectoryNotValid(folder.name.clone());
            return self.fail(target, EntryKind::Directory, error);
        }

        let target = self.resolver.resolve(path, &folder.name);
        let created = !self.provider.exists(Path::new(&target));

        if let Err(e) =
            self.provider
                .create_dir(Path::new(&target), true, folder.attributes.as_ref())
        {
            if created && self.provider.exists(Path::new(&target)) {
                self.discard(PathBuf::from(&target), EntryKind::Directory);
            }
            return self.fail(target, EntryKind::Directory, ExplorerError::Io(e));
        }
        self.report.push(target.as_str(), EntryKind::Directory, WriteStatus::Written);

        match self.write_batch(&folder.contents, &target) {
            Ok(children) => {
                if let Some(attributes) = &folder.attributes {
                    self.restore_modified(&target, attributes);
                }
                Ok(Some(Applied::Folder {
                    path: target.into(),
                    created,
                    children,
                }))
            }
            Err(e) => {
                // The children already undid themselves; drop the directory
                // too if it is ours.
                if created {
                    self.discard(target.into(), EntryKind::Directory);
                }
                Err(e)
            }
        }
    }

    /// Writing children bumps a directory's mtime; put the requested one back.
    fn restore_modified(&self, target: &str, attributes: &Attributes) {
        let Some(modified) = attributes.get(attr::MODIFIED) else {
            return;
        };
        let only_modified = Attributes::from([(attr::MODIFIED.to_string(), modified.clone())]);
        if let Err(e) = self.provider.set_attributes(Path::new(target), &only_modified) {
            log::warn!("Failed to restore modification time of {}: {}", target, e);
        }
    }

    /// Removes something a failed entry left on disk.
    fn discard(&self, path: PathBuf, kind: EntryKind) {
        let leftover = match kind {
            EntryKind::File => Applied::File(path),
            EntryKind::Directory => Applied::Folder {
                path,
                created: true,
                children: Vec::new(),
            },
        };
        transaction::rollback(self.provider, &[leftover]);
    }

    fn fail(&mut self, target: String, kind: EntryKind, error: ExplorerError) -> Result<Option<Applied>> {
        if self.strategy.tolerates_failures() {
            self.report.push(target, kind, WriteStatus::Failed(error));
            return Ok(None);
        }
        Err(error)
    }
}

fn ensure_destination(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ExplorerError::PathDidNotExist(path.into()));
    }
    Ok(())
}
