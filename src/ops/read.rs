//! Scanning a directory into entries.

use std::path::Path;

use crate::entry::{Attributes, Entry, EntryKind, File, Folder};
use crate::error::{ExplorerError, Result};
use crate::fs::FileProvider;
use crate::path::{PathResolver, split_extension};

pub(crate) struct TreeReader<'a, P: FileProvider + ?Sized> {
    provider: &'a P,
    resolver: &'a PathResolver,
    include_folders: bool,
    recursive: bool,
}

impl<'a, P: FileProvider + ?Sized> TreeReader<'a, P> {
    pub fn new(
        provider: &'a P,
        resolver: &'a PathResolver,
        include_folders: bool,
        recursive: bool,
    ) -> Self {
        Self {
            provider,
            resolver,
            include_folders,
            recursive,
        }
    }

    /// Entries directly inside `path`, in listing order.
    ///
    /// Any failure, including one deep inside a recursive scan, aborts the
    /// whole read.
    pub fn read(&self, path: &str) -> Result<Vec<Entry>> {
        let target = self.resolver.resolve(path, "");

        let names = self.provider.list_dir(Path::new(&target)).map_err(|e| {
            log::debug!("Cannot list {}: {}", target, e);
            ExplorerError::DirectoryNotValid(target.clone())
        })?;

        let mut entries = Vec::with_capacity(names.len());
        for name in names {
            if let Some(entry) = self.read_entry(&target, &name)? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    fn read_entry(&self, dir: &str, name: &str) -> Result<Option<Entry>> {
        let path = self.resolver.resolve(dir, name);
        let kind = self
            .provider
            .kind(Path::new(&path))
            .ok_or_else(|| ExplorerError::PathDidNotExist(path.clone().into()))?;

        match kind {
            EntryKind::File => {
                let (base, extension) = split_extension(name);
                Ok(Some(Entry::File(File {
                    name: base.to_string(),
                    extension: extension.map(str::to_string),
                    content: self.content(&path),
                    attributes: self.attributes(&path),
                })))
            }
            EntryKind::Directory if !self.include_folders => Ok(None),
            EntryKind::Directory => {
                let contents = if self.recursive {
                    self.read(&path)?
                } else {
                    Vec::new()
                };
                Ok(Some(Entry::Folder(Folder {
                    name: name.to_string(),
                    contents,
                    attributes: self.attributes(&path),
                })))
            }
        }
    }

    // Best-effort: unreadable attributes leave the entry without them rather
    // than failing the scan. The error is intentionally dropped.
    fn attributes(&self, path: &str) -> Option<Attributes> {
        self.provider
            .read_attributes(Path::new(path))
            .inspect_err(|e| log::debug!("No attributes for {}: {}", path, e))
            .ok()
    }

    // Best-effort, same as attributes. Binary or unreadable files come back
    // with no content.
    fn content(&self, path: &str) -> Option<String> {
        self.provider
            .read_to_string(Path::new(path))
            .inspect_err(|e| log::debug!("No text content for {}: {}", path, e))
            .ok()
    }
}
