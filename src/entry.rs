//! In-memory model of a file tree.
//!
//! An [`Entry`] is either a [`File`] or a [`Folder`]. Folders own their
//! children, so a tree built from these types can never contain a cycle.

use std::collections::BTreeMap;
use std::fmt;

/// Opaque per-entry metadata.
///
/// Keys the OS provider understands are listed in [`attr`]; anything else is
/// carried along and ignored on write.
pub type Attributes = BTreeMap<String, String>;

/// Well-known attribute keys.
pub mod attr {
    /// Unix mode bits, octal (`"644"`). Applied on write.
    pub const PERMISSIONS: &str = "permissions";
    /// `"true"` or `"false"`. Applied on write.
    pub const READ_ONLY: &str = "read_only";
    /// Modification time in whole seconds since the unix epoch. Applied on write.
    pub const MODIFIED: &str = "modified";
    /// Size in bytes. Read only.
    pub const SIZE: &str = "size";
    /// `"file"` or `"directory"`. Read only.
    pub const KIND: &str = "kind";
}

/// What a path on disk turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => f.write_str("file"),
            EntryKind::Directory => f.write_str("directory"),
        }
    }
}

/// A text file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct File {
    pub name: String,
    /// Extension without the leading dot.
    pub extension: Option<String>,
    /// Text content. `None` writes an empty file; on read it means the content
    /// could not be decoded or read.
    pub content: Option<String>,
    pub attributes: Option<Attributes>,
}

impl File {
    pub fn new(name: impl Into<String>, extension: Option<&str>, content: Option<&str>) -> Self {
        Self {
            name: name.into(),
            extension: extension.map(str::to_string),
            content: content.map(str::to_string),
            attributes: None,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Name on disk: `name.extension`, or just `name` when there is no
    /// (or an empty) extension.
    pub fn file_name(&self) -> String {
        match self.extension.as_deref() {
            Some(ext) if !ext.is_empty() => format!("{}.{}", self.name, ext),
            _ => self.name.clone(),
        }
    }
}

/// A directory and its children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Folder {
    pub name: String,
    pub contents: Vec<Entry>,
    pub attributes: Option<Attributes>,
}

impl Folder {
    pub fn new(name: impl Into<String>, contents: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            contents,
            attributes: None,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn files(&self) -> impl Iterator<Item = &File> {
        self.contents.iter().filter_map(Entry::as_file)
    }

    pub fn folders(&self) -> impl Iterator<Item = &Folder> {
        self.contents.iter().filter_map(Entry::as_folder)
    }
}

/// A node of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    File(File),
    Folder(Folder),
}

impl Entry {
    /// Name the entry has on disk.
    pub fn file_name(&self) -> String {
        match self {
            Entry::File(file) => file.file_name(),
            Entry::Folder(folder) => folder.name.clone(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::File(_) => EntryKind::File,
            Entry::Folder(_) => EntryKind::Directory,
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Entry::File(file) => file.attributes.as_ref(),
            Entry::Folder(folder) => folder.attributes.as_ref(),
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Entry::File(file) => Some(file),
            Entry::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Entry::Folder(folder) => Some(folder),
            Entry::File(_) => None,
        }
    }
}

impl From<File> for Entry {
    fn from(file: File) -> Self {
        Entry::File(file)
    }
}

impl From<Folder> for Entry {
    fn from(folder: Folder) -> Self {
        Entry::Folder(folder)
    }
}
