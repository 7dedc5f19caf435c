use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use super::FileProvider;
use crate::entry::{Attributes, EntryKind};

#[derive(Debug, Clone)]
enum Node {
    File {
        content: Option<String>,
        attributes: Option<Attributes>,
    },
    Dir {
        attributes: Option<Attributes>,
    },
}

/// Uses `RefCell` for interior mutability — all methods take `&self`.
///
/// Paths are stored as raw [`PathBuf`] keys with no normalization, so tests
/// must build them the same way the explorer does. Directory listings come
/// back in lexical order.
///
/// Failures are injected per path with [`fail_create`](Self::fail_create),
/// [`fail_remove`](Self::fail_remove) and friends.
pub(crate) struct MemFileProvider {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
    cwd: PathBuf,
    failing_creates: RefCell<HashSet<PathBuf>>,
    failing_removes: RefCell<HashSet<PathBuf>>,
    failing_reads: RefCell<HashSet<PathBuf>>,
    removed: RefCell<Vec<PathBuf>>,
}

impl MemFileProvider {
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(BTreeMap::new()),
            cwd: PathBuf::from("/"),
            failing_creates: RefCell::new(HashSet::new()),
            failing_removes: RefCell::new(HashSet::new()),
            failing_reads: RefCell::new(HashSet::new()),
            removed: RefCell::new(Vec::new()),
        }
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    pub fn insert_file(&self, path: impl AsRef<Path>, content: &str) {
        self.nodes.borrow_mut().insert(
            path.as_ref().to_path_buf(),
            Node::File {
                content: Some(content.to_string()),
                attributes: None,
            },
        );
    }

    pub fn insert_dir(&self, path: impl AsRef<Path>) {
        self.nodes
            .borrow_mut()
            .insert(path.as_ref().to_path_buf(), Node::Dir { attributes: None });
    }

    /// `create_file`/`create_dir` on this path will fail.
    pub fn fail_create(&self, path: impl AsRef<Path>) {
        self.failing_creates
            .borrow_mut()
            .insert(path.as_ref().to_path_buf());
    }

    pub fn fail_remove(&self, path: impl AsRef<Path>) {
        self.failing_removes
            .borrow_mut()
            .insert(path.as_ref().to_path_buf());
    }

    /// Content and attribute reads on this path will fail.
    pub fn fail_read(&self, path: impl AsRef<Path>) {
        self.failing_reads
            .borrow_mut()
            .insert(path.as_ref().to_path_buf());
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.nodes.borrow().get(path.as_ref()) {
            Some(Node::File { content, .. }) => content.clone(),
            _ => None,
        }
    }

    pub fn attributes(&self, path: impl AsRef<Path>) -> Option<Attributes> {
        match self.nodes.borrow().get(path.as_ref()) {
            Some(Node::File { attributes, .. }) | Some(Node::Dir { attributes }) => {
                attributes.clone()
            }
            None => None,
        }
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.nodes.borrow().keys().cloned().collect()
    }

    /// Every path passed to a successful `remove`, in call order.
    pub fn removed(&self) -> Vec<PathBuf> {
        self.removed.borrow().clone()
    }

    fn check(&self, set: &RefCell<HashSet<PathBuf>>, path: &Path) -> io::Result<()> {
        if set.borrow().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("injected failure: {}", path.display()),
            ));
        }
        Ok(())
    }

    fn require_parent(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && parent != Path::new("/") => {
                match self.nodes.borrow().get(parent) {
                    Some(Node::Dir { .. }) => Ok(()),
                    _ => Err(not_found(parent)),
                }
            }
            _ => Ok(()),
        }
    }
}

impl Default for MemFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such file or directory: {}", path.display()),
    )
}

impl FileProvider for MemFileProvider {
    fn exists(&self, path: &Path) -> bool {
        self.nodes.borrow().contains_key(path)
    }

    fn kind(&self, path: &Path) -> Option<EntryKind> {
        match self.nodes.borrow().get(path)? {
            Node::File { .. } => Some(EntryKind::File),
            Node::Dir { .. } => Some(EntryKind::Directory),
        }
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        self.check(&self.failing_removes, path)?;
        let mut nodes = self.nodes.borrow_mut();
        if nodes.remove(path).is_none() {
            return Err(not_found(path));
        }
        nodes.retain(|key, _| !key.starts_with(path));
        self.removed.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn create_file(
        &self,
        path: &Path,
        content: Option<&str>,
        attributes: Option<&Attributes>,
    ) -> io::Result<()> {
        self.check(&self.failing_creates, path)?;
        self.require_parent(path)?;
        if let Some(Node::Dir { .. }) = self.nodes.borrow().get(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("is a directory: {}", path.display()),
            ));
        }
        self.nodes.borrow_mut().insert(
            path.to_path_buf(),
            Node::File {
                content: Some(content.unwrap_or_default().to_string()),
                attributes: attributes.cloned(),
            },
        );
        Ok(())
    }

    fn create_dir(
        &self,
        path: &Path,
        recursive: bool,
        attributes: Option<&Attributes>,
    ) -> io::Result<()> {
        self.check(&self.failing_creates, path)?;
        let mut nodes = self.nodes.borrow_mut();
        match nodes.get(path) {
            Some(Node::Dir { .. }) if recursive => return Ok(()),
            Some(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("already exists: {}", path.display()),
                ));
            }
            None => {}
        }
        if recursive {
            for ancestor in path.ancestors().skip(1) {
                if ancestor.as_os_str().is_empty() || ancestor == Path::new("/") {
                    break;
                }
                nodes
                    .entry(ancestor.to_path_buf())
                    .or_insert(Node::Dir { attributes: None });
            }
        } else {
            drop(nodes);
            self.require_parent(path)?;
            nodes = self.nodes.borrow_mut();
        }
        nodes.insert(
            path.to_path_buf(),
            Node::Dir {
                attributes: attributes.cloned(),
            },
        );
        Ok(())
    }

    fn set_attributes(&self, path: &Path, attributes: &Attributes) -> io::Result<()> {
        self.check(&self.failing_creates, path)?;
        match self.nodes.borrow_mut().get_mut(path) {
            Some(Node::File { attributes: slot, .. }) | Some(Node::Dir { attributes: slot }) => {
                slot.get_or_insert_with(Attributes::new)
                    .extend(attributes.iter().map(|(k, v)| (k.clone(), v.clone())));
                Ok(())
            }
            None => Err(not_found(path)),
        }
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let nodes = self.nodes.borrow();
        let is_root = path == Path::new("/");
        if !is_root && !matches!(nodes.get(path), Some(Node::Dir { .. })) {
            return Err(not_found(path));
        }
        Ok(nodes
            .keys()
            .filter(|key| key.parent() == Some(path))
            .filter_map(|key| key.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    fn read_attributes(&self, path: &Path) -> io::Result<Attributes> {
        self.check(&self.failing_reads, path)?;
        match self.nodes.borrow().get(path) {
            Some(Node::File { attributes, .. }) | Some(Node::Dir { attributes }) => {
                Ok(attributes.clone().unwrap_or_default())
            }
            None => Err(not_found(path)),
        }
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.check(&self.failing_reads, path)?;
        match self.nodes.borrow().get(path) {
            Some(Node::File { content, .. }) => Ok(content.clone().unwrap_or_default()),
            Some(Node::Dir { .. }) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("is a directory: {}", path.display()),
            )),
            None => Err(not_found(path)),
        }
    }

    fn current_dir(&self) -> PathBuf {
        self.cwd.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_file_requires_parent() {
        let fs = MemFileProvider::new();
        assert!(fs.create_file(Path::new("/a/b.txt"), None, None).is_err());

        fs.create_dir(Path::new("/a"), false, None).unwrap();
        fs.create_file(Path::new("/a/b.txt"), Some("x"), None).unwrap();
        assert_eq!(fs.content("/a/b.txt").as_deref(), Some("x"));
    }

    #[test]
    fn test_recursive_create_dir_fills_ancestors() {
        let fs = MemFileProvider::new();
        fs.create_dir(Path::new("/a/b/c"), true, None).unwrap();

        assert_eq!(fs.kind(Path::new("/a")), Some(EntryKind::Directory));
        assert_eq!(fs.kind(Path::new("/a/b")), Some(EntryKind::Directory));
        assert_eq!(fs.list_dir(Path::new("/a")).unwrap(), ["b"]);
    }

    #[test]
    fn test_remove_drops_descendants() {
        let fs = MemFileProvider::new();
        fs.insert_dir("/a");
        fs.insert_file("/a/x.txt", "x");
        fs.insert_file("/ab.txt", "keep");

        fs.remove(Path::new("/a")).unwrap();
        assert_eq!(fs.paths(), [PathBuf::from("/ab.txt")]);
        assert_eq!(fs.removed(), [PathBuf::from("/a")]);
    }

    #[test]
    fn test_injected_failures() {
        let fs = MemFileProvider::new();
        fs.fail_create("/blocked.txt");
        fs.insert_file("/pinned.txt", "");
        fs.fail_remove("/pinned.txt");

        let err = fs
            .create_file(Path::new("/blocked.txt"), None, None)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(fs.remove(Path::new("/pinned.txt")).is_err());
        assert!(fs.exists(Path::new("/pinned.txt")));
    }
}
