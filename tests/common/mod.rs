//! Shared helpers for fs-explorer integration tests.

use fs_explorer::fs::{FileProvider, OsFileProvider};
use fs_explorer::{Attributes, Config, EntryKind, Explorer, File};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(unused)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Explorer over the real file system with `~` pointing into `home`.
#[allow(unused)]
pub fn explorer_in(home: &Path) -> Explorer {
    init_logging();
    Explorer::with_config(OsFileProvider, Config::default().with_home_dir(home))
}

#[allow(unused)]
pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[allow(unused)]
pub fn text(name: &str, content: &str) -> File {
    File::new(name, Some("txt"), Some(content))
}

/// Names directly inside `dir`, sorted.
#[allow(unused)]
pub fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Creates `root/` with a file and an empty subfolder.
#[allow(unused)]
pub fn create_sample_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("explorer.swift"), "import Foundation").unwrap();
    std::fs::create_dir(temp.path().join("Sources")).unwrap();
    temp
}

/// Delegates to the OS but fails `create_file`/`create_dir` for chosen file
/// names and `remove` for chosen paths.
#[allow(unused)]
#[derive(Default)]
pub struct FaultyProvider {
    inner: OsFileProvider,
    failing_names: HashSet<String>,
    failing_removes: HashSet<PathBuf>,
}

#[allow(unused)]
impl FaultyProvider {
    pub fn failing_on(names: &[&str]) -> Self {
        Self {
            failing_names: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failing_remove(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing_removes.insert(path.into());
        self
    }

    fn check_create(&self, path: &Path) -> io::Result<()> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.failing_names.contains(&name) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("refusing to create {}", path.display()),
            ));
        }
        Ok(())
    }
}

impl FileProvider for FaultyProvider {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn kind(&self, path: &Path) -> Option<EntryKind> {
        self.inner.kind(path)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        if self.failing_removes.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "refusing to remove"));
        }
        self.inner.remove(path)
    }

    fn create_file(
        &self,
        path: &Path,
        content: Option<&str>,
        attributes: Option<&Attributes>,
    ) -> io::Result<()> {
        self.check_create(path)?;
        self.inner.create_file(path, content, attributes)
    }

    fn create_dir(
        &self,
        path: &Path,
        recursive: bool,
        attributes: Option<&Attributes>,
    ) -> io::Result<()> {
        self.check_create(path)?;
        self.inner.create_dir(path, recursive, attributes)
    }

    fn set_attributes(&self, path: &Path, attributes: &Attributes) -> io::Result<()> {
        self.inner.set_attributes(path, attributes)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        self.inner.list_dir(path)
    }

    fn read_attributes(&self, path: &Path) -> io::Result<Attributes> {
        self.inner.read_attributes(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.inner.read_to_string(path)
    }

    fn current_dir(&self) -> PathBuf {
        self.inner.current_dir()
    }
}

#[allow(unused)]
pub fn faulty_explorer(provider: FaultyProvider) -> Explorer<FaultyProvider> {
    init_logging();
    Explorer::with_provider(provider)
}
