use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use filetime::FileTime;

use super::FileProvider;
use crate::entry::{Attributes, EntryKind, attr};

/// Zero-sized type — delegates to `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileProvider;

impl FileProvider for OsFileProvider {
    #[inline]
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn kind(&self, path: &Path) -> Option<EntryKind> {
        let metadata = fs::metadata(path).ok()?;
        Some(if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        })
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        // symlink_metadata so a link to a directory is unlinked, not emptied.
        if fs::symlink_metadata(path)?.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        }
    }

    fn create_file(
        &self,
        path: &Path,
        content: Option<&str>,
        attributes: Option<&Attributes>,
    ) -> io::Result<()> {
        fs::write(path, content.unwrap_or_default())?;
        if let Some(attributes) = attributes {
            apply_attributes(path, attributes)?;
        }
        Ok(())
    }

    fn create_dir(
        &self,
        path: &Path,
        recursive: bool,
        attributes: Option<&Attributes>,
    ) -> io::Result<()> {
        if recursive {
            fs::create_dir_all(path)?;
        } else {
            fs::create_dir(path)?;
        }
        if let Some(attributes) = attributes {
            apply_attributes(path, attributes)?;
        }
        Ok(())
    }

    #[inline]
    fn set_attributes(&self, path: &Path, attributes: &Attributes) -> io::Result<()> {
        apply_attributes(path, attributes)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn read_attributes(&self, path: &Path) -> io::Result<Attributes> {
        let metadata = fs::metadata(path)?;
        let mut attributes = Attributes::new();

        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        attributes.insert(attr::KIND.to_string(), kind.to_string());
        attributes.insert(attr::SIZE.to_string(), metadata.len().to_string());
        attributes.insert(
            attr::READ_ONLY.to_string(),
            metadata.permissions().readonly().to_string(),
        );

        let since_epoch = metadata
            .modified()
            .ok()
            .and_then(|modified| modified.duration_since(UNIX_EPOCH).ok());
        if let Some(since_epoch) = since_epoch {
            attributes.insert(
                attr::MODIFIED.to_string(),
                since_epoch.as_secs().to_string(),
            );
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = metadata.permissions().mode() & 0o7777;
            attributes.insert(attr::PERMISSIONS.to_string(), format!("{:o}", mode));
        }

        Ok(attributes)
    }

    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn current_dir(&self) -> PathBuf {
        std::env::current_dir().unwrap_or_default()
    }
}

/// Applies the writable attribute keys; the rest are ignored.
///
/// Permission bits win over `read_only` when both are present on unix.
fn apply_attributes(path: &Path, attributes: &Attributes) -> io::Result<()> {
    if let Some(modified) = attributes.get(attr::MODIFIED) {
        let secs: i64 = modified
            .parse()
            .map_err(|_| invalid_attribute(attr::MODIFIED, modified))?;
        filetime::set_file_mtime(path, FileTime::from_unix_time(secs, 0))?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Some(mode) = attributes.get(attr::PERMISSIONS) {
            let bits = u32::from_str_radix(mode, 8)
                .map_err(|_| invalid_attribute(attr::PERMISSIONS, mode))?;
            fs::set_permissions(path, fs::Permissions::from_mode(bits))?;
            return Ok(());
        }
    }

    if let Some(read_only) = attributes.get(attr::READ_ONLY) {
        let read_only: bool = read_only
            .parse()
            .map_err(|_| invalid_attribute(attr::READ_ONLY, read_only))?;
        let mut permissions = fs::metadata(path)?.permissions();
        #[allow(clippy::permissions_set_readonly_false)]
        permissions.set_readonly(read_only);
        fs::set_permissions(path, permissions)?;
    }

    Ok(())
}

fn invalid_attribute(key: &str, value: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("invalid value for attribute '{}': {}", key, value),
    )
}
