//! Path joining and file-name helpers.
//!
//! Paths are handled as `/`-separated strings here and only turned into
//! [`Path`](std::path::Path)s at the provider boundary.

use std::path::PathBuf;

pub const SEPARATOR: char = '/';

/// Joins a base path and a suffix into a target path.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    home: Option<String>,
}

impl PathResolver {
    pub fn new(home: Option<PathBuf>) -> Self {
        Self {
            home: home.map(|h| h.to_string_lossy().into_owned()),
        }
    }

    /// Resolves `suffix` against `base`.
    ///
    /// - A leading `~` in `base` becomes the home directory.
    /// - Trailing separators of `base` and surrounding separators of `suffix`
    ///   are dropped, then the two are joined with a single `/`.
    /// - An empty `suffix` yields the trimmed base.
    ///
    /// No I/O happens here; the result may not exist.
    pub fn resolve(&self, base: &str, suffix: &str) -> String {
        let base = self.expand_home(base);
        let trimmed = base.trim_end_matches(SEPARATOR);
        let suffix = suffix.trim_matches(SEPARATOR);

        if suffix.is_empty() {
            if trimmed.is_empty() && base.starts_with(SEPARATOR) {
                return SEPARATOR.to_string();
            }
            return trimmed.to_string();
        }

        format!("{}{}{}", trimmed, SEPARATOR, suffix)
    }

    fn expand_home(&self, path: &str) -> String {
        let Some(home) = &self.home else {
            return path.to_string();
        };

        match path.strip_prefix('~') {
            Some(rest) if rest.is_empty() || rest.starts_with(SEPARATOR) => {
                format!("{}{}", home, rest)
            }
            _ => path.to_string(),
        }
    }
}

/// Strips the extension: everything from the last `.` on.
///
/// `"explorer.com.swift"` gives `"explorer.com"`; a name without a dot is
/// returned unchanged.
pub fn without_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => name,
    }
}

/// Splits a file name into base name and extension at the last `.`.
///
/// Dot files such as `.bashrc` and names ending in a dot keep their full
/// name and get no extension, so `File::file_name` gives the name back.
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(0) | None => (name, None),
        Some(dot) if dot + 1 == name.len() => (name, None),
        Some(dot) => (&name[..dot], Some(&name[dot + 1..])),
    }
}
