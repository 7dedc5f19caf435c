//! Error types for fs-explorer.
//!
//! All read and write operations return `Result<T>` which aliases
//! `Result<T, ExplorerError>`. Deletion is the exception: it hands back the
//! provider's `std::io::Error` untouched.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from explorer operations.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Destination path is empty, or a probed path does not exist.
    #[error("{} did not exist", .0.display())]
    PathDidNotExist(PathBuf),

    /// Target file already exists and the strategy is `Safe`.
    #[error("{} is already exist", .0.display())]
    FileExist(PathBuf),

    /// File entry has no name.
    #[error("{0} is not valid")]
    FileNotValid(String),

    /// Folder entry has no name, or a directory could not be listed.
    #[error("{0} is not valid")]
    DirectoryNotValid(String),

    /// The provider failed to create a file.
    #[error("unable to write file at {}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Every failure of a batch that was rolled back.
    #[error("{}", JoinedErrors(.0))]
    MultipleErrors(Vec<ExplorerError>),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ExplorerError {
    /// Number of leaf errors, looking through nested `MultipleErrors`.
    pub fn leaf_count(&self) -> usize {
        match self {
            ExplorerError::MultipleErrors(errors) => errors.iter().map(Self::leaf_count).sum(),
            _ => 1,
        }
    }
}

struct JoinedErrors<'a>(&'a [ExplorerError]);

impl fmt::Display for JoinedErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error(s): ", self.0.len())?;
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

/// Result type alias for explorer operations.
pub type Result<T> = std::result::Result<T, ExplorerError>;
