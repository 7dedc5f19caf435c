//! Compensating rollback for batch writes.
//!
//! A batch write is not a real transaction: there is no journal. Instead
//! every entry that made it to disk is recorded as an [`Applied`] node, and
//! when a sibling fails the recorded nodes are undone in LIFO order.
//!
//! ## Undo rules
//!
//! - A written file is removed. An overwritten file is removed too; its
//!   previous content is not kept.
//! - A folder this write created is removed with everything below it.
//! - A folder that already existed is kept, and only what this write put
//!   inside it is undone.
//!
//! Undo failures are logged and otherwise ignored. The caller reports the
//! error that triggered the rollback, never a rollback error.

use std::path::{Path, PathBuf};

use crate::fs::FileProvider;

/// Something a write put on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Applied {
    File(PathBuf),
    Folder {
        path: PathBuf,
        /// False when the directory was already there.
        created: bool,
        children: Vec<Applied>,
    },
}

/// Undoes `applied` in reverse order. Returns how many undo steps failed.
pub(crate) fn rollback<P: FileProvider + ?Sized>(provider: &P, applied: &[Applied]) -> usize {
    if applied.is_empty() {
        return 0;
    }

    log::info!("Rolling back {} written entries...", applied.len());
    let failed = undo_all(provider, applied);
    if failed == 0 {
        log::info!("Rollback completed");
    } else {
        log::warn!("Rollback left {} entries behind", failed);
    }
    failed
}

fn undo_all<P: FileProvider + ?Sized>(provider: &P, applied: &[Applied]) -> usize {
    applied
        .iter()
        .rev()
        .map(|node| match node {
            Applied::File(path) | Applied::Folder { path, created: true, .. } => {
                remove(provider, path)
            }
            Applied::Folder {
                created: false,
                children,
                ..
            } => undo_all(provider, children),
        })
        .sum()
}

fn remove<P: FileProvider + ?Sized>(provider: &P, path: &Path) -> usize {
    match provider.remove(path) {
        Ok(()) => {
            log::debug!("Removed: {}", path.display());
            0
        }
        Err(e) => {
            log::warn!("Failed to remove {} during rollback: {}", path.display(), e);
            1
        }
    }
}
