use crate::entry::{Entry, File, Folder};

/// How a write treats a target that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WriteStrategy {
    /// Fail the operation if a target file exists.
    #[default]
    Safe,
    /// Leave existing targets alone and report them as skipped. Failures are
    /// recorded per entry instead of failing the call.
    Skippable,
    /// Replace whatever is there.
    Overwrite,
}

impl WriteStrategy {
    /// Whether failures are recorded per entry rather than aborting (and
    /// rolling back) the batch.
    pub fn tolerates_failures(self) -> bool {
        self == WriteStrategy::Skippable
    }
}

/// An entry (or entries) paired with the directory it lives in.
///
/// Request object for the single and batch entry points; it is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation<T> {
    pub target: T,
    pub path: String,
}

impl<T> Operation<T> {
    pub fn new(target: T, path: impl Into<String>) -> Self {
        Self {
            target,
            path: path.into(),
        }
    }
}

pub type SingleFileOperation = Operation<File>;
pub type BatchFileOperation = Operation<Vec<File>>;
pub type SingleFolderOperation = Operation<Folder>;
pub type BatchFolderOperation = Operation<Vec<Folder>>;

impl<T: Clone + Into<Entry>> Operation<Vec<T>> {
    pub(crate) fn entries(&self) -> Vec<Entry> {
        self.target.iter().cloned().map(Into::into).collect()
    }
}
