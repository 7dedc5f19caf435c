mod delete;
mod operation;
mod read;
mod report;
mod transaction;
mod write;

pub(crate) use delete::delete_entry;
pub use operation::{
    BatchFileOperation, BatchFolderOperation, Operation, SingleFileOperation,
    SingleFolderOperation, WriteStrategy,
};
pub(crate) use read::TreeReader;
pub use report::{EntryOutcome, WriteReport, WriteStatus};
pub(crate) use write::TreeWriter;
