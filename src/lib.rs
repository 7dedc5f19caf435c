//! Typed file tree operations.
//!
//! `fs-explorer` reads a directory into an in-memory tree of [`File`]s and
//! [`Folder`]s and writes such trees back to disk, resolving conflicts with a
//! [`WriteStrategy`] and rolling back partially written batches.
//!
//! ```no_run
//! use fs_explorer::{Entry, Explorer, File, Folder, WriteStrategy};
//!
//! # fn example() -> fs_explorer::Result<()> {
//! let explorer = Explorer::new();
//!
//! let project = Folder::new(
//!     "hello",
//!     vec![
//!         File::new("README", Some("md"), Some("# hello")).into(),
//!         Folder::new("src", vec![File::new("main", Some("rs"), Some("fn main() {}")).into()])
//!             .into(),
//!     ],
//! );
//!
//! // Either everything lands on disk or nothing does.
//! let report = explorer.write(&[Entry::Folder(project)], "~/projects", WriteStrategy::Safe)?;
//! println!("{} entries written", report.written().count());
//!
//! let tree = explorer.read("~/projects/hello", true, true)?;
//! assert_eq!(tree.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod entry;
pub mod error;
mod explorer;
pub mod fs;
pub mod ops;
pub mod path;

pub use config::Config;
pub use entry::{Attributes, Entry, EntryKind, File, Folder};
pub use error::*;
pub use explorer::Explorer;
pub use ops::{
    BatchFileOperation, BatchFolderOperation, EntryOutcome, Operation, SingleFileOperation,
    SingleFolderOperation, WriteReport, WriteStatus, WriteStrategy,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
