//! File system capability consumed by the explorer.
//!
//! Everything the explorer does to disk goes through [`FileProvider`]. The
//! crate ships [`OsFileProvider`], backed by `std::fs`; tests swap in fakes.
//!
//! ```no_run
//! use fs_explorer::fs::{FileProvider, OsFileProvider};
//! use std::path::Path;
//!
//! let provider = OsFileProvider;
//! if provider.exists(Path::new("Cargo.toml")) {
//!     let names = provider.list_dir(Path::new(".")).unwrap_or_default();
//!     println!("{names:?}");
//! }
//! ```

#[cfg(test)]
mod mem;
mod provider;
mod system;

#[cfg(test)]
pub(crate) use mem::MemFileProvider;
pub use provider::FileProvider;
pub use system::OsFileProvider;
