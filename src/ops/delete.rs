use std::io;
use std::path::Path;

use crate::entry::Entry;
use crate::fs::FileProvider;
use crate::path::PathResolver;

/// Removes `entry` from the directory `path`.
///
/// The provider's error is returned untranslated, so a missing target shows
/// up as `io::ErrorKind::NotFound`.
pub(crate) fn delete_entry<P: FileProvider + ?Sized>(
    provider: &P,
    resolver: &PathResolver,
    entry: &Entry,
    path: &str,
) -> io::Result<()> {
    let target = resolver.resolve(path, &entry.file_name());
    log::debug!("Deleting {}: {}", entry.kind(), target);
    provider.remove(Path::new(&target))
}
