//! Per-entry outcomes of a write.

use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::entry::EntryKind;
use crate::error::ExplorerError;

/// What happened to one entry.
#[derive(Debug)]
pub enum WriteStatus {
    Written,
    /// Target existed and the strategy was `Skippable`.
    Skipped,
    /// Only produced under `Skippable`; other strategies fail the call.
    Failed(ExplorerError),
}

#[derive(Debug)]
pub struct EntryOutcome {
    /// Resolved target path.
    pub path: PathBuf,
    pub kind: EntryKind,
    pub status: WriteStatus,
}

impl EntryOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self.status, WriteStatus::Written)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.status, WriteStatus::Skipped)
    }

    pub fn error(&self) -> Option<&ExplorerError> {
        match &self.status {
            WriteStatus::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Outcomes of every entry a write visited, parents before children.
#[derive(Debug, Default)]
pub struct WriteReport {
    outcomes: Vec<EntryOutcome>,
}

impl WriteReport {
    pub(crate) fn push(&mut self, path: impl Into<PathBuf>, kind: EntryKind, status: WriteStatus) {
        let path = path.into();
        match &status {
            WriteStatus::Written => log::debug!("Wrote {}: {}", kind, path.display()),
            WriteStatus::Skipped => log::debug!("Skipped existing {}: {}", kind, path.display()),
            WriteStatus::Failed(e) => log::debug!("Failed {} {}: {}", kind, path.display(), e),
        }
        self.outcomes.push(EntryOutcome { path, kind, status });
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// True when no entry failed.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|o| o.error().is_none())
    }

    pub fn outcomes(&self) -> &[EntryOutcome] {
        &self.outcomes
    }

    pub fn written(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes.iter().filter(|o| o.is_written())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes.iter().filter(|o| o.is_skipped())
    }

    pub fn failures(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes.iter().filter(|o| o.error().is_some())
    }

    pub fn into_outcomes(self) -> Vec<EntryOutcome> {
        self.outcomes
    }

    /// One plain line per outcome, paths relative to `root` with forward
    /// slashes.
    pub fn summary_lines(&self, root: &Path) -> Vec<String> {
        self.outcomes
            .iter()
            .map(|o| {
                let path = display_path(&o.path, root);
                match &o.status {
                    WriteStatus::Written => format!("written  {}", path),
                    WriteStatus::Skipped => format!("skipped  {}", path),
                    WriteStatus::Failed(e) => format!("failed   {} ({})", path, e),
                }
            })
            .collect()
    }

    /// Prints a colored summary to stdout.
    pub fn print_summary(&self, root: &Path) {
        if self.outcomes.is_empty() {
            println!("{}", "Nothing to write".yellow());
            return;
        }

        for o in &self.outcomes {
            let path = display_path(&o.path, root);
            match &o.status {
                WriteStatus::Written => println!("   {} {}", "✓".green(), path.dimmed()),
                WriteStatus::Skipped => println!("   {} {}", "•".yellow(), path.dimmed()),
                WriteStatus::Failed(e) => println!("   {} {} {}", "✗".red(), path, e),
            }
        }

        println!();
        let written = self.written().count();
        let skipped = self.skipped().count();
        let failed = self.failures().count();
        println!(
            "{} written, {} skipped, {} failed",
            written.to_string().green().bold(),
            skipped.to_string().yellow().bold(),
            if failed == 0 {
                failed.to_string().normal()
            } else {
                failed.to_string().red().bold()
            }
        );
    }
}

fn display_path(path: &Path, root: &Path) -> String {
    let relative = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
    relative.to_string_lossy().replace('\\', "/")
}
