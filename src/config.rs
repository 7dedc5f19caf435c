use std::path::PathBuf;

use crate::path::PathResolver;

/// Settings for an [`Explorer`](crate::Explorer).
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory a leading `~` expands to. `None` leaves `~` untouched.
    pub home_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_dir: dirs::home_dir(),
        }
    }
}

impl Config {
    pub fn with_home_dir(mut self, home_dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home_dir.into());
        self
    }

    pub fn without_home_dir(mut self) -> Self {
        self.home_dir = None;
        self
    }

    pub(crate) fn resolver(&self) -> PathResolver {
        PathResolver::new(self.home_dir.clone())
    }
}
