use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::model::{RegionList, DEFAULT_REGIONS};
use crate::session::FileSessionStore;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub signup: SignupConfig,
}

/// Where the logged-in flag is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session file path. Defaults to `<data_dir>/coordinated/session.toml`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl SessionConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(FileSessionStore::default_path)
    }
}

/// Signup flow settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupConfig {
    /// Regions offered by the region picker, in display order.
    #[serde(default = "default_regions")]
    pub regions: Vec<String>,
}

fn default_regions() -> Vec<String> {
    DEFAULT_REGIONS.iter().map(|r| r.to_string()).collect()
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            regions: default_regions(),
        }
    }
}

impl SignupConfig {
    pub fn region_list(&self) -> RegionList {
        RegionList::new(self.regions.iter().cloned())
    }
}
