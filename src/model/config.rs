use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Terminals at most this many columns wide use the compact banner.
    #[serde(default = "default_compact_max_width")]
    pub compact_max_width: u16,

    #[serde(default)]
    pub force_compact: bool,
}

fn default_version() -> u32 {
    1
}

fn default_compact_max_width() -> u16 {
    96
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            compact_max_width: default_compact_max_width(),
            force_compact: false,
        }
    }
}

impl PortfolioConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        let cfg: PortfolioConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))?;
        if cfg.version != 1 {
            anyhow::bail!(
                "unsupported config version {} in {}",
                cfg.version,
                path.display()
            );
        }
        Ok(cfg)
    }

    pub fn is_compact(&self, width: u16) -> bool {
        self.force_compact || width <= self.compact_max_width
    }
}

#[cfg(test)]
#[path = "../tests/model/config_tests.rs"]
mod tests;
