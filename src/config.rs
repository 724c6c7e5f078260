use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::descriptor::{CommandLineBuilder, LineEndingStyle};
use crate::executable::Executables;

/// User settings from `<config dir>/ssh-uri/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// Overrides the detected SSH client.
    pub ssh_path: Option<PathBuf>,
    /// Overrides the mosh executable name.
    pub mosh_path: Option<PathBuf>,
    /// Applied to every decoded descriptor.
    #[serde(default)]
    pub line_ending: LineEndingStyle,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join("ssh-uri").join("config.toml"))
    }

    /// Detected executables with this file's overrides applied.
    #[must_use]
    pub fn executables(&self) -> Executables {
        Executables::detect().with_overrides(self.ssh_path.as_deref(), self.mosh_path.as_deref())
    }

    #[must_use]
    pub fn command_line_builder(&self) -> CommandLineBuilder {
        CommandLineBuilder::new(self.executables())
    }
}
