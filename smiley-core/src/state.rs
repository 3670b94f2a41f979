//! Persisted enabled flag

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Whether smiley substitution is switched on. Survives restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnabledFlag {
    pub enabled: bool,
}

impl Default for EnabledFlag {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl EnabledFlag {
    /// Platform-specific state file path
    pub fn state_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "smiley")
            .map(|proj_dirs| proj_dirs.data_dir().join("state.toml"))
    }

    /// Load the flag, defaulting to enabled when nothing usable was saved
    pub fn load() -> Self {
        match Self::state_path() {
            Some(path) if path.exists() => Self::load_or_default(&path),
            _ => Self::default(),
        }
    }

    /// Load from `path`; an unreadable or malformed file yields the default
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            warn!("Ignoring state file: {:#}", e);
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read state file: {}", path.display()))?;
        let flag: EnabledFlag = toml::from_str(&content)
            .with_context(|| format!("Failed to parse state file: {}", path.display()))?;
        info!("Smilies {} (from {})", flag.describe(), path.display());
        Ok(flag)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create state directory: {}", parent.display()))?;
        }
        let content = toml::to_string(self).context("Failed to serialize state")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write state file: {}", path.display()))
    }

    pub fn describe(&self) -> &'static str {
        if self.enabled {
            "enabled"
        } else {
            "disabled"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_default_enabled() {
        assert!(EnabledFlag::default().enabled);
    }

    #[test]
    fn test_save_and_reload() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("state.toml");

        EnabledFlag { enabled: false }.save_to(&path)?;
        assert!(!EnabledFlag::load_from(&path)?.enabled);

        EnabledFlag { enabled: true }.save_to(&path)?;
        assert!(EnabledFlag::load_from(&path)?.enabled);

        Ok(())
    }

    #[test]
    fn test_empty_state_file_defaults_to_enabled() -> Result<()> {
        let file = NamedTempFile::new()?;
        assert!(EnabledFlag::load_from(file.path())?.enabled);
        Ok(())
    }

    #[test]
    fn test_invalid_state_file_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"enabled = [[[").unwrap();
        assert!(EnabledFlag::load_from(file.path()).is_err());
    }

    #[test]
    fn test_wrong_type_falls_back_to_enabled() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"enabled = \"yes\"\n")?;
        file.flush()?;

        assert!(EnabledFlag::load_from(file.path()).is_err());
        assert!(EnabledFlag::load_or_default(file.path()).enabled);
        Ok(())
    }

    #[test]
    fn test_corrupt_state_can_be_overwritten() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"enabled = [[[")?;
        file.flush()?;

        let mut flag = EnabledFlag::load_or_default(file.path());
        flag.enabled = false;
        flag.save_to(file.path())?;
        assert!(!EnabledFlag::load_from(file.path())?.enabled);
        Ok(())
    }

    #[test]
    fn test_state_path_returns_some() {
        if let Some(p) = EnabledFlag::state_path() {
            assert!(p.to_string_lossy().contains("smiley"));
            assert!(p.to_string_lossy().ends_with("state.toml"));
        }
    }
}
