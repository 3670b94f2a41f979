//! Configuration management for smiley

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::builtin;
use crate::engine::Engine;
use crate::error::ConfigError;
use crate::selection::SelectionQuirk;
use crate::smiley::{Alias, AliasMap, Smiley, SmileySet};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the active smiley set (built-in or from `sets`)
    pub smiley_set: String,
    pub engine: EngineConfig,
    /// User-defined sets; a name here shadows the built-in set of the same name
    pub sets: BTreeMap<String, SetConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub selection_quirk: SelectionQuirk,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetConfig {
    pub tokens: Vec<Smiley>,
    pub aliases: Vec<Alias>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            smiley_set: builtin::DEFAULT_SET.to_string(),
            engine: EngineConfig::default(),
            sets: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Get the platform-specific config file path
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "smiley")
            .map(|proj_dirs| proj_dirs.config_dir().join("smiley.toml"))
    }

    /// Load configuration from file, falling back to defaults if missing
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                info!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        // Check config file permissions (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = std::fs::metadata(path)?;
            if metadata.permissions().mode() & 0o002 != 0 {
                anyhow::bail!(
                    "Config file {} is world-writable (insecure permissions)",
                    path.display()
                );
            }
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        info!(
            "Loaded config from {} (set: {})",
            path.display(),
            config.smiley_set
        );
        Ok(config)
    }

    /// Built-in and configured set names, without duplicates
    pub fn set_names(&self) -> Vec<String> {
        let mut names: Vec<String> = builtin::names().map(str::to_string).collect();
        names.extend(
            self.sets
                .keys()
                .filter(|name| !builtin::exists(name))
                .cloned(),
        );
        names
    }

    /// Resolve and validate a set by name
    pub fn load_set(&self, name: &str) -> Result<(SmileySet, AliasMap), ConfigError> {
        let Some(custom) = self.sets.get(name) else {
            return builtin::load(name);
        };

        let set = SmileySet::new(custom.tokens.clone())?;
        let aliases = AliasMap::new(custom.aliases.clone())?;
        aliases.validate(&set)?;
        Ok((set, aliases))
    }

    /// Engine for the configured `smiley_set`
    pub fn build_engine(&self) -> Result<Engine, ConfigError> {
        self.build_engine_for(&self.smiley_set)
    }

    pub fn build_engine_for(&self, name: &str) -> Result<Engine, ConfigError> {
        let (set, aliases) = self.load_set(name)?;
        Ok(Engine::new(set, aliases)?.with_quirk(self.engine.selection_quirk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(file)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.smiley_set, "phpbb");
        assert_eq!(
            config.engine.selection_quirk,
            SelectionQuirk::LegacyEndSentinel
        );
        assert!(config.sets.is_empty());
    }

    #[test]
    fn test_load_selects_builtin_set() -> Result<()> {
        let file = write_config("smiley_set = \"skype\"\n")?;

        let config = Config::load_from(file.path())?;
        assert_eq!(config.smiley_set, "skype");

        let engine = config.build_engine()?;
        assert_eq!(engine.set().len(), 85);
        assert!(engine.aliases().is_empty());
        Ok(())
    }

    #[test]
    fn test_load_custom_set() -> Result<()> {
        let file = write_config(
            "smiley_set = \"mine\"\n\
\n\
[engine]\n\
selection_quirk = \"None\"\n\
\n\
[sets.mine]\n\
tokens = [\n\
  { token = \":smile:\", url = \"url1\" },\n\
  { token = \":sad:\", url = \"url2\" },\n\
]\n\
aliases = [{ alias = \":-)\", token = \":smile:\" }]\n",
        )?;

        let config = Config::load_from(file.path())?;
        let engine = config.build_engine()?;
        assert_eq!(engine.quirk(), SelectionQuirk::None);
        assert_eq!(engine.set().len(), 2);
        assert_eq!(
            engine.render(":-) :sad:"),
            "<img alt=\"\" src=\"url1\"> <img alt=\"sad\" src=\"url2\">"
        );
        Ok(())
    }

    #[test]
    fn test_custom_set_shadows_builtin() -> Result<()> {
        let file = write_config(
            "[[sets.phpbb.tokens]]\n\
token = \":only:\"\n\
url = \"only.gif\"\n",
        )?;

        let config = Config::load_from(file.path())?;
        let engine = config.build_engine()?;
        assert_eq!(engine.set().len(), 1);
        assert_eq!(config.set_names(), vec!["phpbb", "skype"]);
        Ok(())
    }

    #[test]
    fn test_dangling_alias_fails_fast() -> Result<()> {
        let file = write_config(
            "smiley_set = \"broken\"\n\
[sets.broken]\n\
tokens = [{ token = \":smile:\", url = \"u\" }]\n\
aliases = [{ alias = \"<3\", token = \":heart:\" }]\n",
        )?;

        let config = Config::load_from(file.path())?;
        assert_eq!(
            config.build_engine().unwrap_err(),
            ConfigError::DanglingAlias {
                alias: "<3".into(),
                token: ":heart:".into(),
            }
        );
        Ok(())
    }

    #[test]
    fn test_unknown_set_rejected() {
        let config = Config {
            smiley_set: "msn".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.build_engine().unwrap_err(),
            ConfigError::UnknownSet("msn".into())
        );
    }

    #[test]
    fn test_set_names_include_custom() {
        let mut config = Config::default();
        config
            .sets
            .insert("mine".to_string(), SetConfig::default());
        assert_eq!(config.set_names(), vec!["phpbb", "skype", "mine"]);
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"invalid toml [[[syntax").unwrap();

        let result = Config::load_from(file.path());
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_world_writable_config_rejected() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let file = write_config("smiley_set = \"phpbb\"\n")?;
        std::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(0o666))?;

        assert!(Config::load_from(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_config_path_ends_with_file_name() {
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("smiley"));
            assert!(p.to_string_lossy().ends_with("smiley.toml"));
        }
    }

    #[test]
    fn test_config_serialization_roundtrip() -> Result<()> {
        let config = Config {
            smiley_set: "skype".to_string(),
            ..Default::default()
        };

        let toml_str = toml::to_string(&config)?;
        assert!(toml_str.contains("skype"));

        let parsed: Config = toml::from_str(&toml_str)?;
        assert_eq!(parsed.smiley_set, "skype");
        Ok(())
    }
}
