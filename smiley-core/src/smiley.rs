//! Smiley tokens, smiley sets and alias maps

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ConfigError;

/// A canonical smiley marker mapped to an image resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Smiley {
    pub token: String,
    pub url: String,
}

impl Smiley {
    pub fn new(token: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            url: url.into(),
        }
    }

    /// Token with its leading and trailing delimiter stripped (`:smile:` -> `smile`)
    pub fn name(&self) -> &str {
        let mut chars = self.token.chars();
        match (chars.next(), chars.next_back()) {
            (Some(_), Some(_)) => chars.as_str(),
            _ => "",
        }
    }
}

/// A shorthand pattern resolving to a token of the same set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub alias: String,
    pub token: String,
}

impl Alias {
    pub fn new(alias: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            token: token.into(),
        }
    }
}

/// Ordered smiley tokens. Declaration order is the picker order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmileySet {
    smilies: Vec<Smiley>,
}

impl SmileySet {
    /// Build a set, rejecting empty and repeated tokens
    pub fn new(smilies: Vec<Smiley>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for smiley in &smilies {
            if smiley.token.is_empty() {
                return Err(ConfigError::EmptyToken);
            }
            if !seen.insert(smiley.token.as_str()) {
                return Err(ConfigError::DuplicateToken(smiley.token.clone()));
            }
        }
        Ok(Self { smilies })
    }

    pub fn get(&self, token: &str) -> Option<&Smiley> {
        self.smilies.iter().find(|s| s.token == token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Smiley> {
        self.smilies.iter()
    }

    pub fn len(&self) -> usize {
        self.smilies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.smilies.is_empty()
    }
}

/// Ordered alias to token mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    aliases: Vec<Alias>,
}

impl AliasMap {
    /// Build an alias map, rejecting empty and repeated aliases.
    /// Targets are checked against a set by [`AliasMap::validate`].
    pub fn new(aliases: Vec<Alias>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for entry in &aliases {
            if entry.alias.is_empty() {
                return Err(ConfigError::EmptyAlias(entry.token.clone()));
            }
            if !seen.insert(entry.alias.as_str()) {
                return Err(ConfigError::DuplicateAlias(entry.alias.clone()));
            }
        }
        Ok(Self { aliases })
    }

    /// Fail if any alias points at a token missing from `set`
    pub fn validate(&self, set: &SmileySet) -> Result<(), ConfigError> {
        match self.aliases.iter().find(|a| !set.contains(&a.token)) {
            Some(dangling) => Err(ConfigError::DanglingAlias {
                alias: dangling.alias.clone(),
                token: dangling.token.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Token an alias stands for
    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|a| a.alias == alias)
            .map(|a| a.token.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alias> {
        self.aliases.iter()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
