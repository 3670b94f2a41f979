//! Host-facing session: ties an engine to the enabled flag and the host's
//! submit and picker actions.

use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::engine::Engine;
use crate::error::PickError;
use crate::smiley::Smiley;
use crate::state::EnabledFlag;
use crate::surface::TextSurface;

/// One active engine plus the persisted enabled flag
#[derive(Debug, Clone)]
pub struct Session {
    engine: Engine,
    enabled: EnabledFlag,
    state_path: Option<PathBuf>,
}

impl Session {
    /// Session persisting the flag to the platform state file
    pub fn new(engine: Engine, enabled: EnabledFlag) -> Self {
        Self {
            engine,
            enabled,
            state_path: EnabledFlag::state_path(),
        }
    }

    /// Session persisting the flag to `path` (`None` keeps it in memory)
    pub fn with_state_path(engine: Engine, enabled: EnabledFlag, path: Option<PathBuf>) -> Self {
        Self {
            engine,
            enabled,
            state_path: path,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.enabled
    }

    /// Change and persist the enabled flag
    pub fn set_enabled(&mut self, enabled: bool) -> Result<()> {
        self.enabled.enabled = enabled;
        if let Some(path) = &self.state_path {
            self.enabled.save_to(path)?;
        }
        debug!("Smilies {}", self.enabled.describe());
        Ok(())
    }

    /// Flip the enabled flag, returning the new value
    pub fn toggle(&mut self) -> Result<bool> {
        self.set_enabled(!self.is_enabled())?;
        Ok(self.is_enabled())
    }

    /// Picker menu entries in set order
    pub fn entries(&self) -> impl Iterator<Item = &Smiley> {
        self.engine.set().iter()
    }

    /// Rewrite the surface's smilies, then run the host's own submit action.
    /// The host action always runs, and always after the rewrite.
    pub fn submit<S, F, T>(&self, surface: &mut S, host_submit: F) -> T
    where
        S: TextSurface + ?Sized,
        F: FnOnce(&mut S) -> T,
    {
        if self.is_enabled() {
            let rendered = self.engine.render(&surface.text());
            surface.set_text(&rendered);
        }
        host_submit(surface)
    }

    /// Picker click: insert `token` padded with spaces at the cursor.
    /// Does nothing while disabled.
    pub fn pick<S: TextSurface + ?Sized>(
        &self,
        surface: &mut S,
        token: &str,
    ) -> Result<Option<usize>, PickError> {
        if !self.is_enabled() {
            return Ok(None);
        }
        if !self.engine.set().contains(token) {
            return Err(PickError::UnknownToken(token.to_string()));
        }

        let snippet = format!(" {} ", token);
        let cursor = self.engine.insert_at_cursor(surface, &snippet)?;
        Ok(Some(cursor))
    }
}
