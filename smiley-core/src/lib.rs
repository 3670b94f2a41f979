//! Smiley Core - Emoticon substitution engine
//!
//! This crate contains the host-independent logic for smiley:
//! - Smiley sets, alias maps and the built-in tables
//! - Token/alias substitution into image tags
//! - Cursor insertion on a text surface
//! - Configuration and the persisted enabled flag

pub mod builtin;
pub mod config;
pub mod engine;
pub mod error;
pub mod selection;
pub mod session;
pub mod smiley;
pub mod state;
pub mod surface;

// Re-export commonly used types
pub use config::Config;
pub use engine::Engine;
pub use error::{ConfigError, PickError, SelectionError};
pub use selection::{Selection, SelectionQuirk};
pub use session::Session;
pub use smiley::{Alias, AliasMap, Smiley, SmileySet};
pub use state::EnabledFlag;
pub use surface::{TextBuffer, TextSurface};

#[cfg(feature = "clipboard")]
pub use surface::ClipboardSurface;
