//! Session flag persistence.
//!
//! The only durable state is one boolean stored under [`LOGGED_IN_KEY`].
//! Coordinators receive a [`SessionStore`] instead of reaching for a global
//! settings object, so tests can swap in [`MemorySessionStore`].

mod file;
mod memory;

use std::path::PathBuf;
use thiserror::Error;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

/// Key the logged-in flag is stored under.
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

/// Errors that can occur when reading or writing the session file.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read session file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize session state: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Failed to write session file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read/write access to the persisted logged-in flag.
///
/// Access is last-write-wins; only one coordinator tree uses a store at a time.
pub trait SessionStore {
    /// Current value of the flag. An unset flag reads as `false`.
    fn is_logged_in(&self) -> Result<bool, SessionError>;

    /// Persist a new value for the flag.
    fn set_logged_in(&mut self, value: bool) -> Result<(), SessionError>;

    /// Forget the session.
    fn clear(&mut self) -> Result<(), SessionError> {
        self.set_logged_in(false)
    }
}
