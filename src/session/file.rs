use std::fs;
use std::path::{Path, PathBuf};

use super::{SessionError, SessionStore, LOGGED_IN_KEY};

/// Session store backed by a small TOML key-value file.
///
/// The flag is kept as `isLoggedIn = <bool>` at the top level. Other keys in
/// the file are left untouched on write.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `<data_dir>/coordinated/session.toml`.
    ///
    /// Falls back to the current directory if no data dir is available.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("coordinated").join("session.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<toml::Table, SessionError> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| SessionError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| SessionError::ParseError {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl SessionStore for FileSessionStore {
    fn is_logged_in(&self) -> Result<bool, SessionError> {
        let table = self.read_table()?;
        match table.get(LOGGED_IN_KEY) {
            None => Ok(false),
            Some(toml::Value::Boolean(value)) => Ok(*value),
            Some(other) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Session key '{}' is not a boolean ({}), treating as logged out",
                    LOGGED_IN_KEY,
                    other.type_str()
                );
                Ok(false)
            }
        }
    }

    fn set_logged_in(&mut self, value: bool) -> Result<(), SessionError> {
        let mut table = self.read_table()?;
        table.insert(LOGGED_IN_KEY.to_string(), toml::Value::Boolean(value));
        let content = toml::to_string(&table)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;
        }

        fs::write(&self.path, content).map_err(|e| SessionError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %self.path.display(), value, "Session flag written");
        Ok(())
    }
}
