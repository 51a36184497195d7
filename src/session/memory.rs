use super::{SessionError, SessionStore};

/// Session store that lives only in memory.
///
/// Counts writes so tests can assert that a flow persisted (or did not
/// persist) the flag.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    logged_in: bool,
    writes: usize,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts with the flag already set.
    pub fn logged_in() -> Self {
        Self {
            logged_in: true,
            writes: 0,
        }
    }

    /// Number of `set_logged_in` calls (including via `clear`).
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SessionStore for MemorySessionStore {
    fn is_logged_in(&self) -> Result<bool, SessionError> {
        Ok(self.logged_in)
    }

    fn set_logged_in(&mut self, value: bool) -> Result<(), SessionError> {
        self.logged_in = value;
        self.writes += 1;
        Ok(())
    }
}
