use thiserror::Error;

use crate::session::SessionError;

/// Errors surfaced by the navigation flows.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Session(#[from] SessionError),

    /// An action arrived while the flow was in a state that does not accept it.
    /// Nothing was written or navigated.
    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("Unknown region '{0}'")]
    UnknownRegion(String),

    #[error("Region index {index} out of range (0..{len})")]
    RegionOutOfRange { index: usize, len: usize },

    /// Signup reached its last step with a field still missing.
    #[error("Signup draft is missing its {0}")]
    IncompleteDraft(&'static str),
}

impl FlowError {
    pub(crate) fn invalid(action: &'static str, state: &'static str) -> Self {
        tracing::warn!(action, state, "Rejected flow action");
        Self::InvalidTransition { action, state }
    }
}
