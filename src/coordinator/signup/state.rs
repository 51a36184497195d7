use crate::model::{DraftField, UserDraft};
use crate::mvi::UiState;

/// Where the signup walk currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupStep {
    #[default]
    AwaitingUsername,
    AwaitingPassword,
    AwaitingRegion,
    Complete,
}

impl SignupStep {
    /// Draft field the step collects. `None` once the walk is complete.
    pub fn field(self) -> Option<DraftField> {
        match self {
            Self::AwaitingUsername => Some(DraftField::Username),
            Self::AwaitingPassword => Some(DraftField::Password),
            Self::AwaitingRegion => Some(DraftField::Region),
            Self::Complete => None,
        }
    }

    /// Step that follows this one. `Complete` is terminal.
    pub fn next(self) -> Self {
        match self {
            Self::AwaitingUsername => Self::AwaitingPassword,
            Self::AwaitingPassword => Self::AwaitingRegion,
            Self::AwaitingRegion | Self::Complete => Self::Complete,
        }
    }

    pub fn is_complete(self) -> bool {
        self == Self::Complete
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingUsername => "awaiting username",
            Self::AwaitingPassword => "awaiting password",
            Self::AwaitingRegion => "awaiting region",
            Self::Complete => "complete",
        }
    }
}

/// Snapshot of one signup attempt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignupState {
    pub step: SignupStep,
    pub draft: UserDraft,
}

impl UiState for SignupState {}
