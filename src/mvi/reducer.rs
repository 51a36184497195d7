//! Reducer trait for flow state machines.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms flow state based on intents.
///
/// The reducer is the only place where step transitions happen.
/// It must be a pure function: (State, Intent) -> State. Navigation and
/// persistence are performed by the coordinator that owns the state.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
