//! Base trait for intents (user actions) delivered by screens.

/// Marker trait for intent objects.
///
/// Intents represent what a screen reports back to its coordinator:
/// a submitted text field, a picker selection, a button press.
/// They are processed by reducers to produce new states.
pub trait Intent {}
