//! Base trait for flow state.

/// Marker trait for flow state objects.
///
/// States should be:
/// - Cheap to clone (a flow snapshot is small)
/// - Self-contained (everything the next screen needs)
/// - Comparable (PartialEq for asserting transitions)
pub trait UiState: Clone + PartialEq + Default {}
