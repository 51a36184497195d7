//! Model-View-Intent primitives used by the navigation flows.
//!
//! The signup walk is expressed as a reducer so that every step transition
//! lives in one pure function instead of being spread across per-screen
//! callbacks.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Navigator
//!    ↑                              │
//!    └──────── user action ─────────┘
//! ```
//!
//! - **State**: snapshot of a flow (current step plus collected data)
//! - **Intent**: a user action delivered by a screen
//! - **Reducer**: pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
