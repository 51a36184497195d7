//! Coordinator-driven navigation for a login, signup and article-reading app.
//!
//! Screens report user actions to coordinators; coordinators decide what is
//! shown next and persist the logged-in flag. See [`coordinator`] for the
//! ownership tree and [`navigation`] for the stack collaborator.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod navigation;
pub mod session;
pub mod shell;

pub use coordinator::{AppMode, ApplicationCoordinator, GateState, SignupStep};
pub use error::FlowError;
