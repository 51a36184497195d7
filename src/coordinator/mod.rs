//! Coordinators own navigation decisions.
//!
//! The tree is strictly owned top-down: the application coordinator owns the
//! login gate, the gate owns at most one signup flow. Children never hold a
//! reference to their parent; they report outcomes by returning an event from
//! the call that produced it, and the parent reacts before returning itself.

mod application;
mod login;
pub mod signup;

use crate::error::FlowError;
use crate::navigation::Navigator;
use crate::session::SessionStore;

pub use application::{AppMode, ApplicationCoordinator};
pub use login::{GateEvent, GateState, LoginGate};
pub use signup::{SignupEvent, SignupFlow, SignupStep};

/// Capabilities a coordinator may use while handling one call.
pub struct FlowContext<'a> {
    pub session: &'a mut dyn SessionStore,
    pub navigator: &'a mut dyn Navigator,
}

impl<'a> FlowContext<'a> {
    pub fn new(session: &'a mut dyn SessionStore, navigator: &'a mut dyn Navigator) -> Self {
        Self { session, navigator }
    }
}

/// Something that can take over navigation and later report an outcome.
pub trait Coordinator {
    /// Outcome reported to the owning coordinator.
    type Event;

    /// Present the coordinator's first screen. May finish immediately.
    fn start(&mut self, cx: &mut FlowContext<'_>) -> Result<Option<Self::Event>, FlowError>;
}
