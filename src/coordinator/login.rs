use crate::coordinator::signup::{SignupEvent, SignupFlow};
use crate::coordinator::{Coordinator, FlowContext};
use crate::error::FlowError;
use crate::model::{RegionList, User};
use crate::navigation::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    /// `start` has not run yet.
    #[default]
    Idle,
    ShowingLogin,
    ShowingSignup,
    Authenticated,
}

impl GateState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "not started",
            Self::ShowingLogin => "showing login",
            Self::ShowingSignup => "showing signup",
            Self::Authenticated => "authenticated",
        }
    }
}

/// Outcome reported to the application coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    Authenticated,
}

/// Decides between the login screen and content, and runs signup on demand.
#[derive(Debug)]
pub struct LoginGate {
    state: GateState,
    signup: Option<SignupFlow>,
    regions: RegionList,
}

impl LoginGate {
    pub fn new(regions: RegionList) -> Self {
        Self {
            state: GateState::Idle,
            signup: None,
            regions,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// The signup attempt in progress, if any.
    pub fn signup(&self) -> Option<&SignupFlow> {
        self.signup.as_ref()
    }

    pub fn regions(&self) -> &RegionList {
        &self.regions
    }

    /// Log in from the login screen.
    ///
    /// Credentials are not checked; every attempt succeeds.
    pub fn log_in(&mut self, cx: &mut FlowContext<'_>) -> Result<GateEvent, FlowError> {
        if self.state != GateState::ShowingLogin {
            return Err(FlowError::invalid("log in", self.state.as_str()));
        }

        cx.session.set_logged_in(true)?;
        self.state = GateState::Authenticated;
        tracing::info!("Logged in");
        Ok(GateEvent::Authenticated)
    }

    /// Start a fresh signup attempt with an empty draft.
    pub fn request_signup(&mut self, cx: &mut FlowContext<'_>) -> Result<(), FlowError> {
        if self.state != GateState::ShowingLogin {
            return Err(FlowError::invalid("start signup", self.state.as_str()));
        }

        let mut flow = SignupFlow::new(self.regions.clone());
        flow.start(cx)?;
        self.signup = Some(flow);
        self.state = GateState::ShowingSignup;
        Ok(())
    }

    /// Forward the current signup screen's value to the active flow.
    pub fn advance_signup(
        &mut self,
        value: impl Into<String>,
        cx: &mut FlowContext<'_>,
    ) -> Result<Option<GateEvent>, FlowError> {
        let Some(flow) = self.signup.as_mut() else {
            return Err(FlowError::invalid("advance signup", self.state.as_str()));
        };

        match flow.advance(value, cx)? {
            None => Ok(None),
            Some(SignupEvent::Completed(user)) => self.finish_signup(user, cx).map(Some),
        }
    }

    /// Pick the region at picker row `index` on the region step.
    pub fn choose_region(
        &mut self,
        index: usize,
        cx: &mut FlowContext<'_>,
    ) -> Result<Option<GateEvent>, FlowError> {
        let Some(flow) = self.signup.as_mut() else {
            return Err(FlowError::invalid("choose region", self.state.as_str()));
        };

        match flow.choose_region(index, cx)? {
            None => Ok(None),
            Some(SignupEvent::Completed(user)) => self.finish_signup(user, cx).map(Some),
        }
    }

    /// Back out of signup. The draft is dropped and the login screen shown.
    pub fn cancel_signup(&mut self, cx: &mut FlowContext<'_>) -> Result<(), FlowError> {
        if self.signup.take().is_none() {
            return Err(FlowError::invalid("cancel signup", self.state.as_str()));
        }

        cx.navigator.pop_to_root();
        self.state = GateState::ShowingLogin;
        tracing::debug!("Signup abandoned");
        Ok(())
    }

    fn finish_signup(
        &mut self,
        user: User,
        cx: &mut FlowContext<'_>,
    ) -> Result<GateEvent, FlowError> {
        // flow already popped back to the login screen
        self.signup = None;
        self.state = GateState::ShowingLogin;

        cx.session.set_logged_in(true)?;
        self.state = GateState::Authenticated;
        tracing::info!(username = %user.username, "Signed up and logged in");
        Ok(GateEvent::Authenticated)
    }

    fn show_login(&mut self, cx: &mut FlowContext<'_>) {
        self.signup = None;
        self.state = GateState::ShowingLogin;
        cx.navigator.set_stack(vec![Screen::Login]);
    }
}

impl Coordinator for LoginGate {
    type Event = GateEvent;

    /// Skip straight to content when a session exists, otherwise show login.
    fn start(&mut self, cx: &mut FlowContext<'_>) -> Result<Option<GateEvent>, FlowError> {
        if cx.session.is_logged_in()? {
            self.signup = None;
            self.state = GateState::Authenticated;
            tracing::info!("Existing session found");
            return Ok(Some(GateEvent::Authenticated));
        }

        self.show_login(cx);
        Ok(None)
    }
}
