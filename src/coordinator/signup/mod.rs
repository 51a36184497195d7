//! Multi-step signup: username, password, region.

mod intent;
mod reducer;
mod state;

pub use intent::SignupIntent;
pub use reducer::SignupReducer;
pub use state::{SignupState, SignupStep};

use crate::coordinator::{Coordinator, FlowContext};
use crate::error::FlowError;
use crate::model::{RegionList, User, UserDraft};
use crate::mvi::Reducer;
use crate::navigation::Screen;

/// Outcome reported to the login gate.
#[derive(Debug, Clone, PartialEq)]
pub enum SignupEvent {
    Completed(User),
}

/// One signup attempt.
///
/// Created fresh for every attempt with an empty draft. Once it reports
/// [`SignupEvent::Completed`] it refuses further input and is meant to be
/// dropped.
#[derive(Debug)]
pub struct SignupFlow {
    state: SignupState,
    regions: RegionList,
}

impl SignupFlow {
    pub fn new(regions: RegionList) -> Self {
        Self {
            state: SignupState::default(),
            regions,
        }
    }

    pub fn step(&self) -> SignupStep {
        self.state.step
    }

    pub fn draft(&self) -> &UserDraft {
        &self.state.draft
    }

    pub fn regions(&self) -> &RegionList {
        &self.regions
    }

    /// Submit the value collected by the current step's screen.
    ///
    /// Username and password accept any string. The region step only accepts
    /// names from the configured region list. On the last step navigation
    /// returns to the flow's origin and the completed record is returned.
    pub fn advance(
        &mut self,
        value: impl Into<String>,
        cx: &mut FlowContext<'_>,
    ) -> Result<Option<SignupEvent>, FlowError> {
        let value = value.into();
        let step = self.state.step;

        if step.is_complete() {
            return Err(FlowError::invalid("advance signup", "signup is complete"));
        }
        if step == SignupStep::AwaitingRegion && !self.regions.contains(&value) {
            return Err(FlowError::UnknownRegion(value));
        }

        tracing::debug!(step = step.as_str(), "Signup step submitted");
        let state = std::mem::take(&mut self.state);
        self.state = SignupReducer::reduce(state, SignupIntent::Advance(value));

        match self.screen_for(self.state.step) {
            Some(screen) => {
                cx.navigator.push(screen);
                Ok(None)
            }
            None => {
                let draft = std::mem::take(&mut self.state.draft);
                let user = draft
                    .into_user()
                    .map_err(|field| FlowError::IncompleteDraft(field.as_str()))?;
                cx.navigator.pop_to_root();
                tracing::info!(username = %user.username, region = %user.region, "Signup complete");
                Ok(Some(SignupEvent::Completed(user)))
            }
        }
    }

    /// Submit the region at picker row `index`.
    pub fn choose_region(
        &mut self,
        index: usize,
        cx: &mut FlowContext<'_>,
    ) -> Result<Option<SignupEvent>, FlowError> {
        let region = self
            .regions
            .get(index)
            .ok_or(FlowError::RegionOutOfRange {
                index,
                len: self.regions.len(),
            })?
            .to_string();
        self.advance(region, cx)
    }

    fn screen_for(&self, step: SignupStep) -> Option<Screen> {
        match step {
            SignupStep::AwaitingUsername => Some(Screen::SignupUsername),
            SignupStep::AwaitingPassword => Some(Screen::SignupPassword),
            SignupStep::AwaitingRegion => Some(Screen::SignupRegion {
                regions: self.regions.clone(),
            }),
            SignupStep::Complete => None,
        }
    }
}

impl Coordinator for SignupFlow {
    type Event = SignupEvent;

    fn start(&mut self, cx: &mut FlowContext<'_>) -> Result<Option<SignupEvent>, FlowError> {
        tracing::debug!("Signup started");
        if let Some(screen) = self.screen_for(self.state.step) {
            cx.navigator.push(screen);
        }
        Ok(None)
    }
}
