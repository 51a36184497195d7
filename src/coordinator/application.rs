use crate::coordinator::login::{GateEvent, GateState, LoginGate};
use crate::coordinator::{Coordinator, FlowContext};
use crate::error::FlowError;
use crate::model::{Article, RegionList};
use crate::navigation::{Navigator, Screen};
use crate::session::SessionStore;

/// Top-level mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Login or signup screens are up.
    #[default]
    Auth,
    /// The article list (and possibly one article) is up.
    Content,
}

impl AppMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "authenticating",
            Self::Content => "showing content",
        }
    }
}

/// Root of the coordinator tree.
///
/// Owns the session store and the navigator and lends both to the login gate
/// for the duration of each call.
pub struct ApplicationCoordinator<S, N> {
    session: S,
    navigator: N,
    gate: LoginGate,
    mode: AppMode,
    current_article: Option<Article>,
}

impl<S: SessionStore, N: Navigator> ApplicationCoordinator<S, N> {
    pub fn new(session: S, navigator: N, regions: RegionList) -> Self {
        Self {
            session,
            navigator,
            gate: LoginGate::new(regions),
            mode: AppMode::Auth,
            current_article: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn gate(&self) -> &LoginGate {
        &self.gate
    }

    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    /// Article on the detail screen, if one is open.
    pub fn current_article(&self) -> Option<&Article> {
        self.current_article.as_ref()
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Decide between login and content from the persisted session flag.
    ///
    /// A failed session read leaves mode, gate and stack as they were.
    pub fn start(&mut self) -> Result<(), FlowError> {
        let mut cx = FlowContext::new(&mut self.session, &mut self.navigator);
        let event = self.gate.start(&mut cx)?;

        self.mode = AppMode::Auth;
        self.current_article = None;
        self.on_gate_event(event);
        Ok(())
    }

    pub fn log_in(&mut self) -> Result<(), FlowError> {
        let mut cx = FlowContext::new(&mut self.session, &mut self.navigator);
        let event = self.gate.log_in(&mut cx)?;
        self.on_gate_event(Some(event));
        Ok(())
    }

    pub fn request_signup(&mut self) -> Result<(), FlowError> {
        let mut cx = FlowContext::new(&mut self.session, &mut self.navigator);
        self.gate.request_signup(&mut cx)
    }

    pub fn advance_signup(&mut self, value: impl Into<String>) -> Result<(), FlowError> {
        let mut cx = FlowContext::new(&mut self.session, &mut self.navigator);
        let event = self.gate.advance_signup(value, &mut cx)?;
        self.on_gate_event(event);
        Ok(())
    }

    pub fn choose_region(&mut self, index: usize) -> Result<(), FlowError> {
        let mut cx = FlowContext::new(&mut self.session, &mut self.navigator);
        let event = self.gate.choose_region(index, &mut cx)?;
        self.on_gate_event(event);
        Ok(())
    }

    pub fn cancel_signup(&mut self) -> Result<(), FlowError> {
        let mut cx = FlowContext::new(&mut self.session, &mut self.navigator);
        self.gate.cancel_signup(&mut cx)
    }

    /// Open the detail screen for `article`.
    pub fn select_article(&mut self, article: Article) -> Result<(), FlowError> {
        if self.mode != AppMode::Content {
            return Err(FlowError::invalid("select article", self.mode.as_str()));
        }

        tracing::debug!(article = %article.id, "Article selected");
        self.navigator.push(Screen::ArticleDetail(article.clone()));
        self.current_article = Some(article);
        Ok(())
    }

    /// Leave the detail screen and return to the list.
    pub fn close_article(&mut self) -> Result<(), FlowError> {
        if self.current_article.take().is_none() {
            return Err(FlowError::invalid("close article", "no article is open"));
        }

        self.navigator.pop_to_root();
        Ok(())
    }

    /// Clear the session and run the start decision again.
    pub fn log_out(&mut self) -> Result<(), FlowError> {
        self.session.clear()?;
        tracing::info!("Logged out");
        self.start()
    }

    fn on_gate_event(&mut self, event: Option<GateEvent>) {
        if let Some(GateEvent::Authenticated) = event {
            self.show_content();
        }
    }

    fn show_content(&mut self) {
        self.mode = AppMode::Content;
        self.current_article = None;
        self.navigator.set_stack(vec![Screen::ArticleList]);
        tracing::info!("Showing content");
    }
}
