//! Screen presentation collaborator.
//!
//! Coordinators never build screens themselves. They name a [`Screen`] and
//! hand it to a [`Navigator`], which owns the actual stack. Rendering is
//! somebody else's problem; [`NavigationStack`] is the in-memory stack used
//! by the CLI driver and by tests.

use std::fmt;

use crate::model::{Article, RegionList};

/// Layout resource holding the login and signup screens.
pub const LOGIN_RESOURCE: &str = "Login";
/// Layout resource holding the article screens.
pub const ARTICLES_RESOURCE: &str = "Articles";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login,
    SignupUsername,
    SignupPassword,
    SignupRegion { regions: RegionList },
    ArticleList,
    ArticleDetail(Article),
}

impl Screen {
    /// Name of the layout resource the screen is instantiated from.
    pub fn resource(&self) -> &'static str {
        match self {
            Self::Login | Self::SignupUsername | Self::SignupPassword | Self::SignupRegion { .. } => {
                LOGIN_RESOURCE
            }
            Self::ArticleList | Self::ArticleDetail(_) => ARTICLES_RESOURCE,
        }
    }

    /// Identifier of the screen inside its resource.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Login => "LoginViewController",
            Self::SignupUsername => "SignupUsernameViewController",
            Self::SignupPassword => "SignupPasswordViewController",
            Self::SignupRegion { .. } => "SignupRegionViewController",
            Self::ArticleList => "ArticleListViewController",
            Self::ArticleDetail(_) => "ArticleDetailViewController",
        }
    }

    pub fn is_signup_step(&self) -> bool {
        matches!(
            self,
            Self::SignupUsername | Self::SignupPassword | Self::SignupRegion { .. }
        )
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArticleDetail(article) => {
                write!(f, "{}/{}({})", self.resource(), self.identifier(), article.id)
            }
            _ => write!(f, "{}/{}", self.resource(), self.identifier()),
        }
    }
}

/// The three stack operations coordinators rely on.
pub trait Navigator {
    /// Replace the whole stack with `screens`.
    fn set_stack(&mut self, screens: Vec<Screen>);

    /// Push a screen on top of the stack.
    fn push(&mut self, screen: Screen);

    /// Drop every screen above the root.
    fn pop_to_root(&mut self);
}

/// A navigation operation as applied to a [`NavigationStack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    SetStack(Vec<Screen>),
    Push(Screen),
    PopToRoot,
}

/// In-memory navigation stack that records every command it receives.
#[derive(Debug, Default)]
pub struct NavigationStack {
    screens: Vec<Screen>,
    history: Vec<NavCommand>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn top(&self) -> Option<&Screen> {
        self.screens.last()
    }

    pub fn root(&self) -> Option<&Screen> {
        self.screens.first()
    }

    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    /// Every command applied so far, oldest first.
    pub fn history(&self) -> &[NavCommand] {
        &self.history
    }

    /// True if `screen` was ever presented, by push or by stack replacement.
    pub fn presented(&self, screen: &Screen) -> bool {
        self.history.iter().any(|cmd| match cmd {
            NavCommand::SetStack(screens) => screens.contains(screen),
            NavCommand::Push(pushed) => pushed == screen,
            NavCommand::PopToRoot => false,
        })
    }
}

impl Navigator for NavigationStack {
    fn set_stack(&mut self, screens: Vec<Screen>) {
        tracing::debug!(depth = screens.len(), "Navigation: set stack");
        self.screens = screens.clone();
        self.history.push(NavCommand::SetStack(screens));
    }

    fn push(&mut self, screen: Screen) {
        tracing::debug!(screen = %screen, "Navigation: push");
        self.screens.push(screen.clone());
        self.history.push(NavCommand::Push(screen));
    }

    fn pop_to_root(&mut self) {
        tracing::debug!(depth = self.screens.len(), "Navigation: pop to root");
        self.screens.truncate(1);
        self.history.push(NavCommand::PopToRoot);
    }
}

impl fmt::Display for NavigationStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.screens.is_empty() {
            return write!(f, "(empty)");
        }
        for (i, screen) in self.screens.iter().enumerate() {
            if i > 0 {
                write!(f, " > ")?;
            }
            write!(f, "{screen}")?;
        }
        Ok(())
    }
}
