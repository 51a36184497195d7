//! Shared fixtures for the flow tests.

#![allow(dead_code, unused_imports)]

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use coordinated::coordinator::FlowContext;
use coordinated::model::{Article, RegionList};
use coordinated::navigation::NavigationStack;
use coordinated::session::{MemorySessionStore, SessionError, SessionStore};
use coordinated::ApplicationCoordinator;

pub type TestApp = ApplicationCoordinator<MemorySessionStore, NavigationStack>;

/// App wired to an in-memory session and navigation stack, not yet started.
pub fn app(logged_in: bool) -> TestApp {
    let session = if logged_in {
        MemorySessionStore::logged_in()
    } else {
        MemorySessionStore::new()
    };
    ApplicationCoordinator::new(session, NavigationStack::new(), RegionList::default())
}

/// App already started from a logged-out session (login screen showing).
pub fn started_logged_out() -> TestApp {
    let mut app = app(false);
    app.start().expect("start should succeed");
    app
}

pub fn article(id: &str) -> Article {
    Article::new(id, format!("Article {id}"))
}

/// Session and navigator pair for driving a coordinator directly.
pub struct Harness {
    pub session: MemorySessionStore,
    pub nav: NavigationStack,
}

impl Harness {
    pub fn new(logged_in: bool) -> Self {
        Self {
            session: if logged_in {
                MemorySessionStore::logged_in()
            } else {
                MemorySessionStore::new()
            },
            nav: NavigationStack::new(),
        }
    }

    pub fn cx(&mut self) -> FlowContext<'_> {
        FlowContext::new(&mut self.session, &mut self.nav)
    }
}

#[derive(Debug, Default)]
struct FaultState {
    logged_in: bool,
    fail_reads: bool,
    fail_writes: bool,
}

/// Session store whose reads and writes can be switched to fail.
///
/// Clones share state, so a test can keep one handle after moving another
/// into a coordinator.
#[derive(Debug, Clone, Default)]
pub struct FaultySession {
    state: Rc<RefCell<FaultState>>,
}

impl FaultySession {
    pub fn new(logged_in: bool) -> Self {
        let session = Self::default();
        session.state.borrow_mut().logged_in = logged_in;
        session
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.borrow_mut().fail_reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }

    /// Stored flag, bypassing the failure switches.
    pub fn stored(&self) -> bool {
        self.state.borrow().logged_in
    }
}

fn io_failure(what: &str) -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, format!("{what} refused"))
}

impl SessionStore for FaultySession {
    fn is_logged_in(&self) -> Result<bool, SessionError> {
        let state = self.state.borrow();
        if state.fail_reads {
            return Err(SessionError::ReadError {
                path: PathBuf::from("faulty-session.toml"),
                source: io_failure("read"),
            });
        }
        Ok(state.logged_in)
    }

    fn set_logged_in(&mut self, value: bool) -> Result<(), SessionError> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(SessionError::WriteError {
                path: PathBuf::from("faulty-session.toml"),
                source: io_failure("write"),
            });
        }
        state.logged_in = value;
        Ok(())
    }
}

pub type FaultyApp = ApplicationCoordinator<FaultySession, NavigationStack>;

/// App over a [`FaultySession`], plus a handle to flip its failure switches.
pub fn faulty_app(logged_in: bool) -> (FaultyApp, FaultySession) {
    let session = FaultySession::new(logged_in);
    let app = ApplicationCoordinator::new(
        session.clone(),
        NavigationStack::new(),
        RegionList::default(),
    );
    (app, session)
}
