mod common;

use common::{article, faulty_app, FaultySession};
use coordinated::coordinator::{Coordinator, FlowContext, GateState, LoginGate};
use coordinated::model::RegionList;
use coordinated::navigation::{NavigationStack, Screen};
use coordinated::session::SessionError;
use coordinated::{AppMode, FlowError};

fn is_session_error(err: &FlowError) -> bool {
    matches!(err, FlowError::Session(_))
}

#[test]
fn failed_first_start_changes_nothing() {
    let (mut app, session) = faulty_app(false);
    session.fail_reads(true);

    let err = app.start().unwrap_err();

    assert!(matches!(
        err,
        FlowError::Session(SessionError::ReadError { .. })
    ));
    assert_eq!(app.mode(), AppMode::Auth);
    assert_eq!(app.gate_state(), GateState::Idle);
    assert!(app.navigator().history().is_empty());
}

#[test]
fn failed_restart_keeps_content_usable() {
    let (mut app, session) = faulty_app(true);
    app.start().unwrap();
    app.select_article(article("1")).unwrap();

    session.fail_reads(true);
    assert!(is_session_error(&app.start().unwrap_err()));

    assert_eq!(app.mode(), AppMode::Content);
    assert_eq!(app.gate_state(), GateState::Authenticated);
    assert_eq!(app.current_article(), Some(&article("1")));
    assert_eq!(
        app.navigator().screens(),
        &[Screen::ArticleList, Screen::ArticleDetail(article("1"))]
    );

    app.close_article().unwrap();
    app.select_article(article("2")).unwrap();
    assert_eq!(app.current_article(), Some(&article("2")));
}

#[test]
fn log_out_with_failed_reread_can_be_retried() {
    let (mut app, session) = faulty_app(true);
    app.start().unwrap();

    session.fail_reads(true);
    assert!(is_session_error(&app.log_out().unwrap_err()));
    assert!(!session.stored());
    assert_eq!(app.mode(), AppMode::Content);
    assert_eq!(app.navigator().screens(), &[Screen::ArticleList]);

    session.fail_reads(false);
    app.log_out().unwrap();
    assert_eq!(app.mode(), AppMode::Auth);
    assert_eq!(app.gate_state(), GateState::ShowingLogin);
    assert_eq!(app.navigator().screens(), &[Screen::Login]);
}

#[test]
fn failed_log_in_stays_on_login() {
    let (mut app, session) = faulty_app(false);
    app.start().unwrap();

    session.fail_writes(true);
    assert!(is_session_error(&app.log_in().unwrap_err()));

    assert_eq!(app.mode(), AppMode::Auth);
    assert_eq!(app.gate_state(), GateState::ShowingLogin);
    assert_eq!(app.navigator().screens(), &[Screen::Login]);
    assert!(!session.stored());

    session.fail_writes(false);
    app.log_in().unwrap();
    assert_eq!(app.mode(), AppMode::Content);
}

#[test]
fn failed_signup_write_drops_draft_and_returns_to_login() {
    let (mut app, session) = faulty_app(false);
    app.start().unwrap();
    app.request_signup().unwrap();
    app.advance_signup("ana").unwrap();
    app.advance_signup("p1").unwrap();

    session.fail_writes(true);
    assert!(is_session_error(&app.advance_signup("Europe").unwrap_err()));

    assert_eq!(app.mode(), AppMode::Auth);
    assert_eq!(app.gate_state(), GateState::ShowingLogin);
    assert!(app.gate().signup().is_none());
    assert_eq!(app.navigator().screens(), &[Screen::Login]);
    assert!(!session.stored());

    // a new attempt starts from an empty draft
    session.fail_writes(false);
    app.request_signup().unwrap();
    assert!(app.gate().signup().unwrap().draft().is_empty());
}

#[test]
fn gate_start_read_failure_leaves_gate_untouched() {
    let mut session = FaultySession::new(false);
    let mut nav = NavigationStack::new();
    let mut gate = LoginGate::new(RegionList::default());

    gate.start(&mut FlowContext::new(&mut session, &mut nav))
        .unwrap();
    gate.request_signup(&mut FlowContext::new(&mut session, &mut nav))
        .unwrap();

    session.fail_reads(true);
    let result = gate.start(&mut FlowContext::new(&mut session, &mut nav));

    assert!(is_session_error(&result.unwrap_err()));
    assert_eq!(gate.state(), GateState::ShowingSignup);
    assert!(gate.signup().is_some());
    assert_eq!(nav.screens(), &[Screen::Login, Screen::SignupUsername]);
}
