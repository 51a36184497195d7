use coordinated::model::RegionList;
use coordinated::navigation::NavigationStack;
use coordinated::session::{FileSessionStore, SessionError, SessionStore, LOGGED_IN_KEY};
use coordinated::{AppMode, ApplicationCoordinator};
use tempfile::TempDir;

#[test]
fn missing_file_reads_logged_out() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(temp_dir.path().join("session.toml"));
    assert!(!store.is_logged_in().unwrap());
}

#[test]
fn set_creates_file_with_flag_key() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("session.toml");
    let mut store = FileSessionStore::new(&path);

    store.set_logged_in(true).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains(&format!("{LOGGED_IN_KEY} = true")));
    assert!(store.is_logged_in().unwrap());
}

#[test]
fn flag_survives_a_new_store_instance() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.toml");

    FileSessionStore::new(&path).set_logged_in(true).unwrap();
    assert!(FileSessionStore::new(&path).is_logged_in().unwrap());

    FileSessionStore::new(&path).clear().unwrap();
    assert!(!FileSessionStore::new(&path).is_logged_in().unwrap());
}

#[test]
fn write_preserves_other_keys() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.toml");
    std::fs::write(&path, "theme = \"dark\"\nisLoggedIn = false\n").unwrap();

    let mut store = FileSessionStore::new(&path);
    store.set_logged_in(true).unwrap();

    let table: toml::Table = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(table.get("theme").and_then(|v| v.as_str()), Some("dark"));
    assert_eq!(table.get(LOGGED_IN_KEY).and_then(|v| v.as_bool()), Some(true));
}

#[test]
fn non_boolean_flag_reads_logged_out() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.toml");
    std::fs::write(&path, "isLoggedIn = \"yes\"\n").unwrap();

    assert!(!FileSessionStore::new(&path).is_logged_in().unwrap());
}

#[test]
fn malformed_file_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.toml");
    std::fs::write(&path, "isLoggedIn = = true").unwrap();

    let err = FileSessionStore::new(&path).is_logged_in().unwrap_err();
    assert!(matches!(err, SessionError::ParseError { .. }));
    assert!(err.to_string().contains("session.toml"));
}

#[test]
fn login_persists_across_app_restarts() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.toml");

    let mut first = ApplicationCoordinator::new(
        FileSessionStore::new(&path),
        NavigationStack::new(),
        RegionList::default(),
    );
    first.start().unwrap();
    assert_eq!(first.mode(), AppMode::Auth);
    first.log_in().unwrap();

    let mut second = ApplicationCoordinator::new(
        FileSessionStore::new(&path),
        NavigationStack::new(),
        RegionList::default(),
    );
    second.start().unwrap();
    assert_eq!(second.mode(), AppMode::Content);

    second.log_out().unwrap();
    let mut third = ApplicationCoordinator::new(
        FileSessionStore::new(&path),
        NavigationStack::new(),
        RegionList::default(),
    );
    third.start().unwrap();
    assert_eq!(third.mode(), AppMode::Auth);
}
