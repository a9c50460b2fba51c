use edusync_client::guard::can_access;
use edusync_client::models::user::{Role, Session};
use edusync_client::services::session_service::{FileSessionStore, SessionStore};
use std::fs;
use tempfile::tempdir;

fn sample_session(role: Role) -> Session {
    Session {
        user_id: "user-42".to_string(),
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        role,
        token: "jwt-token-value".to_string(),
    }
}

#[test]
fn session_round_trips_through_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = FileSessionStore::new(path.clone());
    store.establish(sample_session(Role::Instructor)).unwrap();

    // A fresh store simulates a new process restoring from disk.
    let fresh = FileSessionStore::new(path);
    let restored = fresh.restore().unwrap().unwrap();
    assert_eq!(restored.user_id, "user-42");
    assert_eq!(restored.name, "Grace Hopper");
    assert_eq!(restored.email, "grace@example.com");
    assert_eq!(restored.role, Role::Instructor);
    assert_eq!(restored.token, "jwt-token-value");
}

#[test]
fn clear_removes_session_everywhere() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = FileSessionStore::new(path.clone());
    store.establish(sample_session(Role::Student)).unwrap();
    store.clear().unwrap();

    assert!(store.current().is_none());
    assert!(!path.exists());

    let fresh = FileSessionStore::new(path);
    assert!(fresh.restore().unwrap().is_none());
}

#[test]
fn clear_is_idempotent() {
    let dir = tempdir().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    store.clear().unwrap();
    store.clear().unwrap();
    assert!(store.current().is_none());
}

#[test]
fn corrupt_session_file_restores_as_signed_out() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "{not valid json").unwrap();

    let store = FileSessionStore::new(path);
    assert!(store.restore().unwrap().is_none());
    assert!(store.current().is_none());
}

#[test]
fn partial_session_file_restores_as_signed_out() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, r#"{"userId":"user-42","token":"abc"}"#).unwrap();

    let store = FileSessionStore::new(path);
    assert!(store.restore().unwrap().is_none());
}

#[test]
fn missing_session_file_restores_as_signed_out() {
    let dir = tempdir().unwrap();
    let store = FileSessionStore::new(dir.path().join("never-written.json"));
    assert!(store.restore().unwrap().is_none());
}

#[test]
fn establish_replaces_previous_session() {
    let dir = tempdir().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));

    store.establish(sample_session(Role::Student)).unwrap();
    let mut second = sample_session(Role::Instructor);
    second.user_id = "user-99".to_string();
    store.establish(second).unwrap();

    let current = store.current().unwrap();
    assert_eq!(current.user_id, "user-99");
    assert_eq!(current.role, Role::Instructor);
}

#[test]
fn guard_truth_table() {
    let student = sample_session(Role::Student);
    let instructor = sample_session(Role::Instructor);

    // Signed out: always denied.
    assert!(!can_access(None, &[]));
    assert!(!can_access(None, &[Role::Student]));
    assert!(!can_access(None, &[Role::Instructor, Role::Student]));

    // No role requirement: any signed-in user passes.
    assert!(can_access(Some(&student), &[]));
    assert!(can_access(Some(&instructor), &[]));

    // Exact role requirement.
    assert!(can_access(Some(&student), &[Role::Student]));
    assert!(!can_access(Some(&student), &[Role::Instructor]));
    assert!(can_access(Some(&instructor), &[Role::Instructor]));
    assert!(!can_access(Some(&instructor), &[Role::Student]));

    // Either role accepted.
    assert!(can_access(Some(&student), &[Role::Instructor, Role::Student]));
    assert!(can_access(Some(&instructor), &[Role::Instructor, Role::Student]));
}
