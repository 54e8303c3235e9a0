use roster_core::{default_log_level, init_logging};

// One test only: logging state is process-global, so the sequence has to
// run in a fixed order.
#[test]
fn init_is_idempotent_per_directory_and_rejects_switching() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("logs");
    let log_dir = log_dir.to_str().unwrap();

    assert!(init_logging(default_log_level(), log_dir).is_ok());
    assert!(init_logging(default_log_level(), log_dir).is_ok());

    let other = dir.path().join("elsewhere");
    let err = init_logging(default_log_level(), other.to_str().unwrap()).unwrap_err();
    assert!(err.contains("already initialized"));

    assert!(init_logging(default_log_level(), "").is_err());
}
