use stellar_burger::logging::{init_tracing, LOG_FILE_ENV};

/// Own test binary: the global subscriber can only be installed once.
#[test]
fn log_file_receives_events() {
    let dir = tempfile::TempDir::new().unwrap();
    let base = dir.path().join("burger.log");
    std::env::remove_var("RUST_LOG");
    std::env::set_var(LOG_FILE_ENV, &base);

    init_tracing();
    tracing::info!(number = 38483, "Order placed");

    let path = format!("{}.{}", base.display(), std::process::id());
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Order placed"));
    assert!(content.contains("number=38483"));
    assert!(!content.contains('\u{1b}'));
}
