use std::path::PathBuf;

use lockey_catalog::config::AuditConfig;
use lockey_catalog::engine::{load_master, run_verify};
use lockey_catalog::{CatalogError, VerifyStatus};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn config_for(scenario: &str) -> AuditConfig {
    AuditConfig {
        locales_dir: fixtures_dir().join(scenario),
        ..AuditConfig::default()
    }
}

// -------------------------------------------------------------------------
// Verify
// -------------------------------------------------------------------------

#[test]
fn partial_split_reports_missing_key() {
    let report = run_verify(&config_for("partial")).unwrap();

    assert_eq!(report.summary.total_keys, 3);
    assert_eq!(report.summary.found, 2);
    assert_eq!(report.missing_keys, vec!["error.generic"]);
    assert_eq!(report.status, VerifyStatus::Incomplete);
    assert!(!report.is_clean());
    assert_eq!(report.meta.split_files.len(), 1);
    assert!(report.meta.split_files[0].ends_with("translations_ui.csv"));
}

#[test]
fn complete_splits_are_clean() {
    let report = run_verify(&config_for("complete")).unwrap();

    assert_eq!(report.summary.total_keys, 4);
    assert!(report.is_clean(), "missing: {:?}", report.missing_keys);
    assert_eq!(report.status, VerifyStatus::Clean);
    // texts_constant.csv does not match the split pattern
    assert_eq!(report.summary.split_file_count, 2);
    assert!(report.meta.unreadable_splits.is_empty());
}

#[test]
fn quoted_values_keep_key_column_intact() {
    let config = config_for("complete");
    let master = load_master(&config).unwrap();
    assert_eq!(master.keys(), vec!["greeting", "farewell", "palette.title", "welcome"]);

    let welcome = master.rows.iter().find(|r| r[0] == "welcome").unwrap();
    assert_eq!(welcome[1], "Hi, \"friend\"!");
    assert_eq!(welcome[2], "Hallo, \"Freund\"!");

    let palette = master.rows.iter().find(|r| r[0] == "palette.title").unwrap();
    assert_eq!(palette[1], "Palette\nEditor");
    assert_eq!(palette.len(), 4);
}

#[test]
fn missing_master_is_precondition_failure() {
    let config = config_for("does-not-exist");
    let err = run_verify(&config).unwrap_err();
    match err {
        CatalogError::MasterUnreadable { path, .. } => assert!(path.ends_with("translations.csv")),
        other => panic!("expected MasterUnreadable, got {other:?}"),
    }
}

#[test]
fn no_split_files_reports_every_key() {
    let report = run_verify(&config_for("nosplit")).unwrap();

    assert_eq!(report.status, VerifyStatus::NoSplitFiles);
    assert_eq!(report.summary.split_file_count, 0);
    assert_eq!(report.missing_keys, vec!["greeting", "farewell", "error.generic"]);
}

#[test]
fn custom_split_pattern_picks_up_constants() {
    let config = AuditConfig {
        split_pattern: "texts_*.csv".into(),
        ..config_for("nosplit")
    };
    let report = run_verify(&config).unwrap();
    assert_eq!(report.status, VerifyStatus::Incomplete);
    assert_eq!(report.missing_keys, vec!["farewell", "error.generic"]);
}

#[test]
fn strict_quoting_accepts_well_formed_fixtures() {
    for scenario in ["partial", "complete", "nosplit"] {
        let config = AuditConfig { strict_quoting: true, ..config_for(scenario) };
        let report = run_verify(&config).unwrap();
        assert!(report.meta.unreadable_splits.is_empty(), "{scenario}");
    }
}
