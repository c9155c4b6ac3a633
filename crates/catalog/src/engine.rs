use std::path::Path;

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::AuditConfig;
use crate::discover::discover_splits;
use crate::error::CatalogError;
use crate::model::{VerifyMeta, VerifyReport, VerifyStatus, VerifySummary};
use crate::reconcile::PresenceIndex;
use crate::tokenizer::QuotingMode;

/// Read and tokenize the master catalog. A read failure is fatal for every command.
pub fn load_master(config: &AuditConfig) -> Result<Catalog, CatalogError> {
    let path = config.master_path();
    let text = std::fs::read_to_string(&path).map_err(|e| CatalogError::MasterUnreadable {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Catalog::parse(path.display().to_string(), &text, config.quoting_mode())
}

pub fn load_split(path: &Path, mode: QuotingMode) -> Result<Catalog, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::SplitUnreadable {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Catalog::parse(path.display().to_string(), &text, mode)
}

/// Check that every master key appears in at least one split catalog.
///
/// Only a missing/unreadable master (or unparseable master in strict mode)
/// and an unlistable locales directory are errors. Unreadable splits are
/// skipped with a warning and listed in the report.
pub fn run_verify(config: &AuditConfig) -> Result<VerifyReport, CatalogError> {
    let master = load_master(config)?;
    let mut index = PresenceIndex::from_master(&master);
    debug!(master = %master.source, keys = index.len(), "loaded master catalog");

    let split_paths = discover_splits(config)?;
    if split_paths.is_empty() {
        warn!(
            dir = %config.locales_dir.display(),
            pattern = %config.split_pattern,
            "no split catalogs found; every master key will be reported missing"
        );
    }

    let mode = config.quoting_mode();
    let mut split_files = Vec::with_capacity(split_paths.len());
    let mut unreadable_splits = Vec::new();
    for path in &split_paths {
        match load_split(path, mode) {
            Ok(split) => {
                let matched = index.mark_catalog(&split);
                debug!(split = %split.source, keys = split.keys().len(), matched, "marked split catalog");
                split_files.push(split.source);
            }
            Err(e) => {
                warn!(error = %e, "skipping split catalog");
                unreadable_splits.push(path.display().to_string());
            }
        }
    }

    let missing_keys: Vec<String> = index.missing().into_iter().map(String::from).collect();
    let status = if split_paths.is_empty() {
        VerifyStatus::NoSplitFiles
    } else if missing_keys.is_empty() {
        VerifyStatus::Clean
    } else {
        VerifyStatus::Incomplete
    };

    info!(
        total = index.len(),
        found = index.found_count(),
        missing = missing_keys.len(),
        %status,
        "verify finished"
    );

    Ok(VerifyReport {
        meta: VerifyMeta {
            master: master.source,
            split_files,
            unreadable_splits,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary: VerifySummary {
            total_keys: index.len(),
            found: index.found_count(),
            missing: missing_keys.len(),
            split_file_count: split_paths.len(),
        },
        status,
        missing_keys,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn setup(files: &[(&str, &str)]) -> (tempfile::TempDir, AuditConfig) {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(name), body).unwrap();
        }
        let config = AuditConfig { locales_dir: dir.path().to_path_buf(), ..AuditConfig::default() };
        (dir, config)
    }

    #[test]
    fn missing_master_is_fatal() {
        let (_dir, config) = setup(&[("translations_a.csv", "key\ngreeting\n")]);
        let err = run_verify(&config).unwrap_err();
        assert!(matches!(err, CatalogError::MasterUnreadable { .. }), "got {err:?}");
    }

    #[test]
    fn unreadable_split_is_skipped_and_listed() {
        let (_dir, config) = setup(&[
            ("translations.csv", "key\ngreeting\n"),
            ("translations_a.csv", "key\ngreeting\n"),
        ]);
        // Not UTF-8, so it cannot be read as text
        fs::write(config.locales_dir.join("translations_b.csv"), [0xff, 0xfe, 0x00]).unwrap();

        let report = run_verify(&config).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.status, VerifyStatus::Clean);
        assert_eq!(report.meta.split_files.len(), 1);
        assert_eq!(report.meta.unreadable_splits.len(), 1);
        assert!(report.meta.unreadable_splits[0].ends_with("translations_b.csv"));
        assert_eq!(report.summary.split_file_count, 2);
    }

    #[test]
    fn strict_master_parse_error_propagates() {
        let (_dir, mut config) = setup(&[("translations.csv", "key\n\"open\n")]);
        config.strict_quoting = true;
        let err = run_verify(&config).unwrap_err();
        assert!(err.is_parse(), "got {err:?}");
    }

    #[test]
    fn strict_split_parse_error_skips_split() {
        let (_dir, mut config) = setup(&[
            ("translations.csv", "key\ngreeting\n"),
            ("translations_a.csv", "key\ngree\"ting\"\n"),
        ]);
        config.strict_quoting = true;
        let report = run_verify(&config).unwrap();
        assert_eq!(report.status, VerifyStatus::Incomplete);
        assert_eq!(report.missing_keys, vec!["greeting"]);
        assert_eq!(report.meta.unreadable_splits.len(), 1);
    }

    #[test]
    fn report_serializes_status_snake_case() {
        let (_dir, config) = setup(&[("translations.csv", "key\ngreeting\n")]);
        let report = run_verify(&config).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "no_split_files");
        assert_eq!(json["missing_keys"][0], "greeting");
        assert_eq!(json["summary"]["total_keys"], 1);
    }
}
