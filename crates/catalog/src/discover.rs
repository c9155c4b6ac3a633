use std::path::PathBuf;

use crate::config::AuditConfig;
use crate::error::CatalogError;

/// Split catalogs in `locales_dir` whose file name matches `split_pattern`,
/// excluding the master. Sorted by file name.
pub fn discover_splits(config: &AuditConfig) -> Result<Vec<PathBuf>, CatalogError> {
    let pattern = glob::Pattern::new(&config.split_pattern)
        .map_err(|e| CatalogError::ConfigValidation(format!("invalid split_pattern: {e}")))?;
    let match_opts = glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let discovery_err = |e: std::io::Error| CatalogError::Discovery {
        dir: config.locales_dir.display().to_string(),
        message: e.to_string(),
    };

    let mut splits = Vec::new();
    for entry in std::fs::read_dir(&config.locales_dir).map_err(discovery_err)? {
        let entry = entry.map_err(discovery_err)?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if name == config.master || !pattern.matches_with(&name, match_opts) {
            continue;
        }
        // Follows symlinks, so a linked catalog counts as a file
        if !entry.path().is_file() {
            continue;
        }
        splits.push(entry.path());
    }

    splits.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(splits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_for(dir: &std::path::Path) -> AuditConfig {
        AuditConfig { locales_dir: dir.to_path_buf(), ..AuditConfig::default() }
    }

    #[test]
    fn finds_matching_files_except_master() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["translations.csv", "translations_ui.csv", "translations-editor.csv", "texts_constant.csv", "notes.txt"] {
            fs::write(dir.path().join(name), "key\n").unwrap();
        }
        fs::create_dir(dir.path().join("translations_dir.csv")).unwrap();

        let found = discover_splits(&config_for(dir.path())).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["translations-editor.csv", "translations_ui.csv"]);
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("translations.csv"), "key\n").unwrap();
        assert!(discover_splits(&config_for(dir.path())).unwrap().is_empty());
    }

    #[test]
    fn custom_pattern() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("translations.csv"), "key\n").unwrap();
        fs::write(dir.path().join("part-1.csv"), "key\n").unwrap();
        fs::write(dir.path().join("translations_x.csv"), "key\n").unwrap();
        let config = AuditConfig { split_pattern: "part-*.csv".into(), ..config_for(dir.path()) };
        let found = discover_splits(&config).unwrap();
        assert_eq!(found, vec![dir.path().join("part-1.csv")]);
    }

    #[test]
    fn missing_directory_is_discovery_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_splits(&config_for(&dir.path().join("nope"))).unwrap_err();
        assert!(matches!(err, CatalogError::Discovery { .. }), "got {err:?}");
    }
}
