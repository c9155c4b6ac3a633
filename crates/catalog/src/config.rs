use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CatalogError;
use crate::tokenizer::QuotingMode;

pub const DEFAULT_LOCALES_DIR: &str = "src/locales";
pub const DEFAULT_MASTER: &str = "translations.csv";
pub const DEFAULT_SPLIT_PATTERN: &str = "translations*.csv";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Where catalogs live and how they are read. Passed explicitly to every run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    #[serde(default = "default_locales_dir")]
    pub locales_dir: PathBuf,
    /// File name of the master catalog inside `locales_dir`.
    #[serde(default = "default_master")]
    pub master: String,
    /// Glob matched against file names in `locales_dir`; the master is always excluded.
    #[serde(default = "default_split_pattern")]
    pub split_pattern: String,
    #[serde(default)]
    pub strict_quoting: bool,
    /// Header columns left out of coverage and uniform-row analysis (e.g. notes).
    #[serde(default)]
    pub ignore_columns: Vec<String>,
}

fn default_locales_dir() -> PathBuf {
    PathBuf::from(DEFAULT_LOCALES_DIR)
}

fn default_master() -> String {
    DEFAULT_MASTER.into()
}

fn default_split_pattern() -> String {
    DEFAULT_SPLIT_PATTERN.into()
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            locales_dir: default_locales_dir(),
            master: default_master(),
            split_pattern: default_split_pattern(),
            strict_quoting: false,
            ignore_columns: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl AuditConfig {
    pub fn from_toml(input: &str) -> Result<Self, CatalogError> {
        let config: AuditConfig =
            toml::from_str(input).map_err(|e| CatalogError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. A relative `locales_dir` is resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let input = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(format!("cannot read config {}: {e}", path.display())))?;
        let mut config = Self::from_toml(&input)?;
        if config.locales_dir.is_relative() {
            let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
            config.locales_dir = base_dir.join(&config.locales_dir);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let master = self.master.trim();
        if master.is_empty() {
            return Err(CatalogError::ConfigValidation("master must not be empty".into()));
        }

        // Master is looked up inside locales_dir, so it must be a bare file name
        if Path::new(master).components().count() != 1 || master.contains('/') || master.contains('\\') {
            return Err(CatalogError::ConfigValidation(format!(
                "master must be a file name, got \"{}\"",
                self.master
            )));
        }

        if let Err(e) = glob::Pattern::new(&self.split_pattern) {
            return Err(CatalogError::ConfigValidation(format!(
                "invalid split_pattern \"{}\": {e}",
                self.split_pattern
            )));
        }

        Ok(())
    }

    pub fn master_path(&self) -> PathBuf {
        self.locales_dir.join(&self.master)
    }

    pub fn quoting_mode(&self) -> QuotingMode {
        if self.strict_quoting {
            QuotingMode::Strict
        } else {
            QuotingMode::Permissive
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
