use serde::Serialize;

// ---------------------------------------------------------------------------
// Verify report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyStatus {
    /// Every master key appears in some split catalog.
    Clean,
    /// Split catalogs exist but do not cover the master.
    Incomplete,
    /// No split catalog was discovered; every key is missing by construction.
    NoSplitFiles,
}

impl std::fmt::Display for VerifyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clean => write!(f, "clean"),
            Self::Incomplete => write!(f, "incomplete"),
            Self::NoSplitFiles => write!(f, "no_split_files"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyMeta {
    pub master: String,
    pub split_files: Vec<String>,
    /// Split files that were discovered but could not be read or parsed.
    pub unreadable_splits: Vec<String>,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifySummary {
    pub total_keys: usize,
    pub found: usize,
    pub missing: usize,
    pub split_file_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub meta: VerifyMeta,
    pub summary: VerifySummary,
    pub status: VerifyStatus,
    /// Master keys found in no split catalog, in master order.
    pub missing_keys: Vec<String>,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.missing_keys.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Coverage
// ---------------------------------------------------------------------------

/// Fill statistics for one locale column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleCoverage {
    pub locale: String,
    pub total: usize,
    pub filled: usize,
    /// Keys whose cell is empty, in catalog order. Keyless rows appear as `row#N`.
    pub missing_keys: Vec<String>,
}

impl LocaleCoverage {
    pub fn missing(&self) -> usize {
        self.total - self.filled
    }
}

// ---------------------------------------------------------------------------
// Uniform rows
// ---------------------------------------------------------------------------

/// A row whose locale values are all the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniformRow {
    pub key: String,
    pub value: String,
}

/// A row where one value dominates but is not universal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearUniformRow {
    pub key: String,
    pub value: String,
    /// Share of non-empty values equal to `value`, in percent.
    pub share_pct: f64,
    pub distinct_values: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct UniformReport {
    pub source: String,
    pub data_rows: usize,
    pub locales: Vec<String>,
    pub uniform: Vec<UniformRow>,
    pub near_uniform: Vec<NearUniformRow>,
    pub threshold_pct: f64,
}
