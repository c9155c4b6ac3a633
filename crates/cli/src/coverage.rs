//! `lockey coverage`: filled vs. empty cells per locale column.

use std::fmt::Write as _;

use lockey_catalog::coverage::locale_coverage;
use lockey_catalog::engine::load_master;
use lockey_catalog::model::LocaleCoverage;
use lockey_catalog::AuditConfig;
use serde::Serialize;

use crate::exit_codes::EXIT_KEYS_MISSING;
use crate::{print_csv, print_json, CliError, OutputFormat};

#[derive(Serialize)]
struct CoverageOutput<'a> {
    source: &'a str,
    locales: &'a [LocaleCoverage],
}

pub fn cmd_coverage(
    config: &AuditConfig,
    locales: &[String],
    fail_on_missing: bool,
    limit: usize,
    format: OutputFormat,
) -> Result<(), CliError> {
    let master = load_master(config).map_err(CliError::catalog)?;
    let coverage = locale_coverage(&master, locales, &config.ignore_columns).map_err(CliError::catalog)?;

    match format {
        OutputFormat::Human => eprint!("{}", render_human(&coverage, limit)),
        OutputFormat::Json => print_json(&CoverageOutput { source: &master.source, locales: &coverage })?,
        OutputFormat::Csv => {
            let records: Vec<Vec<String>> = coverage
                .iter()
                .map(|c| vec![c.locale.clone(), c.total.to_string(), c.filled.to_string(), c.missing().to_string()])
                .collect();
            print_csv(&["locale", "total", "filled", "missing"], &records)?;
        }
    }

    let empty_cells: usize = coverage.iter().map(LocaleCoverage::missing).sum();
    if fail_on_missing && empty_cells > 0 {
        let locales_with_gaps = coverage.iter().filter(|c| c.missing() > 0).count();
        return Err(CliError::new(
            EXIT_KEYS_MISSING,
            format!("{empty_cells} empty cell(s) across {locales_with_gaps} locale(s)"),
        ));
    }
    Ok(())
}

pub(crate) fn render_human(coverage: &[LocaleCoverage], limit: usize) -> String {
    let mut out = String::new();
    let total = coverage.first().map(|c| c.total).unwrap_or(0);
    let _ = writeln!(out, "Total keys: {total}");

    for c in coverage {
        let _ = writeln!(out, "{}: {} filled, {} missing", c.locale, c.filled, c.missing());
        if c.missing_keys.is_empty() || limit == 0 {
            continue;
        }
        for key in c.missing_keys.iter().take(limit) {
            let _ = writeln!(out, "  - {key}");
        }
        if c.missing_keys.len() > limit {
            let _ = writeln!(out, "  ... and {} more", c.missing_keys.len() - limit);
        }
    }
    out
}
