//! `lockey verify`: every master key must appear in some split catalog.

use std::fmt::Write as _;

use lockey_catalog::{run_verify, AuditConfig, VerifyReport, VerifyStatus};

use crate::exit_codes::EXIT_KEYS_MISSING;
use crate::{print_csv, print_json, CliError, OutputFormat};

pub fn cmd_verify(config: &AuditConfig, format: OutputFormat) -> Result<(), CliError> {
    let report = run_verify(config).map_err(CliError::catalog)?;

    match format {
        OutputFormat::Human => eprint!("{}", render_human(&report)),
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Csv => {
            let records: Vec<Vec<String>> = report
                .missing_keys
                .iter()
                .enumerate()
                .map(|(i, key)| vec![(i + 1).to_string(), key.clone()])
                .collect();
            print_csv(&["n", "missing_key"], &records)?;
            eprintln!("{}", summary_line(&report));
        }
    }

    if report.is_clean() {
        return Ok(());
    }

    let err = CliError::new(
        EXIT_KEYS_MISSING,
        format!("{} of {} key(s) missing from split catalogs", report.summary.missing, report.summary.total_keys),
    );
    Err(match report.status {
        VerifyStatus::NoSplitFiles => err.with_hint(format!(
            "no file in {} matched '{}'; check --locales-dir and --split-pattern",
            config.locales_dir.display(),
            config.split_pattern,
        )),
        _ => err,
    })
}

fn summary_line(report: &VerifyReport) -> String {
    let s = &report.summary;
    format!(
        "verify: {} master key(s), {} split catalog(s), {} found, {} missing ({})",
        s.total_keys, s.split_file_count, s.found, s.missing, report.status,
    )
}

/// Human report: totals, then either the clean message or one missing key per line.
pub(crate) fn render_human(report: &VerifyReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "master:          {}", report.meta.master);
    let _ = writeln!(out, "split catalogs:  {}", report.summary.split_file_count);
    for split in &report.meta.split_files {
        let _ = writeln!(out, "  {split}");
    }
    for split in &report.meta.unreadable_splits {
        let _ = writeln!(out, "  {split} (unreadable, skipped)");
    }
    let _ = writeln!(out, "total keys:      {}", report.summary.total_keys);

    if report.status == VerifyStatus::NoSplitFiles {
        let _ = writeln!(out, "warning: no split catalogs found; every master key is reported missing");
    }

    if report.is_clean() {
        let _ = writeln!(out, "ok: all {} key(s) present in split catalogs", report.summary.total_keys);
        return out;
    }

    let _ = writeln!(out, "missing keys ({}):", report.missing_keys.len());
    let width = report.missing_keys.len().to_string().len();
    for (i, key) in report.missing_keys.iter().enumerate() {
        let _ = writeln!(out, "  {:>width$}. {key}", i + 1);
    }
    out
}
