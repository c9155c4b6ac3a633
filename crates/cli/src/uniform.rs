//! `lockey uniform`: rows that read the same in every locale.

use std::fmt::Write as _;

use lockey_catalog::engine::load_master;
use lockey_catalog::model::UniformReport;
use lockey_catalog::uniform::analyze_uniform;
use lockey_catalog::AuditConfig;

use crate::{print_csv, print_json, CliError, OutputFormat};

pub fn cmd_uniform(config: &AuditConfig, threshold: f64, format: OutputFormat) -> Result<(), CliError> {
    if !(0.0..=100.0).contains(&threshold) {
        return Err(CliError::new(
            crate::exit_codes::EXIT_USAGE,
            format!("--threshold must be between 0 and 100, got {threshold}"),
        ));
    }

    let master = load_master(config).map_err(CliError::catalog)?;
    let report = analyze_uniform(&master, &config.ignore_columns, threshold);

    match format {
        OutputFormat::Human => eprint!("{}", render_human(&report)),
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Csv => {
            let mut records: Vec<Vec<String>> = report
                .uniform
                .iter()
                .map(|r| vec!["uniform".into(), r.key.clone(), r.value.clone(), "100.0".into()])
                .collect();
            records.extend(report.near_uniform.iter().map(|r| {
                vec!["near_uniform".into(), r.key.clone(), r.value.clone(), format!("{:.1}", r.share_pct)]
            }));
            print_csv(&["kind", "key", "value", "share_pct"], &records)?;
        }
    }

    Ok(())
}

pub(crate) fn render_human(report: &UniformReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total rows: {}", report.data_rows);
    let _ = writeln!(out, "Locales: {}", report.locales.join(", "));
    let _ = writeln!(out);

    let _ = writeln!(out, "{} row(s) identical across all locales:", report.uniform.len());
    for row in &report.uniform {
        let _ = writeln!(out, "  {}: '{}'", row.key, row.value);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} row(s) mostly identical (>{:.0}% same):",
        report.near_uniform.len(),
        report.threshold_pct
    );
    for row in &report.near_uniform {
        let _ = writeln!(
            out,
            "  {}: '{}' ({:.1}%, {} distinct values)",
            row.key, row.value, row.share_pct, row.distinct_values
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lockey_catalog::model::{NearUniformRow, UniformRow};

    #[test]
    fn renders_both_sections() {
        let report = UniformReport {
            source: "translations.csv".into(),
            data_rows: 12,
            locales: vec!["en".into(), "de".into()],
            uniform: vec![UniformRow { key: "orText".into(), value: "or".into() }],
            near_uniform: vec![NearUniformRow {
                key: "original".into(),
                value: "Original".into(),
                share_pct: 93.7,
                distinct_values: 2,
            }],
            threshold_pct: 90.0,
        };
        let text = render_human(&report);
        assert!(text.contains("Locales: en, de\n"));
        assert!(text.contains("1 row(s) identical across all locales:\n  orText: 'or'\n"));
        assert!(text.contains("1 row(s) mostly identical (>90% same):\n  original: 'Original' (93.7%, 2 distinct values)\n"));
    }
}
