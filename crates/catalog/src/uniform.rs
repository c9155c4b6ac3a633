//! Rows whose translations do not vary by locale.
//!
//! Such rows are candidates for a constants catalog instead of the
//! translated one.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::model::{NearUniformRow, UniformReport, UniformRow};
use crate::tokenizer::{trim_field, Row};

pub const DEFAULT_THRESHOLD_PCT: f64 = 90.0;

fn locale_values<'a>(row: &'a Row, columns: &[(usize, &str)]) -> Vec<&'a str> {
    columns
        .iter()
        .map(|(col, _)| row.get(*col).map(|v| trim_field(v)).unwrap_or_default())
        .collect()
}

fn row_key(row: &Row) -> Option<&str> {
    row.first().map(|f| trim_field(f)).filter(|k| !k.is_empty())
}

/// Rows where every locale value is identical and non-empty.
pub fn uniform_rows(catalog: &Catalog, ignore: &[String]) -> Vec<UniformRow> {
    let columns = catalog.locales(ignore);
    if columns.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    for (_, row) in catalog.data_rows() {
        if row.len() < 2 {
            continue;
        }
        let Some(key) = row_key(row) else {
            continue;
        };
        let values = locale_values(row, &columns);
        let first = values[0];
        if !first.is_empty() && values.iter().all(|v| *v == first) {
            out.push(UniformRow { key: key.to_string(), value: first.to_string() });
        }
    }
    out
}

/// Rows where the most common non-empty value covers more than
/// `threshold_pct` percent of non-empty values, but not all of them.
/// Sorted by share, highest first; ties keep catalog order.
pub fn near_uniform_rows(catalog: &Catalog, ignore: &[String], threshold_pct: f64) -> Vec<NearUniformRow> {
    let columns = catalog.locales(ignore);

    let mut out = Vec::new();
    for (_, row) in catalog.data_rows() {
        if row.len() < 2 {
            continue;
        }
        let Some(key) = row_key(row) else {
            continue;
        };
        let non_empty: Vec<&str> = locale_values(row, &columns).into_iter().filter(|v| !v.is_empty()).collect();
        if non_empty.len() < 2 {
            continue;
        }

        // Count in first-seen order so ties resolve to the earliest locale's value
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for &v in &non_empty {
            let count = counts.entry(v).or_insert(0);
            if *count == 0 {
                order.push(v);
            }
            *count += 1;
        }
        let (value, count) = order
            .iter()
            .map(|v| (*v, counts[v]))
            .fold(("", 0), |best, cur| if cur.1 > best.1 { cur } else { best });

        let share_pct = count as f64 / non_empty.len() as f64 * 100.0;
        if share_pct > threshold_pct && counts.len() > 1 {
            out.push(NearUniformRow {
                key: key.to_string(),
                value: value.to_string(),
                share_pct,
                distinct_values: counts.len(),
            });
        }
    }

    out.sort_by(|a, b| b.share_pct.total_cmp(&a.share_pct));
    out
}

pub fn analyze_uniform(catalog: &Catalog, ignore: &[String], threshold_pct: f64) -> UniformReport {
    UniformReport {
        source: catalog.source.clone(),
        data_rows: catalog.data_rows().count(),
        locales: catalog.locales(ignore).into_iter().map(|(_, name)| name.to_string()).collect(),
        uniform: uniform_rows(catalog, ignore),
        near_uniform: near_uniform_rows(catalog, ignore, threshold_pct),
        threshold_pct,
    }
}
