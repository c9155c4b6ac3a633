use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::model::LocaleCoverage;
use crate::tokenizer::trim_field;

/// Per-locale fill statistics for a catalog.
///
/// `locales` selects columns by header name; empty means every locale column
/// not in `ignore`. Empty lines are not counted, but a row of empty fields
/// such as `,,,` is. A row without a key is named `row#N` after its position
/// among counted rows.
pub fn locale_coverage(
    catalog: &Catalog,
    locales: &[String],
    ignore: &[String],
) -> Result<Vec<LocaleCoverage>, CatalogError> {
    let available = catalog.locales(ignore);
    let columns: Vec<(usize, &str)> = if locales.is_empty() {
        available
    } else {
        let all = catalog.locales(&[]);
        locales
            .iter()
            .map(|wanted| {
                all.iter()
                    .find(|(_, name)| *name == wanted.as_str())
                    .copied()
                    .ok_or_else(|| CatalogError::UnknownLocale(wanted.clone()))
            })
            .collect::<Result<_, _>>()?
    };

    let mut coverage: Vec<LocaleCoverage> = columns
        .iter()
        .map(|(_, name)| LocaleCoverage {
            locale: name.to_string(),
            total: 0,
            filled: 0,
            missing_keys: Vec::new(),
        })
        .collect();

    let mut counted = 0;
    for (_, row) in catalog.data_rows() {
        if row.len() == 1 && trim_field(&row[0]).is_empty() {
            continue;
        }
        counted += 1;

        let key = row.first().map(|f| trim_field(f)).unwrap_or_default();
        for ((col, _), stats) in columns.iter().zip(coverage.iter_mut()) {
            stats.total += 1;
            let value = row.get(*col).map(|v| trim_field(v)).unwrap_or_default();
            if value.is_empty() {
                let name = if key.is_empty() { format!("row#{counted}") } else { key.to_string() };
                stats.missing_keys.push(name);
            } else {
                stats.filled += 1;
            }
        }
    }

    Ok(coverage)
}
