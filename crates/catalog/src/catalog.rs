use crate::error::CatalogError;
use crate::reconcile::extract_keys;
use crate::tokenizer::{tokenize_with, trim_field, QuotingMode, Row};

/// One tokenized catalog. Row 0 is the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Where the text came from (file path or a label for in-memory input).
    pub source: String,
    pub rows: Vec<Row>,
}

impl Catalog {
    pub fn parse(source: impl Into<String>, text: &str, mode: QuotingMode) -> Result<Self, CatalogError> {
        let source = source.into();
        let rows = tokenize_with(text, mode).map_err(|e| e.with_source(&source))?;
        Ok(Self { source, rows })
    }

    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Data rows with their row index (1-based from the header, i.e. the header is 0).
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &Row)> {
        self.rows.iter().enumerate().skip(1)
    }

    /// Keys of all data rows, in file order. Duplicates are kept.
    pub fn keys(&self) -> Vec<&str> {
        extract_keys(&self.rows)
    }

    /// Locale columns: header columns after column 0, minus `ignore`.
    /// Returns `(column index, locale name)`.
    pub fn locales(&self, ignore: &[String]) -> Vec<(usize, &str)> {
        let Some(header) = self.header() else {
            return Vec::new();
        };
        header
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, name)| (i, trim_field(name)))
            .filter(|(_, name)| !name.is_empty() && !ignore.iter().any(|ig| ig.as_str() == *name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "key,en,de,notes\ngreeting,Hello,Hallo,\n,spacer,,\nfarewell,Bye,Tschüss,informal\n";

    #[test]
    fn keys_skip_header_and_spacer_rows() {
        let cat = Catalog::parse("t.csv", TEXT, QuotingMode::Permissive).unwrap();
        assert_eq!(cat.keys(), vec!["greeting", "farewell"]);
        assert_eq!(cat.data_rows().count(), 3);
    }

    #[test]
    fn locales_honor_ignore_list() {
        let cat = Catalog::parse("t.csv", TEXT, QuotingMode::Permissive).unwrap();
        assert_eq!(cat.locales(&[]), vec![(1, "en"), (2, "de"), (3, "notes")]);
        assert_eq!(cat.locales(&["notes".to_string()]), vec![(1, "en"), (2, "de")]);
    }

    #[test]
    fn empty_catalog_has_no_locales() {
        let cat = Catalog::parse("empty.csv", "", QuotingMode::Permissive).unwrap();
        assert!(cat.header().is_none());
        assert!(cat.locales(&[]).is_empty());
        assert!(cat.keys().is_empty());
    }

    #[test]
    fn strict_errors_name_the_source() {
        let err = Catalog::parse("fr.csv", "key\n\"open", QuotingMode::Strict).unwrap_err();
        assert_eq!(err.to_string(), "fr.csv:2: quoted field is never closed");
    }
}
