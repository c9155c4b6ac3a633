//! Quote-aware CSV tokenizer for translation catalogs.
//!
//! Single character scan, RFC 4180-like:
//! - `"` toggles quoting; `""` inside quotes is one literal quote.
//! - `,` and line terminators are literal inside quotes.
//! - `\n`, `\r\n` and lone `\r` end a row outside quotes.
//! - Unquoted fields are trimmed; quoted content is kept verbatim.
//! - A quote in the middle of unquoted text still opens a quoted region;
//!   whitespace before the unquoted prefix is still trimmed.
//!
//! The scan never fails. Anomalies (stray quotes, an unterminated quote) are
//! collected on the side and only become errors under [`QuotingMode::Strict`].

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One catalog row: ordered field values.
pub type Row = Vec<String>;

/// How quoting anomalies are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotingMode {
    /// Stray quotes toggle quoting, an open quote at end of input is closed implicitly.
    #[default]
    Permissive,
    /// Stray or unterminated quotes are errors.
    Strict,
}

/// Tokenize catalog text, absorbing quoting anomalies.
pub fn tokenize(text: &str) -> Vec<Row> {
    scan(text).rows
}

/// Tokenize catalog text. In strict mode the first quoting anomaly is returned as an error.
pub fn tokenize_with(text: &str, mode: QuotingMode) -> Result<Vec<Row>, CatalogError> {
    let scan = scan(text);
    match (mode, scan.anomalies.into_iter().next()) {
        (QuotingMode::Strict, Some(err)) => Err(err),
        _ => Ok(scan.rows),
    }
}

/// Trim surrounding ASCII whitespace.
pub fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_ascii_whitespace())
}

struct Scan {
    rows: Vec<Row>,
    anomalies: Vec<CatalogError>,
}

#[derive(Default)]
struct Scanner {
    rows: Vec<Row>,
    row: Row,
    field: String,
    in_quotes: bool,
    /// Field contains a quoted region.
    quoted: bool,
    /// Byte length of `field` at the last closing quote.
    quoted_end: usize,
    line: usize,
    column: usize,
    quote_line: usize,
    anomalies: Vec<CatalogError>,
}

fn scan(text: &str) -> Scan {
    let mut s = Scanner { line: 1, ..Scanner::default() };
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        s.column += 1;
        match c {
            '"' if s.in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    s.column += 1;
                    s.field.push('"');
                } else {
                    s.in_quotes = false;
                    s.quoted_end = s.field.len();
                }
            }
            '"' => {
                if !s.quoted && trim_field(&s.field).is_empty() {
                    s.field.clear();
                } else {
                    s.stray_quote();
                    if !s.quoted {
                        let lead = s.field.len() - s.field.trim_start_matches(|c: char| c.is_ascii_whitespace()).len();
                        s.field.drain(..lead);
                    }
                }
                s.in_quotes = true;
                s.quoted = true;
                s.quote_line = s.line;
            }
            ',' if !s.in_quotes => s.end_field(),
            '\r' | '\n' if !s.in_quotes => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                s.end_field();
                let row = std::mem::take(&mut s.row);
                s.rows.push(row);
                s.next_line();
            }
            '\r' | '\n' => {
                s.field.push(c);
                if c == '\n' || chars.peek() != Some(&'\n') {
                    s.next_line();
                }
            }
            _ => {
                if s.quoted && !s.in_quotes && !c.is_ascii_whitespace() {
                    s.stray_quote();
                }
                s.field.push(c);
            }
        }
    }

    s.finish()
}

impl Scanner {
    fn next_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }

    fn stray_quote(&mut self) {
        self.anomalies.push(CatalogError::StrayQuote {
            source: "<input>".to_string(),
            line: self.line,
            column: self.column,
        });
    }

    fn end_field(&mut self) {
        let mut value = std::mem::take(&mut self.field);
        if self.quoted {
            // Keep quoted content verbatim, drop trailing whitespace after the closing quote.
            let end = self.quoted_end.min(value.len());
            let keep = end + value[end..].trim_end_matches(|c: char| c.is_ascii_whitespace()).len();
            value.truncate(keep);
        } else {
            value = trim_field(&value).to_string();
        }
        self.row.push(value);
        self.quoted = false;
        self.quoted_end = 0;
    }

    fn finish(mut self) -> Scan {
        if self.in_quotes {
            self.anomalies.push(CatalogError::UnterminatedQuote {
                source: "<input>".to_string(),
                line: self.quote_line,
            });
            self.in_quotes = false;
            self.quoted_end = self.field.len();
        }

        self.end_field();
        let row = std::mem::take(&mut self.row);
        if row.len() > 1 || row.first().is_some_and(|f| !trim_field(f).is_empty()) {
            self.rows.push(row);
        }

        Scan { rows: self.rows, anomalies: self.anomalies }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
