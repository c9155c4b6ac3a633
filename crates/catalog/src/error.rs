use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Master catalog missing or unreadable. Nothing can be reported.
    MasterUnreadable { path: String, message: String },
    /// A split catalog could not be read.
    SplitUnreadable { path: String, message: String },
    /// The locales directory could not be listed.
    Discovery { dir: String, message: String },
    /// Quoted field still open at end of input (strict quoting only).
    UnterminatedQuote { source: String, line: usize },
    /// Quote character outside a well-formed quoted field (strict quoting only).
    StrayQuote { source: String, line: usize, column: usize },
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error.
    ConfigValidation(String),
    /// Requested locale column is not in the catalog header.
    UnknownLocale(String),
    /// IO error (file read, etc.).
    Io(String),
}

impl CatalogError {
    /// Whether this error comes from strict tokenization rather than I/O or config.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::UnterminatedQuote { .. } | Self::StrayQuote { .. })
    }

    /// Relabel a tokenizer error with the catalog it came from.
    pub(crate) fn with_source(self, label: &str) -> Self {
        match self {
            Self::UnterminatedQuote { line, .. } => Self::UnterminatedQuote { source: label.to_string(), line },
            Self::StrayQuote { line, column, .. } => {
                Self::StrayQuote { source: label.to_string(), line, column }
            }
            other => other,
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MasterUnreadable { path, message } => {
                write!(f, "cannot read master catalog {path}: {message}")
            }
            Self::SplitUnreadable { path, message } => {
                write!(f, "cannot read split catalog {path}: {message}")
            }
            Self::Discovery { dir, message } => {
                write!(f, "cannot list locales directory {dir}: {message}")
            }
            Self::UnterminatedQuote { source, line } => {
                write!(f, "{source}:{line}: quoted field is never closed")
            }
            Self::StrayQuote { source, line, column } => {
                write!(f, "{source}:{line}:{column}: stray quote character")
            }
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::UnknownLocale(locale) => write!(f, "unknown locale column: {locale}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}
