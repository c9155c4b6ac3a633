//! CLI Exit Code Registry
//!
//! Single source of truth for `lockey` exit codes. CI pipelines branch on
//! these values, so they are part of the shell contract.
//!
//! | Code | Meaning                                                  |
//! |------|----------------------------------------------------------|
//! | 0    | Success / clean report                                   |
//! | 1    | Keys missing (verify) or empty cells (coverage, opt-in)  |
//! | 2    | CLI usage error (bad args, unknown locale)               |
//! | 3    | Master catalog missing or unreadable                     |
//! | 4    | Invalid or unreadable config file                        |
//! | 5    | Catalog parse error (strict quoting)                     |
//! | 6    | Locales directory cannot be listed                       |
//! | 7    | Report output could not be written                       |

use lockey_catalog::CatalogError;

/// Success - clean report.
pub const EXIT_SUCCESS: u8 = 0;

/// Output error - the report could not be serialized or written.
pub const EXIT_ERROR: u8 = 7;

/// Report completed and found gaps. Like `diff(1)`, 1 means "not equal".
pub const EXIT_KEYS_MISSING: u8 = 1;

/// Usage error - bad arguments, unknown locale column.
pub const EXIT_USAGE: u8 = 2;

/// Master catalog missing or unreadable. No report is produced.
pub const EXIT_MASTER_UNREADABLE: u8 = 3;

/// Config file unreadable, malformed, or invalid.
pub const EXIT_CONFIG: u8 = 4;

/// Catalog rejected by strict quoting.
pub const EXIT_PARSE: u8 = 5;

/// Locales directory cannot be listed.
pub const EXIT_DISCOVERY: u8 = 6;

/// Map a catalog error to its exit code.
pub fn catalog_exit_code(err: &CatalogError) -> u8 {
    match err {
        CatalogError::MasterUnreadable { .. } => EXIT_MASTER_UNREADABLE,
        CatalogError::SplitUnreadable { .. } => EXIT_KEYS_MISSING,
        CatalogError::Discovery { .. } => EXIT_DISCOVERY,
        CatalogError::UnterminatedQuote { .. } | CatalogError::StrayQuote { .. } => EXIT_PARSE,
        CatalogError::ConfigParse(_) | CatalogError::ConfigValidation(_) => EXIT_CONFIG,
        CatalogError::UnknownLocale(_) => EXIT_USAGE,
        CatalogError::Io(_) => EXIT_CONFIG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_master_differs_from_missing_keys() {
        let err = CatalogError::MasterUnreadable { path: "x".into(), message: "gone".into() };
        assert_ne!(catalog_exit_code(&err), EXIT_KEYS_MISSING);
        assert_ne!(catalog_exit_code(&err), EXIT_SUCCESS);
    }

    #[test]
    fn output_failure_differs_from_missing_keys() {
        let codes = [
            EXIT_SUCCESS,
            EXIT_KEYS_MISSING,
            EXIT_USAGE,
            EXIT_MASTER_UNREADABLE,
            EXIT_CONFIG,
            EXIT_PARSE,
            EXIT_DISCOVERY,
        ];
        assert!(!codes.contains(&EXIT_ERROR));
        assert_eq!(crate::CliError::io("broken pipe").code, EXIT_ERROR);
    }

    #[test]
    fn parse_errors_map_to_parse_code() {
        let err = CatalogError::StrayQuote { source: "a.csv".into(), line: 1, column: 2 };
        assert_eq!(catalog_exit_code(&err), EXIT_PARSE);
        let err = CatalogError::UnterminatedQuote { source: "a.csv".into(), line: 1 };
        assert_eq!(catalog_exit_code(&err), EXIT_PARSE);
    }
}
