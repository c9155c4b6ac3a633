// lockey - translation catalog integrity checks (read-only, CI friendly)

mod coverage;
mod exit_codes;
mod logging;
mod uniform;
mod verify;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use lockey_catalog::{AuditConfig, CatalogError};
use tracing::debug;

use exit_codes::{catalog_exit_code, EXIT_CONFIG, EXIT_SUCCESS};

#[derive(Parser)]
#[command(name = "lockey")]
#[command(about = "Check translation catalogs for missing keys and locale gaps")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML config file (locales_dir, master, split_pattern, strict_quoting, ignore_columns)
    #[arg(long, global = true, env = "LOCKEY_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the catalogs [default: src/locales]
    #[arg(long, global = true)]
    locales_dir: Option<PathBuf>,

    /// Master catalog file name inside the locales directory [default: translations.csv]
    #[arg(long, global = true)]
    master: Option<String>,

    /// Glob for split catalog file names; the master is always excluded [default: translations*.csv]
    #[arg(long, global = true)]
    split_pattern: Option<String>,

    /// Reject stray or unterminated quotes instead of tolerating them
    #[arg(long, global = true)]
    strict_quoting: bool,

    /// Column excluded from locale analysis (repeatable)
    #[arg(long = "ignore-column", global = true, value_name = "NAME")]
    ignore_columns: Vec<String>,

    /// Only log errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// More logging (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every master key appears in at least one split catalog
    #[command(after_help = "\
Exit code 0 means every key is covered, 1 means keys are missing,
3 means the master catalog could not be read.

Examples:
  lockey verify
  lockey verify --locales-dir app/src/locales
  lockey verify --format json | jq '.missing_keys'
  lockey verify --split-pattern 'part-*.csv' --strict-quoting")]
    Verify {
        /// Output format (human report goes to stderr; json/csv go to stdout)
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Count filled and empty cells per locale column of the master catalog
    #[command(after_help = "\
Examples:
  lockey coverage
  lockey coverage --locale cs --locale de
  lockey coverage --fail-on-missing --ignore-column notes
  lockey coverage --format csv > coverage.csv")]
    Coverage {
        /// Locale column to check (repeatable; default all)
        #[arg(long = "locale", value_name = "LOCALE")]
        locales: Vec<String>,

        /// Exit 1 when any checked cell is empty
        #[arg(long)]
        fail_on_missing: bool,

        /// Maximum empty-cell keys listed per locale in the human report
        #[arg(long, default_value_t = 50)]
        limit: usize,

        /// Output format (human report goes to stderr; json/csv go to stdout)
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// List rows whose translations are the same in every locale
    #[command(after_help = "\
Examples:
  lockey uniform --ignore-column notes
  lockey uniform --threshold 75 --format json")]
    Uniform {
        /// Also list rows where one value exceeds this share (percent) of non-empty values
        #[arg(long, default_value_t = lockey_catalog::uniform::DEFAULT_THRESHOLD_PCT)]
        threshold: f64,

        /// Output format (human report goes to stderr; json/csv go to stdout)
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Csv,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.verbose);

    let result = resolve_config(&cli).and_then(|config| match cli.command {
        Commands::Verify { format } => verify::cmd_verify(&config, format),
        Commands::Coverage { locales, fail_on_missing, limit, format } => {
            coverage::cmd_coverage(&config, &locales, fail_on_missing, limit, format)
        }
        Commands::Uniform { threshold, format } => uniform::cmd_uniform(&config, threshold, format),
    });

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

/// Config file, then CLI flags on top.
fn resolve_config(cli: &Cli) -> Result<AuditConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => AuditConfig::from_file(path).map_err(|e| CliError {
            code: EXIT_CONFIG,
            message: e.to_string(),
            hint: None,
        })?,
        None => AuditConfig::default(),
    };

    if let Some(dir) = &cli.locales_dir {
        config.locales_dir = dir.clone();
    }
    if let Some(master) = &cli.master {
        config.master = master.clone();
    }
    if let Some(pattern) = &cli.split_pattern {
        config.split_pattern = pattern.clone();
    }
    if cli.strict_quoting {
        config.strict_quoting = true;
    }
    for column in &cli.ignore_columns {
        if !config.ignore_columns.contains(column) {
            config.ignore_columns.push(column.clone());
        }
    }

    config.validate().map_err(CliError::catalog)?;
    debug!(
        locales_dir = %config.locales_dir.display(),
        master = %config.master,
        split_pattern = %config.split_pattern,
        strict_quoting = config.strict_quoting,
        "resolved config"
    );
    Ok(config)
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(code: u8, msg: impl Into<String>) -> Self {
        Self { code, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::new(exit_codes::EXIT_ERROR, msg)
    }

    /// Create error from a catalog error with the matching exit code.
    pub fn catalog(err: CatalogError) -> Self {
        let code = catalog_exit_code(&err);
        let hint = match &err {
            CatalogError::MasterUnreadable { .. } => {
                Some("pass --locales-dir or --master, or set locales_dir in the config file".to_string())
            }
            CatalogError::UnterminatedQuote { .. } | CatalogError::StrayQuote { .. } => {
                Some("fix the quoting or drop --strict-quoting to parse permissively".to_string())
            }
            _ => None,
        };
        Self { code, message: err.to_string(), hint }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Serialize to pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("JSON serialization error: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Write CSV records to stdout.
pub(crate) fn print_csv(header: &[&str], records: &[Vec<String>]) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new().from_writer(std::io::stdout().lock());
    writer.write_record(header).map_err(|e| CliError::io(e.to_string()))?;
    for record in records {
        writer.write_record(record).map_err(|e| CliError::io(e.to_string()))?;
    }
    writer.flush().map_err(|e| CliError::io(e.to_string()))?;
    Ok(())
}
