//! `lockey-catalog`: translation catalog tokenizer and key reconciliation engine.
//!
//! Pure engine crate: reads catalog files, returns reports.
//! No CLI dependencies.

pub mod catalog;
pub mod config;
pub mod coverage;
pub mod discover;
pub mod engine;
pub mod error;
pub mod model;
pub mod reconcile;
pub mod tokenizer;
pub mod uniform;

pub use catalog::Catalog;
pub use config::AuditConfig;
pub use engine::run_verify;
pub use error::CatalogError;
pub use model::{VerifyReport, VerifyStatus};
pub use reconcile::{reconcile, PresenceIndex};
pub use tokenizer::{tokenize, tokenize_with, QuotingMode, Row};
