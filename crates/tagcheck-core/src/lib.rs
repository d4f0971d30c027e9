//! tagcheck core
//!
//! Domain model shared by the parser, the comparison engine and the CLI.

pub mod diagnostic;
pub mod field;
pub mod report;
pub mod config;

pub use diagnostic::{Diagnostic, DiagnosticKind, Location, TagRef};
pub use field::{FieldDeclaration, TagEntry};
pub use report::{Report, ReportSummary};
pub use config::{CheckConfig, ConfigError, DEFAULT_CONFIG_FILE};
