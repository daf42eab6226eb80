//! Likely-unused import detection for Java-style source trees.
//!
//! This crate scans every source file under a root directory, extracts its
//! `import ...;` declarations and reports the imports whose simple name occurs
//! only once in the file (on the import line itself). The check is a textual
//! heuristic: names mentioned in comments or strings count as uses.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use importlint_unused::{Config, OutputFormat, run_unused_import_check};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: std::path::PathBuf::from("src"),
//!     extension: "java".to_string(),
//!     format: OutputFormat::Text,
//!     skip_unreadable: false,
//!     fail_on_findings: false,
//! };
//!
//! let result = run_unused_import_check(cfg.clone())?;
//!
//! // Use buffered output for better performance
//! let mut stdout = BufWriter::new(std::io::stdout());
//! importlint_unused::print_report(&mut stdout, &result, cfg.format)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod reporter;
mod types;

// Re-export public API
pub use checker::{classify, count_occurrences, run_unused_import_check};
pub use config::{Config, OutputFormat};
pub use reporter::{
    HEURISTIC_NOTE, NO_FINDINGS_MESSAGE, format_finding, print_findings, print_report,
    print_summary,
};
pub use types::{CheckResult, Finding};
