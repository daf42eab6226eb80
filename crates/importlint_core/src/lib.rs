//! Core utilities for importlint tools.
//!
//! This crate provides shared functionality for scanning source trees for
//! import declarations, including:
//! - Discovering source files with a given extension under a root directory
//! - Reading source files as UTF-8 text
//! - Extracting line-anchored `import ...;` declarations with a regex
//! - Deriving the simple name an import binds

mod collector;
mod constants;
mod parser;
mod types;

// Re-export public API
pub use collector::{SourceFiles, discover_files};
pub use constants::{DEFAULT_EXTENSION, DEFAULT_ROOT, WILDCARD_SUFFIX};
pub use parser::{extract_imports, read_source};
pub use types::ImportDeclaration;
