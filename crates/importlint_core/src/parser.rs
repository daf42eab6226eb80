use anyhow::{Context, Result};
use log::{debug, trace};
use regex::Regex;
use std::{fs, path::Path, sync::LazyLock};

use crate::types::ImportDeclaration;

/// `import` at the start of a line, whitespace, then everything up to the
/// next `;`. The capture may span lines.
static IMPORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^import\s+([^;]+);").expect("import pattern is a valid regex")
});

/// Reads a source file fully as UTF-8 text with `\r\n` and lone `\r` line
/// endings translated to `\n`.
pub fn read_source(file: &Path) -> Result<String> {
    trace!("Reading source file: {}", file.display());
    let text =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    Ok(normalize_newlines(text))
}

fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Extracts every import declaration from `text`, top to bottom.
///
/// Repeated imports are returned once per occurrence.
pub fn extract_imports(text: &str) -> Vec<ImportDeclaration> {
    let imports: Vec<ImportDeclaration> = IMPORT_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|raw| {
            trace!("Found import: '{}'", raw.as_str());
            ImportDeclaration::new(raw.as_str())
        })
        .collect();

    debug!("Extracted {} import declarations", imports.len());
    imports
}
