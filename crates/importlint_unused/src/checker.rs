use anyhow::Result;
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use regex_syntax::is_word_character;
use std::thread;

use importlint_core::{ImportDeclaration, discover_files, extract_imports, read_source};

use crate::{
    config::Config,
    types::{CheckResult, Finding},
};

/// Imports whose simple name occurs at most this many times are reported.
/// The one expected occurrence is the import line itself.
const UNUSED_THRESHOLD: usize = 1;

/// Unicode `\b` at byte offset `at`, which must lie on a char boundary.
fn is_word_boundary(text: &str, at: usize) -> bool {
    let before = text[..at].chars().next_back().is_some_and(is_word_character);
    let after = text[at..].chars().next().is_some_and(is_word_character);
    before != after
}

/// Counts non-overlapping whole-word occurrences of `simple_name` in `text`,
/// including the one on the import line.
///
/// Matches the leftmost-first semantics of `\b<name>\b`: a candidate that
/// fails a boundary check is skipped by one character, so an overlapping
/// candidate starting inside it is still considered. No pattern is compiled,
/// so names of any length are counted.
pub fn count_occurrences(text: &str, simple_name: &str) -> usize {
    let mut count = 0;
    let mut start = 0;

    while let Some(offset) = text[start..].find(simple_name) {
        let at = start + offset;
        let end = at + simple_name.len();
        let matched = is_word_boundary(text, at) && is_word_boundary(text, end);
        if matched {
            count += 1;
        }

        start = if matched && end > at {
            end
        } else {
            // Step past one char; an empty name or a rejected candidate would otherwise repeat
            match text[at..].chars().next() {
                Some(c) => at + c.len_utf8(),
                None => break,
            }
        };
    }

    count
}

/// Returns a [`Finding`] when the declaration's simple name occurs at most
/// once in `text`.
pub fn classify(file_path: &str, import: &ImportDeclaration, text: &str) -> Option<Finding> {
    let occurrence_count = count_occurrences(text, &import.simple_name);
    trace!(
        "Import '{}' (simple name '{}') occurs {} times",
        import.raw_name, import.simple_name, occurrence_count
    );

    if occurrence_count > UNUSED_THRESHOLD {
        return None;
    }

    Some(Finding {
        file_path: file_path.to_string(),
        import_text: import.raw_name.clone(),
        occurrence_count,
    })
}

fn scan_source(file_path: &str, text: &str) -> Vec<Finding> {
    extract_imports(text)
        .iter()
        .filter_map(|import| classify(file_path, import, text))
        .inspect(|finding| {
            debug!("Likely unused: {} -> {}", finding.file_path, finding.import_text);
        })
        .collect()
}

pub fn run_unused_import_check(cfg: Config) -> Result<CheckResult> {
    info!("Starting unused import check");
    info!("Using root directory: {}", cfg.root.display());

    debug!("Discovering files with extension: {:?}", cfg.extension);
    let files = discover_files(&cfg.root, &cfg.extension)?.collect::<Result<Vec<_>>>()?;
    info!("Found {} source files", files.len());

    // Indexed collect keeps discovery order regardless of which thread finishes first
    let per_file: Vec<Option<Vec<Finding>>> = files
        .par_iter()
        .map(|file| {
            let thread_id = thread::current().id();
            debug!("Thread {:?} processing: {}", thread_id, file.display());

            let text = match read_source(file) {
                Ok(text) => text,
                Err(e) if cfg.skip_unreadable => {
                    warn!("Skipping unreadable file {}: {:#}", file.display(), e);
                    return Ok(None);
                }
                Err(e) => return Err(e),
            };

            let file_path = file.display().to_string();
            Ok(Some(scan_source(&file_path, &text)))
        })
        .collect::<Result<_>>()?;

    let files_analyzed = per_file.iter().filter(|f| f.is_some()).count();
    let findings: Vec<Finding> = per_file.into_iter().flatten().flatten().collect();

    info!(
        "Unused import check complete. Found {} likely-unused imports in {} files",
        findings.len(),
        files_analyzed
    );

    Ok(CheckResult { findings, files_analyzed })
}
