use anyhow::{Context, Result, bail};
use ignore::{Walk, WalkBuilder};
use log::{debug, trace};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Lazy iterator over the source files below a root directory.
///
/// Each call to [`discover_files`] starts a fresh walk, so the sequence can be
/// restarted by discovering again.
pub struct SourceFiles {
    walker: Walk,
    suffix: String,
}

impl std::fmt::Debug for SourceFiles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFiles").field("suffix", &self.suffix).finish_non_exhaustive()
    }
}

impl Iterator for SourceFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        for res in self.walker.by_ref() {
            let dent = match res {
                Ok(dent) => dent,
                Err(e) => {
                    return Some(Err(anyhow::Error::new(e).context("Failed to walk source tree")));
                }
            };
            let p = dent.path();
            if !p.is_file() {
                continue;
            }

            if p.file_name().is_some_and(|name| name.to_string_lossy().ends_with(&self.suffix)) {
                trace!("Found source file: {}", p.display());
                return Some(Ok(p.to_path_buf()));
            }
        }
        None
    }
}

/// Walks `root` recursively and yields every file whose name ends with
/// `.<extension>`.
///
/// Hidden directories and ignore files are not honoured: every subdirectory is
/// visited. Entries are sorted by file name within each directory so repeated
/// runs see the same order.
///
/// # Errors
/// Fails up front if `root` is missing, not a directory, or cannot be listed.
/// Errors hit later in the walk are yielded as `Err` items.
pub fn discover_files(root: &Path, extension: &str) -> Result<SourceFiles> {
    debug!("Discovering source files under {}", root.display());
    let meta = fs::metadata(root)
        .with_context(|| format!("Failed to access root directory {}", root.display()))?;
    if !meta.is_dir() {
        bail!("Root {} is not a directory", root.display());
    }
    fs::read_dir(root)
        .with_context(|| format!("Failed to read root directory {}", root.display()))?;

    let suffix = format!(".{}", extension.trim_start_matches('.'));
    debug!("Matching files with suffix '{}'", suffix);

    let walker =
        WalkBuilder::new(root).standard_filters(false).sort_by_file_name(|a, b| a.cmp(b)).build();

    Ok(SourceFiles { walker, suffix })
}
