use serde::Serialize;

/// An import whose simple name occurs at most once in its file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Path of the file as discovered (root joined with the relative path)
    pub file_path: String,
    pub import_text: String,
    pub occurrence_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub findings: Vec<Finding>,
    pub files_analyzed: usize,
}
