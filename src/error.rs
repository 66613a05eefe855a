//! Error taxonomy shared by every pipeline stage.

use std::path::Path;

/// Errors raised by the batch job.
///
/// Each stage fails fast with one of these; the runner turns it into an
/// error-shaped metrics record.
#[derive(thiserror::Error, Debug)]
pub enum JobError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

pub type JobResult<T> = std::result::Result<T, JobError>;

impl JobError {
    /// Stable identifier written as `error_type` in the metrics record.
    pub fn kind(&self) -> &'static str {
        match self {
            JobError::NotFound(_) => "not_found",
            JobError::Format(_) => "format",
            JobError::Schema(_) => "schema",
            JobError::Config(_) => "config",
            JobError::Io(_) => "io",
        }
    }

    pub(crate) fn io(action: &str, path: &Path, err: std::io::Error) -> Self {
        JobError::Io(format!("Failed to {} {}: {}", action, path.display(), err))
    }
}

/// Map a failure to open an input file onto the taxonomy.
pub(crate) fn open_error(what: &str, path: &Path, err: std::io::Error) -> JobError {
    match err.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
            JobError::NotFound(format!("{} file not readable: {} ({})", what, path.display(), err))
        }
        _ => JobError::io("open", path, err),
    }
}
