use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the scan pipeline.
///
/// Only `DirectoryNotFound` and `Serialize` abort a run. `FileRead` and
/// `Parse` are recovered at the call site: the offending file is skipped
/// and the scan continues.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root does not exist or is not a directory. Fatal.
    #[error("not a directory: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// A discovered file could not be read (permissions, deleted mid-scan,
    /// not valid UTF-8). The file is skipped.
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not syntactically valid Python. The file is skipped.
    #[error("syntax error in {path}: {message}")]
    Parse { path: String, message: String },

    /// The result mapping could not be encoded as JSON. Fatal, but not
    /// expected in practice: literal text is always representable.
    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}
