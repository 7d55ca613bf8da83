use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ScanError;

/// Result of scanning a directory tree for Python files.
#[derive(Debug)]
pub struct ScanResult {
    /// Discovered `.py` files, in walk order.
    pub files: Vec<PathBuf>,
    /// Directory entries that could not be accessed.
    pub skipped_count: usize,
}

/// Recursively collect all `.py` files under `root`.
///
/// Entries are sorted by file name within each directory level so the walk
/// order (and therefore the output key order) is reproducible across runs.
/// Unreadable entries are counted and skipped; a missing or non-directory
/// root is fatal.
pub fn scan_python_files(root: &Path) -> Result<ScanResult, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::DirectoryNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(root).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if entry.file_type().is_file() && is_python_file(path) {
                    files.push(entry.into_path());
                }
            }
            Err(_) => skipped_count += 1,
        }
    }

    Ok(ScanResult {
        files,
        skipped_count,
    })
}

/// Path relative to the scan root, normalized to `/` separators so JSON
/// keys are identical across platforms.
pub fn relative_key(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_python_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("py"))
}
