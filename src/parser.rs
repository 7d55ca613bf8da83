use rustpython_parser::{Parse, ast};

use crate::error::ScanError;

/// Parse Python source code into a statement list.
///
/// `file_path` is only used in the error message; no filesystem access
/// happens here.
pub fn parse_python_source(source: &str, file_path: &str) -> Result<ast::Suite, ScanError> {
    ast::Suite::parse(source, file_path).map_err(|e| ScanError::Parse {
        path: file_path.to_string(),
        message: e.to_string(),
    })
}
