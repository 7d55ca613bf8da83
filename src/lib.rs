//! Pylit - string literal extractor for Python source trees
//!
//! Pylit is a CLI tool and library that scans a directory of Python files,
//! parses each file into a syntax tree, and collects every string literal
//! into a per-file list. The result is a single JSON object mapping relative
//! file paths to the literals found in them.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and run loop)
//! - `error`: Error taxonomy for the scan pipeline
//! - `extractor`: AST traversal that collects string literals
//! - `parser`: Python source parsing
//! - `results`: Output mapping and JSON serialization
//! - `scanner`: Recursive `.py` file discovery

pub mod cli;
pub mod error;
pub mod extractor;
pub mod parser;
pub mod results;
pub mod scanner;
