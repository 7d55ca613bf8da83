use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::Arguments;
use super::exit_status::ExitStatus;
use crate::error::ScanError;
use crate::extractor::extract_from_source;
use crate::results::ExtractionResult;
use crate::scanner::{relative_key, scan_python_files};

/// Run one scan: walk the root, extract literals from every parsable file,
/// and write the JSON mapping to stdout or the configured output file.
///
/// Read and parse failures skip the file and keep the run going; only a bad
/// root, an unwritable output path, or a serialization failure abort.
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let scan = scan_python_files(&args.root)?;

    let mut result = ExtractionResult::new();
    let mut skipped_files = scan.skipped_count;

    for path in &scan.files {
        let rel = relative_key(path, &args.root);

        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                skipped_files += 1;
                warn(
                    args.verbose,
                    &ScanError::FileRead {
                        path: path.clone(),
                        source: err,
                    },
                );
                continue;
            }
        };

        let literals = match extract_from_source(&source, &rel) {
            Ok(literals) => literals,
            Err(err) => {
                skipped_files += 1;
                warn(args.verbose, &err);
                continue;
            }
        };

        if literals.is_empty() && !args.include_empty {
            continue;
        }
        result.insert(rel, literals);
    }

    let json = result.to_pretty_json()?;
    match &args.output {
        Some(path) => fs::write(path, format!("{json}\n"))
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => println!("{json}"),
    }

    if args.verbose {
        eprintln!(
            "Extracted literals from {} file(s), skipped {}",
            result.len(),
            skipped_files
        );
    }

    Ok(ExitStatus::Success)
}

fn warn(verbose: bool, err: &ScanError) {
    if verbose {
        eprintln!("{} {}", "warning:".bold().yellow(), err);
    }
}
