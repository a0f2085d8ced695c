//! Input handling: glob expansion and file/stdin reading

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::CliError;

/// Expand glob patterns into an ordered, de-duplicated file list
///
/// A pattern that matches nothing is an error: silently skipping inputs
/// makes a zero-replacement run indistinguishable from a typo.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let entries =
            glob::glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        let mut matched = false;
        for entry in entries {
            let path = entry.with_context(|| format!("reading glob entry for '{pattern}'"))?;
            if path.is_file() {
                matched = true;
                files.push(path);
            }
        }
        if !matched {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Read one file to a string
pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Read all of stdin
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;
    Ok(buffer)
}
