//! Issue dump input/output.
//!
//! A dump is either a JSON array of issue objects (what the GitHub REST API
//! returns) or JSONL with one issue per line. The format is sniffed from the
//! first non-blank character.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use issue_cache_lib::IssueRecord;

use crate::error::{CacheError, Result};

/// Where the dump is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpSource {
    Stdin,
    File(PathBuf),
}

impl DumpSource {
    /// `None` and `-` mean stdin.
    #[must_use]
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => Self::File(p.to_path_buf()),
            _ => Self::Stdin,
        }
    }
}

/// Read and parse a dump.
///
/// # Errors
///
/// Returns `FileNotFound` if the file is missing, `Io` on read failure, or
/// `DumpParse` if the content is not a valid dump.
pub fn read_dump(source: &DumpSource) -> Result<Vec<IssueRecord>> {
    let text = match source {
        DumpSource::Stdin => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
        DumpSource::File(path) => fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                CacheError::FileNotFound(path.clone())
            } else {
                CacheError::Io(e)
            }
        })?,
    };
    let issues = parse_dump(&text)?;
    tracing::debug!(count = issues.len(), ?source, "Loaded issue dump");
    Ok(issues)
}

/// Parse dump text.
///
/// # Errors
///
/// Returns `DumpParse` with the 1-based line of the offending input.
pub fn parse_dump(text: &str) -> Result<Vec<IssueRecord>> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text).map_err(|e| CacheError::DumpParse {
            line: e.line(),
            reason: e.to_string(),
        });
    }

    let mut issues = Vec::new();
    for (line_num, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let issue: IssueRecord =
            serde_json::from_str(trimmed).map_err(|e| CacheError::DumpParse {
                line: line_num + 1,
                reason: e.to_string(),
            })?;
        issues.push(issue);
    }
    Ok(issues)
}

/// Render issues as a JSON array.
///
/// # Errors
///
/// Returns `Json` if serialization fails.
pub fn render_dump(issues: &[IssueRecord], pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(issues)?
    } else {
        serde_json::to_string(issues)?
    };
    Ok(rendered)
}
