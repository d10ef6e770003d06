//! Reading and writing the generated file.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::io::config::write_atomic;

static STAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<\?php\s+//\[STAMP\]\s+([0-9a-f]+)").unwrap());

/// Extract the fingerprint from the first line of a generated file.
pub fn parse_stamp(contents: &str) -> Option<String> {
    let first_line = contents.lines().next()?;
    STAMP_RE
        .captures(first_line)
        .and_then(|caps| caps.get(1))
        .map(|stamp| stamp.as_str().to_string())
}

/// Fingerprint stored in the file at `path`, or `None` if the file is missing
/// or carries no stamp.
pub fn read_stamp(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let stamp = parse_stamp(&contents);
    debug!(path = %path.display(), stamp = ?stamp, "read stored stamp");
    Ok(stamp)
}

/// Write the generated source, creating parent directories as needed.
pub fn write_artifact(path: &Path, source: &str) -> Result<()> {
    let mut contents = source.to_string();
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    write_atomic(path, &contents)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote generated file");
    Ok(())
}
