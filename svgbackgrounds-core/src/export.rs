use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::models::PatternRecord;

/// Pretty-printed JSON array, two-space indented, no trailing newline.
pub fn to_json(records: &[PatternRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Replace the file at `path` with `records`.
///
/// The document is serialized in full before the file is touched. The
/// parent directory must already exist.
pub fn write_records(path: &Path, records: &[PatternRecord]) -> Result<()> {
    let json = to_json(records)?;
    fs::write(path, json).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(count = records.len(), path = %path.display(), "wrote pattern catalog");
    Ok(())
}
