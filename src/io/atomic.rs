use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::Result;

/// Writes `contents` to `path` through a temporary file in the same
/// directory, renamed into place once fully flushed. A failure at any point
/// leaves any previous file at `path` untouched.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staging = NamedTempFile::new_in(directory)?;
    staging.write_all(contents)?;
    staging.flush()?;
    staging.persist(path).map_err(|err| err.error)?;

    debug!(output = %path.display(), bytes = contents.len(), "output persisted");
    Ok(())
}
