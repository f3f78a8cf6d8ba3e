use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::upload::types::EXPORT_FILE_NAME;

/// Writes the spreadsheet under its fixed name inside `dir` and returns
/// the final path.
///
/// The bytes are staged in a temp file in the same directory and moved
/// over the target in one rename; a failed write removes the staging
/// file and leaves any previous export untouched.
pub fn save_artifact(bytes: &[u8], dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(bytes)?;
    staged.flush()?;

    let target = dir.join(EXPORT_FILE_NAME);
    staged.persist(&target).map_err(|e| e.error)?;

    debug!(path = %target.display(), bytes = bytes.len(), "saved export");
    Ok(target)
}
