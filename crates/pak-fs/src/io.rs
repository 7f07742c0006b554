//! Plain file I/O
//!
//! Parent directories are never created here; a missing directory is an error.

use crate::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Create or truncate `path` and write `content` to it.
///
/// No locking and no temp-file rename: concurrent writers to the same path
/// race and the last one wins.
pub fn write_bytes(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    file.write_all(content).map_err(|e| Error::io(path, e))?;

    // Flush to disk
    file.sync_all().map_err(|e| Error::io(path, e))?;

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
