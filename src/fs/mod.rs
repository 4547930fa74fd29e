//! Filesystem utilities for tfkey.
//!
//! The output file is opened with create-or-truncate semantics and written in
//! place. An existing file keeps its permissions, and a symlink is written
//! through to its target. No other file is touched.

use crate::error::{Result, TfkeyError};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Create `path` (or truncate it if present) and write `content` to it.
///
/// The handle is closed before returning on every path. A failure after the
/// file was created leaves it truncated or partially written.
pub fn create_and_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    let mut file = File::create(path).map_err(|source| TfkeyError::FileCreateError {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(content.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| TfkeyError::FileWriteError {
            path: path.to_path_buf(),
            source,
        })
}
