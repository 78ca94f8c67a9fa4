use crate::error::PatchError;
use std::fs;
use std::io;
use std::path::Path;

/// Reads the whole file and decodes it as UTF-8.
pub fn read_file(path: &Path) -> Result<String, PatchError> {
    let metadata = fs::metadata(path).map_err(|e| PatchError::file_access(path, e))?;
    if !metadata.is_file() {
        return Err(PatchError::file_access(
            path,
            io::Error::other("not a regular file"),
        ));
    }

    let bytes = fs::read(path).map_err(|e| PatchError::file_access(path, e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read file");

    String::from_utf8(bytes).map_err(|e| PatchError::decoding(path, e))
}
