use crate::error::PatchError;
use std::fs::{self, Metadata, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces the file's content in full.
///
/// The new content is written to a temp file next to the target and renamed over it,
/// so a failed write leaves the original untouched. Symlinks are resolved first and
/// the original permissions and owner are carried over. Files with extra hard links,
/// or whose owner cannot be carried over, are truncated and rewritten in place so the
/// inode stays the same.
pub fn write_file(path: &Path, content: &str) -> Result<(), PatchError> {
    let target = fs::canonicalize(path).map_err(|e| PatchError::file_access(path, e))?;
    let metadata = fs::metadata(&target).map_err(|e| PatchError::file_access(path, e))?;

    // rename would happily replace a read-only file
    if metadata.permissions().readonly() {
        return Err(PatchError::file_access(
            path,
            io::Error::new(io::ErrorKind::PermissionDenied, "file is read-only"),
        ));
    }

    if has_hard_links(&metadata) {
        tracing::debug!(path = %target.display(), "file has hard links, writing in place");
        return write_in_place(&target, content).map_err(|e| PatchError::write(path, e));
    }

    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| PatchError::write(path, e))?;
    tracing::debug!(tmp = %tmp.path().display(), "writing to temp file");

    if !carry_owner(&tmp, &metadata) {
        drop(tmp);
        return write_in_place(&target, content).map_err(|e| PatchError::write(path, e));
    }

    tmp.write_all(content.as_bytes())
        .map_err(|e| PatchError::write(path, e))?;
    tmp.as_file()
        .set_permissions(metadata.permissions())
        .map_err(|e| PatchError::write(path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| PatchError::write(path, e))?;

    persist_temp(tmp, &target)
}

/// Renames `tmp` over `target`. On failure the temp file is removed.
pub(crate) fn persist_temp(tmp: NamedTempFile, target: &Path) -> Result<(), PatchError> {
    // the returned PersistError owns the temp file; dropping it deletes it
    tmp.persist(target)
        .map(|_| ())
        .map_err(|e| PatchError::write(target, e.error))
}

fn write_in_place(target: &Path, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).truncate(true).open(target)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

#[cfg(unix)]
fn has_hard_links(metadata: &Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    metadata.nlink() > 1
}

#[cfg(not(unix))]
fn has_hard_links(_metadata: &Metadata) -> bool {
    false
}

#[cfg(unix)]
fn carry_owner(tmp: &NamedTempFile, metadata: &Metadata) -> bool {
    use std::os::unix::fs::{MetadataExt, fchown};

    match fchown(tmp.as_file(), Some(metadata.uid()), Some(metadata.gid())) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "cannot give temp file the original owner, writing in place");
            false
        }
    }
}

#[cfg(not(unix))]
fn carry_owner(_tmp: &NamedTempFile, _metadata: &Metadata) -> bool {
    true
}
