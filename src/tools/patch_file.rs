use crate::css_blocks::{REPLACEMENT, SEARCH};
use crate::error::PatchError;
use crate::types::Outcome;
use std::path::Path;

use super::{read_file, write_file};

/// Replaces every occurrence of the search block in `content`.
///
/// Returns `None` when the block is absent, otherwise the new content and
/// the number of occurrences replaced.
pub fn apply_patch(content: &str) -> Option<(String, usize)> {
    let occurrences = content.matches(SEARCH).count();
    if occurrences == 0 {
        return None;
    }

    Some((content.replace(SEARCH, REPLACEMENT), occurrences))
}

/// Patches the file at `path` in place.
///
/// # Arguments
///
/// * `path` - An existing, readable, writable text file.
///
/// The file is only written when the search block was found.
pub fn patch_file(path: &Path) -> Result<Outcome, PatchError> {
    let content = read_file(path)?;

    let Some((new_content, occurrences)) = apply_patch(&content) else {
        tracing::debug!(path = %path.display(), "search block not present");
        return Ok(Outcome::NotFound {
            path: path.to_path_buf(),
        });
    };

    tracing::debug!(occurrences, "search block found");
    write_file(path, &new_content)?;
    tracing::info!(path = %path.display(), occurrences, "file patched");

    Ok(Outcome::Patched {
        path: path.to_path_buf(),
        occurrences,
    })
}
