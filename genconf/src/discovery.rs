//! Enumeration of fragment files beneath a configuration root.
//!
//! Entries are visited in file-name order at every level so the discovery
//! order, which decides between fully tied overrides, does not depend on the
//! platform's directory iteration order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{GenconfError, GenconfResult};

/// Lists every non-directory entry under `root`, recursively.
///
/// When `follow_links` is `false`, symbolic links are reported as entries
/// rather than traversed.
///
/// # Errors
///
/// Returns [`GenconfError::Discovery`] when `root` cannot be read or any
/// directory beneath it fails to list.
pub fn discover_fragments(root: &Path, follow_links: bool) -> GenconfResult<Vec<PathBuf>> {
    WalkDir::new(root)
        .follow_links(follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(found) if found.file_type().is_dir() => None,
            Ok(found) => Some(Ok(found.into_path())),
            Err(err) => Some(Err(GenconfError::discovery(root, err))),
        })
        .collect()
}
