//! Platform icon lookup across candidate directories.

use std::path::{Path, PathBuf};

use crate::asset_paths::first_existing_file;
use crate::platform::Platform;

/// Find the icon for `platform` using its default icon file name.
///
/// Each root is combined with the platform's fixed file name and the first path that exists
/// is returned. File contents are never inspected.
pub fn find_icon<I, P>(platform: Platform, candidate_roots: I) -> Option<PathBuf>
where
  I: IntoIterator<Item = P>,
  P: AsRef<Path>,
{
  find_icon_named(platform.icon_file_name(), candidate_roots)
}

/// Find the first `root/file_name` that exists.
pub fn find_icon_named<I, P>(file_name: &str, candidate_roots: I) -> Option<PathBuf>
where
  I: IntoIterator<Item = P>,
  P: AsRef<Path>,
{
  first_existing_file(icon_candidates(file_name, candidate_roots))
}

/// Candidate icon paths in lookup order.
pub fn icon_candidates<I, P>(file_name: &str, candidate_roots: I) -> Vec<PathBuf>
where
  I: IntoIterator<Item = P>,
  P: AsRef<Path>,
{
  candidate_roots
    .into_iter()
    .map(|root| root.as_ref().join(file_name))
    .collect()
}
