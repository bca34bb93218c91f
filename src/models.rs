//! Data structures produced while planning a bundle.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::asset_paths::is_test_file;
use crate::platform::Platform;

/// One file to embed in the bundle and the directory it is placed in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AssetEntry {
  /// Path of the file on disk, joined onto the chosen source root.
  pub source: PathBuf,
  /// Destination directory inside the bundle, always rooted at the output root.
  pub destination: String,
  /// Path of the file relative to the source root, using `/` separators.
  #[serde(skip)]
  pub relative_path: String,
}

/// Set of `(source, destination)` pairs handed to the bundler.
///
/// Entries are kept ordered so that repeated runs over the same tree produce identical
/// output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AssetMapping {
  entries: BTreeSet<AssetEntry>,
}

impl AssetMapping {
  /// Create an empty mapping.
  pub fn new() -> Self {
    Self::default()
  }

  /// Add an entry, returning `false` when it was already present.
  pub fn insert(&mut self, entry: AssetEntry) -> bool {
    self.entries.insert(entry)
  }

  /// Number of mapped files.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether no files were mapped.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Iterate over the entries in source-path order.
  pub fn iter(&self) -> impl Iterator<Item = &AssetEntry> {
    self.entries.iter()
  }

  /// Whether the mapping places `source` in `destination`.
  pub fn contains(&self, source: &Path, destination: &str) -> bool {
    self
      .entries
      .iter()
      .any(|entry| entry.source == source && entry.destination == destination)
  }

  /// Borrowed `(source, destination)` pairs in the shape the bundler expects.
  pub fn pairs(&self) -> Vec<(&Path, &str)> {
    self
      .entries
      .iter()
      .map(|entry| (entry.source.as_path(), entry.destination.as_str()))
      .collect()
  }

  /// Copy of the mapping without entries that look like test files.
  pub fn without_test_files(&self) -> Self {
    self
      .entries
      .iter()
      .filter(|entry| !is_test_file(Path::new(&entry.relative_path)))
      .cloned()
      .collect()
  }
}

impl FromIterator<AssetEntry> for AssetMapping {
  fn from_iter<T: IntoIterator<Item = AssetEntry>>(iter: T) -> Self {
    Self {
      entries: iter.into_iter().collect(),
    }
  }
}

impl<'a> IntoIterator for &'a AssetMapping {
  type Item = &'a AssetEntry;
  type IntoIter = std::collections::btree_set::Iter<'a, AssetEntry>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.iter()
  }
}

/// Result of a collector pass: the chosen root (if any) and its mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetCollection {
  /// First candidate root that existed, or `None` when no candidate did.
  pub root: Option<PathBuf>,
  /// Files discovered beneath the root.
  pub mapping: AssetMapping,
}

/// Everything the bundler needs for one target platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlePlan {
  /// Platform category the plan targets.
  pub platform: Platform,
  /// File name of the produced artifact.
  pub artifact_name: String,
  /// Icon to embed, when one was found.
  pub icon: Option<PathBuf>,
  /// Asset root the mapping was collected from.
  pub asset_root: Option<PathBuf>,
  /// Files to embed and their destinations.
  pub assets: AssetMapping,
  /// Paths whose modification should invalidate the plan.
  pub rerun_paths: Vec<PathBuf>,
  /// Non-fatal findings, such as a missing icon.
  pub warnings: Vec<String>,
}

impl BundlePlan {
  /// Render the plan as prettified JSON.
  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }

  /// Lines understood by Cargo when printed from a build script.
  pub fn cargo_directives(&self) -> Vec<String> {
    let rerun = self
      .rerun_paths
      .iter()
      .map(|path| format!("cargo:rerun-if-changed={}", path.display()));
    let warnings = self
      .warnings
      .iter()
      .map(|warning| format!("cargo:warning={warning}"));
    rerun.chain(warnings).collect()
  }
}
