//! Run-time lookup of assets, both from an unpacked bundle and from a development checkout.

use std::path::{Path, PathBuf};

use crate::asset_paths::first_existing_file;
use crate::collector::{CollectError, collect_assets_into};
use crate::project::BundleLayout;

/// Locate `relative` inside the bundle directory or, failing that, the development roots.
///
/// `bundle_dir` is the directory the executable unpacked itself into, if any. Development
/// roots are resolved against `base_dir`, so the returned path is absolute whenever
/// `base_dir` is.
pub fn resolve_asset(
    bundle_dir: Option<&Path>,
    layout: &BundleLayout,
    base_dir: &Path,
    relative: &str,
) -> Option<PathBuf> {
    if let Some(bundle_dir) = bundle_dir {
        let bundled = bundle_dir.join(&layout.output_root).join(relative);
        if bundled.is_file() {
            return Some(bundled);
        }
        log::debug!("{} not present in bundle, trying development roots", relative);
    }

    let candidates = layout
        .asset_root_paths(base_dir)
        .into_iter()
        .map(|root| root.join(relative));
    let found = first_existing_file(candidates);
    if found.is_none() {
        log::warn!("asset '{}' not found", relative);
    }
    found
}

/// Like [`resolve_asset`], but hands back `relative` unchanged when nothing is found.
pub fn resolve_asset_or_relative(
    bundle_dir: Option<&Path>,
    layout: &BundleLayout,
    base_dir: &Path,
    relative: &str,
) -> PathBuf {
    resolve_asset(bundle_dir, layout, base_dir, relative).unwrap_or_else(|| PathBuf::from(relative))
}

/// List every available asset as a `/`-separated path relative to its root, sorted.
///
/// With a bundle directory only the bundled assets are listed; otherwise the first existing
/// development root is walked.
pub fn list_available_assets(
    bundle_dir: Option<&Path>,
    layout: &BundleLayout,
    base_dir: &Path,
) -> Result<Vec<String>, CollectError> {
    let roots = match bundle_dir {
        Some(bundle_dir) => vec![bundle_dir.join(&layout.output_root)],
        None => layout.asset_root_paths(base_dir),
    };

    let collection = collect_assets_into(&layout.output_root, &roots)?;
    let mut relatives: Vec<String> = collection
        .mapping
        .iter()
        .map(|entry| entry.relative_path.clone())
        .collect();
    relatives.sort();
    Ok(relatives)
}
