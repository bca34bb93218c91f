//! Bundle planner combining asset collection, icon lookup and artifact naming.

use std::path::Path;

use crate::collector::{CollectError, collect_assets_into};
use crate::icon::find_icon_named;
use crate::models::{AssetCollection, BundlePlan};
use crate::platform::Platform;
use crate::project::BundleLayout;

/// High-level helper producing the plan handed to the external bundler.
pub struct BundlePlanner<'a> {
  layout: &'a BundleLayout,
  base_dir: &'a Path,
}

impl<'a> BundlePlanner<'a> {
  /// Create a planner resolving relative candidate roots against `base_dir`.
  pub fn new(layout: &'a BundleLayout, base_dir: &'a Path) -> Self {
    Self { layout, base_dir }
  }

  /// Collect assets, resolve the icon and name the artifact for `platform`.
  ///
  /// A missing asset root or icon is recorded as a warning; only a failing directory walk
  /// aborts the plan.
  pub fn plan(&self, platform: Platform) -> Result<BundlePlan, CollectError> {
    let layout = self.layout;
    let mut warnings = Vec::new();
    let mut rerun_paths = Vec::new();

    let AssetCollection { root, mapping } = collect_assets_into(
      &layout.output_root,
      layout.asset_root_paths(self.base_dir),
    )?;

    match &root {
      Some(root) => rerun_paths.push(root.clone()),
      None => warnings.push(format!(
        "no asset directory found (tried {})",
        layout.asset_roots.join(", ")
      )),
    }

    let assets = if layout.exclude_tests {
      let filtered = mapping.without_test_files();
      let dropped = mapping.len() - filtered.len();
      if dropped > 0 {
        log::debug!("excluded {dropped} test file(s) from the bundle");
      }
      filtered
    } else {
      mapping
    };

    let icon_name = layout.icon_file_name(platform);
    let icon = find_icon_named(icon_name, layout.icon_root_paths(self.base_dir));
    match &icon {
      Some(icon) => rerun_paths.push(icon.clone()),
      None => warnings.push(format!("no {icon_name} found for {platform}")),
    }

    for warning in &warnings {
      log::warn!("{warning}");
    }

    Ok(BundlePlan {
      platform,
      artifact_name: platform.artifact_name(&layout.app_name),
      icon,
      asset_root: root,
      assets,
      rerun_paths,
      warnings,
    })
  }

  /// Plan every platform category, in [`Platform::ALL`] order.
  pub fn plan_all(&self) -> Result<Vec<BundlePlan>, CollectError> {
    Platform::ALL
      .iter()
      .map(|platform| self.plan(*platform))
      .collect()
  }
}
