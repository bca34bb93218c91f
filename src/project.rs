//! Layout description shared by the collector, the icon resolver and the runtime helpers.

use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::platform::Platform;

/// Logical directory every collected asset is placed under inside the bundle.
pub const DEFAULT_OUTPUT_ROOT: &str = "assets";

/// Filesystem layout and naming rules used when planning a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
  /// Application name used to derive the artifact name.
  pub app_name: String,
  /// Directory name assets are mapped under inside the bundle.
  pub output_root: String,
  /// Candidate asset directories, tried in order.
  pub asset_roots: Vec<String>,
  /// Candidate directories holding the platform icon, tried in order.
  pub icon_roots: Vec<String>,
  /// Drop test files from the collected assets before handing them to the bundler.
  pub exclude_tests: bool,
  /// Icon file name used for Windows builds.
  pub windows_icon: String,
  /// Icon file name used for macOS builds.
  pub macos_icon: String,
  /// Icon file name used for Linux builds.
  pub linux_icon: String,
}

impl Default for BundleLayout {
  fn default() -> Self {
    ProjectConfig::default().into_layout()
  }
}

impl BundleLayout {
  /// Icon file name configured for `platform`.
  pub fn icon_file_name(&self, platform: Platform) -> &str {
    match platform {
      Platform::Windows => &self.windows_icon,
      Platform::MacOs => &self.macos_icon,
      Platform::Linux => &self.linux_icon,
    }
  }

  /// Asset candidate roots resolved against `base_dir`, preserving their order.
  pub fn asset_root_paths(&self, base_dir: &Path) -> Vec<PathBuf> {
    resolve_roots(base_dir, &self.asset_roots)
  }

  /// Icon candidate roots resolved against `base_dir`, preserving their order.
  pub fn icon_root_paths(&self, base_dir: &Path) -> Vec<PathBuf> {
    resolve_roots(base_dir, &self.icon_roots)
  }
}

fn resolve_roots(base_dir: &Path, roots: &[String]) -> Vec<PathBuf> {
  roots
    .iter()
    .map(|root| {
      let path = Path::new(root);
      if path.is_absolute() {
        path.to_path_buf()
      } else {
        base_dir.join(path)
      }
    })
    .collect()
}
