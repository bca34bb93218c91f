//! Project configuration loader for overriding the bundle layout.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::project::{BundleLayout, DEFAULT_OUTPUT_ROOT};

/// File name searched for in the project directory.
pub const DEFAULT_CONFIG_FILE: &str = "bundle.config.json";

/// Discoverable project configuration describing candidate roots and naming.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Application name the artifact is named after.
    pub app_name: String,
    /// Directory name assets are mapped under inside the bundle.
    pub output_root: String,
    /// Candidate asset directories relative to the project directory.
    pub asset_roots: Vec<String>,
    /// Candidate icon directories relative to the project directory.
    pub icon_roots: Vec<String>,
    /// Whether test files are dropped from the collected assets.
    pub exclude_tests: bool,
    /// Windows icon file name.
    pub windows_icon: String,
    /// macOS icon file name.
    pub macos_icon: String,
    /// Linux icon file name.
    pub linux_icon: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        let dev_roots: Vec<String> = ["src/assets", "assets", "./src/assets", "./assets"]
            .into_iter()
            .map(String::from)
            .collect();

        Self {
            app_name: "app".into(),
            output_root: DEFAULT_OUTPUT_ROOT.into(),
            asset_roots: dev_roots.clone(),
            icon_roots: dev_roots,
            exclude_tests: true,
            windows_icon: "icon.ico".into(),
            macos_icon: "icon.icns".into(),
            linux_icon: "icon.png".into(),
        }
    }
}

/// Errors that can occur while loading the configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// Failed to parse the JSON configuration.
    Parse {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        source: serde_json::Error,
    },
}

impl ProjectConfig {
    /// Load configuration from `project_dir`, falling back to defaults.
    ///
    /// Unreadable or malformed files are logged and ignored so build scripts keep working
    /// with the default layout.
    pub fn discover(project_dir: &Path) -> Self {
        let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
        match Self::load_from_path(&candidate) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default bundle layout");
                Self::default()
            }
        }
    }

    /// Read configuration from a specific JSON file. A missing file yields the defaults.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no configuration at {}", path.display());
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            source: err,
        })
    }

    /// Convert the configuration into a layout description.
    pub fn into_layout(self) -> BundleLayout {
        BundleLayout {
            app_name: self.app_name,
            output_root: self.output_root,
            asset_roots: self.asset_roots,
            icon_roots: self.icon_roots,
            exclude_tests: self.exclude_tests,
            windows_icon: self.windows_icon,
            macos_icon: self.macos_icon,
            linux_icon: self.linux_icon,
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_returns_defaults_without_file() {
        let temp = tempdir().expect("failed to create temp dir");
        let layout = ProjectConfig::discover(temp.path()).into_layout();
        assert_eq!(layout, BundleLayout::default());
    }

    #[test]
    fn discover_ignores_malformed_file() {
        let temp = tempdir().expect("failed to create temp dir");
        fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "{ not json").unwrap();

        let config = ProjectConfig::discover(temp.path());
        assert_eq!(config.app_name, "app");
    }

    #[test]
    fn load_from_path_reports_parse_errors() {
        let temp = tempdir().expect("failed to create temp dir");
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[1, 2").unwrap();

        let err = ProjectConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn partial_files_keep_remaining_defaults() {
        let temp = tempdir().expect("failed to create temp dir");
        fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            r#"{"appName": "Estimator", "assetRoots": ["resources"], "excludeTests": false}"#,
        )
        .unwrap();

        let layout = ProjectConfig::discover(temp.path()).into_layout();
        assert_eq!(layout.app_name, "Estimator");
        assert_eq!(layout.asset_roots, vec!["resources".to_string()]);
        assert!(!layout.exclude_tests);
        assert_eq!(layout.output_root, "assets");
        assert_eq!(layout.icon_roots.len(), 4);
    }
}
