//! Static lookup table for the three platform categories a bundle can target.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Platform category the bundle is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
  /// Windows executables (`.exe`, `.ico` icons).
  Windows,
  /// macOS application bundles (`.app`, `.icns` icons).
  MacOs,
  /// Linux and every other Unix-like target.
  Linux,
}

impl Platform {
  /// Every supported category, in a stable order.
  pub const ALL: [Platform; 3] = [Platform::Windows, Platform::MacOs, Platform::Linux];

  /// Platform category of the compilation target.
  pub fn current() -> Self {
    if cfg!(target_os = "windows") {
      Platform::Windows
    } else if cfg!(target_os = "macos") {
      Platform::MacOs
    } else {
      Platform::Linux
    }
  }

  /// Default icon file name searched for on this platform.
  pub fn icon_file_name(self) -> &'static str {
    match self {
      Platform::Windows => "icon.ico",
      Platform::MacOs => "icon.icns",
      Platform::Linux => "icon.png",
    }
  }

  /// Name of the produced artifact for an application called `app_name`.
  pub fn artifact_name(self, app_name: &str) -> String {
    match self {
      Platform::Windows => format!("{app_name}.exe"),
      Platform::MacOs => format!("{app_name}.app"),
      Platform::Linux => app_name.to_string(),
    }
  }

  fn as_str(self) -> &'static str {
    match self {
      Platform::Windows => "windows",
      Platform::MacOs => "macos",
      Platform::Linux => "linux",
    }
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Error returned when a platform name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlatform(pub String);

impl fmt::Display for UnknownPlatform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "unknown platform '{}' (expected windows, macos or linux)",
      self.0
    )
  }
}

impl std::error::Error for UnknownPlatform {}

impl FromStr for Platform {
  type Err = UnknownPlatform;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value.trim().to_ascii_lowercase().as_str() {
      "windows" | "win" => Ok(Platform::Windows),
      "macos" | "mac" | "darwin" | "osx" => Ok(Platform::MacOs),
      "linux" => Ok(Platform::Linux),
      _ => Err(UnknownPlatform(value.to_string())),
    }
  }
}
