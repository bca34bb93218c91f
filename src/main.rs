//! bundle-assets CLI - inspect what a frozen application bundle will contain.
//!
//! ## Example Usage
//!
//! ```bash
//! # Print the JSON plan for the current platform
//! bundle-assets plan
//!
//! # Emit cargo directives from a build script
//! bundle-assets plan --platform windows --cargo
//!
//! # Where would `images/logo.png` be loaded from?
//! bundle-assets resolve images/logo.png --bundle-dir /tmp/_MEI1234
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use bundle_assets::icon::find_icon_named;
use bundle_assets::{
  BundleLayout, BundlePlanner, Platform, ProjectConfig, list_available_assets,
  resolve_asset_or_relative,
};

/// Collect assets, icon and artifact names for desktop application bundles
#[derive(Parser)]
#[command(name = "bundle-assets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Collect assets, icon and artifact names for desktop bundles", long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Project directory candidate roots are resolved against
  #[arg(short, long, global = true, default_value = ".")]
  base: PathBuf,

  /// Configuration file path (defaults to bundle.config.json in the project directory)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Print the bundle plan
  Plan {
    /// Target platform (windows, macos, linux); defaults to the host
    #[arg(short, long)]
    platform: Option<Platform>,

    /// Plan every platform instead of a single one
    #[arg(long, conflicts_with = "platform")]
    all: bool,

    /// Print cargo build-script directives instead of JSON
    #[arg(long)]
    cargo: bool,
  },

  /// List available assets
  List {
    /// Directory the bundled executable unpacked itself into
    #[arg(long)]
    bundle_dir: Option<PathBuf>,
  },

  /// Print the icon path for a platform
  Icon {
    /// Target platform; defaults to the host
    #[arg(short, long)]
    platform: Option<Platform>,
  },

  /// Resolve an asset name to a path on disk
  Resolve {
    /// Asset path relative to the assets directory
    #[arg(value_name = "NAME")]
    name: String,

    /// Directory the bundled executable unpacked itself into
    #[arg(long)]
    bundle_dir: Option<PathBuf>,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
    .init();

  let base = absolute_base(&cli.base)?;
  let layout = load_layout(&base, cli.config.as_deref())?;

  match cli.command {
    Commands::Plan {
      platform,
      all,
      cargo,
    } => {
      let planner = BundlePlanner::new(&layout, &base);
      let plans = if all {
        planner.plan_all()?
      } else {
        vec![planner.plan(platform.unwrap_or_else(Platform::current))?]
      };

      if cargo {
        for plan in &plans {
          for directive in plan.cargo_directives() {
            println!("{directive}");
          }
        }
      } else if let [plan] = plans.as_slice() {
        println!("{}", plan.to_json()?);
      } else {
        println!("{}", serde_json::to_string_pretty(&plans)?);
      }
    }
    Commands::List { bundle_dir } => {
      let assets = list_available_assets(bundle_dir.as_deref(), &layout, &base)?;
      if assets.is_empty() {
        log::warn!("no assets available");
      }
      for asset in assets {
        println!("{asset}");
      }
    }
    Commands::Icon { platform } => {
      let platform = platform.unwrap_or_else(Platform::current);
      let icon_name = layout.icon_file_name(platform);
      let icon = find_icon_named(icon_name, layout.icon_root_paths(&base));
      match icon {
        Some(path) => println!("{}", path.display()),
        None => bail!("no {icon_name} found for {platform}"),
      }
    }
    Commands::Resolve { name, bundle_dir } => {
      let path = resolve_asset_or_relative(bundle_dir.as_deref(), &layout, &base, &name);
      println!("{}", path.display());
    }
  }

  Ok(())
}

fn absolute_base(base: &Path) -> Result<PathBuf> {
  if base.is_absolute() {
    return Ok(base.to_path_buf());
  }
  let cwd = std::env::current_dir().context("failed to read the current directory")?;
  Ok(cwd.join(base))
}

fn load_layout(base: &Path, config: Option<&Path>) -> Result<BundleLayout> {
  let config = match config {
    Some(path) => ProjectConfig::load_from_path(path)
      .with_context(|| format!("failed to load configuration from {}", path.display()))?,
    None => ProjectConfig::discover(base),
  };
  Ok(config.into_layout())
}
