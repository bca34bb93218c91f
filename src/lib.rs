#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod builder;
pub mod collector;
pub mod config;
pub mod icon;
pub mod models;
pub mod platform;
pub mod project;
pub mod runtime;

pub use builder::BundlePlanner;
pub use collector::{CollectError, collect_assets, collect_assets_into};
pub use config::ProjectConfig;
pub use icon::find_icon;
pub use models::{AssetCollection, AssetEntry, AssetMapping, BundlePlan};
pub use platform::Platform;
pub use project::BundleLayout;
pub use runtime::{list_available_assets, resolve_asset, resolve_asset_or_relative};
