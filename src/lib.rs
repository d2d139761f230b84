#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_path;
pub mod exclusion;
pub mod generator;
pub mod layout;
pub mod manifest;
pub mod scanner;

pub use asset_path::{AssetPath, ROOT_MARKER};
pub use exclusion::{AssetExclusion, IgnoreSet};
pub use generator::{GenerationSummary, ManifestGenerator};
pub use layout::ManifestLayout;
pub use manifest::AssetManifest;
pub use scanner::{ScanError, collect_assets};
