//! Orchestrates a full manifest run: scan, order, render, write.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::asset_path::AssetPath;
use crate::exclusion::IgnoreSet;
use crate::layout::ManifestLayout;
use crate::manifest::AssetManifest;
use crate::scanner::collect_assets;

/// Outcome of a successful manifest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
  /// Path the artifact was written to.
  pub output_path: PathBuf,
  /// Number of entries in the written manifest, sentinels included.
  pub asset_count: usize,
}

/// High-level helper that regenerates the cache manifest for a configured layout.
///
/// The `Default` generator targets the production layout described by
/// [`ManifestLayout::default`].
#[derive(Debug, Default)]
pub struct ManifestGenerator {
  layout: ManifestLayout,
}

impl ManifestGenerator {
  /// Create a generator for the provided layout.
  pub fn new(layout: ManifestLayout) -> Self {
    Self { layout }
  }

  /// Scan the tree, order the entries and overwrite the generated artifact.
  pub fn generate(&self) -> Result<GenerationSummary> {
    let ignores = IgnoreSet::new(&self.layout.ignored_fragments);
    let scanned = collect_assets(&self.layout.root_dir, &ignores)?;

    let index_document = AssetPath::from_relative(&self.layout.index_document);
    let manifest = AssetManifest::from_scan(&index_document, scanned);

    let artifact = render_cache_artifact(&self.layout.cache_name_prefix, &manifest)?;
    fs::write(&self.layout.output_file, artifact)
      .with_context(|| format!("failed to write {}", self.layout.output_file.display()))?;

    Ok(GenerationSummary {
      output_path: self.layout.output_file.clone(),
      asset_count: manifest.len(),
    })
  }
}

/// Render the JavaScript artifact embedding the cache identifier and asset array.
///
/// The cache identifier concatenates the configured prefix with `Date.now()` so the
/// value is stamped each time the artifact is loaded by the browser, not when this
/// tool runs. The asset array is pretty-printed with two-space indentation.
fn render_cache_artifact(cache_name_prefix: &str, manifest: &AssetManifest) -> Result<String> {
  let prefix_literal = serde_json::to_string(cache_name_prefix)?;
  let assets_json = serde_json::to_string_pretty(manifest)?;
  Ok(format!(
    r#"
// auto-generated — do not modify manually!
const CACHE = {prefix_literal} + Date.now();

const ASSETS = {assets_json};
"#
  ))
}
