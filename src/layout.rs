//! Fixed description of the scanned tree and the artifact it produces.

use std::path::PathBuf;

/// Filesystem layout and naming constants for a single manifest run.
///
/// The defaults describe the production web root the tool is normally run from; tests
/// and embedders can point `root_dir` elsewhere while keeping the remaining conventions.
#[derive(Debug, Clone)]
pub struct ManifestLayout {
  /// Directory the recursive scan starts from.
  pub root_dir: PathBuf,
  /// File the generated JavaScript artifact is written to.
  pub output_file: PathBuf,
  /// Prefix of the cache identifier embedded in the artifact.
  pub cache_name_prefix: String,
  /// File name of the application entry point HTML.
  pub index_document: String,
  /// Path fragments whose presence excludes a discovered path.
  pub ignored_fragments: Vec<String>,
}

impl Default for ManifestLayout {
  fn default() -> Self {
    Self {
      root_dir: "./".into(),
      output_file: "generated-assets.js".into(),
      cache_name_prefix: "flashcards-v".into(),
      index_document: "index.html".into(),
      ignored_fragments: vec![
        "node_modules".into(),
        ".git".into(),
        "service-worker.js".into(),
        "generated-assets.js".into(),
      ],
    }
  }
}
