//! Ordering rules for the precache manifest.

use serde::Serialize;

use crate::asset_path::AssetPath;

/// Ordered list of cache entries with the root marker and index document at the head.
///
/// Serialises as a bare JSON array of entry strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AssetManifest {
  entries: Vec<AssetPath>,
}

impl AssetManifest {
  /// Arrange scanned entries behind the two reserved sentinel slots.
  ///
  /// The root marker and the index document occupy the first two slots exactly once,
  /// in that order, whether or not the scan rediscovered them; every other entry keeps
  /// its discovery order.
  pub fn from_scan(index_document: &AssetPath, scanned: Vec<AssetPath>) -> Self {
    let root = AssetPath::root();
    let mut entries = Vec::with_capacity(scanned.len() + 2);
    entries.push(root.clone());
    entries.push(index_document.clone());
    entries.extend(
      scanned
        .into_iter()
        .filter(|asset| asset != index_document && asset != &root),
    );
    Self { entries }
  }

  /// Entries in their final serialisation order.
  pub fn entries(&self) -> &[AssetPath] {
    &self.entries
  }

  /// Number of entries including the sentinel slots.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// True when the manifest holds no entries at all.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
