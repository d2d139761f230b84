//! Filters deciding which discovered paths stay out of the manifest.

use std::collections::BTreeSet;

/// Trait describing exclusion filters applied to discovered paths.
pub trait AssetExclusion {
  /// Returns `true` when the candidate entry should be left out of the manifest.
  fn is_excluded(&self, candidate: &str) -> bool;
}

/// Substring-based exclusion filter built from a fixed set of path fragments.
///
/// Matching is deliberately coarse: a candidate is excluded when any fragment occurs
/// anywhere in its entry text, so `./service-worker.js.bak` is caught by the
/// `service-worker.js` fragment just like the file itself.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
  fragments: BTreeSet<String>,
}

impl IgnoreSet {
  /// Build a set from raw fragments.
  ///
  /// Values are trimmed and empty entries are discarded; an empty fragment would
  /// otherwise match every candidate and empty the manifest.
  pub fn new<I, S>(fragments: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let fragments = fragments
      .into_iter()
      .map(|fragment| fragment.as_ref().trim().to_string())
      .filter(|fragment| !fragment.is_empty())
      .collect();
    Self { fragments }
  }
}

impl AssetExclusion for IgnoreSet {
  fn is_excluded(&self, candidate: &str) -> bool {
    self
      .fragments
      .iter()
      .any(|fragment| candidate.contains(fragment.as_str()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn excludes_candidates_containing_a_fragment() {
    let ignores = IgnoreSet::new(["node_modules", ".git"]);
    assert!(ignores.is_excluded("./node_modules/left-pad/index.js"));
    assert!(ignores.is_excluded("./.git/HEAD"));
    assert!(!ignores.is_excluded("./assets/img/logo.png"));
  }

  #[test]
  fn matches_fragments_embedded_in_file_names() {
    let ignores = IgnoreSet::new(["service-worker.js"]);
    assert!(ignores.is_excluded("./service-worker.js"));
    assert!(ignores.is_excluded("./backups/service-worker.js.bak"));
  }

  #[test]
  fn discards_blank_fragments() {
    let ignores = IgnoreSet::new(["  ", "", "node_modules "]);
    assert!(!ignores.is_excluded("./app.js"));
    assert!(ignores.is_excluded("./node_modules/left-pad/index.js"));
  }

  #[test]
  fn an_empty_set_excludes_nothing() {
    let ignores = IgnoreSet::default();
    assert!(!ignores.is_excluded("./service-worker.js"));
  }
}
