//! Normalised entry paths for the generated cache manifest.

use std::path::Path;

use serde::Serialize;

/// Entry text representing the application root, always the first manifest slot.
pub const ROOT_MARKER: &str = "./";

/// A single cacheable entry in the `./`-prefixed form the service worker expects.
///
/// The entry text always uses forward slashes so that the generated manifest works on
/// every platform, regardless of the native directory separator that was used when the
/// files were discovered on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetPath(String);

impl AssetPath {
  /// The root marker entry (`./`).
  pub fn root() -> Self {
    Self(ROOT_MARKER.to_string())
  }

  /// Build an entry from a path relative to the scanned root.
  pub fn from_relative(path: impl AsRef<Path>) -> Self {
    let raw = path.as_ref().to_string_lossy().replace('\\', "/");
    let trimmed = raw.strip_prefix("./").unwrap_or(&raw);
    Self(format!("./{trimmed}"))
  }

  /// The normalised entry text.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl std::fmt::Display for AssetPath {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalises_backslashes_from_windows_inputs() {
    let path = AssetPath::from_relative("assets\\img\\logo.png");
    assert_eq!(path.as_str(), "./assets/img/logo.png");
  }

  #[test]
  fn applies_the_leading_dot_slash_convention() {
    assert_eq!(AssetPath::from_relative("app.js").as_str(), "./app.js");
    assert_eq!(AssetPath::from_relative("./app.js").as_str(), "./app.js");
  }

  #[test]
  fn treats_an_empty_relative_path_as_the_root_marker() {
    assert_eq!(AssetPath::from_relative("").as_str(), ROOT_MARKER);
  }

  #[test]
  fn displays_the_entry_text() {
    let path = AssetPath::from_relative("css/site.css");
    assert_eq!(path.to_string(), "./css/site.css");
  }

  #[test]
  fn serialises_as_a_plain_json_string() {
    let json = serde_json::to_string(&AssetPath::from_relative("app.js")).unwrap();
    assert_eq!(json, "\"./app.js\"");
  }
}
