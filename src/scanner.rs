//! Recursive directory scanning that harvests cacheable entries.

use std::fs;
use std::path::{Path, PathBuf};

use crate::asset_path::AssetPath;
use crate::exclusion::AssetExclusion;

/// Error raised when part of the scanned tree cannot be read.
#[derive(Debug)]
pub struct ScanError {
  /// Path that caused the error.
  pub path: PathBuf,
  /// Source I/O error.
  pub source: std::io::Error,
}

impl std::fmt::Display for ScanError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "failed to scan {}: {}", self.path.display(), self.source)
  }
}

impl std::error::Error for ScanError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    Some(&self.source)
  }
}

/// Walk the tree under `root`, collecting every file that survives the filter.
///
/// Entries are returned in discovery order as normalised `./`-prefixed paths relative
/// to `root`. A directory whose entry text is excluded is never descended into, so an
/// ignored subtree costs nothing to skip. Symbolic links are recorded as plain entries
/// rather than followed, which also rules out traversal cycles.
///
/// The first unreadable directory aborts the whole scan; there is no partial result.
pub fn collect_assets<F: AssetExclusion>(
  root: &Path,
  filter: &F,
) -> Result<Vec<AssetPath>, ScanError> {
  let mut assets = Vec::new();
  scan_directory(root, Path::new(""), filter, &mut assets)?;
  Ok(assets)
}

fn scan_directory<F: AssetExclusion>(
  root: &Path,
  relative: &Path,
  filter: &F,
  assets: &mut Vec<AssetPath>,
) -> Result<(), ScanError> {
  let current = if relative.as_os_str().is_empty() {
    root.to_path_buf()
  } else {
    root.join(relative)
  };

  let entries = fs::read_dir(&current).map_err(|err| ScanError {
    path: current.clone(),
    source: err,
  })?;

  for entry in entries {
    let entry = entry.map_err(|err| ScanError {
      path: current.clone(),
      source: err,
    })?;
    let child_relative = relative.join(entry.file_name());
    let candidate = AssetPath::from_relative(&child_relative);
    if filter.is_excluded(candidate.as_str()) {
      continue;
    }
    let file_type = entry.file_type().map_err(|err| ScanError {
      path: entry.path(),
      source: err,
    })?;
    if file_type.is_dir() {
      scan_directory(root, &child_relative, filter, assets)?;
    } else {
      assets.push(candidate);
    }
  }

  Ok(())
}
