//! Batch entry point that regenerates the service worker cache manifest.

use anyhow::Result;
use sw_manifest_gen::ManifestGenerator;

fn main() -> Result<()> {
  let summary = ManifestGenerator::default().generate()?;

  println!("✔ Cache list generated in: {}", summary.output_path.display());
  println!("📦 Total assets cached: {}", summary.asset_count);

  Ok(())
}
