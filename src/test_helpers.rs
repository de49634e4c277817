//! Shared test utilities for the gallery-tools test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = gallery_dir(&["b.png", "a.jpg", "notes.txt"]);
//! let summary = build(&config_for(&tmp)).unwrap();
//! assert_eq!(read_manifest(&tmp), "[\n  \"a.jpg\",\n  \"b.png\"\n]");
//! ```

use std::fs;
use tempfile::TempDir;

use crate::config::ManifestConfig;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp directory holding one small file per name.
///
/// Contents are placeholder bytes; the manifest builder never decodes images.
pub fn gallery_dir(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for name in names {
        fs::write(tmp.path().join(name), b"not really an image").unwrap();
    }
    tmp
}

/// Stock manifest settings pointed at `tmp`.
pub fn config_for(tmp: &TempDir) -> ManifestConfig {
    ManifestConfig {
        dir: tmp.path().to_path_buf(),
        ..ManifestConfig::default()
    }
}

// =========================================================================
// Output readers — panic with a clear message on miss
// =========================================================================

/// Read the `manifest.json` written into `tmp`.
pub fn read_manifest(tmp: &TempDir) -> String {
    let path = tmp.path().join("manifest.json");
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("manifest not readable at {}: {e}", path.display()))
}
