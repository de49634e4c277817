//! CLI output formatting for both tools.
//!
//! # Output Format
//!
//! ## json2js
//!
//! ```text
//! Wrote data/similarity.js
//! ```
//!
//! ## gen-manifest
//!
//! ```text
//! Wrote 42 entries to images/manifest.json
//! Wrote images/manifest.js
//! ```
//!
//! The second line only appears when the script form is written. With
//! `--list`, each entry follows on its own indented line.
//!
//! # Architecture
//!
//! Each tool has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure.

use crate::manifest::ManifestSummary;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

pub fn format_convert_output(written: &Path) -> Vec<String> {
    vec![format!("Wrote {}", written.display())]
}

pub fn print_convert_output(written: &Path) {
    for line in format_convert_output(written) {
        println!("{line}");
    }
}

/// Summary line, optional script line, and (with `list`) one line per entry.
pub fn format_manifest_output(summary: &ManifestSummary, list: bool) -> Vec<String> {
    let mut lines = vec![format!(
        "Wrote {} entries to {}",
        summary.entries.len(),
        summary.output.display()
    )];
    if let Some(js) = &summary.js_output {
        lines.push(format!("Wrote {}", js.display()));
    }
    if list {
        for entry in &summary.entries {
            lines.push(format!("{}{entry}", indent(1)));
        }
    }
    lines
}

pub fn print_manifest_output(summary: &ManifestSummary, list: bool) {
    for line in format_manifest_output(summary, list) {
        println!("{line}");
    }
}
