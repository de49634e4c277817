//! Image directory scanning and manifest generation.
//!
//! The gallery page picks random images from a flat directory, and a static
//! site cannot list a directory at runtime. This module writes that listing
//! ahead of time:
//!
//! ```text
//! images/
//! ├── manifest.json      # Output (never lists itself)
//! ├── manifest.js        # Optional script form (window.LOCAL_IMAGE_MANIFEST)
//! ├── a.jpg              # ✓
//! ├── B.PNG              # ✓ extensions match case-insensitively
//! ├── notes.txt          # ✗ not an image extension
//! └── raw/               # ✗ directories are never listed or descended into
//! ```
//!
//! Produces `["B.PNG", "a.jpg"]`: bare filenames sorted by name, pretty-printed
//! with a 2-space indent. Non-ASCII characters are written as `\uXXXX`
//! escapes so the file is plain ASCII. Image contents are never opened.

use crate::config::ManifestConfig;
use crate::script::{self, ScriptError};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Cannot read directory {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Manifest encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Script(#[from] ScriptError),
}

/// Result of a manifest build, for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestSummary {
    /// Filenames written, in manifest order.
    pub entries: Vec<String>,
    /// Path of the JSON manifest.
    pub output: PathBuf,
    /// Path of the script form, when written.
    pub js_output: Option<PathBuf>,
}

/// Collect the image filenames directly inside `config.dir`, sorted by name.
///
/// Entries qualify when they are regular files (symlinks are followed), carry
/// an accepted extension, and are not one of the manifest's own output files.
pub fn collect_images(config: &ManifestConfig) -> Result<Vec<String>, ManifestError> {
    let dir = &config.dir;
    let meta = fs::metadata(dir).map_err(|source| ManifestError::Read {
        path: dir.clone(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(ManifestError::NotADirectory(dir.clone()));
    }

    let excluded = excluded_names(config);
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();

        let Some(name) = entry.file_name().to_str() else {
            log::warn!("Skipping non UTF-8 filename: {}", path.display());
            continue;
        };
        if excluded.iter().any(|ex| ex == name) {
            log::debug!("Skipping manifest output {name}");
            continue;
        }
        if !path.is_file() {
            continue;
        }
        let is_image = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| config.accepts_extension(e));
        if !is_image {
            log::debug!("Skipping {name}: not an image extension");
            continue;
        }
        files.push(name.to_string());
    }

    Ok(files)
}

/// Filenames the manifest must never list: its own JSON and script outputs.
///
/// The script name is excluded even when `emit_js` is off, so a `.js` left
/// over from an earlier `--js` run is never listed.
fn excluded_names(config: &ManifestConfig) -> Vec<String> {
    let mut names = vec![config.output.clone()];
    if let Some(js) = config
        .js_output_path()
        .file_name()
        .and_then(|n| n.to_str())
    {
        names.push(js.to_string());
    }
    names
}

/// Render the manifest body: a 2-space-indented JSON array of ASCII text,
/// no trailing newline.
pub fn render_manifest(entries: &[String]) -> Result<String, ManifestError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter::default());
    entries.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// [`PrettyFormatter`] that writes every non-ASCII character as a `\uXXXX`
/// escape, using UTF-16 surrogate pairs outside the BMP.
#[derive(Default)]
struct AsciiFormatter {
    pretty: PrettyFormatter<'static>,
}

impl Formatter for AsciiFormatter {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// Scan `config.dir` and write the manifest (plus its script form when
/// `config.emit_js` is set). Existing outputs are overwritten.
pub fn build(config: &ManifestConfig) -> Result<ManifestSummary, ManifestError> {
    let entries = collect_images(config)?;
    log::debug!(
        "Found {} images in {}",
        entries.len(),
        config.dir.display()
    );

    let output = config.output_path();
    write_file(&output, render_manifest(&entries)?)?;

    let js_output = if config.emit_js {
        let path = config.js_output_path();
        let js = script::render_assignment(&config.js_global, &entries)?;
        write_file(&path, js)?;
        Some(path)
    } else {
        None
    };

    Ok(ManifestSummary {
        entries,
        output,
        js_output,
    })
}

fn write_file(path: &Path, contents: String) -> Result<(), ManifestError> {
    log::debug!("Writing {}", path.display());
    fs::write(path, contents).map_err(|source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    })
}
