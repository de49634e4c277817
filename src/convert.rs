//! JSON array to script conversion.
//!
//! Reads a JSON file whose top-level value must be an array and writes it
//! back out as a `window.<global> = [...];` script (see [`crate::script`]).
//! The whole input is validated before the destination is opened, so a
//! parse or shape failure never leaves an output file behind.

use crate::config::ScriptConfig;
use crate::script::{self, ScriptError};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid JSON in {path}: input is not valid UTF-8 text")]
    Encoding { path: PathBuf },
    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Input JSON must be a list (array) of entries, found {found} in {path}")]
    NotAnArray { path: PathBuf, found: &'static str },
    #[error(transparent)]
    Script(#[from] ScriptError),
}

/// Destination used when none is given: the input path with its extension
/// replaced (`data.json` → `data.js`). Inputs without an extension gain one.
pub fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

/// Name of a JSON value's type, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse `content` and render it as a script, without touching the filesystem.
///
/// `path` is only used to label errors.
pub fn render_script(
    content: &str,
    path: &Path,
    config: &ScriptConfig,
) -> Result<String, ConvertError> {
    let value: Value = serde_json::from_str(content).map_err(|source| ConvertError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(ConvertError::NotAnArray {
                path: path.to_path_buf(),
                found: json_kind(&other),
            });
        }
    };
    log::debug!("{} holds {} entries", path.display(), entries.len());
    Ok(script::render_assignment(&config.global, &entries)?)
}

/// Convert `input` into a script at `output` (or the default destination).
///
/// Returns the path written.
pub fn convert(
    input: &Path,
    output: Option<&Path>,
    config: &ScriptConfig,
) -> Result<PathBuf, ConvertError> {
    let output = match output {
        Some(p) => p.to_path_buf(),
        None => default_output_path(input, &config.extension),
    };

    log::debug!("Reading {}", input.display());
    let content = fs::read_to_string(input).map_err(|source| match source.kind() {
        io::ErrorKind::InvalidData => ConvertError::Encoding {
            path: input.to_path_buf(),
        },
        _ => ConvertError::Read {
            path: input.to_path_buf(),
            source,
        },
    })?;
    let js = render_script(&content, input, config)?;

    log::debug!("Writing {} bytes to {}", js.len(), output.display());
    fs::write(&output, js).map_err(|source| ConvertError::Write {
        path: output.clone(),
        source,
    })?;
    Ok(output)
}
