//! Tool configuration.
//!
//! Both binaries run with built-in defaults that reproduce the gallery's
//! fixed layout (`images/manifest.json`, `window.SIMILARITY_DATA`). An
//! optional `gallery-tools.toml` in the working directory overrides them,
//! and command-line flags override the file.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [script]
//! global = "SIMILARITY_DATA"     # Assigned as window.<global>
//! extension = "js"               # Default output extension for json2js
//!
//! [manifest]
//! dir = "images"                 # Directory scanned by gen-manifest
//! output = "manifest.json"       # Manifest filename inside `dir`
//! extensions = ["jpg", "jpeg", "png", "webp", "gif"]
//! js_global = "LOCAL_IMAGE_MANIFEST"
//! emit_js = false                # Also write <output stem>.js
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::script::is_js_identifier;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "gallery-tools.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings for both tools, loaded from `gallery-tools.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// JSON-to-script conversion settings.
    pub script: ScriptConfig,
    /// Image manifest settings.
    pub manifest: ManifestConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptConfig {
    /// Global the converted array is assigned to (`window.<global>`).
    pub global: String,
    /// Extension substituted into the input path when no output is given.
    pub extension: String,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            global: "SIMILARITY_DATA".to_string(),
            extension: "js".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// Directory to scan, relative to the working directory.
    pub dir: PathBuf,
    /// Manifest filename, written inside `dir` and never listed in itself.
    pub output: String,
    /// Accepted image extensions, without the leading dot. Matched
    /// case-insensitively.
    pub extensions: Vec<String>,
    /// Global used for the script form of the manifest.
    pub js_global: String,
    /// Also write the manifest as a script next to the JSON file.
    pub emit_js: bool,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("images"),
            output: "manifest.json".to_string(),
            extensions: ["jpg", "jpeg", "png", "webp", "gif"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
            js_global: "LOCAL_IMAGE_MANIFEST".to_string(),
            emit_js: false,
        }
    }
}

impl ManifestConfig {
    /// Full path of the JSON manifest.
    pub fn output_path(&self) -> PathBuf {
        self.dir.join(&self.output)
    }

    /// Full path of the script form: the manifest path with a `.js` extension.
    pub fn js_output_path(&self) -> PathBuf {
        self.output_path().with_extension("js")
    }

    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

impl ToolsConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_js_identifier(&self.script.global) {
            return Err(ConfigError::Validation(format!(
                "script.global {:?} is not a JavaScript identifier",
                self.script.global
            )));
        }
        if !is_plain_name(&self.script.extension) || self.script.extension.contains('.') {
            return Err(ConfigError::Validation(
                "script.extension must be a bare extension like \"js\"".into(),
            ));
        }
        if !is_plain_name(&self.manifest.output) {
            return Err(ConfigError::Validation(
                "manifest.output must be a filename without directories".into(),
            ));
        }
        if self.manifest.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "manifest.extensions must not be empty".into(),
            ));
        }
        if let Some(bad) = self
            .manifest
            .extensions
            .iter()
            .find(|e| !is_plain_name(e) || e.contains('.'))
        {
            return Err(ConfigError::Validation(format!(
                "manifest.extensions entry {bad:?} must be a bare extension like \"jpg\""
            )));
        }
        if !is_js_identifier(&self.manifest.js_global) {
            return Err(ConfigError::Validation(format!(
                "manifest.js_global {:?} is not a JavaScript identifier",
                self.manifest.js_global
            )));
        }
        Ok(())
    }
}

/// Non-empty, no path separators, not `.`/`..`.
fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Parse and validate config text.
pub fn parse_config(content: &str) -> Result<ToolsConfig, ConfigError> {
    let config: ToolsConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration.
///
/// With an explicit path the file must exist. Without one,
/// [`DEFAULT_CONFIG_FILE`] is read from the working directory if present,
/// otherwise stock defaults are returned.
pub fn load_config(explicit: Option<&Path>) -> Result<ToolsConfig, ConfigError> {
    let path = match explicit {
        Some(p) if !p.exists() => return Err(ConfigError::NotFound(p.to_path_buf())),
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                log::debug!("No {DEFAULT_CONFIG_FILE}, using stock defaults");
                return Ok(ToolsConfig::default());
            }
            default
        }
    };
    log::debug!("Loading config from {}", path.display());
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    parse_config(&content)
}

/// Returns a fully-commented stock `gallery-tools.toml`.
///
/// Printed by `gen-manifest --gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# gallery-tools configuration
# ===========================
# All settings are optional. Values shown below are the defaults.
# Command-line flags take precedence over this file.

[script]
# Global the converted array is assigned to: window.<global> = [...];
global = "SIMILARITY_DATA"
# Extension used for the output when json2js is given only an input path.
extension = "js"

[manifest]
# Directory scanned for images, relative to the working directory.
dir = "images"
# Manifest filename inside `dir`. Never listed in its own output.
output = "manifest.json"
# Image extensions to include (case-insensitive, no leading dot).
extensions = ["jpg", "jpeg", "png", "webp", "gif"]
# Global used when the manifest is also written as a script.
js_global = "LOCAL_IMAGE_MANIFEST"
# Also write <output stem>.js so the page works over file://.
emit_js = false
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_gallery_layout() {
        let config = ToolsConfig::default();
        assert_eq!(config.script.global, "SIMILARITY_DATA");
        assert_eq!(config.script.extension, "js");
        assert_eq!(config.manifest.output_path(), Path::new("images/manifest.json"));
        assert_eq!(config.manifest.js_output_path(), Path::new("images/manifest.js"));
        assert_eq!(
            config.manifest.extensions,
            vec!["jpg", "jpeg", "png", "webp", "gif"]
        );
    }

    #[test]
    fn validate_default_config_passes() {
        assert!(ToolsConfig::default().validate().is_ok());
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config = parse_config(stock_config_toml()).unwrap();
        assert_eq!(config, ToolsConfig::default());
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config(
            r#"
[manifest]
dir = "photos"
"#,
        )
        .unwrap();
        assert_eq!(config.manifest.dir, PathBuf::from("photos"));
        // Defaults preserved
        assert_eq!(config.manifest.output, "manifest.json");
        assert_eq!(config.script.global, "SIMILARITY_DATA");
    }

    #[test]
    fn accepts_extension_ignores_case() {
        let config = ManifestConfig::default();
        assert!(config.accepts_extension("JPG"));
        assert!(config.accepts_extension("WebP"));
        assert!(!config.accepts_extension("txt"));
        assert!(!config.accepts_extension("json"));
    }

    #[test]
    fn unknown_key_rejected() {
        let result = parse_config(
            r#"
[manifest]
outptu = "x.json"
"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        assert!(parse_config("[scripts]\nglobal = \"X\"\n").is_err());
    }

    #[test]
    fn invalid_toml_is_error() {
        let result = parse_config("this is not valid toml [[[");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn validate_rejects_bad_global() {
        let mut config = ToolsConfig::default();
        config.script.global = "not-an-identifier".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("script.global"));
    }

    #[test]
    fn validate_rejects_output_with_directory() {
        let mut config = ToolsConfig::default();
        config.manifest.output = "sub/manifest.json".into();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_empty_extensions() {
        let mut config = ToolsConfig::default();
        config.manifest.extensions.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_dotted_extension() {
        let mut config = ToolsConfig::default();
        config.manifest.extensions = vec![".jpg".into()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains(".jpg"));
    }

    #[test]
    fn load_config_explicit_missing_is_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        let result = load_config(Some(&missing));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn load_config_reads_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tools.toml");
        fs::write(
            &path,
            r#"
[script]
global = "PAIRS"

[manifest]
emit_js = true
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.script.global, "PAIRS");
        assert!(config.manifest.emit_js);
        assert_eq!(config.manifest.js_global, "LOCAL_IMAGE_MANIFEST");
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tools.toml");
        fs::write(&path, "[manifest]\nextensions = []\n").unwrap();
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Validation(_))
        ));
    }
}
