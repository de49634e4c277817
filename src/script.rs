//! JavaScript global-assignment wrapper shared by both tools.
//!
//! The gallery page loads its data through plain `<script src>` tags rather
//! than `fetch`, which keeps it working when opened straight from disk
//! (`file://`). Every generated script is therefore a single statement:
//!
//! ```text
//! window.SIMILARITY_DATA = [
//!   {
//!     "image1": "a.jpg",
//!     "image2": "b.jpg",
//!     "similarity": 0.82
//!   }
//! ];
//! ```
//!
//! The payload is pretty-printed with a 2-space indent and non-ASCII text is
//! written literally, never as `\u` escapes.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Invalid global name {0:?}: expected a JavaScript identifier")]
    InvalidGlobal(String),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whether `name` can follow `window.` as a plain identifier.
///
/// Accepts `[A-Za-z_$][A-Za-z0-9_$]*` plus Unicode letters and digits.
/// Reserved words are allowed since property access permits them.
pub fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c == '$' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c == '$' || c.is_alphanumeric())
}

/// Render `window.<global> = <json>;\n` for any serializable value.
pub fn render_assignment<T: Serialize + ?Sized>(
    global: &str,
    value: &T,
) -> Result<String, ScriptError> {
    if !is_js_identifier(global) {
        return Err(ScriptError::InvalidGlobal(global.to_string()));
    }
    let json = serde_json::to_string_pretty(value)?;
    Ok(format!("window.{global} = {json};\n"))
}

/// Inverse of [`render_assignment`]: return the JSON payload of a generated
/// script, or `None` if the text is not a wrapper for `global`.
pub fn strip_assignment<'a>(global: &str, script: &'a str) -> Option<&'a str> {
    script
        .strip_prefix("window.")?
        .strip_prefix(global)?
        .strip_prefix(" = ")?
        .strip_suffix(";\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_two_space_indent() {
        let out = render_assignment("DATA", &json!([1, {"a": true}])).unwrap();
        assert_eq!(
            out,
            "window.DATA = [\n  1,\n  {\n    \"a\": true\n  }\n];\n"
        );
    }

    #[test]
    fn empty_array_stays_inline() {
        let out = render_assignment("DATA", &json!([])).unwrap();
        assert_eq!(out, "window.DATA = [];\n");
    }

    #[test]
    fn non_ascii_is_written_literally() {
        let out = render_assignment("DATA", &json!(["café", "東京"])).unwrap();
        assert!(out.contains("\"café\""));
        assert!(out.contains("\"東京\""));
        assert!(!out.contains("\\u"));
    }

    #[test]
    fn object_keys_keep_input_order() {
        let value: serde_json::Value =
            serde_json::from_str(r#"[{"zeta": 1, "alpha": 2}]"#).unwrap();
        let out = render_assignment("DATA", &value).unwrap();
        let zeta = out.find("zeta").unwrap();
        let alpha = out.find("alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn rejects_invalid_global() {
        for bad in ["", "1abc", "a-b", "a.b", "has space"] {
            let result = render_assignment(bad, &json!([]));
            assert!(
                matches!(result, Err(ScriptError::InvalidGlobal(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn identifier_rules() {
        assert!(is_js_identifier("SIMILARITY_DATA"));
        assert!(is_js_identifier("_private"));
        assert!(is_js_identifier("$cache"));
        assert!(is_js_identifier("données"));
        assert!(!is_js_identifier("9lives"));
    }

    #[test]
    fn strip_recovers_payload() {
        let value = json!([{"image1": "a.jpg", "similarity": 0.5}]);
        let out = render_assignment("SIMILARITY_DATA", &value).unwrap();
        let payload = strip_assignment("SIMILARITY_DATA", &out).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn strip_rejects_other_global() {
        let out = render_assignment("A", &json!([])).unwrap();
        assert_eq!(strip_assignment("B", &out), None);
    }
}
