//! The host's shared output-resources mapping.
//!
//! The mapping is owned by the caller. Header assembly reads `config_dir` from
//! it and writes exactly one entry back: `inlining` → `{"css": [blocks...]}`.

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::error::{HeaderError, Result};

/// String-keyed mapping passed between conversion steps.
pub type Resources = Map<String, Value>;

/// Key holding the active configuration directory.
pub const CONFIG_DIR_KEY: &str = "config_dir";
/// Key the assembled CSS is stored under.
pub const INLINING_KEY: &str = "inlining";
/// Field of the `inlining` entry holding the CSS blocks.
pub const CSS_KEY: &str = "css";

/// Resolve the configuration directory from `resources`.
///
/// A missing, non-string, or empty value is a configuration error.
pub fn config_dir(resources: &Resources) -> Result<PathBuf> {
    match resources.get(CONFIG_DIR_KEY) {
        Some(Value::String(dir)) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        Some(Value::String(_)) => Err(HeaderError::Configuration(format!(
            "resources['{CONFIG_DIR_KEY}'] is empty"
        ))),
        Some(other) => Err(HeaderError::Configuration(format!(
            "resources['{CONFIG_DIR_KEY}'] must be a string path, got {other}"
        ))),
        None => Err(HeaderError::Configuration(format!(
            "resources['{CONFIG_DIR_KEY}'] is required"
        ))),
    }
}

/// Replace the `inlining` entry with `{"css": blocks}`.
pub fn store_inlined_css(resources: &mut Resources, blocks: &[String]) {
    let css = blocks.iter().cloned().map(Value::String).collect();
    let mut inlining = Map::new();
    inlining.insert(CSS_KEY.to_string(), Value::Array(css));
    resources.insert(INLINING_KEY.to_string(), Value::Object(inlining));
}

/// Read back the CSS blocks stored by [`store_inlined_css`].
///
/// Returns `None` when the entry is absent or not shaped as a list of strings.
pub fn inlined_css(resources: &Resources) -> Option<Vec<String>> {
    resources
        .get(INLINING_KEY)?
        .get(CSS_KEY)?
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_owned))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resources_from(value: Value) -> Resources {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn config_dir_reads_string() {
        let res = resources_from(json!({ "config_dir": "/home/u/.jupyter" }));
        assert_eq!(config_dir(&res).unwrap(), PathBuf::from("/home/u/.jupyter"));
    }

    #[test]
    fn config_dir_missing_is_configuration_error() {
        let res = Resources::new();
        assert!(matches!(
            config_dir(&res),
            Err(HeaderError::Configuration(_))
        ));
    }

    #[test]
    fn config_dir_non_string_is_configuration_error() {
        let res = resources_from(json!({ "config_dir": 42 }));
        assert!(matches!(
            config_dir(&res),
            Err(HeaderError::Configuration(_))
        ));
    }

    #[test]
    fn config_dir_empty_is_configuration_error() {
        let res = resources_from(json!({ "config_dir": "" }));
        assert!(matches!(
            config_dir(&res),
            Err(HeaderError::Configuration(_))
        ));
    }

    #[test]
    fn store_replaces_whole_inlining_entry() {
        let mut res = resources_from(json!({
            "config_dir": "/x",
            "inlining": { "css": ["old"], "js": ["keep?"] }
        }));
        store_inlined_css(&mut res, &["a".to_string(), "b".to_string()]);
        assert_eq!(res["inlining"], json!({ "css": ["a", "b"] }));
        assert_eq!(res["config_dir"], json!("/x"));
    }

    #[test]
    fn inlined_css_round_trips_through_store() {
        let mut res = Resources::new();
        store_inlined_css(&mut res, &["body{}".to_string()]);
        assert_eq!(inlined_css(&res), Some(vec!["body{}".to_string()]));
    }

    #[test]
    fn inlined_css_rejects_malformed_entry() {
        let res = resources_from(json!({ "inlining": { "css": [1, 2] } }));
        assert_eq!(inlined_css(&res), None);
        assert_eq!(inlined_css(&Resources::new()), None);
    }
}
