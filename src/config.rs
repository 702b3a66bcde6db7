//! Settings for the command builder. Every field has a default, so an empty JSON object is a valid
//! configuration and callers only spell out what they change.

use serde_json;

use error::ColorError;

/// How a [`LightCommandBuilder`](../command/struct.LightCommandBuilder.html) treats the light it is
/// building for.
///
/// # Example
/// ```
/// # use chromalight::config::BuilderConfig;
/// let config = BuilderConfig::from_json(r#"{"hue_skew_correction": true}"#).unwrap();
/// assert!(config.hue_skew_correction);
/// assert!(config.is_rgb_only("LST001"));
/// assert!(!config.is_rgb_only("LCT001"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Model identifier prefixes of lights that have no white channel. Color temperatures for these
    /// are sent as chromaticities.
    pub rgb_only_prefixes: Vec<String>,
    /// Whether hue units are read with the yellow/green skew correction.
    pub hue_skew_correction: bool,
}

impl Default for BuilderConfig {
    fn default() -> BuilderConfig {
        BuilderConfig {
            rgb_only_prefixes: vec!["LLC".to_string(), "LST".to_string()],
            hue_skew_correction: false,
        }
    }
}

impl BuilderConfig {
    /// Reads a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<BuilderConfig, ColorError> {
        serde_json::from_str(json).map_err(|e| ColorError::InvalidConfig(e.to_string()))
    }

    /// Returns `true` if lights of this model cannot take a color temperature directly.
    pub fn is_rgb_only(&self, model_id: &str) -> bool {
        self.rgb_only_prefixes
            .iter()
            .any(|prefix| model_id.starts_with(prefix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(BuilderConfig::from_json("{}").unwrap(), BuilderConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = BuilderConfig::from_json(
            r#"{"rgb_only_prefixes": ["LLC"], "hue_skew_correction": true}"#,
        ).unwrap();
        assert!(config.is_rgb_only("LLC012"));
        assert!(!config.is_rgb_only("LST001"));
        assert!(config.hue_skew_correction);
    }

    #[test]
    fn test_bad_json() {
        match BuilderConfig::from_json("{\"rgb_only_prefixes\": 3}") {
            Err(ColorError::InvalidConfig(_)) => {}
            other => panic!("expected a config error, got {:?}", other),
        }
    }
}
