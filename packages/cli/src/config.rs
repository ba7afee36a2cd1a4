use serde::{Deserialize, Serialize};
use sitecraft_editor::EditorConfig;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "sitecraft.config.json";

/// Sitecraft configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Drag-and-drop behavior
    #[serde(default)]
    pub editor: EditorConfig,

    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.editor.validate()?;
            tracing::debug!("Loaded {}", config_path.display());
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Serialize JSON honoring `pretty`
    pub fn to_json<T: Serialize>(&self, value: &T) -> anyhow::Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: EditorConfig::default(),
            pretty: default_pretty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecraft_editor::InsidePlacement;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "editor": { "dropThreshold": 0.3, "insidePlacement": "prepend" },
            "pretty": false
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.editor.drop_threshold, 0.3);
        assert_eq!(config.editor.inside_placement, InsidePlacement::Prepend);
        assert!(!config.pretty);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.editor, EditorConfig::default());
        assert!(config.pretty);
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert!(config.pretty);
    }

    #[test]
    fn test_load_rejects_bad_threshold() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "editor": { "dropThreshold": 3.0 } }"#,
        )
        .unwrap();

        assert!(Config::load(&dir.path().display().to_string()).is_err());
    }
}
