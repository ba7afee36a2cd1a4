use crate::drop_position::{DEFAULT_DROP_THRESHOLD, MAX_DROP_THRESHOLD};
use crate::errors::EditorError;
use crate::mutations::InsidePlacement;
use serde::{Deserialize, Serialize};

/// Editing behavior knobs, shared by every drag in a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Fraction of a target's height that resolves to before/after
    #[serde(default = "default_drop_threshold")]
    pub drop_threshold: f64,

    /// Where `inside` drops land among the target's children
    #[serde(default)]
    pub inside_placement: InsidePlacement,
}

fn default_drop_threshold() -> f64 {
    DEFAULT_DROP_THRESHOLD
}

impl EditorConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EditorError> {
        if !(0.0..=MAX_DROP_THRESHOLD).contains(&self.drop_threshold) {
            return Err(EditorError::InvalidConfig(format!(
                "dropThreshold must be between 0 and {}, got {}",
                MAX_DROP_THRESHOLD, self.drop_threshold
            )));
        }

        Ok(())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            drop_threshold: default_drop_threshold(),
            inside_placement: InsidePlacement::default(),
        }
    }
}
