//! Error types for the editor

use thiserror::Error;

/// Why a move was refused
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MoveError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Cannot move {0} into itself")]
    SelfMove(String),

    #[error("Would create cycle: {target_id} is inside {node_id}")]
    CycleDetected { node_id: String, target_id: String },

    #[error("Cannot place a node before or after the root ({0})")]
    TargetHasNoParent(String),
}

/// Setup failures: a config that cannot be parsed or is out of range
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;

    #[test]
    fn test_config_failures_map_to_editor_errors() {
        let err = EditorConfig::from_json(r#"{ "dropThreshold": 0.9 }"#).unwrap_err();
        assert!(matches!(err, EditorError::InvalidConfig(_)));
        assert!(err.to_string().starts_with("Invalid config: "));

        let err = EditorConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, EditorError::Json(_)));
        assert!(err.to_string().starts_with("JSON error: "));
    }
}
