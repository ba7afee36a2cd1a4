use thiserror::Error;

/// Invariant violations found by [`crate::validate_tree`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    #[error("Duplicate node id: {0}")]
    DuplicateId(String),

    #[error("Empty node id (parent: {parent:?})")]
    EmptyId { parent: Option<String> },
}

/// Structural problems in a flattened list handed to [`crate::try_rebuild`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RebuildError {
    #[error("No root item (every item declares a parent)")]
    MissingRoot,

    #[error("Multiple root items: {0:?}")]
    MultipleRoots(Vec<String>),

    #[error("Item {id} references missing parent {parent_id}")]
    MissingParent { id: String, parent_id: String },

    #[error("Duplicate item id: {0}")]
    DuplicateId(String),

    #[error("Items not reachable from the root: {0:?}")]
    Unreachable(Vec<String>),
}
