//! # Move / Reparent
//!
//! Relocates a subtree within the component tree.
//!
//! ## Semantics
//!
//! - The whole subtree travels with the moved node; partial moves do not exist
//! - `Inside` attaches to the target's children (end or start, per
//!   [`InsidePlacement`])
//! - `Before` / `After` attach to the target's parent, next to the target's
//!   index as it stands after the source has been detached
//! - The input tree is never touched. A successful move returns a new root,
//!   a refused one returns an error (or, through [`move_node`], an unchanged
//!   copy)

use crate::drop_position::DropPosition;
use crate::errors::MoveError;
use crate::guard::check_move;
use serde::{Deserialize, Serialize};
use sitecraft_tree::{find_node_mut, ComponentNode};

/// Where `Inside` puts the moved node among the target's children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsidePlacement {
    /// Last child
    #[default]
    Append,
    /// First child
    Prepend,
}

/// A move intent, as handed to history managers and persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub source_id: String,
    pub target_id: String,
    pub position: DropPosition,
}

impl MoveRequest {
    pub fn new(source_id: impl Into<String>, target_id: impl Into<String>, position: DropPosition) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            position,
        }
    }

    /// Validate without applying
    pub fn validate(&self, root: &ComponentNode) -> Result<(), MoveError> {
        check_move(root, &self.source_id, &self.target_id)?;

        if self.position != DropPosition::Inside && root.id == self.target_id {
            return Err(MoveError::TargetHasNoParent(self.target_id.clone()));
        }

        Ok(())
    }

    /// Apply to a copy of `root`
    pub fn apply(&self, root: &ComponentNode, placement: InsidePlacement) -> Result<ComponentNode, MoveError> {
        self.validate(root)?;

        let mut tree = root.clone();

        let node = detach(&mut tree, &self.source_id)
            .ok_or_else(|| MoveError::NodeNotFound(self.source_id.clone()))?;

        match self.position {
            DropPosition::Inside => {
                let target = find_node_mut(&mut tree, &self.target_id)
                    .ok_or_else(|| MoveError::NodeNotFound(self.target_id.clone()))?;

                match placement {
                    InsidePlacement::Append => target.children.push(node),
                    InsidePlacement::Prepend => target.children.insert(0, node),
                }
            }

            DropPosition::Before | DropPosition::After => {
                let siblings = children_containing(&mut tree, &self.target_id)
                    .ok_or_else(|| MoveError::TargetHasNoParent(self.target_id.clone()))?;

                let index = siblings
                    .iter()
                    .position(|c| c.id == self.target_id)
                    .ok_or_else(|| MoveError::NodeNotFound(self.target_id.clone()))?;

                let insert_index = match self.position {
                    DropPosition::After => index + 1,
                    _ => index,
                };
                siblings.insert(insert_index, node);
            }
        }

        tracing::debug!(
            "Moved {} {} {}",
            self.source_id,
            self.position,
            self.target_id
        );

        Ok(tree)
    }
}

/// Move `source_id` relative to `target_id`, returning the new root or the
/// reason the move was refused
pub fn try_move_node(
    root: &ComponentNode,
    source_id: &str,
    target_id: &str,
    position: DropPosition,
    placement: InsidePlacement,
) -> Result<ComponentNode, MoveError> {
    MoveRequest::new(source_id, target_id, position).apply(root, placement)
}

/// Move `source_id` relative to `target_id`.
///
/// Illegal or unresolvable moves return an unchanged copy of `root`.
pub fn move_node(root: &ComponentNode, source_id: &str, target_id: &str, position: DropPosition) -> ComponentNode {
    try_move_node(root, source_id, target_id, position, InsidePlacement::default()).unwrap_or_else(|err| {
        tracing::warn!("Move refused: {}", err);
        root.clone()
    })
}

/// The child list that holds `id`
fn children_containing<'a>(node: &'a mut ComponentNode, id: &str) -> Option<&'a mut Vec<ComponentNode>> {
    if node.children.iter().any(|c| c.id == id) {
        return Some(&mut node.children);
    }

    node.children
        .iter_mut()
        .find_map(|child| children_containing(child, id))
}

/// Remove a node (with its subtree) from its parent and return it
fn detach(tree: &mut ComponentNode, id: &str) -> Option<ComponentNode> {
    let siblings = children_containing(tree, id)?;
    let index = siblings.iter().position(|c| c.id == id)?;
    Some(siblings.remove(index))
}
