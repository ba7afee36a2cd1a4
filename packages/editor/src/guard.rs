//! # Move Guard
//!
//! Structural legality of a proposed move. This is the only gate between a
//! drop and a mutation that could make a node its own ancestor.

use crate::errors::MoveError;
use sitecraft_tree::{find_node, is_descendant, ComponentNode};

/// Whether `source_id` may be moved relative to `target_id`.
///
/// Illegal when the two are the same node, or when the target lives inside
/// the source's subtree. Everything else is legal here; missing ids are the
/// operator's concern.
pub fn can_move(root: &ComponentNode, source_id: &str, target_id: &str) -> bool {
    if source_id == target_id {
        return false;
    }

    !is_descendant(root, source_id, target_id)
}

/// Same rules as [`can_move`], plus existence of both nodes, with the reason
pub fn check_move(root: &ComponentNode, source_id: &str, target_id: &str) -> Result<(), MoveError> {
    if source_id == target_id {
        return Err(MoveError::SelfMove(source_id.to_string()));
    }

    find_node(root, source_id).ok_or_else(|| MoveError::NodeNotFound(source_id.to_string()))?;
    find_node(root, target_id).ok_or_else(|| MoveError::NodeNotFound(target_id.to_string()))?;

    if is_descendant(root, source_id, target_id) {
        return Err(MoveError::CycleDetected {
            node_id: source_id.to_string(),
            target_id: target_id.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> ComponentNode {
        ComponentNode::new("root", "page")
            .with_child(
                ComponentNode::new("section1", "section")
                    .with_child(ComponentNode::new("text1", "text"))
                    .with_child(ComponentNode::new("button1", "button")),
            )
            .with_child(ComponentNode::new("section2", "section").with_child(ComponentNode::new("text2", "text")))
    }

    #[test]
    fn test_self_move_rejected() {
        let tree = page();
        for id in tree.ids() {
            assert!(!can_move(&tree, id, id), "{id} into itself");
        }
        assert_eq!(
            check_move(&tree, "text1", "text1"),
            Err(MoveError::SelfMove("text1".to_string()))
        );
    }

    #[test]
    fn test_ancestor_into_descendant_rejected() {
        let tree = page();
        assert!(!can_move(&tree, "section1", "text1"));
        assert!(!can_move(&tree, "root", "text2"));
        assert_eq!(
            check_move(&tree, "section1", "button1"),
            Err(MoveError::CycleDetected {
                node_id: "section1".to_string(),
                target_id: "button1".to_string(),
            })
        );
    }

    #[test]
    fn test_legal_moves() {
        let tree = page();
        assert!(can_move(&tree, "text1", "section2"));
        assert!(can_move(&tree, "text1", "root"));
        assert!(can_move(&tree, "section2", "section1"));
        assert!(check_move(&tree, "button1", "text2").is_ok());
    }

    #[test]
    fn test_missing_nodes() {
        let tree = page();
        // Only the two structural rules apply to can_move
        assert!(can_move(&tree, "ghost", "text1"));
        assert_eq!(
            check_move(&tree, "ghost", "text1"),
            Err(MoveError::NodeNotFound("ghost".to_string()))
        );
        assert_eq!(
            check_move(&tree, "text1", "ghost"),
            Err(MoveError::NodeNotFound("ghost".to_string()))
        );
    }
}
