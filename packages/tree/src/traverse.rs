//! # Traversal
//!
//! Read-only queries over a component tree.
//!
//! Lookups return `None` instead of failing: the tree handed in may have
//! changed since the caller last saw it (a node deleted by another control
//! mid-drag), and a missing id is an ordinary outcome.

use crate::error::TreeError;
use crate::node::ComponentNode;
use crate::visitor::{walk_node, walk_tree, Visitor};
use std::collections::HashSet;

/// Depth-first search by id
pub fn find_node<'a>(root: &'a ComponentNode, id: &str) -> Option<&'a ComponentNode> {
    if root.id == id {
        return Some(root);
    }

    root.children.iter().find_map(|child| find_node(child, id))
}

/// Mutable depth-first search by id
pub fn find_node_mut<'a>(root: &'a mut ComponentNode, id: &str) -> Option<&'a mut ComponentNode> {
    if root.id == id {
        return Some(root);
    }

    root.children
        .iter_mut()
        .find_map(|child| find_node_mut(child, id))
}

/// The node whose `children` contains `id`. `None` for the root or an absent id.
pub fn find_parent<'a>(root: &'a ComponentNode, id: &str) -> Option<&'a ComponentNode> {
    if root.children.iter().any(|c| c.id == id) {
        return Some(root);
    }

    root.children.iter().find_map(|child| find_parent(child, id))
}

/// Other children of the node's parent, in order. Empty for the root or an absent id.
pub fn siblings<'a>(root: &'a ComponentNode, id: &str) -> Vec<&'a ComponentNode> {
    match find_parent(root, id) {
        Some(parent) => parent.children.iter().filter(|c| c.id != id).collect(),
        None => Vec::new(),
    }
}

/// Position of the node among its siblings
pub fn index_in_parent(root: &ComponentNode, id: &str) -> Option<usize> {
    find_parent(root, id)?.children.iter().position(|c| c.id == id)
}

/// Whether `id` sits strictly below `ancestor_id`.
///
/// False when either id is absent, and false for `ancestor_id == id`.
pub fn is_descendant(root: &ComponentNode, ancestor_id: &str, id: &str) -> bool {
    match find_node(root, ancestor_id) {
        Some(ancestor) => ancestor.children.iter().any(|child| find_node(child, id).is_some()),
        None => false,
    }
}

/// Path from the root down to the node's parent (root first).
///
/// `Some(vec![])` for the root itself, `None` for an absent id.
pub fn ancestors<'a>(root: &'a ComponentNode, id: &str) -> Option<Vec<&'a ComponentNode>> {
    fn search<'a>(node: &'a ComponentNode, id: &str, path: &mut Vec<&'a ComponentNode>) -> bool {
        if node.id == id {
            return true;
        }

        path.push(node);
        for child in &node.children {
            if search(child, id, path) {
                return true;
            }
        }
        path.pop();

        false
    }

    let mut path = Vec::new();
    search(root, id, &mut path).then_some(path)
}

/// Distance from the root (root is 0)
pub fn depth(root: &ComponentNode, id: &str) -> Option<usize> {
    ancestors(root, id).map(|path| path.len())
}

struct IdChecker<'a> {
    seen: HashSet<&'a str>,
    error: Option<TreeError>,
}

impl<'a> Visitor<'a> for IdChecker<'a> {
    fn visit_node(&mut self, node: &'a ComponentNode, parent: Option<&'a ComponentNode>, depth: usize) {
        if self.error.is_some() {
            return;
        }

        if node.id.is_empty() {
            self.error = Some(TreeError::EmptyId {
                parent: parent.map(|p| p.id.clone()),
            });
            return;
        }

        if !self.seen.insert(node.id.as_str()) {
            self.error = Some(TreeError::DuplicateId(node.id.clone()));
            return;
        }

        walk_node(self, node, depth);
    }
}

/// Check that every id is non-empty and unique across the tree
pub fn validate_tree(root: &ComponentNode) -> Result<(), TreeError> {
    let mut checker = IdChecker {
        seen: HashSet::new(),
        error: None,
    };
    walk_tree(&mut checker, root);

    match checker.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// root → [section1 → [text1, button1], section2 → [text2]]
    fn page() -> ComponentNode {
        ComponentNode::new("root", "page")
            .with_child(
                ComponentNode::new("section1", "section")
                    .with_child(ComponentNode::new("text1", "text"))
                    .with_child(ComponentNode::new("button1", "button")),
            )
            .with_child(ComponentNode::new("section2", "section").with_child(ComponentNode::new("text2", "text")))
    }

    fn ids(nodes: &[&ComponentNode]) -> Vec<String> {
        nodes.iter().map(|n| n.id.clone()).collect()
    }

    #[test]
    fn test_find_node() {
        let tree = page();
        assert_eq!(find_node(&tree, "button1").map(|n| n.kind.as_str()), Some("button"));
        assert_eq!(find_node(&tree, "root").map(|n| n.id.as_str()), Some("root"));
        assert!(find_node(&tree, "missing").is_none());
    }

    #[test]
    fn test_find_parent() {
        let tree = page();
        assert_eq!(find_parent(&tree, "text2").map(|n| n.id.as_str()), Some("section2"));
        assert_eq!(find_parent(&tree, "section1").map(|n| n.id.as_str()), Some("root"));
        assert!(find_parent(&tree, "root").is_none());
        assert!(find_parent(&tree, "missing").is_none());
    }

    #[test]
    fn test_siblings_exclude_self() {
        let tree = page();
        assert_eq!(ids(&siblings(&tree, "text1")), vec!["button1"]);
        assert_eq!(ids(&siblings(&tree, "section2")), vec!["section1"]);
        assert!(siblings(&tree, "text2").is_empty());
        assert!(siblings(&tree, "root").is_empty());
        assert!(siblings(&tree, "missing").is_empty());
    }

    #[test]
    fn test_is_descendant() {
        let tree = page();
        assert!(is_descendant(&tree, "section1", "text1"));
        assert!(is_descendant(&tree, "root", "text2"));
        assert!(!is_descendant(&tree, "section1", "section1"));
        assert!(!is_descendant(&tree, "text1", "section1"));
        assert!(!is_descendant(&tree, "section2", "text1"));
        assert!(!is_descendant(&tree, "missing", "text1"));
    }

    #[test]
    fn test_ancestors_and_depth() {
        let tree = page();
        assert_eq!(ids(&ancestors(&tree, "text1").unwrap()), vec!["root", "section1"]);
        assert_eq!(ancestors(&tree, "root").unwrap().len(), 0);
        assert!(ancestors(&tree, "missing").is_none());

        assert_eq!(depth(&tree, "root"), Some(0));
        assert_eq!(depth(&tree, "button1"), Some(2));
        assert_eq!(depth(&tree, "missing"), None);
    }

    #[test]
    fn test_index_in_parent() {
        let tree = page();
        assert_eq!(index_in_parent(&tree, "button1"), Some(1));
        assert_eq!(index_in_parent(&tree, "section1"), Some(0));
        assert_eq!(index_in_parent(&tree, "root"), None);
    }

    #[test]
    fn test_find_node_mut_edits_in_place() {
        let mut tree = page();
        find_node_mut(&mut tree, "text2").unwrap().kind = "heading".to_string();
        assert_eq!(find_node(&tree, "text2").unwrap().kind, "heading");
    }

    #[test]
    fn test_validate_tree() {
        assert!(validate_tree(&page()).is_ok());

        let dup = page().with_child(ComponentNode::new("text1", "text"));
        assert_eq!(validate_tree(&dup), Err(TreeError::DuplicateId("text1".to_string())));

        let empty = ComponentNode::new("root", "page").with_child(ComponentNode::new("", "text"));
        assert_eq!(
            validate_tree(&empty),
            Err(TreeError::EmptyId {
                parent: Some("root".to_string())
            })
        );
    }
}
