//! # Component Tree
//!
//! The document model behind the visual editor.
//!
//! A page is a single [`ComponentNode`] root. Every node owns its children
//! exclusively, so the tree is acyclic and single-parent by construction.
//! Sibling order is rendering order.
//!
//! Snapshots are plain values: editing operations never mutate a tree the
//! caller holds, they return a new root.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque component data. The editing core never looks inside.
pub type Props = HashMap<String, serde_json::Value>;

/// One placed UI component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    /// Unique across the whole tree
    pub id: String,

    /// Component kind tag ("section", "button", ...)
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub props: Props,

    #[serde(default)]
    pub children: Vec<ComponentNode>,
}

impl ComponentNode {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            props: Props::new(),
            children: Vec::new(),
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }

    pub fn with_child(mut self, child: ComponentNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = ComponentNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Copy of this node without its children
    pub fn payload(&self) -> Self {
        Self {
            id: self.id.clone(),
            kind: self.kind.clone(),
            props: self.props.clone(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ComponentNode::node_count).sum::<usize>()
    }

    /// All ids in pre-order
    pub fn ids(&self) -> Vec<&str> {
        let mut ids = Vec::with_capacity(self.node_count());
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            ids.push(node.id.as_str());
            stack.extend(node.children.iter().rev());
        }

        ids
    }
}
