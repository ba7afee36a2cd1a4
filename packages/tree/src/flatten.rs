//! # Flatten / Rebuild
//!
//! Bidirectional conversion between the component tree and a flat,
//! order-annotated list for list-based sortable widgets.
//!
//! ```text
//! root                      id        parentId   index
//! ├── section1              root      -          0
//! │   ├── text1     ──►     section1  root       0
//! │   └── button1           text1     section1   0
//! └── section2              button1   section1   1
//!     └── text2             section2  root       1
//!                           text2     section2   0
//! ```
//!
//! The tree stays authoritative. A list is only meant to be rebuilt if it
//! came from [`flatten`]; [`try_rebuild`] still rejects malformed input
//! instead of guessing.

use crate::error::RebuildError;
use crate::node::ComponentNode;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Flat projection of one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortableItem {
    pub id: String,

    /// Node payload. `children` is always empty here; structure lives in
    /// `parent_id` and `index`.
    pub component: ComponentNode,

    /// Absent only for the root's item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Position among items sharing `parent_id`
    pub index: usize,
}

/// Pre-order projection of the tree
pub fn flatten(root: &ComponentNode) -> Vec<SortableItem> {
    let mut items = Vec::with_capacity(root.node_count());
    flatten_into(root, None, 0, &mut items);
    items
}

fn flatten_into(node: &ComponentNode, parent_id: Option<&str>, index: usize, items: &mut Vec<SortableItem>) {
    items.push(SortableItem {
        id: node.id.clone(),
        component: node.payload(),
        parent_id: parent_id.map(str::to_string),
        index,
    });

    for (child_index, child) in node.children.iter().enumerate() {
        flatten_into(child, Some(&node.id), child_index, items);
    }
}

/// Reassemble a tree from a flattened list
pub fn try_rebuild(items: &[SortableItem]) -> Result<ComponentNode, RebuildError> {
    let mut ids = HashSet::with_capacity(items.len());
    for item in items {
        if !ids.insert(item.id.as_str()) {
            return Err(RebuildError::DuplicateId(item.id.clone()));
        }
    }

    let roots: Vec<&SortableItem> = items.iter().filter(|i| i.parent_id.is_none()).collect();
    let root = match roots.as_slice() {
        [] => return Err(RebuildError::MissingRoot),
        [root] => *root,
        _ => {
            return Err(RebuildError::MultipleRoots(
                roots.iter().map(|r| r.id.clone()).collect(),
            ))
        }
    };

    let mut groups: HashMap<&str, Vec<&SortableItem>> = HashMap::new();
    for item in items {
        if let Some(parent_id) = &item.parent_id {
            if !ids.contains(parent_id.as_str()) {
                return Err(RebuildError::MissingParent {
                    id: item.id.clone(),
                    parent_id: parent_id.clone(),
                });
            }
            groups.entry(parent_id.as_str()).or_default().push(item);
        }
    }

    // Stable, so equal indices keep list order
    for group in groups.values_mut() {
        group.sort_by_key(|item| item.index);
    }

    let mut built = HashSet::with_capacity(items.len());
    let tree = assemble(root, &groups, &mut built);

    if built.len() != items.len() {
        let unreachable = items
            .iter()
            .filter(|i| !built.contains(i.id.as_str()))
            .map(|i| i.id.clone())
            .collect();
        return Err(RebuildError::Unreachable(unreachable));
    }

    Ok(tree)
}

fn assemble<'a>(
    item: &'a SortableItem,
    groups: &HashMap<&str, Vec<&'a SortableItem>>,
    built: &mut HashSet<&'a str>,
) -> ComponentNode {
    built.insert(item.id.as_str());

    let mut node = item.component.payload();
    node.id = item.id.clone();

    if let Some(children) = groups.get(item.id.as_str()) {
        node.children = children
            .iter()
            .map(|child| assemble(child, groups, built))
            .collect();
    }

    node
}

/// Reassemble a tree from a flattened list, `None` on any structural violation
pub fn rebuild(items: &[SortableItem]) -> Option<ComponentNode> {
    try_rebuild(items).ok()
}

/// Sibling reorder on the flat list, as sortable widgets do on drag end.
///
/// `active_id` takes `over_id`'s position within their shared parent and the
/// group is re-indexed. Returns a fresh pre-order list, or `None` when either
/// id is missing, the two are not siblings, or the list does not rebuild.
pub fn reorder_items(items: &[SortableItem], active_id: &str, over_id: &str) -> Option<Vec<SortableItem>> {
    let active = items.iter().find(|i| i.id == active_id)?;
    let over = items.iter().find(|i| i.id == over_id)?;

    let parent_id = active.parent_id.clone()?;
    if over.parent_id.as_deref() != Some(parent_id.as_str()) {
        return None;
    }

    let mut group: Vec<&SortableItem> = items
        .iter()
        .filter(|i| i.parent_id.as_deref() == Some(parent_id.as_str()))
        .collect();
    group.sort_by_key(|i| i.index);

    let from = group.iter().position(|i| i.id == active_id)?;
    let to = group.iter().position(|i| i.id == over_id)?;
    let moved = group.remove(from);
    group.insert(to, moved);

    let new_index: HashMap<&str, usize> = group
        .iter()
        .enumerate()
        .map(|(index, item)| (item.id.as_str(), index))
        .collect();

    let reordered: Vec<SortableItem> = items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if let Some(index) = new_index.get(item.id.as_str()) {
                item.index = *index;
            }
            item
        })
        .collect();

    rebuild(&reordered).map(|tree| flatten(&tree))
}
