//! # Sitecraft Tree
//!
//! The page document model: a tree of placed UI components.
//!
//! ## Contents
//!
//! - [`ComponentNode`]: the node type, with builder helpers
//! - Traversal: [`find_node`], [`find_parent`], [`siblings`], [`is_descendant`], ...
//! - Flatten/rebuild: [`flatten`] and [`rebuild`] convert between the tree and
//!   a flat [`SortableItem`] list for list-based reordering widgets
//! - [`validate_tree`]: id uniqueness check for trees arriving from outside
//!
//! Queries and conversions never modify their input; [`find_node_mut`] is the
//! one in-place accessor, for callers that own a tree. Structural edits live
//! in `sitecraft-editor`.

mod error;
mod flatten;
mod node;
mod traverse;
mod visitor;

pub use error::{RebuildError, TreeError};
pub use flatten::{flatten, rebuild, reorder_items, try_rebuild, SortableItem};
pub use node::{ComponentNode, Props};
pub use traverse::{
    ancestors, depth, find_node, find_node_mut, find_parent, index_in_parent, is_descendant, siblings,
    validate_tree,
};
pub use visitor::{walk_node, walk_tree, Visitor};
