//! # Sitecraft Editor
//!
//! Structural editing engine behind the visual page editor's drag-and-drop.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ tree: ComponentNode, traversal, flatten     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor:                                     │
//! │  - guard: is the move structurally legal?   │
//! │  - drop position: pointer → before/after/   │
//! │    inside                                   │
//! │  - mutations: detach + reattach on a copy   │
//! │  - session: drag state machine, change      │
//! │    notifications                            │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ host: renderer, persistence, undo history   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Snapshots, not shared state**: a move returns a new root; the caller's
//!    tree is never mutated
//! 2. **Guard before mutate**: every move passes the cycle guard first
//! 3. **Failures are no-ops**: a refused drag leaves the tree as it was
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sitecraft_editor::{Bounds, DragSession, DropPoint};
//!
//! let mut session = DragSession::new();
//! session.subscribe(|change: &TreeChange<'_>| save(change.current));
//!
//! session.start_drag("text1");
//! session.hover(Some("section2"));
//! let outcome = session.drop(&root, DropPoint::new(Bounds::vertical(120.0, 80.0), 160.0));
//! if let Some(new_root) = outcome.into_root() {
//!     root = new_root;
//! }
//! ```

mod config;
mod drop_position;
mod errors;
mod guard;
mod mutations;
mod session;

pub use config::EditorConfig;
pub use drop_position::{
    resolve_drop_position, resolve_drop_position_with, Bounds, DropFeedback, DropPosition, DEFAULT_DROP_THRESHOLD,
    MAX_DROP_THRESHOLD,
};
pub use errors::{EditorError, MoveError};
pub use guard::{can_move, check_move};
pub use mutations::{move_node, try_move_node, InsidePlacement, MoveRequest};
pub use session::{DragSession, DragState, DropOutcome, DropPoint, TreeChange, TreeChangeListener};

// Re-export tree queries for editing controls that only need to inspect
pub use sitecraft_tree::{find_node, find_parent, siblings, ComponentNode};
