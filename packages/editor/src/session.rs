//! # Drag Session
//!
//! Drives one drag gesture at a time, from pointer-down to drop.
//!
//! ```text
//!            start_drag(id)            hover(Some(over))
//!   Idle ─────────────────► Dragging ◄──────────────────► Over
//!    ▲                        │        hover(None)         │
//!    │        drop / cancel   │                            │
//!    └────────────────────────┴────────────────────────────┘
//! ```
//!
//! A session is an explicit value owned by the interaction layer, so several
//! editors can run side by side. It never holds the tree: every call that
//! needs structure takes the current snapshot, which may have changed since
//! the drag began. Nothing is carried over between gestures.

use crate::config::EditorConfig;
use crate::drop_position::{resolve_drop_position_with, Bounds, DropFeedback, DropPosition};
use crate::errors::{EditorError, MoveError};
use crate::guard::can_move;
use crate::mutations::MoveRequest;
use sitecraft_tree::ComponentNode;

/// Where the current gesture stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,

    /// Dragging with no drop target under the pointer
    Dragging { active_id: String },

    /// Dragging over a candidate target
    Over { active_id: String, over_id: String },
}

impl DragState {
    pub fn active_id(&self) -> Option<&str> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { active_id } | DragState::Over { active_id, .. } => Some(active_id.as_str()),
        }
    }

    pub fn over_id(&self) -> Option<&str> {
        match self {
            DragState::Over { over_id, .. } => Some(over_id.as_str()),
            _ => None,
        }
    }
}

/// Final pointer position at drop time, against the target's bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropPoint {
    pub target_bounds: Bounds,
    pub pointer_y: f64,
}

impl DropPoint {
    pub fn new(target_bounds: Bounds, pointer_y: f64) -> Self {
        Self { target_bounds, pointer_y }
    }
}

/// One completed move, as seen by change listeners
#[derive(Debug, Clone, Copy)]
pub struct TreeChange<'a> {
    /// Snapshot the move was applied to
    pub previous: &'a ComponentNode,
    /// New snapshot
    pub current: &'a ComponentNode,
    pub request: &'a MoveRequest,
}

/// Receives a notification for each successful move
pub trait TreeChangeListener {
    fn on_tree_change(&mut self, change: &TreeChange<'_>);
}

impl<F> TreeChangeListener for F
where
    F: FnMut(&TreeChange<'_>),
{
    fn on_tree_change(&mut self, change: &TreeChange<'_>) {
        self(change)
    }
}

/// How a drop ended. The session is `Idle` afterwards in every case.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// Nothing was being dragged
    Idle,

    /// Released over no target, or over the dragged node itself
    NoTarget,

    /// Guard or operator refused
    Rejected { request: MoveRequest, error: MoveError },

    /// Legal move that leaves the tree as it was
    Unchanged { request: MoveRequest },

    /// The tree changed; listeners have been notified
    Moved { root: ComponentNode, request: MoveRequest },
}

impl DropOutcome {
    /// The new tree, if this drop produced one
    pub fn into_root(self) -> Option<ComponentNode> {
        match self {
            DropOutcome::Moved { root, .. } => Some(root),
            _ => None,
        }
    }

    pub fn is_moved(&self) -> bool {
        matches!(self, DropOutcome::Moved { .. })
    }
}

/// Drag-and-drop state machine for one editor
pub struct DragSession {
    state: DragState,
    config: EditorConfig,
    listeners: Vec<Box<dyn TreeChangeListener>>,
}

impl DragSession {
    /// Create a session with default config
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            config: EditorConfig::default(),
            listeners: Vec::new(),
        }
    }

    /// Create a session with validated config
    pub fn with_config(config: EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;

        Ok(Self {
            state: DragState::Idle,
            config,
            listeners: Vec::new(),
        })
    }

    /// Register a change listener
    pub fn subscribe(&mut self, listener: impl TreeChangeListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn active_id(&self) -> Option<&str> {
        self.state.active_id()
    }

    pub fn over_id(&self) -> Option<&str> {
        self.state.over_id()
    }

    pub fn is_dragging(&self) -> bool {
        self.state != DragState::Idle
    }

    /// Pointer pressed on a draggable node. Refused while another drag is active.
    pub fn start_drag(&mut self, id: &str) -> bool {
        if let Some(active_id) = self.state.active_id() {
            tracing::warn!("start_drag({}) ignored: already dragging {}", id, active_id);
            return false;
        }

        tracing::debug!("Drag started: {}", id);
        self.state = DragState::Dragging {
            active_id: id.to_string(),
        };
        true
    }

    /// Pointer moved over `over_id`, or over nothing. Ignored while idle.
    pub fn hover(&mut self, over_id: Option<&str>) -> bool {
        let Some(active_id) = self.state.active_id().map(str::to_string) else {
            return false;
        };

        self.state = match over_id {
            Some(over_id) => DragState::Over {
                active_id,
                over_id: over_id.to_string(),
            },
            None => DragState::Dragging { active_id },
        };
        true
    }

    /// Drop indicator for the current target: resolved position plus whether
    /// the guard would allow it
    pub fn feedback(&self, root: &ComponentNode, point: DropPoint) -> Option<DropFeedback> {
        let DragState::Over { active_id, over_id } = &self.state else {
            return None;
        };

        let position = self.resolve(&point);
        let accepted = MoveRequest::new(active_id.as_str(), over_id.as_str(), position)
            .validate(root)
            .is_ok();

        Some(DropFeedback {
            over_id: over_id.clone(),
            position,
            accepted,
        })
    }

    /// Pointer released. Applies the move if legal and notifies listeners.
    ///
    /// Listeners only hear about drops that produce a different tree: a legal
    /// move that lands the node where it already was returns
    /// [`DropOutcome::Unchanged`] and notifies no one.
    pub fn drop(&mut self, root: &ComponentNode, point: DropPoint) -> DropOutcome {
        let (active_id, over_id) = match std::mem::take(&mut self.state) {
            DragState::Idle => return DropOutcome::Idle,
            DragState::Dragging { active_id } => {
                tracing::debug!("Drop of {} over no target", active_id);
                return DropOutcome::NoTarget;
            }
            DragState::Over { active_id, over_id } => (active_id, over_id),
        };

        if active_id == over_id {
            tracing::debug!("Drop of {} onto itself", active_id);
            return DropOutcome::NoTarget;
        }

        let request = MoveRequest::new(active_id, over_id, self.resolve(&point));

        if !can_move(root, &request.source_id, &request.target_id) {
            let error = MoveError::CycleDetected {
                node_id: request.source_id.clone(),
                target_id: request.target_id.clone(),
            };
            tracing::warn!("Drop rejected: {}", error);
            return DropOutcome::Rejected { request, error };
        }

        let new_root = match request.apply(root, self.config.inside_placement) {
            Ok(new_root) => new_root,
            Err(error) => {
                tracing::warn!("Drop rejected: {}", error);
                return DropOutcome::Rejected { request, error };
            }
        };

        if new_root == *root {
            return DropOutcome::Unchanged { request };
        }

        let change = TreeChange {
            previous: root,
            current: &new_root,
            request: &request,
        };
        for listener in &mut self.listeners {
            listener.on_tree_change(&change);
        }

        DropOutcome::Moved { root: new_root, request }
    }

    /// Abort the gesture. Returns whether a drag was in progress.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            tracing::debug!("Drag cancelled");
        }
        self.state = DragState::Idle;
        was_dragging
    }

    fn resolve(&self, point: &DropPoint) -> DropPosition {
        resolve_drop_position_with(&point.target_bounds, point.pointer_y, self.config.drop_threshold)
    }
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DragSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragSession")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_creation() {
        let session = DragSession::new();
        assert_eq!(session.state(), &DragState::Idle);
        assert!(!session.is_dragging());
        assert_eq!(session.active_id(), None);
    }

    #[test]
    fn test_with_config_validates() {
        let config = EditorConfig {
            drop_threshold: 2.0,
            ..EditorConfig::default()
        };
        assert!(DragSession::with_config(config).is_err());
    }

    #[test]
    fn test_transitions() {
        let mut session = DragSession::new();

        assert!(!session.hover(Some("a")));
        assert_eq!(session.state(), &DragState::Idle);

        assert!(session.start_drag("a"));
        assert_eq!(
            session.state(),
            &DragState::Dragging {
                active_id: "a".to_string()
            }
        );

        assert!(!session.start_drag("b"));
        assert_eq!(session.active_id(), Some("a"));

        session.hover(Some("b"));
        assert_eq!(session.over_id(), Some("b"));

        session.hover(None);
        assert_eq!(session.over_id(), None);
        assert_eq!(session.active_id(), Some("a"));

        assert!(session.cancel());
        assert!(!session.cancel());
        assert_eq!(session.state(), &DragState::Idle);
    }

    #[test]
    fn test_drop_while_idle() {
        let mut session = DragSession::new();
        let root = ComponentNode::new("root", "page");
        let point = DropPoint::new(Bounds::vertical(0.0, 10.0), 5.0);

        assert_eq!(session.drop(&root, point), DropOutcome::Idle);
    }
}
