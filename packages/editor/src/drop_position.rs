//! # Drop Position
//!
//! Turns a pointer's vertical position over a target into an insertion
//! directive.
//!
//! ```text
//!  top ┌──────────────────┐
//!      │      before      │  threshold × height
//!      ├──────────────────┤
//!      │                  │
//!      │      inside      │
//!      │                  │
//!      ├──────────────────┤
//!      │      after       │  threshold × height
//!      └──────────────────┘
//! ```
//!
//! Purely geometric and stateless. Called on every pointer move for live
//! feedback, and once more with the final pointer position at drop time.

use serde::{Deserialize, Serialize};

/// Fraction of the target's height that counts as "before" (top band) or
/// "after" (bottom band)
pub const DEFAULT_DROP_THRESHOLD: f64 = 0.25;

/// Largest usable threshold; at 0.5 the two bands meet and `Inside` only
/// happens exactly on the midline
pub const MAX_DROP_THRESHOLD: f64 = 0.5;

/// Where a dragged node lands relative to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropPosition {
    /// Sibling, immediately before the target
    Before,
    /// Sibling, immediately after the target
    After,
    /// Child of the target
    Inside,
}

impl std::fmt::Display for DropPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DropPosition::Before => "before",
            DropPosition::After => "after",
            DropPosition::Inside => "inside",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for DropPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before" => Ok(DropPosition::Before),
            "after" => Ok(DropPosition::After),
            "inside" => Ok(DropPosition::Inside),
            other => Err(format!("Invalid drop position: {}. Use: before, after, or inside", other)),
        }
    }
}

/// Target element's bounding rectangle, in the pointer's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Only the vertical extent matters for drop resolution
    pub fn vertical(top: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            top,
            width: 0.0,
            height,
        }
    }
}

/// Resolve with [`DEFAULT_DROP_THRESHOLD`]
pub fn resolve_drop_position(bounds: &Bounds, pointer_y: f64) -> DropPosition {
    resolve_drop_position_with(bounds, pointer_y, DEFAULT_DROP_THRESHOLD)
}

/// Resolve with an explicit threshold fraction, clamped to `[0, 0.5]`.
///
/// A pointer above the target resolves to `Before`, below it to `After`.
/// Non-finite geometry resolves to `Inside`.
pub fn resolve_drop_position_with(bounds: &Bounds, pointer_y: f64, threshold: f64) -> DropPosition {
    if !(pointer_y.is_finite() && bounds.top.is_finite() && bounds.height.is_finite()) {
        return DropPosition::Inside;
    }

    let threshold = if threshold.is_finite() {
        threshold.clamp(0.0, MAX_DROP_THRESHOLD)
    } else {
        DEFAULT_DROP_THRESHOLD
    };

    let height = bounds.height.max(0.0);
    let relative_y = pointer_y - bounds.top;
    let band = height * threshold;

    if relative_y < band {
        DropPosition::Before
    } else if relative_y > height - band {
        DropPosition::After
    } else {
        DropPosition::Inside
    }
}

/// Live hover feedback for the drop indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropFeedback {
    pub over_id: String,
    pub position: DropPosition,
    /// Whether the guard would allow this drop
    pub accepted: bool,
}
