//! Manipulation state machine for pointer interactions.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging(Move)              (press on an item body)
//! Idle -> Dragging(Resize(h))         (press on item handle h)
//! Idle -> Dragging(CropAdjust(h))     (press on an item in crop mode;
//!                                      h = None pans the crop)
//!
//! Dragging -> Idle                    (release, page change, deletion)
//! ```

use crate::types::{CropRect, Handle, ItemId, Point, Rect};

/// What a drag does to the item under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// Translate the item box
    Move,
    /// Move the edges adjacent to a handle of the item box
    Resize(Handle),
    /// Resize the crop by a handle, or pan it when no handle was hit
    CropAdjust(Option<Handle>),
}

/// Item geometry captured at press time. Every motion is computed from this,
/// never from the previous motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSnapshot {
    pub bounds: Rect,
    pub crop: CropRect,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No active drag
    #[default]
    Idle,

    Dragging {
        item_id: ItemId,
        kind: DragKind,
        /// Press position in device space
        press: Point,
        snapshot: DragSnapshot,
    },
}

impl InputState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Get the item ID being dragged, if any
    pub fn dragged_item_id(&self) -> Option<ItemId> {
        match self {
            Self::Dragging { item_id, .. } => Some(*item_id),
            Self::Idle => None,
        }
    }

    pub fn drag_kind(&self) -> Option<DragKind> {
        match self {
            Self::Dragging { kind, .. } => Some(*kind),
            Self::Idle => None,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_drag(&mut self, item_id: ItemId, kind: DragKind, press: Point, snapshot: DragSnapshot) {
        *self = Self::Dragging {
            item_id,
            kind,
            press,
            snapshot,
        };
    }
}
