//! Common types shared across multiple modules.
//!
//! This module contains types that are used by both the annotation editing
//! systems and the hover-cursor feedback system to avoid code duplication.

use bevy::window::{CursorIcon, SystemCursorIcon};

/// Drag mode for an in-progress annotation edit.
///
/// Set when the select tool's pointer-down resolves a hit region, and used
/// by both the drag system (to decide how pointer movement applies) and the
/// cursor system (to pick an icon while hovering or dragging).
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum EditDragMode {
    #[default]
    None,
    /// Translate the whole annotation
    MoveBody,
    /// Move a line's start endpoint
    MoveStart,
    /// Move a line's end endpoint
    MoveEnd,
    /// Adjust a circle's radius from its east-side handle
    ResizeRadius,
}

impl EditDragMode {
    /// Get the appropriate cursor icon for this drag mode.
    pub fn cursor_icon(&self) -> Option<CursorIcon> {
        match self {
            EditDragMode::None => None,
            EditDragMode::MoveBody => Some(CursorIcon::System(SystemCursorIcon::Move)),
            EditDragMode::MoveStart | EditDragMode::MoveEnd => {
                Some(CursorIcon::System(SystemCursorIcon::Pointer))
            }
            EditDragMode::ResizeRadius => {
                Some(CursorIcon::System(SystemCursorIcon::EwResize))
            }
        }
    }
}
