//! Annotation layer: drawing tools, hit-testing, and editing.
//!
//! Annotations are screen-space marks drawn over the chart - straight lines,
//! circles, freehand paths, and text labels. All geometry lives in pixel
//! space, so annotations stay put when the underlying data rescales.
//!
//! ## Module Structure
//!
//! - [`components`] - Entity components (LineAnnotation, CircleAnnotation, ...)
//! - [`state`] - State resources (DrawState, EditDragState, AnnotationSettings)
//! - [`hit_testing`] - Per-annotation hit classification with handle priority
//! - [`tools`] - Tool enum, keyboard shortcuts, tool cursor
//! - [`line_tool`] / [`circle_tool`] / [`draw_tool`] / [`text_tool`] - Creation systems
//! - [`edit`] - Select tool: selection, body/handle drags, deletion
//! - [`cursor`] - Hover cursor feedback for the select tool
//! - [`rendering`] - Gizmo rendering and previews

pub mod components;
pub mod cursor;
pub mod edit;
pub mod hit_testing;
pub mod rendering;
pub mod state;
pub mod tools;

mod circle_tool;
mod draw_tool;
mod line_tool;
mod text_tool;

pub use components::{
    AnnotationMarker, CircleAnnotation, FreehandAnnotation, LineAnnotation, Selected, TextLabel,
};
pub use hit_testing::{check_circle_hit, check_freehand_hit, check_line_hit, HitRegion};
pub use state::{AnnotationSettings, CircleDrawState, DrawState, EditDragState, LineDrawState};
pub use tools::{AnnotationTool, CurrentTool};

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass};

/// Check if the cursor is over egui UI
pub fn is_cursor_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false)
}

pub struct AnnotatePlugin;

impl Plugin for AnnotatePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentTool>()
            .init_resource::<AnnotationSettings>()
            .init_resource::<DrawState>()
            .init_resource::<LineDrawState>()
            .init_resource::<CircleDrawState>()
            .init_resource::<EditDragState>()
            .add_systems(
                Update,
                (
                    tools::handle_tool_shortcuts,
                    line_tool::handle_line,
                    circle_tool::handle_circle,
                    draw_tool::handle_draw,
                    text_tool::handle_text,
                    edit::handle_selection,
                    edit::handle_edit_drag,
                    edit::handle_deletion,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    rendering::render_lines,
                    rendering::render_circles,
                    rendering::render_freehand,
                    rendering::render_line_preview,
                    rendering::render_circle_preview,
                    rendering::render_draw_preview,
                    rendering::render_selection_indicators,
                ),
            )
            .add_systems(
                Update,
                (tools::update_cursor_icon, cursor::update_edit_cursor).chain(),
            )
            .add_systems(EguiPrimaryContextPass, rendering::render_text_labels);
    }
}
