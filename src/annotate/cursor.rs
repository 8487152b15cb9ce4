//! Cursor icon feedback for the select tool.

use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};
use bevy_egui::EguiContexts;

use crate::chart::PointerParams;

use super::components::{AnnotationMarker, CircleAnnotation, FreehandAnnotation, LineAnnotation};
use super::edit::{drag_mode_for, find_hit};
use super::state::EditDragState;
use super::tools::{AnnotationTool, CurrentTool};

/// Update the cursor icon based on what the pointer hovers over.
///
/// While a drag is active the drag mode's cursor wins, so the icon stays
/// stable even when the pointer momentarily leaves the hit region.
#[allow(clippy::too_many_arguments)]
pub fn update_edit_cursor(
    current_tool: Res<CurrentTool>,
    window_query: Query<Entity, With<PrimaryWindow>>,
    pointer: PointerParams,
    lines_query: Query<(Entity, &LineAnnotation), With<AnnotationMarker>>,
    circles_query: Query<(Entity, &CircleAnnotation), With<AnnotationMarker>>,
    freehand_query: Query<(Entity, &FreehandAnnotation), With<AnnotationMarker>>,
    drag_state: Res<EditDragState>,
    cursor_override: Res<crate::overlay::CursorOverride>,
    mut commands: Commands,
    mut contexts: EguiContexts,
) {
    // A toolbar drag holds the window cursor; stay out of its way
    if cursor_override.is_active() {
        return;
    }

    // Only applies to the select tool
    if current_tool.tool != AnnotationTool::Select {
        return;
    }

    let Ok(window_entity) = window_query.single() else {
        return;
    };

    // Use default cursor over UI
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.is_pointer_over_area()
    {
        commands
            .entity(window_entity)
            .insert(CursorIcon::System(SystemCursorIcon::Default));
        return;
    }

    // If we're actively dragging, use the drag mode's cursor
    if drag_state.is_dragging
        && let Some(cursor) = drag_state.mode.cursor_icon()
    {
        commands.entity(window_entity).insert(cursor);
        return;
    }

    let Some(pixel_pos) = pointer.cursor_pixel_pos() else {
        return;
    };

    let hover_mode = find_hit(pixel_pos, &lines_query, &circles_query, &freehand_query)
        .map(|(_, region)| drag_mode_for(region));

    if let Some(cursor) = hover_mode.and_then(|mode| mode.cursor_icon()) {
        commands.entity(window_entity).insert(cursor);
        return;
    }

    // Default to the tool's cursor
    commands
        .entity(window_entity)
        .insert(current_tool.tool.cursor_icon());
}
