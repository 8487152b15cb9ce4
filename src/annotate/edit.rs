//! Select tool - click to select, then drag bodies, endpoints, and the
//! circle resize handle.
//!
//! Pointer-down aggregates per-annotation hit results front-to-back and
//! starts an edit-drag session from the winning hit; this is the caller-side
//! priority policy on top of the per-annotation classification in
//! [`super::hit_testing`].

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::chart::PointerParams;
use crate::common::EditDragMode;

use super::components::{
    AnnotationMarker, CircleAnnotation, FreehandAnnotation, LineAnnotation, Selected,
};
use super::hit_testing::{check_circle_hit, check_freehand_hit, check_line_hit, HitRegion};
use super::state::{EditDragOrigin, EditDragState};
use super::tools::{AnnotationTool, CurrentTool};
use super::is_cursor_over_ui;

/// A circle cannot be resized below this radius
const MIN_CIRCLE_RADIUS: f32 = 2.0;

/// Find which annotation (if any) the pointer lands on, and where.
///
/// Lines are tested before circles, circles before freehand paths; within a
/// kind, query iteration order decides. Text labels have no hit geometry
/// and are never returned.
pub fn find_hit(
    pixel: Vec2,
    lines_query: &Query<(Entity, &LineAnnotation), With<AnnotationMarker>>,
    circles_query: &Query<(Entity, &CircleAnnotation), With<AnnotationMarker>>,
    freehand_query: &Query<(Entity, &FreehandAnnotation), With<AnnotationMarker>>,
) -> Option<(Entity, HitRegion)> {
    for (entity, line) in lines_query.iter() {
        if let Some(region) = check_line_hit(pixel, line) {
            return Some((entity, region));
        }
    }

    for (entity, circle) in circles_query.iter() {
        if let Some(region) = check_circle_hit(pixel, circle) {
            return Some((entity, region));
        }
    }

    for (entity, path) in freehand_query.iter() {
        if let Some(region) = check_freehand_hit(pixel, path) {
            return Some((entity, region));
        }
    }

    None
}

/// Map a hit region to the drag mode it starts.
pub fn drag_mode_for(region: HitRegion) -> EditDragMode {
    match region {
        HitRegion::LineStart => EditDragMode::MoveStart,
        HitRegion::LineEnd => EditDragMode::MoveEnd,
        HitRegion::LineBody => EditDragMode::MoveBody,
        HitRegion::CircleResize => EditDragMode::ResizeRadius,
        HitRegion::CircleBody => EditDragMode::MoveBody,
        HitRegion::FreehandBody => EditDragMode::MoveBody,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn handle_selection(
    mut commands: Commands,
    mouse_button: Res<ButtonInput<MouseButton>>,
    current_tool: Res<CurrentTool>,
    pointer: PointerParams,
    lines_query: Query<(Entity, &LineAnnotation), With<AnnotationMarker>>,
    circles_query: Query<(Entity, &CircleAnnotation), With<AnnotationMarker>>,
    freehand_query: Query<(Entity, &FreehandAnnotation), With<AnnotationMarker>>,
    selected_query: Query<Entity, With<Selected>>,
    mut drag_state: ResMut<EditDragState>,
    mut contexts: EguiContexts,
) {
    if current_tool.tool != AnnotationTool::Select {
        return;
    }

    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(pixel_pos) = pointer.cursor_pixel_pos() else {
        return;
    };

    let Some((entity, region)) = find_hit(pixel_pos, &lines_query, &circles_query, &freehand_query)
    else {
        // Clicked empty space - clear the selection
        for selected in selected_query.iter() {
            commands.entity(selected).remove::<Selected>();
        }
        drag_state.clear();
        return;
    };

    // Move the selection to the clicked annotation
    for selected in selected_query.iter() {
        if selected != entity {
            commands.entity(selected).remove::<Selected>();
        }
    }
    commands.entity(entity).insert(Selected);

    // Capture original geometry so pointer movement applies as an offset
    let origin = if let Ok((_, line)) = lines_query.get(entity) {
        EditDragOrigin::Line {
            start: line.start,
            end: line.end,
        }
    } else if let Ok((_, circle)) = circles_query.get(entity) {
        EditDragOrigin::Circle {
            center: circle.center,
            radius: circle.radius,
        }
    } else if let Ok((_, path)) = freehand_query.get(entity) {
        EditDragOrigin::Freehand {
            points: path.points.clone(),
        }
    } else {
        return;
    };

    drag_state.is_dragging = true;
    drag_state.mode = drag_mode_for(region);
    drag_state.target = Some(entity);
    drag_state.drag_start = pixel_pos;
    drag_state.origin = Some(origin);
}

pub fn handle_edit_drag(
    mouse_button: Res<ButtonInput<MouseButton>>,
    current_tool: Res<CurrentTool>,
    pointer: PointerParams,
    mut drag_state: ResMut<EditDragState>,
    mut lines_query: Query<&mut LineAnnotation, With<AnnotationMarker>>,
    mut circles_query: Query<&mut CircleAnnotation, With<AnnotationMarker>>,
    mut freehand_query: Query<&mut FreehandAnnotation, With<AnnotationMarker>>,
) {
    if current_tool.tool != AnnotationTool::Select {
        drag_state.clear();
        return;
    }

    // Stop dragging on mouse release
    if mouse_button.just_released(MouseButton::Left) {
        drag_state.clear();
        return;
    }

    if !drag_state.is_dragging {
        return;
    }

    let Some(pixel_pos) = pointer.cursor_pixel_pos() else {
        return;
    };

    let Some(entity) = drag_state.target else {
        return;
    };

    let offset = pixel_pos - drag_state.drag_start;

    match (&drag_state.origin, drag_state.mode) {
        (Some(EditDragOrigin::Line { start, end }), mode) => {
            let Ok(mut line) = lines_query.get_mut(entity) else {
                return;
            };
            match mode {
                EditDragMode::MoveStart => line.start = *start + offset,
                EditDragMode::MoveEnd => line.end = *end + offset,
                EditDragMode::MoveBody => {
                    line.start = *start + offset;
                    line.end = *end + offset;
                }
                _ => {}
            }
        }
        (Some(EditDragOrigin::Circle { center, radius: _ }), mode) => {
            let Ok(mut circle) = circles_query.get_mut(entity) else {
                return;
            };
            match mode {
                EditDragMode::ResizeRadius => {
                    circle.radius = pixel_pos.distance(*center).max(MIN_CIRCLE_RADIUS);
                }
                EditDragMode::MoveBody => circle.center = *center + offset,
                _ => {}
            }
        }
        (Some(EditDragOrigin::Freehand { points }), EditDragMode::MoveBody) => {
            let Ok(mut path) = freehand_query.get_mut(entity) else {
                return;
            };
            path.points = points.iter().map(|p| *p + offset).collect();
        }
        _ => {}
    }
}

/// Delete/Backspace removes the selected annotations.
pub fn handle_deletion(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    selected_query: Query<Entity, With<Selected>>,
    mut drag_state: ResMut<EditDragState>,
    mut contexts: EguiContexts,
) {
    if !keyboard.just_pressed(KeyCode::Delete) && !keyboard.just_pressed(KeyCode::Backspace) {
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    for entity in selected_query.iter() {
        commands.entity(entity).despawn();
        info!("Deleted annotation {:?}", entity);
    }
    drag_state.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_mode_for_line_regions() {
        assert_eq!(drag_mode_for(HitRegion::LineStart), EditDragMode::MoveStart);
        assert_eq!(drag_mode_for(HitRegion::LineEnd), EditDragMode::MoveEnd);
        assert_eq!(drag_mode_for(HitRegion::LineBody), EditDragMode::MoveBody);
    }

    #[test]
    fn test_drag_mode_for_circle_regions() {
        assert_eq!(
            drag_mode_for(HitRegion::CircleResize),
            EditDragMode::ResizeRadius
        );
        assert_eq!(drag_mode_for(HitRegion::CircleBody), EditDragMode::MoveBody);
    }

    #[test]
    fn test_drag_mode_for_freehand() {
        assert_eq!(
            drag_mode_for(HitRegion::FreehandBody),
            EditDragMode::MoveBody
        );
    }
}
