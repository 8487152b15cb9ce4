//! Draw tool system for freehand path annotations.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::chart::PointerParams;
use crate::constants::FREEHAND_MIN_POINT_DISTANCE;

use super::components::{AnnotationMarker, FreehandAnnotation};
use super::state::{AnnotationSettings, DrawState};
use super::tools::{AnnotationTool, CurrentTool};
use super::is_cursor_over_ui;

pub fn handle_draw(
    mut commands: Commands,
    mouse_button: Res<ButtonInput<MouseButton>>,
    current_tool: Res<CurrentTool>,
    mut draw_state: ResMut<DrawState>,
    settings: Res<AnnotationSettings>,
    pointer: PointerParams,
    mut contexts: EguiContexts,
) {
    if current_tool.tool != AnnotationTool::Draw {
        // If we were drawing but switched tools, finalize
        if draw_state.is_drawing && draw_state.current_points.len() >= 2 {
            spawn_freehand(&mut commands, &draw_state, &settings);
        }
        draw_state.is_drawing = false;
        draw_state.current_points.clear();
        return;
    }

    if is_cursor_over_ui(&mut contexts) && !draw_state.is_drawing {
        return;
    }

    let Some(pixel_pos) = pointer.cursor_pixel_pos() else {
        return;
    };

    if mouse_button.just_pressed(MouseButton::Left) {
        draw_state.is_drawing = true;
        draw_state.current_points.clear();
        draw_state.current_points.push(pixel_pos);
    } else if mouse_button.pressed(MouseButton::Left) && draw_state.is_drawing {
        // Add point if it's far enough from the last one (reduces point count)
        if let Some(last) = draw_state.current_points.last()
            && pixel_pos.distance(*last) > FREEHAND_MIN_POINT_DISTANCE
        {
            draw_state.current_points.push(pixel_pos);
        }
    } else if mouse_button.just_released(MouseButton::Left) && draw_state.is_drawing {
        draw_state.is_drawing = false;
        if draw_state.current_points.len() >= 2 {
            spawn_freehand(&mut commands, &draw_state, &settings);
        }
        draw_state.current_points.clear();
    }
}

fn spawn_freehand(
    commands: &mut Commands,
    draw_state: &DrawState,
    settings: &AnnotationSettings,
) {
    commands.spawn((
        FreehandAnnotation {
            points: draw_state.current_points.clone(),
            color: settings.stroke_color,
            stroke_width: settings.stroke_width,
        },
        AnnotationMarker,
    ));
}
