//! Line tool system for drawing straight line annotations.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::chart::PointerParams;

use super::components::{AnnotationMarker, LineAnnotation};
use super::state::{AnnotationSettings, LineDrawState};
use super::tools::{AnnotationTool, CurrentTool};
use super::is_cursor_over_ui;

pub fn handle_line(
    mut commands: Commands,
    mouse_button: Res<ButtonInput<MouseButton>>,
    current_tool: Res<CurrentTool>,
    mut line_state: ResMut<LineDrawState>,
    settings: Res<AnnotationSettings>,
    pointer: PointerParams,
    mut contexts: EguiContexts,
) {
    if current_tool.tool != AnnotationTool::Line {
        line_state.start_point = None;
        return;
    }

    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(pixel_pos) = pointer.cursor_pixel_pos() else {
        return;
    };

    if mouse_button.just_pressed(MouseButton::Left) {
        if let Some(start) = line_state.start_point {
            // Second click - create the line
            commands.spawn((
                LineAnnotation {
                    start,
                    end: pixel_pos,
                    color: settings.stroke_color,
                    stroke_width: settings.stroke_width,
                },
                AnnotationMarker,
            ));
            line_state.start_point = None;
        } else {
            // First click - anchor the start point
            line_state.start_point = Some(pixel_pos);
        }
    }

    // Right click cancels
    if mouse_button.just_pressed(MouseButton::Right) {
        line_state.start_point = None;
    }
}
