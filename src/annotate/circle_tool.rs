//! Circle tool system - press to anchor the center, drag out the radius.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::chart::PointerParams;

use super::components::{AnnotationMarker, CircleAnnotation};
use super::state::{AnnotationSettings, CircleDrawState};
use super::tools::{AnnotationTool, CurrentTool};
use super::is_cursor_over_ui;

/// Circles smaller than this are treated as accidental clicks and dropped
const MIN_RADIUS: f32 = 3.0;

pub fn handle_circle(
    mut commands: Commands,
    mouse_button: Res<ButtonInput<MouseButton>>,
    current_tool: Res<CurrentTool>,
    mut circle_state: ResMut<CircleDrawState>,
    settings: Res<AnnotationSettings>,
    pointer: PointerParams,
    mut contexts: EguiContexts,
) {
    if current_tool.tool != AnnotationTool::Circle {
        circle_state.center = None;
        return;
    }

    if is_cursor_over_ui(&mut contexts) && circle_state.center.is_none() {
        return;
    }

    let Some(pixel_pos) = pointer.cursor_pixel_pos() else {
        return;
    };

    if mouse_button.just_pressed(MouseButton::Left) {
        circle_state.center = Some(pixel_pos);
    } else if mouse_button.just_released(MouseButton::Left)
        && let Some(center) = circle_state.center.take()
    {
        let radius = center.distance(pixel_pos);
        if radius >= MIN_RADIUS {
            commands.spawn((
                CircleAnnotation {
                    center,
                    radius,
                    color: settings.stroke_color,
                    stroke_width: settings.stroke_width,
                },
                AnnotationMarker,
            ));
        }
    }

    // Right click cancels an in-progress circle
    if mouse_button.just_pressed(MouseButton::Right) {
        circle_state.center = None;
    }
}
