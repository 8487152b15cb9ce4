//! Text tool system - places a label at the clicked position.
//!
//! Labels have no hit-test geometry, so the select tool cannot grab them;
//! they are placed and rendered only. Wiring label editing into the
//! selection flow needs a measured bounding box first.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::chart::PointerParams;

use super::components::{AnnotationMarker, TextLabel};
use super::state::AnnotationSettings;
use super::tools::{AnnotationTool, CurrentTool};
use super::is_cursor_over_ui;

pub fn handle_text(
    mut commands: Commands,
    mouse_button: Res<ButtonInput<MouseButton>>,
    current_tool: Res<CurrentTool>,
    settings: Res<AnnotationSettings>,
    pointer: PointerParams,
    mut contexts: EguiContexts,
) {
    if current_tool.tool != AnnotationTool::Text {
        return;
    }

    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(pixel_pos) = pointer.cursor_pixel_pos() else {
        return;
    };

    if mouse_button.just_pressed(MouseButton::Left) {
        commands.spawn((
            TextLabel {
                position: pixel_pos,
                content: "note".to_string(),
                font_size: settings.font_size,
                color: settings.stroke_color,
            },
            AnnotationMarker,
        ));
    }
}
