//! Gizmo rendering for annotations, in-progress previews, and selection
//! indicators. Text labels render through egui since gizmos have no text.

use bevy::prelude::*;
use bevy_egui::egui;
use bevy_egui::EguiContexts;

use crate::chart::{ChartCamera, PointerParams};
use crate::constants::HANDLE_RADIUS;
use crate::theme;

use super::components::{
    CircleAnnotation, FreehandAnnotation, LineAnnotation, Selected, TextLabel,
};
use super::state::{AnnotationSettings, CircleDrawState, DrawState, LineDrawState};
use super::tools::{AnnotationTool, CurrentTool};

pub fn render_lines(mut gizmos: Gizmos, lines: Query<&LineAnnotation>) {
    for line in lines.iter() {
        gizmos.line_2d(line.start, line.end, line.color);
    }
}

pub fn render_circles(mut gizmos: Gizmos, circles: Query<&CircleAnnotation>) {
    for circle in circles.iter() {
        gizmos.circle_2d(
            Isometry2d::from_translation(circle.center),
            circle.radius,
            circle.color,
        );
    }
}

pub fn render_freehand(mut gizmos: Gizmos, paths: Query<&FreehandAnnotation>) {
    for path in paths.iter() {
        if path.points.len() < 2 {
            continue;
        }

        for window in path.points.windows(2) {
            gizmos.line_2d(window[0], window[1], path.color);
        }
    }
}

pub fn render_line_preview(
    mut gizmos: Gizmos,
    current_tool: Res<CurrentTool>,
    line_state: Res<LineDrawState>,
    settings: Res<AnnotationSettings>,
    pointer: PointerParams,
) {
    if current_tool.tool != AnnotationTool::Line {
        return;
    }

    let Some(start) = line_state.start_point else {
        return;
    };

    let Some(pixel_pos) = pointer.cursor_pixel_pos() else {
        return;
    };

    // Draw preview line with lower opacity
    let preview_color = settings.stroke_color.with_alpha(0.5);
    gizmos.line_2d(start, pixel_pos, preview_color);
}

pub fn render_circle_preview(
    mut gizmos: Gizmos,
    current_tool: Res<CurrentTool>,
    circle_state: Res<CircleDrawState>,
    settings: Res<AnnotationSettings>,
    pointer: PointerParams,
) {
    if current_tool.tool != AnnotationTool::Circle {
        return;
    }

    let Some(center) = circle_state.center else {
        return;
    };

    let Some(pixel_pos) = pointer.cursor_pixel_pos() else {
        return;
    };

    let preview_color = settings.stroke_color.with_alpha(0.5);
    gizmos.circle_2d(
        Isometry2d::from_translation(center),
        center.distance(pixel_pos),
        preview_color,
    );
}

pub fn render_draw_preview(
    mut gizmos: Gizmos,
    current_tool: Res<CurrentTool>,
    draw_state: Res<DrawState>,
    settings: Res<AnnotationSettings>,
) {
    if current_tool.tool != AnnotationTool::Draw || !draw_state.is_drawing {
        return;
    }

    if draw_state.current_points.len() < 2 {
        return;
    }

    for window in draw_state.current_points.windows(2) {
        gizmos.line_2d(window[0], window[1], settings.stroke_color);
    }
}

/// Draw selection indicators: endpoint handles on lines, the east-side
/// resize handle on circles, and a faint echo stroke on freehand paths.
pub fn render_selection_indicators(
    mut gizmos: Gizmos,
    selected_lines: Query<&LineAnnotation, With<Selected>>,
    selected_circles: Query<&CircleAnnotation, With<Selected>>,
    selected_paths: Query<&FreehandAnnotation, With<Selected>>,
) {
    for line in selected_lines.iter() {
        gizmos.circle_2d(
            Isometry2d::from_translation(line.start),
            HANDLE_RADIUS,
            theme::SELECTION_COLOR,
        );
        gizmos.circle_2d(
            Isometry2d::from_translation(line.end),
            HANDLE_RADIUS,
            theme::SELECTION_COLOR,
        );
    }

    for circle in selected_circles.iter() {
        gizmos.circle_2d(
            Isometry2d::from_translation(circle.center),
            circle.radius + 2.0,
            theme::SELECTION_COLOR.with_alpha(0.4),
        );
        // Resize handle sits on the circumference at angle zero
        let handle = circle.center + Vec2::new(circle.radius, 0.0);
        gizmos.circle_2d(
            Isometry2d::from_translation(handle),
            HANDLE_RADIUS,
            theme::SELECTION_COLOR,
        );
    }

    for path in selected_paths.iter() {
        if path.points.len() < 2 {
            continue;
        }
        for window in path.points.windows(2) {
            gizmos.line_2d(
                window[0],
                window[1],
                theme::SELECTION_COLOR.with_alpha(0.4),
            );
        }
    }
}

/// Egui id for a label's screen-space area, unique per entity so labels
/// sharing a position do not collide.
fn text_label_id(entity: Entity) -> egui::Id {
    egui::Id::new(("text_label", entity))
}

/// Render text labels through egui at their projected screen position.
pub fn render_text_labels(
    mut contexts: EguiContexts,
    camera_query: Query<(&Camera, &GlobalTransform), With<ChartCamera>>,
    texts: Query<(Entity, &TextLabel)>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    for (entity, text) in texts.iter() {
        if text.content.is_empty() {
            continue;
        }

        let Ok(screen_pos) =
            camera.world_to_viewport(camera_transform, text.position.extend(0.0))
        else {
            continue;
        };

        let srgba = text.color.to_srgba();
        let egui_color = egui::Color32::from_rgba_unmultiplied(
            (srgba.red * 255.0) as u8,
            (srgba.green * 255.0) as u8,
            (srgba.blue * 255.0) as u8,
            255,
        );

        egui::Area::new(text_label_id(entity))
            .fixed_pos(egui::pos2(screen_pos.x, screen_pos.y))
            .pivot(egui::Align2::LEFT_CENTER)
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(&text.content)
                        .color(egui_color)
                        .size(text.font_size),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_label_ids_are_unique_per_entity() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();

        // Two labels at the same position must still get distinct areas
        assert_ne!(text_label_id(a), text_label_id(b));
        assert_eq!(text_label_id(a), text_label_id(a));
    }
}
