//! Floating annotation toolbar.
//!
//! The toolbar is an egui `Area` positioned inside the central chart region
//! (the space left over after side panels). Its grab strip feeds pointer
//! events into the [`OverlayDragController`]; a completed drag writes the
//! new anchors back to config and requests a save.

use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow};
use bevy_egui::{egui, EguiContexts};

use crate::annotate::{AnnotationSettings, AnnotationTool, CurrentTool};
use crate::config::{AppConfig, SaveConfigRequest};
use crate::constants::TOOLBAR_GRAB_HEIGHT;
use crate::theme;

use super::chrome::{restore_cursor, CursorOverride};
use super::drag::{OverlayDragController, ToolbarAnchors};

/// Last measured toolbar rect, used to position and clamp the next frame.
#[derive(Resource)]
pub struct ToolbarLayout {
    pub size: Vec2,
}

impl Default for ToolbarLayout {
    fn default() -> Self {
        // Replaced by the measured rect after the first frame
        Self {
            size: Vec2::new(220.0, 120.0),
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut current_tool: ResMut<CurrentTool>,
    mut settings: ResMut<AnnotationSettings>,
    mut config: ResMut<AppConfig>,
    mut anchors: ResMut<ToolbarAnchors>,
    mut controller: ResMut<OverlayDragController>,
    mut cursor_override: ResMut<CursorOverride>,
    mut layout: ResMut<ToolbarLayout>,
    window_query: Query<(Entity, Option<&CursorIcon>), With<PrimaryWindow>>,
    mut commands: Commands,
    mut save_requests: MessageWriter<SaveConfigRequest>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    // The chart region not covered by panels is the drag parent
    let parent_rect = ctx.available_rect();
    let parent_size = Vec2::new(parent_rect.width(), parent_rect.height());
    let overlay_size = layout.size;

    controller.reconcile(&anchors, parent_size, overlay_size);

    let position = controller
        .pending_position()
        .unwrap_or_else(|| anchors.resolve(parent_size, overlay_size));

    let screen_pos = egui::pos2(
        parent_rect.min.x + position.left as f32,
        parent_rect.min.y + position.top as f32,
    );

    let moveable = config.data.toolbar_moveable;

    let area_response = egui::Area::new(egui::Id::new("floating_toolbar"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen_pos)
        .show(ctx, |ui| {
            egui::Frame::window(&ui.ctx().style())
                .inner_margin(egui::Margin::symmetric(8, 6))
                .show(ui, |ui| {
                    if moveable {
                        let strip = grab_strip(ui);
                        handle_grab_drag(
                            &strip,
                            position,
                            parent_rect,
                            parent_size,
                            overlay_size,
                            &mut controller,
                            &mut anchors,
                            &mut config,
                            &mut save_requests,
                            &mut cursor_override,
                            &window_query,
                            &mut commands,
                        );
                    }
                    tool_row(ui, &mut current_tool);
                    ui.separator();
                    color_row(ui, &mut settings);
                    stroke_row(ui, &mut settings, &mut config, &mut save_requests);
                });
        });

    let measured = area_response.response.rect;
    layout.size = Vec2::new(measured.width(), measured.height());

    // The capability can be toggled off mid-drag from the side panel; tear
    // the session down without reporting a position. The anchors stay
    // authoritative, so the pending override must go with it.
    if !moveable && controller.is_dragging() {
        controller.abort();
    }

    // Safety net: never leave a grabbing cursor behind if the drag session
    // ended through some path other than the grab strip response
    if !controller.is_dragging()
        && cursor_override.is_active()
        && let Some(saved) = cursor_override.release()
        && let Ok((window_entity, _)) = window_query.single()
    {
        restore_cursor(&mut commands, window_entity, saved);
    }

    Ok(())
}

/// The drag affordance: a short strip of dots across the toolbar top.
fn grab_strip(ui: &mut egui::Ui) -> egui::Response {
    let width = ui.available_width().max(180.0);
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(width, TOOLBAR_GRAB_HEIGHT),
        egui::Sense::drag(),
    );

    let painter = ui.painter();
    let center_y = rect.center().y;
    for i in 0..5 {
        let x = rect.center().x + (i as f32 - 2.0) * 8.0;
        painter.circle_filled(
            egui::pos2(x, center_y),
            1.5,
            egui::Color32::from_gray(120),
        );
    }

    response
}

/// Drive the drag controller from the grab strip's pointer state.
#[allow(clippy::too_many_arguments)]
fn handle_grab_drag(
    response: &egui::Response,
    position: super::drag::OverlayPosition,
    parent_rect: egui::Rect,
    parent_size: Vec2,
    overlay_size: Vec2,
    controller: &mut OverlayDragController,
    anchors: &mut ToolbarAnchors,
    config: &mut AppConfig,
    save_requests: &mut MessageWriter<SaveConfigRequest>,
    cursor_override: &mut CursorOverride,
    window_query: &Query<(Entity, Option<&CursorIcon>), With<PrimaryWindow>>,
    commands: &mut Commands,
) {
    let parent_origin = Vec2::new(parent_rect.min.x, parent_rect.min.y);
    let pointer = response
        .ctx
        .input(|input| input.pointer.interact_pos())
        .map(|pos| Vec2::new(pos.x, pos.y) - parent_origin);

    if response.drag_started() {
        let Some(pointer) = pointer else {
            return;
        };
        // The position the toolbar rendered at this frame, relative to the
        // parent origin
        let overlay_origin = Vec2::new(position.left as f32, position.top as f32);

        if controller.begin(pointer, overlay_origin, overlay_size, Some(parent_size))
            && let Ok((window_entity, current_icon)) = window_query.single()
        {
            let grabbing = cursor_override.acquire(current_icon.cloned());
            commands.entity(window_entity).insert(grabbing);
        }
    } else if response.dragged() {
        if let Some(pointer) = pointer {
            controller.update(pointer);
        }
    } else if response.drag_stopped() {
        if let Some(final_pos) = controller.finish() {
            *anchors = ToolbarAnchors::from_top_left(final_pos.top as f32, final_pos.left as f32);
            config.data.toolbar_position = Some((final_pos.top, final_pos.left));
            config.dirty = true;
            save_requests.write(SaveConfigRequest);
            debug!(
                "Toolbar moved to top={} left={}",
                final_pos.top, final_pos.left
            );
        }

        if let Some(saved) = cursor_override.release()
            && let Ok((window_entity, _)) = window_query.single()
        {
            restore_cursor(commands, window_entity, saved);
        }
    }
}

fn tool_row(ui: &mut egui::Ui, current_tool: &mut CurrentTool) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;

        for tool in AnnotationTool::all() {
            let selected = current_tool.tool == *tool;
            let label = tool_button_label(tool);

            let button = egui::Button::new(egui::RichText::new(label).size(14.0).strong())
                .min_size(egui::vec2(28.0, 28.0))
                .selected(selected);

            let response = ui.add(button);
            if response.clicked() {
                current_tool.tool = *tool;
            }
            response.on_hover_text(tool.display_name());
        }
    });
}

fn tool_button_label(tool: &AnnotationTool) -> &'static str {
    match tool {
        AnnotationTool::Select => "⊹",
        AnnotationTool::Line => "╱",
        AnnotationTool::Circle => "◯",
        AnnotationTool::Draw => "✎",
        AnnotationTool::Text => "T",
    }
}

fn color_row(ui: &mut egui::Ui, settings: &mut AnnotationSettings) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 3.0;

        for (color, name, color32) in theme::annotation_colors() {
            let selected = settings.stroke_color == color;
            let button = egui::Button::new("")
                .fill(color32)
                .min_size(egui::vec2(18.0, 18.0))
                .stroke(if selected {
                    egui::Stroke::new(2.0, egui::Color32::WHITE)
                } else {
                    egui::Stroke::new(1.0, egui::Color32::from_gray(80))
                });

            if ui.add(button).on_hover_text(name).clicked() {
                settings.stroke_color = color;
            }
        }
    });
}

fn stroke_row(
    ui: &mut egui::Ui,
    settings: &mut AnnotationSettings,
    config: &mut AppConfig,
    save_requests: &mut MessageWriter<SaveConfigRequest>,
) {
    ui.horizontal(|ui| {
        ui.label("Width:");
        let response = ui.add(
            egui::DragValue::new(&mut settings.stroke_width)
                .range(1.0..=10.0)
                .speed(0.1),
        );
        if response.changed() {
            config.data.stroke_width = settings.stroke_width;
            config.dirty = true;
        }
        if response.drag_stopped() || response.lost_focus() {
            save_requests.write(SaveConfigRequest);
        }
    });
}
