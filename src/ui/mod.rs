//! Side panel with chart and overlay preferences.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::annotate::AnnotationSettings;
use crate::chart::Series;
use crate::config::{AppConfig, ConfigLoaded, SaveConfigRequest};

/// Apply persisted preferences to the runtime settings once config is loaded.
fn apply_config_to_settings(config: Res<AppConfig>, mut settings: ResMut<AnnotationSettings>) {
    settings.stroke_width = config.data.stroke_width;
}

pub fn side_panel_ui(
    mut contexts: EguiContexts,
    mut series_query: Query<&mut Series>,
    mut config: ResMut<AppConfig>,
    mut save_requests: MessageWriter<SaveConfigRequest>,
) -> Result {
    egui::SidePanel::left("chart_panel")
        .resizable(false)
        .default_width(180.0)
        .show(contexts.ctx_mut()?, |ui| {
            ui.add_space(6.0);
            ui.heading("Series");
            ui.separator();

            for mut series in series_query.iter_mut() {
                let mut visible = series.visible;
                if ui
                    .checkbox(&mut visible, &series.name)
                    .on_hover_text(series.kind.display_name())
                    .changed()
                {
                    series.visible = visible;
                }
            }

            ui.add_space(12.0);
            ui.heading("Overlays");
            ui.separator();

            let mut changed = false;
            changed |= ui
                .checkbox(&mut config.data.crosshair_enabled, "Crosshair")
                .changed();
            changed |= ui
                .checkbox(&mut config.data.toolbar_moveable, "Moveable toolbar")
                .changed();

            if changed {
                config.dirty = true;
                save_requests.write(SaveConfigRequest);
            }
        });
    Ok(())
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, apply_config_to_settings.after(ConfigLoaded))
            .add_systems(EguiPrimaryContextPass, side_panel_ui);
    }
}
