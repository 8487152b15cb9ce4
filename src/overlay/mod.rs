//! Floating overlay panels and their drag machinery.
//!
//! - [`drag`] - pure drag state machine with boundary clamping
//! - [`chrome`] - scoped window-cursor override for the drag duration
//! - [`toolbar`] - the floating annotation toolbar built on both

pub mod chrome;
pub mod drag;
pub mod toolbar;

pub use chrome::CursorOverride;
pub use drag::{AnchorValue, OverlayDragController, OverlayPosition, ToolbarAnchors};

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::{AppConfig, ConfigLoaded};
use crate::constants::{TOOLBAR_DEFAULT_LEFT, TOOLBAR_DEFAULT_TOP};

/// Seed the toolbar anchors from the persisted config position.
fn init_toolbar_anchors(config: Res<AppConfig>, mut anchors: ResMut<ToolbarAnchors>) {
    let (top, left) = config
        .data
        .toolbar_position
        .unwrap_or((TOOLBAR_DEFAULT_TOP, TOOLBAR_DEFAULT_LEFT));
    *anchors = ToolbarAnchors::from_top_left(top as f32, left as f32);
}

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ToolbarAnchors>()
            .init_resource::<OverlayDragController>()
            .init_resource::<CursorOverride>()
            .init_resource::<toolbar::ToolbarLayout>()
            .add_systems(Startup, init_toolbar_anchors.after(ConfigLoaded))
            // The side panel must lay out first so the remaining central
            // area (the toolbar's clamping parent) is final for this frame
            .add_systems(
                EguiPrimaryContextPass,
                toolbar::toolbar_ui.after(crate::ui::side_panel_ui),
            );
    }
}
