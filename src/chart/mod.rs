//! Chart rendering: series data, scales, axes, and the crosshair overlay.
//!
//! The camera here is fixed (no pan or zoom), so world coordinates coincide
//! with centered pixel coordinates. Everything downstream of
//! [`scale::LinearScale`] - annotation tools, hit-testing, the crosshair -
//! works purely in that pixel space.

pub mod axes;
pub mod crosshair;
pub mod data;
pub mod scale;
pub mod series;

pub use crosshair::CrosshairState;
pub use data::{sample_series, Series, SeriesKind};
pub use scale::LinearScale;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiPrimaryContextPass;

/// Marker for the single chart camera.
#[derive(Component)]
pub struct ChartCamera;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        ChartCamera,
        Transform::from_translation(Vec3::new(0.0, 0.0, 1000.0)),
    ));
}

/// Bundled camera and window queries for cursor position lookups.
#[derive(SystemParam)]
pub struct PointerParams<'w, 's> {
    pub window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub camera: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<ChartCamera>>,
}

impl PointerParams<'_, '_> {
    /// Cursor position in pixel (world) space, if the cursor is over the window.
    pub fn cursor_pixel_pos(&self) -> Option<Vec2> {
        let window = self.window.single().ok()?;
        let (camera, transform) = self.camera.single().ok()?;
        let cursor_pos = window.cursor_position()?;
        camera.viewport_to_world_2d(transform, cursor_pos).ok()
    }

    /// Cursor position in window (screen) coordinates, for egui overlays.
    pub fn cursor_screen_pos(&self) -> Option<Vec2> {
        self.window.single().ok()?.cursor_position()
    }
}

pub struct ChartPlugin;

impl Plugin for ChartPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LinearScale>()
            .init_resource::<CrosshairState>()
            .add_systems(Startup, spawn_camera)
            .add_systems(
                Update,
                (
                    scale::update_scale,
                    axes::draw_axes,
                    series::render_series,
                    crosshair::update_crosshair,
                    crosshair::draw_crosshair,
                )
                    .chain(),
            )
            .add_systems(EguiPrimaryContextPass, crosshair::crosshair_tooltip);
    }
}
