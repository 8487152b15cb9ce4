//! Linear data-space to pixel-space transform.
//!
//! All pointer-driven logic (hit-testing, annotation editing, crosshair)
//! runs in pixel space. This module is the single place where data values
//! are mapped to pixels and back, so nothing downstream of it needs to know
//! about the chart's value domain.

use bevy::prelude::*;

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, PLOT_MARGIN};

/// Linear mapping between the data domain and the on-screen plot area.
///
/// The plot area is expressed in world coordinates, which coincide with
/// centered pixel coordinates because the camera never pans or zooms.
#[derive(Resource, Debug, Clone)]
pub struct LinearScale {
    pub x_domain: (f32, f32),
    pub y_domain: (f32, f32),
    pub plot_area: Rect,
}

impl Default for LinearScale {
    fn default() -> Self {
        Self {
            x_domain: (0.0, 1.0),
            y_domain: (0.0, 1.0),
            plot_area: plot_area_for(Vec2::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)),
        }
    }
}

impl LinearScale {
    /// Map a data-space point into pixel space.
    pub fn to_pixel(&self, data: Vec2) -> Vec2 {
        Vec2::new(
            remap(data.x, self.x_domain, (self.plot_area.min.x, self.plot_area.max.x)),
            remap(data.y, self.y_domain, (self.plot_area.min.y, self.plot_area.max.y)),
        )
    }

    /// Map a pixel-space point back into data space.
    pub fn to_data(&self, pixel: Vec2) -> Vec2 {
        Vec2::new(
            remap(pixel.x, (self.plot_area.min.x, self.plot_area.max.x), self.x_domain),
            remap(pixel.y, (self.plot_area.min.y, self.plot_area.max.y), self.y_domain),
        )
    }

    pub fn contains_pixel(&self, pixel: Vec2) -> bool {
        self.plot_area.contains(pixel)
    }
}

/// Linear remap of `v` from `from` to `to`. A degenerate source range maps
/// everything to the start of the target range.
fn remap(v: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let span = from.1 - from.0;
    if span == 0.0 {
        return to.0;
    }
    to.0 + (v - from.0) / span * (to.1 - to.0)
}

/// The plot area for a given window size: the window rectangle, centered on
/// the origin, inset by the plot margin.
pub fn plot_area_for(window_size: Vec2) -> Rect {
    let half = window_size / 2.0;
    Rect::new(
        -half.x + PLOT_MARGIN,
        -half.y + PLOT_MARGIN,
        half.x - PLOT_MARGIN,
        half.y - PLOT_MARGIN,
    )
}

/// Fit the scale's domains to all visible series and track window resizes.
pub fn update_scale(
    mut scale: ResMut<LinearScale>,
    series_query: Query<&super::data::Series>,
    window_query: Query<&Window, With<bevy::window::PrimaryWindow>>,
) {
    if let Ok(window) = window_query.single() {
        scale.plot_area = plot_area_for(Vec2::new(window.width(), window.height()));
    }

    let mut min = Vec2::splat(f32::MAX);
    let mut max = Vec2::splat(f32::MIN);
    let mut found_any = false;

    for series in series_query.iter() {
        if !series.visible {
            continue;
        }
        if let Some((series_min, series_max)) = series.bounds() {
            min = min.min(series_min);
            max = max.max(series_max);
            found_any = true;
        }
    }

    if !found_any {
        return;
    }

    // Keep a degenerate domain from collapsing the transform
    if max.x - min.x < f32::EPSILON {
        max.x = min.x + 1.0;
    }
    if max.y - min.y < f32::EPSILON {
        max.y = min.y + 1.0;
    }

    scale.x_domain = (min.x, max.x);
    scale.y_domain = (min.y, max.y);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_scale() -> LinearScale {
        LinearScale {
            x_domain: (0.0, 10.0),
            y_domain: (0.0, 100.0),
            plot_area: Rect::new(-100.0, -50.0, 100.0, 50.0),
        }
    }

    #[test]
    fn test_to_pixel_domain_edges() {
        let scale = test_scale();
        assert_eq!(scale.to_pixel(Vec2::new(0.0, 0.0)), Vec2::new(-100.0, -50.0));
        assert_eq!(scale.to_pixel(Vec2::new(10.0, 100.0)), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_to_pixel_midpoint() {
        let scale = test_scale();
        assert_eq!(scale.to_pixel(Vec2::new(5.0, 50.0)), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_round_trip() {
        let scale = test_scale();
        let data = Vec2::new(7.25, 31.0);
        let back = scale.to_data(scale.to_pixel(data));
        assert!((back - data).length() < 1e-3);
    }

    #[test]
    fn test_degenerate_domain_maps_to_area_start() {
        let mut scale = test_scale();
        scale.x_domain = (4.0, 4.0);
        let pixel = scale.to_pixel(Vec2::new(4.0, 0.0));
        assert_eq!(pixel.x, -100.0);
    }

    #[test]
    fn test_plot_area_is_inset_and_centered() {
        let area = plot_area_for(Vec2::new(1280.0, 800.0));
        assert_eq!(area.min, Vec2::new(-640.0 + PLOT_MARGIN, -400.0 + PLOT_MARGIN));
        assert_eq!(area.max, Vec2::new(640.0 - PLOT_MARGIN, 400.0 - PLOT_MARGIN));
        assert_eq!(area.center(), Vec2::ZERO);
    }

    #[test]
    fn test_contains_pixel() {
        let scale = test_scale();
        assert!(scale.contains_pixel(Vec2::ZERO));
        assert!(!scale.contains_pixel(Vec2::new(500.0, 0.0)));
    }
}
