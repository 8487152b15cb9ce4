//! Crosshair and value tooltip overlay.
//!
//! Tracks the pointer while it is inside the plot area, snaps to the nearest
//! data point within reach, and shows the data-space values in a small
//! tooltip next to the pointer.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::AppConfig;
use crate::constants::CROSSHAIR_SNAP_DISTANCE;
use crate::theme;

use super::data::Series;
use super::scale::LinearScale;
use super::PointerParams;

/// A data point the crosshair has locked onto.
#[derive(Debug, Clone)]
pub struct SnappedPoint {
    pub series_name: String,
    pub data: Vec2,
    pub pixel: Vec2,
}

#[derive(Resource, Default)]
pub struct CrosshairState {
    /// Pointer position in pixel space, while inside the plot area
    pub pixel: Option<Vec2>,
    /// Nearest data point within snap distance, if any
    pub snapped: Option<SnappedPoint>,
}

/// Find the nearest visible data point to `pixel`, within `max_distance`.
pub fn nearest_point<'a>(
    pixel: Vec2,
    max_distance: f32,
    series: impl Iterator<Item = &'a Series>,
    scale: &LinearScale,
) -> Option<SnappedPoint> {
    let mut best: Option<(f32, SnappedPoint)> = None;

    for s in series {
        if !s.visible {
            continue;
        }
        for &data in &s.points {
            let point_pixel = scale.to_pixel(data);
            let distance = pixel.distance(point_pixel);
            if distance > max_distance {
                continue;
            }
            if best.as_ref().is_none_or(|(d, _)| distance < *d) {
                best = Some((
                    distance,
                    SnappedPoint {
                        series_name: s.name.clone(),
                        data,
                        pixel: point_pixel,
                    },
                ));
            }
        }
    }

    best.map(|(_, snap)| snap)
}

pub fn update_crosshair(
    mut state: ResMut<CrosshairState>,
    config: Res<AppConfig>,
    scale: Res<LinearScale>,
    pointer: PointerParams,
    series_query: Query<&Series>,
    mut contexts: EguiContexts,
) {
    state.pixel = None;
    state.snapped = None;

    if !config.data.crosshair_enabled {
        return;
    }

    // The crosshair belongs to the chart surface, not the UI overlays
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.is_pointer_over_area()
    {
        return;
    }

    let Some(pixel) = pointer.cursor_pixel_pos() else {
        return;
    };

    if !scale.contains_pixel(pixel) {
        return;
    }

    state.pixel = Some(pixel);
    state.snapped = nearest_point(pixel, CROSSHAIR_SNAP_DISTANCE, series_query.iter(), &scale);
}

pub fn draw_crosshair(mut gizmos: Gizmos, state: Res<CrosshairState>, scale: Res<LinearScale>) {
    let Some(pixel) = state.pixel else {
        return;
    };

    let area = scale.plot_area;
    gizmos.line_2d(
        Vec2::new(pixel.x, area.min.y),
        Vec2::new(pixel.x, area.max.y),
        theme::CROSSHAIR_COLOR,
    );
    gizmos.line_2d(
        Vec2::new(area.min.x, pixel.y),
        Vec2::new(area.max.x, pixel.y),
        theme::CROSSHAIR_COLOR,
    );

    if let Some(ref snap) = state.snapped {
        gizmos.circle_2d(
            Isometry2d::from_translation(snap.pixel),
            5.0,
            theme::CROSSHAIR_SNAP_COLOR,
        );
    }
}

/// Show the hovered value next to the pointer.
pub fn crosshair_tooltip(
    mut contexts: EguiContexts,
    state: Res<CrosshairState>,
    scale: Res<LinearScale>,
    pointer: PointerParams,
) {
    if state.pixel.is_none() {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let Some(screen_pos) = pointer.cursor_screen_pos() else {
        return;
    };

    let text = match (&state.snapped, state.pixel) {
        (Some(snap), _) => format!(
            "{}: ({:.2}, {:.2})",
            snap.series_name, snap.data.x, snap.data.y
        ),
        (None, Some(pixel)) => {
            let data = scale.to_data(pixel);
            format!("({:.2}, {:.2})", data.x, data.y)
        }
        (None, None) => return,
    };

    egui::Area::new(egui::Id::new("crosshair_tooltip"))
        .fixed_pos(egui::pos2(screen_pos.x + 14.0, screen_pos.y + 14.0))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(text).size(12.0).monospace());
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::data::SeriesKind;

    fn test_scale() -> LinearScale {
        LinearScale {
            x_domain: (0.0, 100.0),
            y_domain: (0.0, 100.0),
            plot_area: Rect::new(0.0, 0.0, 100.0, 100.0),
        }
    }

    #[test]
    fn test_nearest_point_picks_closest() {
        let scale = test_scale();
        let series = vec![Series::new(
            "s",
            SeriesKind::Line,
            vec![Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0)],
            Color::WHITE,
        )];

        let snap = nearest_point(Vec2::new(11.0, 11.0), 24.0, series.iter(), &scale).unwrap();
        assert_eq!(snap.data, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_nearest_point_respects_max_distance() {
        let scale = test_scale();
        let series = vec![Series::new(
            "s",
            SeriesKind::Line,
            vec![Vec2::new(50.0, 50.0)],
            Color::WHITE,
        )];

        assert!(nearest_point(Vec2::ZERO, 10.0, series.iter(), &scale).is_none());
    }

    #[test]
    fn test_nearest_point_skips_hidden_series() {
        let scale = test_scale();
        let mut series = Series::new(
            "s",
            SeriesKind::Line,
            vec![Vec2::new(10.0, 10.0)],
            Color::WHITE,
        );
        series.visible = false;

        assert!(nearest_point(Vec2::new(10.0, 10.0), 24.0, [&series].into_iter(), &scale).is_none());
    }
}
