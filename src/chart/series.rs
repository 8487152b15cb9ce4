//! Series rendering - lines, point markers, and bars via gizmos.

use bevy::prelude::*;

use super::data::{Series, SeriesKind};
use super::scale::LinearScale;

/// Radius of point markers, in pixels
const POINT_RADIUS: f32 = 3.0;

pub fn render_series(
    mut gizmos: Gizmos,
    scale: Res<LinearScale>,
    series_query: Query<&Series>,
) {
    for series in series_query.iter() {
        if !series.visible {
            continue;
        }

        match series.kind {
            SeriesKind::Line => {
                if series.points.len() < 2 {
                    continue;
                }
                for window in series.points.windows(2) {
                    gizmos.line_2d(
                        scale.to_pixel(window[0]),
                        scale.to_pixel(window[1]),
                        series.color,
                    );
                }
            }
            SeriesKind::Points => {
                for &point in &series.points {
                    gizmos.circle_2d(
                        Isometry2d::from_translation(scale.to_pixel(point)),
                        POINT_RADIUS,
                        series.color,
                    );
                }
            }
            SeriesKind::Bars => {
                // Bars drop to the domain floor rather than data-space zero,
                // so they stay inside the plot area for all-positive data
                let baseline = scale.y_domain.0;
                for &point in &series.points {
                    let top = scale.to_pixel(point);
                    let bottom = scale.to_pixel(Vec2::new(point.x, baseline));
                    gizmos.line_2d(top, bottom, series.color);
                }
            }
        }
    }
}
