//! Axis and gridline rendering for the plot area.

use bevy::prelude::*;

use crate::theme;

use super::scale::LinearScale;

/// Target number of gridlines per axis; the actual count depends on the
/// nice step chosen for the domain.
const TARGET_TICKS: usize = 8;

/// Pick a "nice" tick step (1/2/5 times a power of ten) for a domain span.
pub fn nice_step(span: f32, target_ticks: usize) -> f32 {
    if !(span > 0.0) || target_ticks == 0 {
        return 1.0;
    }

    let raw = span / target_ticks as f32;
    let magnitude = 10.0_f32.powf(raw.log10().floor());
    let residual = raw / magnitude;

    let factor = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };

    factor * magnitude
}

/// Tick positions covering `domain` at multiples of the nice step.
pub fn ticks(domain: (f32, f32), target: usize) -> Vec<f32> {
    let step = nice_step(domain.1 - domain.0, target);
    let mut out = Vec::new();
    let mut tick = (domain.0 / step).ceil() * step;
    while tick <= domain.1 + step * 1e-3 {
        out.push(tick);
        tick += step;
    }
    out
}

pub fn draw_axes(mut gizmos: Gizmos, scale: Res<LinearScale>) {
    let area = scale.plot_area;

    // Plot area border doubles as the axis lines
    gizmos.rect_2d(
        Isometry2d::from_translation(area.center()),
        area.size(),
        theme::AXIS_COLOR,
    );

    for x in ticks(scale.x_domain, TARGET_TICKS) {
        let px = scale.to_pixel(Vec2::new(x, scale.y_domain.0)).x;
        gizmos.line_2d(
            Vec2::new(px, area.min.y),
            Vec2::new(px, area.max.y),
            theme::GRID_COLOR,
        );
    }

    for y in ticks(scale.y_domain, TARGET_TICKS) {
        let py = scale.to_pixel(Vec2::new(scale.x_domain.0, y)).y;
        gizmos.line_2d(
            Vec2::new(area.min.x, py),
            Vec2::new(area.max.x, py),
            theme::GRID_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_step_powers_of_ten() {
        assert_eq!(nice_step(10.0, 10), 1.0);
        assert_eq!(nice_step(100.0, 10), 10.0);
    }

    #[test]
    fn test_nice_step_prefers_1_2_5() {
        assert_eq!(nice_step(30.0, 10), 5.0);
        assert_eq!(nice_step(15.0, 10), 2.0);
        assert_eq!(nice_step(7.0, 10), 1.0);
    }

    #[test]
    fn test_nice_step_degenerate_span() {
        assert_eq!(nice_step(0.0, 10), 1.0);
        assert_eq!(nice_step(-5.0, 10), 1.0);
        assert_eq!(nice_step(f32::NAN, 10), 1.0);
    }

    #[test]
    fn test_ticks_cover_domain() {
        let t = ticks((0.0, 10.0), 10);
        assert_eq!(t.first().copied(), Some(0.0));
        assert_eq!(t.last().copied(), Some(10.0));
        assert_eq!(t.len(), 11);
    }

    #[test]
    fn test_ticks_negative_domain() {
        let t = ticks((-5.0, 5.0), 10);
        assert!(t.contains(&0.0));
        assert!(t.iter().all(|&v| v >= -5.0 && v <= 5.0 + 1e-3));
    }
}
