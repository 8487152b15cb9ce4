//! Series data model and demo series used by the sample application.

use bevy::prelude::*;

/// How a series is drawn in the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesKind {
    #[default]
    Line,
    Points,
    Bars,
}

impl SeriesKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            SeriesKind::Line => "Line",
            SeriesKind::Points => "Points",
            SeriesKind::Bars => "Bars",
        }
    }
}

/// A single data series. Points are in data space; the scale maps them to
/// pixels at render time.
#[derive(Component, Debug, Clone)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    pub points: Vec<Vec2>,
    pub color: Color,
    pub visible: bool,
}

impl Series {
    pub fn new(name: impl Into<String>, kind: SeriesKind, points: Vec<Vec2>, color: Color) -> Self {
        Self {
            name: name.into(),
            kind,
            points,
            color,
            visible: true,
        }
    }

    /// Min/max over both axes of this series' points, if it has any.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let first = *self.points.first()?;
        let mut min = first;
        let mut max = first;
        for &p in &self.points {
            min = min.min(p);
            max = max.max(p);
        }
        Some((min, max))
    }
}

/// Deterministic sample series for the demo application (no RNG dependency).
pub fn sample_series() -> Vec<Series> {
    let wave: Vec<Vec2> = (0..=120)
        .map(|i| {
            let x = i as f32 * 0.25;
            Vec2::new(x, (x * 0.7).sin() * 8.0 + 12.0)
        })
        .collect();

    // Pseudo-random walk from a fixed-seed LCG so runs are reproducible
    let mut state: u32 = 0x2545_F491;
    let mut y = 10.0_f32;
    let walk: Vec<Vec2> = (0..=60)
        .map(|i| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let step = ((state >> 16) as f32 / 65_535.0) - 0.5;
            y = (y + step * 3.0).clamp(0.0, 24.0);
            Vec2::new(i as f32 * 0.5, y)
        })
        .collect();

    vec![
        Series::new("sine", SeriesKind::Line, wave, crate::theme::SERIES_PALETTE[0]),
        Series::new("walk", SeriesKind::Points, walk, crate::theme::SERIES_PALETTE[1]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_bounds_empty() {
        let series = Series::new("empty", SeriesKind::Line, vec![], Color::WHITE);
        assert!(series.bounds().is_none());
    }

    #[test]
    fn test_series_bounds() {
        let series = Series::new(
            "s",
            SeriesKind::Line,
            vec![Vec2::new(1.0, 5.0), Vec2::new(3.0, -2.0), Vec2::new(2.0, 7.0)],
            Color::WHITE,
        );
        let (min, max) = series.bounds().unwrap();
        assert_eq!(min, Vec2::new(1.0, -2.0));
        assert_eq!(max, Vec2::new(3.0, 7.0));
    }

    #[test]
    fn test_sample_series_are_deterministic() {
        let a = sample_series();
        let b = sample_series();
        assert_eq!(a.len(), b.len());
        for (sa, sb) in a.iter().zip(b.iter()) {
            assert_eq!(sa.points, sb.points);
        }
    }
}
