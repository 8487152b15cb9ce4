//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels (also used for plot area layout)
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels (also used for plot area layout)
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Margin between the plot area and the window edges, in pixels.
/// Axes and tick labels are drawn inside this margin.
pub const PLOT_MARGIN: f32 = 60.0;

/// Radius of endpoint/resize grab handles on annotations, in pixels
pub const HANDLE_RADIUS: f32 = 6.0;

/// Maximum perpendicular distance for a pointer to count as hitting a
/// line body or a circle's edge ring, in pixels
pub const LINE_HIT_TOLERANCE: f32 = 8.0;

/// Hit tolerance for freehand path segments, in pixels. Slightly larger
/// than the line tolerance since per-segment targets are visually thinner.
pub const FREEHAND_HIT_TOLERANCE: f32 = 10.0;

/// Minimum distance between consecutive freehand points while drawing,
/// in pixels (thins out dense pointer samples)
pub const FREEHAND_MIN_POINT_DISTANCE: f32 = 2.0;

/// Default top/left position of the floating toolbar, in pixels
pub const TOOLBAR_DEFAULT_TOP: i32 = 16;
pub const TOOLBAR_DEFAULT_LEFT: i32 = 16;

/// Height of the toolbar grab strip, in pixels
pub const TOOLBAR_GRAB_HEIGHT: f32 = 14.0;

/// Snap distance for the crosshair to lock onto a data point, in pixels
pub const CROSSHAIR_SNAP_DISTANCE: f32 = 24.0;
