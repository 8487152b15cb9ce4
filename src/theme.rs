//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the chart and overlay
//! rendering. Modify values here to change the application's color scheme.

use bevy::prelude::Color;
use bevy_egui::egui;

// ============================================================================
// Chart Colors
// ============================================================================

/// Semi-transparent grey gridlines
pub const GRID_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 0.25);

/// Axis lines along the plot area edges
pub const AXIS_COLOR: Color = Color::srgba(0.8, 0.8, 0.8, 0.9);

/// Palette cycled through by series in spawn order
pub const SERIES_PALETTE: [Color; 4] = [
    Color::srgb(0.35, 0.70, 1.0),
    Color::srgb(1.0, 0.60, 0.25),
    Color::srgb(0.45, 0.85, 0.45),
    Color::srgb(0.85, 0.45, 0.85),
];

// ============================================================================
// Crosshair Colors
// ============================================================================

/// Thin vertical/horizontal crosshair lines
pub const CROSSHAIR_COLOR: Color = Color::srgba(0.9, 0.9, 0.9, 0.5);

/// Ring drawn around the snapped data point
pub const CROSSHAIR_SNAP_COLOR: Color = Color::srgb(1.0, 0.85, 0.3);

// ============================================================================
// Selection Colors
// ============================================================================

/// Light blue for selected annotation indicators and handles
pub const SELECTION_COLOR: Color = Color::srgb(0.2, 0.6, 1.0);

// ============================================================================
// Annotation Colors
// ============================================================================

/// Default annotation stroke color (red)
pub const ANNOTATION_DEFAULT: Color = Color::srgb(1.0, 0.0, 0.0);

/// Annotation color palette for the toolbar picker
pub fn annotation_colors() -> [(Color, &'static str, egui::Color32); 8] {
    [
        (Color::srgb(1.0, 0.0, 0.0), "Red", egui::Color32::RED),
        (Color::srgb(0.0, 0.0, 1.0), "Blue", egui::Color32::BLUE),
        (
            Color::srgb(0.0, 0.8, 0.0),
            "Green",
            egui::Color32::from_rgb(0, 200, 0),
        ),
        (Color::srgb(1.0, 1.0, 0.0), "Yellow", egui::Color32::YELLOW),
        (Color::srgb(0.0, 0.0, 0.0), "Black", egui::Color32::BLACK),
        (Color::srgb(1.0, 1.0, 1.0), "White", egui::Color32::WHITE),
        (
            Color::srgb(1.0, 0.5, 0.0),
            "Orange",
            egui::Color32::from_rgb(255, 128, 0),
        ),
        (
            Color::srgb(0.5, 0.0, 0.5),
            "Purple",
            egui::Color32::from_rgb(128, 0, 128),
        ),
    ]
}
