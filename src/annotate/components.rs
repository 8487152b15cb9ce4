//! Component types for annotation entities.
//!
//! Each variant is its own component struct; hit-testing and editing
//! dispatch on the concrete type rather than a shared base.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// A straight line between two pixel-space points.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct LineAnnotation {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Color,
    pub stroke_width: f32,
}

/// A circle with a pixel-space center and radius.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct CircleAnnotation {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
    pub stroke_width: f32,
}

/// A freehand path of pixel-space points in drawing order.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct FreehandAnnotation {
    pub points: Vec<Vec2>,
    pub color: Color,
    pub stroke_width: f32,
}

/// A text label anchored at a pixel-space position. Labels have no
/// hit-test geometry; see the note on the text tool in `tools.rs`.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct TextLabel {
    pub position: Vec2,
    pub content: String,
    pub font_size: f32,
    pub color: Color,
}

/// Marker present on every annotation entity.
#[derive(Component)]
pub struct AnnotationMarker;

/// Marker for the currently selected annotation.
#[derive(Component)]
pub struct Selected;
