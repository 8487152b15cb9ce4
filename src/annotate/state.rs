//! State resources for annotation tools and editing.

use bevy::prelude::*;

use crate::common::EditDragMode;

/// In-progress freehand stroke.
#[derive(Resource, Default)]
pub struct DrawState {
    pub is_drawing: bool,
    pub current_points: Vec<Vec2>,
}

/// In-progress line (press to anchor the start, release to finish).
#[derive(Resource, Default)]
pub struct LineDrawState {
    pub start_point: Option<Vec2>,
}

/// In-progress circle (press to anchor the center, release to finish).
#[derive(Resource, Default)]
pub struct CircleDrawState {
    pub center: Option<Vec2>,
}

/// Stroke settings shared by all annotation tools.
#[derive(Resource)]
pub struct AnnotationSettings {
    pub stroke_color: Color,
    pub stroke_width: f32,
    pub font_size: f32,
}

impl Default for AnnotationSettings {
    fn default() -> Self {
        Self {
            stroke_color: crate::theme::ANNOTATION_DEFAULT,
            stroke_width: 2.0,
            font_size: 18.0,
        }
    }
}

/// Original geometry of the annotation being edited, captured at drag start
/// so pointer movement applies as an offset from fixed values.
#[derive(Clone)]
pub enum EditDragOrigin {
    Line { start: Vec2, end: Vec2 },
    Circle { center: Vec2, radius: f32 },
    Freehand { points: Vec<Vec2> },
}

/// Active edit-drag session for the select tool. Created on a qualifying
/// pointer-down over an annotation, destroyed on pointer-up.
#[derive(Resource, Default)]
pub struct EditDragState {
    pub is_dragging: bool,
    pub mode: EditDragMode,
    pub target: Option<Entity>,
    pub drag_start: Vec2,
    pub origin: Option<EditDragOrigin>,
}

impl EditDragState {
    pub fn clear(&mut self) {
        self.is_dragging = false;
        self.mode = EditDragMode::None;
        self.target = None;
        self.origin = None;
    }
}
