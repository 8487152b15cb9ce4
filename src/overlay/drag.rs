//! Drag state machine for floating overlay panels.
//!
//! [`OverlayDragController`] converts a pointer-down/move/up stream into
//! clamped integer positions for a rectangular overlay confined to a parent
//! region. It is pure state (no queries, no side effects) so the whole
//! machine is unit-testable; the toolbar system feeds it egui pointer events
//! and applies the positions it returns.
//!
//! Position ownership is split: the config-backed [`ToolbarAnchors`] is the
//! authoritative position, while the controller keeps a transient `pending`
//! position during and just after a drag. The pending value shadows the
//! anchors until the two numerically agree, then self-clears, so the overlay
//! never snaps back while the authoritative state catches up.

use bevy::prelude::*;

/// Resolved overlay position, integer pixels relative to the parent origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayPosition {
    pub top: i32,
    pub left: i32,
}

/// One anchor of a toolbar position: either a pixel count or an opaque
/// length string kept from config, parsed best-effort when needed.
#[derive(Debug, Clone, PartialEq)]
pub enum AnchorValue {
    Px(f32),
    Raw(String),
}

impl AnchorValue {
    /// Numeric pixel value, if one can be extracted. `"16px"` and `"16"`
    /// both parse; anything else is `None`.
    pub fn to_px(&self) -> Option<f32> {
        match self {
            AnchorValue::Px(v) => Some(*v),
            AnchorValue::Raw(s) => {
                let trimmed = s.trim();
                let numeric = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
                numeric.parse::<f32>().ok()
            }
        }
    }
}

/// Authoritative toolbar anchors. Any combination of the four sides may be
/// set; rendering resolves them to a top/left pair against the parent size.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ToolbarAnchors {
    pub top: Option<AnchorValue>,
    pub right: Option<AnchorValue>,
    pub bottom: Option<AnchorValue>,
    pub left: Option<AnchorValue>,
}

impl ToolbarAnchors {
    pub fn from_top_left(top: f32, left: f32) -> Self {
        Self {
            top: Some(AnchorValue::Px(top)),
            left: Some(AnchorValue::Px(left)),
            ..Default::default()
        }
    }

    /// Resolve the anchors to a concrete top/left pair. Left/top win over
    /// right/bottom when both are present; a missing axis falls back to 0.
    pub fn resolve(&self, parent_size: Vec2, overlay_size: Vec2) -> OverlayPosition {
        let left = if let Some(px) = self.left.as_ref().and_then(AnchorValue::to_px) {
            px
        } else if let Some(px) = self.right.as_ref().and_then(AnchorValue::to_px) {
            parent_size.x - overlay_size.x - px
        } else {
            0.0
        };

        let top = if let Some(px) = self.top.as_ref().and_then(AnchorValue::to_px) {
            px
        } else if let Some(px) = self.bottom.as_ref().and_then(AnchorValue::to_px) {
            parent_size.y - overlay_size.y - px
        } else {
            0.0
        };

        OverlayPosition {
            top: top.round() as i32,
            left: left.round() as i32,
        }
    }
}

/// Transient state of one drag, created on pointer-down and destroyed on
/// pointer-up/cancel.
#[derive(Debug, Clone)]
struct DragSession {
    /// Pointer position minus overlay top-left, captured at grab time
    grab_offset: Vec2,
    /// Overlay width/height snapshot at grab time
    overlay_size: Vec2,
    /// Parent width/height snapshot at grab time
    parent_size: Vec2,
    /// Last position handed out, used to skip redundant updates
    last: OverlayPosition,
    /// Whether any update actually changed the position
    moved: bool,
}

/// Pointer-driven repositioning for a floating overlay.
#[derive(Resource, Debug, Default)]
pub struct OverlayDragController {
    session: Option<DragSession>,
    /// Live position while dragging, kept after release until the
    /// authoritative anchors catch up (see [`Self::reconcile`]).
    pending: Option<OverlayPosition>,
}

impl OverlayDragController {
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Position the overlay should render at right now, if the controller
    /// currently overrides the authoritative anchors.
    pub fn pending_position(&self) -> Option<OverlayPosition> {
        self.pending
    }

    /// Enter the `Dragging` state. All coordinates are relative to the
    /// parent origin. Returns false (and stays idle) when the parent is not
    /// measurable. A begin while a session is already active supersedes it.
    pub fn begin(
        &mut self,
        pointer: Vec2,
        overlay_origin: Vec2,
        overlay_size: Vec2,
        parent_size: Option<Vec2>,
    ) -> bool {
        // A new pointer-down always replaces an incomplete session
        self.session = None;

        let Some(parent_size) = parent_size else {
            return false;
        };

        let start = Self::clamp(overlay_origin, overlay_size, parent_size);
        self.session = Some(DragSession {
            grab_offset: pointer - overlay_origin,
            overlay_size,
            parent_size,
            last: start,
            moved: false,
        });
        true
    }

    /// Process a pointer-move. Returns the new clamped position when it
    /// differs from the last one, `None` when idle or unchanged.
    pub fn update(&mut self, pointer: Vec2) -> Option<OverlayPosition> {
        let session = self.session.as_mut()?;

        let candidate = pointer - session.grab_offset;
        let clamped = Self::clamp(candidate, session.overlay_size, session.parent_size);

        if clamped == session.last {
            return None;
        }

        session.last = clamped;
        session.moved = true;
        self.pending = Some(clamped);
        Some(clamped)
    }

    /// Leave the `Dragging` state on pointer-up. Returns the final position
    /// only if the overlay actually moved, so a plain click produces no
    /// position-change notification.
    pub fn finish(&mut self) -> Option<OverlayPosition> {
        let session = self.session.take()?;
        session.moved.then_some(session.last)
    }

    /// Pointer-cancel tears down the session exactly like pointer-up,
    /// including the same moved-flag guard.
    pub fn cancel(&mut self) -> Option<OverlayPosition> {
        self.finish()
    }

    /// Tear the session down and discard its result entirely, dropping the
    /// pending override so the overlay reverts to the authoritative
    /// anchors. Used when the final position will not be applied anywhere;
    /// a kept pending position would shadow the anchors forever since
    /// [`Self::reconcile`] could never observe a match.
    pub fn abort(&mut self) {
        self.session = None;
        self.pending = None;
    }

    /// Drop the pending position once the authoritative anchors resolve to
    /// the same pixels. Until then the pending value keeps shadowing them.
    pub fn reconcile(&mut self, anchors: &ToolbarAnchors, parent_size: Vec2, overlay_size: Vec2) {
        if self.session.is_some() {
            return;
        }
        if let Some(pending) = self.pending
            && anchors.resolve(parent_size, overlay_size) == pending
        {
            self.pending = None;
        }
    }

    /// Clamp a candidate top-left into the parent, collapsing negative
    /// ranges to 0 when the overlay is larger than the parent, and round
    /// to integer pixels.
    fn clamp(candidate: Vec2, overlay_size: Vec2, parent_size: Vec2) -> OverlayPosition {
        let max_left = (parent_size.x - overlay_size.x).max(0.0);
        let max_top = (parent_size.y - overlay_size.y).max(0.0);
        OverlayPosition {
            left: candidate.x.clamp(0.0, max_left).round() as i32,
            top: candidate.y.clamp(0.0, max_top).round() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARENT: Vec2 = Vec2::new(800.0, 600.0);
    const OVERLAY: Vec2 = Vec2::new(200.0, 40.0);

    fn start_drag(controller: &mut OverlayDragController) {
        // Grab the overlay at (20, 10) inside its body, overlay at (100, 50)
        let started = controller.begin(
            Vec2::new(120.0, 60.0),
            Vec2::new(100.0, 50.0),
            OVERLAY,
            Some(PARENT),
        );
        assert!(started);
    }

    #[test]
    fn test_begin_without_parent_is_noop() {
        let mut controller = OverlayDragController::default();
        let started = controller.begin(Vec2::new(10.0, 10.0), Vec2::ZERO, OVERLAY, None);
        assert!(!started);
        assert!(!controller.is_dragging());
        assert!(controller.update(Vec2::new(50.0, 50.0)).is_none());
        assert!(controller.finish().is_none());
    }

    #[test]
    fn test_move_applies_grab_offset() {
        let mut controller = OverlayDragController::default();
        start_drag(&mut controller);

        let pos = controller.update(Vec2::new(320.0, 160.0));
        assert_eq!(pos, Some(OverlayPosition { top: 150, left: 300 }));
    }

    #[test]
    fn test_clamps_to_right_edge() {
        let mut controller = OverlayDragController::default();
        start_drag(&mut controller);

        // Pointer far past the right edge
        let pos = controller.update(Vec2::new(5000.0, 60.0));
        assert_eq!(
            pos,
            Some(OverlayPosition {
                top: 50,
                left: (PARENT.x - OVERLAY.x) as i32,
            })
        );
    }

    #[test]
    fn test_clamps_negative_to_zero() {
        let mut controller = OverlayDragController::default();
        start_drag(&mut controller);

        let pos = controller.update(Vec2::new(-500.0, -500.0));
        assert_eq!(pos, Some(OverlayPosition { top: 0, left: 0 }));
    }

    #[test]
    fn test_overlay_larger_than_parent_pins_to_origin() {
        let mut controller = OverlayDragController::default();
        controller.begin(
            Vec2::new(10.0, 10.0),
            Vec2::ZERO,
            Vec2::new(1000.0, 700.0),
            Some(PARENT),
        );

        // Both clamp ranges collapse to 0, so every candidate lands on the
        // origin the session already holds: no update fires, and the drag
        // never counts as a move
        assert!(controller.update(Vec2::new(400.0, 300.0)).is_none());
        assert!(controller.update(Vec2::new(-200.0, 900.0)).is_none());
        assert_eq!(controller.finish(), None);
    }

    #[test]
    fn test_redundant_update_skipped() {
        let mut controller = OverlayDragController::default();
        start_drag(&mut controller);

        assert!(controller.update(Vec2::new(320.0, 160.0)).is_some());
        // Same pointer position again: no state churn
        assert!(controller.update(Vec2::new(320.0, 160.0)).is_none());
        // Sub-pixel wiggle rounding to the same integer position: skipped too
        assert!(controller.update(Vec2::new(320.3, 160.2)).is_none());
    }

    #[test]
    fn test_click_without_movement_fires_no_callback() {
        let mut controller = OverlayDragController::default();
        start_drag(&mut controller);
        assert!(controller.finish().is_none());
    }

    #[test]
    fn test_move_back_to_start_still_counts_as_moved() {
        let mut controller = OverlayDragController::default();
        start_drag(&mut controller);

        assert!(controller.update(Vec2::new(320.0, 160.0)).is_some());
        assert!(controller.update(Vec2::new(120.0, 60.0)).is_some());
        // The overlay moved during the drag even though it ended where it
        // began, so the final position is still reported
        assert_eq!(
            controller.finish(),
            Some(OverlayPosition { top: 50, left: 100 })
        );
    }

    #[test]
    fn test_finish_reports_final_clamped_position() {
        let mut controller = OverlayDragController::default();
        start_drag(&mut controller);

        controller.update(Vec2::new(5000.0, 5000.0));
        assert_eq!(
            controller.finish(),
            Some(OverlayPosition {
                top: (PARENT.y - OVERLAY.y) as i32,
                left: (PARENT.x - OVERLAY.x) as i32,
            })
        );
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_cancel_matches_finish_semantics() {
        let mut controller = OverlayDragController::default();
        start_drag(&mut controller);
        assert!(controller.cancel().is_none());

        start_drag(&mut controller);
        controller.update(Vec2::new(320.0, 160.0));
        assert_eq!(
            controller.cancel(),
            Some(OverlayPosition { top: 150, left: 300 })
        );
    }

    #[test]
    fn test_new_begin_supersedes_incomplete_session() {
        let mut controller = OverlayDragController::default();
        start_drag(&mut controller);
        controller.update(Vec2::new(320.0, 160.0));

        // Second pointer-down before any pointer-up: fresh session, the
        // moved flag from the old session must not leak
        start_drag(&mut controller);
        assert!(controller.finish().is_none());
    }

    #[test]
    fn test_pending_shadows_until_anchors_match() {
        let mut controller = OverlayDragController::default();
        start_drag(&mut controller);
        controller.update(Vec2::new(320.0, 160.0));
        let final_pos = controller.finish();
        assert_eq!(final_pos, Some(OverlayPosition { top: 150, left: 300 }));
        assert_eq!(
            controller.pending_position(),
            Some(OverlayPosition { top: 150, left: 300 })
        );

        // Anchors still hold the stale position: pending stays
        let stale = ToolbarAnchors::from_top_left(50.0, 100.0);
        controller.reconcile(&stale, PARENT, OVERLAY);
        assert!(controller.pending_position().is_some());

        // Anchors caught up: pending self-clears
        let caught_up = ToolbarAnchors::from_top_left(150.0, 300.0);
        controller.reconcile(&caught_up, PARENT, OVERLAY);
        assert!(controller.pending_position().is_none());
    }

    #[test]
    fn test_abort_discards_session_and_pending() {
        let mut controller = OverlayDragController::default();
        start_drag(&mut controller);
        controller.update(Vec2::new(320.0, 160.0));
        assert!(controller.pending_position().is_some());

        // Dropping the drag without applying its result anywhere must also
        // drop the override; otherwise it shadows the anchors forever since
        // they never catch up to a position nobody stored
        controller.abort();
        assert!(!controller.is_dragging());
        assert!(controller.pending_position().is_none());
        assert!(controller.finish().is_none());

        let stale = ToolbarAnchors::from_top_left(50.0, 100.0);
        controller.reconcile(&stale, PARENT, OVERLAY);
        assert!(controller.pending_position().is_none());
    }

    #[test]
    fn test_reconcile_ignored_while_dragging() {
        let mut controller = OverlayDragController::default();
        start_drag(&mut controller);
        controller.update(Vec2::new(320.0, 160.0));

        let anchors = ToolbarAnchors::from_top_left(150.0, 300.0);
        controller.reconcile(&anchors, PARENT, OVERLAY);
        assert!(controller.pending_position().is_some());
    }

    #[test]
    fn test_anchor_value_parsing() {
        assert_eq!(AnchorValue::Px(16.0).to_px(), Some(16.0));
        assert_eq!(AnchorValue::Raw("16px".to_string()).to_px(), Some(16.0));
        assert_eq!(AnchorValue::Raw(" 24 px".to_string()).to_px(), Some(24.0));
        assert_eq!(AnchorValue::Raw("12.5".to_string()).to_px(), Some(12.5));
        assert_eq!(AnchorValue::Raw("calc(100% - 8px)".to_string()).to_px(), None);
    }

    #[test]
    fn test_resolve_right_bottom_anchors() {
        let anchors = ToolbarAnchors {
            right: Some(AnchorValue::Px(10.0)),
            bottom: Some(AnchorValue::Px(20.0)),
            ..Default::default()
        };
        let pos = anchors.resolve(PARENT, OVERLAY);
        assert_eq!(pos.left, (PARENT.x - OVERLAY.x - 10.0) as i32);
        assert_eq!(pos.top, (PARENT.y - OVERLAY.y - 20.0) as i32);
    }

    #[test]
    fn test_resolve_prefers_left_over_right() {
        let anchors = ToolbarAnchors {
            left: Some(AnchorValue::Px(30.0)),
            right: Some(AnchorValue::Px(10.0)),
            top: Some(AnchorValue::Px(5.0)),
            ..Default::default()
        };
        assert_eq!(
            anchors.resolve(PARENT, OVERLAY),
            OverlayPosition { top: 5, left: 30 }
        );
    }

    #[test]
    fn test_nan_pointer_fails_closed() {
        let mut controller = OverlayDragController::default();
        start_drag(&mut controller);

        // NaN clamps to the low bound rather than escaping the parent
        let pos = controller.update(Vec2::new(f32::NAN, 160.0));
        if let Some(pos) = pos {
            assert!(pos.left >= 0 && pos.left <= (PARENT.x - OVERLAY.x) as i32);
        }
    }
}
