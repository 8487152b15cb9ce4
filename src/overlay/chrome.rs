//! Window-chrome side effects for overlay drags.
//!
//! Dragging the toolbar forces a grabbing cursor for the whole drag. The
//! override is scoped: whatever cursor the window carried before the drag is
//! saved on acquire and restored exactly on release, so a drag that starts
//! while some other system holds a non-default cursor hands that cursor
//! back instead of resetting to a default.

use bevy::prelude::*;
use bevy::window::{CursorIcon, SystemCursorIcon};

/// Saved window cursor state while a drag override is active.
#[derive(Resource, Debug, Default)]
pub struct CursorOverride {
    /// `Some` while the override holds the window cursor; the inner value
    /// is the pre-drag icon (or `None` if the window had no explicit icon).
    saved: Option<Option<CursorIcon>>,
}

impl CursorOverride {
    pub fn is_active(&self) -> bool {
        self.saved.is_some()
    }

    /// Take ownership of the window cursor, remembering its current value.
    /// Returns the icon to install for the drag. A second acquire while
    /// active keeps the original saved value rather than saving the
    /// override itself.
    pub fn acquire(&mut self, current: Option<CursorIcon>) -> CursorIcon {
        if self.saved.is_none() {
            self.saved = Some(current);
        }
        CursorIcon::System(SystemCursorIcon::Grabbing)
    }

    /// Give the window cursor back. Returns the pre-drag icon to restore
    /// (`Some(None)` means the explicit icon component should be removed).
    /// A release without a matching acquire is a no-op.
    pub fn release(&mut self) -> Option<Option<CursorIcon>> {
        self.saved.take()
    }
}

/// Apply a released override to the window entity.
pub fn restore_cursor(commands: &mut Commands, window_entity: Entity, saved: Option<CursorIcon>) {
    match saved {
        Some(icon) => {
            commands.entity(window_entity).insert(icon);
        }
        None => {
            commands.entity(window_entity).remove::<CursorIcon>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_returns_grabbing() {
        let mut guard = CursorOverride::default();
        let icon = guard.acquire(None);
        assert_eq!(icon, CursorIcon::System(SystemCursorIcon::Grabbing));
        assert!(guard.is_active());
    }

    #[test]
    fn test_release_restores_exact_saved_value() {
        let mut guard = CursorOverride::default();
        let before = CursorIcon::System(SystemCursorIcon::Crosshair);
        guard.acquire(Some(before.clone()));

        assert_eq!(guard.release(), Some(Some(before)));
        assert!(!guard.is_active());
    }

    #[test]
    fn test_release_without_acquire_is_noop() {
        let mut guard = CursorOverride::default();
        assert_eq!(guard.release(), None);
    }

    #[test]
    fn test_double_acquire_keeps_first_saved_value() {
        let mut guard = CursorOverride::default();
        let before = CursorIcon::System(SystemCursorIcon::Text);
        guard.acquire(Some(before.clone()));
        // Re-acquire mid-drag must not save the grabbing override itself
        guard.acquire(Some(CursorIcon::System(SystemCursorIcon::Grabbing)));

        assert_eq!(guard.release(), Some(Some(before)));
    }

    #[test]
    fn test_window_without_icon_restores_to_none() {
        let mut guard = CursorOverride::default();
        guard.acquire(None);
        assert_eq!(guard.release(), Some(None));
    }
}
