// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::CursorState;

/// `true` iff `x`, `y`, `buttons` or `wheel` differ. Exact comparison, there is no
/// movement threshold.
#[must_use]
pub fn changed(current: &CursorState, previous: &CursorState) -> bool {
    current.x != previous.x
        || current.y != previous.y
        || current.buttons != previous.buttons
        || current.wheel != previous.wheel
}

/// Remembers the last rendered [`CursorState`] so that frames are only drawn when
/// something visible changed. Before the first render there is no snapshot, and
/// [`ChangeDetector::should_render`] returns `true`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeDetector {
    maybe_last_rendered: Option<CursorState>,
}

impl ChangeDetector {
    #[must_use]
    pub fn should_render(&self, current: &CursorState) -> bool {
        match &self.maybe_last_rendered {
            Some(previous) => changed(current, previous),
            None => true,
        }
    }

    pub fn mark_rendered(&mut self, rendered: CursorState) {
        self.maybe_last_rendered = Some(rendered);
    }

    #[must_use]
    pub fn last_rendered(&self) -> Option<&CursorState> { self.maybe_last_rendered.as_ref() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ButtonMask, GridSize, assert_eq2};

    fn state() -> CursorState { CursorState::new(GridSize::new(40, 20)) }

    #[test]
    fn test_same_state_is_unchanged() {
        let it = state();
        assert!(!changed(&it, &it));
    }

    #[test]
    fn test_each_single_field_change_is_detected() {
        let previous = state();

        let mut it = previous;
        it.x += 1;
        assert!(changed(&it, &previous));

        let mut it = previous;
        it.y -= 1;
        assert!(changed(&it, &previous));

        let mut it = previous;
        it.buttons = ButtonMask(0x04);
        assert!(changed(&it, &previous));

        let mut it = previous;
        it.wheel = -1;
        assert!(changed(&it, &previous));
    }

    #[test]
    fn test_detector_renders_first_frame_then_only_on_change() {
        let mut detector = ChangeDetector::default();
        let mut it = state();
        assert!(detector.should_render(&it));

        detector.mark_rendered(it);
        assert!(!detector.should_render(&it));
        assert_eq2!(detector.last_rendered(), Some(&it));

        it.wheel = 1;
        assert!(detector.should_render(&it));
    }
}
