// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::GridSize;
use crate::{ButtonMask, MouseEvent};

/// Absolute cursor position plus the last observed buttons and wheel delta.
///
/// Owned by the [`crate::PollLoop`] for the whole run and mutated in place by
/// [`CursorState::apply`], once per decoded report.
///
/// - `x` and `y` always stay inside the grid.
/// - `buttons` and `wheel` are replaced by every event, they are never merged or
///   accumulated. A later report with a zero wheel delta resets `wheel` to `0`.
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
pub struct CursorState {
    pub x: u16,
    pub y: u16,
    pub buttons: ButtonMask,
    pub wheel: i8,
    grid_size: GridSize,
}

impl CursorState {
    /// Start at the center of the grid with nothing pressed.
    #[must_use]
    pub fn new(grid_size: GridSize) -> Self {
        let (x, y) = grid_size.center();
        Self {
            x,
            y,
            buttons: ButtonMask::default(),
            wheel: 0,
            grid_size,
        }
    }

    #[must_use]
    pub fn grid_size(&self) -> GridSize { self.grid_size }

    pub fn apply(&mut self, event: MouseEvent) {
        self.x = clamp_axis(self.x, event.dx, self.grid_size.max_col_index());
        self.y = clamp_axis(self.y, event.dy, self.grid_size.max_row_index());
        self.buttons = event.buttons;
        self.wheel = event.wheel;
    }
}

/// Saturates at `0` and at `max_index`, never wraps.
fn clamp_axis(pos: u16, delta: i8, max_index: u16) -> u16 {
    pos.saturating_add_signed(i16::from(delta)).min(max_index)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn event(buttons: u8, dx: i8, dy: i8, wheel: i8) -> MouseEvent {
        MouseEvent {
            buttons: ButtonMask(buttons),
            dx,
            dy,
            wheel,
        }
    }

    #[test]
    fn test_starts_centered() {
        let state = CursorState::new(GridSize::new(40, 20));
        assert_eq2!((state.x, state.y), (20, 10));
        assert_eq2!(state.buttons, ButtonMask(0));
        assert_eq2!(state.wheel, 0);
    }

    #[test]
    fn test_apply_moves_and_replaces() {
        let mut state = CursorState::new(GridSize::new(40, 20));
        state.apply(event(0x01, 3, -2, 0));
        assert_eq2!(
            (state.x, state.y, state.buttons, state.wheel),
            (23, 8, ButtonMask(0x01), 0)
        );
    }

    #[test]
    fn test_zero_delta_event_replaces_buttons_and_wheel() {
        let mut state = CursorState::new(GridSize::new(40, 20));
        state.apply(event(0x07, 4, 4, -1));
        let (x, y) = (state.x, state.y);

        state.apply(event(0x02, 0, 0, 0));

        assert_eq2!((state.x, state.y), (x, y));
        assert_eq2!(state.buttons, ButtonMask(0x02));
        assert_eq2!(state.wheel, 0);
    }

    #[test]
    fn test_right_edge_clamps() {
        let grid_size = GridSize::new(40, 20);
        let mut state = CursorState::new(grid_size);
        for _ in 0..10 {
            state.apply(event(0, 5, 0, 0));
            assert!(state.x <= grid_size.max_col_index());
        }
        assert_eq2!(state.x, 39);
    }

    #[test]
    fn test_left_and_top_edges_clamp() {
        let mut state = CursorState::new(GridSize::new(40, 20));
        for _ in 0..3 {
            state.apply(event(0, -100, -128, 0));
            assert_eq2!((state.x, state.y), (0, 0));
        }
    }

    #[test_case(0,  0,  127,  0 ; "zero width stays at zero")]
    #[test_case(1,  0,  -5,   0 ; "single column")]
    #[test_case(10, 9,  127,  9 ; "already at edge")]
    #[test_case(10, 0,  -128, 0 ; "already at origin")]
    #[test_case(10, 4,  3,    7 ; "inside")]
    fn test_clamp_axis(len: u16, pos: u16, delta: i8, expected: u16) {
        assert_eq2!(clamp_axis(pos, delta, len.saturating_sub(1)), expected);
    }
}
