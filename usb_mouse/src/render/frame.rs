// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use super::{CursorGlyph, WheelStatus};
use crate::{Button, CursorState};

// You can get the unicode symbols for the drawings here:
// - <https://symbl.cc/en/unicode/blocks/box-drawing/>
pub mod border_glyphs {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

/// One complete picture of the [`CursorState`]: a bordered grid with the cursor glyph
/// at `(x, y)`, followed by the status line.
///
/// ```text
/// ╭────────╮
/// │        │
/// │   ⇖    │
/// ╰────────╯
///   Buttons: L=0 R=0 M=0 | Wheel: ---
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Frame {
    pub lines: Vec<String>,
}

impl From<&CursorState> for Frame {
    fn from(cursor_state: &CursorState) -> Self {
        use border_glyphs::{BOTTOM_LEFT, BOTTOM_RIGHT, HORIZONTAL, TOP_LEFT, TOP_RIGHT,
                            VERTICAL};

        let grid_size = cursor_state.grid_size();
        let glyph = CursorGlyph::from(cursor_state.buttons);
        let horizontal_rule = HORIZONTAL.repeat(usize::from(grid_size.width));

        let mut lines = Vec::with_capacity(usize::from(grid_size.height) + 3);
        lines.push(format!("{TOP_LEFT}{horizontal_rule}{TOP_RIGHT}"));
        for row_index in 0..grid_size.height {
            let mut line = String::from(VERTICAL);
            for col_index in 0..grid_size.width {
                if (col_index, row_index) == (cursor_state.x, cursor_state.y) {
                    line.push_str(glyph.as_ref());
                } else {
                    line.push(' ');
                }
            }
            line.push_str(VERTICAL);
            lines.push(line);
        }
        lines.push(format!("{BOTTOM_LEFT}{horizontal_rule}{BOTTOM_RIGHT}"));
        lines.push(status_line(cursor_state));

        Self { lines }
    }
}

/// `  Buttons: L=1 R=0 M=0 | Wheel: Down  `
#[must_use]
pub fn status_line(cursor_state: &CursorState) -> String {
    let flag = |button: Button| u8::from(cursor_state.buttons.is_pressed(button));
    format!(
        "  Buttons: L={} R={} M={} | Wheel: {} ",
        flag(Button::Left),
        flag(Button::Right),
        flag(Button::Middle),
        WheelStatus::from(cursor_state.wheel).as_ref()
    )
}

impl Display for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ButtonMask, GridSize, MouseEvent, assert_eq2};

    #[test]
    fn test_small_frame_layout() {
        let mut state = CursorState::new(GridSize::new(4, 2));
        state.apply(MouseEvent {
            buttons: ButtonMask(0x02),
            dx: -1,
            dy: -1,
            wheel: 3,
        });

        let frame = Frame::from(&state);

        assert_eq2!(
            frame.lines,
            vec![
                "╭────╮".to_string(),
                "│ R  │".to_string(),
                "│    │".to_string(),
                "╰────╯".to_string(),
                "  Buttons: L=0 R=1 M=0 | Wheel:  Up  ".to_string(),
            ]
        );
    }

    #[test]
    fn test_default_frame_dimensions() {
        let state = CursorState::new(GridSize::default());
        let frame = Frame::from(&state);

        // Border, 20 rows, border, status.
        assert_eq2!(frame.lines.len(), 23);
        for line in &frame.lines[1..21] {
            assert_eq2!(line.chars().count(), 42);
        }
        assert_eq2!(frame.lines[11].chars().nth(21), Some('⇖'));
        assert_eq2!(
            frame.lines[22],
            "  Buttons: L=0 R=0 M=0 | Wheel: --- ".to_string()
        );
    }

    #[test]
    fn test_status_line_all_pressed_scrolling_down() {
        let mut state = CursorState::new(GridSize::default());
        state.buttons = ButtonMask(0x07);
        state.wheel = -2;
        assert_eq2!(
            status_line(&state),
            "  Buttons: L=1 R=1 M=1 | Wheel: Down  ".to_string()
        );
    }

    #[test]
    fn test_display_ends_every_line_with_newline() {
        let state = CursorState::new(GridSize::new(1, 1));
        let text = Frame::from(&state).to_string();
        assert_eq2!(text, "╭─╮\n│⇖│\n╰─╯\n  Buttons: L=0 R=0 M=0 | Wheel: --- \n");
    }
}
