// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Button, ButtonMask};

/// What is drawn at the cursor position. Only the first pressed button in the
/// priority order left, right, middle decides.
#[derive(Clone, Debug, Eq, PartialEq, Copy, strum_macros::AsRefStr)]
pub enum CursorGlyph {
    #[strum(serialize = "L")]
    Left,
    #[strum(serialize = "R")]
    Right,
    #[strum(serialize = "M")]
    Middle,
    #[strum(serialize = "⇖")]
    Idle,
}

impl From<ButtonMask> for CursorGlyph {
    fn from(buttons: ButtonMask) -> Self {
        if buttons.is_pressed(Button::Left) {
            CursorGlyph::Left
        } else if buttons.is_pressed(Button::Right) {
            CursorGlyph::Right
        } else if buttons.is_pressed(Button::Middle) {
            CursorGlyph::Middle
        } else {
            CursorGlyph::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(0x00, CursorGlyph::Idle,   "⇖" ; "idle")]
    #[test_case(0x01, CursorGlyph::Left,   "L" ; "left")]
    #[test_case(0x02, CursorGlyph::Right,  "R" ; "right")]
    #[test_case(0x04, CursorGlyph::Middle, "M" ; "middle")]
    #[test_case(0x07, CursorGlyph::Left,   "L" ; "left beats everything")]
    #[test_case(0x06, CursorGlyph::Right,  "R" ; "right beats middle")]
    #[test_case(0x05, CursorGlyph::Left,   "L" ; "left beats middle")]
    #[test_case(0xF8, CursorGlyph::Idle,   "⇖" ; "reserved bits are not buttons")]
    fn test_glyph_priority(bits: u8, expected: CursorGlyph, text: &str) {
        let glyph = CursorGlyph::from(ButtonMask(bits));
        assert_eq2!(glyph, expected);
        assert_eq2!(glyph.as_ref(), text);
    }
}
