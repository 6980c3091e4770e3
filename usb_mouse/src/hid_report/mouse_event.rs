// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Represents mouse buttons that are tracked in a HID report.
///
/// The discriminant ordering is also the priority order used to pick the cursor
/// glyph: [`Button::Left`] wins over [`Button::Right`], which wins over
/// [`Button::Middle`].
///
/// ```rust
/// use usb_mouse::Button;
///
/// let primary = Button::Left;    // Primary button (usually left)
/// let secondary = Button::Right; // Secondary button (context menu)
/// let tertiary = Button::Middle; // Middle button (often scroll wheel click)
/// assert_eq!(primary.mask_bit(), 0x01);
/// assert_eq!(secondary.mask_bit(), 0x02);
/// assert_eq!(tertiary.mask_bit(), 0x04);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Copy, strum_macros::EnumIter)]
pub enum Button {
    /// Bit 0 of the button mask.
    Left,
    /// Bit 1 of the button mask.
    Right,
    /// Bit 2 of the button mask.
    Middle,
}

impl Button {
    #[must_use]
    pub fn mask_bit(self) -> u8 {
        match self {
            Button::Left => 0x01,
            Button::Right => 0x02,
            Button::Middle => 0x04,
        }
    }
}

/// The raw button byte of a HID report. Bits 3..=7 are reserved, they are kept as-is
/// (so two masks that only differ in reserved bits are still different values), but
/// [`ButtonMask::is_pressed`] never looks at them.
#[derive(Clone, Debug, Eq, PartialEq, Copy, Default, Hash)]
pub struct ButtonMask(pub u8);

impl ButtonMask {
    #[must_use]
    pub fn is_pressed(self, button: Button) -> bool { self.0 & button.mask_bit() != 0 }

    #[must_use]
    pub fn bits(self) -> u8 { self.0 }
}

impl From<u8> for ButtonMask {
    fn from(bits: u8) -> Self { Self(bits) }
}

/// One decoded HID report: the button mask plus relative motion and wheel deltas.
///
/// It is produced once per successful poll by [`crate::decode`] and consumed by
/// [`crate::CursorState::apply`].
#[derive(Clone, Debug, Eq, PartialEq, Copy, Default)]
pub struct MouseEvent {
    pub buttons: ButtonMask,
    /// Relative horizontal motion since the previous report.
    pub dx: i8,
    /// Relative vertical motion since the previous report (positive is down).
    pub dy: i8,
    /// Relative vertical scroll, positive is up (away from the user).
    pub wheel: i8,
}
