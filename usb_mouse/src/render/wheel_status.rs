// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

/// Direction of the last wheel delta, as shown on the status line. The padding of
/// each label is part of the on-screen format.
#[derive(Clone, Debug, Eq, PartialEq, Copy, strum_macros::AsRefStr)]
pub enum WheelStatus {
    #[strum(serialize = " Up ")]
    Up,
    #[strum(serialize = "Down ")]
    Down,
    #[strum(serialize = "---")]
    Neutral,
}

impl From<i8> for WheelStatus {
    fn from(wheel: i8) -> Self {
        match wheel.cmp(&0) {
            Ordering::Less => WheelStatus::Down,
            Ordering::Equal => WheelStatus::Neutral,
            Ordering::Greater => WheelStatus::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(i8::MIN, WheelStatus::Down    ; "min")]
    #[test_case(-1,      WheelStatus::Down    ; "minus one")]
    #[test_case(0,       WheelStatus::Neutral ; "zero")]
    #[test_case(1,       WheelStatus::Up      ; "one")]
    #[test_case(i8::MAX, WheelStatus::Up      ; "max")]
    fn test_wheel_status(wheel: i8, expected: WheelStatus) {
        assert_eq2!(WheelStatus::from(wheel), expected);
    }
}
