// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixed offset decoder for the interrupt reports of the supported mouse.
//!
//! | Offset | Meaning                                  |
//! | :----- | :--------------------------------------- |
//! | 0      | padding (report id on this device)       |
//! | 1      | button mask                              |
//! | 2      | `dx`, two's complement                   |
//! | 3      | padding                                  |
//! | 4      | `dy`, two's complement                   |
//! | 5      | padding                                  |
//! | 6      | `wheel`, two's complement                |
//! | 7..    | ignored                                  |

use miette::Diagnostic;

use super::{ButtonMask, MouseEvent};

/// Reports shorter than this are refused.
pub const MIN_REPORT_LEN: usize = 7;

const BUTTONS_OFFSET: usize = 1;
const DX_OFFSET: usize = 2;
const DY_OFFSET: usize = 4;
const WHEEL_OFFSET: usize = 6;

/// The report did not carry enough bytes to be decoded. This is recoverable, the poll
/// loop logs it and keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Diagnostic)]
#[error("Expected at least {expected} bytes, but received {received} bytes for interpretation")]
#[diagnostic(
    code(usb_mouse::hid_report::too_short),
    help("The device sent a truncated report. It is skipped and polling continues")
)]
pub struct ReportTooShortError {
    pub expected: usize,
    pub received: usize,
}

/// Decode a raw report, or explain why it can't be decoded.
///
/// # Errors
///
/// Returns [`ReportTooShortError`] if `buffer` holds fewer than [`MIN_REPORT_LEN`]
/// bytes.
pub fn try_decode(buffer: &[u8]) -> Result<MouseEvent, ReportTooShortError> {
    if buffer.len() < MIN_REPORT_LEN {
        return Err(ReportTooShortError {
            expected: MIN_REPORT_LEN,
            received: buffer.len(),
        });
    }

    Ok(MouseEvent {
        buttons: ButtonMask(buffer[BUTTONS_OFFSET]),
        dx: i8::from_ne_bytes([buffer[DX_OFFSET]]),
        dy: i8::from_ne_bytes([buffer[DY_OFFSET]]),
        wheel: i8::from_ne_bytes([buffer[WHEEL_OFFSET]]),
    })
}

/// Decode a raw report. Returns [`None`] for reports shorter than [`MIN_REPORT_LEN`].
/// Use [`try_decode`] to find out why a report was refused.
#[must_use]
pub fn decode(buffer: &[u8]) -> Option<MouseEvent> { try_decode(buffer).ok() }

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_short_buffers_never_decode() {
        for len in 0..MIN_REPORT_LEN {
            for fill in [0x00_u8, 0x7f, 0x80, 0xff] {
                let buffer = vec![fill; len];
                assert_eq2!(decode(&buffer), None);
                assert_eq2!(
                    try_decode(&buffer),
                    Err(ReportTooShortError {
                        expected: MIN_REPORT_LEN,
                        received: len,
                    })
                );
            }
        }
    }

    #[test]
    fn test_decode_reads_fixed_offsets() {
        let buffer = [0xAA, 0x05, 0x03, 0xBB, 0xFE, 0xCC, 0x01];
        assert_eq2!(
            decode(&buffer),
            Some(MouseEvent {
                buttons: ButtonMask(0x05),
                dx: 3,
                dy: -2,
                wheel: 1,
            })
        );
    }

    #[test]
    fn test_padding_bytes_are_ignored() {
        let base = [0x00, 0x01, 0x10, 0x00, 0xF0, 0x00, 0xFF, 0x00];
        let expected = decode(&base);
        assert!(expected.is_some());

        for offset in [0_usize, 3, 5, 7] {
            for value in [0x01_u8, 0x55, 0x80, 0xFF] {
                let mut mutated = base;
                mutated[offset] = value;
                assert_eq2!(decode(&mutated), expected);
            }
        }
    }

    #[test]
    fn test_trailing_bytes_are_ignored() {
        let mut long = vec![0_u8; 64];
        long[1] = 0x02;
        long[2] = 0x7F;
        long[63] = 0xFF;
        assert_eq2!(
            decode(&long),
            Some(MouseEvent {
                buttons: ButtonMask(0x02),
                dx: 127,
                dy: 0,
                wheel: 0,
            })
        );
    }

    #[test_case(0x00, 0    ; "zero")]
    #[test_case(0x01, 1    ; "one")]
    #[test_case(0x7F, 127  ; "max")]
    #[test_case(0x80, -128 ; "min")]
    #[test_case(0xFF, -1   ; "minus one")]
    #[test_case(0x9C, -100 ; "minus one hundred")]
    fn test_twos_complement(byte: u8, expected: i8) {
        let buffer = [0, 0, byte, 0, byte, 0, byte];
        let event = decode(&buffer).unwrap();
        assert_eq2!(event.dx, expected);
        assert_eq2!(event.dy, expected);
        assert_eq2!(event.wheel, expected);
    }

    #[test]
    fn test_all_bytes_map_to_twos_complement() {
        for byte in 0..=u8::MAX {
            let event = decode(&[0, 0, byte, 0, 0, 0, 0]).unwrap();
            let expected = i16::from(byte) - if byte >= 0x80 { 256 } else { 0 };
            assert_eq2!(i16::from(event.dx), expected);
        }
    }
}
