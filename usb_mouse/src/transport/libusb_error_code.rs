// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Maps a [`rusb::Error`] back to the numeric `LIBUSB_ERROR_*` code it was created
/// from. The code is what `read_mouse` uses as its exit status.
#[must_use]
pub fn libusb_error_code(error: &rusb::Error) -> i32 {
    match error {
        rusb::Error::Io => -1,
        rusb::Error::InvalidParam => -2,
        rusb::Error::Access => -3,
        rusb::Error::NoDevice => -4,
        rusb::Error::NotFound => -5,
        rusb::Error::Busy => -6,
        rusb::Error::Timeout => -7,
        rusb::Error::Overflow => -8,
        rusb::Error::Pipe => -9,
        rusb::Error::Interrupted => -10,
        rusb::Error::NoMem => -11,
        rusb::Error::NotSupported => -12,
        #[allow(unreachable_patterns)]
        _ => -99,
    }
}

/// The `LIBUSB_ERROR_*` constant name, as `libusb_error_name()` prints it.
#[must_use]
pub fn libusb_error_name(error: &rusb::Error) -> &'static str {
    match error {
        rusb::Error::Io => "LIBUSB_ERROR_IO",
        rusb::Error::InvalidParam => "LIBUSB_ERROR_INVALID_PARAM",
        rusb::Error::Access => "LIBUSB_ERROR_ACCESS",
        rusb::Error::NoDevice => "LIBUSB_ERROR_NO_DEVICE",
        rusb::Error::NotFound => "LIBUSB_ERROR_NOT_FOUND",
        rusb::Error::Busy => "LIBUSB_ERROR_BUSY",
        rusb::Error::Timeout => "LIBUSB_ERROR_TIMEOUT",
        rusb::Error::Overflow => "LIBUSB_ERROR_OVERFLOW",
        rusb::Error::Pipe => "LIBUSB_ERROR_PIPE",
        rusb::Error::Interrupted => "LIBUSB_ERROR_INTERRUPTED",
        rusb::Error::NoMem => "LIBUSB_ERROR_NO_MEM",
        rusb::Error::NotSupported => "LIBUSB_ERROR_NOT_SUPPORTED",
        #[allow(unreachable_patterns)]
        _ => "LIBUSB_ERROR_OTHER",
    }
}

/// The byte a C `main` returning `code` would leave as the process exit status.
#[must_use]
pub fn exit_status_byte(code: i32) -> u8 { code.to_le_bytes()[0] }
