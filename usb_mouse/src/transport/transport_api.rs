// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use miette::Diagnostic;

use super::{libusb_error_code, libusb_error_name};

/// Non fatal result of one read.
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
pub enum PollRead {
    /// This many bytes were written to the front of the buffer (may be `0`).
    Data(usize),
    /// Nothing arrived before the timeout. Not an error.
    Timeout,
}

/// Source of raw HID reports.
pub trait Transport {
    /// Block for at most `timeout` waiting for one report.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] for anything other than a timeout. The caller stops
    /// polling when this happens.
    fn read_report(
        &mut self,
        buffer: &mut [u8],
        timeout: Duration,
    ) -> Result<PollRead, TransportError>;
}

/// A read failed for a reason other than a timeout (device unplugged, pipe stall,
/// ...). This ends the poll loop.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("Interrupt transfer on endpoint {endpoint:#04x} failed: {source}")]
#[diagnostic(
    code(usb_mouse::transport::read),
    help("The device was probably unplugged, or another process claimed it")
)]
pub struct TransportError {
    pub endpoint: u8,
    #[source]
    pub source: rusb::Error,
}

impl TransportError {
    /// The libusb error code for this failure (always negative).
    #[must_use]
    pub fn libusb_code(&self) -> i32 { libusb_error_code(&self.source) }

    #[must_use]
    pub fn libusb_name(&self) -> &'static str { libusb_error_name(&self.source) }
}
