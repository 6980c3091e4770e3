// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Where report bytes come from.
//!
//! The [`crate::PollLoop`] only sees the [`Transport`] trait: each read either yields
//! data, times out, or fails fatally. [`UsbMouseTransport`] is the libusb backed
//! implementation, it owns the claimed interface and gives everything back on drop.

// Attach sources.
pub mod libusb_error_code;
pub mod transport_api;
pub mod usb_mouse_transport;

// Re-export.
pub use libusb_error_code::*;
pub use transport_api::*;
pub use usb_mouse_transport::*;
