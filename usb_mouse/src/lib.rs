// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # usb_mouse
//!
//! Polls the interrupt IN endpoint of a USB HID mouse, decodes each raw report into a
//! [`MouseEvent`], folds it into a [`CursorState`] clamped to a [`GridSize`], and
//! redraws a bordered grid with the cursor and a button / wheel status line whenever
//! the visible state changes.
//!
//! The device is never enumerated. The `read_mouse` binary is handed the file
//! descriptor of an already open usbfs device (eg: by `termux-usb` on Android), and
//! wraps it with libusb.
//!
//! ```text
//! Transport ──bytes──▶ try_decode ──MouseEvent──▶ CursorState::apply
//!                                                       │
//!                       Render ◀──changed?── ChangeDetector
//! ```
//!
//! The pieces, in the order data flows through them:
//! - [`Transport`] ([`UsbMouseTransport`]): claims the interface and reads reports.
//! - [`try_decode`]: fixed byte offsets, no HID descriptor parsing.
//! - [`CursorState`] and [`ChangeDetector`]: the model.
//! - [`Render`] ([`TerminalRenderer`], [`Frame`]): the view, drawn on stderr.
//! - [`PollLoop`]: ties them together, one read per refresh period.
//!
//! You can get the unicode symbols for the drawings here:
//! - <https://symbl.cc/en/unicode/blocks/box-drawing/>
//! - <https://symbl.cc/en/unicode/blocks/arrows/>

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod cli;
pub mod common;
pub mod config;
pub mod cursor;
pub mod hid_report;
pub mod launcher;
pub mod log;
pub mod poll_loop;
pub mod render;
pub mod terminal_io;
pub mod test_fixtures;
pub mod transport;

// Re-export.
pub use cli::*;
pub use common::*;
pub use config::*;
pub use cursor::*;
pub use hid_report::*;
pub use launcher::*;
pub use log::*;
pub use poll_loop::*;
pub use render::*;
pub use terminal_io::*;
pub use test_fixtures::*;
pub use transport::*;
