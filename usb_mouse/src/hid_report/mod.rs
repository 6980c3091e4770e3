// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decoding of the raw interrupt endpoint reports sent by the mouse.
//!
//! The report layout is fixed to a single device profile (see [`report_decoder`]). There
//! is no report descriptor parsing here.

// Attach sources.
pub mod mouse_event;
pub mod report_decoder;

// Re-export.
pub use mouse_event::*;
pub use report_decoder::*;
