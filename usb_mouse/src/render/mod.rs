// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turning a [`crate::CursorState`] into a frame on the terminal.
//!
//! - [`Frame`] is the pure part: the bordered grid, the cursor glyph, and the status
//!   line, as lines of text.
//! - [`TerminalRenderer`] paints a [`Frame`] onto an [`crate::OutputDevice`].
//! - [`TerminalSession`] hides the terminal cursor for the lifetime of the app and
//!   puts it back on drop.

// Attach sources.
pub mod cursor_glyph;
pub mod frame;
pub mod render_api;
pub mod terminal_renderer;
pub mod terminal_session;
pub mod wheel_status;

// Re-export.
pub use cursor_glyph::*;
pub use frame::*;
pub use render_api::*;
pub use terminal_renderer::*;
pub use terminal_session::*;
pub use wheel_status::*;
