// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::CursorState;

/// Anything that can draw a [`CursorState`]. The [`crate::PollLoop`] only calls this
/// when the state visibly changed since the last call.
pub trait Render {
    /// # Errors
    ///
    /// Returns an error if the display surface can't be written to. The poll loop
    /// treats this as fatal.
    fn render(&mut self, cursor_state: &CursorState) -> std::io::Result<()>;
}
