// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use crossterm::{QueueableCommand, cursor::RestorePosition, style::Print};

use super::{Frame, Render};
use crate::{CursorState, OutputDevice, SendRawTerminal};

/// Paints a [`Frame`] in place: the cursor goes back to the position saved by
/// [`crate::TerminalSession`], so every frame overwrites the previous one.
#[allow(missing_debug_implementations)]
pub struct TerminalRenderer {
    pub output_device: OutputDevice,
}

impl TerminalRenderer {
    #[must_use]
    pub fn new(output_device: OutputDevice) -> Self { Self { output_device } }
}

impl Render for TerminalRenderer {
    fn render(&mut self, cursor_state: &CursorState) -> std::io::Result<()> {
        let frame = Frame::from(cursor_state);
        let writer: &mut SendRawTerminal = &mut *self.output_device.lock();
        writer.queue(RestorePosition)?.queue(Print(&frame))?;
        writer.flush()
    }
}
