// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use crossterm::{QueueableCommand,
                cursor::{Hide, SavePosition, Show},
                style::Print};

use crate::{OutputDevice, SendRawTerminal};

/// RAII guard for the terminal. While it is alive the terminal cursor is hidden, and
/// the position where the first frame starts is saved (frames are drawn relative to
/// it). On drop it moves to a fresh line below the frame and shows the cursor again.
///
/// It is acquired before the USB device and dropped after it, so it is the last
/// thing restored on every exit path.
#[allow(missing_debug_implementations)]
pub struct TerminalSession {
    output_device: OutputDevice,
}

impl TerminalSession {
    /// # Errors
    ///
    /// Returns an error if the escape sequences can't be written.
    pub fn start(output_device: OutputDevice) -> std::io::Result<Self> {
        {
            let writer: &mut SendRawTerminal = &mut *output_device.lock();
            writer.queue(Hide)?.queue(SavePosition)?;
            writer.flush()?;
        }
        Ok(Self { output_device })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let writer: &mut SendRawTerminal = &mut *self.output_device.lock();
        // We don't care about the result of this operation.
        drop(
            writer
                .queue(Print("\n"))
                .and_then(|it| it.queue(Show))
                .and_then(|it| it.flush()),
        );
        tracing::debug!(message = "Terminal cursor restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OutputDeviceExt, assert_eq2};

    #[test]
    fn test_session_hides_then_restores_cursor() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();

        let session = TerminalSession::start(output_device).unwrap();
        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b[?25l\x1b7");

        drop(session);
        assert_eq2!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[?25l\x1b7\n\x1b[?25h"
        );
    }
}
