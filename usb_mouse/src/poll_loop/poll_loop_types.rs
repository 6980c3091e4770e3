// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

use crate::{CursorState, MouseEvent, ReportTooShortError, TransportError,
            exit_status_byte};

/// Lifecycle of the [`crate::PollLoop`].
///
/// ```text
/// Running ──(fatal transport or render error)──▶ Draining ──(cleanup done)──▶ Terminated
///    ▲  │
///    └──┘ data, timeout, short report
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Copy, strum_macros::Display)]
pub enum PollLoopState {
    Running,
    Draining,
    Terminated,
}

/// What a single [`crate::PollLoop::poll_once`] did with the read.
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
pub enum PollOutcome {
    /// A report was decoded and applied to the cursor.
    Applied(MouseEvent),
    /// A report arrived but was too short to decode. The cursor is unchanged.
    Skipped(ReportTooShortError),
    /// The read succeeded with zero bytes.
    Empty,
    /// Nothing arrived within the read timeout.
    TimedOut,
}

/// Counters kept for the lifetime of the loop, logged when it terminates.
#[derive(Clone, Debug, Eq, PartialEq, Copy, Default)]
pub struct PollStats {
    pub reports_applied: u64,
    pub reports_skipped: u64,
    pub empty_reads: u64,
    pub timeouts: u64,
    pub frames_rendered: u64,
}

/// Why the loop stopped.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum PollLoopError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Transport(#[from] TransportError),

    #[error("Could not draw the frame")]
    #[diagnostic(code(usb_mouse::poll_loop::render))]
    Render(#[source] std::io::Error),
}

impl PollLoopError {
    /// Process exit status for this failure. A transport failure exits with its libusb
    /// error code (truncated to a byte), anything else with `1`.
    #[must_use]
    pub fn exit_status(&self) -> u8 {
        match self {
            PollLoopError::Transport(error) => exit_status_byte(error.libusb_code()),
            PollLoopError::Render(_) => 1,
        }
    }
}

/// Everything that is left once [`crate::PollLoop::run`] reached
/// [`PollLoopState::Terminated`].
#[derive(Debug)]
pub struct LoopExit {
    pub cause: PollLoopError,
    pub stats: PollStats,
    pub final_cursor_state: CursorState,
    pub final_state: PollLoopState,
}

impl LoopExit {
    #[must_use]
    pub fn exit_status(&self) -> u8 { self.cause.exit_status() }
}
