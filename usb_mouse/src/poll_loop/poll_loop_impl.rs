// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The read, decode, apply, redraw cycle.
//!
//! 1. Read one report from the [`Transport`], waiting at most
//!    [`PollConfig::read_timeout`].
//! 2. Decode it with [`try_decode`] and [`CursorState::apply`] the event.
//! 3. Ask the [`ChangeDetector`] whether anything visible changed, and if so
//!    [`Render`] a frame and remember the rendered state.
//!
//! Steps 2 and 3 also run (as no-ops for step 2) on timeouts and short reports, so a
//! quiet mouse costs one timed out read per refresh period and nothing else.

use crate::{ChangeDetector, CursorState, GridSize, LoopExit, PollConfig, PollLoopError,
            PollLoopState, PollOutcome, PollRead, PollStats, REPORT_BUFFER_SIZE, Render,
            Transport, try_decode};

/// Owns the cursor state, the last rendered snapshot, the transport, and the
/// renderer. Single threaded; the only blocking call is the transport read.
#[allow(missing_debug_implementations)]
pub struct PollLoop<T: Transport, R: Render> {
    transport: T,
    renderer: R,
    cursor_state: CursorState,
    change_detector: ChangeDetector,
    poll_config: PollConfig,
    state: PollLoopState,
    stats: PollStats,
    report_buffer: [u8; REPORT_BUFFER_SIZE],
}

impl<T: Transport, R: Render> PollLoop<T, R> {
    /// The transport must already be acquired and ready, the loop starts in
    /// [`PollLoopState::Running`] with the cursor at the center of the grid.
    pub fn new(transport: T, renderer: R, grid_size: GridSize, poll_config: PollConfig) -> Self {
        Self {
            transport,
            renderer,
            cursor_state: CursorState::new(grid_size),
            change_detector: ChangeDetector::default(),
            poll_config,
            state: PollLoopState::Running,
            stats: PollStats::default(),
            report_buffer: [0; REPORT_BUFFER_SIZE],
        }
    }

    #[must_use]
    pub fn cursor_state(&self) -> &CursorState { &self.cursor_state }

    #[must_use]
    pub fn state(&self) -> PollLoopState { self.state }

    #[must_use]
    pub fn stats(&self) -> PollStats { self.stats }

    /// One iteration: read, decode and apply, then redraw if something changed.
    ///
    /// # Errors
    ///
    /// Returns a [`PollLoopError`] if the transport failed (anything other than a
    /// timeout) or the frame could not be drawn. Short reports and timeouts are not
    /// errors, see [`PollOutcome`].
    pub fn poll_once(&mut self) -> Result<PollOutcome, PollLoopError> {
        let read_result = self
            .transport
            .read_report(&mut self.report_buffer, self.poll_config.read_timeout());

        let outcome = match read_result {
            Ok(PollRead::Timeout) => {
                self.stats.timeouts += 1;
                PollOutcome::TimedOut
            }
            Ok(PollRead::Data(0)) => {
                self.stats.empty_reads += 1;
                PollOutcome::Empty
            }
            Ok(PollRead::Data(len)) => {
                let len = len.min(self.report_buffer.len());
                match try_decode(&self.report_buffer[..len]) {
                    Ok(event) => {
                        self.cursor_state.apply(event);
                        self.stats.reports_applied += 1;
                        PollOutcome::Applied(event)
                    }
                    Err(error) => {
                        tracing::warn!(message = "Skipping report", error = %error);
                        self.stats.reports_skipped += 1;
                        PollOutcome::Skipped(error)
                    }
                }
            }
            Err(error) => {
                tracing::error!(message = "Transport read failed", error = %error);
                return Err(error.into());
            }
        };

        self.render_if_changed()?;

        Ok(outcome)
    }

    /// Returns `true` if a frame was drawn.
    ///
    /// # Errors
    ///
    /// Returns [`PollLoopError::Render`] if the renderer failed.
    pub fn render_if_changed(&mut self) -> Result<bool, PollLoopError> {
        if !self.change_detector.should_render(&self.cursor_state) {
            return Ok(false);
        }
        self.renderer
            .render(&self.cursor_state)
            .map_err(PollLoopError::Render)?;
        self.change_detector.mark_rendered(self.cursor_state);
        self.stats.frames_rendered += 1;
        Ok(true)
    }

    /// Draw the initial frame, then [`poll_once`](Self::poll_once) until it fails.
    /// The transport and renderer are dropped while [`PollLoopState::Draining`], which
    /// releases the device, before the loop reports
    /// [`PollLoopState::Terminated`].
    pub fn run(mut self) -> LoopExit {
        let cause = match self.render_if_changed() {
            Err(error) => error,
            Ok(_) => loop {
                if let Err(error) = self.poll_once() {
                    break error;
                }
            },
        };

        self.transition_to(PollLoopState::Draining);
        let Self {
            transport,
            renderer,
            cursor_state,
            stats,
            mut state,
            ..
        } = self;
        drop(transport);
        drop(renderer);
        state = transition(state, PollLoopState::Terminated);

        tracing::debug!(message = "Poll loop terminated", stats = ?stats, cause = %cause);

        LoopExit {
            cause,
            stats,
            final_cursor_state: cursor_state,
            final_state: state,
        }
    }

    fn transition_to(&mut self, next: PollLoopState) { self.state = transition(self.state, next); }
}

fn transition(current: PollLoopState, next: PollLoopState) -> PollLoopState {
    tracing::debug!(message = "Poll loop state", from = %current, to = %next);
    next
}
