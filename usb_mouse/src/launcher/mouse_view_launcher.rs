// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::Write, os::fd::RawFd, process::ExitCode};

use miette::IntoDiagnostic;

use crate::{CommonResult, LoopExit, MouseViewConfig, OutputDevice, PollLoop, PollLoopError,
            TerminalRenderer, TerminalSession, Transport, UsbMouseTransport, ok};

/// Everything `read_mouse` does after parsing its arguments.
///
/// The terminal is set up first and the device second, so that on every exit path the
/// device is given back before the terminal cursor is restored.
///
/// # Errors
///
/// Returns an error if the terminal can't be set up or the device can't be taken
/// over. Once the poll loop runs, its failure is reported on `output_device` and
/// becomes the returned [`ExitCode`] instead.
pub fn run_mouse_view(
    fd: RawFd,
    config: &MouseViewConfig,
    output_device: OutputDevice,
) -> CommonResult<ExitCode> {
    let session = TerminalSession::start(output_device.clone()).into_diagnostic()?;

    let transport = UsbMouseTransport::open_from_fd(fd, config.device_profile)?;
    tracing::debug!(message = "Device ready", config = ?config);

    let loop_exit = view_until_failure(transport, config, &output_device);

    drop(session);

    ok!(ExitCode::from(loop_exit.exit_status()))
}

/// Runs the [`PollLoop`] on an already acquired `transport` until it fails, then
/// reports why on `output_device`. The transport is dropped before this returns.
pub fn view_until_failure<T: Transport>(
    transport: T,
    config: &MouseViewConfig,
    output_device: &OutputDevice,
) -> LoopExit {
    let renderer = TerminalRenderer::new(output_device.clone());
    let loop_exit =
        PollLoop::new(transport, renderer, config.grid_size, config.poll_config).run();

    report_loop_exit(&loop_exit, output_device);

    loop_exit
}

fn report_loop_exit(loop_exit: &LoopExit, output_device: &OutputDevice) {
    match &loop_exit.cause {
        PollLoopError::Transport(error) => {
            let mut writer = output_device.lock();
            // We don't care about the result of this operation.
            writer
                .write_all(
                    format!("\nlibusb_interrupt_transfer error: {}\n", error.libusb_name())
                        .as_bytes(),
                )
                .and_then(|()| writer.flush())
                .ok();
        }
        // The terminal is what failed, so there's nowhere to report this but the log.
        PollLoopError::Render(error) => {
            tracing::error!(message = "Rendering failed", error = %error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridSize, OutputDeviceExt, PollLoopState, ScriptedRead, ScriptedTransport,
                assert_eq2};

    #[test]
    fn test_transport_failure_is_reported_after_the_last_frame() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let config = MouseViewConfig {
            grid_size: GridSize::new(2, 1),
            ..Default::default()
        };
        let transport = ScriptedTransport::new([ScriptedRead::Fail(rusb::Error::Io)]);

        let loop_exit = view_until_failure(transport, &config, &output_device);

        assert_eq2!(loop_exit.final_state, PollLoopState::Terminated);
        assert_eq2!(loop_exit.exit_status(), 255);
        assert_eq2!(
            stdout_mock.get_copy_of_buffer_as_string_strip_ansi(),
            "╭──╮\n│ ⇖│\n╰──╯\n  Buttons: L=0 R=0 M=0 | Wheel: --- \n\nlibusb_interrupt_transfer error: LIBUSB_ERROR_IO\n"
        );
    }

    #[test]
    fn test_negative_fd_fails_but_restores_terminal() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();

        let result = run_mouse_view(-5, &MouseViewConfig::default(), output_device);

        assert!(result.is_err());
        assert_eq2!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[?25l\x1b7\n\x1b[?25h"
        );
    }
}
