// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use std::process::ExitCode;

use clap::Parser;
use usb_mouse::{CLIArg, CommonResult, ISSUES_FOOTER, MouseViewConfig, OutputDevice,
                run_mouse_view, setup_default_miette_global_report_handler,
                try_initialize_logging_global};

fn main() -> CommonResult<ExitCode> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    setup_default_miette_global_report_handler(ISSUES_FOOTER);

    let should_log = cli_arg.global_options.enable_logging;

    should_log.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let config = MouseViewConfig::from(&cli_arg);
    let exit_code = run_mouse_view(
        cli_arg.file_descriptor,
        &config,
        OutputDevice::new_stderr(),
    )?;

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...", exit_code = ?exit_code);
    });

    Ok(exit_code)
}
