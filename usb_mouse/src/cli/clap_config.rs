// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::os::fd::RawFd;

use clap::{Args, Parser};

use crate::{DEFAULT_ENDPOINT_ADDRESS, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
            DEFAULT_INTERFACE_NUMBER, DEFAULT_REFRESH_RATE_HZ, DeviceProfile, GridSize,
            MouseViewConfig, PollConfig};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "read_mouse")]
#[command(about = "🖱️ Draw a USB mouse's cursor and buttons live in the terminal")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nProvide the number of an already open usbfs device file descriptor.\nUSAGE 📓:\n  read_mouse [\x1b[32mfile descriptor\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(
        name = "file descriptor",
        value_parser = clap::value_parser!(i32).range(0..),
        help = "Open file descriptor of the USB device, eg: handed over by termux-usb"
    )]
    pub file_descriptor: RawFd,

    #[command(flatten)]
    pub view_options: ViewOption,

    #[command(flatten)]
    pub device_options: DeviceOption,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct ViewOption {
    #[arg(
        long,
        default_value_t = DEFAULT_GRID_WIDTH,
        value_parser = clap::value_parser!(u16).range(1..),
        help = "Width of the cursor grid, in columns"
    )]
    pub width: u16,

    #[arg(
        long,
        default_value_t = DEFAULT_GRID_HEIGHT,
        value_parser = clap::value_parser!(u16).range(1..),
        help = "Height of the cursor grid, in rows"
    )]
    pub height: u16,

    #[arg(
        long,
        default_value_t = DEFAULT_REFRESH_RATE_HZ,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "How many times per second the mouse is polled"
    )]
    pub refresh_rate_hz: u32,
}

#[derive(Debug, Args)]
pub struct DeviceOption {
    #[arg(
        long,
        default_value_t = DEFAULT_INTERFACE_NUMBER,
        help = "USB interface to claim"
    )]
    pub interface: u8,

    #[arg(
        long,
        default_value = "0x82",
        value_parser = parse_endpoint_address,
        help = "Interrupt IN endpoint to read, hex (0x82) or decimal (130)"
    )]
    pub endpoint: u8,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,
}

/// Accepts `0x82`, `0X82` or `130`.
///
/// # Errors
///
/// Returns an error message if the value is not a number that fits in a byte.
pub fn parse_endpoint_address(arg: &str) -> Result<u8, String> {
    let arg = arg.trim();
    let parsed = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex_digits) => u8::from_str_radix(hex_digits, 16),
        None => arg.parse::<u8>(),
    };
    parsed.map_err(|error| format!("`{arg}` is not an endpoint address: {error}"))
}

impl From<&CLIArg> for MouseViewConfig {
    fn from(cli_arg: &CLIArg) -> Self {
        let ViewOption {
            width,
            height,
            refresh_rate_hz,
        } = cli_arg.view_options;
        let DeviceOption {
            interface,
            endpoint,
        } = cli_arg.device_options;
        Self {
            grid_size: GridSize::new(width, height),
            poll_config: PollConfig { refresh_rate_hz },
            device_profile: DeviceProfile {
                interface_number: interface,
                endpoint_address: endpoint,
            },
        }
    }
}
