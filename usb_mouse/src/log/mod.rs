// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in [`tracing`] setup. `read_mouse` draws on stderr, so logs go to a file
//! ([`DEFAULT_LOG_FILE_NAME`]) and only when `--enable-logging` is passed.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
