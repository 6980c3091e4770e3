// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stand-ins for the terminal and the USB device, used by the unit tests and by the
//! integration tests in `tests/`.

// Attach sources.
pub mod output_device_ext;
pub mod scripted_transport;
pub mod stdout_mock;
pub mod temp_dir;

// Re-export.
pub use output_device_ext::*;
pub use scripted_transport::*;
pub use stdout_mock::*;
pub use temp_dir::*;
