// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod poll_loop_impl;
pub mod poll_loop_types;

// Re-export.
pub use poll_loop_impl::*;
pub use poll_loop_types::*;
