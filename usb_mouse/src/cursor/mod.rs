// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod change_detector;
pub mod cursor_state;
pub mod grid_size;

// Re-export.
pub use change_detector::*;
pub use cursor_state::*;
pub use grid_size::*;
