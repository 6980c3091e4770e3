// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod mouse_view_launcher;

// Re-export.
pub use mouse_view_launcher::*;
