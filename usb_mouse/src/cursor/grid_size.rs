// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// Size of the character grid the cursor moves in, measured in terminal cells.
#[derive(Clone, Debug, Eq, PartialEq, Copy, Hash)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

pub const DEFAULT_GRID_WIDTH: u16 = 40;
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

impl Default for GridSize {
    fn default() -> Self { Self::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT) }
}

impl GridSize {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self { Self { width, height } }

    /// Largest valid column index. A zero width grid collapses to column 0.
    #[must_use]
    pub fn max_col_index(&self) -> u16 { self.width.saturating_sub(1) }

    /// Largest valid row index. A zero height grid collapses to row 0.
    #[must_use]
    pub fn max_row_index(&self) -> u16 { self.height.saturating_sub(1) }

    #[must_use]
    pub fn center(&self) -> (u16, u16) { (self.width / 2, self.height / 2) }
}

impl Display for GridSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
