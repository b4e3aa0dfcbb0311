//! Grid coordinates and arrow-key stepping.
//!
//! Positions never leave the grid: every directional helper clamps to a
//! bound instead of failing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Row/column coordinate of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

impl GridPosition {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// One column to the left, clamped at column 0.
    pub fn to_the_left(&self) -> Self {
        self.to_the_left_limited_by(0)
    }

    /// One column to the left, never below `limit`.
    pub fn to_the_left_limited_by(&self, limit: usize) -> Self {
        Self::new(self.row, self.column.saturating_sub(1).max(limit))
    }

    /// One column to the right, never beyond `limit`.
    pub fn to_the_right(&self, limit: usize) -> Self {
        Self::new(self.row, (self.column + 1).min(limit))
    }

    /// One row up, clamped at row 0.
    pub fn above(&self) -> Self {
        self.above_limited_by(0)
    }

    /// One row up, never above `limit`.
    pub fn above_limited_by(&self, limit: usize) -> Self {
        Self::new(self.row.saturating_sub(1).max(limit), self.column)
    }

    /// One row down, never beyond `limit`.
    pub fn below(&self, limit: usize) -> Self {
        Self::new((self.row + 1).min(limit), self.column)
    }

    /// Step once in the direction of `key` inside a `rows` x `columns` grid.
    ///
    /// Returns `self` unchanged when the step would leave the grid.
    pub fn step(&self, key: Key, rows: usize, columns: usize) -> Self {
        match key {
            Key::LeftArrow => self.to_the_left(),
            Key::RightArrow => self.to_the_right(columns.saturating_sub(1)),
            Key::UpArrow => self.above(),
            Key::DownArrow => self.below(rows.saturating_sub(1)),
        }
    }

    /// Check if position lies inside a `rows` x `columns` grid.
    pub fn is_within(&self, rows: usize, columns: usize) -> bool {
        self.row < rows && self.column < columns
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Arrow keys accepted for keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Key {
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
}

impl Key {
    pub const ALL: [Key; 4] = [
        Key::LeftArrow,
        Key::RightArrow,
        Key::UpArrow,
        Key::DownArrow,
    ];
}
