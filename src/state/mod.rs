//! State management module for MathMaze.
//!
//! This module provides the core state types and the reducer:
//!
//! - `position` - Grid coordinates and arrow keys
//! - `lines` - Line sets and the legal combinations
//! - `cell` - Excluded/included cells, marks and dot counts
//! - `tool` - Tool and mode
//! - `action` - Actions the reducer accepts
//! - `reducer` - The `(action, state) -> state` transition function
//! - `dot_count` - Dot-count recomputation
//! - `persist` - JSON documents and file load/save
//! - `store` - State holder that dispatches and publishes
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  Action   ┌───────────────────────────────────────────┐
//! │ input source │──────────▶│ Store                                     │
//! └──────────────┘           │                                           │
//!                            │  route KeyDown ──▶ KeyDownInCell          │
//!                            │        │                                  │
//!                            │        ▼                                  │
//!                            │  reduce(action, state)                    │
//!                            │    1. tool toggle / reset                 │
//!                            │    2. cell transition + selection         │
//!                            │    3. keyboard navigation                 │
//!                            │    4. dot-count recompute                 │
//!                            │        │                                  │
//!                            │        ▼                                  │
//!                            │  publish &AppState ──▶ subscribers        │
//!                            └───────────────────────────────────────────┘
//! ```

pub mod action;
pub mod cell;
pub mod dot_count;
pub mod lines;
pub mod persist;
pub mod position;
pub mod reducer;
pub mod store;
pub mod tool;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use action::Action;
pub use cell::{Cell, CellType, CellView, DotCount, Included, SpecialMark};
pub use lines::{IllegalLineSet, LegalLineSet, LineSet, Side};
pub use persist::{MazeDocument, PersistError, DOCUMENT_FORMAT_VERSION};
pub use position::{GridPosition, Key};
pub use reducer::reduce;
pub use store::Store;
pub use tool::{Mode, Tool};

/// Width of the grid created at startup.
pub const DEFAULT_GRID_WIDTH: usize = 12;

/// Height of the grid created at startup.
pub const DEFAULT_GRID_HEIGHT: usize = 12;

/// Error when a grid would have no rows or no columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("grid size must be positive, got {width}x{height}")]
pub struct InvalidGridSize {
    pub width: usize,
    pub height: usize,
}

/// Dimensions of a grid, both positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    width: usize,
    height: usize,
}

impl GridSize {
    pub fn new(width: usize, height: usize) -> Result<Self, InvalidGridSize> {
        if width == 0 || height == 0 {
            return Err(InvalidGridSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Selected cell, remembered separately for each mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellSelections {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design: Option<GridPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play: Option<GridPosition>,
}

impl CellSelections {
    pub fn get(&self, mode: Mode) -> Option<GridPosition> {
        match mode {
            Mode::Design => self.design,
            Mode::Play => self.play,
        }
    }

    pub fn set(&mut self, mode: Mode, position: Option<GridPosition>) {
        match mode {
            Mode::Design => self.design = position,
            Mode::Play => self.play = position,
        }
    }
}

/// Complete editor state: the grid, the tool, and per-mode selections.
///
/// Rows are stored top to bottom; every row has the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub(crate) cells: Vec<Vec<Cell>>,
    pub(crate) tool: Tool,
    #[serde(default)]
    pub(crate) cell_selections: CellSelections,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GridSize::default())
    }
}

impl AppState {
    /// Create a blank bordered grid: the outer ring is excluded, everything
    /// inside it is included with no lines and no mark.
    pub fn new(size: GridSize) -> Self {
        let (width, height) = (size.width(), size.height());
        let cells = (0..height)
            .map(|row| {
                (0..width)
                    .map(|column| {
                        let position = GridPosition::new(row, column);
                        let interior =
                            row > 0 && column > 0 && row < height - 1 && column < width - 1;
                        if interior {
                            Cell::included(position, LegalLineSet::NONE, LegalLineSet::NONE, None)
                        } else {
                            Cell::excluded(position)
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            cells,
            tool: Tool::MapMaker,
            cell_selections: CellSelections::default(),
        }
    }

    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn mode(&self) -> Mode {
        self.tool.mode()
    }

    pub fn cell_selections(&self) -> CellSelections {
        self.cell_selections
    }

    /// Selection of the active mode.
    pub fn selected_cell_position(&self) -> Option<GridPosition> {
        self.cell_selections.get(self.mode())
    }

    pub(crate) fn set_selected_cell_position(&mut self, position: Option<GridPosition>) {
        let mode = self.mode();
        self.cell_selections.set(mode, position);
    }

    /// Check if position lies inside the grid.
    pub fn contains(&self, position: GridPosition) -> bool {
        position.is_within(self.rows(), self.columns())
    }

    pub fn cell(&self, position: GridPosition) -> Option<&Cell> {
        self.cells.get(position.row)?.get(position.column)
    }

    pub(crate) fn cell_mut(&mut self, position: GridPosition) -> Option<&mut Cell> {
        self.cells.get_mut(position.row)?.get_mut(position.column)
    }

    /// Wipe the solver's work: play lines, dots and blanks, and the play
    /// selection. Design lines, start/end marks and the design selection
    /// are kept.
    pub fn clearing_play_mode(mut self) -> Self {
        for cell in self.cells.iter_mut().flatten() {
            *cell = cell.clearing_play_lines().clearing_dot().clearing_blank();
        }
        self.cell_selections.play = None;
        self
    }

    /// Mode-projected views of every cell, row by row.
    pub fn cell_views(&self) -> Vec<Vec<CellView>> {
        let mode = self.mode();
        let selected = self.selected_cell_position();
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| CellView::new(cell, mode, selected == Some(cell.position)))
                    .collect()
            })
            .collect()
    }
}
