//! Actions the reducer accepts.
//!
//! Positions and sides arrive pre-resolved: whoever translates pointer
//! events into actions has already decided which cell was hit and which
//! edge of it was nearest.

use super::lines::Side;
use super::position::{GridPosition, Key};
use super::GridSize;

/// User intent dispatched into the grid reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Primary click on a cell.
    Tapped(GridPosition),

    /// Ctrl-click: clear lines (and eventually the mark).
    CtrlClicked(GridPosition),

    /// Shift-click: cycle the mark.
    ShiftClicked(GridPosition),

    /// Drag across a cell from one edge toward another.
    Dragging {
        position: GridPosition,
        start: Side,
        end: Side,
    },

    /// Arrow key pressed at the window level, not yet tied to a cell.
    KeyDown(Key),

    /// Arrow key pressed while `position` was selected.
    KeyDownInCell { position: GridPosition, key: Key },

    /// Switch between map maker and player.
    ToolToggle,

    /// Start over: a new blank grid in design mode, or a cleared solution
    /// in play mode.
    Reset(GridSize),
}

impl Action {
    pub fn dragging(position: GridPosition, start: Side, end: Side) -> Self {
        Self::Dragging {
            position,
            start,
            end,
        }
    }

    /// Cell this action targets, if any.
    pub fn position(&self) -> Option<GridPosition> {
        match self {
            Self::Tapped(position)
            | Self::CtrlClicked(position)
            | Self::ShiftClicked(position)
            | Self::Dragging { position, .. }
            | Self::KeyDownInCell { position, .. } => Some(*position),
            Self::KeyDown(_) | Self::ToolToggle | Self::Reset(_) => None,
        }
    }

    /// Keyboard actions manage selection themselves.
    pub fn is_keyboard(&self) -> bool {
        matches!(self, Self::KeyDown(_) | Self::KeyDownInCell { .. })
    }

    /// Tie a window-level keystroke to the current selection.
    ///
    /// Returns `None` (the keystroke is dropped) when nothing is selected.
    /// Every other action passes through unchanged.
    pub fn routed(self, selection: Option<GridPosition>) -> Option<Self> {
        match self {
            Self::KeyDown(key) => match selection {
                Some(position) => Some(Self::KeyDownInCell { position, key }),
                None => {
                    tracing::debug!(?key, "dropping keystroke with no selection");
                    None
                }
            },
            other => Some(other),
        }
    }
}
