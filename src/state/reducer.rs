//! Grid reducer.
//!
//! `reduce` is a pure function from an action and the previous state to
//! the next state. It never fails: an action that does not apply, or that
//! would produce an illegal line combination, leaves the state as it was.
//!
//! # Stages
//!
//! ```text
//!  action ──▶ control ──▶ cell ──▶ keyboard ──▶ dot counts ──▶ state
//!             (tool,      (per-cell  (arrow-key   (always)
//!              reset)      rules,     extension)
//!                          selection)
//! ```

use tracing::{debug, info, trace};

use super::action::Action;
use super::cell::{Cell, CellType, SpecialMark};
use super::dot_count;
use super::lines::{LegalLineSet, LineSet, Side};
use super::position::{GridPosition, Key};
use super::tool::Mode;
use super::AppState;

/// Compute the state following `action`.
///
/// With no previous state a default grid is created first.
pub fn reduce(action: Action, state: Option<AppState>) -> AppState {
    let mut state = state.unwrap_or_default();
    trace!(?action, mode = %state.mode(), "reducing");

    state = control_reducer(action, state);
    state = cell_grid_reducer(action, state);

    if let Action::KeyDownInCell { key, .. } = action {
        state = key_down_reducer(key, state);
    }

    dot_count::recompute(&mut state.cells);
    state
}

/// Tool toggling and resets.
fn control_reducer(action: Action, mut state: AppState) -> AppState {
    match action {
        Action::ToolToggle => {
            state.tool.toggle();
            state
        }
        Action::Reset(size) => match state.mode() {
            Mode::Design => {
                info!(
                    width = size.width(),
                    height = size.height(),
                    "resetting board"
                );
                AppState::new(size)
            }
            Mode::Play => {
                info!("clearing play mode");
                state.clearing_play_mode()
            }
        },
        _ => state,
    }
}

/// Apply the per-cell transition at the action's position, then update the
/// selection.
fn cell_grid_reducer(action: Action, mut state: AppState) -> AppState {
    let Some(position) = action.position() else {
        return state;
    };

    if !state.contains(position) {
        debug!(%position, "ignoring action outside the grid");
        return state;
    }

    let mode = state.mode();
    if let Some(cell) = state.cell_mut(position) {
        *cell = cell_reducer(action, *cell, mode);
    }

    reselect(action, position, &mut state);
    state
}

/// Select a tapped cell that now shows something; drop the play selection
/// from a cell that no longer does.
fn reselect(action: Action, position: GridPosition, state: &mut AppState) {
    let mode = state.mode();
    let Some(cell) = state.cell(position) else {
        return;
    };

    let visible_mark = matches!(cell.special_mark(), Some(mark) if mark != SpecialMark::Blank);

    if visible_mark || !cell.has_no_lines_in(mode) {
        if matches!(action, Action::Tapped(_)) {
            state.set_selected_cell_position(Some(position));
        }
    } else if mode == Mode::Play
        && state.selected_cell_position() == Some(position)
        && !action.is_keyboard()
    {
        state.set_selected_cell_position(None);
    }
}

/// Transition of a single cell.
pub fn cell_reducer(action: Action, mut cell: Cell, mode: Mode) -> Cell {
    match (action, mode) {
        (Action::Tapped(_), Mode::Design) => {
            if cell.has_no_lines() && cell.special_mark().is_none() {
                cell.toggle();
            }
        }

        (Action::Tapped(_), Mode::Play) => {
            if let CellType::Included(included) = cell.cell_type {
                if included.special_mark.is_none() {
                    cell.cell_type = CellType::Included(included.toggling_dot());
                }
            }
        }

        (Action::CtrlClicked(_), _) => {
            if let CellType::Included(mut included) = cell.cell_type {
                // Lines go first; the mark only goes once there were no
                // lines left to clear. Start/end survive play mode.
                let clear_mark = cell.has_no_lines_in(mode)
                    && (mode == Mode::Design || included.special_mark == Some(SpecialMark::Dot));
                included = included.with_lines(mode, LegalLineSet::NONE);
                if clear_mark {
                    included.special_mark = None;
                }
                cell.cell_type = CellType::Included(included);
            }
        }

        (Action::ShiftClicked(_), Mode::Design) => {
            if let CellType::Included(included) = cell.cell_type {
                cell.cell_type = CellType::Included(included.toggling_mark_for_design());
            }
        }

        (Action::ShiftClicked(_), Mode::Play) => {
            if let CellType::Included(included) = cell.cell_type {
                cell.cell_type = CellType::Included(included.toggling_blank());
            }
        }

        (Action::Dragging { start, end, .. }, _) => {
            if let CellType::Included(included) = cell.cell_type {
                if let Some(lines) = drag_lines(start, end, included.special_mark) {
                    cell.cell_type = CellType::Included(included.with_lines(mode, lines));
                } else {
                    debug!(position = %cell.position, ?start, ?end, "ignoring drag");
                }
            }
        }

        _ => {}
    }

    cell
}

/// Lines a drag draws, keeping maze endpoints to a single exit.
fn drag_lines(start: Side, end: Side, mark: Option<SpecialMark>) -> Option<LegalLineSet> {
    let lines = LineSet::between(start, end).and_then(LegalLineSet::new)?;

    let endpoint = match mark {
        Some(SpecialMark::Start) => LegalLineSet::new(end.line()),
        Some(SpecialMark::End) => LegalLineSet::new(start.line()),
        _ => None,
    };

    Some(endpoint.unwrap_or(lines))
}

/// Extend the active mode's path from the selected cell one step toward
/// `key`, moving the selection with it.
fn key_down_reducer(key: Key, mut state: AppState) -> AppState {
    let Some(old_position) = state.selected_cell_position() else {
        return state;
    };

    let new_position = old_position.step(key, state.rows(), state.columns());
    if new_position == old_position {
        return state;
    }

    let (Some(CellType::Included(origin)), Some(CellType::Included(destination))) = (
        state.cell(old_position).map(|cell| cell.cell_type),
        state.cell(new_position).map(|cell| cell.cell_type),
    ) else {
        return state;
    };

    let mode = state.mode();
    if mode == Mode::Play && destination.special_mark == Some(SpecialMark::Blank) {
        debug!(position = %new_position, "blank cell blocks the path");
        return state;
    }

    let Some(origin_lines) = origin.lines(mode).union(LineSet::toward(key)) else {
        debug!(position = %old_position, ?key, %mode, "path cannot leave this cell");
        return state;
    };
    let Some(destination_lines) = destination.lines(mode).union(LineSet::away_from(key)) else {
        debug!(position = %new_position, ?key, %mode, "path cannot enter this cell");
        return state;
    };

    let origin = origin.with_lines(mode, origin_lines);
    let mut destination = destination.with_lines(mode, destination_lines);
    if mode == Mode::Play && destination.special_mark.is_none() {
        destination.special_mark = Some(SpecialMark::Dot);
    }

    if let Some(cell) = state.cell_mut(old_position) {
        cell.cell_type = CellType::Included(origin);
    }
    if let Some(cell) = state.cell_mut(new_position) {
        cell.cell_type = CellType::Included(destination);
    }
    state.set_selected_cell_position(Some(new_position));

    state
}
