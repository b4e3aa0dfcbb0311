//! MathMaze State Library
//!
//! This crate provides the state and reducer behind the MathMaze puzzle
//! editor.
//!
//! # Overview
//!
//! A maze is a rectangular grid. Excluded cells form the border and show
//! dot counts (how many maze cells the path crosses in that row or column).
//! Included cells carry two independent line sets: design lines drawn by
//! the puzzle author and play lines traced by a solver.
//!
//! - **Grid Reducer** - A pure `(action, state) -> state` function that
//!   turns taps, clicks, drags and arrow keys into grid changes.
//!
//! - **Legal Lines** - Only the eleven line shapes a path can take through
//!   one cell can ever be stored.
//!
//! - **Dot Counts** - Re-derived from design lines after every action.
//!
//! - **Store** - Owns the current state and publishes snapshots.
//!
//! # Design Principles
//!
//! 1. **Invalid moves are no-ops** - The reducer never fails; anything that
//!    does not apply leaves the state as it was.
//!
//! 2. **Per-mode state is explicit** - Design and play lines, and design
//!    and play selections, are separate named fields.
//!
//! 3. **No rendering** - Positions and sides arrive already resolved.
//!
//! 4. **Serialization-ready** - The whole state round-trips through JSON.
//!
//! # Example
//!
//! ```rust
//! use mathmaze_state::{Action, AppState, GridPosition, GridSize, LegalLineSet, Side, Store};
//!
//! let mut store = Store::new(AppState::new(GridSize::new(5, 5).unwrap()));
//!
//! let cell = GridPosition::new(2, 2);
//! store.dispatch(Action::dragging(cell, Side::Top, Side::Right));
//!
//! let lines = match store.state().cell(cell).unwrap().cell_type {
//!     mathmaze_state::CellType::Included(included) => included.design_lines,
//!     mathmaze_state::CellType::Excluded(_) => unreachable!(),
//! };
//! assert_eq!(lines, LegalLineSet::UPPER_RIGHT);
//!
//! // The border cell above now counts one path cell below it.
//! let above = store.state().cell(GridPosition::new(0, 2)).unwrap();
//! assert_eq!(above.dot_count().unwrap().below, Some(1));
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
