//! State holder for an application shell.
//!
//! The reducer is pure; the store is where the current state lives. It
//! routes window-level keystrokes to the selected cell, threads the state
//! through [`reduce`], and hands every new snapshot to its subscribers.

use std::fmt;
use std::path::Path;

use tracing::trace;

use super::action::Action;
use super::persist::{self, PersistError};
use super::reducer::reduce;
use super::AppState;

type Subscriber = Box<dyn FnMut(&AppState)>;

/// Owner of the current [`AppState`].
#[derive(Default)]
pub struct Store {
    state: AppState,
    subscribers: Vec<Subscriber>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Register an observer called after every dispatch and replacement.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Route, reduce and publish one action.
    ///
    /// A keystroke with nothing selected is dropped without publishing.
    pub fn dispatch(&mut self, action: Action) {
        let Some(action) = action.routed(self.state.selected_cell_position()) else {
            return;
        };
        trace!(?action, "dispatching");

        let previous = std::mem::take(&mut self.state);
        self.state = reduce(action, Some(previous));
        self.publish();
    }

    /// Swap in a whole new state, e.g. one loaded from disk.
    pub fn replace(&mut self, state: AppState) {
        self.state = state;
        self.publish();
    }

    pub fn save_to(&self, path: &Path) -> Result<(), PersistError> {
        persist::save_to_path(&self.state, path)
    }

    /// Load `path` into the store. On failure the current state is kept.
    pub fn open_from(&mut self, path: &Path) -> Result<(), PersistError> {
        let state = persist::load_from_path(path)?;
        self.replace(state);
        Ok(())
    }

    fn publish(&mut self) {
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::cell::CellType;
    use crate::state::lines::{LineSet, Side};
    use crate::state::position::{GridPosition, Key};
    use crate::state::tool::Mode;
    use crate::state::GridSize;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store() -> Store {
        Store::new(AppState::new(GridSize::new(5, 5).unwrap()))
    }

    #[test]
    fn test_dispatch_publishes_snapshot() {
        let mut store = store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.mode()));

        store.dispatch(Action::ToolToggle);
        store.dispatch(Action::ToolToggle);

        assert_eq!(*seen.borrow(), vec![Mode::Play, Mode::Design]);
    }

    #[test]
    fn test_key_down_routed_to_selection() {
        let mut store = store();
        store.dispatch(Action::ToolToggle);
        store.dispatch(Action::Tapped(GridPosition::new(2, 2)));
        store.dispatch(Action::KeyDown(Key::RightArrow));

        let state = store.state();
        assert_eq!(state.selected_cell_position(), Some(GridPosition::new(2, 3)));

        let play_lines = |p| match state.cell(p).unwrap().cell_type {
            CellType::Included(included) => included.play_lines.lines(),
            CellType::Excluded(_) => LineSet::empty(),
        };
        assert_eq!(play_lines(GridPosition::new(2, 2)), LineSet::RIGHT);
        assert_eq!(play_lines(GridPosition::new(2, 3)), LineSet::LEFT);
    }

    #[test]
    fn test_key_down_without_selection_is_dropped() {
        let mut store = store();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        let before = store.state().clone();
        store.dispatch(Action::KeyDown(Key::DownArrow));

        assert_eq!(*store.state(), before);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_open_failure_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut store = store();
        store.dispatch(Action::dragging(GridPosition::new(1, 1), Side::Left, Side::Bottom));
        let before = store.state().clone();

        assert!(store.open_from(&path).is_err());
        assert_eq!(*store.state(), before);
    }

    #[test]
    fn test_save_and_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.json");

        let mut original = store();
        original.dispatch(Action::dragging(GridPosition::new(1, 1), Side::Top, Side::Right));
        original.save_to(&path).unwrap();

        let mut other = Store::default();
        let loaded = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&loaded);
        other.subscribe(move |_| *flag.borrow_mut() = true);
        other.open_from(&path).unwrap();

        assert_eq!(other.state(), original.state());
        assert!(*loaded.borrow());
    }
}
