//! Saved maze documents.
//!
//! A saved file is a JSON [`MazeDocument`] wrapping the full [`AppState`].
//! Files holding a bare state object (no envelope) are accepted too.
//!
//! Decoding validates the grid shape before anything is handed back, so a
//! caller that only swaps its state on `Ok` never ends up with a partial
//! load.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::position::GridPosition;
use super::tool::Mode;
use super::AppState;

/// Version written into every saved document.
pub const DOCUMENT_FORMAT_VERSION: u32 = 1;

/// Errors from encoding, decoding or storing a maze.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("invalid maze document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported document version {0}")]
    UnsupportedVersion(u32),

    #[error("grid has no cells")]
    EmptyGrid,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell at row {row}, column {column} claims position {found}")]
    MisplacedCell {
        row: usize,
        column: usize,
        found: GridPosition,
    },

    #[error("{mode} selection {position} is outside the grid")]
    SelectionOutOfBounds { mode: Mode, position: GridPosition },
}

/// Saved form of an [`AppState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MazeDocument {
    pub format_version: u32,
    pub saved_at: DateTime<Utc>,
    pub state: AppState,
}

impl MazeDocument {
    pub fn new(state: AppState) -> Self {
        Self {
            format_version: DOCUMENT_FORMAT_VERSION,
            saved_at: Utc::now(),
            state,
        }
    }
}

/// Encode a state as a pretty-printed JSON document.
pub fn to_json(state: &AppState) -> Result<String, PersistError> {
    Ok(serde_json::to_string_pretty(&MazeDocument::new(state.clone()))?)
}

/// Decode and validate a state from JSON.
pub fn from_json(json: &str) -> Result<AppState, PersistError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let state = if value.get("formatVersion").is_some() {
        let document: MazeDocument = serde_json::from_value(value)?;
        if document.format_version > DOCUMENT_FORMAT_VERSION {
            return Err(PersistError::UnsupportedVersion(document.format_version));
        }
        document.state
    } else {
        serde_json::from_value(value)?
    };
    validate(&state)?;
    Ok(state)
}

/// Write a state to `path`.
pub fn save_to_path(state: &AppState, path: &Path) -> Result<(), PersistError> {
    let json = to_json(state)?;
    fs::write(path, json).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = state.rows(), columns = state.columns(), "saved maze");
    Ok(())
}

/// Read a state from `path`.
pub fn load_from_path(path: &Path) -> Result<AppState, PersistError> {
    let json = fs::read_to_string(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let state = from_json(&json)?;
    info!(path = %path.display(), rows = state.rows(), columns = state.columns(), "loaded maze");
    Ok(state)
}

/// Check the grid is a non-empty rectangle whose cells sit where they say,
/// and that both selections are on the grid.
fn validate(state: &AppState) -> Result<(), PersistError> {
    let columns = state.columns();
    if state.rows() == 0 || columns == 0 {
        return Err(PersistError::EmptyGrid);
    }

    for (row, cells) in state.cells().iter().enumerate() {
        if cells.len() != columns {
            return Err(PersistError::RaggedRow {
                row,
                expected: columns,
                found: cells.len(),
            });
        }
        for (column, cell) in cells.iter().enumerate() {
            if cell.position != GridPosition::new(row, column) {
                return Err(PersistError::MisplacedCell {
                    row,
                    column,
                    found: cell.position,
                });
            }
        }
    }

    let selections = state.cell_selections();
    for mode in [Mode::Design, Mode::Play] {
        if let Some(position) = selections.get(mode) {
            if !state.contains(position) {
                return Err(PersistError::SelectionOutOfBounds { mode, position });
            }
        }
    }

    Ok(())
}
