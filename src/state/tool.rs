//! Active tool and the editing mode it implies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which line set and mark rules are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Authoring the maze itself.
    Design,
    /// Tracing a path through an authored maze.
    Play,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Design => "design",
            Self::Play => "play",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tool selected in the control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tool {
    #[default]
    MapMaker,
    Player,
}

impl Tool {
    pub fn mode(&self) -> Mode {
        match self {
            Self::MapMaker => Mode::Design,
            Self::Player => Mode::Play,
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::MapMaker => Self::Player,
            Self::Player => Self::MapMaker,
        };
    }
}
