use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Content of a single board position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Word(String),
    /// Filler for boards with an odd cell count, never part of a pair.
    Blank,
}

impl Cell {
    pub fn word(&self) -> Option<&str> {
        match self {
            Self::Word(word) => Some(word),
            Self::Blank => None,
        }
    }

    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// Player-visible state of a cell, tracked by the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    /// Face-up while its pair is being resolved.
    Revealed,
    Matched,
}

impl CellState {
    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::Revealed | Self::Matched)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}
