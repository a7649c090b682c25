use alloc::string::String;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Input reported by the host adapter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    CellClicked(Coord2),
    ConcealTimerFired,
    WinDialogAnswered { play_again: bool },
}

/// Instruction for the host adapter to render or act on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    RevealCell {
        coords: Coord2,
        word: String,
    },
    ConfirmMatch {
        first: Coord2,
        second: Coord2,
    },
    /// The host must deliver [`Event::ConcealTimerFired`] once after `delay_ms`.
    ScheduleConceal {
        first: Coord2,
        second: Coord2,
        delay_ms: u32,
    },
    /// The previously scheduled conceal must not fire anymore.
    CancelConceal,
    ConcealCell {
        coords: Coord2,
    },
    /// The host should ask whether to play again and answer with [`Event::WinDialogAnswered`].
    GameWon,
    /// Every cell is hidden again and `board` is the new layout.
    BoardReset {
        board: Board,
    },
    Terminate,
}

pub type Effects = SmallVec<[Effect; 4]>;
