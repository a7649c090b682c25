use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must hold at least one pair")]
    EmptyBoard,
    #[error("Catalog has {words} distinct words but the board needs {pairs} pairs")]
    CatalogTooSmall { words: usize, pairs: usize },
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Word {0:?} does not appear exactly twice")]
    UnpairedWord(String),
    #[error("Blank cells are only allowed as the single filler of an odd-sized board")]
    MisplacedBlank,
    #[error("No mismatched pair is waiting to be concealed")]
    NoPendingConceal,
    #[error("Game is still in progress")]
    GameInProgress,
}

pub type Result<T> = core::result::Result<T, GameError>;
