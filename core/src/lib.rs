#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use catalog::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use protocol::*;
pub use types::*;

mod catalog;
mod cell;
mod engine;
mod error;
mod generator;
mod protocol;
mod types;

pub const DEFAULT_SIZE: Coord = 5;

/// Delay before a mismatched pair is concealed again.
pub const DEFAULT_CONCEAL_DELAY_MS: u32 = 500;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub size: Coord,
    pub conceal_delay_ms: u32,
    pub catalog: Catalog,
}

impl GameConfig {
    pub fn new(size: Coord, catalog: Catalog) -> Self {
        Self {
            size,
            conceal_delay_ms: DEFAULT_CONCEAL_DELAY_MS,
            catalog,
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    /// Odd-sized boards leave one filler cell out of the pairs.
    pub const fn total_pairs(&self) -> CellCount {
        self.total_cells() / 2
    }

    pub const fn has_filler(&self) -> bool {
        self.total_cells() % 2 == 1
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, Catalog::default())
    }
}

/// Square arrangement of paired words, fixed for the lifetime of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    pair_count: CellCount,
}

impl Board {
    /// Builds a board from row-major `cells`, checking that every word appears exactly twice and that a blank is only
    /// used as the filler of an odd-sized board.
    pub fn from_cells(size: Coord, cells: Vec<Cell>) -> Result<Self> {
        if size == 0 {
            return Err(GameError::EmptyBoard);
        }

        let total_cells = usize::from(mult(size, size));
        if cells.len() != total_cells {
            return Err(GameError::InvalidBoardShape);
        }

        let mut word_counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut blank_count = 0;
        for cell in &cells {
            match cell.word() {
                Some(word) => *word_counts.entry(word).or_default() += 1,
                None => blank_count += 1,
            }
        }

        if let Some((word, _)) = word_counts.iter().find(|&(_, &count)| count != 2) {
            return Err(GameError::UnpairedWord(word.to_string()));
        }
        if blank_count != total_cells % 2 {
            return Err(GameError::MisplacedBlank);
        }
        if word_counts.is_empty() {
            return Err(GameError::EmptyBoard);
        }

        let pair_count = word_counts.len() as CellCount;
        let cells = Array2::from_shape_vec((usize::from(size), usize::from(size)), cells)
            .map_err(|_| GameError::InvalidBoardShape)?;

        Ok(Self { cells, pair_count })
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn pair_count(&self) -> CellCount {
        self.pair_count
    }

    pub fn word_at(&self, coords: Coord2) -> Option<&str> {
        self[coords].word()
    }

    /// Cells in row-major order along with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
