use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::*;

/// Generation strategy that places each catalog word twice and shuffles the cells uniformly.
///
/// When the catalog has more words than the board has pairs, a random subset of the words is used.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: &GameConfig) -> Result<Board> {
        let pairs = usize::from(config.total_pairs());
        if pairs == 0 {
            return Err(GameError::EmptyBoard);
        }

        let mut words = config.catalog.words();
        if words.len() < pairs {
            return Err(GameError::CatalogTooSmall {
                words: words.len(),
                pairs,
            });
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);

        if words.len() > pairs {
            log::debug!(
                "Catalog has {} words, only {} fit on the board",
                words.len(),
                pairs
            );
            words.shuffle(&mut rng);
            words.truncate(pairs);
        }

        let mut cells: Vec<Cell> = words
            .into_iter()
            .flat_map(|word| [Cell::Word(word.clone()), Cell::Word(word)])
            .collect();
        if config.has_filler() {
            cells.push(Cell::Blank);
        }
        cells.shuffle(&mut rng);

        Board::from_cells(config.size, cells)
    }
}
