use alloc::string::ToString;
use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::*;

/// Turn progress of the engine.
///
/// Valid transitions:
/// - Idle -> OnePicked
/// - OnePicked -> Idle (pair matched)
/// - OnePicked -> Resolving (pair mismatched)
/// - Resolving -> Idle (conceal timer fired)
/// - any -> Idle (restart)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// No pending pick
    Idle,
    /// One revealed cell is waiting for its partner
    OnePicked(Coord2),
    /// Two mismatched cells are face-up until the conceal timer fires, input is locked
    Resolving { first: Coord2, second: Coord2 },
}

impl Selection {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_resolving(self) -> bool {
        matches!(self, Self::Resolving { .. })
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::Idle
    }
}

/// Turn processor for one game session, owning the board and every piece of selection state.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: GameConfig,
    board: Board,
    cells: Array2<CellState>,
    selection: Selection,
    matched_pairs: CellCount,
    seeds: SmallRng,
}

impl MatchEngine {
    /// Starts a session on a freshly generated board. Later restarts draw their seeds from `seed` as well.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let mut seeds = SmallRng::seed_from_u64(seed);
        let board = RandomBoardGenerator::new(seeds.random()).generate(&config)?;
        Ok(Self::from_parts(config, board, seeds))
    }

    /// Starts a session on a known board, `config.size` follows the board.
    pub fn with_board(mut config: GameConfig, board: Board, seed: u64) -> Self {
        config.size = board.size();
        Self::from_parts(config, board, SmallRng::seed_from_u64(seed))
    }

    fn from_parts(config: GameConfig, board: Board, seeds: SmallRng) -> Self {
        let size = usize::from(board.size());
        Self {
            config,
            board,
            cells: Array2::default((size, size)),
            selection: Default::default(),
            matched_pairs: 0,
            seeds,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn matched_pairs(&self) -> CellCount {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> CellCount {
        self.board.pair_count()
    }

    pub fn is_won(&self) -> bool {
        self.matched_pairs == self.total_pairs()
    }

    pub fn cell_state(&self, coords: Coord2) -> CellState {
        self.cells[coords.to_nd_index()]
    }

    /// Word currently shown on the cell, `None` while it is face-down.
    pub fn visible_word(&self, coords: Coord2) -> Option<&str> {
        if self.cell_state(coords).is_face_up() {
            self.board.word_at(coords)
        } else {
            None
        }
    }

    pub fn handle(&mut self, event: Event) -> Result<Effects> {
        match event {
            Event::CellClicked(coords) => self.on_cell_clicked(coords),
            Event::ConcealTimerFired => self.on_conceal_timer_fired(),
            Event::WinDialogAnswered { play_again } => self.on_win_acknowledged(play_again),
        }
    }

    /// Reveal a cell, resolving the pair when it is the second pick.
    ///
    /// Clicks on blank, face-up or matched cells, and any click while a mismatch is being resolved, are ignored.
    pub fn on_cell_clicked(&mut self, coords: Coord2) -> Result<Effects> {
        let coords = self.board.validate_coords(coords)?;

        let first = match self.selection {
            Selection::Resolving { .. } => {
                log::trace!("Ignoring click at {:?} while resolving", coords);
                return Ok(Effects::new());
            }
            Selection::Idle => None,
            Selection::OnePicked(first) => Some(first),
        };

        if self.cell_state(coords) != CellState::Hidden {
            log::trace!("Ignoring click at {:?}, already face-up", coords);
            return Ok(Effects::new());
        }

        let Some(word) = self.board.word_at(coords) else {
            log::trace!("Ignoring click at {:?}, blank cell", coords);
            return Ok(Effects::new());
        };
        let word = word.to_string();

        self.cells[coords.to_nd_index()] = CellState::Revealed;
        log::debug!("Revealed {:?} at {:?}", word, coords);
        let mut effects: Effects = smallvec![Effect::RevealCell { coords, word }];

        match first {
            None => self.selection = Selection::OnePicked(coords),
            Some(first) => self.resolve_pair(first, coords, &mut effects),
        }

        Ok(effects)
    }

    /// Compares the stored words of both picks, never what the host displays.
    fn resolve_pair(&mut self, first: Coord2, second: Coord2, effects: &mut Effects) {
        if self.board[first] == self.board[second] {
            self.cells[first.to_nd_index()] = CellState::Matched;
            self.cells[second.to_nd_index()] = CellState::Matched;
            self.matched_pairs += 1;
            self.selection = Selection::Idle;
            log::debug!(
                "Matched {:?} and {:?}, {}/{} pairs",
                first,
                second,
                self.matched_pairs,
                self.total_pairs()
            );
            effects.push(Effect::ConfirmMatch { first, second });

            if self.is_won() {
                log::debug!("All pairs found");
                effects.push(Effect::GameWon);
            }
        } else {
            self.selection = Selection::Resolving { first, second };
            log::debug!("Mismatch between {:?} and {:?}", first, second);
            effects.push(Effect::ScheduleConceal {
                first,
                second,
                delay_ms: self.config.conceal_delay_ms,
            });
        }
    }

    /// Conceal the mismatched pair and unlock input.
    pub fn on_conceal_timer_fired(&mut self) -> Result<Effects> {
        let Selection::Resolving { first, second } = self.selection else {
            log::warn!("Conceal timer fired without a pending mismatch");
            return Err(GameError::NoPendingConceal);
        };

        self.cells[first.to_nd_index()] = CellState::Hidden;
        self.cells[second.to_nd_index()] = CellState::Hidden;
        self.selection = Selection::Idle;

        Ok(smallvec![
            Effect::ConcealCell { coords: first },
            Effect::ConcealCell { coords: second },
        ])
    }

    pub fn on_win_acknowledged(&mut self, play_again: bool) -> Result<Effects> {
        if !self.is_won() {
            log::warn!("Win acknowledged while the game is still in progress");
            return Err(GameError::GameInProgress);
        }

        if play_again {
            self.restart()
        } else {
            Ok(smallvec![Effect::Terminate])
        }
    }

    /// Deal a new board from the same catalog and hide every cell.
    ///
    /// A pending conceal is cancelled first so a stale timer can't touch the new board. On error the current game is
    /// left untouched.
    pub fn restart(&mut self) -> Result<Effects> {
        let board = RandomBoardGenerator::new(self.seeds.random()).generate(&self.config)?;

        let mut effects = Effects::new();
        if self.selection.is_resolving() {
            log::debug!("Cancelling pending conceal for restart");
            effects.push(Effect::CancelConceal);
        }

        let size = usize::from(board.size());
        self.cells = Array2::default((size, size));
        self.board = board;
        self.selection = Selection::Idle;
        self.matched_pairs = 0;
        log::debug!("Restarted with {} pairs", self.total_pairs());

        effects.push(Effect::BoardReset {
            board: self.board.clone(),
        });
        Ok(effects)
    }
}
