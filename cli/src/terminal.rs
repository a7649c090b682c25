use std::collections::VecDeque;
use std::io::{BufRead, Lines, Write};
use std::thread;
use std::time::Duration;

use memory_core::{Coord2, Effect, MatchEngine};

use crate::render;

#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    Pick(Coord2),
    Restart,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let first = parts.next()?;
    match first {
        "q" | "quit" => return Some(Command::Quit),
        "r" | "restart" => return Some(Command::Restart),
        _ => {}
    }
    let row = first.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Pick((row, col)))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Interactive game on a line-based terminal. The conceal timer is a blocking wait between turns.
pub struct Terminal<'a, R, W> {
    engine: &'a mut MatchEngine,
    lines: Lines<R>,
    out: W,
    wait: fn(Duration),
}

impl<'a, R: BufRead, W: Write> Terminal<'a, R, W> {
    pub fn new(engine: &'a mut MatchEngine, input: R, out: W) -> Self {
        Self {
            engine,
            lines: input.lines(),
            out,
            wait: thread::sleep,
        }
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        writeln!(self.out, "Word Matching Game")?;
        writeln!(self.out, "{}", render::board(self.engine))?;

        loop {
            write!(self.out, "Pick a cell as `row col`, `r` to restart, `q` to quit: ")?;
            self.out.flush()?;

            let Some(line) = self.lines.next() else {
                return Ok(());
            };
            let line = line?;

            let result = match parse_command(&line) {
                Some(Command::Pick(coords)) => self.engine.on_cell_clicked(coords),
                Some(Command::Restart) => self.engine.restart(),
                Some(Command::Quit) => return Ok(()),
                None => {
                    writeln!(self.out, "Could not understand {:?}", line.trim())?;
                    continue;
                }
            };

            match result {
                Ok(effects) => {
                    if self.apply(effects.into_iter().collect())? {
                        return Ok(());
                    }
                }
                Err(err) => writeln!(self.out, "{err}")?,
            }
        }
    }

    /// Acts on effects until none are left, returns whether the game should end.
    fn apply(&mut self, mut queue: VecDeque<Effect>) -> anyhow::Result<bool> {
        let mut redraw = false;

        while let Some(effect) = queue.pop_front() {
            log::trace!("effect: {:?}", effect);
            match effect {
                Effect::RevealCell { .. } | Effect::ConfirmMatch { .. } | Effect::ConcealCell { .. } => {
                    redraw = true;
                }
                Effect::ScheduleConceal { delay_ms, .. } => {
                    writeln!(self.out, "{}", render::board(self.engine))?;
                    writeln!(self.out, "No match!")?;
                    self.out.flush()?;
                    (self.wait)(Duration::from_millis(delay_ms.into()));
                    queue.extend(self.engine.on_conceal_timer_fired()?);
                }
                // waits are blocking, nothing is left to cancel
                Effect::CancelConceal => {}
                Effect::GameWon => {
                    writeln!(self.out, "{}", render::board(self.engine))?;
                    write!(
                        self.out,
                        "Congratulations! You've matched all pairs! Would you like to play again? [y/n] "
                    )?;
                    self.out.flush()?;
                    let play_again = match self.lines.next() {
                        Some(answer) => is_yes(&answer?),
                        None => false,
                    };
                    queue.extend(self.engine.on_win_acknowledged(play_again)?);
                    redraw = false;
                }
                Effect::BoardReset { .. } => {
                    writeln!(self.out, "New board dealt.")?;
                    redraw = true;
                }
                Effect::Terminate => return Ok(true),
            }
        }

        if redraw {
            writeln!(self.out, "{}", render::board(self.engine))?;
        }
        Ok(false)
    }
}
