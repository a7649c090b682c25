use std::fmt::Write;

use memory_core::{CellState, MatchEngine};

const HIDDEN: &str = "?";

/// Text grid of the engine's current view, face-down cells show `?` and matched words are bracketed.
pub fn board(engine: &MatchEngine) -> String {
    let width = engine
        .board()
        .iter()
        .filter_map(|(_, cell)| cell.word())
        .map(|word| word.chars().count() + 2)
        .max()
        .unwrap_or(0)
        .max(HIDDEN.len());

    let mut out = String::new();
    let _ = write!(out, "   ");
    for col in 0..engine.size() {
        let _ = write!(out, " {col:^width$}");
    }
    out.push('\n');

    for row in 0..engine.size() {
        let _ = write!(out, "{row:>2} ");
        for col in 0..engine.size() {
            let coords = (row, col);
            let label = match (engine.cell_state(coords), engine.visible_word(coords)) {
                (CellState::Matched, Some(word)) => format!("[{word}]"),
                (CellState::Revealed, Some(word)) => word.to_string(),
                _ if engine.board()[coords].is_blank() => String::new(),
                _ => HIDDEN.to_string(),
            };
            let _ = write!(out, " {label:^width$}");
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "{}/{} pairs found",
        engine.matched_pairs(),
        engine.total_pairs()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use memory_core::{Board, Cell, GameConfig};

    fn engine() -> MatchEngine {
        let cells = ["ox", "ox", "yak", "yak"]
            .into_iter()
            .map(|word| Cell::Word(word.to_string()))
            .collect();
        MatchEngine::with_board(GameConfig::default(), Board::from_cells(2, cells).unwrap(), 0)
    }

    #[test]
    fn hidden_board_shows_no_words() {
        let text = board(&engine());

        assert!(!text.contains("ox"));
        assert!(!text.contains("yak"));
        assert_eq!(text.matches(HIDDEN).count(), 4);
        assert!(text.ends_with("0/2 pairs found\n"));
    }

    #[test]
    fn revealed_and_matched_words_are_shown() {
        let mut engine = engine();
        engine.on_cell_clicked((0, 0)).unwrap();
        engine.on_cell_clicked((0, 1)).unwrap();
        engine.on_cell_clicked((1, 0)).unwrap();

        let text = board(&engine);

        assert_eq!(text.matches("[ox]").count(), 2);
        assert!(text.contains(" yak "));
        assert!(text.ends_with("1/2 pairs found\n"));
    }
}
