use std::collections::HashMap;

use memory_core::*;

fn board(size: Coord, words: &[&str]) -> Board {
    let cells = words
        .iter()
        .map(|&word| match word {
            "" => Cell::Blank,
            word => Cell::Word(word.to_string()),
        })
        .collect();
    Board::from_cells(size, cells).unwrap()
}

/// Positions of each word, as a player with perfect memory would know them.
fn pairs_of(board: &Board) -> Vec<(Coord2, Coord2)> {
    let mut seen: HashMap<&str, Coord2> = HashMap::new();
    let mut pairs = Vec::new();
    for (coords, cell) in board.iter() {
        if let Some(word) = cell.word() {
            match seen.remove(word) {
                Some(first) => pairs.push((first, coords)),
                None => {
                    seen.insert(word, coords);
                }
            }
        }
    }
    pairs
}

fn play(engine: &mut MatchEngine, event: Event) -> Effects {
    engine.handle(event).unwrap()
}

#[test]
fn apple_banana_scenario() {
    let mut catalog = Catalog::from_words(["apple"]);
    catalog.insert("b", "apple");
    catalog.insert("c", "banana");
    catalog.insert("d", "banana");
    let config = GameConfig::new(2, catalog);
    let mut engine = MatchEngine::with_board(
        config,
        board(2, &["apple", "apple", "banana", "banana"]),
        11,
    );

    let effects = play(&mut engine, Event::CellClicked((0, 0)));
    assert_eq!(
        effects.as_slice(),
        [Effect::RevealCell {
            coords: (0, 0),
            word: "apple".into()
        }]
    );

    let effects = play(&mut engine, Event::CellClicked((0, 1)));
    assert_eq!(
        effects.as_slice(),
        [
            Effect::RevealCell {
                coords: (0, 1),
                word: "apple".into()
            },
            Effect::ConfirmMatch {
                first: (0, 0),
                second: (0, 1)
            },
        ]
    );

    play(&mut engine, Event::CellClicked((1, 0)));
    let effects = play(&mut engine, Event::CellClicked((1, 1)));
    assert_eq!(effects.last(), Some(&Effect::GameWon));

    let effects = play(&mut engine, Event::WinDialogAnswered { play_again: true });
    assert!(matches!(effects.as_slice(), [Effect::BoardReset { .. }]));
    assert_eq!(engine.matched_pairs(), 0);
}

#[test]
fn full_default_game_with_mistakes() {
    let mut engine = MatchEngine::new(GameConfig::default(), 2024).unwrap();
    let pairs = pairs_of(engine.board());
    assert_eq!(pairs.len(), 12);

    let mut won = 0;
    let mut confirmed = 0;
    for (index, &(first, second)) in pairs.iter().enumerate() {
        // miss once before every correct pick
        if let Some(&(other, _)) = pairs.get(index + 1) {
            play(&mut engine, Event::CellClicked(first));
            let effects = play(&mut engine, Event::CellClicked(other));
            assert!(matches!(
                effects.last(),
                Some(Effect::ScheduleConceal { delay_ms: 500, .. })
            ));
            assert!(play(&mut engine, Event::CellClicked(second)).is_empty());
            let effects = play(&mut engine, Event::ConcealTimerFired);
            assert_eq!(effects.len(), 2);
        }

        for effects in [
            play(&mut engine, Event::CellClicked(first)),
            play(&mut engine, Event::CellClicked(second)),
        ] {
            for effect in effects {
                match effect {
                    Effect::ConfirmMatch { .. } => confirmed += 1,
                    Effect::GameWon => won += 1,
                    Effect::ScheduleConceal { .. } => panic!("pair {first:?} {second:?} should match"),
                    _ => {}
                }
            }
        }
    }

    assert_eq!(confirmed, 12);
    assert_eq!(won, 1);
    assert!(engine.is_won());

    let filler = engine
        .board()
        .iter()
        .find(|(_, cell)| cell.is_blank())
        .map(|(coords, _)| coords)
        .unwrap();
    assert_eq!(engine.cell_state(filler), CellState::Hidden);

    let effects = play(&mut engine, Event::WinDialogAnswered { play_again: false });
    assert_eq!(effects.as_slice(), [Effect::Terminate]);
}

#[test]
fn replay_hides_every_cell() {
    let mut engine = MatchEngine::new(GameConfig::default(), 9).unwrap();
    for (first, second) in pairs_of(engine.board()) {
        play(&mut engine, Event::CellClicked(first));
        play(&mut engine, Event::CellClicked(second));
    }

    let effects = play(&mut engine, Event::WinDialogAnswered { play_again: true });

    let [Effect::BoardReset { board }] = effects.as_slice() else {
        panic!("unexpected effects {effects:?}");
    };
    assert_eq!(board.pair_count(), 12);
    for (coords, _) in board.iter() {
        assert_eq!(engine.cell_state(coords), CellState::Hidden);
        assert_eq!(engine.visible_word(coords), None);
    }
    assert!(!engine.is_won());
}
