use std::io::{BufRead, Write};

use memory_core::{Effect, Event, MatchEngine};

/// Drives the engine from JSON-encoded [`Event`]s, one per input line, writing each resulting [`Effect`] as a JSON
/// line. The host is responsible for timers and dialogs.
pub fn run(engine: &mut MatchEngine, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
    let initial = Effect::BoardReset {
        board: engine.board().clone(),
    };
    serde_json::to_writer(&mut out, &initial)?;
    writeln!(out)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let event: Event = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(err) => {
                log::warn!("Skipping malformed event {:?}: {}", line, err);
                continue;
            }
        };

        let effects = match engine.handle(event) {
            Ok(effects) => effects,
            Err(err) => {
                log::warn!("Rejected {:?}: {}", event, err);
                continue;
            }
        };

        for effect in effects {
            serde_json::to_writer(&mut out, &effect)?;
            writeln!(out)?;
            if effect == Effect::Terminate {
                out.flush()?;
                return Ok(());
            }
        }
        out.flush()?;
    }

    Ok(())
}
