//! The UCI command loop.

use std::io::{BufRead, Write};

use anyhow::Context;
use chess_core::{move_to_uci, set_position_from_uci, Engine, GameState, Position};
use minimax_engine::{MinimaxEngine, Score, MATE, MAX_DEPTH};
use tracing::{debug, warn};

pub fn run<R: BufRead, W: Write>(mut engine: MinimaxEngine, input: R, mut out: W) -> anyhow::Result<()> {
    let mut pos = Position::startpos();

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            continue;
        };

        match command {
            "uci" => {
                writeln!(out, "id name {}", engine.name())?;
                writeln!(out, "id author {}", engine.author())?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min 1 max {}",
                    engine.config().depth,
                    MAX_DEPTH
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => match parse_setoption(&parts[1..]) {
                Some((name, value)) => {
                    if engine.set_option(&name, &value) {
                        debug!(%name, %value, "option set");
                    } else {
                        warn!(%name, %value, "unsupported option");
                    }
                }
                None => warn!(%line, "malformed setoption"),
            },
            "ucinewgame" => {
                pos = Position::startpos();
                engine.new_game();
            }
            "position" => {
                if let Err(e) = set_position_from_uci(&mut pos, &parts[1..]) {
                    warn!(error = %e, "ignoring position command");
                }
            }
            "go" => {
                // Clock and node limits are ignored; the search depth is fixed.
                let result = engine.search(&mut pos);
                match result.best_move {
                    Some(mv) => {
                        // UCI scores are from the side to move's point of view.
                        let cp = if pos.side_to_move().is_maximizing() {
                            result.score
                        } else {
                            -result.score
                        };
                        writeln!(
                            out,
                            "info depth {} score {} nodes {}",
                            result.depth,
                            uci_score(cp, result.depth),
                            result.nodes
                        )?;
                        writeln!(out, "bestmove {}", move_to_uci(&pos, mv))?;
                    }
                    None => writeln!(out, "bestmove 0000")?,
                }
            }
            "quit" => break,
            other => debug!(command = other, "ignoring unknown command"),
        }
        out.flush()?;
    }

    Ok(())
}

/// Formats a side-to-move score as `cp <n>`, or `mate <n>` in moves for
/// outcome-scored mates. Mates carry the depth remaining where they were found.
fn uci_score(cp: Score, depth: u8) -> String {
    if cp.abs() < MATE {
        return format!("cp {}", cp);
    }
    let remaining = cp.abs() - MATE;
    let plies = (Score::from(depth.max(1)) - remaining).max(1);
    let moves = (plies + 1) / 2;
    format!("mate {}", if cp > 0 { moves } else { -moves })
}

/// Splits `name <id...> value <x...>`; option names may contain spaces.
fn parse_setoption(args: &[&str]) -> Option<(String, String)> {
    let name_at = args.iter().position(|&a| a == "name")?;
    let value_at = args.iter().position(|&a| a == "value")?;
    if value_at <= name_at + 1 {
        return None;
    }
    let name = args[name_at + 1..value_at].join(" ");
    let value = args[value_at + 1..].join(" ");
    Some((name, value))
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
