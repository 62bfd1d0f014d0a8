//! A text-mode game: the human plays White, the engine answers as Black.

use std::io::{BufRead, Write};

use anyhow::Context;
use chess_core::{
    move_to_uci, parse_uci_move, DrawReason, File, GameState, Outcome, Piece, Position, Rank,
    Side, Square,
};
use minimax_engine::MinimaxEngine;
use tracing::warn;

pub fn run<R: BufRead, W: Write>(mut engine: MinimaxEngine, input: R, mut out: W) -> anyhow::Result<()> {
    let mut pos = Position::startpos();
    let mut lines = input.lines();

    writeln!(out, "You play White. Enter moves like e2e4, or 'quit' to leave.")?;
    writeln!(out, "{}", render(&pos))?;

    loop {
        if let Some(outcome) = pos.outcome() {
            writeln!(out, "{}", describe(outcome))?;
            break;
        }

        match pos.side_to_move() {
            Side::White => {
                write!(out, "your move> ")?;
                out.flush()?;
                let Some(line) = lines.next() else {
                    break;
                };
                let line = line.context("failed to read move")?;
                let text = line.trim();
                if text.is_empty() {
                    continue;
                }
                if text == "quit" {
                    break;
                }
                match parse_uci_move(&pos, text) {
                    Ok(mv) => pos.apply(mv),
                    Err(e) => {
                        warn!(error = %e, "rejected move");
                        writeln!(out, "{}", e)?;
                    }
                }
            }
            Side::Black => {
                let Some(mv) = engine.find_best_move(&mut pos) else {
                    break;
                };
                writeln!(out, "engine plays {}", move_to_uci(&pos, mv))?;
                pos.apply(mv);
                writeln!(out, "{}", render(&pos))?;
            }
        }
    }

    Ok(())
}

/// The board from White's side, rank 8 at the top.
pub fn render(pos: &Position) -> String {
    let mut s = String::new();
    for rank in Rank::ALL.iter().rev() {
        s.push_str(&format!("{} ", *rank as usize + 1));
        for file in File::ALL {
            let sq = Square::new(file, *rank);
            s.push(' ');
            s.push(match pos.piece_at(sq) {
                Some((side, piece)) => piece_char(side, piece),
                None => '.',
            });
        }
        s.push('\n');
    }
    s.push_str("   a b c d e f g h");
    s
}

fn piece_char(side: Side, piece: Piece) -> char {
    let c = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    match side {
        Side::White => c.to_ascii_uppercase(),
        Side::Black => c,
    }
}

fn describe(outcome: Outcome) -> String {
    match outcome {
        Outcome::Checkmate { winner } => format!("Checkmate, {} wins.", winner),
        Outcome::Draw(reason) => {
            let why = match reason {
                DrawReason::Stalemate => "stalemate",
                DrawReason::InsufficientMaterial => "insufficient material",
                DrawReason::SeventyFiveMoveRule => "the seventy-five-move rule",
                DrawReason::FivefoldRepetition => "fivefold repetition",
            };
            format!("Draw by {}.", why)
        }
    }
}

#[cfg(test)]
#[path = "play_tests.rs"]
mod play_tests;
