//! Move and position text in the UCI dialect.
//!
//! `cozy_chess` encodes castling as the king capturing its own rook; the
//! protocol wants the king's two-square step, so both directions go through
//! here.

use cozy_chess::{File, Move, Piece, Square};

use crate::error::ChessError;
use crate::position::Position;
use crate::state::GameState;

pub fn is_castle(pos: &Position, mv: Move) -> bool {
    let board = pos.board();
    board.piece_on(mv.from) == Some(Piece::King)
        && board.color_on(mv.to) == Some(board.side_to_move())
}

/// Renders `mv` (legal in `pos`) as UCI text, e.g. `e2e4`, `e7e8q`, `e1g1`.
pub fn move_to_uci(pos: &Position, mv: Move) -> String {
    if is_castle(pos, mv) {
        let file = if (mv.to.file() as u8) > (mv.from.file() as u8) {
            File::G
        } else {
            File::C
        };
        let king_to = Square::new(file, mv.from.rank());
        return Move {
            from: mv.from,
            to: king_to,
            promotion: None,
        }
        .to_string();
    }
    mv.to_string()
}

/// Parses UCI text and matches it against the legal moves of `pos`.
///
/// Castling is accepted both as the king's step (`e1g1`) and king-takes-rook
/// (`e1h1`).
pub fn parse_uci_move(pos: &Position, text: &str) -> Result<Move, ChessError> {
    let text = text.trim().to_ascii_lowercase();
    if !(4..=5).contains(&text.len()) || !text.is_ascii() {
        return Err(ChessError::MalformedMove(text));
    }
    if text[0..2].parse::<Square>().is_err() || text[2..4].parse::<Square>().is_err() {
        return Err(ChessError::MalformedMove(text));
    }

    pos.legal_moves()
        .into_iter()
        .find(|&mv| move_to_uci(pos, mv) == text || mv.to_string() == text)
        .ok_or(ChessError::IllegalMove(text))
}

/// Applies the arguments of a UCI `position` command to `pos`.
///
/// Accepts `startpos` or `fen <fields>`, optionally followed by
/// `moves <m1> <m2> ...`. On error `pos` is left untouched.
pub fn set_position_from_uci(pos: &mut Position, args: &[&str]) -> Result<(), ChessError> {
    let moves_at = args.iter().position(|&a| a == "moves");
    let (setup, moves) = match moves_at {
        Some(i) => (&args[..i], &args[i + 1..]),
        None => (args, &args[args.len()..]),
    };

    let mut next = match setup.first() {
        Some(&"startpos") if setup.len() == 1 => Position::startpos(),
        Some(&"fen") if setup.len() > 1 => Position::from_fen(&setup[1..].join(" "))?,
        _ => return Err(ChessError::MalformedPosition(args.join(" "))),
    };

    for text in moves {
        let mv = parse_uci_move(&next, text)?;
        next.apply(mv);
    }

    *pos = next;
    Ok(())
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
