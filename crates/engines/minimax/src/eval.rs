//! Material-based position evaluation

use chess_core::{Piece, Position, Square};

use crate::Score;

/// Scores a position for the search. Positive favors White.
pub trait Evaluator<S> {
    fn evaluate(&self, state: &S) -> Score;
}

/// The plain material count used by [`evaluate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Material;

impl Evaluator<Position> for Material {
    fn evaluate(&self, pos: &Position) -> Score {
        evaluate(pos)
    }
}

/// Evaluates the position from White's perspective.
///
/// Returns a score in centipawns:
/// - Positive = good for White
/// - Negative = good for Black
/// - 0 = equal material
///
/// Only material is counted; kings are worth nothing since they are never
/// captured.
pub fn evaluate(pos: &Position) -> Score {
    let mut score = 0;
    for sq in Square::ALL {
        if let Some((side, piece)) = pos.piece_at(sq) {
            let v = piece_value(piece);
            score += if side.is_maximizing() { v } else { -v };
        }
    }
    score
}

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(piece: Piece) -> Score {
    match piece {
        Piece::Pawn => 100,
        Piece::Knight => 320,
        Piece::Bishop => 330,
        Piece::Rook => 500,
        Piece::Queen => 900,
        Piece::King => 0,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
