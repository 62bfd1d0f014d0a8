//! Errors raised at the rules and text boundaries.

use thiserror::Error;

/// Failures when building positions or reading moves from outside the engine.
///
/// The search itself never produces these; they come from parsing FEN strings
/// and UCI text supplied by a front end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("malformed move `{0}`")]
    MalformedMove(String),

    #[error("illegal move `{0}` in this position")]
    IllegalMove(String),

    #[error("malformed position command: {0}")]
    MalformedPosition(String),
}
