//! Chess rules for the minimax engine.
//!
//! The search in `minimax_engine` is written against the [`GameState`]
//! contract; [`Position`] is the chess implementation of it, built on the
//! `cozy_chess` move generator.

pub mod error;
pub mod position;
pub mod state;
pub mod uci;

pub use cozy_chess::{File, Move, Piece, Rank, Square};
pub use error::ChessError;
pub use position::Position;
pub use state::{DrawReason, GameState, Outcome, Played, Side};
pub use uci::{is_castle, move_to_uci, parse_uci_move, set_position_from_uci};

// =============================================================================
// Engine trait — implemented by the search engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score in centipawns, positive favors White
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of moves applied during the search
    pub nodes: u64,
}

/// Trait that chess engines implement so front ends can drive them.
pub trait Engine: Send {
    /// Searches `pos` and returns the chosen move.
    ///
    /// The position is borrowed mutably for the walk and is handed back in
    /// the state it was given.
    fn search(&mut self, pos: &mut Position) -> SearchResult;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
