//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material-only
//! evaluation. There is no move ordering, transposition table, quiescence
//! search or iterative deepening: every call walks the full tree to the
//! configured depth, so play is deliberately weak at the default two plies.

mod config;
mod eval;
mod search;

use chess_core::{move_to_uci, Engine, Move, Position, SearchResult};
use tracing::info;

pub use config::{ConfigError, EngineConfig, TerminalScoring, DEFAULT_DEPTH, MAX_DEPTH};
pub use eval::{evaluate, piece_value, Evaluator, Material};
pub use search::{find_best_move, find_best_move_at, search, Searcher};

/// Score in centipawns. Positive favors White.
pub type Score = i32;

/// Bound on every score the search produces.
pub const INFINITY: Score = 99_999;

/// Base score of a checkmate under [`TerminalScoring::Outcome`].
pub const MATE: Score = 90_000;

/// Chess engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning at a fixed depth
/// - Simple material evaluation
/// - Draw and mate detection from the rules in `chess_core`
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: EngineConfig,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config, nodes: 0 }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Moves applied during the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// The configured-depth best move, or `None` if the side to move has none.
    pub fn find_best_move(&mut self, pos: &mut Position) -> Option<Move> {
        self.search(pos).best_move
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &mut Position) -> SearchResult {
        let depth = self.config.depth;
        let mut searcher = Searcher::new(&Material, self.config.terminal_scoring);
        let best = searcher.best_move(pos, depth);
        self.nodes = searcher.nodes();

        match best {
            Some((mv, score)) => info!(
                best_move = %move_to_uci(pos, mv),
                score,
                depth,
                nodes = self.nodes,
                "search finished"
            ),
            None => info!(depth, "no legal moves"),
        }

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        if !name.eq_ignore_ascii_case("depth") {
            return false;
        }
        match value.trim().parse::<u8>() {
            Ok(depth) => {
                self.config.depth = depth.clamp(1, MAX_DEPTH);
                true
            }
            Err(_) => false,
        }
    }
}
