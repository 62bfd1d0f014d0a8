//! Minimax search with alpha-beta pruning

use chess_core::{GameState, Move, Outcome, Position};
use tracing::{debug, trace};

use crate::config::{TerminalScoring, DEFAULT_DEPTH};
use crate::eval::{Evaluator, Material};
use crate::{Score, INFINITY, MATE};

/// One fixed-depth tree walk.
///
/// Holds the leaf evaluator, the terminal scoring policy and a count of the
/// moves applied so far. Scores are from White's perspective at every ply.
pub struct Searcher<'e, E> {
    evaluator: &'e E,
    terminal: TerminalScoring,
    nodes: u64,
}

impl<'e, E> Searcher<'e, E> {
    pub fn new(evaluator: &'e E, terminal: TerminalScoring) -> Self {
        Self {
            evaluator,
            terminal,
            nodes: 0,
        }
    }

    /// Moves applied since this searcher was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// Returns the evaluator's score at `depth == 0` or at a terminal node.
    /// `alpha` and `beta` are copied into each child; this node only ever
    /// tightens its own copy.
    pub fn minimax<S>(
        &mut self,
        state: &mut S,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score
    where
        S: GameState,
        E: Evaluator<S>,
    {
        if depth == 0 && self.terminal == TerminalScoring::Material {
            return self.evaluator.evaluate(state);
        }
        let outcome = state.outcome();
        if depth == 0 || outcome.is_some() {
            return self.leaf(state, depth, outcome);
        }

        let moves = state.legal_moves();

        if maximizing {
            let mut best = -INFINITY;
            for mv in moves {
                let score = {
                    let mut child = state.play(mv);
                    self.nodes += 1;
                    self.minimax(&mut *child, depth - 1, alpha, beta, false)
                };
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    trace!(depth, alpha, beta, "beta cutoff");
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in moves {
                let score = {
                    let mut child = state.play(mv);
                    self.nodes += 1;
                    self.minimax(&mut *child, depth - 1, alpha, beta, true)
                };
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    trace!(depth, alpha, beta, "alpha cutoff");
                    break;
                }
            }
            best
        }
    }

    /// Picks the best move for the side to move, searching `depth` plies.
    ///
    /// Every root move gets a fresh full window. The first move reaching the
    /// best score wins. Returns `None` only when there are no legal moves.
    pub fn best_move<S>(&mut self, state: &mut S, depth: u8) -> Option<(S::Move, Score)>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let root_maximizing = state.side_to_move().is_maximizing();
        let child_depth = depth.max(1) - 1;
        let mut best: Option<(S::Move, Score)> = None;

        for mv in state.legal_moves() {
            let score = {
                let mut child = state.play(mv);
                self.nodes += 1;
                self.minimax(&mut *child, child_depth, -INFINITY, INFINITY, !root_maximizing)
            };
            debug!(?mv, score, "root move");

            let improves = match best {
                None => true,
                Some((_, best_score)) if root_maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((mv, score));
            }
        }

        best
    }

    fn leaf<S>(&self, state: &S, depth: u8, outcome: Option<Outcome>) -> Score
    where
        S: GameState,
        E: Evaluator<S>,
    {
        if self.terminal == TerminalScoring::Outcome {
            match outcome {
                // Mates found with more depth left are closer to the root.
                Some(Outcome::Checkmate { winner }) if winner.is_maximizing() => {
                    return MATE + Score::from(depth);
                }
                Some(Outcome::Checkmate { .. }) => return -(MATE + Score::from(depth)),
                Some(Outcome::Draw(_)) => return 0,
                None => {}
            }
        }
        self.evaluator.evaluate(state)
    }
}

/// Minimax score of `pos` with material evaluation at the leaves.
pub fn search(pos: &mut Position, depth: u8, alpha: Score, beta: Score, maximizing: bool) -> Score {
    Searcher::new(&Material, TerminalScoring::Material).minimax(pos, depth, alpha, beta, maximizing)
}

/// Best move for the side to move at the default depth of two plies.
pub fn find_best_move(pos: &mut Position) -> Option<Move> {
    find_best_move_at(pos, DEFAULT_DEPTH)
}

/// Best move for the side to move, searching `depth` plies.
pub fn find_best_move_at(pos: &mut Position, depth: u8) -> Option<Move> {
    Searcher::new(&Material, TerminalScoring::Material)
        .best_move(pos, depth)
        .map(|(mv, _)| mv)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
