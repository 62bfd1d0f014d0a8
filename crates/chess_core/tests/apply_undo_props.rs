//! Property-based tests for the apply/undo contract.

use chess_core::{GameState, Position};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

proptest! {
    /// Property: a random line followed by the same number of undos restores the position exactly
    #[test]
    fn prop_apply_undo_restores_position(seed in any::<u64>(), num_moves in 1..=40usize) {
        let mut pos = Position::startpos();
        let mut rng = StdRng::seed_from_u64(seed);

        let initial_fen = pos.to_fen();
        let initial_hash = pos.hash();

        let mut applied = 0;
        for _ in 0..num_moves {
            let moves = pos.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            pos.apply(mv);
            applied += 1;
        }
        prop_assert_eq!(pos.ply(), applied);

        for _ in 0..applied {
            pos.undo();
        }

        prop_assert_eq!(pos.to_fen(), initial_fen);
        prop_assert_eq!(pos.hash(), initial_hash);
        prop_assert_eq!(pos.ply(), 0);
    }

    /// Property: the game is over exactly when a terminal outcome is reported,
    /// and a position without moves is always terminal
    #[test]
    fn prop_no_moves_means_terminal(seed in any::<u64>(), num_moves in 1..=80usize) {
        let mut pos = Position::startpos();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = pos.legal_moves();
            prop_assert_eq!(moves.is_empty(), !pos.has_legal_moves());
            if moves.is_empty() {
                prop_assert!(pos.is_terminal());
                break;
            }
            prop_assert_eq!(pos.is_terminal(), pos.outcome().is_some());
            pos.apply(moves[rng.gen_range(0..moves.len())]);
        }
    }
}
