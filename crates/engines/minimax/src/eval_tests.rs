use super::*;

fn eval_fen(fen: &str) -> Score {
    evaluate(&Position::from_fen(fen).unwrap())
}

#[test]
fn test_startpos_is_balanced() {
    assert_eq!(evaluate(&Position::startpos()), 0);
}

#[test]
fn test_bare_kings_score_zero() {
    assert_eq!(eval_fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1"), 0);
}

#[test]
fn test_extra_queen_for_white() {
    assert_eq!(eval_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1"), 900);
}

#[test]
fn test_score_ignores_side_to_move() {
    let white = eval_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
    let black = eval_fen("4k3/8/8/3q4/8/8/3R4/4K3 b - - 0 1");
    assert_eq!(white, 500 - 900);
    assert_eq!(white, black);
}

#[test]
fn test_mixed_material() {
    // White: R, B, N, 2P = 500 + 330 + 320 + 200; Black: Q, P = 900 + 100
    assert_eq!(
        eval_fen("4k3/p7/8/3q4/8/2N5/PP6/R1B1K3 w - - 0 1"),
        1350 - 1000
    );
}

#[test]
fn test_piece_values() {
    assert_eq!(piece_value(Piece::Pawn), 100);
    assert_eq!(piece_value(Piece::Knight), 320);
    assert_eq!(piece_value(Piece::Bishop), 330);
    assert_eq!(piece_value(Piece::Rook), 500);
    assert_eq!(piece_value(Piece::Queen), 900);
    assert_eq!(piece_value(Piece::King), 0);
}

#[test]
fn test_material_evaluator_matches_free_function() {
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    assert_eq!(Material.evaluate(&pos), evaluate(&pos));
}
