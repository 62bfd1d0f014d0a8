use cozy_chess::{Board, Move, Piece, Square};

use crate::error::ChessError;
use crate::state::{DrawReason, GameState, Outcome, Side};

/// Halfmove clock at which the game is drawn automatically (75 moves by each side).
pub const SEVENTY_FIVE_MOVE_PLIES: u16 = 150;

/// Occurrences of one position that draw the game automatically.
pub const REPETITION_LIMIT: usize = 5;

/// Largest halfmove clock `cozy_chess` stores; it stops counting there.
const BOARD_CLOCK_CAP: u16 = 100;

/// A chess position with an undo stack.
///
/// Move generation is delegated to `cozy_chess`. Each `apply` pushes the
/// previous board, so `undo` restores castling rights, en passant and clocks
/// exactly. `hashes` always ends with the hash of the current board and is
/// used for repetition detection. `clocks` runs in step with `hashes` and
/// holds the true halfmove clock, which the board itself caps at 100.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    undo_stack: Vec<Board>,
    hashes: Vec<u64>,
    clocks: Vec<u16>,
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(Board::default(), 0)
    }

    /// Parses a six-field FEN. Halfmove clocks above 100 are kept here and
    /// handed to the board capped.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let invalid = |reason: String| ChessError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };

        let halfmoves = match fen.split_whitespace().nth(4) {
            Some(field) => field
                .parse::<u16>()
                .map_err(|_| invalid(format!("bad halfmove clock `{}`", field)))?,
            None => 0,
        };
        let capped = halfmoves.min(BOARD_CLOCK_CAP).to_string();
        let mut fields: Vec<&str> = fen.split_whitespace().collect();
        if let Some(field) = fields.get_mut(4) {
            *field = capped.as_str();
        }

        let board = Board::from_fen(&fields.join(" "), false)
            .map_err(|e| invalid(format!("{:?}", e)))?;
        Ok(Self::from_board(board, halfmoves))
    }

    fn from_board(board: Board, halfmoves: u16) -> Self {
        let hash = board.hash();
        Self {
            board,
            undo_stack: Vec::new(),
            hashes: vec![hash],
            clocks: vec![halfmoves],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_fen(&self) -> String {
        let fen = self.board.to_string();
        let clock = self.halfmove_clock().to_string();
        fen.split_whitespace()
            .enumerate()
            .map(|(i, field)| if i == 4 { clock.as_str() } else { field })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn hash(&self) -> u64 {
        self.board.hash()
    }

    /// Colour and kind of the piece on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<(Side, Piece)> {
        let piece = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some((color.into(), piece))
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    /// Plies since the last capture or pawn move, not capped.
    pub fn halfmove_clock(&self) -> u16 {
        self.clocks.last().copied().unwrap_or(0)
    }

    /// Number of moves applied since this position was created.
    pub fn ply(&self) -> usize {
        self.undo_stack.len()
    }

    /// Applies `mv` after checking it against the legal move set.
    ///
    /// Use this for moves coming from outside the engine; the search uses
    /// the unchecked [`GameState::apply`].
    pub fn try_apply(&mut self, mv: Move) -> Result<(), ChessError> {
        if !self.legal_moves().contains(&mv) {
            return Err(ChessError::IllegalMove(mv.to_string()));
        }
        self.apply(mv);
        Ok(())
    }

    pub fn has_legal_moves(&self) -> bool {
        // Returning true stops generation at the first piece that can move.
        self.board.generate_moves(|piece_moves| !piece_moves.is_empty())
    }

    /// How many times the current position has occurred, including now.
    ///
    /// Only positions since the last capture or pawn move can repeat.
    pub fn repetition_count(&self) -> usize {
        let current = self.board.hash();
        let window = usize::from(self.halfmove_clock()) + 1;
        self.hashes
            .iter()
            .rev()
            .take(window)
            .filter(|&&h| h == current)
            .count()
    }

    /// Neither side can possibly deliver mate.
    ///
    /// True for bare kings, a single minor piece, or bishops only that all
    /// stand on squares of one colour.
    pub fn is_insufficient_material(&self) -> bool {
        let heavy = self.board.pieces(Piece::Pawn)
            | self.board.pieces(Piece::Rook)
            | self.board.pieces(Piece::Queen);
        if !heavy.is_empty() {
            return false;
        }

        let knights = self.board.pieces(Piece::Knight);
        let bishops = self.board.pieces(Piece::Bishop);
        if knights.len() + bishops.len() <= 1 {
            return true;
        }
        if !knights.is_empty() {
            return false;
        }

        let mut shades = bishops
            .into_iter()
            .map(|sq| (sq.file() as usize + sq.rank() as usize) % 2);
        match shades.next() {
            Some(first) => shades.all(|shade| shade == first),
            None => true,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl GameState for Position {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
        moves
    }

    fn apply(&mut self, mv: Move) {
        let previous = self.board.clone();
        self.board.play_unchecked(mv);
        // The board resets its clock to zero on a capture or pawn move.
        let clock = if self.board.halfmove_clock() == 0 {
            0
        } else {
            self.halfmove_clock().saturating_add(1)
        };
        self.undo_stack.push(previous);
        self.hashes.push(self.board.hash());
        self.clocks.push(clock);
    }

    fn undo(&mut self) {
        debug_assert!(!self.undo_stack.is_empty(), "undo without a matching apply");
        if let Some(previous) = self.undo_stack.pop() {
            self.board = previous;
            self.hashes.pop();
            self.clocks.pop();
        }
    }

    fn side_to_move(&self) -> Side {
        self.board.side_to_move().into()
    }

    fn outcome(&self) -> Option<Outcome> {
        if !self.has_legal_moves() {
            if self.in_check() {
                return Some(Outcome::Checkmate {
                    winner: self.side_to_move().opponent(),
                });
            }
            return Some(Outcome::Draw(DrawReason::Stalemate));
        }
        if self.is_insufficient_material() {
            return Some(Outcome::Draw(DrawReason::InsufficientMaterial));
        }
        if self.halfmove_clock() >= SEVENTY_FIVE_MOVE_PLIES {
            return Some(Outcome::Draw(DrawReason::SeventyFiveMoveRule));
        }
        if self.repetition_count() >= REPETITION_LIMIT {
            return Some(Outcome::Draw(DrawReason::FivefoldRepetition));
        }
        None
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
