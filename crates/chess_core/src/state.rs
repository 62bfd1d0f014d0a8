//! The contract between the search and the rules engine driving it.
//!
//! The search only ever sees a [`GameState`]: it enumerates moves, plays them
//! through a [`Played`] guard and asks whether the game is over. Board layout,
//! move encoding and draw rules stay behind this trait.

use std::fmt;
use std::ops::{Deref, DerefMut};

/// Side to move. White is the maximizing side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Scores are always "positive favors White".
    #[inline]
    pub fn is_maximizing(self) -> bool {
        self == Side::White
    }
}

impl From<cozy_chess::Color> for Side {
    fn from(color: cozy_chess::Color) -> Self {
        match color {
            cozy_chess::Color::White => Side::White,
            cozy_chess::Color::Black => Side::Black,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("White"),
            Side::Black => f.write_str("Black"),
        }
    }
}

/// Why a game ended without a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoveRule,
    FivefoldRepetition,
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Side },
    Draw(DrawReason),
}

/// A mutable game position the search can walk.
///
/// Implementations must keep `apply`/`undo` exactly paired: `undo` reverts the
/// most recent `apply`, restoring every piece of state the position carries.
pub trait GameState {
    type Move: Copy + PartialEq + fmt::Debug;

    /// All legal moves for the side to move. Empty means no move exists.
    fn legal_moves(&self) -> Vec<Self::Move>;

    fn apply(&mut self, mv: Self::Move);

    fn undo(&mut self);

    fn side_to_move(&self) -> Side;

    /// `Some` once the game is over (checkmate, stalemate or an automatic draw).
    fn outcome(&self) -> Option<Outcome>;

    fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Applies `mv` and returns a guard that undoes it when dropped.
    fn play(&mut self, mv: Self::Move) -> Played<'_, Self>
    where
        Self: Sized,
    {
        self.apply(mv);
        Played { state: self }
    }
}

/// A move applied to a [`GameState`] for the lifetime of the guard.
///
/// Dereferences to the state so the child position can be searched in place.
pub struct Played<'a, S: GameState> {
    state: &'a mut S,
}

impl<S: GameState> Deref for Played<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.state
    }
}

impl<S: GameState> DerefMut for Played<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.state
    }
}

impl<S: GameState> Drop for Played<'_, S> {
    fn drop(&mut self) {
        self.state.undo();
    }
}
