//! Board topology: square classification and card redirect tables.
//!
//! The board never changes at runtime. Everything here is a pure function of
//! the constant tables in [`crate::constants`].

use std::fmt;

use crate::constants::{
    BOARD_SIZE, CHANCE_SQUARES, CHANCE_TARGETS, COMMUNITY_CHEST_FIXED_TARGETS,
    COMMUNITY_CHEST_SQUARES, GO, GO_BACK_STEPS, GO_TO_JAIL, JAIL, UTILITY_FAR, UTILITY_NEAR,
};

/// A square on the board, represented as its index in `0..BOARD_SIZE`.
pub type Square = usize;

/// What happens when a token lands on a square.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SquareKind {
    Go,
    Jail,
    GoToJail,
    /// Draws from the Chance deck (index within [`CHANCE_SQUARES`]).
    Chance(usize),
    /// Draws from the Community Chest deck (index within [`COMMUNITY_CHEST_SQUARES`]).
    CommunityChest(usize),
    Plain,
}

impl SquareKind {
    /// Classify a square.
    pub fn of(sq: Square) -> Self {
        debug_assert!(sq < BOARD_SIZE, "square {sq} off the board");
        if let Some(i) = CHANCE_SQUARES.iter().position(|&s| s == sq) {
            return SquareKind::Chance(i);
        }
        if let Some(i) = COMMUNITY_CHEST_SQUARES.iter().position(|&s| s == sq) {
            return SquareKind::CommunityChest(i);
        }
        match sq {
            GO => SquareKind::Go,
            JAIL => SquareKind::Jail,
            GO_TO_JAIL => SquareKind::GoToJail,
            _ => SquareKind::Plain,
        }
    }
}

/// Advance `from` by `steps`, wrapping around the board.
#[inline]
pub fn advance(from: Square, steps: usize) -> Square {
    (from + steps) % BOARD_SIZE
}

/// Destinations of the Chance redirect cards.
pub fn chance_targets() -> [Square; 2] {
    CHANCE_TARGETS
}

/// Destinations of the Community Chest redirect cards for a given landing square.
///
/// The railroad entry appears twice, which doubles its weight under a uniform
/// pick. The utility is [`UTILITY_FAR`] from the second Community Chest square
/// and [`UTILITY_NEAR`] otherwise.
pub fn community_chest_targets(landing: Square) -> [Square; 10] {
    let railroad = (landing + 5) / 10;
    let utility = if landing == COMMUNITY_CHEST_SQUARES[1] {
        UTILITY_FAR
    } else {
        UTILITY_NEAR
    };
    let back = (landing + BOARD_SIZE - GO_BACK_STEPS) % BOARD_SIZE;

    let [a, b, c, d, e, f] = COMMUNITY_CHEST_FIXED_TARGETS;
    [a, b, c, d, e, f, railroad, railroad, utility, back]
}

/// Short conventional label for a square ("GO", "CC1", "R2", ...).
pub fn square_name(sq: Square) -> SquareName {
    SquareName(sq)
}

/// Display wrapper returned by [`square_name`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SquareName(Square);

impl fmt::Display for SquareName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match SquareKind::of(self.0) {
            SquareKind::Go => write!(f, "GO"),
            SquareKind::Jail => write!(f, "JAIL"),
            SquareKind::GoToJail => write!(f, "G2J"),
            SquareKind::Chance(i) => write!(f, "CH{}", i + 1),
            SquareKind::CommunityChest(i) => write!(f, "CC{}", i + 1),
            SquareKind::Plain if self.0 % 10 == 5 => write!(f, "R{}", self.0 / 10 + 1),
            SquareKind::Plain => write!(f, "{:02}", self.0),
        }
    }
}
