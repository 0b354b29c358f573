//! Constants for board topology, dice, and estimation parameters.
//!
//! The board is a fixed ring of 40 squares. Every special square and redirect
//! target is named here so the movement rules read as table lookups rather
//! than inline literals.
//!
//! # Dice Configuration
//!
//! The number of die faces is controlled by Cargo features:
//! - `dice4` (default): two 4-sided dice
//! - `dice6`: two classic 6-sided dice
//!
//! To compile for a specific die:
//! ```sh
//! cargo build                                        # 4-sided (default)
//! cargo build --no-default-features --features dice6 # 6-sided
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of squares on the board. Movement wraps around modulo this value.
pub const BOARD_SIZE: usize = 40;

/// The starting square.
pub const GO: usize = 0;

/// The jail square. Landing here (or being sent here) ends the turn.
pub const JAIL: usize = 10;

/// The "go to jail" square. Landing here sends the token to [`JAIL`].
pub const GO_TO_JAIL: usize = 30;

/// Squares that draw from the Chance deck.
pub const CHANCE_SQUARES: [usize; 3] = [2, 17, 33];

/// Squares that draw from the Community Chest deck.
pub const COMMUNITY_CHEST_SQUARES: [usize; 3] = [7, 22, 26];

// =============================================================================
// Card Decks
// =============================================================================

/// Cards in each deck. A draw is a uniform integer in `0..CARD_DECK_SIZE`.
pub const CARD_DECK_SIZE: u32 = 16;

/// Chance cards (out of [`CARD_DECK_SIZE`]) that move the token.
pub const CHANCE_REDIRECT_CARDS: u32 = 2;

/// Community Chest cards (out of [`CARD_DECK_SIZE`]) that move the token.
pub const COMMUNITY_CHEST_REDIRECT_CARDS: u32 = 10;

/// Fixed Chance destinations: GO and JAIL.
pub const CHANCE_TARGETS: [usize; 2] = [GO, JAIL];

/// Fixed Community Chest destinations that do not depend on the landing square.
pub const COMMUNITY_CHEST_FIXED_TARGETS: [usize; 6] = [GO, JAIL, 11, 39, 24, 5];

/// Utility reached from the second Community Chest square.
pub const UTILITY_FAR: usize = 28;

/// Utility reached from every other Community Chest square.
pub const UTILITY_NEAR: usize = 12;

/// Squares moved back by the "go back" card.
pub const GO_BACK_STEPS: usize = 3;

// =============================================================================
// Dice
// =============================================================================

/// Faces per die.
#[cfg(feature = "dice4")]
pub const DIE_FACES: u8 = 4;

#[cfg(feature = "dice6")]
pub const DIE_FACES: u8 = 6;

// Compile-time check: exactly one die feature must be enabled
#[cfg(all(feature = "dice4", feature = "dice6"))]
compile_error!("Cannot enable both 'dice4' and 'dice6' features at the same time");

#[cfg(not(any(feature = "dice4", feature = "dice6")))]
compile_error!("Must enable exactly one die feature: 'dice4' or 'dice6'");

/// Consecutive doubles in one turn that send the token straight to jail.
pub const MAX_DOUBLES: u32 = 3;

// =============================================================================
// Estimation Parameters
// =============================================================================

/// Default number of simulated turns per starting square.
pub const N_SAMPLES: usize = 1000;

/// Default number of power iterations for the rank estimator.
pub const N_ITERATIONS: usize = 1000;

/// Default damping factor (weight of the transition term vs. the uniform jump).
pub const DAMPING: f64 = 0.85;

/// Default number of leading squares in the modal string.
pub const REPORT_TOP: usize = 3;
