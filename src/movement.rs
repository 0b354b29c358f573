//! Move generation: one full turn of dice-driven movement.
//!
//! A turn is a chain of rolls. Each roll advances the token, then the card
//! squares may redirect it, then the jail squares may end the turn. Doubles
//! keep the chain going; the third double in a turn sends the token straight
//! to jail before it moves.
//!
//! All randomness comes from the [`Rng`] passed in, so a seeded generator
//! reproduces the same turn.

use fastrand::Rng;

use crate::board::{Square, SquareKind, advance, chance_targets, community_chest_targets};
use crate::constants::{
    CARD_DECK_SIZE, CHANCE_REDIRECT_CARDS, COMMUNITY_CHEST_REDIRECT_CARDS, JAIL, MAX_DOUBLES,
};
use crate::dice::roll;

/// Where a turn ended and how many rolls it took.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub square: Square,
    pub rolls: u32,
}

/// Play one turn from `start` and return the square the token ends on.
pub fn take_turn(start: Square, rng: &mut Rng) -> Square {
    take_turn_traced(start, rng).square
}

/// Play one turn from `start`, also reporting the number of rolls made.
///
/// At most [`MAX_DOUBLES`] rolls happen: every roll but the last is a double,
/// and the third double ends the turn in jail.
pub fn take_turn_traced(start: Square, rng: &mut Rng) -> TurnOutcome {
    let mut square = start;
    let mut doubles = 0;
    let mut rolls = 0;

    loop {
        let dice = roll(rng);
        rolls += 1;

        if dice.is_double() {
            if doubles == MAX_DOUBLES - 1 {
                return TurnOutcome { square: JAIL, rolls };
            }
            doubles += 1;
        }

        square = advance(square, dice.total());
        square = draw_cards(square, rng);

        // Both jail squares end the turn, doubles or not
        if matches!(SquareKind::of(square), SquareKind::GoToJail | SquareKind::Jail) {
            return TurnOutcome { square: JAIL, rolls };
        }

        if !dice.is_double() {
            return TurnOutcome { square, rolls };
        }
    }
}

/// Apply the Chance and Community Chest redirects, in that order.
fn draw_cards(mut square: Square, rng: &mut Rng) -> Square {
    if matches!(SquareKind::of(square), SquareKind::Chance(_))
        && draw_redirect(rng, CHANCE_REDIRECT_CARDS)
    {
        square = pick(rng, &chance_targets());
    }

    if matches!(SquareKind::of(square), SquareKind::CommunityChest(_))
        && draw_redirect(rng, COMMUNITY_CHEST_REDIRECT_CARDS)
    {
        square = pick(rng, &community_chest_targets(square));
    }

    square
}

/// Draw a card; true if it is one of the `redirect_cards` movement cards.
#[inline]
fn draw_redirect(rng: &mut Rng, redirect_cards: u32) -> bool {
    rng.u32(..CARD_DECK_SIZE) < redirect_cards
}

/// Uniform pick from a non-empty slice. Duplicate entries keep their weight.
#[inline]
fn pick(rng: &mut Rng, options: &[Square]) -> Square {
    options[rng.usize(..options.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        BOARD_SIZE, CHANCE_SQUARES, COMMUNITY_CHEST_SQUARES, GO, GO_TO_JAIL, UTILITY_FAR,
    };

    #[test]
    fn test_turn_stays_on_board() {
        let mut rng = Rng::with_seed(1);
        for start in 0..BOARD_SIZE {
            for _ in 0..200 {
                let end = take_turn(start, &mut rng);
                assert!(end < BOARD_SIZE, "start {start} ended off board at {end}");
            }
        }
    }

    #[test]
    fn test_turn_never_ends_on_go_to_jail() {
        let mut rng = Rng::with_seed(2);
        for start in 0..BOARD_SIZE {
            for _ in 0..200 {
                assert_ne!(take_turn(start, &mut rng), GO_TO_JAIL);
            }
        }
    }

    #[test]
    fn test_roll_count_bounded() {
        let mut rng = Rng::with_seed(3);
        let mut max_rolls = 0;
        for start in 0..BOARD_SIZE {
            for _ in 0..500 {
                let outcome = take_turn_traced(start, &mut rng);
                assert!(outcome.rolls >= 1);
                assert!(outcome.rolls <= MAX_DOUBLES);
                max_rolls = max_rolls.max(outcome.rolls);
            }
        }
        // 20000 turns is plenty to see a double chain
        assert!(max_rolls > 1);
    }

    #[test]
    fn test_same_seed_same_turns() {
        let mut a = Rng::with_seed(42);
        let mut b = Rng::with_seed(42);
        for start in 0..BOARD_SIZE {
            assert_eq!(take_turn_traced(start, &mut a), take_turn_traced(start, &mut b));
        }
    }

    #[test]
    fn test_draw_cards_leaves_plain_squares() {
        let mut rng = Rng::with_seed(5);
        for sq in [1, 3, 15, 39] {
            assert_eq!(draw_cards(sq, &mut rng), sq);
        }
    }

    #[test]
    fn test_chance_redirect_targets() {
        let mut rng = Rng::with_seed(6);
        for &ch in &CHANCE_SQUARES {
            for _ in 0..200 {
                let sq = draw_cards(ch, &mut rng);
                assert!(sq == ch || chance_targets().contains(&sq), "chance {ch} -> {sq}");
            }
        }
    }

    #[test]
    fn test_chance_redirect_rate() {
        let mut rng = Rng::with_seed(8);
        let trials = 16_000;
        let moved = (0..trials)
            .filter(|_| draw_cards(CHANCE_SQUARES[0], &mut rng) != CHANCE_SQUARES[0])
            .count();
        // Expect 1/8 of draws to redirect
        let rate = moved as f64 / trials as f64;
        assert!((rate - 0.125).abs() < 0.02, "chance redirect rate {rate}");
    }

    #[test]
    fn test_community_chest_redirect_rate() {
        let mut rng = Rng::with_seed(77);
        let trials = 8_000;
        for &cc in &COMMUNITY_CHEST_SQUARES {
            // No landing square is in its own target table, so a move means a redirect
            let moved = (0..trials).filter(|_| draw_cards(cc, &mut rng) != cc).count();
            let rate = moved as f64 / trials as f64;
            assert!((rate - 0.625).abs() < 0.02, "community chest {cc} redirect rate {rate}");
        }
    }

    #[test]
    fn test_community_chest_redirect_targets() {
        let mut rng = Rng::with_seed(78);
        for &cc in &COMMUNITY_CHEST_SQUARES {
            let targets = community_chest_targets(cc);
            let mut hits = [0usize; BOARD_SIZE];
            for _ in 0..4000 {
                let sq = draw_cards(cc, &mut rng);
                assert!(sq == cc || targets.contains(&sq), "community chest {cc} -> {sq}");
                hits[sq] += 1;
            }

            let far_utility = hits[UTILITY_FAR] > 0;
            assert_eq!(far_utility, cc == COMMUNITY_CHEST_SQUARES[1], "utility from {cc}");
            assert!(hits[cc - 3] > 0, "go back three from {cc}");
            // The doubled railroad entry is drawn about twice as often as GO
            let railroad = hits[targets[6]];
            assert!(railroad > hits[GO] * 3 / 2, "railroad {railroad} vs GO {}", hits[GO]);
        }
    }

    /// First seed whose opening rolls from `start` are three doubles that never
    /// touch a card or jail square before the third roll.
    fn triple_doubles_seed(start: Square) -> u64 {
        (0..)
            .find(|&seed| {
                let mut replay = Rng::with_seed(seed);
                let mut square = start;
                (1..=MAX_DOUBLES).all(|n| {
                    let dice = roll(&mut replay);
                    if !dice.is_double() {
                        return false;
                    }
                    if n == MAX_DOUBLES {
                        return true;
                    }
                    square = advance(square, dice.total());
                    SquareKind::of(square) == SquareKind::Plain
                })
            })
            .expect("some seed rolls three doubles")
    }

    #[test]
    fn test_third_double_goes_to_jail_without_moving() {
        for start in [0, 11, 31] {
            let seed = triple_doubles_seed(start);
            let outcome = take_turn_traced(start, &mut Rng::with_seed(seed));
            assert_eq!(outcome, TurnOutcome { square: JAIL, rolls: MAX_DOUBLES }, "start {start}");
        }
    }

    #[test]
    fn test_pick_respects_duplicates() {
        let mut rng = Rng::with_seed(9);
        let options = [1, 1, 2];
        let ones = (0..9000).filter(|_| pick(&mut rng, &options) == 1).count();
        let rate = ones as f64 / 9000.0;
        assert!((rate - 2.0 / 3.0).abs() < 0.03, "duplicate weight {rate}");
    }
}
