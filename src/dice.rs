//! Two-die rolls.

use fastrand::Rng;

use crate::constants::DIE_FACES;

/// The faces shown by one throw of both dice.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Roll {
    pub first: u8,
    pub second: u8,
}

impl Roll {
    /// Number of squares this roll moves the token.
    #[inline]
    pub fn total(self) -> usize {
        (self.first + self.second) as usize
    }

    /// Both dice show the same face.
    #[inline]
    pub fn is_double(self) -> bool {
        self.first == self.second
    }
}

/// Throw two independent dice, each uniform over `1..=DIE_FACES`.
pub fn roll(rng: &mut Rng) -> Roll {
    Roll {
        first: rng.u8(1..=DIE_FACES),
        second: rng.u8(1..=DIE_FACES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_in_range() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..1000 {
            let r = roll(&mut rng);
            assert!((1..=DIE_FACES).contains(&r.first));
            assert!((1..=DIE_FACES).contains(&r.second));
            assert!(r.total() >= 2 && r.total() <= 2 * DIE_FACES as usize);
        }
    }

    #[test]
    fn test_every_face_appears() {
        let mut rng = Rng::with_seed(11);
        let mut seen = [false; DIE_FACES as usize];
        for _ in 0..500 {
            let r = roll(&mut rng);
            seen[(r.first - 1) as usize] = true;
            seen[(r.second - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "faces seen: {seen:?}");
    }

    #[test]
    fn test_double() {
        assert!(Roll { first: 3, second: 3 }.is_double());
        assert!(!Roll { first: 1, second: 4 }.is_double());
        assert_eq!(Roll { first: 1, second: 4 }.total(), 5);
    }
}
