//! Color banding of lottery numbers.
//!
//! Balls and frequency bars are both colored through [`NumberBand`], so the
//! two views can never disagree about which range a number belongs to.

use std::fmt;

/// Smallest number the draw machine produces.
pub const MIN_NUMBER: u8 = 1;
/// Largest number the draw machine produces.
pub const MAX_NUMBER: u8 = 45;

/// Contiguous, non-overlapping number ranges with a fixed color each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumberBand {
    OneToTen,
    ElevenToTwenty,
    TwentyOneToThirty,
    ThirtyOneToForty,
    FortyOneToFortyFive,
}

/// Upper bound (inclusive) of every band, in ascending order.
const THRESHOLDS: [(u32, NumberBand); 4] = [
    (10, NumberBand::OneToTen),
    (20, NumberBand::ElevenToTwenty),
    (30, NumberBand::TwentyOneToThirty),
    (40, NumberBand::ThirtyOneToForty),
];

impl NumberBand {
    pub const ALL: [NumberBand; 5] = [
        NumberBand::OneToTen,
        NumberBand::ElevenToTwenty,
        NumberBand::TwentyOneToThirty,
        NumberBand::ThirtyOneToForty,
        NumberBand::FortyOneToFortyFive,
    ];

    /// Band of `number`: the first threshold the number does not exceed wins.
    /// Anything above 40 falls into the last band.
    pub fn of(number: u32) -> Self {
        THRESHOLDS
            .iter()
            .find(|(upper, _)| number <= *upper)
            .map(|(_, band)| *band)
            .unwrap_or(NumberBand::FortyOneToFortyFive)
    }

    /// Stable style label, used as the color class of a ball.
    pub fn label(&self) -> &'static str {
        match self {
            NumberBand::OneToTen => "num-1-10",
            NumberBand::ElevenToTwenty => "num-11-20",
            NumberBand::TwentyOneToThirty => "num-21-30",
            NumberBand::ThirtyOneToForty => "num-31-40",
            NumberBand::FortyOneToFortyFive => "num-41-45",
        }
    }

    /// Inclusive range covered by the band.
    pub fn range(&self) -> (u8, u8) {
        match self {
            NumberBand::OneToTen => (1, 10),
            NumberBand::ElevenToTwenty => (11, 20),
            NumberBand::TwentyOneToThirty => (21, 30),
            NumberBand::ThirtyOneToForty => (31, 40),
            NumberBand::FortyOneToFortyFive => (41, 45),
        }
    }

    /// Base color as RGB. Yellow, blue, red, gray, green.
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            NumberBand::OneToTen => [234, 179, 8],
            NumberBand::ElevenToTwenty => [59, 130, 246],
            NumberBand::TwentyOneToThirty => [239, 68, 68],
            NumberBand::ThirtyOneToForty => [107, 114, 128],
            NumberBand::FortyOneToFortyFive => [34, 197, 94],
        }
    }
}

impl fmt::Display for NumberBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether `number` is a valid ball.
pub fn in_domain(number: u32) -> bool {
    (MIN_NUMBER as u32..=MAX_NUMBER as u32).contains(&number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_number_has_exactly_one_band() {
        for n in 1..=45u32 {
            let band = NumberBand::of(n);
            let covering: Vec<_> = NumberBand::ALL
                .iter()
                .filter(|b| {
                    let (lo, hi) = b.range();
                    n >= lo as u32 && n <= hi as u32
                })
                .collect();
            assert_eq!(covering, vec![&band], "number {} banded wrongly", n);
        }
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(NumberBand::of(10), NumberBand::OneToTen);
        assert_eq!(NumberBand::of(11), NumberBand::ElevenToTwenty);
        assert_eq!(NumberBand::of(20), NumberBand::ElevenToTwenty);
        assert_eq!(NumberBand::of(21), NumberBand::TwentyOneToThirty);
        assert_eq!(NumberBand::of(30), NumberBand::TwentyOneToThirty);
        assert_eq!(NumberBand::of(31), NumberBand::ThirtyOneToForty);
        assert_eq!(NumberBand::of(40), NumberBand::ThirtyOneToForty);
        assert_eq!(NumberBand::of(41), NumberBand::FortyOneToFortyFive);
        assert_eq!(NumberBand::of(45), NumberBand::FortyOneToFortyFive);
    }

    #[test]
    fn test_ranges_are_contiguous() {
        let mut expected_lo = MIN_NUMBER;
        for band in NumberBand::ALL {
            let (lo, hi) = band.range();
            assert_eq!(lo, expected_lo);
            expected_lo = hi + 1;
        }
        assert_eq!(expected_lo, MAX_NUMBER + 1);
    }

    #[test]
    fn test_domain_check() {
        assert!(!in_domain(0));
        assert!(in_domain(1));
        assert!(in_domain(45));
        assert!(!in_domain(46));
    }
}
