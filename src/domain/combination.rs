use std::collections::BTreeSet;

/// Summary figures shown under a predicted combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinationSummary {
    pub sum: u32,
    pub odd: usize,
    pub even: usize,
    /// Arithmetic complexity: distinct pairwise differences minus (len - 1).
    pub ac_value: usize,
}

impl CombinationSummary {
    pub fn of(numbers: &[u8]) -> Self {
        let sum = numbers.iter().map(|&n| n as u32).sum();
        let odd = numbers.iter().filter(|&&n| n % 2 == 1).count();

        let mut differences = BTreeSet::new();
        for (i, a) in numbers.iter().enumerate() {
            for b in &numbers[i + 1..] {
                differences.insert(a.abs_diff(*b));
            }
        }
        let ac_value = differences
            .len()
            .saturating_sub(numbers.len().saturating_sub(1));

        Self {
            sum,
            odd,
            even: numbers.len() - odd,
            ac_value,
        }
    }

    pub fn sum_within(&self, range: (u32, u32)) -> bool {
        self.sum >= range.0 && self.sum <= range.1
    }
}

/// One to five stars, one per 20 confidence points (starting at one).
pub fn star_rating(confidence: f64) -> u8 {
    let stars = (confidence.max(0.0) / 20.0).floor() as u8 + 1;
    stars.min(5)
}
