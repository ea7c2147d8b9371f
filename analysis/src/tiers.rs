//! Threshold ladders shared by all premium scorers.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    /// The metric has to be strictly greater than this.
    pub above: f64,
    pub score: f64,
}

pub const fn tier(above: f64, score: f64) -> Tier {
    Tier { above, score }
}

/// Tiers sorted from the highest threshold down. The first tier the value
/// beats wins, values beating none score 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ladder<'t> {
    tiers: &'t [Tier],
}

impl<'t> Ladder<'t> {
    pub const fn new(tiers: &'t [Tier]) -> Self {
        Self { tiers }
    }

    pub fn score(&self, value: f64) -> f64 {
        debug_assert!(
            self.tiers.windows(2).all(|w| w[0].above >= w[1].above),
            "tiers must be sorted descending"
        );

        self.tiers
            .iter()
            .find(|t| value > t.above)
            .map(|t| t.score)
            .unwrap_or(0.0)
    }
}

/// Builds a static [`Ladder`] from `threshold => score` pairs, highest first.
#[macro_export]
macro_rules! ladder {
    ($($above:expr => $score:expr),* $(,)?) => {
        $crate::tiers::Ladder::new(&[$($crate::tiers::Tier { above: $above, score: $score }),*])
    };
}

/// `numerator / max(1, denominator)`.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    numerator / denominator.max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    static LADDER: Ladder<'static> = crate::ladder![1.5 => 10.0, 1.0 => 5.0, 0.5 => 1.0];

    #[test]
    fn strictly_greater() {
        assert_eq!(10.0, LADDER.score(1.6));
        assert_eq!(5.0, LADDER.score(1.5));
        assert_eq!(1.0, LADDER.score(1.0));
        assert_eq!(0.0, LADDER.score(0.5));
        assert_eq!(0.0, LADDER.score(-3.0));
    }

    #[test]
    fn runtime_tiers() {
        let tiers = [tier(60.0, 25.0), tier(30.0, 10.0)];
        assert_eq!(25.0, Ladder::new(&tiers).score(70.0));
        assert_eq!(10.0, Ladder::new(&tiers).score(45.0));
    }

    #[test]
    fn empty_ladder() {
        assert_eq!(0.0, Ladder::new(&[]).score(100.0));
    }

    #[test]
    fn ratio_floors_denominator() {
        assert_eq!(4.0, ratio(4.0, 0.0));
        assert_eq!(2.0, ratio(4.0, 2.0));
    }
}
