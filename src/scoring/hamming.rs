use std::cmp::Ordering;

use super::{minimize, Score, ScoringSchema};

/// Hamming distance: counts mismatching positions. Gaps are forbidden and lower scores are
/// better, so sequences of different lengths align with an infinite distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HammingScoring;

impl ScoringSchema for HammingScoring {
    #[inline(always)]
    fn score(&self, v: u8, w: u8) -> Score {
        if v == w {
            0.0
        } else {
            1.0
        }
    }

    #[inline(always)]
    fn gap_open(&self) -> Score {
        self.worst()
    }

    #[inline(always)]
    fn gap_continue(&self) -> Score {
        self.worst()
    }

    #[inline(always)]
    fn initial(&self) -> Score {
        0.0
    }

    #[inline(always)]
    fn worst(&self) -> Score {
        Score::INFINITY
    }

    #[inline(always)]
    fn compare(&self, x: Score, y: Score) -> Ordering {
        minimize(x, y)
    }
}
