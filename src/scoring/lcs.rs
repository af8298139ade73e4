use super::{Score, ScoringSchema};

/// Longest common subsequence scoring. Matches score one, mismatches are forbidden and gaps
/// are free, so the optimal global score is the length of the longest common subsequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LcsScoring;

impl ScoringSchema for LcsScoring {
    #[inline(always)]
    fn score(&self, v: u8, w: u8) -> Score {
        if v == w {
            1.0
        } else {
            Score::NEG_INFINITY
        }
    }

    #[inline(always)]
    fn gap_open(&self) -> Score {
        0.0
    }

    #[inline(always)]
    fn gap_continue(&self) -> Score {
        0.0
    }

    #[inline(always)]
    fn initial(&self) -> Score {
        0.0
    }

    // Must stay strictly below every reachable score. Gaps are free, so zero is reachable.
    #[inline(always)]
    fn worst(&self) -> Score {
        Score::NEG_INFINITY
    }
}
