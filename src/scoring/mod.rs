//! Scoring schemas: the policy deciding what aligning two symbols, opening a gap and
//! continuing a gap is worth, and in which direction scores improve.

use std::cmp::Ordering;

pub mod hamming;
pub mod lcs;
pub mod matrix;
pub mod simple;

pub use hamming::HammingScoring;
pub use lcs::LcsScoring;
pub use matrix::{MatrixScoring, ScoringMatrix};
pub use simple::SimpleScoring;

/// Numeric type of all scores. Floating point, such that forbidden transitions can be
/// represented by an infinite score that survives additions.
pub type Score = f64;

/// Scoring policy used by the aligner.
///
/// Opening a gap costs `gap_open() + gap_continue()`, every further gap position costs
/// `gap_continue()`. A linear gap model is the special case `gap_open() == 0`.
///
/// All score comparisons go through [`ScoringSchema::compare`], so schemas minimizing a
/// distance share the same DP as schemas maximizing a similarity.
pub trait ScoringSchema {
    /// Score of aligning symbol `v` of the first sequence against symbol `w` of the second.
    fn score(&self, v: u8, w: u8) -> Score;

    fn gap_open(&self) -> Score;
    fn gap_continue(&self) -> Score;

    /// Score at the DP origin, and the floor a local alignment can restart from.
    fn initial(&self) -> Score;

    /// Sentinel for impossible states, worse than any reachable score.
    fn worst(&self) -> Score;

    /// Orders two scores by favorability: `Greater` means `x` is more favorable than `y`.
    #[inline(always)]
    fn compare(&self, x: Score, y: Score) -> Ordering {
        maximize(x, y)
    }

    /// The more favorable of two scores. The first argument wins ties.
    #[inline(always)]
    fn best(&self, x: Score, y: Score) -> Score {
        if self.compare(y, x) == Ordering::Greater {
            y
        } else {
            x
        }
    }
}

impl<T: ScoringSchema + ?Sized> ScoringSchema for &T {
    #[inline(always)]
    fn score(&self, v: u8, w: u8) -> Score {
        (**self).score(v, w)
    }

    #[inline(always)]
    fn gap_open(&self) -> Score {
        (**self).gap_open()
    }

    #[inline(always)]
    fn gap_continue(&self) -> Score {
        (**self).gap_continue()
    }

    #[inline(always)]
    fn initial(&self) -> Score {
        (**self).initial()
    }

    #[inline(always)]
    fn worst(&self) -> Score {
        (**self).worst()
    }

    #[inline(always)]
    fn compare(&self, x: Score, y: Score) -> Ordering {
        (**self).compare(x, y)
    }
}

impl ScoringSchema for Box<dyn ScoringSchema + Send + Sync> {
    #[inline(always)]
    fn score(&self, v: u8, w: u8) -> Score {
        self.as_ref().score(v, w)
    }

    #[inline(always)]
    fn gap_open(&self) -> Score {
        self.as_ref().gap_open()
    }

    #[inline(always)]
    fn gap_continue(&self) -> Score {
        self.as_ref().gap_continue()
    }

    #[inline(always)]
    fn initial(&self) -> Score {
        self.as_ref().initial()
    }

    #[inline(always)]
    fn worst(&self) -> Score {
        self.as_ref().worst()
    }

    #[inline(always)]
    fn compare(&self, x: Score, y: Score) -> Ordering {
        self.as_ref().compare(x, y)
    }
}

/// Higher scores are better. NaN compares equal to everything.
#[inline(always)]
pub fn maximize(x: Score, y: Score) -> Ordering {
    x.partial_cmp(&y).unwrap_or(Ordering::Equal)
}

/// Lower scores are better. NaN compares equal to everything.
#[inline(always)]
pub fn minimize(x: Score, y: Score) -> Ordering {
    maximize(y, x)
}
