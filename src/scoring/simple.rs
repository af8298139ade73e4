use super::{Score, ScoringSchema};

/// Identity scoring: one score for equal symbols, another for different ones, with
/// affine gap costs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleScoring {
    match_score: Score,
    mismatch_score: Score,
    gap_open: Score,
    gap_continue: Score,
}

impl SimpleScoring {
    pub fn new(match_score: Score, mismatch_score: Score, gap_open: Score, gap_continue: Score) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_open,
            gap_continue,
        }
    }

    pub fn match_score(&self) -> Score {
        self.match_score
    }

    pub fn mismatch_score(&self) -> Score {
        self.mismatch_score
    }
}

impl Default for SimpleScoring {
    fn default() -> Self {
        Self::new(1.0, -1.0, 0.0, -1.0)
    }
}

impl ScoringSchema for SimpleScoring {
    #[inline(always)]
    fn score(&self, v: u8, w: u8) -> Score {
        if v == w {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    #[inline(always)]
    fn gap_open(&self) -> Score {
        self.gap_open
    }

    #[inline(always)]
    fn gap_continue(&self) -> Score {
        self.gap_continue
    }

    #[inline(always)]
    fn initial(&self) -> Score {
        0.0
    }

    #[inline(always)]
    fn worst(&self) -> Score {
        Score::NEG_INFINITY
    }
}
