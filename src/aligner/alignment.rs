use std::ops::Range;

use serde::Serialize;

use crate::aligner::GAP;
use crate::scoring::Score;

/// An optimal pairwise alignment.
///
/// `seq1` and `seq2` have equal length. Removing the gaps from `seq1` gives back the part of
/// the first input covered by the alignment, `seq1_range` (0-based, half-open), and likewise
/// for the second sequence.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlignmentResult {
    pub score: Score,
    pub seq1: String,
    pub seq2: String,
    pub seq1_range: Range<usize>,
    pub seq2_range: Range<usize>,
}

impl AlignmentResult {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.seq1.len()
    }

    /// Only local alignments can be empty, when no pair of symbols scores better than
    /// starting over.
    pub fn is_empty(&self) -> bool {
        self.seq1.is_empty()
    }

    /// Alignment columns as pairs of symbols, [`GAP`] marking insertions and deletions.
    pub fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.seq1.bytes().zip(self.seq2.bytes())
    }

    /// Number of columns aligning two identical symbols.
    pub fn num_matches(&self) -> usize {
        self.columns().filter(|&(a, b)| a == b && a != GAP).count()
    }

    /// Number of columns with a gap in either sequence.
    pub fn num_gaps(&self) -> usize {
        self.columns().filter(|&(a, b)| a == GAP || b == GAP).count()
    }
}
