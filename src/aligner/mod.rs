use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, debug_span, trace};

use crate::errors::SeqAlignError;
use crate::scoring::ScoringSchema;

pub mod alignment;
pub mod dp;
pub mod traceback;
pub mod utils;

pub use alignment::AlignmentResult;
use dp::DpTables;
use traceback::traceback;

/// Symbol used in aligned sequences to mark an insertion or deletion. Never valid in input.
pub const GAP: u8 = b'-';

/// Enum representing the kind of alignment to perform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentMode {
    /// Align both sequences end-to-end
    #[default]
    Global,

    /// Find the best scoring pair of substrings
    Local,
}

impl FromStr for AlignmentMode {
    type Err = SeqAlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "global" => Ok(Self::Global),
            "local" => Ok(Self::Local),
            _ => Err(SeqAlignError::InvalidAlignmentMode(s.to_string())),
        }
    }
}

impl Display for AlignmentMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Local => write!(f, "local"),
        }
    }
}

pub trait PairwiseAligner {
    fn align<S1, S2>(&self, seq1: S1, seq2: S2) -> Result<AlignmentResult, SeqAlignError>
    where
        S1: AsRef<[u8]>,
        S2: AsRef<[u8]>;
}

/// Optimal pairwise aligner with affine gap costs.
///
/// The DP tables are allocated per call and dropped before returning, so a single aligner
/// can be reused, or shared between threads, without alignments affecting each other.
#[derive(Debug, Clone)]
pub struct Aligner<S> {
    schema: S,
    mode: AlignmentMode,
}

impl<S> Aligner<S>
where
    S: ScoringSchema,
{
    /// Create a global aligner
    pub fn new(schema: S) -> Self {
        Self::with_mode(schema, AlignmentMode::default())
    }

    pub fn with_mode(schema: S, mode: AlignmentMode) -> Self {
        Self { schema, mode }
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    fn align_u8(&self, seq1: &[u8], seq2: &[u8]) -> Result<AlignmentResult, SeqAlignError> {
        validate_sequence(1, seq1)?;
        validate_sequence(2, seq2)?;

        let span = debug_span!("align", mode = %self.mode, len1 = seq1.len(), len2 = seq2.len());
        let _enter = span.enter();

        let tables = DpTables::fill(&self.schema, self.mode, seq1, seq2);

        trace!("Match layer:\n{}", utils::format_dp_layer(&tables.matches, seq1, seq2));
        trace!("Insertion layer:\n{}", utils::format_dp_layer(&tables.inserts, seq1, seq2));
        trace!("Deletion layer:\n{}", utils::format_dp_layer(&tables.deletes, seq1, seq2));

        let end = tables.end_point(&self.schema, self.mode);
        let score = tables.matches[end].score;
        let tb = traceback(&tables, seq1, seq2, end, self.mode)?;

        debug!(score, start = ?tb.start, end = ?end, "Alignment done.");

        Ok(AlignmentResult {
            score,
            seq1: tb.aligned_seq1.iter().map(|&s| s as char).collect(),
            seq2: tb.aligned_seq2.iter().map(|&s| s as char).collect(),
            seq1_range: tb.start.0..end.0,
            seq2_range: tb.start.1..end.1,
        })
    }
}

impl<S> PairwiseAligner for Aligner<S>
where
    S: ScoringSchema,
{
    fn align<S1, S2>(&self, seq1: S1, seq2: S2) -> Result<AlignmentResult, SeqAlignError>
    where
        S1: AsRef<[u8]>,
        S2: AsRef<[u8]>,
    {
        self.align_u8(seq1.as_ref(), seq2.as_ref())
    }
}

/// Sequences must be non-empty ASCII without gap symbols.
fn validate_sequence(which: usize, seq: &[u8]) -> Result<(), SeqAlignError> {
    if seq.is_empty() {
        return Err(SeqAlignError::EmptySequence(which));
    }

    if let Some(pos) = seq.iter().position(|&s| !s.is_ascii() || s == GAP) {
        return Err(SeqAlignError::InvalidSymbol { which, pos, symbol: seq[pos] });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::scoring::{HammingScoring, LcsScoring, MatrixScoring, Score, SimpleScoring};

    fn dna() -> SimpleScoring {
        SimpleScoring::new(5.0, -4.0, -5.0, -1.0)
    }

    const NUC: &str = "A   T   G   C\n\
                       A   5  -4  -4  -4\n\
                       T  -4   5  -4  -4\n\
                       G  -4  -4   5  -4\n\
                       C  -4  -4  -4   5\n";

    /// Small xorshift generator, to get reproducible random sequences without extra
    /// dependencies.
    struct XorShift(u64);

    impl XorShift {
        fn next(&mut self) -> u64 {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            self.0
        }

        fn seq(&mut self, max_len: usize) -> Vec<u8> {
            let len = 1 + (self.next() as usize % max_len);
            (0..len).map(|_| b"ACGT"[self.next() as usize % 4]).collect()
        }
    }

    fn lcs_length(a: &[u8], b: &[u8]) -> usize {
        let mut prev = vec![0usize; b.len() + 1];
        for &x in a {
            let mut curr = vec![0usize; b.len() + 1];
            for (j, &y) in b.iter().enumerate() {
                curr[j + 1] = if x == y { prev[j] + 1 } else { prev[j + 1].max(curr[j]) };
            }
            prev = curr;
        }

        prev[b.len()]
    }

    fn ungapped(s: &str) -> Vec<u8> {
        s.bytes().filter(|&c| c != GAP).collect()
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("global".parse::<AlignmentMode>().unwrap(), AlignmentMode::Global);
        assert_eq!("LOCAL".parse::<AlignmentMode>().unwrap(), AlignmentMode::Local);
        assert!(matches!(
            "semiglobal".parse::<AlignmentMode>(),
            Err(SeqAlignError::InvalidAlignmentMode(ref m)) if m == "semiglobal"
        ));
        assert_eq!(AlignmentMode::default(), AlignmentMode::Global);
        assert_eq!(AlignmentMode::Local.to_string(), "local");
    }

    #[test]
    fn test_global_alignments() {
        let aligner = Aligner::new(dna());
        assert_eq!(aligner.mode(), AlignmentMode::Global);

        let aln = aligner.align("ATAT", "TATA").unwrap();
        assert_eq!(aln.score, 3.0);
        assert_eq!(aln.seq1, "ATAT-");
        assert_eq!(aln.seq2, "-TATA");
        assert_eq!(aln.seq1_range, 0..4);
        assert_eq!(aln.seq2_range, 0..4);

        let aln = aligner.align("AAAAAAA", "TTTTTTT").unwrap();
        assert_eq!(aln.score, -24.0);
        assert_eq!(aln.seq1, "AAAAAAA-------");
        assert_eq!(aln.seq2, "-------TTTTTTT");
    }

    #[test]
    fn test_local_alignment() {
        let aligner = Aligner::with_mode(dna(), AlignmentMode::Local);

        let aln = aligner.align("ACGTACGTACGT", "AGCTAGCTAGCT").unwrap();
        assert_eq!(aln.score, 13.0);
        assert_eq!(aln.seq1, "TACG-TA");
        assert_eq!(aln.seq2, "TA-GCTA");
        assert_eq!(aln.seq1_range, 3..9);
        assert_eq!(aln.seq2_range, 3..9);
    }

    #[test]
    fn test_local_never_starts_with_border_gap() {
        // Without clamping the border, M[0][1] = -1 and "-A"/"CA" would score 4
        let aligner = Aligner::with_mode(SimpleScoring::new(5.0, -4.0, 0.0, -1.0), AlignmentMode::Local);

        let aln = aligner.align("A", "CA").unwrap();
        assert_eq!(aln.score, 5.0);
        assert_eq!(aln.seq1, "A");
        assert_eq!(aln.seq2, "A");
        assert_eq!(aln.seq1_range, 0..1);
        assert_eq!(aln.seq2_range, 1..2);
    }

    #[test]
    fn test_local_without_positive_pair_is_empty() {
        let aligner = Aligner::with_mode(dna(), AlignmentMode::Local);

        let aln = aligner.align("AAAA", "CCC").unwrap();
        assert_eq!(aln.score, 0.0);
        assert!(aln.is_empty());
        assert_eq!(aln.seq2, "");
        assert_eq!(aln.seq1_range, 0..0);
    }

    #[test]
    fn test_lcs_alignment() {
        let aligner = Aligner::new(LcsScoring);

        let aln = aligner.align("ATCGTAC", "ATGTTAT").unwrap();
        assert_eq!(aln.score, 5.0);
        assert_eq!(aln.seq1, "ATCG-TAC-");
        assert_eq!(aln.seq2, "AT-GTTA-T");
    }

    #[test]
    fn test_matrix_alignment_matches_simple_scoring() {
        let matrix = MatrixScoring::from_str_with_gaps(NUC, -5.0, -1.0).unwrap();
        let by_matrix = Aligner::new(matrix);
        let by_identity = Aligner::new(dna());

        for (a, b) in [("ATAT", "TATA"), ("AAAAAAA", "TTTTTTT"), ("GATTACA", "gattaca")] {
            let expected = by_identity.align(a.to_ascii_uppercase(), b.to_ascii_uppercase()).unwrap();
            let aln = by_matrix.align(a, b).unwrap();
            assert_eq!(aln.score, expected.score);
            assert_eq!(aln.len(), expected.len());
        }
    }

    #[test]
    fn test_unknown_matrix_symbols_degrade() {
        let matrix = MatrixScoring::from_str_with_gaps(NUC, -5.0, -1.0).unwrap();
        let aligner = Aligner::new(matrix);

        // N is not in the matrix, so it can only be aligned against a gap
        let aln = aligner.align("ACNGT", "ACGT").unwrap();
        assert_eq!(aln.score, 20.0 - 6.0);
        assert_eq!(aln.seq1, "ACNGT");
        assert_eq!(aln.seq2, "AC-GT");

        let aln = aligner.align("N", "A").unwrap();
        assert_eq!(aln.score, -12.0);
        assert_eq!(aln.seq1.len(), aln.seq2.len());
    }

    #[test]
    fn test_hamming_alignment() {
        let aligner = Aligner::new(HammingScoring);

        let aln = aligner.align("GATTACA", "GACTATA").unwrap();
        assert_eq!(aln.score, 2.0);
        assert_eq!(aln.seq1, "GATTACA");
        assert_eq!(aln.seq2, "GACTATA");

        let aln = aligner.align("ACGT", "ACG").unwrap();
        assert_eq!(aln.score, Score::INFINITY);
        assert_eq!(aln.seq1.len(), aln.seq2.len());
    }

    #[test]
    fn test_input_errors() {
        let aligner = Aligner::new(dna());

        assert!(matches!(aligner.align("", "ACGT"), Err(SeqAlignError::EmptySequence(1))));
        assert!(matches!(aligner.align("ACGT", ""), Err(SeqAlignError::EmptySequence(2))));
        assert!(matches!(
            aligner.align("AC-T", "ACGT"),
            Err(SeqAlignError::InvalidSymbol { which: 1, pos: 2, symbol: b'-' })
        ));
        assert!(matches!(
            aligner.align("ACGT", "AÇGT"),
            Err(SeqAlignError::InvalidSymbol { which: 2, pos: 1, .. })
        ));
    }

    #[test]
    fn test_global_properties() {
        let mut rng = XorShift(0x5eed_1234_abcd_0001);
        let schema = dna();
        let global = Aligner::new(&schema);
        let local = Aligner::with_mode(&schema, AlignmentMode::Local);
        let lcs = Aligner::new(LcsScoring);

        for _ in 0..300 {
            let a = rng.seq(12);
            let b = rng.seq(12);

            let g = global.align(&a, &b).unwrap();
            assert_eq!(g.seq1.len(), g.seq2.len());
            assert_eq!(ungapped(&g.seq1), a);
            assert_eq!(ungapped(&g.seq2), b);
            assert!(g.columns().all(|(x, y)| !(x == GAP && y == GAP)));

            // Swapping the inputs of a symmetric schema gives the same score
            let swapped = global.align(&b, &a).unwrap();
            assert_eq!(swapped.score, g.score);

            let l = local.align(&a, &b).unwrap();
            assert!(l.score >= schema.initial());
            assert!(l.score >= g.score);
            assert_eq!(l.seq1.len(), l.seq2.len());
            assert_eq!(ungapped(&l.seq1), &a[l.seq1_range.clone()]);
            assert_eq!(ungapped(&l.seq2), &b[l.seq2_range.clone()]);

            let c = lcs.align(&a, &b).unwrap();
            assert_eq!(c.score, lcs_length(&a, &b) as Score);
            assert_eq!(c.num_matches(), lcs_length(&a, &b));
        }
    }

    #[test]
    fn test_gap_only_growth_never_improves() {
        let aligner = Aligner::new(dna());
        let mut prev = aligner.align("A", "A").unwrap().score;

        for n in 2..10 {
            let seq1 = "A".repeat(n);
            let score = aligner.align(&seq1, "A").unwrap().score;
            assert!(aligner.schema().compare(score, prev).is_le());
            prev = score;
        }
    }

    #[test]
    fn test_deterministic_and_shareable() {
        let aligner = Aligner::with_mode(dna(), AlignmentMode::Local);
        let expected = aligner.align("ACGTACGTACGT", "AGCTAGCTAGCT").unwrap();

        let results: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| aligner.align("ACGTACGTACGT", "AGCTAGCTAGCT").unwrap()))
                .collect();

            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for result in results {
            assert_eq!(result, expected);
        }

        // Interleaved calls with other inputs don't leak state
        let _ = aligner.align("TTTT", "TTTT").unwrap();
        assert_eq!(aligner.align("ACGTACGTACGT", "AGCTAGCTAGCT").unwrap(), expected);
    }
}
