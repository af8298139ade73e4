use tracing::trace;

use crate::aligner::dp::{DpTables, Origin};
use crate::aligner::{AlignmentMode, GAP};
use crate::errors::SeqAlignError;

/// The DP layer the traceback currently walks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Match,
    Insert,
    Delete,
}

/// Output of a traceback: the gapped sequences in alignment order, and the DP cell where
/// the alignment starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traceback {
    pub aligned_seq1: Vec<u8>,
    pub aligned_seq2: Vec<u8>,
    pub start: (usize, usize),
}

/// Walk the predecessor links from `end` back to the alignment start.
///
/// Global alignments trace back to the origin. Local alignments stop at the first match
/// layer cell without predecessor, i.e., where the alignment restarted for free.
pub fn traceback(
    tables: &DpTables,
    seq1: &[u8],
    seq2: &[u8],
    end: (usize, usize),
    mode: AlignmentMode,
) -> Result<Traceback, SeqAlignError> {
    let (mut i, mut j) = end;
    let mut layer = Layer::Match;

    let mut aligned_seq1 = Vec::with_capacity(i + j);
    let mut aligned_seq2 = Vec::with_capacity(i + j);

    while (i, j) != (0, 0) {
        let origin = match layer {
            Layer::Match => tables.matches[(i, j)].origin,
            Layer::Insert => tables.inserts[(i, j)].origin,
            Layer::Delete => tables.deletes[(i, j)].origin,
        };

        match origin {
            Origin::None => {
                if layer == Layer::Match && mode == AlignmentMode::Local {
                    break;
                }

                return Err(SeqAlignError::TracebackError { i, j });
            },
            Origin::Match => {
                aligned_seq1.push(seq1[i - 1]);
                aligned_seq2.push(seq2[j - 1]);
                i -= 1;
                j -= 1;
                layer = Layer::Match;
            },
            Origin::InsertOpen | Origin::InsertContinue => {
                aligned_seq1.push(GAP);
                aligned_seq2.push(seq2[j - 1]);
                j -= 1;
                layer = if origin == Origin::InsertOpen { Layer::Match } else { Layer::Insert };
            },
            Origin::DeleteOpen | Origin::DeleteContinue => {
                aligned_seq1.push(seq1[i - 1]);
                aligned_seq2.push(GAP);
                i -= 1;
                layer = if origin == Origin::DeleteOpen { Layer::Match } else { Layer::Delete };
            },
        }
    }

    trace!(start = ?(i, j), end = ?end, columns = aligned_seq1.len(), "traceback done");

    aligned_seq1.reverse();
    aligned_seq2.reverse();

    Ok(Traceback {
        aligned_seq1,
        aligned_seq2,
        start: (i, j),
    })
}
