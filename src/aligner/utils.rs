use std::iter;

use itertools::Itertools;

use crate::aligner::dp::{DpMatrix, Origin};
use crate::aligner::{AlignmentResult, GAP};

/// Three line view of an alignment: the first sequence, a line marking identical (`|`) and
/// mismatching (`*`) columns, and the second sequence.
pub fn print_alignment(aln: &AlignmentResult) -> String {
    let match_line: String = aln
        .columns()
        .map(|(a, b)| {
            if a == GAP || b == GAP {
                ' '
            } else if a == b {
                '|'
            } else {
                '*'
            }
        })
        .collect();

    format!("{}\n{}\n{}", aln.seq1, match_line, aln.seq2)
}

fn origin_symbol(origin: Origin) -> char {
    match origin {
        Origin::None => '$',
        Origin::Match => '\\',
        Origin::InsertOpen | Origin::InsertContinue => '|',
        Origin::DeleteOpen | Origin::DeleteContinue => '-',
    }
}

/// Render one DP layer as a tab separated grid, the first sequence along the columns and
/// the second along the rows. Infinite scores are shown as `#`.
pub fn format_dp_layer(layer: &DpMatrix, seq1: &[u8], seq2: &[u8]) -> String {
    let header = iter::once('0').chain(seq1.iter().map(|&s| s as char)).join("\t");

    let rows = (0..layer.cols()).map(|j| {
        let label = if j == 0 { '0' } else { seq2[j - 1] as char };
        let row = (0..layer.rows())
            .map(|i| {
                let cell = &layer[(i, j)];
                if cell.score.is_infinite() {
                    format!("#{}", origin_symbol(cell.origin))
                } else {
                    format!("{}{}", cell.score, origin_symbol(cell.origin))
                }
            })
            .join("\t");

        format!("{label}\t{row}")
    });

    iter::once(format!("\t{header}"))
        .chain(rows)
        .map(|line| line + "\n")
        .collect()
}
