use std::str::FromStr;

use rustc_hash::FxHashMap;

use super::{Score, ScoringSchema};
use crate::errors::SeqAlignError;

/// A symbol by symbol substitution score table, e.g., a nucleotide or BLOSUM matrix.
///
/// Parsed from text where the first line holds the column symbols and every further line
/// starts with a row symbol followed by one integer score per column:
///
/// ```text
///    A   T   G   C
/// A  5  -4  -4  -4
/// T -4   5  -4  -4
/// G -4  -4   5  -4
/// C -4  -4  -4   5
/// ```
///
/// Lookups are case-insensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoringMatrix {
    symbols: Vec<u8>,
    scores: FxHashMap<[u8; 2], i32>,
}

impl ScoringMatrix {
    #[inline(always)]
    fn key(row: u8, col: u8) -> [u8; 2] {
        [row.to_ascii_uppercase(), col.to_ascii_uppercase()]
    }

    /// Score for row symbol `v` and column symbol `w`, `None` if the pair is not in the table.
    #[inline]
    pub fn get(&self, v: u8, w: u8) -> Option<i32> {
        self.scores.get(&Self::key(v, w)).copied()
    }

    /// The column header symbols, in the order they were given.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

fn parse_symbol(token: &str, line: usize) -> Result<u8, SeqAlignError> {
    match token.as_bytes() {
        [s] if s.is_ascii() => Ok(*s),
        _ => Err(SeqAlignError::MalformedMatrix {
            line,
            reason: format!("'{token}' is not a single ASCII symbol"),
        }),
    }
}

impl FromStr for ScoringMatrix {
    type Err = SeqAlignError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(ix, line)| (ix + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let Some((header_line, header)) = lines.next() else {
            return Err(SeqAlignError::MalformedMatrix {
                line: 0,
                reason: "empty scoring matrix".to_string(),
            });
        };

        let symbols: Vec<u8> = header
            .split_whitespace()
            .map(|token| parse_symbol(token, header_line))
            .collect::<Result<_, _>>()?;

        let mut scores = FxHashMap::default();
        let mut num_rows = 0;
        for (line, row) in lines {
            let mut cells = row.split_whitespace();

            // Lines are trimmed and non-empty, so there's always a row symbol
            let row_symbol = parse_symbol(cells.next().unwrap_or_default(), line)?;
            let values: Vec<&str> = cells.collect();

            if values.len() != symbols.len() {
                return Err(SeqAlignError::MalformedMatrix {
                    line,
                    reason: format!("expected {} scores, found {}", symbols.len(), values.len()),
                });
            }

            for (&col_symbol, value) in symbols.iter().zip(values) {
                let score = value.parse::<i32>().map_err(|_| SeqAlignError::MalformedMatrix {
                    line,
                    reason: format!("'{value}' is not an integer score"),
                })?;

                scores.insert(Self::key(row_symbol, col_symbol), score);
            }

            num_rows += 1;
        }

        if num_rows == 0 {
            return Err(SeqAlignError::MalformedMatrix {
                line: header_line,
                reason: "scoring matrix has no rows".to_string(),
            });
        }

        Ok(Self { symbols, scores })
    }
}

/// Substitution matrix based scoring with affine gap costs. Symbol pairs missing from the
/// matrix score [`ScoringSchema::worst`].
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixScoring {
    matrix: ScoringMatrix,
    gap_open: Score,
    gap_continue: Score,
}

impl MatrixScoring {
    pub fn new(matrix: ScoringMatrix, gap_open: Score, gap_continue: Score) -> Self {
        Self {
            matrix,
            gap_open,
            gap_continue,
        }
    }

    pub fn from_str_with_gaps(text: &str, gap_open: Score, gap_continue: Score) -> Result<Self, SeqAlignError> {
        Ok(Self::new(text.parse()?, gap_open, gap_continue))
    }

    pub fn matrix(&self) -> &ScoringMatrix {
        &self.matrix
    }
}

impl ScoringSchema for MatrixScoring {
    #[inline(always)]
    fn score(&self, v: u8, w: u8) -> Score {
        self.matrix
            .get(v, w)
            .map(Score::from)
            .unwrap_or_else(|| self.worst())
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
