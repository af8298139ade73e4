use std::cmp::Ordering;
use std::ops::{Index, IndexMut};

use crate::aligner::AlignmentMode;
use crate::scoring::{Score, ScoringSchema};

/// Which transition produced the score stored in a DP cell.
///
/// Cells of the match layer that take over the value of the insertion or deletion layer
/// store that cell's origin, such that the traceback knows whether the gap was opened right
/// there or continues further.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Origin {
    /// No predecessor: the DP origin, an unreachable state, or a local alignment restart
    #[default]
    None,

    /// Diagonal step, (mis)matching a symbol of each sequence
    Match,

    InsertOpen,
    InsertContinue,
    DeleteOpen,
    DeleteContinue,
}

impl Origin {
    pub fn is_insertion(&self) -> bool {
        matches!(self, Self::InsertOpen | Self::InsertContinue)
    }

    pub fn is_deletion(&self) -> bool {
        matches!(self, Self::DeleteOpen | Self::DeleteContinue)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cell {
    pub score: Score,
    pub origin: Origin,
}

impl Cell {
    #[inline(always)]
    pub fn new(score: Score, origin: Origin) -> Self {
        Self { score, origin }
    }

    #[inline(always)]
    pub fn unreachable<S: ScoringSchema>(schema: &S) -> Self {
        Self::new(schema.worst(), Origin::None)
    }
}

/// A dense (len1 + 1) x (len2 + 1) matrix, stored row-major.
#[derive(Clone, Debug)]
pub struct DpMatrix {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl DpMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![Cell::default(); rows * cols],
            rows,
            cols,
        }
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Iterate over all cells in row-major order, together with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(ix, cell)| ((ix / self.cols, ix % self.cols), cell))
    }
}

impl Index<(usize, usize)> for DpMatrix {
    type Output = Cell;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.cells[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for DpMatrix {
    #[inline(always)]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.cells[i * self.cols + j]
    }
}

/// The three synchronized DP layers of a gap-affine alignment.
///
/// Row `i` corresponds to the prefix of length `i` of the first sequence, column `j` to the
/// prefix of length `j` of the second sequence.
#[derive(Clone, Debug)]
pub struct DpTables {
    /// Best alignment of the prefixes, ending in any state
    pub matches: DpMatrix,

    /// Best alignment ending with a gap in the first sequence
    pub inserts: DpMatrix,

    /// Best alignment ending with a gap in the second sequence
    pub deletes: DpMatrix,
}

impl DpTables {
    pub fn fill<S: ScoringSchema>(schema: &S, mode: AlignmentMode, seq1: &[u8], seq2: &[u8]) -> Self {
        let rows = seq1.len() + 1;
        let cols = seq2.len() + 1;

        let mut tables = Self {
            matches: DpMatrix::new(rows, cols),
            inserts: DpMatrix::new(rows, cols),
            deletes: DpMatrix::new(rows, cols),
        };

        for i in 0..rows {
            for j in 0..cols {
                match (i, j) {
                    (0, 0) => {
                        tables.matches[(0, 0)] = Cell::new(schema.initial(), Origin::None);
                        tables.inserts[(0, 0)] = Cell::unreachable(schema);
                        tables.deletes[(0, 0)] = Cell::unreachable(schema);
                    },
                    (0, _) => {
                        // Only a run of insertions reaches the left edge
                        let ins = gap_step(schema, tables.inserts[(0, j - 1)], tables.matches[(0, j - 1)], true);
                        tables.inserts[(0, j)] = ins;
                        tables.matches[(0, j)] = Cell::new(edge_gap_score(schema, j), ins.origin);
                        tables.deletes[(0, j)] = Cell::unreachable(schema);
                    },
                    (_, 0) => {
                        let del = gap_step(schema, tables.deletes[(i - 1, 0)], tables.matches[(i - 1, 0)], false);
                        tables.deletes[(i, 0)] = del;
                        tables.matches[(i, 0)] = Cell::new(edge_gap_score(schema, i), del.origin);
                        tables.inserts[(i, 0)] = Cell::unreachable(schema);
                    },
                    _ => {
                        let ins = gap_step(schema, tables.inserts[(i, j - 1)], tables.matches[(i, j - 1)], true);
                        let del = gap_step(schema, tables.deletes[(i - 1, j)], tables.matches[(i - 1, j)], false);

                        // Precedence on ties: match, then insertion, then deletion
                        let mut best = Cell::new(
                            tables.matches[(i - 1, j - 1)].score + schema.score(seq1[i - 1], seq2[j - 1]),
                            Origin::Match,
                        );

                        if schema.compare(ins.score, best.score) == Ordering::Greater {
                            best = ins;
                        }

                        if schema.compare(del.score, best.score) == Ordering::Greater {
                            best = del;
                        }

                        tables.inserts[(i, j)] = ins;
                        tables.deletes[(i, j)] = del;
                        tables.matches[(i, j)] = best;
                    },
                }

                if mode == AlignmentMode::Local
                    && (i, j) != (0, 0)
                    && schema.compare(tables.matches[(i, j)].score, schema.initial()) == Ordering::Less
                {
                    tables.matches[(i, j)] = Cell::new(schema.initial(), Origin::None);
                }
            }
        }

        tables
    }

    pub fn rows(&self) -> usize {
        self.matches.rows()
    }

    pub fn cols(&self) -> usize {
        self.matches.cols()
    }

    /// Cell where the traceback starts.
    ///
    /// Global alignments end in the bottom right corner. Local alignments end in the most
    /// favorable cell of the match layer, the first one in row-major order on ties.
    pub fn end_point<S: ScoringSchema>(&self, schema: &S, mode: AlignmentMode) -> (usize, usize) {
        match mode {
            AlignmentMode::Global => (self.rows() - 1, self.cols() - 1),
            AlignmentMode::Local => {
                let mut best = ((0, 0), self.matches[(0, 0)].score);
                for (pos, cell) in self.matches.iter() {
                    if schema.compare(cell.score, best.1) == Ordering::Greater {
                        best = (pos, cell.score);
                    }
                }

                best.0
            },
        }
    }
}

/// Score of a gap run of `length` along the DP border: the open cost once, the continue
/// cost for every position including the first.
#[inline(always)]
fn edge_gap_score<S: ScoringSchema>(schema: &S, length: usize) -> Score {
    schema.gap_open() + length as Score * schema.gap_continue()
}

/// Best way to end in a gap layer: continue the gap of the previous cell in that layer, or
/// open a new one from the previous match layer cell. Continuing wins ties.
#[inline(always)]
fn gap_step<S: ScoringSchema>(schema: &S, gap_prev: Cell, match_prev: Cell, insertion: bool) -> Cell {
    let continue_score = gap_prev.score + schema.gap_continue();
    let open_score = match_prev.score + schema.gap_open() + schema.gap_continue();

    let (open, cont) = if insertion {
        (Origin::InsertOpen, Origin::InsertContinue)
    } else {
        (Origin::DeleteOpen, Origin::DeleteContinue)
    };

    if schema.compare(continue_score, open_score) == Ordering::Less {
        Cell::new(open_score, open)
    } else {
        Cell::new(continue_score, cont)
    }
}
