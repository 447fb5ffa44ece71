//! One column of the local-alignment score matrix.
//!
//! A [`ScoreColumn`] holds, for every query offset `0..=L`, the best score of
//! an alignment ending at (current database path position, query offset).
//! Columns are extended incrementally as a database path lengthens: the
//! column at depth `d` is a function of the column at depth `d-1` and the
//! database character consumed at step `d`.
//!
//! Scores are never clamped at zero. A cell only feeds the recurrence when
//! it is strictly positive ([`CellScore::positive`]); everything else is
//! dead and stays dead, which is what makes branch-and-bound pruning sound.

use crate::scoring::ScoreParams;

/// Score of one alignment state, or the absence of any viable alignment
/// through that state.
///
/// This replaces the usual "large negative sentinel" encoding: arithmetic on
/// an [`Unreachable`](CellScore::Unreachable) value is impossible by
/// construction rather than avoided by convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellScore {
    /// No viable alignment passes through this cell.
    Unreachable,
    Score(i64),
}

impl CellScore {
    /// The score, if it is strictly positive. This is the only gate through
    /// which a cell may seed a deeper extension.
    #[inline]
    pub fn positive(self) -> Option<i64> {
        match self {
            CellScore::Score(v) if v > 0 => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn max(self, other: CellScore) -> CellScore {
        match (self, other) {
            (CellScore::Unreachable, o) => o,
            (s, CellScore::Unreachable) => s,
            (CellScore::Score(a), CellScore::Score(b)) => CellScore::Score(a.max(b)),
        }
    }
}

/// One DP cell: best scores of alignments ending here via a substitution
/// (`rep`), an insertion of the database character (`ins`), or a deletion of
/// the query character (`del`). `best` caches `max(rep, ins, del)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub rep: CellScore,
    pub ins: CellScore,
    pub del: CellScore,
    pub best: CellScore,
}

impl Cell {
    pub(crate) const UNREACHABLE: Cell = Cell {
        rep: CellScore::Unreachable,
        ins: CellScore::Unreachable,
        del: CellScore::Unreachable,
        best: CellScore::Unreachable,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Cell::UNREACHABLE
    }
}

/// Extend or open a gap from a predecessor cell.
///
/// The gap chain continues from `gap` when that score is positive; a fresh
/// gap opens from `best` when that is positive; both options compete when
/// both are viable.
#[inline]
fn gap_step(gap: CellScore, best: CellScore, params: &ScoreParams) -> CellScore {
    let open = params.gap_open + params.gap_extend;
    match (gap.positive(), best.positive()) {
        (Some(g), Some(b)) => CellScore::Score((g + params.gap_extend).max(b + open)),
        (Some(g), None) => CellScore::Score(g + params.gap_extend),
        (None, Some(b)) => CellScore::Score(b + open),
        (None, None) => CellScore::Unreachable,
    }
}

/// A column of `L+1` cells plus column-wide bookkeeping.
///
/// `max_value` is the largest positive `best` anywhere in the column (zero if
/// there is none) and `best_prefix_len` the query offset achieving it;
/// together they describe the best local alignment ending at the current
/// database path position.
///
/// A freshly created column is *empty* (no cells): that is the root state of
/// a traversal, before any database character has been consumed. Backing
/// storage grows lazily to `L+1` cells and is never shrunk, so a column can
/// be recycled across an entire search without reallocating.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreColumn {
    cells: Vec<Cell>,
    max_value: u64,
    best_prefix_len: usize,
}

impl ScoreColumn {
    /// An empty column with no cells.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while no database character has been consumed along this path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Best positive `best` seen anywhere in the column, or 0.
    #[inline]
    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    /// Query offset at which [`max_value`](Self::max_value) is achieved.
    #[inline]
    pub fn best_prefix_len(&self) -> usize {
        self.best_prefix_len
    }

    /// The active cells, indexed by query offset.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Grow the backing storage so that `n` cells fit without reallocation.
    pub fn reserve_cells(&mut self, n: usize) {
        let additional = n.saturating_sub(self.cells.len());
        self.cells.reserve(additional);
    }

    /// Return the column to the empty condition, keeping its allocation.
    /// Idempotent.
    pub fn reset(&mut self) {
        self.cells.clear();
        self.max_value = 0;
        self.best_prefix_len = 0;
    }

    /// Deep-copy the active cells and bookkeeping of `src`, growing the
    /// destination first if needed. The two columns never share storage.
    pub fn copy_from(&mut self, src: &ScoreColumn) {
        self.cells.clear();
        self.cells.extend_from_slice(&src.cells);
        self.max_value = src.max_value;
        self.best_prefix_len = src.best_prefix_len;
    }

    /// Make exactly `n` cells active. Capacity only ever grows.
    fn activate(&mut self, n: usize) {
        self.cells.clear();
        self.cells.resize(n, Cell::UNREACHABLE);
        self.max_value = 0;
        self.best_prefix_len = 0;
    }

    #[inline]
    fn note_best(&mut self, prefix_len: usize, best: CellScore) {
        if let Some(v) = best.positive() {
            if v as u64 > self.max_value {
                self.max_value = v as u64;
                self.best_prefix_len = prefix_len;
            }
        }
    }

    /// The restricted depth-1 extension: the very first database character
    /// of a path.
    ///
    /// No insertion gap can have been open yet and there is no deletion
    /// chain, so each cell `i >= 1` carries only a substitution seeded
    /// directly from the scoring function, and cell 0 only a freshly opened
    /// insertion. The opened insertion does not feed `best` at cell 0: no
    /// alignment has consumed a query symbol there yet.
    pub fn extend_first(&mut self, params: &ScoreParams, query: &[u8], db_char: u8) {
        let qlen = query.len();
        self.activate(qlen + 1);
        self.cells[0] = Cell {
            rep: CellScore::Unreachable,
            ins: CellScore::Score(params.gap_open + params.gap_extend),
            del: CellScore::Unreachable,
            best: CellScore::Unreachable,
        };
        for i in 1..=qlen {
            let rep = CellScore::Score(params.subst_score(db_char, query[i - 1]));
            self.cells[i] = Cell {
                rep,
                ins: CellScore::Unreachable,
                del: CellScore::Unreachable,
                best: rep,
            };
            self.note_best(i, rep);
        }
    }

    /// Non-destructive extension: compute the column at depth `d` into
    /// `self` from the `parent` column at depth `d-1` and the database
    /// character consumed at step `d`. Used at branch points, where the
    /// parent must survive for its other children.
    ///
    /// # Panics
    ///
    /// Panics if the parent column has fewer than `L+1` active cells; the
    /// engine grows capacity proactively, so this indicates a programming
    /// error, not a runtime condition.
    pub fn extend_from(
        &mut self,
        params: &ScoreParams,
        query: &[u8],
        db_char: u8,
        parent: &ScoreColumn,
    ) {
        let qlen = query.len();
        assert!(
            parent.cells.len() >= qlen + 1,
            "parent column holds {} cells, need {}",
            parent.cells.len(),
            qlen + 1
        );
        self.activate(qlen + 1);

        let ins0 = gap_step(parent.cells[0].ins, parent.cells[0].best, params);
        self.cells[0] = Cell {
            rep: CellScore::Unreachable,
            ins: ins0,
            del: CellScore::Unreachable,
            best: ins0,
        };
        self.note_best(0, ins0);

        for i in 1..=qlen {
            let rep = match parent.cells[i - 1].best.positive() {
                Some(b) => CellScore::Score(b + params.subst_score(db_char, query[i - 1])),
                None => CellScore::Unreachable,
            };
            let ins = gap_step(parent.cells[i].ins, parent.cells[i].best, params);
            // Deletions consume database characters without consuming the
            // query symbol placed by this step: source is the current
            // column, one query position back.
            let west = self.cells[i - 1];
            let del = gap_step(west.del, west.best, params);
            let best = rep.max(ins).max(del);
            self.cells[i] = Cell { rep, ins, del, best };
            self.note_best(i, best);
        }
    }

    /// Destructive extension: the same recurrence as
    /// [`extend_from`](Self::extend_from), overwriting `self` in place.
    /// Used on linear chains of single-child nodes to avoid a copy.
    ///
    /// Walks the column left to right keeping only the north-west and west
    /// predecessor cells in locals; valid because each cell depends solely
    /// on the previous column at the same/previous offset and the current
    /// column at the previous offset. Results are bit-identical to the
    /// non-destructive variant.
    ///
    /// # Panics
    ///
    /// Panics if the column has fewer than `L+1` active cells (programming
    /// error, as for [`extend_from`](Self::extend_from)).
    pub fn extend_in_place(&mut self, params: &ScoreParams, query: &[u8], db_char: u8) {
        let qlen = query.len();
        assert!(
            self.cells.len() >= qlen + 1,
            "column holds {} cells, need {}",
            self.cells.len(),
            qlen + 1
        );

        let mut nw = self.cells[0];
        let ins0 = gap_step(nw.ins, nw.best, params);
        self.cells[0] = Cell {
            rep: CellScore::Unreachable,
            ins: ins0,
            del: CellScore::Unreachable,
            best: ins0,
        };
        self.max_value = 0;
        self.best_prefix_len = 0;
        self.note_best(0, ins0);

        for i in 1..=qlen {
            let west = self.cells[i];
            let rep = match nw.best.positive() {
                Some(b) => CellScore::Score(b + params.subst_score(db_char, query[i - 1])),
                None => CellScore::Unreachable,
            };
            let ins = gap_step(west.ins, west.best, params);
            let prev = self.cells[i - 1];
            let del = gap_step(prev.del, prev.best, params);
            let best = rep.max(ins).max(del);
            self.cells[i] = Cell { rep, ins, del, best };
            self.note_best(i, best);
            nw = west;
        }
    }
}
