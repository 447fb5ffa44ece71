//! Threshold-bounded approximate local alignment as a DFS strategy.
//!
//! Answers, for a fixed query and scoring scheme: does any substring of the
//! indexed database contain a local alignment to the query scoring at least
//! the threshold? The substring space is explored lazily, one database
//! character at a time; a [`ScoreColumn`] per traversal depth scores the
//! query against the current path, and branch-and-bound pruning cuts every
//! subtree whose column has gone entirely non-positive.
//!
//! Pruning soundness rests on the sign invariants of
//! [`ScoreParams`](crate::scoring::ScoreParams): with a strictly positive
//! match reward and strictly negative penalties, only strictly positive
//! cells propagate, so a column with `max_value == 0` is dead for good.

use crate::column::ScoreColumn;
use crate::error::{Result, SearchError};
use crate::scoring::ScoreParams;
use crate::traits::{DfsStrategy, PathBounds, Verdict};

/// The local-alignment instantiation of the traversal contract.
///
/// Holds the validated scoring constants and a non-owning reference to the
/// query; both are immutable for the duration of a search.
#[derive(Clone, Debug)]
pub struct LocalAli<'a> {
    params: ScoreParams,
    query: &'a [u8],
}

impl<'a> LocalAli<'a> {
    /// Bind `query` to the given parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`] if the query is empty.
    pub fn new(params: ScoreParams, query: &'a [u8]) -> Result<Self> {
        if query.is_empty() {
            return Err(SearchError::InvalidArgument(
                "query must not be empty".into(),
            ));
        }
        Ok(Self { params, query })
    }

    /// The scoring constants of this search.
    pub fn params(&self) -> &ScoreParams {
        &self.params
    }

    /// The bound query.
    pub fn query(&self) -> &[u8] {
        self.query
    }

    /// Query length `L`; node states carry `L + 1` cells.
    pub fn query_len(&self) -> usize {
        self.query.len()
    }
}

impl DfsStrategy for LocalAli<'_> {
    type NodeState = ScoreColumn;

    fn new_node_state(&self) -> ScoreColumn {
        ScoreColumn::new()
    }

    fn init_root(&self, state: &mut ScoreColumn) {
        state.reserve_cells(self.query.len() + 1);
    }

    fn copy_node_state(&self, dst: &mut ScoreColumn, src: &ScoreColumn) {
        dst.copy_from(src);
    }

    fn reset_node_state(&self, state: &mut ScoreColumn) {
        state.reset();
    }

    fn advance(&self, depth: usize, db_char: u8, parent: &ScoreColumn, child: &mut ScoreColumn) {
        if depth > 1 {
            child.extend_from(&self.params, self.query, db_char, parent);
        } else {
            child.extend_first(&self.params, self.query, db_char);
        }
    }

    fn advance_in_place(&self, depth: usize, db_char: u8, state: &mut ScoreColumn) {
        if depth > 1 {
            state.extend_in_place(&self.params, self.query, db_char);
        } else {
            state.extend_first(&self.params, self.query, db_char);
        }
    }

    fn classify(&self, state: &ScoreColumn, depth: usize, bounds: &PathBounds) -> Verdict {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            depth,
            lower = bounds.lower,
            upper = bounds.upper,
            max_value = state.max_value(),
            "classify"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = (depth, bounds);

        if state.is_empty() {
            // The root: no database character consumed yet.
            return Verdict::Continue;
        }
        let max_value = state.max_value();
        if max_value >= self.params.threshold {
            Verdict::Success {
                score: max_value,
                prefix_len: state.best_prefix_len(),
            }
        } else if max_value > 0 {
            Verdict::Continue
        } else {
            Verdict::Prune
        }
    }
}
