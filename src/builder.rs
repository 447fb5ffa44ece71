//! Builder for the local-alignment strategy.

use crate::error::Result;
use crate::scoring::ScoreParams;
use crate::strategies::local::LocalAli;

/// Collects scoring parameters for a [`LocalAli`] search and validates them
/// once at [`build`](LocalAliBuilder::build).
///
/// Defaults: `match = 1`, `mismatch = -1`, `gap_open = -2`,
/// `gap_extend = -1`, `threshold = 0` (report every positive-scoring node)
/// and an ASCII alphabet of 128 symbols.
pub struct LocalAliBuilder<'a> {
    query: &'a [u8],
    match_score: i64,
    mismatch_score: i64,
    gap_open: i64,
    gap_extend: i64,
    threshold: u64,
    alphabet_size: u32,
}

impl<'a> LocalAliBuilder<'a> {
    /// Start building a search for `query`.
    pub fn new(query: &'a [u8]) -> Self {
        Self {
            query,
            match_score: 1,
            mismatch_score: -1,
            gap_open: -2,
            gap_extend: -1,
            threshold: 0,
            alphabet_size: 128,
        }
    }

    /// Set the match reward and mismatch penalty.
    pub fn with_scores(mut self, match_score: i64, mismatch_score: i64) -> Self {
        self.match_score = match_score;
        self.mismatch_score = mismatch_score;
        self
    }

    /// Set the affine gap costs (both must be negative).
    pub fn with_gap_costs(mut self, gap_open: i64, gap_extend: i64) -> Self {
        self.gap_open = gap_open;
        self.gap_extend = gap_extend;
        self
    }

    /// Set the minimum alignment score that triggers a reported match.
    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Declare the input alphabet size; symbols at or above it are
    /// wildcards.
    pub fn with_alphabet_size(mut self, alphabet_size: u32) -> Self {
        self.alphabet_size = alphabet_size;
        self
    }

    /// Validate everything and produce the strategy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`](crate::SearchError) if the
    /// sign invariants are violated or the query is empty.
    pub fn build(self) -> Result<LocalAli<'a>> {
        let params = ScoreParams::new(
            self.match_score,
            self.mismatch_score,
            self.gap_open,
            self.gap_extend,
            self.threshold,
            self.alphabet_size,
        )?;
        LocalAli::new(params, self.query)
    }
}
