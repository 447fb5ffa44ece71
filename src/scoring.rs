//! Scoring parameters for the local-alignment search.
//!
//! The pruning rule in [`crate::strategies::local`] is only sound when the
//! match reward is strictly positive and every penalty is strictly negative:
//! a score derived from a non-positive cell can then never become positive
//! again. [`ScoreParams::new`] enforces these sign invariants once, at search
//! setup; everything downstream may rely on them.

use crate::error::{Result, SearchError};

/// Validated, immutable scoring constants for one search.
///
/// Opening a gap costs `gap_open + gap_extend`; each further gapped position
/// costs `gap_extend` alone (affine gap model). `threshold` is the minimum
/// column maximum that turns a traversal node into a reported match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreParams {
    pub match_score: i64,
    pub mismatch_score: i64,
    pub gap_open: i64,
    pub gap_extend: i64,
    pub threshold: u64,
    /// Size of the input alphabet. Symbols at or above this value are
    /// wildcards and never score as matches, not even against themselves.
    /// The recurrence itself does not consult this field.
    pub alphabet_size: u32,
}

impl ScoreParams {
    /// Create a new parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`] if `match_score` is not
    /// positive or any of `mismatch_score`, `gap_open`, `gap_extend` is not
    /// negative.
    pub fn new(
        match_score: i64,
        mismatch_score: i64,
        gap_open: i64,
        gap_extend: i64,
        threshold: u64,
        alphabet_size: u32,
    ) -> Result<Self> {
        if match_score <= 0 {
            return Err(SearchError::InvalidArgument(
                "match_score must be positive".into(),
            ));
        }
        if mismatch_score >= 0 {
            return Err(SearchError::InvalidArgument(
                "mismatch_score must be negative".into(),
            ));
        }
        if gap_open >= 0 {
            return Err(SearchError::InvalidArgument(
                "gap_open must be negative".into(),
            ));
        }
        if gap_extend >= 0 {
            return Err(SearchError::InvalidArgument(
                "gap_extend must be negative".into(),
            ));
        }
        Ok(Self {
            match_score,
            mismatch_score,
            gap_open,
            gap_extend,
            threshold,
            alphabet_size,
        })
    }

    /// True if `symbol` lies outside the declared alphabet.
    #[inline]
    pub fn is_wildcard(&self, symbol: u8) -> bool {
        u32::from(symbol) >= self.alphabet_size
    }

    /// Substitution score for one database character against one query
    /// character: `match_score` iff the two are equal and the database
    /// character is a proper alphabet symbol, else `mismatch_score`.
    #[inline]
    pub fn subst_score(&self, db_char: u8, query_char: u8) -> i64 {
        if db_char == query_char && !self.is_wildcard(db_char) {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScoreParams;
    use crate::error::SearchError;

    fn valid() -> ScoreParams {
        ScoreParams::new(2, -1, -3, -1, 4, 128).unwrap()
    }

    #[test]
    fn accepts_well_formed_parameters() {
        let p = valid();
        assert_eq!(p.match_score, 2);
        assert_eq!(p.threshold, 4);
    }

    #[test]
    fn rejects_sign_violations() {
        for (ms, mm, go, ge) in [
            (0, -1, -3, -1),
            (-2, -1, -3, -1),
            (2, 0, -3, -1),
            (2, 1, -3, -1),
            (2, -1, 0, -1),
            (2, -1, -3, 0),
        ] {
            let err = ScoreParams::new(ms, mm, go, ge, 4, 128).unwrap_err();
            assert!(matches!(err, SearchError::InvalidArgument(_)));
        }
    }

    #[test]
    fn substitution_scoring() {
        let p = valid();
        assert_eq!(p.subst_score(b'A', b'A'), 2);
        assert_eq!(p.subst_score(b'A', b'C'), -1);
    }

    #[test]
    fn wildcards_never_match() {
        let p = valid();
        assert!(p.is_wildcard(200));
        assert_eq!(p.subst_score(200, 200), -1);
        assert!(!p.is_wildcard(b'A'));
    }
}
