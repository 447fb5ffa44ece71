//! Once a column classifies as prune, no further character sequence of any
//! length may revive it: every cell stays non-positive and the column
//! maximum stays zero.

use proptest::prelude::*;
use triealign::{DfsStrategy, LocalAli, PathBounds, ScoreParams, Verdict};

proptest! {
    #[test]
    fn pruned_columns_stay_dead(
        query in "[ACGT]{1,6}",
        db in "[ACGT]{1,10}",
        revival_attempt in "[ACGT]{1,12}",
        match_score in 1i64..=3,
        mismatch_score in -3i64..=-1,
        gap_open in -5i64..=-1,
        gap_extend in -3i64..=-1,
    ) {
        // Threshold high enough that classification never reports success,
        // so every node is either alive or pruned.
        let params = ScoreParams::new(
            match_score,
            mismatch_score,
            gap_open,
            gap_extend,
            u64::MAX,
            128,
        ).unwrap();
        let ali = LocalAli::new(params, query.as_bytes()).unwrap();
        let bounds = PathBounds::default();

        let mut state = ali.new_node_state();
        ali.init_root(&mut state);
        let mut depth = 0;
        let mut pruned = false;
        for &ch in db.as_bytes() {
            depth += 1;
            ali.advance_in_place(depth, ch, &mut state);
            if ali.classify(&state, depth, &bounds) == Verdict::Prune {
                pruned = true;
                break;
            }
        }
        prop_assume!(pruned);

        for &ch in revival_attempt.as_bytes() {
            depth += 1;
            ali.advance_in_place(depth, ch, &mut state);
            prop_assert_eq!(state.max_value(), 0);
            prop_assert_eq!(ali.classify(&state, depth, &bounds), Verdict::Prune);
            for cell in state.cells() {
                prop_assert!(cell.best.positive().is_none());
            }
        }
    }
}
