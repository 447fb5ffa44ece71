//! The traversal contract between a depth-first driver and a search
//! strategy.
//!
//! A driver walks an implicit tree of database substrings depth first. At
//! each node it hands the strategy the next database character; the strategy
//! updates its per-node state and classifies the node with a [`Verdict`]
//! that tells the driver whether to emit a match, descend further, or
//! abandon the subtree.
//!
//! To plug a search algorithm into a driver, implement [`DfsStrategy`] for a
//! struct that captures the fixed search instance (query, scoring
//! constants). One conforming type per search strategy; the local-alignment
//! instantiation lives in [`crate::strategies::local`].

/// Three-way outcome of classifying one traversal node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The node's state crosses the report threshold. `score` is the best
    /// local alignment score ending at this path position and `prefix_len`
    /// the query offset at which it ends.
    Success { score: u64, prefix_len: usize },
    /// The state is alive but below threshold; a longer path may still
    /// cross it, so the driver must descend further.
    Continue,
    /// No extension of this path can ever recover a positive score; the
    /// driver must abandon the entire subtree.
    Prune,
}

/// Database-offset bounds of the current path's occurrences.
///
/// A half-open range supplied by the driver for diagnostics only; the
/// strategy never needs to interpret it and may merely pass it through to
/// logging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathBounds {
    pub lower: u64,
    pub upper: u64,
}

impl PathBounds {
    /// Width of the range.
    #[inline]
    pub fn width(&self) -> u64 {
        self.upper.saturating_sub(self.lower)
    }
}

/// A search strategy usable by a generic depth-first driver.
///
/// The implementing value *is* the search-wide constant state: it holds the
/// bound query and validated scoring parameters and is read-only for the
/// lifetime of one search, so independent searches may share it. All
/// per-path mutable state lives in `NodeState` values, owned strictly by
/// traversal depth and never shared between sibling branches.
///
/// Drivers must respect the DFS discipline:
/// - a node state is only read or extended after all of its ancestors'
///   states have been computed;
/// - [`copy_node_state`](Self::copy_node_state) happens before the first
///   mutation of any child when branching into multiple children;
/// - [`advance_in_place`](Self::advance_in_place) is only used when a node
///   has exactly one child, which bounds peak memory by depth rather than by
///   the size of the explored tree.
pub trait DfsStrategy {
    /// Per-depth mutable search state.
    type NodeState;

    /// Allocate an empty node state, holding no data yet.
    fn new_node_state(&self) -> Self::NodeState;

    /// Prepare the root state before the walk starts, growing its backing
    /// storage so that no extension along the search ever finds it too
    /// small. Capacity faults after this point are programming errors.
    fn init_root(&self, state: &mut Self::NodeState);

    /// Deep-copy `src` into `dst`, resizing `dst` first if needed. The two
    /// states must never alias each other's storage.
    fn copy_node_state(&self, dst: &mut Self::NodeState, src: &Self::NodeState);

    /// Return `state` to the empty condition, keeping its allocation for
    /// reuse. Idempotent on an already-empty state.
    fn reset_node_state(&self, state: &mut Self::NodeState);

    /// Advance `parent` (at `depth - 1`) by one database character into
    /// `child` (at `depth`), leaving `parent` untouched. Used when the
    /// current node branches into more than one child.
    fn advance(
        &self,
        depth: usize,
        db_char: u8,
        parent: &Self::NodeState,
        child: &mut Self::NodeState,
    );

    /// Advance `state` by one database character in place. Must produce
    /// results bit-identical to [`advance`](Self::advance) given the same
    /// inputs; used on linear chains of single-child nodes to avoid a copy.
    fn advance_in_place(&self, depth: usize, db_char: u8, state: &mut Self::NodeState);

    /// Classify the node at `depth` whose state is `state`. `bounds` is
    /// diagnostic pass-through, see [`PathBounds`].
    fn classify(&self, state: &Self::NodeState, depth: usize, bounds: &PathBounds) -> Verdict;
}

/// Injectable hook into a traversal, called once per visited node.
///
/// Replaces compiled-in debug printing: tests can assert on traversal
/// behavior (nodes visited, verdicts, prune counts) without scraping logs.
pub trait TraversalObserver {
    /// One node was visited and classified.
    fn on_node(&mut self, depth: usize, db_char: u8, bounds: &PathBounds, verdict: &Verdict) {
        let _ = (depth, db_char, bounds, verdict);
    }
}

/// Observer that ignores every event.
pub struct NullObserver;

impl TraversalObserver for NullObserver {}
