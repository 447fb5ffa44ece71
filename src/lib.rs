//! Bounded approximate local-alignment search over implicit substring
//! tries.
//!
//! This crate answers: does any substring of an indexed database contain a
//! local alignment to a fixed query scoring at least a threshold? It never
//! materializes the substring space; a depth-first driver explores it one
//! database character at a time, and branch-and-bound pruning cuts every
//! subtree that provably cannot reach the threshold.
//!
//! ## Core pieces
//! 1. A [`ScoreColumn`] of affine-gap DP cells per traversal depth,
//!    extended incrementally and never clamped at zero: non-positive cells
//!    are dead and only strictly positive ones propagate.
//! 2. The [`DfsStrategy`] trait, the contract a depth-first driver uses to
//!    create, copy, advance, and classify per-node state. One conforming
//!    type per search algorithm.
//! 3. [`LocalAli`], the local-alignment instantiation, with its
//!    [`LocalAliBuilder`].
//! 4. [`DfsWalker`], a reference driver over any [`PathSource`], bundled
//!    with the naive [`SubstringSource`] adapter for in-memory texts.
//!
//! ## Quick start
//! ```
//! use triealign::{DfsWalker, LocalAliBuilder, NullObserver, SubstringSource};
//!
//! let strategy = LocalAliBuilder::new(b"ACGT")
//!     .with_scores(2, -1)
//!     .with_gap_costs(-3, -1)
//!     .with_threshold(4)
//!     .build()
//!     .unwrap();
//! let source = SubstringSource::new(b"TTACGTAA");
//! let matches = DfsWalker::new(&strategy).search(&source, &mut NullObserver);
//! assert!(matches.iter().any(|m| m.score >= 4));
//! ```
//!
//! The traversal is strictly single-threaded and synchronous; a strategy
//! value is read-only for the lifetime of a search and may be shared by
//! independent searches running on independent node-state stacks.

pub mod builder;
pub mod column;
pub mod error;
pub mod scoring;
pub mod strategies;
pub mod traits;
pub mod walker;

pub use crate::builder::LocalAliBuilder;
pub use crate::column::{Cell, CellScore, ScoreColumn};
pub use crate::error::{Result, SearchError};
pub use crate::scoring::ScoreParams;
pub use crate::strategies::local::LocalAli;
pub use crate::traits::{DfsStrategy, NullObserver, PathBounds, TraversalObserver, Verdict};
pub use crate::walker::{DfsWalker, PathSource, SearchMatch, SubstringSource};
