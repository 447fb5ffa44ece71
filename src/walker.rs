//! A reference depth-first driver over an implicit substring tree.
//!
//! The walker is generic over a [`DfsStrategy`] and a [`PathSource`]; the
//! source answers "which distinct characters extend this path", the strategy
//! scores and classifies each node. Index construction is out of scope: the
//! bundled [`SubstringSource`] is a naive scan adapter that gives any
//! in-memory text an implicit suffix-trie view, good enough for tests,
//! demos, and small inputs. Drivers over real enhanced suffix arrays expose
//! the same shape.
//!
//! Resource discipline (what keeps peak memory proportional to depth, not to
//! the explored tree):
//! - along a chain of single-child nodes the walker advances the node state
//!   destructively via [`DfsStrategy::advance_in_place`];
//! - only at branch points does it produce fresh child states via
//!   [`DfsStrategy::advance`];
//! - abandoned states are reset and recycled through a free list.

use crate::traits::{DfsStrategy, PathBounds, TraversalObserver, Verdict};

/// Answers which characters extend a database path, and where the path
/// occurs.
pub trait PathSource {
    /// Write the distinct characters `c` into `out` such that `path ++ [c]`
    /// still occurs in the database. `out` is cleared first.
    fn extensions(&self, path: &[u8], out: &mut Vec<u8>);

    /// Database-offset bounds of the path's occurrences; diagnostics only.
    fn bounds(&self, path: &[u8]) -> PathBounds;
}

/// Implicit suffix-trie view of a plain in-memory text.
///
/// Every substring of the text is a node; children are found by scanning.
/// Quadratic in the text length per visited node, so only suitable for
/// small databases.
#[derive(Clone, Copy, Debug)]
pub struct SubstringSource<'a> {
    text: &'a [u8],
}

impl<'a> SubstringSource<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &[u8] {
        self.text
    }
}

impl PathSource for SubstringSource<'_> {
    fn extensions(&self, path: &[u8], out: &mut Vec<u8>) {
        out.clear();
        if path.is_empty() {
            for &c in self.text {
                if !out.contains(&c) {
                    out.push(c);
                }
            }
            return;
        }
        if path.len() > self.text.len() {
            return;
        }
        for (i, window) in self.text.windows(path.len()).enumerate() {
            if window == path {
                if let Some(&next) = self.text.get(i + path.len()) {
                    if !out.contains(&next) {
                        out.push(next);
                    }
                }
            }
        }
    }

    fn bounds(&self, path: &[u8]) -> PathBounds {
        if path.is_empty() {
            return PathBounds {
                lower: 0,
                upper: self.text.len() as u64,
            };
        }
        let mut lower = u64::MAX;
        let mut upper = 0u64;
        if path.len() <= self.text.len() {
            for (i, window) in self.text.windows(path.len()).enumerate() {
                if window == path {
                    lower = lower.min(i as u64);
                    upper = upper.max(i as u64 + 1);
                }
            }
        }
        if lower == u64::MAX {
            PathBounds::default()
        } else {
            PathBounds { lower, upper }
        }
    }
}

/// One reported match: a database path whose node classified as success.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchMatch {
    /// The database characters along the path, root to node.
    pub path: Vec<u8>,
    /// Depth of the node, equal to `path.len()`.
    pub depth: usize,
    /// Best local alignment score ending at this path position.
    pub score: u64,
    /// Query offset at which the best alignment ends.
    pub query_prefix_len: usize,
}

struct Pending<N> {
    depth: usize,
    db_char: u8,
    state: N,
}

/// Depth-first walker driving a strategy over a path source.
pub struct DfsWalker<'a, S: DfsStrategy> {
    strategy: &'a S,
    depth_limit: Option<usize>,
}

impl<'a, S: DfsStrategy> DfsWalker<'a, S> {
    pub fn new(strategy: &'a S) -> Self {
        Self {
            strategy,
            depth_limit: None,
        }
    }

    /// Never descend below `limit` database characters.
    pub fn with_depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = Some(limit);
        self
    }

    /// Walk the full tree, reporting every success node encountered.
    ///
    /// A success node's subtree is not descended further; longer matches
    /// past the first threshold crossing are the caller's concern. The walk
    /// is strictly single-threaded and synchronous; stopping early is simply
    /// a matter of the caller truncating the source or setting a depth
    /// limit.
    pub fn search<T, O>(&self, source: &T, observer: &mut O) -> Vec<SearchMatch>
    where
        T: PathSource,
        O: TraversalObserver,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("dfs_search");
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut matches = Vec::new();
        let mut path: Vec<u8> = Vec::new();
        let mut exts: Vec<u8> = Vec::new();
        let mut pending: Vec<Pending<S::NodeState>> = Vec::new();
        let mut free: Vec<S::NodeState> = Vec::new();

        let mut root = self.strategy.new_node_state();
        self.strategy.init_root(&mut root);

        source.extensions(&[], &mut exts);
        // Reverse push keeps visiting order aligned with extension order.
        for &ch in exts.iter().rev() {
            let mut child = free.pop().unwrap_or_else(|| self.strategy.new_node_state());
            self.strategy.advance(1, ch, &root, &mut child);
            pending.push(Pending {
                depth: 1,
                db_char: ch,
                state: child,
            });
        }

        while let Some(Pending {
            depth: start_depth,
            db_char,
            mut state,
        }) = pending.pop()
        {
            // All deeper pendings have been drained by now, so the shared
            // path buffer still holds this node's ancestors as a prefix.
            path.truncate(start_depth - 1);
            path.push(db_char);

            let mut depth = start_depth;
            let mut ch = db_char;
            loop {
                let bounds = source.bounds(&path);
                let verdict = self.strategy.classify(&state, depth, &bounds);
                observer.on_node(depth, ch, &bounds, &verdict);
                #[cfg(feature = "tracing")]
                tracing::trace!(depth, ch, ?verdict, "visited");

                match verdict {
                    Verdict::Success { score, prefix_len } => {
                        matches.push(SearchMatch {
                            path: path.clone(),
                            depth,
                            score,
                            query_prefix_len: prefix_len,
                        });
                        break;
                    }
                    Verdict::Prune => break,
                    Verdict::Continue => {}
                }
                if self.depth_limit.is_some_and(|limit| depth >= limit) {
                    break;
                }

                source.extensions(&path, &mut exts);
                match exts.len() {
                    0 => break,
                    1 => {
                        // Linear chain: reuse this node's buffer.
                        ch = exts[0];
                        depth += 1;
                        path.push(ch);
                        self.strategy.advance_in_place(depth, ch, &mut state);
                    }
                    _ => {
                        for &c in exts.iter().rev() {
                            let mut child =
                                free.pop().unwrap_or_else(|| self.strategy.new_node_state());
                            self.strategy.advance(depth + 1, c, &state, &mut child);
                            pending.push(Pending {
                                depth: depth + 1,
                                db_char: c,
                                state: child,
                            });
                        }
                        break;
                    }
                }
            }

            self.strategy.reset_node_state(&mut state);
            free.push(state);
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::LocalAliBuilder;

    #[derive(Default)]
    struct CountingObserver {
        nodes: usize,
        prunes: usize,
        successes: usize,
    }

    impl TraversalObserver for CountingObserver {
        fn on_node(&mut self, _depth: usize, _ch: u8, _bounds: &PathBounds, verdict: &Verdict) {
            self.nodes += 1;
            match verdict {
                Verdict::Prune => self.prunes += 1,
                Verdict::Success { .. } => self.successes += 1,
                Verdict::Continue => {}
            }
        }
    }

    #[test]
    fn substring_source_extensions_and_bounds() {
        let source = SubstringSource::new(b"ABAB");
        let mut exts = Vec::new();
        source.extensions(&[], &mut exts);
        assert_eq!(exts, vec![b'A', b'B']);
        source.extensions(b"AB", &mut exts);
        assert_eq!(exts, vec![b'A']);
        source.extensions(b"ABAB", &mut exts);
        assert!(exts.is_empty());

        let b = source.bounds(b"AB");
        assert_eq!((b.lower, b.upper), (0, 3));
        assert_eq!(b.width(), 3);
    }

    #[test]
    fn exact_query_occurrence_is_found() {
        let ali = LocalAliBuilder::new(b"ACGT")
            .with_scores(2, -1)
            .with_gap_costs(-3, -1)
            .with_threshold(8)
            .build()
            .unwrap();
        let source = SubstringSource::new(b"TTACGTAA");
        let matches = DfsWalker::new(&ali).search(&source, &mut crate::traits::NullObserver);
        assert!(matches
            .iter()
            .any(|m| m.score == 8 && m.query_prefix_len == 4 && m.path.ends_with(b"ACGT")));
    }

    #[test]
    fn observer_sees_prunes_on_hopeless_text() {
        let ali = LocalAliBuilder::new(b"ACGT")
            .with_scores(2, -1)
            .with_gap_costs(-3, -1)
            .with_threshold(4)
            .build()
            .unwrap();
        let source = SubstringSource::new(b"TTTT");
        let mut observer = CountingObserver::default();
        let matches = DfsWalker::new(&ali).search(&source, &mut observer);
        assert!(matches.is_empty());
        assert_eq!(observer.successes, 0);
        assert!(observer.prunes > 0);
        assert!(observer.nodes >= observer.prunes);
    }

    #[test]
    fn depth_limit_caps_exploration() {
        let ali = LocalAliBuilder::new(b"AAAA").with_threshold(100).build().unwrap();
        let source = SubstringSource::new(b"AAAAAAAA");
        let mut observer = CountingObserver::default();
        let walker = DfsWalker::new(&ali).with_depth_limit(3);
        let matches = walker.search(&source, &mut observer);
        assert!(matches.is_empty());
        assert!(observer.nodes <= 3);
    }

    #[test]
    fn search_is_deterministic() {
        let ali = LocalAliBuilder::new(b"ACGT")
            .with_scores(2, -1)
            .with_gap_costs(-3, -1)
            .with_threshold(4)
            .build()
            .unwrap();
        let source = SubstringSource::new(b"ACGTTGCAACGT");
        let first = DfsWalker::new(&ali).search(&source, &mut crate::traits::NullObserver);
        let second = DfsWalker::new(&ali).search(&source, &mut crate::traits::NullObserver);
        assert_eq!(first, second);
    }
}
