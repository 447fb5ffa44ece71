//! Example: threshold-bounded local-alignment search over a small text.
//!
//! Run with:
//! `cargo run --example threshold_search`

use triealign::{DfsWalker, LocalAliBuilder, NullObserver, SubstringSource};

fn main() {
    let text = b"CCCGATTACATTTGATTTACAGG";
    let query = b"GATTACA";

    let strategy = LocalAliBuilder::new(query)
        .with_scores(2, -1)
        .with_gap_costs(-3, -1)
        .with_threshold(10)
        .build()
        .expect("scoring parameters are well formed");

    let source = SubstringSource::new(text);
    let matches = DfsWalker::new(&strategy).search(&source, &mut NullObserver);

    println!("query: {}", String::from_utf8_lossy(query));
    println!("text:  {}", String::from_utf8_lossy(text));
    println!("{} match(es) at threshold 10:", matches.len());
    for m in &matches {
        println!(
            "  path {:10} depth {:2} score {:3} query prefix {}",
            String::from_utf8_lossy(&m.path),
            m.depth,
            m.score,
            m.query_prefix_len
        );
    }
}
