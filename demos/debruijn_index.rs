//! de Bruijn graph index demo
//!
//! Builds a BOSS and a select-free SBWT index over a short DNA string and
//! runs a handful of queries against both.
//!
//! ```bash
//! cargo run --example debruijn_index
//! ```

use debruijn_wheeler_index::boss::Boss;
use debruijn_wheeler_index::index::{KmerIndex, SearchOutcome};
use debruijn_wheeler_index::kmer::KmerTable;
use debruijn_wheeler_index::sbwt::Sbwt;

fn main() {
    println!("=== de Bruijn graph index demo ===\n");

    let sequence = b"GATTACAGATTACAGATTACA";
    let k = 4;

    println!("Sequence ({} bases): {}", sequence.len(), std::str::from_utf8(sequence).unwrap());
    println!("k = {k}\n");

    let table = KmerTable::build(&[sequence.as_slice()], k).unwrap();
    println!("k-mer table: {} nodes, {} edges", table.n_nodes(), table.n_edges());

    let boss = Boss::build(&table);
    let sbwt = Sbwt::build(&table);

    println!("\n--- Query results (BOSS vs select-free SBWT) ---\n");

    let queries = ["GATT", "ATTA", "TTAC", "TACA", "ACAG", "GGGG"];
    for query in &queries {
        let boss_result = boss.search(query.as_bytes()).unwrap();
        let sbwt_result = sbwt.search(query.as_bytes()).unwrap();
        assert_eq!(boss_result, sbwt_result, "BOSS and SBWT disagreed on {query}");

        match boss_result {
            SearchOutcome::Found(rank) => println!("  {query} -> found, colex rank {rank}"),
            SearchOutcome::Absent => println!("  {query} -> absent"),
        }
    }
}
