//! spec.md §8 Scenario 1 — the fixed BOSS example from the reference C
//! harness, replayed against a `Boss` built directly from the literal
//! `I`/`O`/`GBWT`/`C` arrays (no enumerator involved).

use debruijn_wheeler_index::boss::Boss;
use debruijn_wheeler_index::index::{KmerIndex, SearchOutcome};

#[test]
fn fixed_boss_example_matches_reference_ranks() {
    let boss = Boss::from_parts(
        "11010101001010101010101010",
        "10100101110101010101001010",
        "ACGCAGGTTACAA",
        [0, 5, 8, 11, 0],
        13,
        13,
        3,
    );

    let cases: &[(&str, Option<usize>)] = &[
        ("ACA", Some(2)),
        ("CGA", Some(3)),
        ("GTA", Some(4)),
        ("CAC", Some(6)),
        ("CGC", Some(7)),
        ("ACG", Some(9)),
        ("GCG", Some(10)),
        ("AGT", Some(11)),
        ("CGT", Some(12)),
        ("TGA", None),
    ];

    for (query, expected) in cases {
        let result = boss.search(query.as_bytes()).unwrap();
        match expected {
            Some(rank) => assert_eq!(result, SearchOutcome::Found(*rank), "query {query}"),
            None => assert_eq!(result, SearchOutcome::Absent, "query {query}"),
        }
    }
}
