//! spec.md §8 Scenario 2 — full SBWT/BOSS construction from
//! `["TACGACGTCGACT"]`, k=3: every expected k-mer resolves to a distinct
//! non-absent rank, and BOSS/SBWT agree with each other on every query.

use debruijn_wheeler_index::boss::Boss;
use debruijn_wheeler_index::index::KmerIndex;
use debruijn_wheeler_index::kmer::KmerTable;
use debruijn_wheeler_index::sbwt::Sbwt;

const EXPECTED: &[(&str, usize)] = &[
    ("CGA", 1),
    ("GAC", 3),
    ("TAC", 4),
    ("GTC", 5),
    ("ACG", 6),
    ("TCG", 7),
    ("ACT", 9),
    ("CGT", 10),
];

#[test]
fn every_expected_kmer_resolves_to_its_reference_rank() {
    let table = KmerTable::build(&["TACGACGTCGACT"], 3).unwrap();
    let boss = Boss::build(&table);
    let sbwt = Sbwt::build(&table);

    for (kmer, rank) in EXPECTED {
        let boss_outcome = boss.search(kmer.as_bytes()).unwrap();
        let sbwt_outcome = sbwt.search(kmer.as_bytes()).unwrap();
        assert_eq!(boss_outcome.rank(), Some(*rank), "BOSS rank for {kmer}");
        assert_eq!(sbwt_outcome.rank(), Some(*rank), "SBWT rank for {kmer}");
    }
}

#[test]
fn ranks_are_pairwise_distinct() {
    let table = KmerTable::build(&["TACGACGTCGACT"], 3).unwrap();
    let boss = Boss::build(&table);

    let mut ranks: Vec<usize> = EXPECTED
        .iter()
        .map(|(kmer, _)| boss.search(kmer.as_bytes()).unwrap().rank().unwrap())
        .collect();
    ranks.sort_unstable();
    ranks.dedup();
    assert_eq!(ranks.len(), EXPECTED.len());
}
