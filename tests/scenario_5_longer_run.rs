//! spec.md §8 Scenario 5 — the 200-base sequence from the reference C++
//! harness (`original_source/select_free_boss.cpp`'s `main`), k=4: every
//! 4-mer appearing in the input resolves to a distinct non-absent rank,
//! and a synthetic absent 4-mer resolves to absent.

extern crate alloc;
use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use debruijn_wheeler_index::boss::Boss;
use debruijn_wheeler_index::index::{KmerIndex, SearchOutcome};
use debruijn_wheeler_index::kmer::KmerTable;
use debruijn_wheeler_index::sbwt::Sbwt;

const SEQUENCE: &str = "GAAGCCGCCATTCCATAGTGAGTCCTTCGTCTGTGACTATCTGTGCCAGATCGTCTAGCAAACTGCTGATCCAGTTTATCTCACCAAATTATAGCCGTACAGACCGAAATCTTAAGTCATATCACGCGACTAGGCTCAGCTTTATTTTTGTGGTCATGGGTTTTGGTCCGCCCGAGCGGTGCAGCCGATTAGGACCATGT";

#[test]
fn every_present_4mer_gets_a_distinct_rank() {
    let table = KmerTable::build(&[SEQUENCE], 4).unwrap();
    let boss = Boss::build(&table);
    let sbwt = Sbwt::build(&table);

    let bytes = SEQUENCE.as_bytes();
    let kmers: BTreeSet<&[u8]> = bytes.windows(4).collect();

    let mut ranks = Vec::with_capacity(kmers.len());
    for kmer in &kmers {
        let boss_outcome = boss.search(kmer).unwrap();
        let sbwt_outcome = sbwt.search(kmer).unwrap();
        assert_eq!(boss_outcome, sbwt_outcome, "BOSS/SBWT disagreed on {:?}", String::from_utf8_lossy(kmer));
        let rank = boss_outcome.rank().expect("every observed 4-mer must be found");
        ranks.push(rank);
    }

    let mut sorted = ranks.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ranks.len(), "distinct 4-mers must get distinct ranks");
}

#[test]
fn a_synthetic_absent_4mer_is_reported_absent() {
    let table = KmerTable::build(&[SEQUENCE], 4).unwrap();
    let boss = Boss::build(&table);
    let sbwt = Sbwt::build(&table);

    let present: BTreeSet<&[u8]> = SEQUENCE.as_bytes().windows(4).collect();

    // Find a 4-mer over {A,C,G,T} that does not occur in SEQUENCE.
    let bases = [b'A', b'C', b'G', b'T'];
    let mut absent_kmer = None;
    'search: for &a in &bases {
        for &b in &bases {
            for &c in &bases {
                for &d in &bases {
                    let candidate = [a, b, c, d];
                    if !present.contains(candidate.as_slice()) {
                        absent_kmer = Some(candidate);
                        break 'search;
                    }
                }
            }
        }
    }
    let absent_kmer = absent_kmer.expect("256 possible 4-mers must exceed the distinct 4-mers in a 200-base string");

    assert_eq!(boss.search(&absent_kmer).unwrap(), SearchOutcome::Absent);
    assert_eq!(sbwt.search(&absent_kmer).unwrap(), SearchOutcome::Absent);
}
