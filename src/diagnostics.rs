//! Non-contractual inspection helpers. Output here is for a human staring
//! at a broken build, not for a test to parse — the exact strings are not
//! part of this crate's API and may change between versions.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::boss::Boss;
use crate::kmer::KmerTable;

/// A one-line-per-node dump of a [`KmerTable`]'s colex order, for eyeballing
/// a small example during debugging.
pub fn dump_kmer_table(table: &KmerTable) -> String {
    let mut out = String::new();
    for (rank, (label, entry)) in table.iter().enumerate() {
        out.push_str(&alloc::format!(
            "{rank}\t{}\tin={:?}\tout={:?}\n",
            String::from_utf8_lossy(label.as_bytes()),
            entry.in_set.iter().collect::<Vec<_>>(),
            entry.out_set.iter().collect::<Vec<_>>(),
        ));
    }
    out
}

/// Render a `Boss`'s raw arrays (GBWT with minus-marks visible as lowercase,
/// plus `O`/`I` as `0`/`1` strings) for side-by-side comparison against the
/// reference C implementation's debug dumps.
pub fn dump_boss(boss: &Boss) -> String {
    let gbwt = String::from_utf8_lossy(boss.gbwt_bytes()).into_owned();
    let o: String = (0..boss.o_len()).map(|i| if boss.o_bit(i) { '1' } else { '0' }).collect();
    let i: String = (0..boss.i_len()).map(|idx| if boss.i_bit(idx) { '1' } else { '0' }).collect();
    alloc::format!("GBWT={gbwt}\nO={o}\nI={i}\n")
}
