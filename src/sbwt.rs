//! Select-free SBWT encoding: one presence bit vector per `{A,C,G,T}`.
//!
//! Ported from `original_source/select_free_boss.cpp`'s `SelectFreeBOSS`
//! constructor (layout + minus-marking) and `search` function (the
//! select-free backward-search step). Minus-marking here clears bits in the
//! per-character `BitVector`s directly (via `BitVector::select1`) rather
//! than lowercasing a byte sequence, since SBWT has no byte sequence to
//! mark — `spec.md` §9: "the SBWT form already elides marked edges by
//! zeroing bits; no separate mark channel is needed."

extern crate alloc;
use alloc::vec::Vec;

use crate::alphabet::{symbol_index, BASES, DOLLAR};
use crate::bitvec::BitVector;
use crate::error::{Error, Result};
use crate::index::{KmerIndex, SearchOutcome};
use crate::kmer::KmerTable;

/// A constructed select-free SBWT index. Immutable once built.
pub struct Sbwt {
    /// One presence bit vector per base, indexed by `symbol_index`.
    bits: [BitVector; 4],
    c: [usize; 5],
    n_nodes: usize,
    k: usize,
}

impl Sbwt {
    pub fn build(table: &KmerTable) -> Self {
        let n_nodes = table.n_nodes();

        // Pass 1: layout. One presence bit per node per base, plus the
        // out-sequence needed to derive F_column (this mirrors BOSS's
        // GBWT_raw, but is never retained — only used for minus-marking).
        let mut out_seq: Vec<u8> = Vec::new();
        let mut bit_builders: [Vec<bool>; 4] = Default::default();

        for (_, entry) in table.iter() {
            for &base in &BASES {
                bit_builders[symbol_index(base).unwrap()].push(entry.out_set.contains(base));
            }
            for c in entry.out_set.iter() {
                out_seq.push(c);
            }
        }

        let bits_orig: [BitVector; 4] = core::array::from_fn(|i| {
            let mut bv = BitVector::new();
            for &b in &bit_builders[i] {
                bv.push(b);
            }
            bv.build_index();
            bv
        });

        // Pass 2: minus-marking via the F-column walk, same structure as
        // BOSS (spec.md §4.4). `select1` targets are computed against
        // `bits_orig`, a snapshot that is never mutated during this walk —
        // mirroring BOSS's Pass 2, which selects against the untouched
        // `gbwt_raw` and only applies marks afterwards. Selecting against a
        // bit vector that is cleared as we go (as an earlier version of this
        // code did) shifts every later select target for that base, since
        // each clear changes which position is the k-th remaining `1` —
        // correct only by coincidence on inputs with few marks per base.
        let mut f_column = out_seq;
        f_column.sort_unstable();

        let mut marks: [Vec<bool>; 4] = core::array::from_fn(|i| alloc::vec![false; bits_orig[i].len()]);
        let mut labels_seen = [0usize; 5];
        let mut f_index = 0usize;

        for (_, entry) in table.iter() {
            let indegree = entry.in_set.len();
            if indegree == 0 {
                continue;
            }
            let c = f_column[f_index];
            if c != DOLLAR {
                let ci = symbol_index(c).expect("F-column symbol outside alphabet");
                for step in 1..indegree {
                    let pos = bits_orig[ci]
                        .select1(labels_seen[ci] + step + 1)
                        .expect("minus-mark target must exist: indegree <= outdegree occurrences of c");
                    marks[ci][pos] = true;
                }
                labels_seen[ci] += indegree;
            }
            f_index += indegree;
        }

        let bits: [BitVector; 4] = core::array::from_fn(|i| {
            BitVector::from_bits((0..bits_orig[i].len()).map(|idx| bits_orig[i].get(idx) && !marks[i][idx]))
        });

        // C array: cumulative count of characters strictly less than `c`, in
        // ASCII order (`$` = 36 sorts before the bases), matching
        // `original_source/select_free_boss.cpp`'s `construct_C`. `$` has no
        // presence bit vector here (it never needs a `rank`/`select`
        // lookup), but its occurrence count still shifts every base's slot
        // up, exactly as the reference's full-alphabet cumulative sum does.
        // Root's closure-edge count can be 0 on a fully self-closed input
        // (no string ever terminates there); `search`'s `C[c] + Rank(...)`
        // formula has no indirection to skip a zero-width node, so it
        // implicitly assumes every node — root included — claims at least
        // one slot. `max(dollar_edges, 1)` gives root that slot without
        // perturbing the bijection when a real closure edge exists.
        let dollar_edges = f_column.iter().filter(|&&c| c == DOLLAR).count();
        let eff_dollar = dollar_edges.max(1);
        let mut counts = [0usize; 5];
        counts[symbol_index(DOLLAR).unwrap()] = eff_dollar;
        for &base in &BASES {
            let ci = symbol_index(base).unwrap();
            counts[ci] = bits[ci].rank1(n_nodes);
        }
        let mut c = [0usize; 5];
        let mut running = counts[symbol_index(DOLLAR).unwrap()];
        for &base in &BASES {
            let bi = symbol_index(base).unwrap();
            c[bi] = running;
            running += counts[bi];
        }

        log::debug!("SBWT built: {n_nodes} nodes, {} set bits total", counts.iter().sum::<usize>());

        Sbwt { bits, c, n_nodes, k: table.k() }
    }

    /// Construct directly from pre-encoded fields — used by scenario tests
    /// that replay a fixed numeric example without the enumerator/encoder.
    pub fn from_parts(a: &str, cc: &str, g: &str, t: &str, c: [usize; 5], n_nodes: usize, k: usize) -> Self {
        let parse = |s: &str| BitVector::from_bits(s.chars().map(|c| c == '1'));
        Sbwt {
            bits: [parse(a), parse(cc), parse(g), parse(t)],
            c,
            n_nodes,
            k,
        }
    }
}

impl KmerIndex for Sbwt {
    fn search(&self, query: &[u8]) -> Result<SearchOutcome> {
        if query.len() != self.k {
            return Err(Error::PrecondViolation("query length must equal k"));
        }
        if self.n_nodes == 0 {
            return Err(Error::IndexCorrupt("index has no nodes"));
        }

        let mut left: isize = 0;
        let mut right: isize = self.n_nodes as isize - 1;

        for &c in query {
            let ci = symbol_index(c)
                .filter(|&ci| ci < 4)
                .ok_or(Error::PrecondViolation("query characters must be in {A,C,G,T}"))?;

            let left_u = usize::try_from(left).map_err(|_| Error::IndexCorrupt("left went negative"))?;
            let right_u = usize::try_from(right).map_err(|_| Error::IndexCorrupt("right went negative"))?;

            let new_left = self.c[ci] as isize + self.bits[ci].rank1(left_u) as isize;
            let new_right = self.c[ci] as isize + self.bits[ci].rank1(right_u + 1) as isize - 1;

            if new_left > new_right {
                return Ok(SearchOutcome::Absent);
            }
            left = new_left;
            right = new_right;
        }

        if left != right {
            return Err(Error::IndexCorrupt("backward search terminated with left != right"));
        }
        usize::try_from(left)
            .map(SearchOutcome::Found)
            .map_err(|_| Error::IndexCorrupt("final rank computed as negative"))
    }

    fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    fn k(&self) -> usize {
        self.k
    }
}
