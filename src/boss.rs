//! BOSS encoding: edge-labelled `GBWT` plus `O`/`I` delimiter bit vectors.
//!
//! Layout and minus-marking are ported from
//! `original_source/original_boss.cpp`'s `construct`; the `search` formula
//! (including the `end = n_edges - 1` special case and the `-right-2`
//! arithmetic) is ported from `original_source/main.c`'s `search`, whose
//! fixed numeric example is pinned as a regression test in
//! `tests/scenario_1_boss_fixed.rs`.

extern crate alloc;
use alloc::vec::Vec;

use crate::alphabet::{symbol_index, BASES, DOLLAR};
use crate::bitvec::BitVector;
use crate::error::{Error, Result};
use crate::index::{KmerIndex, SearchOutcome};
use crate::kmer::KmerTable;
use crate::seq;

/// A constructed BOSS index. Immutable once built; see `spec.md` §5.
pub struct Boss {
    gbwt: Vec<u8>,
    o: BitVector,
    i: BitVector,
    c: [usize; 5],
    n_nodes: usize,
    n_edges: usize,
    k: usize,
}

/// Bit that marks a minus-marked (redundant) out-edge: lowercasing an ASCII
/// uppercase letter, matching the reference C++'s `tolower`.
const CASE_BIT: u8 = 0x20;

/// `select` takes a 1-indexed occurrence count; this crate represents it as
/// `usize`, but intermediate search arithmetic is signed (see `search`
/// below), so this converts and rejects a negative index as corruption
/// rather than wrapping.
#[inline]
fn to_select_k(k: isize) -> Result<usize> {
    usize::try_from(k).map_err(|_| Error::IndexCorrupt("select index computed as negative"))
}

impl Boss {
    /// Build a BOSS index from an already-enumerated k-mer table.
    pub fn build(table: &KmerTable) -> Self {
        let n_nodes = table.n_nodes();
        let n_edges = table.n_edges();

        // Pass 1: layout. GBWT (all uppercase for now), O, I.
        //
        // O and I are laid out per `original_source/main.c`'s `WheelerBOSS`,
        // not `original_boss.cpp`'s single-`LAST`-array scheme: walking
        // nodes in colex order, each emits a single `1` terminator followed
        // by that node's degree-many `0`s. O's degree is raw outdegree, so O
        // is always `n_nodes + n_edges` bits. I's degree is the node's
        // *canonical* (post-minus-marking) indegree, which is why I is
        // sized by canonical edge count, not `n_edges` — see the indegree
        // computation below. `search`'s `Select(O/I, '1', ...) - offset`
        // arithmetic is the inverse of exactly this construction.
        let mut gbwt_raw: Vec<u8> = Vec::with_capacity(n_edges);
        let mut o_bits: Vec<bool> = Vec::with_capacity(n_nodes + n_edges);
        let mut i_bits: Vec<bool> = Vec::with_capacity(n_nodes + n_edges);

        let root_key = table.iter().next().map(|(label, _)| label.clone());

        for (_, entry) in table.iter() {
            for c in entry.out_set.iter() {
                gbwt_raw.push(c);
            }
        }
        let dollar_edges = gbwt_raw.iter().filter(|&&c| c == DOLLAR).count();
        // `search`'s `wl`/`wr` land on a slot in `I` by treating the
        // canonical GBWT rank as a direct index into "global canonical edge
        // position", which only lines up with colex node order if every
        // node — root included — claims at least one slot. Root's closure
        // count can be 0 on a fully self-closed graph (no string ever
        // terminates there); `max(dollar_edges, 1)` gives it the one slot
        // the indexing scheme needs without perturbing any other node's
        // width or any other use of `dollar_edges`.
        let eff_dollar = dollar_edges.max(1);

        for (label, entry) in table.iter() {
            o_bits.push(true);
            for _ in 0..entry.out_set.len() {
                o_bits.push(false);
            }

            // Minus-marking (Pass 2) always leaves exactly one canonical
            // incoming edge per real (non-root) node: a node's incoming
            // label is fixed by its own last character, so every real
            // incoming edge to a given node shares that label and all but
            // one get marked away. `in_set`'s size is how many *candidates*
            // existed pre-marking, not how many survive — the survivor
            // count is uniformly 1 for every non-root node, unconditionally.
            // The root is the sole exception: it is the target of every
            // closure `$` edge instead (never minus-marked, see Pass 2) and
            // of nothing else, so its survivor count is `eff_dollar` (see
            // above for why root can't drop to a literal 0 here).
            let indegree = if Some(label) == root_key.as_ref() { eff_dollar } else { 1 };
            i_bits.push(true);
            for _ in 0..indegree {
                i_bits.push(false);
            }
        }

        // Pass 2: minus-marking via the F-column walk.
        let mut f_column = gbwt_raw.clone();
        f_column.sort_unstable();

        let mut minus_marks = alloc::vec![false; gbwt_raw.len()];
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
                    let pos = seq::select(&gbwt_raw, c, labels_seen[ci] + step + 1)
                        .expect("minus-mark target must exist: indegree <= outdegree occurrences of c");
                    minus_marks[pos] = true;
                }
                labels_seen[ci] += indegree;
            }
            f_index += indegree;
        }

        let mut gbwt = gbwt_raw;
        for (pos, marked) in minus_marks.iter().enumerate() {
            if *marked {
                gbwt[pos] |= CASE_BIT;
            }
        }

        // C array: cumulative count of characters strictly less than `c`, in
        // ASCII order (`$` = 36 sorts before the bases), matching
        // `original_source/select_free_boss.cpp`'s `construct_C`. `$` is
        // never minus-marked so every real occurrence counts; counting it
        // here (even though search never looks up `C['$']` itself) shifts
        // every base's slot up by `eff_dollar`, exactly as the reference's
        // cumulative sum does, with the same root-needs-one-slot adjustment
        // used for `I`'s width above.
        let mut counts = [0usize; 5];
        counts[symbol_index(DOLLAR).unwrap()] = eff_dollar;
        for &ch in &gbwt {
            if ch.is_ascii_uppercase() {
                if let Some(ci) = symbol_index(ch) {
                    counts[ci] += 1;
                }
            }
        }
        let mut c = [0usize; 5];
        let mut running = counts[symbol_index(DOLLAR).unwrap()];
        for &base in &BASES {
            let bi = symbol_index(base).unwrap();
            c[bi] = running;
            running += counts[bi];
        }

        log::debug!(
            "BOSS built: {n_nodes} nodes, {n_edges} edges, {} minus-marked",
            minus_marks.iter().filter(|&&m| m).count()
        );

        Boss {
            gbwt,
            o: BitVector::from_bits(o_bits),
            i: BitVector::from_bits(i_bits),
            c,
            n_nodes,
            n_edges,
            k: table.k(),
        }
    }

    /// Construct directly from pre-encoded fields — used to replay
    /// `spec.md` Scenario 1's fixed numeric example without running the
    /// enumerator/encoder.
    pub fn from_parts(
        i_bits: &str,
        o_bits: &str,
        gbwt: &str,
        c: [usize; 5],
        n_nodes: usize,
        n_edges: usize,
        k: usize,
    ) -> Self {
        Boss {
            gbwt: gbwt.as_bytes().to_vec(),
            o: BitVector::from_bits(o_bits.chars().map(|c| c == '1')),
            i: BitVector::from_bits(i_bits.chars().map(|c| c == '1')),
            c,
            n_nodes,
            n_edges,
            k,
        }
    }

    pub fn n_edges(&self) -> usize {
        self.n_edges
    }

    /// Length of the `O` delimiter vector (`n_nodes + n_edges`: one `1` per
    /// node plus one `0` per raw out-edge).
    pub fn o_len(&self) -> usize {
        self.o.len()
    }

    /// Length of the `I` delimiter vector (`n_nodes` plus the canonical,
    /// post-minus-marking edge count — generally less than `n_edges`).
    pub fn i_len(&self) -> usize {
        self.i.len()
    }

    /// Raw GBWT bytes (minus-marked edges lowercase). Inspection only — see
    /// `crate::diagnostics`.
    pub fn gbwt_bytes(&self) -> &[u8] {
        &self.gbwt
    }

    /// Bit `i` of the `O` delimiter vector. Inspection only.
    pub fn o_bit(&self, i: usize) -> bool {
        self.o.get(i)
    }

    /// Bit `i` of the `I` delimiter vector. Inspection only.
    pub fn i_bit(&self, i: usize) -> bool {
        self.i.get(i)
    }
}

impl KmerIndex for Boss {
    // Ported arithmetic-for-arithmetic from original_source/main.c's `search`,
    // which uses signed `int64_t` throughout: `end` can legitimately go
    // negative (e.g. a node whose only out-edge leaves no padding zeros in
    // `O`), and relies on a signed `end < start` comparison to report
    // "absent" in that case. `isize` is used here for exactly that reason —
    // plain `usize` would wrap instead of going negative and silently break
    // the `end < start` check.
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

            let start = self.o.select1(to_select_k(left + 1)?)? as isize - left;
            let end = if right == self.n_nodes as isize - 1 {
                self.n_edges as isize - 1
            } else {
                self.o.select1(to_select_k(right + 2)?)? as isize - right - 2
            };

            if end < start {
                return Ok(SearchOutcome::Absent);
            }

            let start = usize::try_from(start).map_err(|_| Error::IndexCorrupt("start computed as negative"))?;
            let end = usize::try_from(end).map_err(|_| Error::IndexCorrupt("end computed as negative"))?;

            let el = seq::rank(&self.gbwt, c, start) as isize;
            let er = seq::rank(&self.gbwt, c, end + 1) as isize;
            if el == er {
                return Ok(SearchOutcome::Absent);
            }

            let wl = self.c[ci] as isize + el;
            let wr = self.c[ci] as isize + er - 1;

            left = self.i.rank1(self.i.select0(to_select_k(wl + 1)?)?) as isize - 1;
            right = self.i.rank1(self.i.select0(to_select_k(wr + 1)?)?) as isize - 1;
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
