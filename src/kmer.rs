//! Edge-centric k-mer enumeration (`spec.md` §4.3).
//!
//! Ported from the reference C++'s `construct` function
//! (`original_source/original_boss.cpp`), restructured from a C++
//! `map<string, pair<set<char>,set<char>>, colex_compare>` into a
//! `BTreeMap<KmerKey, KmerEntry>`, since `KmerKey`'s `Ord` already encodes
//! colex order (`spec.md` §9: "a sort of an unordered map into a vector...
//! satisf[ies] the spec" — a `BTreeMap` is the idiomatic Rust version of
//! that idea and needs no separate sort step).

extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::alphabet::{SymbolSet, DOLLAR};
use crate::colex::KmerKey;
use crate::error::{Error, Result};

/// A single k-mer's incoming and outgoing edge-label sets.
#[derive(Clone, Copy, Default, Debug)]
pub struct KmerEntry {
    pub in_set: SymbolSet,
    pub out_set: SymbolSet,
}

/// The colex-ordered k-mer table produced by enumeration: every node's
/// label and its in/out edge-label sets, ready for the BOSS/SBWT encoders.
pub struct KmerTable {
    k: usize,
    nodes: BTreeMap<KmerKey, KmerEntry>,
}

impl KmerTable {
    /// Enumerate all k-mers (including dummy prefixes and the
    /// outgoing-dollar closure) across `inputs`, per `spec.md` §4.3.
    ///
    /// Errors with [`Error::PrecondViolation`] if `k == 0`, `inputs` is
    /// empty, or any input is shorter than `k`.
    pub fn build<S: AsRef<[u8]>>(inputs: &[S], k: usize) -> Result<Self> {
        if k == 0 {
            return Err(Error::PrecondViolation("k must be >= 1"));
        }
        if inputs.is_empty() {
            return Err(Error::PrecondViolation("inputs must be non-empty"));
        }

        let mut nodes: BTreeMap<KmerKey, KmerEntry> = BTreeMap::new();

        for input in inputs {
            let s = input.as_ref();
            if s.len() < k {
                return Err(Error::PrecondViolation("every input string must have length >= k"));
            }

            // Dummy prefixes: '$'*(k-i) ++ S[0..i], for i in 0..=k.
            for i in 0..=k {
                let mut prefix = Vec::with_capacity(k);
                prefix.resize(k - i, DOLLAR);
                prefix.extend_from_slice(&s[0..i]);
                let entry = nodes.entry(KmerKey(prefix)).or_default();
                if i != 0 {
                    entry.in_set.insert(DOLLAR);
                }
                if i < k {
                    entry.out_set.insert(s[i]);
                }
            }

            // Interior k-mers: S[i..i+k], for i in 0..=(|S|-k).
            for i in 0..=(s.len() - k) {
                let kmer = s[i..i + k].to_vec();
                let entry = nodes.entry(KmerKey(kmer)).or_default();
                if i > 0 {
                    entry.in_set.insert(s[i - 1]);
                }
                if i + k < s.len() {
                    entry.out_set.insert(s[i + k]);
                }
            }
        }

        // Outgoing dollar closure: every node with no outgoing edge gets an
        // outgoing '$', and the colex-minimum node (the root) gets a
        // matching incoming '$'. `in_set` is a set, so repeated insertions
        // at the root are naturally idempotent (spec.md §9 Open Question).
        let terminal_keys: Vec<KmerKey> = nodes
            .iter()
            .filter(|(_, e)| e.out_set.is_empty())
            .map(|(k, _)| k.clone())
            .collect();

        if !terminal_keys.is_empty() {
            let root_key = nodes.keys().next().expect("nodes is non-empty").clone();
            for key in terminal_keys {
                nodes.get_mut(&key).expect("key came from this map").out_set.insert(DOLLAR);
            }
            nodes.get_mut(&root_key).expect("root_key came from this map").in_set.insert(DOLLAR);
        }

        log::debug!("k-mer table built: {} nodes, k = {}", nodes.len(), k);

        Ok(KmerTable { k, nodes })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of outgoing edges across all nodes (`n_edges` for BOSS).
    pub fn n_edges(&self) -> usize {
        self.nodes.values().map(|e| e.out_set.len()).sum()
    }

    /// Nodes in colex order, as `(label, entry)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&KmerKey, &KmerEntry)> {
        self.nodes.iter()
    }
}
