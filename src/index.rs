//! Shared search contract implemented by both [`crate::boss::Boss`] and
//! [`crate::sbwt::Sbwt`] (`spec.md` §9: "an implementation MAY expose both
//! behind a common query trait"). Shaped after the single shared
//! `FMIndexable` trait pattern used to front multiple concrete index
//! backings in bio-style FM-index crates.

use crate::error::Result;

/// Result of a backward search: either the colex rank of the unique node
/// matching the query, or "not present" — a normal outcome, never an error
/// (`spec.md` §7).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(usize),
    Absent,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn rank(&self) -> Option<usize> {
        match self {
            SearchOutcome::Found(r) => Some(*r),
            SearchOutcome::Absent => None,
        }
    }
}

/// Common query contract for BOSS and SBWT indexes.
pub trait KmerIndex {
    /// Exact backward search for a length-k query over `{A,C,G,T}`.
    ///
    /// Errors with [`crate::error::Error::IndexCorrupt`] only on a genuine
    /// structural impossibility (a `select` past the end of a sequence, or
    /// `left != right` at termination); "not found" is `Ok(SearchOutcome::Absent)`.
    fn search(&self, query: &[u8]) -> Result<SearchOutcome>;

    /// Number of nodes in the index (`spec.md` §6).
    fn n_nodes(&self) -> usize;

    /// The k used at construction.
    fn k(&self) -> usize;
}
