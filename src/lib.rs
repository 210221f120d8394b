//! # debruijn-wheeler-index
//!
//! **Succinct edge-centric de Bruijn graph index, BOSS and select-free SBWT**
//!
//! > Backward search over a de Bruijn graph is the same shape as FM-index
//! > backward search over a suffix array: consume the query from the right,
//! > narrow a `(left, right)` colex-ordered range one character at a time.
//!
//! ## Architecture
//!
//! - **k-mer enumeration** (`kmer`): dummy prefix ladder, interior k-mers,
//!   outgoing-dollar closure over one or more input strings, ordered by
//!   colex rank (`colex`).
//! - **BOSS** (`boss`): edge-labelled `GBWT` plus `O`/`I` delimiter bit
//!   vectors (`bitvec`), with minus-marking of redundant out-edges.
//! - **Select-free SBWT** (`sbwt`): one presence bit vector per base,
//!   search via `rank` alone — no `select`.
//! - **Backward search**: both representations implement the shared
//!   [`index::KmerIndex`] trait.
//!
//! ## Example
//!
//! ```
//! use debruijn_wheeler_index::boss::Boss;
//! use debruijn_wheeler_index::index::{KmerIndex, SearchOutcome};
//! use debruijn_wheeler_index::kmer::KmerTable;
//!
//! let table = KmerTable::build(&["ACGT"], 2).unwrap();
//! let boss = Boss::build(&table);
//!
//! assert!(boss.search(b"AC").unwrap().is_found());
//! assert_eq!(boss.search(b"TT").unwrap(), SearchOutcome::Absent);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod alphabet;
pub mod bitvec;
pub mod boss;
pub mod colex;
pub mod diagnostics;
pub mod error;
pub mod index;
pub mod kmer;
pub mod query;
pub mod sbwt;
pub mod seq;

pub use boss::Boss;
pub use error::{Error, Result};
pub use index::{KmerIndex, SearchOutcome};
pub use kmer::KmerTable;
pub use sbwt::Sbwt;

/// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
