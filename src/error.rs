//! Error type for the de Bruijn graph index.
//!
//! Two kinds only: a precondition violation (caller's fault, surfaced
//! immediately) and index corruption (a `select` past the end of a
//! sequence, or a terminal `left != right` in backward search — both
//! structural impossibilities, never expected in practice). "Absent k-mer"
//! is not an error; see [`crate::index::SearchOutcome`].

#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("precondition violated: {0}")]
    PrecondViolation(&'static str),
    #[error("index corrupt: {0}")]
    IndexCorrupt(&'static str),
}

#[cfg(not(feature = "std"))]
#[derive(Debug)]
pub enum Error {
    PrecondViolation(&'static str),
    IndexCorrupt(&'static str),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::PrecondViolation(msg) => write!(f, "precondition violated: {msg}"),
            Error::IndexCorrupt(msg) => write!(f, "index corrupt: {msg}"),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
