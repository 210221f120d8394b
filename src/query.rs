//! Batch query driver (`spec.md` §4.6): run a list of fixed-length strings
//! against any [`KmerIndex`] and collect their outcomes in order.

extern crate alloc;
use alloc::vec::Vec;

use crate::error::Result;
use crate::index::{KmerIndex, SearchOutcome};

/// Run `queries` against `index` in order, collecting one outcome per query.
/// A precondition violation on one query (wrong length, non-ACGT character)
/// does not stop the batch — the error is reported at that query's position.
pub fn run_queries<I: KmerIndex>(index: &I, queries: &[impl AsRef<[u8]>]) -> Vec<Result<SearchOutcome>> {
    queries.iter().map(|q| index.search(q.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boss::Boss;
    use crate::error::Error;
    use crate::kmer::KmerTable;

    #[test]
    fn runs_every_query_independently() {
        let table = KmerTable::build(&["ACGT"], 2).unwrap();
        let boss = Boss::build(&table);

        let queries = ["AC", "CG", "GT", "TT", "ACG"];
        let results = run_queries(&boss, &queries);

        assert_eq!(results.len(), 5);
        assert!(results[0].as_ref().unwrap().is_found());
        assert!(results[1].as_ref().unwrap().is_found());
        assert!(results[2].as_ref().unwrap().is_found());
        assert_eq!(results[3].as_ref().unwrap(), &crate::index::SearchOutcome::Absent);
        assert!(matches!(results[4], Err(Error::PrecondViolation(_))));
    }
}
