//! The stored form of a clause: a sorted, duplicate-free vector of canonical
//! literals.

use crate::structures::literal::CLiteral;

/// A clause as stored in a knowledge base.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DbClause {
    /// The literals of the clause, sorted and duplicate free.
    literals: Vec<CLiteral>,
}

impl DbClause {
    /// A stored clause over the given literals.
    ///
    /// Sorts and deduplicates, so equality of stored clauses is equality of
    /// literal sets.
    pub fn new(mut literals: Vec<CLiteral>) -> Self {
        literals.sort_unstable();
        literals.dedup();
        DbClause { literals }
    }

    /// An iterator over the literals of the clause, in sorted order.
    pub fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.literals.iter().copied()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause asserts `literal`.
    pub fn asserts(&self, literal: CLiteral) -> bool {
        self.literals.binary_search(&literal).is_ok()
    }
}
