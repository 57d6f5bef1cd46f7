//! The stored form of a rule: a head literal and a sorted, duplicate-free
//! body of canonical literals.

use crate::structures::literal::CLiteral;

/// A rule as stored in a knowledge base.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DbRule {
    /// The head (consequent) of the rule.
    head: CLiteral,

    /// The body (antecedent) of the rule, sorted and duplicate free.
    body: Vec<CLiteral>,
}

impl DbRule {
    /// A stored rule deriving `head` from `body`.
    ///
    /// The body is sorted and deduplicated, so equality of stored rules is
    /// equality of head and body set.
    pub fn new(head: CLiteral, mut body: Vec<CLiteral>) -> Self {
        body.sort_unstable();
        body.dedup();
        DbRule { head, body }
    }

    /// The head of the rule.
    pub fn head(&self) -> CLiteral {
        self.head
    }

    /// An iterator over the (distinct) body literals of the rule, in sorted
    /// order.
    pub fn body(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.body.iter().copied()
    }

    /// The number of distinct body literals of the rule.
    pub fn body_size(&self) -> usize {
        self.body.len()
    }
}
