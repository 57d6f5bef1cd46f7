/*!
Clauses, aka. a collection of literals asserted unconditionally, interpreted
as the conjunction of those literals.

A clause is an unordered, duplicate-free set of one or more literals.
Duplicate literals passed to the constructor are collapsed rather than
rejected; an empty collection is rejected.

```rust
# use evidentia::structures::{clause::Clause, literal::Literal};
let sunny = Literal::positive("sunny");
let stay_home = Literal::positive("stay_home");

let clause = Clause::new([sunny.clone(), stay_home.clone(), sunny.clone()]).unwrap();

assert_eq!(clause.size(), 2);
assert_eq!(clause, Clause::new([stay_home, sunny]).unwrap());
assert_eq!(clause.to_string(), "stay_home, sunny.");
```
*/

use std::collections::BTreeSet;

use crate::{structures::literal::Literal, types::err::StructuralError};

/// An unconditional conjunction of literals.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause {
    /// The literals asserted, in conjunction, by the clause.
    literals: BTreeSet<Literal>,
}

impl Clause {
    /// A fresh clause over the given literals.
    ///
    /// Duplicates are collapsed.
    /// An empty collection of literals results in a [StructuralError].
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Result<Self, StructuralError> {
        let literals: BTreeSet<Literal> = literals.into_iter().collect();
        match literals.is_empty() {
            true => Err(StructuralError::EmptyClause),
            false => Ok(Clause { literals }),
        }
    }

    /// A fresh clause asserting a single literal.
    pub fn unit(literal: Literal) -> Self {
        Clause {
            literals: BTreeSet::from([literal]),
        }
    }

    /// An iterator over the literals of the clause, in sorted order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// The number of (distinct) literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause asserts `literal`.
    pub fn asserts(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut literals = self.literals.iter();
        if let Some(first) = literals.next() {
            write!(f, "{first}")?;
            for literal in literals {
                write!(f, ", {literal}")?;
            }
        }
        write!(f, ".")
    }
}
