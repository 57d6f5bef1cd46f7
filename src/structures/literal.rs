/*!
Literals are atoms paired with a (boolean) polarity.

Two representations are used:

- [Literal] pairs an owned atom identifier with a polarity. \
  This is the *input* form: it is what the parser produces, what callers hand
  to a builder, and what queries name. Instances are free-standing and
  compared structurally.
- [CLiteral] pairs an internal [Atom](crate::structures::atom::Atom) with a
  polarity. \
  This is the *canonical* form used inside a knowledge base, where every
  occurrence of the same (atom, polarity) pair is the same key.
  Consolidation is the translation from the first form to the second.

An example:

```rust
# use evidentia::structures::literal::Literal;
let literal = Literal::new("raining", false);

assert!(!literal.polarity());
assert_eq!(literal.to_string(), "~raining");

assert_eq!(literal.negate(), Literal::new("raining", true));
assert!(literal.is_negation_of(&literal.negate()));

assert_eq!(literal, Literal::new("raining", false));
assert_ne!(literal, Literal::new("raining", true));
```

Literals are ordered by atom and then polarity, with false (strictly) less
than true, and are hashable in order to allow straightforward use as the
elements of sets and the keys of maps.
*/

use crate::structures::atom::Atom;

/// An input literal: an owned atom identifier paired with a polarity.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The atom of the literal.
    atom: String,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing an atom identifier with a boolean.
    ///
    /// Construction never fails.
    /// Identifier checks are made when parsing program text, not here.
    pub fn new(atom: impl Into<String>, polarity: bool) -> Self {
        Literal {
            atom: atom.into(),
            polarity,
        }
    }

    /// A fresh positive literal over `atom`.
    pub fn positive(atom: impl Into<String>) -> Self {
        Self::new(atom, true)
    }

    /// A fresh negative literal over `atom`.
    pub fn negative(atom: impl Into<String>) -> Self {
        Self::new(atom, false)
    }

    /// The atom of the literal.
    pub fn atom(&self) -> &str {
        &self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    /// Whether `other` asserts the logical complement of the literal.
    ///
    /// That is, whether the two share an atom and differ in polarity.
    pub fn is_negation_of(&self, other: &Literal) -> bool {
        self.atom == other.atom && self.polarity != other.polarity
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "~{}", self.atom),
        }
    }
}

/// The canonical representation of a literal inside a knowledge base.
///
/// As the atom is an index into the atom table of some knowledge base, a
/// canonical literal is only meaningful relative to the base which issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CLiteral {
    /// The atom of the literal.
    atom: Atom,

    /// The polarity of the literal.
    polarity: bool,
}

impl CLiteral {
    /// A fresh canonical literal, specified by pairing an atom with a boolean.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        CLiteral { atom, polarity }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> Atom {
        self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        CLiteral {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    /// The index of the literal, for use against structures indexed by
    /// literals (e.g. the support table of a knowledge base).
    ///
    /// Literals over atom *a* occupy indices *2a* (negative) and *2a + 1*
    /// (positive).
    pub fn index(&self) -> usize {
        ((self.atom as usize) << 1) | (self.polarity as usize)
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn structural_equality() {
        let a = Literal::new("a", true);
        let also_a = Literal::new(String::from("a"), true);
        let not_a = Literal::new("a", false);

        assert_eq!(a, also_a);
        assert_ne!(a, not_a);
        assert_ne!(a, Literal::new("b", true));
    }

    #[test]
    fn negation() {
        let f = Literal::new("FranceIsCold", true);

        assert!(f.is_negation_of(&f.negate()));
        assert!(!f.is_negation_of(&f));
        assert!(!f.is_negation_of(&Literal::new("FranceIsWarm", false)));

        assert_eq!(f.negate().negate(), f);
    }

    #[test]
    fn rendering() {
        assert_eq!(Literal::positive("sunny").to_string(), "sunny");
        assert_eq!(Literal::negative("sunny").to_string(), "~sunny");
    }

    #[test]
    fn canonical_indices() {
        let not_p = CLiteral::new(3, false);
        let p = CLiteral::new(3, true);

        assert_eq!(not_p.index(), 6);
        assert_eq!(p.index(), 7);
        assert_eq!(p.negate(), not_p);
    }
}
