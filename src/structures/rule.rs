/*!
Rules, aka. the derivation of a head literal from a body of literals by modus
ponens, the only proof rule of the logic.

A rule pairs one head literal with a non-empty, duplicate-free set of body
literals.
A rule whose head also appears in its own body is accepted here; recursion
through such rules is the business of the evidence engine.

```rust
# use evidentia::structures::{literal::Literal, rule::Rule};
let happy = Literal::positive("happy");
let not_raining = Literal::negative("raining");

let rule = Rule::new(happy.clone(), [not_raining]).unwrap();

assert_eq!(rule.head(), &happy);
assert_eq!(rule.to_string(), "happy :- ~raining.");
```
*/

use std::collections::BTreeSet;

use crate::{structures::literal::Literal, types::err::StructuralError};

/// The derivation of a head literal from a conjunction of body literals.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rule {
    /// The head (consequent) of the rule.
    head: Literal,

    /// The body (antecedent) of the rule.
    body: BTreeSet<Literal>,
}

impl Rule {
    /// A fresh rule deriving `head` from the given body literals.
    ///
    /// Duplicate body literals are collapsed.
    /// An empty body results in a [StructuralError].
    pub fn new(
        head: Literal,
        body: impl IntoIterator<Item = Literal>,
    ) -> Result<Self, StructuralError> {
        let body: BTreeSet<Literal> = body.into_iter().collect();
        match body.is_empty() {
            true => Err(StructuralError::EmptyRuleBody),
            false => Ok(Rule { head, body }),
        }
    }

    /// The head of the rule.
    pub fn head(&self) -> &Literal {
        &self.head
    }

    /// An iterator over the body literals of the rule, in sorted order.
    pub fn body(&self) -> impl Iterator<Item = &Literal> {
        self.body.iter()
    }

    /// The number of (distinct) body literals of the rule.
    pub fn body_size(&self) -> usize {
        self.body.len()
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} :- ", self.head)?;
        let mut body = self.body.iter();
        if let Some(first) = body.next() {
            write!(f, "{first}")?;
            for literal in body {
                write!(f, ", {literal}")?;
            }
        }
        write!(f, ".")
    }
}

#[cfg(test)]
mod rule_tests {
    use super::*;

    #[test]
    fn head_and_body_equality() {
        let p = Literal::positive("p");
        let q = Literal::positive("q");
        let r = Literal::positive("r");

        let left = Rule::new(p.clone(), [q.clone(), r.clone()]).unwrap();
        let right = Rule::new(p.clone(), [r.clone(), q.clone()]).unwrap();

        assert_eq!(left, right);
        assert_ne!(left, Rule::new(q, [p, r]).unwrap());
    }

    #[test]
    fn self_referential_head_accepted() {
        let p = Literal::positive("p");

        let rule = Rule::new(p.clone(), [p]);

        assert!(rule.is_ok());
    }

    #[test]
    fn empty_body_rejected() {
        let rule = Rule::new(Literal::positive("p"), Vec::<Literal>::new());

        assert_eq!(rule, Err(StructuralError::EmptyRuleBody));
    }
}
