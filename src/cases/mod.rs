/*!
Cases: the classification of a pool literal and the enumeration of the
evidence which supports it.

A [Case] is a view pairing a claim (a pool literal) with the knowledge base
which issued it.
From a case follow:

- The claim's [status](Case::status): [Contained](LiteralStatus::Contained)
  if some stored clause asserts the claim, [Entailed](LiteralStatus::Entailed)
  if no clause does but some rule concludes it, and
  [Unsupported](LiteralStatus::Unsupported) otherwise.
- Whether the claim is [supported](Case::is_supported): some clause asserts
  it, or some asserting rule has a fully supported body.
- The claim's [evidence sets](Case::evidence_sets): every combinatorially
  distinct set of clauses and rules which together justify the claim's
  derivation. Each such set, with the claim as conclusion, is one
  [Argument].

```rust
# use evidentia::db::KnowledgeBase;
# use evidentia::cases::LiteralStatus;
# use evidentia::structures::literal::Literal;
let kb = KnowledgeBase::from_text(
    "sunny, stay_home. happy :- stay_home.",
    Default::default(),
).unwrap();

let case = kb.case(&Literal::positive("happy")).unwrap();

assert_eq!(case.status(), LiteralStatus::Entailed);
assert!(case.is_supported());
assert_eq!(case.evidence_sets().count(), 1);
```
*/

mod evidence;
pub use evidence::{Argument, Arguments, EvidenceSet, EvidenceSets};

use std::collections::BTreeSet;

use crate::{
    db::{keys::SupportKey, KnowledgeBase, Support},
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

/// The classification of a pool literal by its direct support.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralStatus {
    /// At least one stored clause asserts the literal.
    Contained,

    /// No stored clause asserts the literal, though at least one stored rule
    /// concludes it.
    Entailed,

    /// No stored clause or rule asserts the literal.
    /// A leaf with no evidence, and so a literal which appears in no argument.
    Unsupported,
}

impl std::fmt::Display for LiteralStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contained => write!(f, "Contained"),
            Self::Entailed => write!(f, "Entailed"),
            Self::Unsupported => write!(f, "Unsupported"),
        }
    }
}

/// A claim paired with the knowledge base which issued it.
#[derive(Clone, Copy)]
pub struct Case<'db> {
    /// The base the claim belongs to.
    base: &'db KnowledgeBase,

    /// The claim of the case.
    claim: CLiteral,
}

impl<'db> Case<'db> {
    /// The claim of the case.
    pub fn claim(&self) -> CLiteral {
        self.claim
    }

    /// The support record of the claim.
    fn support(&self) -> &'db Support {
        // A case is only issued for a pool literal.
        match self.base.support(self.claim) {
            Some(support) => support,
            None => unreachable!("Case issued for a literal outside the pool"),
        }
    }

    /// Keys of the clauses which assert the claim.
    pub fn asserting_clauses(&self) -> &'db [SupportKey] {
        &self.support().clauses
    }

    /// Keys of the rules whose head is the claim.
    pub fn asserting_rules(&self) -> &'db [SupportKey] {
        &self.support().rules
    }

    /// The status of the claim.
    pub fn status(&self) -> LiteralStatus {
        let support = self.support();
        if !support.clauses.is_empty() {
            LiteralStatus::Contained
        } else if !support.rules.is_empty() {
            LiteralStatus::Entailed
        } else {
            LiteralStatus::Unsupported
        }
    }

    /// Whether the claim is supported: asserted by a clause, or concluded by
    /// an asserting rule whose body literals are all (recursively) supported.
    ///
    /// Support which rests only on a dependency cycle does not count.
    pub fn is_supported(&self) -> bool {
        let mut in_progress = BTreeSet::default();
        self.base.supported(self.claim, &mut in_progress)
    }

    /// Keys of the asserting rules which are themselves supported.
    pub fn supporting_rules(&self) -> Vec<SupportKey> {
        self.asserting_rules()
            .iter()
            .filter(|key| {
                let mut in_progress = BTreeSet::from([self.claim]);
                self.base.supported_rule(**key, &mut in_progress)
            })
            .copied()
            .collect()
    }

    /// An iterator over the evidence sets of the claim.
    ///
    /// See [EvidenceSets] for the production and its cycle policy.
    pub fn evidence_sets(&self) -> EvidenceSets<'db> {
        EvidenceSets::new(self.base, self.claim)
    }

    /// An iterator over the arguments for the claim: each evidence set paired
    /// with the claim as conclusion.
    pub fn arguments(&self) -> Arguments<'db> {
        Arguments::new(self.evidence_sets())
    }
}

impl std::fmt::Display for Case<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut strings: Vec<String> = self
            .asserting_clauses()
            .iter()
            .chain(self.asserting_rules())
            .map(|key| self.base.support_string(*key))
            .collect();
        strings.sort_unstable();
        write!(
            f,
            "({{{}}}, {})",
            strings.join(" "),
            self.base.literal_string(self.claim)
        )
    }
}

impl KnowledgeBase {
    /// The case of `literal`.
    ///
    /// A literal outside the pool of the base results in
    /// [NotFoundError::UnknownLiteral](crate::types::err::NotFoundError).
    pub fn case(&self, literal: &Literal) -> Result<Case<'_>, err::ErrorKind> {
        let claim = self.canonical(literal)?;
        Ok(Case { base: self, claim })
    }

    /// The status of `literal`.
    pub fn status(&self, literal: &Literal) -> Result<LiteralStatus, err::ErrorKind> {
        Ok(self.case(literal)?.status())
    }

    /// Whether `literal` is supported. See [Case::is_supported].
    pub fn is_supported(&self, literal: &Literal) -> Result<bool, err::ErrorKind> {
        Ok(self.case(literal)?.is_supported())
    }

    /// An iterator over the evidence sets of `literal`.
    pub fn evidence_sets(&self, literal: &Literal) -> Result<EvidenceSets<'_>, err::ErrorKind> {
        Ok(self.case(literal)?.evidence_sets())
    }

    /// An iterator over the arguments for `literal`.
    pub fn arguments(&self, literal: &Literal) -> Result<Arguments<'_>, err::ErrorKind> {
        Ok(self.case(literal)?.arguments())
    }

    /// Whether `literal` is supported, guarding against revisits along the
    /// active path.
    pub(crate) fn supported(
        &self,
        literal: CLiteral,
        in_progress: &mut BTreeSet<CLiteral>,
    ) -> bool {
        let support = match self.support(literal) {
            Some(support) => support,
            None => return false,
        };

        if !support.clauses.is_empty() {
            return true;
        }

        // A revisited literal contributes nothing along this path.
        if !in_progress.insert(literal) {
            return false;
        }

        let supported = support
            .rules
            .iter()
            .any(|key| self.supported_rule(*key, in_progress));

        in_progress.remove(&literal);
        supported
    }

    /// Whether the rule behind `key` is supported: every body literal is
    /// supported.
    pub(crate) fn supported_rule(
        &self,
        key: SupportKey,
        in_progress: &mut BTreeSet<CLiteral>,
    ) -> bool {
        match self.rule(key) {
            Some(rule) => rule
                .body()
                .all(|literal| self.supported(literal, in_progress)),
            None => false,
        }
    }
}

#[cfg(test)]
mod case_tests {
    use super::*;
    use crate::config::Config;

    fn weather_base() -> KnowledgeBase {
        KnowledgeBase::from_text(
            "sunny, stay_home.
~happy :- sunny, stay_home.
~work_well :- stay_home.
happy :- stay_home.
work_well :- happy.",
            Config::default(),
        )
        .unwrap()
    }

    #[test]
    fn classification() {
        let kb = weather_base();

        assert_eq!(
            kb.status(&Literal::positive("sunny")),
            Ok(LiteralStatus::Contained)
        );
        assert_eq!(
            kb.status(&Literal::positive("happy")),
            Ok(LiteralStatus::Entailed)
        );
        assert_eq!(
            kb.status(&Literal::negative("work_well")),
            Ok(LiteralStatus::Entailed)
        );

        let unsupported =
            KnowledgeBase::from_text("p :- q.", Config::default()).unwrap();
        assert_eq!(
            unsupported.status(&Literal::positive("q")),
            Ok(LiteralStatus::Unsupported)
        );
    }

    #[test]
    fn supportedness() {
        let kb = weather_base();

        for name in ["sunny", "stay_home", "happy", "work_well"] {
            assert_eq!(kb.is_supported(&Literal::positive(name)), Ok(true));
        }

        let leaf = KnowledgeBase::from_text("p :- q.", Config::default()).unwrap();
        assert_eq!(leaf.is_supported(&Literal::positive("q")), Ok(false));
        assert_eq!(leaf.is_supported(&Literal::positive("p")), Ok(false));
    }

    #[test]
    fn cyclic_support_does_not_count() {
        let kb = KnowledgeBase::from_text("p :- q. q :- p.", Config::default()).unwrap();

        assert_eq!(kb.is_supported(&Literal::positive("p")), Ok(false));
        assert_eq!(kb.is_supported(&Literal::positive("q")), Ok(false));

        // A clause for q grounds the cycle.
        let kb = KnowledgeBase::from_text("p :- q. q :- p. q.", Config::default()).unwrap();

        assert_eq!(kb.is_supported(&Literal::positive("p")), Ok(true));
        assert_eq!(kb.is_supported(&Literal::positive("q")), Ok(true));
    }

    #[test]
    fn supporting_rules() {
        let kb = KnowledgeBase::from_text("a. p :- a. p :- b.", Config::default()).unwrap();

        let case = kb.case(&Literal::positive("p")).unwrap();

        assert_eq!(case.asserting_rules().len(), 2);
        // Only `p :- a.` is supported, as nothing supports b.
        let supporting = case.supporting_rules();
        assert_eq!(supporting.len(), 1);
        assert_eq!(kb.support_string(supporting[0]), "p :- a.");
    }

    #[test]
    fn unknown_claim() {
        let kb = weather_base();

        assert!(kb.case(&Literal::positive("snow")).is_err());
        assert!(kb.evidence_sets(&Literal::negative("sunny")).is_err());
    }
}
