/*!
The evidence engine: lazy, depth-first backward chaining from a claim to
every set of clauses and rules which justifies it.

For a claim with support record *s*:

- Each clause of *s* independently constitutes one base evidence set
  `{clause}`.
- Each rule *r* of *s* contributes one evidence set per tuple of the
  Cartesian product over the evidence-set collections of the *distinct* body
  literals of *r*: the union of the tuple's sets, plus *r* itself.
- A claim with neither contributes nothing.

So the production is an OR across asserting clauses and rules, and an AND
(product) across the body of a single rule.

# Laziness

[EvidenceSets] steps through asserting clauses first, then asserting rules,
expanding one rule at a time with an odometer over the (recursively computed)
collections of its body literals.
Enumeration is restartable: it is a pure function of the knowledge base, and
all iteration state is local to the iterator, so concurrent enumerations over
one base never interfere.
Ordering across the sequence depends only on store iteration order and is not
semantically meaningful; callers must treat the output as an unordered
collection.

# Cycle policy

Recursive expansion carries the set of literals currently being expanded on
the active path.
A revisited literal yields an empty sub-production, so any rule whose body
depends, directly or through other rules, on the claim under expansion
contributes no evidence sets along that path.
In particular `p :- q. q :- p.` with no clauses terminates with zero sets for
both `p` and `q`, and a rule whose head appears in its own body never appears
in an argument for that head.

# Deduplication

Distinct derivation paths may assemble structurally identical evidence sets.
With [Config::dedup_evidence](crate::config::Config) set, each top-level
enumeration emits such a set once; unset (the default), the production is
raw, and for a claim with *n* asserting clauses and rules with body
collection sizes *k₁..kⱼ* the count of sets is *n + Σ over rules of
(Π over j of kⱼ)*.
*/

use std::collections::{BTreeSet, HashSet};

use crate::{
    db::{keys::SupportKey, KnowledgeBase},
    misc::log::targets::{self},
    structures::literal::CLiteral,
};

/// One set of clause and rule keys which together justify a claim.
pub type EvidenceSet = BTreeSet<SupportKey>;

/// An evidence set paired with the claim it concludes.
///
/// Sufficient and minimal input to construct one argument for a downstream
/// argumentation-semantics engine.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Argument {
    /// The claim of the argument.
    pub claim: CLiteral,

    /// The evidence supporting the claim.
    pub support: EvidenceSet,
}

/// An iterator over the arguments for one claim: each evidence set of the
/// claim, paired with the claim.
pub struct Arguments<'db> {
    /// The evidence enumeration behind the arguments.
    evidence: EvidenceSets<'db>,
}

impl<'db> Arguments<'db> {
    pub(super) fn new(evidence: EvidenceSets<'db>) -> Self {
        Arguments { evidence }
    }

    /// The claim argued for.
    pub fn claim(&self) -> CLiteral {
        self.evidence.claim()
    }
}

impl Iterator for Arguments<'_> {
    type Item = Argument;

    fn next(&mut self) -> Option<Self::Item> {
        let support = self.evidence.next()?;
        Some(Argument {
            claim: self.evidence.claim(),
            support,
        })
    }
}

/// The expansion state of a single asserting rule: an odometer over the
/// evidence-set collections of the rule's distinct body literals.
struct RuleExpansion {
    /// The key of the rule under expansion.
    rule: SupportKey,

    /// The evidence-set collection of each distinct body literal.
    ///
    /// Every factor is non-empty; a rule with an empty factor is skipped
    /// whole, as its product is empty.
    factors: Vec<Vec<EvidenceSet>>,

    /// The next tuple of the product, as an index per factor.
    odometer: Vec<usize>,

    /// Whether every tuple has been produced.
    exhausted: bool,
}

impl RuleExpansion {
    /// The next evidence set of the expansion: the union over the current
    /// tuple, plus the rule, advancing the odometer.
    fn next_set(&mut self) -> Option<EvidenceSet> {
        if self.exhausted {
            return None;
        }

        let mut set = EvidenceSet::from([self.rule]);
        for (factor, index) in self.factors.iter().zip(&self.odometer) {
            set.extend(factor[*index].iter().copied());
        }

        // Advance the odometer, rightmost position first.
        self.exhausted = true;
        for position in (0..self.odometer.len()).rev() {
            self.odometer[position] += 1;
            if self.odometer[position] < self.factors[position].len() {
                self.exhausted = false;
                break;
            }
            self.odometer[position] = 0;
        }

        Some(set)
    }
}

/// A lazy iterator over the evidence sets of one claim.
///
/// Finite for any knowledge base: cyclic support is resolved by the cycle
/// policy rather than recursed into.
pub struct EvidenceSets<'db> {
    /// The base enumerated over.
    base: &'db KnowledgeBase,

    /// The claim enumerated for.
    claim: CLiteral,

    /// Asserting clauses not yet emitted as base sets.
    clause_queue: std::vec::IntoIter<SupportKey>,

    /// Asserting rules not yet expanded.
    rule_queue: std::vec::IntoIter<SupportKey>,

    /// The expansion of the rule currently being stepped through.
    expansion: Option<RuleExpansion>,

    /// Sets already emitted, when deduplication is configured.
    emitted: Option<HashSet<EvidenceSet>>,
}

impl<'db> EvidenceSets<'db> {
    /// A fresh enumeration of the evidence sets of `claim`.
    pub(super) fn new(base: &'db KnowledgeBase, claim: CLiteral) -> Self {
        let (clauses, rules) = match base.support(claim) {
            Some(support) => (support.clauses.clone(), support.rules.clone()),
            None => (Vec::default(), Vec::default()),
        };

        EvidenceSets {
            base,
            claim,
            clause_queue: clauses.into_iter(),
            rule_queue: rules.into_iter(),
            expansion: None,
            emitted: match base.config().dedup_evidence {
                true => Some(HashSet::default()),
                false => None,
            },
        }
    }

    /// The claim enumerated for.
    pub fn claim(&self) -> CLiteral {
        self.claim
    }

    /// Prepares the expansion of the rule behind `key`, unless some body
    /// literal has no evidence sets, in which case the whole product is empty
    /// and the rule is skipped.
    fn expand_rule(&self, key: SupportKey) -> Option<RuleExpansion> {
        let rule = self.base.rule(key)?;

        let mut in_progress = BTreeSet::from([self.claim]);
        let mut factors = Vec::with_capacity(rule.body_size());

        for literal in rule.body() {
            let sets = collect_sets(self.base, literal, &mut in_progress);
            if sets.is_empty() {
                log::trace!(
                    target: targets::CASES,
                    "No evidence for body literal {} of {}",
                    self.base.literal_string(literal),
                    self.base.support_string(key),
                );
                return None;
            }
            factors.push(sets);
        }

        let odometer = vec![0; factors.len()];
        Some(RuleExpansion {
            rule: key,
            factors,
            odometer,
            exhausted: false,
        })
    }

    /// The next raw candidate set, before any deduplication.
    fn next_candidate(&mut self) -> Option<EvidenceSet> {
        loop {
            if let Some(key) = self.clause_queue.next() {
                return Some(EvidenceSet::from([key]));
            }

            if let Some(expansion) = &mut self.expansion {
                match expansion.next_set() {
                    Some(set) => return Some(set),
                    None => self.expansion = None,
                }
                continue;
            }

            match self.rule_queue.next() {
                Some(key) => self.expansion = self.expand_rule(key),
                None => return None,
            }
        }
    }
}

impl Iterator for EvidenceSets<'_> {
    type Item = EvidenceSet;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let candidate = self.next_candidate()?;
            match &mut self.emitted {
                Some(emitted) => {
                    if emitted.insert(candidate.clone()) {
                        return Some(candidate);
                    }
                }
                None => return Some(candidate),
            }
        }
    }
}

/// The full evidence-set collection of `literal`, computed depth first with
/// `in_progress` guarding the active path.
///
/// A literal already on the path yields an empty collection, per the cycle
/// policy.
fn collect_sets(
    base: &KnowledgeBase,
    literal: CLiteral,
    in_progress: &mut BTreeSet<CLiteral>,
) -> Vec<EvidenceSet> {
    let support = match base.support(literal) {
        Some(support) => support,
        None => return Vec::default(),
    };

    if !in_progress.insert(literal) {
        return Vec::default();
    }

    let mut collection: Vec<EvidenceSet> = support
        .clauses
        .iter()
        .map(|key| EvidenceSet::from([*key]))
        .collect();

    'rule_loop: for key in &support.rules {
        let rule = match base.rule(*key) {
            Some(rule) => rule,
            None => continue,
        };

        let mut factors = Vec::with_capacity(rule.body_size());
        for body_literal in rule.body() {
            let sets = collect_sets(base, body_literal, in_progress);
            if sets.is_empty() {
                continue 'rule_loop;
            }
            factors.push(sets);
        }

        // The product of the factors, accumulated left to right.
        let mut tuples: Vec<EvidenceSet> = vec![EvidenceSet::from([*key])];
        for factor in &factors {
            let mut extended = Vec::with_capacity(tuples.len() * factor.len());
            for partial in &tuples {
                for set in factor {
                    let mut union = partial.clone();
                    union.extend(set.iter().copied());
                    extended.push(union);
                }
            }
            tuples = extended;
        }
        collection.append(&mut tuples);
    }

    in_progress.remove(&literal);
    collection
}
