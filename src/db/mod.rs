/*!
The knowledge base: a consolidated pool of literals together with the
clauses and rules asserted over them.

Strictly, a [KnowledgeBase] holds:

- An [AtomTable] mapping external atom identifiers to internal
  [Atom](crate::structures::atom::Atom)s.
- A clause store and a rule store, holding [DbClause]s and [DbRule]s rebuilt
  over canonical literals, addressed by [SupportKey]s.
- A support table, indexed by literals, recording for each pool literal the
  keys of the clauses which contain it and of the rules whose head it is.

Consolidation happens once, during construction (see the
[builder](crate::builder)); a built knowledge base is read only.
Because every occurrence of the same (atom, polarity) pair is interned to the
same canonical literal, evidence over the base can be compared and unioned by
key rather than by deep equality.

Fields of the base are private to ensure the invariant that every literal
reachable from a stored clause or rule has an entry in the support table.
*/

pub mod atom;
pub mod clause;
pub mod keys;
pub mod rule;

use std::collections::BTreeSet;

use crate::{
    config::Config,
    db::{atom::AtomTable, clause::DbClause, keys::SupportKey, rule::DbRule},
    structures::literal::{CLiteral, Literal},
    types::err::{self, NotFoundError},
};

/// The support record of one pool literal.
///
/// Conceptually this is the literal's own view onto the evidence which
/// asserts it, and the starting point of the literal's case.
#[derive(Clone, Debug, Default)]
pub struct Support {
    /// Keys of the clauses which contain the literal.
    pub(crate) clauses: Vec<SupportKey>,

    /// Keys of the rules whose head is the literal.
    pub(crate) rules: Vec<SupportKey>,
}

impl Support {
    /// Keys of the clauses which contain the literal.
    pub fn asserting_clauses(&self) -> &[SupportKey] {
        &self.clauses
    }

    /// Keys of the rules whose head is the literal.
    pub fn asserting_rules(&self) -> &[SupportKey] {
        &self.rules
    }
}

/// A consolidated knowledge base of clauses and rules over one pool of
/// literals.
#[derive(Clone, Debug)]
pub struct KnowledgeBase {
    /// The atom table of the base.
    pub(crate) atoms: AtomTable,

    /// The clause store, indexed by [SupportKey::Clause] keys.
    pub(crate) clauses: Vec<DbClause>,

    /// The rule store, indexed by [SupportKey::Rule] keys.
    pub(crate) rules: Vec<DbRule>,

    /// The support table, indexed by [CLiteral::index].
    ///
    /// `None` records that the literal occurs nowhere in the base.
    pub(crate) supports: Vec<Option<Support>>,

    /// The configuration of the base.
    pub(crate) config: Config,
}

impl KnowledgeBase {
    /// The configuration of the base.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A count of interned atoms.
    pub fn atom_count(&self) -> usize {
        self.atoms.count()
    }

    /// A count of stored clauses.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of stored rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// The canonical form of `literal`, if `literal` is in the pool of the
    /// base.
    ///
    /// ```rust
    /// # use evidentia::db::KnowledgeBase;
    /// # use evidentia::structures::literal::Literal;
    /// let kb = KnowledgeBase::from_text("p :- q.", Default::default()).unwrap();
    ///
    /// assert!(kb.canonical(&Literal::positive("q")).is_ok());
    /// assert!(kb.canonical(&Literal::negative("q")).is_err());
    /// ```
    pub fn canonical(&self, literal: &Literal) -> Result<CLiteral, err::ErrorKind> {
        let unknown = || {
            err::ErrorKind::from(NotFoundError::UnknownLiteral(literal.to_string()))
        };

        let atom = self.atoms.atom(literal.atom()).ok_or_else(unknown)?;
        let canonical = CLiteral::new(atom, literal.polarity());

        match self.supports.get(canonical.index()) {
            Some(Some(_)) => Ok(canonical),
            _ => Err(unknown()),
        }
    }

    /// An iterator over the pool literals of the base.
    ///
    /// A literal is in the pool exactly when it occurs in some stored clause
    /// or rule.
    pub fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.supports
            .iter()
            .enumerate()
            .filter_map(|(index, support)| {
                support
                    .as_ref()
                    .map(|_| CLiteral::new((index >> 1) as u32, index & 1 == 1))
            })
    }

    /// The support record of `literal`, if `literal` is in the pool.
    pub fn support(&self, literal: CLiteral) -> Option<&Support> {
        self.supports.get(literal.index())?.as_ref()
    }

    /// The stored clause behind `key`, if `key` is a clause key of the base.
    pub fn clause(&self, key: SupportKey) -> Option<&DbClause> {
        match key {
            SupportKey::Clause(index) => self.clauses.get(index as usize),
            SupportKey::Rule(_) => None,
        }
    }

    /// The stored rule behind `key`, if `key` is a rule key of the base.
    pub fn rule(&self, key: SupportKey) -> Option<&DbRule> {
        match key {
            SupportKey::Rule(index) => self.rules.get(index as usize),
            SupportKey::Clause(_) => None,
        }
    }

    /// An iterator over all clause keys of the base.
    pub fn clause_keys(&self) -> impl Iterator<Item = SupportKey> {
        (0..self.clauses.len() as u32).map(SupportKey::Clause)
    }

    /// An iterator over all rule keys of the base.
    pub fn rule_keys(&self) -> impl Iterator<Item = SupportKey> {
        (0..self.rules.len() as u32).map(SupportKey::Rule)
    }

    /// The external (input) form of a canonical literal.
    pub fn external(&self, literal: CLiteral) -> Literal {
        Literal::new(self.atoms.name(literal.atom()), literal.polarity())
    }

    /// The string of a canonical literal, in the program grammar.
    pub fn literal_string(&self, literal: CLiteral) -> String {
        match literal.polarity() {
            true => self.atoms.name(literal.atom()).to_owned(),
            false => format!("~{}", self.atoms.name(literal.atom())),
        }
    }

    /// The string of a stored clause, in the program grammar.
    ///
    /// Literals appear sorted by external identifier and then polarity, so
    /// the string is independent of interning order and coincides with the
    /// rendering of the equivalent free-standing [Clause](crate::structures::clause::Clause).
    pub fn clause_string(&self, clause: &DbClause) -> String {
        let mut literals: Vec<Literal> = clause.literals().map(|l| self.external(l)).collect();
        literals.sort_unstable();
        let strings: Vec<String> = literals.iter().map(|l| l.to_string()).collect();
        format!("{}.", strings.join(", "))
    }

    /// The string of a stored rule, in the program grammar.
    pub fn rule_string(&self, rule: &DbRule) -> String {
        let mut body: Vec<Literal> = rule.body().map(|l| self.external(l)).collect();
        body.sort_unstable();
        let strings: Vec<String> = body.iter().map(|l| l.to_string()).collect();
        format!(
            "{} :- {}.",
            self.external(rule.head()),
            strings.join(", ")
        )
    }

    /// The string of the clause or rule behind `key`, in the program grammar.
    ///
    /// # Safety
    /// Assumes `key` was issued by this base.
    pub fn support_string(&self, key: SupportKey) -> String {
        match key {
            SupportKey::Clause(index) => self.clause_string(&self.clauses[index as usize]),
            SupportKey::Rule(index) => self.rule_string(&self.rules[index as usize]),
        }
    }

    /// The name-level form of the base: the set of stored clauses and the set
    /// of stored rules, each over external identifiers.
    ///
    /// Two bases which intern atoms in different orders compare equal exactly
    /// when they assert the same clauses and rules.
    fn name_level(&self) -> (BTreeSet<BTreeSet<Literal>>, BTreeSet<(Literal, BTreeSet<Literal>)>) {
        let clauses = self
            .clauses
            .iter()
            .map(|clause| clause.literals().map(|l| self.external(l)).collect())
            .collect();
        let rules = self
            .rules
            .iter()
            .map(|rule| {
                (
                    self.external(rule.head()),
                    rule.body().map(|l| self.external(l)).collect(),
                )
            })
            .collect();
        (clauses, rules)
    }
}

impl PartialEq for KnowledgeBase {
    fn eq(&self, other: &Self) -> bool {
        self.name_level() == other.name_level()
    }
}

impl Eq for KnowledgeBase {}

impl std::fmt::Display for KnowledgeBase {
    /// The base as a program, one statement per line, clauses before rules.
    ///
    /// Parsing the string yields an equal base.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for clause in &self.clauses {
            writeln!(f, "{}", self.clause_string(clause))?;
        }
        for rule in &self.rules {
            writeln!(f, "{}", self.rule_string(rule))?;
        }
        Ok(())
    }
}
