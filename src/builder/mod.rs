/*!
Construction of a [KnowledgeBase] from its three input shapes.

A base may be built from:

- A collection of free-standing [Clause]s and [Rule]s ([Source::Parts],
  [KnowledgeBase::from_parts]).
- Program text ([Source::Text], [KnowledgeBase::from_text]).
- A path to a file of program text ([Source::Path],
  [KnowledgeBase::from_path]).

All three shapes funnel into the same consolidation routine, which walks every
literal referenced by every input clause and rule, interns each distinct
(atom, polarity) pair once, rebuilds the clauses and rules over the interned
pool, and records for each pool literal the clauses which contain it and the
rules whose head it is.
Construction is atomic: on any error the caller receives no base.

A fourth constructor, [KnowledgeBase::from_path_or_text], keeps the legacy
dispatch policy for a single string: try the string as a path first, and only
if no file exists there read the string itself as program text.
The policy can misread a program which happens to name an existing file; this
is deliberate, for compatibility, and the tagged [Source] variants are the
unambiguous interface.

```rust
# use evidentia::db::KnowledgeBase;
let text = "sunny, stay_home. happy :- stay_home.";

let kb = KnowledgeBase::from_text(text, Default::default()).unwrap();

assert_eq!(kb.clause_count(), 1);
assert_eq!(kb.rule_count(), 1);
assert_eq!(kb.atom_count(), 3);
```
*/

pub mod parse;

use std::{
    collections::HashSet,
    io::Read,
    path::{Path, PathBuf},
};

use parse::Program;

use crate::{
    config::Config,
    db::{
        clause::DbClause,
        keys::{FormulaIndex, SupportKey},
        rule::DbRule,
        KnowledgeBase, Support,
    },
    misc::log::targets::{self},
    structures::{
        clause::Clause,
        literal::{CLiteral, Literal},
        rule::Rule,
    },
    types::err::{self, NotFoundError},
};

/// A source from which a knowledge base may be built.
#[derive(Clone, Debug)]
pub enum Source {
    /// A path to a file of program text.
    Path(PathBuf),

    /// Program text.
    Text(String),

    /// Free-standing clauses and rules.
    Parts {
        clauses: Vec<Clause>,
        rules: Vec<Rule>,
    },
}

impl KnowledgeBase {
    /// Builds a knowledge base from `source` under `config`.
    pub fn from_source(source: Source, config: Config) -> Result<Self, err::ErrorKind> {
        match source {
            Source::Path(path) => Self::from_path(&path, config),
            Source::Text(text) => Self::from_text(&text, config),
            Source::Parts { clauses, rules } => Self::from_parts(clauses, rules, config),
        }
    }

    /// Builds a knowledge base from free-standing clauses and rules.
    ///
    /// The given structures are not stored: equivalent clauses and rules are
    /// rebuilt over the interned literal pool of the base.
    pub fn from_parts(
        clauses: impl IntoIterator<Item = Clause>,
        rules: impl IntoIterator<Item = Rule>,
        config: Config,
    ) -> Result<Self, err::ErrorKind> {
        let program = Program {
            clauses: clauses.into_iter().collect(),
            rules: rules.into_iter().collect(),
        };
        Self::consolidate(program, config)
    }

    /// Builds a knowledge base by parsing `text` as a program.
    pub fn from_text(text: &str, config: Config) -> Result<Self, err::ErrorKind> {
        let program = Program::parse(text)?;
        Self::consolidate(program, config)
    }

    /// Builds a knowledge base from the program text in the file at `path`.
    ///
    /// A path at which no file exists results in
    /// [NotFoundError::NoFile](crate::types::err::NotFoundError).
    /// With the `xz` feature, a file with the `xz` extension is decompressed
    /// while read.
    pub fn from_path(path: &Path, config: Config) -> Result<Self, err::ErrorKind> {
        if !path.is_file() {
            return Err(err::ErrorKind::from(NotFoundError::NoFile));
        }

        let mut file = std::fs::File::open(path)?;
        let mut text = String::new();

        match path.extension() {
            #[cfg(feature = "xz")]
            Some(extension) if extension == std::ffi::OsStr::new("xz") => {
                xz2::read::XzDecoder::new(file).read_to_string(&mut text)?;
            }

            _ => {
                file.read_to_string(&mut text)?;
            }
        };

        Self::from_text(&text, config)
    }

    /// Builds a knowledge base from a string which is either a path to a file
    /// of program text or program text itself.
    ///
    /// The string is tried as a path first; only if no file exists at the
    /// path is the string read as program text.
    /// So, a program which coincides with the path of an existing file is
    /// misread as a path; use [Source::Text] or
    /// [from_text](KnowledgeBase::from_text) when this matters.
    ///
    /// A string which neither names a file nor parses as a program results in
    /// [NotFoundError::UnresolvedSource](crate::types::err::NotFoundError).
    pub fn from_path_or_text(string: &str, config: Config) -> Result<Self, err::ErrorKind> {
        if Path::new(string).is_file() {
            return Self::from_path(Path::new(string), config);
        }

        match Program::parse(string) {
            Ok(program) => Self::consolidate(program, config),
            Err(e) => Err(err::ErrorKind::from(NotFoundError::UnresolvedSource(e))),
        }
    }

    /// Consolidates a program into a knowledge base.
    ///
    /// Linear in the total count of literal occurrences across the program.
    fn consolidate(program: Program, config: Config) -> Result<Self, err::ErrorKind> {
        let mut base = KnowledgeBase {
            atoms: Default::default(),
            clauses: Vec::with_capacity(program.clauses.len()),
            rules: Vec::with_capacity(program.rules.len()),
            supports: Vec::default(),
            config,
        };

        // First pass: intern every literal and rebuild the stores, collapsing
        // structural duplicates onto one key.
        let mut seen_clauses: HashSet<DbClause> = HashSet::default();
        for clause in &program.clauses {
            let literals = clause
                .literals()
                .map(|l| base.intern(l))
                .collect::<Result<Vec<CLiteral>, err::ErrorKind>>()?;
            let db_clause = DbClause::new(literals);

            match seen_clauses.insert(db_clause.clone()) {
                true => base.clauses.push(db_clause),
                false => {
                    log::trace!(target: targets::CONSOLIDATION, "Duplicate clause: {clause}")
                }
            }
        }

        let mut seen_rules: HashSet<DbRule> = HashSet::default();
        for rule in &program.rules {
            let head = base.intern(rule.head())?;
            let body = rule
                .body()
                .map(|l| base.intern(l))
                .collect::<Result<Vec<CLiteral>, err::ErrorKind>>()?;
            let db_rule = DbRule::new(head, body);

            match seen_rules.insert(db_rule.clone()) {
                true => base.rules.push(db_rule),
                false => log::trace!(target: targets::CONSOLIDATION, "Duplicate rule: {rule}"),
            }
        }

        // Second pass: mark every occurring literal as a pool literal and
        // index the evidence which asserts it.
        base.supports = vec![None; base.atoms.count() * 2];

        for index in 0..base.clauses.len() {
            for literal in base.clauses[index].literals().collect::<Vec<_>>() {
                let support = base.pool_entry(literal);
                support.clauses.push(SupportKey::Clause(index as FormulaIndex));
            }
        }

        for index in 0..base.rules.len() {
            let head = base.rules[index].head();
            let body = base.rules[index].body().collect::<Vec<_>>();

            base.pool_entry(head)
                .rules
                .push(SupportKey::Rule(index as FormulaIndex));
            for literal in body {
                base.pool_entry(literal);
            }
        }

        log::info!(
            target: targets::CONSOLIDATION,
            "Consolidated {} clause(s) and {} rule(s) over {} atom(s)",
            base.clauses.len(),
            base.rules.len(),
            base.atoms.count()
        );

        Ok(base)
    }

    /// The canonical form of `literal`, interning its atom if required.
    fn intern(&mut self, literal: &Literal) -> Result<CLiteral, err::ErrorKind> {
        let atom = self.atoms.intern(literal.atom())?;
        Ok(CLiteral::new(atom, literal.polarity()))
    }

    /// The support entry of `literal`, created empty if absent.
    fn pool_entry(&mut self, literal: CLiteral) -> &mut Support {
        self.supports[literal.index()].get_or_insert_with(Support::default)
    }
}

#[cfg(test)]
mod consolidation_tests {
    use super::*;

    fn weather_base() -> KnowledgeBase {
        let text = "sunny, stay_home.
~happy :- sunny, stay_home.
~work_well :- stay_home.
happy :- stay_home.
work_well :- happy.";
        KnowledgeBase::from_text(text, Config::default()).unwrap()
    }

    #[test]
    fn consolidation_identity() {
        let kb = weather_base();

        // stay_home occurs in the clause and in three rule bodies, and is
        // interned to a single canonical literal.
        let stay_home = kb.canonical(&Literal::positive("stay_home")).unwrap();

        let clause = kb.clause(SupportKey::Clause(0)).unwrap();
        assert!(clause.asserts(stay_home));

        for key in kb.rule_keys().take(3) {
            let rule = kb.rule(key).unwrap();
            assert!(rule.body().any(|l| l == stay_home));
        }
    }

    #[test]
    fn support_indexing() {
        let kb = weather_base();

        let happy = kb.canonical(&Literal::positive("happy")).unwrap();
        let support = kb.support(happy).unwrap();

        assert!(support.asserting_clauses().is_empty());
        assert_eq!(support.asserting_rules().len(), 1);

        let sunny = kb.canonical(&Literal::positive("sunny")).unwrap();
        let support = kb.support(sunny).unwrap();

        assert_eq!(support.asserting_clauses().len(), 1);
        assert!(support.asserting_rules().is_empty());
    }

    #[test]
    fn duplicates_collapse() {
        let kb = KnowledgeBase::from_text("a, b. b, a. p :- b, a, b.", Config::default()).unwrap();

        assert_eq!(kb.clause_count(), 1);
        assert_eq!(kb.rule_count(), 1);
        assert_eq!(kb.rule(SupportKey::Rule(0)).unwrap().body_size(), 2);
    }

    #[test]
    fn parts_are_rebuilt_not_reused() {
        let clause = Clause::new([Literal::positive("a"), Literal::negative("b")]).unwrap();
        let rule = Rule::new(Literal::positive("c"), [Literal::positive("a")]).unwrap();

        let kb =
            KnowledgeBase::from_parts([clause.clone()], [rule.clone()], Config::default()).unwrap();

        assert_eq!(kb.clause_count(), 1);
        assert_eq!(kb.clause_string(kb.clause(SupportKey::Clause(0)).unwrap()), clause.to_string());
        assert_eq!(kb.rule_string(kb.rule(SupportKey::Rule(0)).unwrap()), rule.to_string());
    }

    #[test]
    fn unknown_literals() {
        let kb = weather_base();

        assert!(kb.canonical(&Literal::negative("sunny")).is_err());
        assert!(kb.canonical(&Literal::positive("snow")).is_err());
        // ~happy and ~work_well are pool literals, as rule heads.
        assert!(kb.canonical(&Literal::negative("happy")).is_ok());
        assert!(kb.canonical(&Literal::negative("work_well")).is_ok());
    }
}
