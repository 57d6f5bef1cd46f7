//! A library for building knowledge bases over a restricted propositional logic and enumerating the arguments which support a literal.
//!
//! evidentia consolidates ground facts (clauses) and inference rules over a shared pool of interned literals, classifies each literal by its support, and enumerates, for any literal, every combinatorially distinct set of clauses and rules which justifies its derivation.
//! The produced evidence sets are the raw material of *arguments*, intended for a downstream argumentation-semantics engine which resolves conflicts between them.
//!
//! Some guiding principles of evidentia are:
//! - One pool of literals per knowledge base: every occurrence of the same (atom, polarity) pair inside a base is interned to a single canonical key, so evidence can be compared and unioned by key rather than by deep equality.
//! - Construction is atomic and the built base is read only: a base is built once, from one of three input shapes, and either fully succeeds or yields nothing.
//! - Enumeration always terminates: mutually dependent rules are resolved by an explicit cycle policy rather than unguarded recursion.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [knowledge base](crate::db::KnowledgeBase).
//!
//! A base is built from free-standing [structures], from program text, or from a file of program text (see the [builder]).
//! Internally, a base is a handful of indexed stores:
//! - An atom table, mapping external atom identifiers to internal atoms.
//! - A clause store and a rule store, rebuilt over canonical literals and addressed by keys.
//! - A support table, recording for each pool literal the clauses which contain it and the rules which conclude it.
//!
//! Queries go through [cases](crate::cases): the [status](crate::cases::LiteralStatus) of a literal, whether it is supported, and the lazy enumeration of its [evidence sets](crate::cases::EvidenceSets).
//!
//! Useful starting points, then, may be:
//! - The [builder] for the three construction inputs and the program grammar.
//! - The [cases](crate::cases) module for classification and the evidence engine.
//! - The [structures] to familiarise yourself with the elements of a program (atoms, literals, clauses, rules).
//!
//! # The program grammar
//!
//! ```text
//! program     := statement*
//! statement   := rule_stmt | clause_stmt
//! clause_stmt := literal ("," literal)* "."
//! rule_stmt   := literal ":-" literal ("," literal)* "."
//! literal     := ["~"] atom_identifier
//! ```
//!
//! Whitespace between tokens is insignificant, `.` ends a statement, `,` is conjunction, `:-` is modus ponens, and `~` marks negative polarity.
//!
//! # Examples
//!
//! + Build a base from program text and enumerate the evidence for a literal.
//!
//! ```rust
//! # use evidentia::cases::LiteralStatus;
//! # use evidentia::config::Config;
//! # use evidentia::db::KnowledgeBase;
//! # use evidentia::structures::literal::Literal;
//! let program = "sunny, stay_home.
//! ~happy :- sunny, stay_home.
//! ~work_well :- stay_home.
//! happy :- stay_home.
//! work_well :- happy.";
//!
//! let kb = KnowledgeBase::from_text(program, Config::default()).unwrap();
//!
//! let happy = Literal::positive("happy");
//! assert_eq!(kb.status(&happy), Ok(LiteralStatus::Entailed));
//!
//! // One evidence set: the sunny, stay_home clause and the happy rule.
//! let sets: Vec<_> = kb.evidence_sets(&happy).unwrap().collect();
//! assert_eq!(sets.len(), 1);
//! assert_eq!(sets[0].len(), 2);
//!
//! // work_well builds on the evidence for happy, and adds its own rule.
//! let sets: Vec<_> = kb.evidence_sets(&Literal::positive("work_well")).unwrap().collect();
//! assert_eq!(sets.len(), 1);
//! assert_eq!(sets[0].len(), 3);
//! ```
//!
//! + Cyclic rule sets terminate, with no evidence.
//!
//! ```rust
//! # use evidentia::config::Config;
//! # use evidentia::db::KnowledgeBase;
//! # use evidentia::structures::literal::Literal;
//! let kb = KnowledgeBase::from_text("p :- q. q :- p.", Config::default()).unwrap();
//!
//! assert_eq!(kb.evidence_sets(&Literal::positive("p")).unwrap().count(), 0);
//! assert_eq!(kb.evidence_sets(&Literal::positive("q")).unwrap().count(), 0);
//! ```
//!
//! # Logging
//!
//! Calls to the [log] macros are made throughout the library, with targets listed in [misc::log::targets].
//! No log implementation is provided.

pub mod builder;
pub mod cases;
pub mod config;
pub mod db;
pub mod misc;
pub mod structures;
pub mod types;
