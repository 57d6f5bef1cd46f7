//! Structures, for representing the elements of a program (atoms, literals,
//! clauses, rules).
//!
//! These are the input-level structures: they own their atom identifiers and
//! are compared structurally.
//! A [KnowledgeBase](crate::db::KnowledgeBase) never stores them as given;
//! consolidation rebuilds everything over canonical
//! [CLiteral](crate::structures::literal::CLiteral)s issued by its atom table.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod rule;
