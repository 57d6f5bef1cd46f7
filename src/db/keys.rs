//! Keys to the clause and rule stores of a knowledge base.

/// The index to a stored clause or rule.
pub type FormulaIndex = u32;

/// A key to a piece of supporting evidence stored in a knowledge base.
///
/// Within the knowledge base clauses and rules are stored in indexed
/// structures (vectors), and a key pairs the kind of store with the index to
/// the item.
/// As a knowledge base is immutable once built, indices are never reused and
/// no generation token is required.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SupportKey {
    /// The key to a stored clause.
    Clause(FormulaIndex),

    /// The key to a stored rule.
    Rule(FormulaIndex),
}

impl SupportKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        match self {
            Self::Clause(i) | Self::Rule(i) => *i as usize,
        }
    }

    /// Whether the key points into the clause store.
    pub fn is_clause(&self) -> bool {
        matches!(self, Self::Clause(_))
    }

    /// Whether the key points into the rule store.
    pub fn is_rule(&self) -> bool {
        matches!(self, Self::Rule(_))
    }
}

impl std::fmt::Display for SupportKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clause(key) => write!(f, "Clause({key})"),
            Self::Rule(key) => write!(f, "Rule({key})"),
        }
    }
}
