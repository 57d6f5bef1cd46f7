/*!
(The internal representation of) an atom, aka. an atomic proposition.

- 'External' atoms are the identifiers written in a program: a letter followed
  by letters, digits, or underscores. \
  Examples: `sunny`, `stay_home`, `FranceIsCold`, `p12`.
- 'Internal' atoms are `u32` indices into the atom table of a knowledge base.

Each internal atom is a u32 *u* such that either *u* is 0 or *u - 1* is an atom.
That is, the atoms of a knowledge base are [0..*m*) for some *m*.

This representation allows atoms to be used as the indices of a structure,
e.g. `support[a]`, without taking too much space.

# Notes
- The external representation of an atom is stored in the atom table of a
  knowledge base, and only there.
- In the argumentation literature these are often called 'atomic statements'
  while in the logic-programming literature these are often called 'atoms'.
*/

/// An atom, aka. an atomic proposition.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = (u32::MAX >> 1) - 1;

/// Whether `name` is a well-formed external atom identifier.
///
/// A well-formed identifier is a letter followed by any mix of letters,
/// digits, and underscores.
///
/// ```rust
/// # use evidentia::structures::atom::wellformed_identifier;
/// assert!(wellformed_identifier("stay_home"));
/// assert!(wellformed_identifier("p12"));
/// assert!(!wellformed_identifier("12p"));
/// assert!(!wellformed_identifier("~p"));
/// assert!(!wellformed_identifier(""));
/// ```
pub fn wellformed_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
