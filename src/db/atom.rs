/*!
The atom table: internal and external name maps, for reading and writing
[Atom]s, [CLiteral](crate::structures::literal::CLiteral)s, etc.

Interning an identifier a second time returns the index issued the first
time, so within one knowledge base equality of internal atoms coincides with
equality of external identifiers.
*/

use std::collections::HashMap;

use crate::{
    structures::atom::{Atom, ATOM_MAX},
    types::err::{self},
};

/// A two-way map between external atom identifiers and internal atoms.
#[derive(Clone, Debug, Default)]
pub struct AtomTable {
    /// The external identifier of each atom, indexed by the atom.
    names: Vec<String>,

    /// The atom issued for each interned identifier.
    indices: HashMap<String, Atom>,
}

impl AtomTable {
    /// The atom issued for `name`, interning `name` if required.
    ///
    /// Returns an error if interning would exceed [ATOM_MAX].
    pub fn intern(&mut self, name: &str) -> Result<Atom, err::ErrorKind> {
        if let Some(atom) = self.indices.get(name) {
            return Ok(*atom);
        }
        if self.names.len() > ATOM_MAX as usize {
            return Err(err::ErrorKind::AtomsExhausted);
        }
        let atom = self.names.len() as Atom;
        self.names.push(name.to_owned());
        self.indices.insert(name.to_owned(), atom);
        Ok(atom)
    }

    /// The atom issued for `name`, if `name` has been interned.
    pub fn atom(&self, name: &str) -> Option<Atom> {
        self.indices.get(name).copied()
    }

    /// The external identifier of `atom`.
    ///
    /// # Safety
    /// Assumes `atom` was issued by this table.
    pub fn name(&self, atom: Atom) -> &str {
        &self.names[atom as usize]
    }

    /// A count of interned atoms.
    pub fn count(&self) -> usize {
        self.names.len()
    }
}
