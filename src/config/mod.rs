/*!
Configuration of a knowledge base.

All configuration is fixed when the knowledge base is built.
The evidence engine reads its options from the base it enumerates over.
*/

/// The primary configuration structure.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Deduplicate the evidence sets produced for a literal.
    ///
    /// Distinct derivation paths may assemble structurally identical evidence
    /// sets.
    /// When set, each top-level enumeration emits such a set once.
    /// The count identity *n + Σ over rules of the product of body
    /// collection sizes* holds only when unset.
    pub dedup_evidence: bool,
}
