/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::builder::parse)
    pub const PARSE: &str = "parse";

    /// Logs related to [consolidation](crate::builder)
    pub const CONSOLIDATION: &str = "consolidation";

    /// Logs related to [case classification and evidence](crate::cases)
    pub const CASES: &str = "cases";
}
