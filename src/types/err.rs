//! Error types used in the library.
//!
//! - Parse errors surface when program text is malformed.
//! - Structural errors surface when objects are malformed, e.g. a clause with
//!   no literals.
//! - Not-found errors surface when a query cannot be resolved against a
//!   knowledge base, or a source cannot be resolved to a program.
//!
//! All construction-time errors are returned immediately and synchronously;
//! there is no partially built knowledge base to recover.
//!
//! Names of the error enums, for the most part, overlap with
//! corresponding concepts.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The top-level error type of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    Structural(StructuralError),
    NotFound(NotFoundError),

    /// Some input-output failure while reading a source, e.g. an unreadable file.
    Io(std::io::ErrorKind),

    /// There are no more fresh atoms.
    AtomsExhausted,
}

/// Errors during parsing of program text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Non-whitespace trailing text after the final statement terminator.
    UnterminatedStatement(String),

    /// A terminator with no statement before it.
    EmptyStatement,

    /// A rule statement with no literal before the inference marker.
    EmptyRuleHead,

    /// A rule statement with no literals after the inference marker.
    EmptyRuleBody,

    /// A rule statement with more than one literal before the inference marker.
    MultipleRuleHeads,

    /// A token which is not a well-formed literal.
    InvalidToken(String),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors in the structure of directly supplied objects.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StructuralError {
    /// Some attempt was made to build a clause over zero literals.
    EmptyClause,

    /// Some attempt was made to build a rule with zero body literals.
    EmptyRuleBody,
}

impl From<StructuralError> for ErrorKind {
    fn from(e: StructuralError) -> Self {
        ErrorKind::Structural(e)
    }
}

/// Errors when a query or source cannot be resolved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NotFoundError {
    /// No file exists at an explicitly given path.
    NoFile,

    /// The literal is not present in the knowledge base.
    UnknownLiteral(String),

    /// A string resolved neither as a path to a file nor as program text.
    ///
    /// Carries the error from the attempt to read the string as text.
    UnresolvedSource(ParseError),
}

impl From<NotFoundError> for ErrorKind {
    fn from(e: NotFoundError) -> Self {
        ErrorKind::NotFound(e)
    }
}

impl From<std::io::Error> for ErrorKind {
    fn from(e: std::io::Error) -> Self {
        ErrorKind::Io(e.kind())
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedStatement(text) => {
                write!(f, "Statement without a terminator: '{text}'.")
            }
            Self::EmptyStatement => write!(f, "Empty statement."),
            Self::EmptyRuleHead => write!(f, "Rule without a head literal."),
            Self::EmptyRuleBody => write!(f, "Rule without body literals."),
            Self::MultipleRuleHeads => write!(f, "Rule with more than one head literal."),
            Self::InvalidToken(token) => write!(f, "Invalid literal token: '{token}'."),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Structural(StructuralError::EmptyClause) => {
                write!(f, "Structural error: a clause requires at least one literal.")
            }
            Self::Structural(StructuralError::EmptyRuleBody) => {
                write!(f, "Structural error: a rule requires at least one body literal.")
            }
            Self::NotFound(NotFoundError::NoFile) => write!(f, "No file at the given path."),
            Self::NotFound(NotFoundError::UnknownLiteral(name)) => {
                write!(f, "The literal '{name}' is not in the knowledge base.")
            }
            Self::NotFound(NotFoundError::UnresolvedSource(e)) => {
                write!(f, "Neither a path to a file nor program text: {e}")
            }
            Self::Io(kind) => write!(f, "IO error: {kind}"),
            Self::AtomsExhausted => write!(f, "There are no more fresh atoms."),
        }
    }
}
