/*!
The parser for program text.

A program is a sequence of statements, each ended by a `.` terminator.
A statement containing the inference marker `:-` is a rule: one head literal,
the marker, then a comma-separated list of body literals.
Any other statement is a clause: a comma-separated list of literals.
A literal is an atom identifier, optionally prefixed by `~` for negative
polarity, and whitespace between tokens is insignificant.

```text
sunny, stay_home.
~happy :- sunny, stay_home.
```

Parsing yields a [Program] of free-standing [Clause]s and [Rule]s; interning
of their literals happens during consolidation, regardless of whether the
text came from a string or a file.
*/

use crate::{
    misc::log::targets::{self},
    structures::{atom::wellformed_identifier, clause::Clause, literal::Literal, rule::Rule},
    types::err::ParseError,
};

/// The inference marker of a rule statement.
const INFERENCE_MARKER: &str = ":-";

/// The statement terminator.
const TERMINATOR: char = '.';

/// The parsed form of a program: clauses and rules over uninterned literals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// The clause statements of the program, in order of appearance.
    pub clauses: Vec<Clause>,

    /// The rule statements of the program, in order of appearance.
    pub rules: Vec<Rule>,
}

impl Program {
    /// Parses `text` as a program.
    ///
    /// ```rust
    /// # use evidentia::builder::parse::Program;
    /// let program = Program::parse("sunny, stay_home. happy :- stay_home.").unwrap();
    ///
    /// assert_eq!(program.clauses.len(), 1);
    /// assert_eq!(program.rules.len(), 1);
    /// ```
    pub fn parse(text: &str) -> Result<Program, ParseError> {
        let mut program = Program::default();

        let mut rest = text;
        loop {
            match rest.split_once(TERMINATOR) {
                Some((statement, tail)) => {
                    parse_statement(statement, &mut program)?;
                    rest = tail;
                }

                None => match rest.trim() {
                    "" => break,
                    trailing => {
                        log::warn!(target: targets::PARSE, "Unterminated statement: '{trailing}'");
                        return Err(ParseError::UnterminatedStatement(trailing.to_owned()));
                    }
                },
            }
        }

        log::info!(
            target: targets::PARSE,
            "Parsed {} clause(s) and {} rule(s)",
            program.clauses.len(),
            program.rules.len()
        );
        Ok(program)
    }
}

/// Parses a single (terminator-free) statement into `program`.
fn parse_statement(statement: &str, program: &mut Program) -> Result<(), ParseError> {
    if statement.trim().is_empty() {
        return Err(ParseError::EmptyStatement);
    }

    match statement.split_once(INFERENCE_MARKER) {
        Some((head, body)) => program.rules.push(parse_rule(head, body)?),
        None => program.clauses.push(parse_clause(statement)?),
    }
    Ok(())
}

/// Parses the head and body segments of a rule statement.
fn parse_rule(head: &str, body: &str) -> Result<Rule, ParseError> {
    if head.trim().is_empty() {
        return Err(ParseError::EmptyRuleHead);
    }
    if head.contains(',') {
        return Err(ParseError::MultipleRuleHeads);
    }
    if body.trim().is_empty() {
        return Err(ParseError::EmptyRuleBody);
    }

    let head = parse_literal(head)?;
    let body = body
        .split(',')
        .map(parse_literal)
        .collect::<Result<Vec<Literal>, ParseError>>()?;

    // The body is non-empty, checked above.
    Rule::new(head, body).map_err(|_| ParseError::EmptyRuleBody)
}

/// Parses a clause statement.
fn parse_clause(statement: &str) -> Result<Clause, ParseError> {
    let literals = statement
        .split(',')
        .map(parse_literal)
        .collect::<Result<Vec<Literal>, ParseError>>()?;

    // The statement is non-empty, checked by the caller.
    Clause::new(literals).map_err(|_| ParseError::EmptyStatement)
}

/// Parses a literal token: an atom identifier, optionally prefixed by `~`.
fn parse_literal(token: &str) -> Result<Literal, ParseError> {
    let trimmed = token.trim();

    let (identifier, polarity) = match trimmed.strip_prefix('~') {
        Some(identifier) => (identifier.trim_start(), false),
        None => (trimmed, true),
    };

    match wellformed_identifier(identifier) {
        true => Ok(Literal::new(identifier, polarity)),
        false => {
            log::warn!(target: targets::PARSE, "Invalid literal token: '{trimmed}'");
            Err(ParseError::InvalidToken(trimmed.to_owned()))
        }
    }
}
