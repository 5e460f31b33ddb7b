//! Compile a small regular-expression language into a Thompson NFA and
//! decide whole-string matches by subset simulation.
//!
//! The syntax is literal characters, `(`...`)` grouping, `|` alternation and
//! postfix `*`. A pattern matches only if it consumes the entire input.

use std::fmt;
use std::str::FromStr;

pub mod ast;
pub mod error;
pub mod matcher;
pub mod nfa;
pub mod parser;

pub use ast::RegexNode;
pub use error::ParseError;
pub use nfa::{build, Nfa};
pub use parser::parse;

/// A compiled pattern.
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: String,
    ast: RegexNode,
    nfa: Nfa,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Self, ParseError> {
        let ast = parse(pattern)?;
        let nfa = build(&ast);
        Ok(Self {
            pattern: pattern.to_owned(),
            ast,
            nfa,
        })
    }

    pub fn is_match(&self, input: &str) -> bool {
        matcher::is_match(&self.nfa, input)
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The simplified syntax tree the automaton was built from.
    pub fn ast(&self) -> &RegexNode {
        &self.ast
    }

    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }
}

impl FromStr for Regex {
    type Err = ParseError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Regex::new(pattern)
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Compile `pattern` and match it against the whole of `input`.
pub fn is_match(input: &str, pattern: &str) -> Result<bool, ParseError> {
    Ok(Regex::new(pattern)?.is_match(input))
}
