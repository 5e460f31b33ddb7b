use thiserror::Error;

/// Errors raised while compiling a pattern.
///
/// Every variant records the character offset in the pattern where the
/// problem was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A group opened at `pos` ran off the end of the pattern.
    #[error("termination too early: group opened at offset {pos} is never closed")]
    UnterminatedGroup { pos: usize },
    /// A scope starting at `pos` was closed without any term in it.
    #[error("empty parens at offset {pos}")]
    EmptyGroup { pos: usize },
    /// A `*` at `pos` has nothing to repeat.
    #[error("star without preceding term at offset {pos}")]
    DanglingStar { pos: usize },
    /// The pattern was closed by a `)` at `pos` with no open group.
    #[error("trailing input: unmatched `)` at offset {pos}")]
    TrailingInput { pos: usize },
    /// The `(` at `pos` nests groups deeper than the parser allows.
    #[error("groups nested too deeply at offset {pos}")]
    TooDeep { pos: usize },
}

impl ParseError {
    /// Offset in the pattern the error points at.
    pub fn pos(&self) -> usize {
        match *self {
            ParseError::UnterminatedGroup { pos }
            | ParseError::EmptyGroup { pos }
            | ParseError::DanglingStar { pos }
            | ParseError::TrailingInput { pos }
            | ParseError::TooDeep { pos } => pos,
        }
    }
}
