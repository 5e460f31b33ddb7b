use std::mem;

use log::debug;

use crate::ast::RegexNode;
use crate::error::ParseError;

/// Deepest group nesting the parser accepts.
pub const MAX_NESTING: usize = 256;

/// Recursive-descent parser for patterns.
///
/// The grammar is literal characters, `(`...`)` grouping, `|` alternation
/// and postfix `*`. There is no escaping: every other character, including
/// whitespace, is a literal atom.
pub struct Parser<'a> {
    pattern: &'a str,
    pos: usize,
    // Characters consumed so far; `pos` counts bytes.
    offset: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given pattern.
    pub fn new(pattern: &'a str) -> Self {
        Self {
            pattern,
            pos: 0,
            offset: 0,
            depth: 0,
        }
    }

    /// Advance the parser by one character and return it.
    fn advance(&mut self) -> Option<char> {
        let ch = self.pattern[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        self.offset += 1;
        Some(ch)
    }

    /// Entry point: parse the whole pattern and simplify the result.
    ///
    /// Example:
    /// - Pattern: `a(b|c)d*` → Seq([Atom('a'), Alt([Atom('b'), Atom('c')]), Star(Atom('d'))])
    pub fn parse(&mut self) -> Result<RegexNode, ParseError> {
        let node = self.parse_scope(None)?;
        let node = node.simplify();
        debug!("parsed pattern {:?} into {:?}", self.pattern, node);
        Ok(node)
    }

    /// Parse one scope up to its closing delimiter.
    ///
    /// `group` is the offset of the `(` that opened the scope, or `None` for
    /// the top level, which is closed by the end of the pattern.
    fn parse_scope(&mut self, group: Option<usize>) -> Result<RegexNode, ParseError> {
        let open = group.unwrap_or(0);
        let mut alternatives: Vec<Vec<RegexNode>> = Vec::new();
        let mut terms: Vec<RegexNode> = Vec::new();

        loop {
            let at = self.offset;
            let Some(ch) = self.advance() else {
                return match group {
                    None => Self::close_scope(alternatives, terms, open),
                    Some(pos) => Err(ParseError::UnterminatedGroup { pos }),
                };
            };
            match ch {
                '(' => {
                    if self.depth == MAX_NESTING {
                        return Err(ParseError::TooDeep { pos: at });
                    }
                    self.depth += 1;
                    let node = self.parse_scope(Some(at))?;
                    self.depth -= 1;
                    terms.push(node);
                }
                ')' => {
                    let node = Self::close_scope(alternatives, terms, open)?;
                    return match group {
                        Some(_) => Ok(node),
                        None => Err(ParseError::TrailingInput { pos: at }),
                    };
                }
                '*' => {
                    // `x**` is `x*`; folding here keeps long runs of stars flat.
                    let term = match terms.pop() {
                        Some(star @ RegexNode::Star(_)) => star,
                        Some(term) => RegexNode::star(term),
                        None => return Err(ParseError::DanglingStar { pos: at }),
                    };
                    terms.push(term);
                }
                '|' => alternatives.push(mem::take(&mut terms)),
                c => terms.push(RegexNode::literal(c)),
            }
        }
    }

    /// Turn what a scope accumulated into a single node: the finished
    /// alternatives plus the terms of the one still open.
    fn close_scope(
        mut alternatives: Vec<Vec<RegexNode>>,
        mut terms: Vec<RegexNode>,
        open: usize,
    ) -> Result<RegexNode, ParseError> {
        if !alternatives.is_empty() {
            alternatives.push(terms);
            return Ok(RegexNode::Alt(
                alternatives.into_iter().map(RegexNode::Seq).collect(),
            ));
        }
        if terms.len() > 1 {
            return Ok(RegexNode::Seq(terms));
        }
        terms.pop().ok_or(ParseError::EmptyGroup { pos: open })
    }
}

/// Parse `pattern` into a simplified AST.
pub fn parse(pattern: &str) -> Result<RegexNode, ParseError> {
    Parser::new(pattern).parse()
}
