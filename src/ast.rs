use std::fmt;

/// A parsed pattern.
///
/// Nodes are never mutated once built; [`RegexNode::simplify`] returns a
/// new tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegexNode {
    /// A single character, or `None` for the epsilon atom that matches the
    /// empty string.
    Atom(Option<char>),
    Seq(Vec<RegexNode>),
    Alt(Vec<RegexNode>),
    Star(Box<RegexNode>),
}

impl RegexNode {
    pub fn epsilon() -> Self {
        RegexNode::Atom(None)
    }

    pub fn literal(c: char) -> Self {
        RegexNode::Atom(Some(c))
    }

    pub fn star(node: RegexNode) -> Self {
        RegexNode::Star(Box::new(node))
    }

    /// Rebuild the tree in canonical form.
    ///
    /// - `Seq([])` becomes the epsilon atom and `Seq([x])` becomes `x`.
    /// - `Star(Star(x))` becomes `Star(x)`.
    /// - `Alt` keeps its arity, even with a single child.
    ///
    /// Example:
    /// - `Seq([Star(Star(Atom('a')))])` → `Star(Atom('a'))`
    pub fn simplify(&self) -> RegexNode {
        match self {
            RegexNode::Atom(value) => RegexNode::Atom(*value),
            RegexNode::Seq(nodes) => match nodes.as_slice() {
                [] => RegexNode::epsilon(),
                [only] => only.simplify(),
                _ => RegexNode::Seq(nodes.iter().map(RegexNode::simplify).collect()),
            },
            RegexNode::Alt(nodes) => RegexNode::Alt(nodes.iter().map(RegexNode::simplify).collect()),
            RegexNode::Star(inner) => match inner.simplify() {
                star @ RegexNode::Star(_) => star,
                node => RegexNode::star(node),
            },
        }
    }
}

// Renders back to pattern syntax. Alternations are always parenthesised so
// the output parses to the same tree.
impl fmt::Display for RegexNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegexNode::Atom(Some(c)) => write!(f, "{c}"),
            RegexNode::Atom(None) => Ok(()),
            RegexNode::Seq(nodes) => {
                for node in nodes {
                    match node {
                        RegexNode::Seq(_) => write!(f, "({node})")?,
                        _ => write!(f, "{node}")?,
                    }
                }
                Ok(())
            }
            RegexNode::Alt(nodes) => {
                f.write_str("(")?;
                for (i, node) in nodes.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{node}")?;
                }
                f.write_str(")")
            }
            RegexNode::Star(inner) => match **inner {
                RegexNode::Atom(Some(_)) | RegexNode::Alt(_) => write!(f, "{inner}*"),
                _ => write!(f, "({inner})*"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(nodes: Vec<RegexNode>) -> RegexNode {
        RegexNode::Seq(nodes)
    }

    #[test]
    fn simplify_unwraps_singleton_sequence() {
        let node = seq(vec![RegexNode::literal('a')]);
        assert_eq!(node.simplify(), RegexNode::literal('a'));
    }

    #[test]
    fn simplify_turns_empty_sequence_into_epsilon() {
        assert_eq!(seq(vec![]).simplify(), RegexNode::epsilon());
    }

    #[test]
    fn simplify_collapses_nested_stars() {
        let node = RegexNode::star(RegexNode::star(RegexNode::star(RegexNode::literal('x'))));
        assert_eq!(node.simplify(), RegexNode::star(RegexNode::literal('x')));
    }

    #[test]
    fn simplify_collapses_star_hidden_behind_singleton_sequence() {
        let node = RegexNode::star(seq(vec![RegexNode::star(RegexNode::literal('x'))]));
        assert_eq!(node.simplify(), RegexNode::star(RegexNode::literal('x')));
    }

    #[test]
    fn simplify_keeps_singleton_alternation() {
        let node = RegexNode::Alt(vec![seq(vec![RegexNode::literal('a')])]);
        assert_eq!(node.simplify(), RegexNode::Alt(vec![RegexNode::literal('a')]));
    }

    #[test]
    fn simplify_does_not_touch_the_original() {
        let node = seq(vec![RegexNode::literal('a')]);
        let before = node.clone();
        let _ = node.simplify();
        assert_eq!(node, before);
    }

    #[test]
    fn display_renders_pattern_syntax() {
        let node = seq(vec![
            RegexNode::literal('a'),
            RegexNode::Alt(vec![RegexNode::epsilon(), RegexNode::literal('b')]),
            RegexNode::star(seq(vec![RegexNode::literal('c'), RegexNode::literal('d')])),
            RegexNode::star(RegexNode::literal('e')),
        ]);
        assert_eq!(node.to_string(), "a(|b)(cd)*e*");
    }
}
