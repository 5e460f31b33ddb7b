use log::debug;

use crate::ast::RegexNode;

pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Char(char),
    Epsilon,
}

impl Label {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Label::Epsilon)
    }

    /// Whether following this edge consumes `c`.
    pub fn matches(&self, c: char) -> bool {
        matches!(self, Label::Char(l) if *l == c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub label: Label,
    pub target: NodeId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Node {
    edges: Vec<Edge>,
}

/// A Thompson automaton stored as an arena of nodes.
///
/// Edges refer to their targets by index, so the cycles introduced by `*`
/// need no special ownership. The only node without outgoing edges is the
/// accepting end node of the whole pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    nodes: Vec<Node>,
    start: NodeId,
}

impl Nfa {
    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }

    /// Outgoing edges of `id`, in insertion order.
    pub fn edges(&self, id: NodeId) -> &[Edge] {
        &self.nodes[id].edges
    }

    /// A sink has no outgoing edges and marks acceptance.
    pub fn is_sink(&self, id: NodeId) -> bool {
        self.nodes[id].edges.is_empty()
    }
}

/// Build the automaton for `ast` between a fresh start and end node.
///
/// Recurses once per tree level; trees from [`crate::parser::parse`] are
/// bounded by its nesting cap.
pub fn build(ast: &RegexNode) -> Nfa {
    let mut builder = NfaBuilder::default();
    let start = builder.create_node();
    let end = builder.create_node();
    builder.build_node(ast, start, end);

    let nfa = Nfa {
        nodes: builder.nodes,
        start,
    };
    debug!(
        "built automaton with {} nodes and {} edges",
        nfa.node_count(),
        nfa.edge_count()
    );
    nfa
}

#[derive(Default)]
struct NfaBuilder {
    nodes: Vec<Node>,
}

impl NfaBuilder {
    /// Add the fragment for `ast_node` so that it leads from `start` to `end`.
    fn build_node(&mut self, ast_node: &RegexNode, start: NodeId, end: NodeId) {
        match ast_node {
            RegexNode::Atom(Some(c)) => self.connect_nodes(start, end, Label::Char(*c)),
            RegexNode::Atom(None) => self.connect_nodes(start, end, Label::Epsilon),
            RegexNode::Seq(ast_nodes) => {
                let Some((last, init)) = ast_nodes.split_last() else {
                    self.connect_nodes(start, end, Label::Epsilon);
                    return;
                };
                let mut current = start;
                for ast_node in init {
                    let next = self.create_node();
                    self.build_node(ast_node, current, next);
                    current = next;
                }
                self.build_node(last, current, end);
            }
            RegexNode::Alt(ast_nodes) => {
                if ast_nodes.is_empty() {
                    // Matches nothing; the loop keeps `start` from becoming a sink.
                    self.connect_nodes(start, start, Label::Epsilon);
                }
                for ast_node in ast_nodes {
                    self.build_node(ast_node, start, end);
                }
            }
            RegexNode::Star(ast_node) => {
                let middle = self.create_node();
                self.connect_nodes(start, middle, Label::Epsilon);
                self.build_node(ast_node, middle, middle);
                self.connect_nodes(middle, end, Label::Epsilon);
            }
        }
    }

    fn connect_nodes(&mut self, from: NodeId, to: NodeId, label: Label) {
        debug_assert!(self.nodes.len() > to);
        self.nodes[from].edges.push(Edge { label, target: to });
    }

    fn create_node(&mut self) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::default());
        id
    }
}
