use std::collections::BTreeSet;

use log::trace;

use crate::nfa::{Nfa, NodeId};

/// The set of automaton nodes reachable after some prefix of the input.
pub type StateSet = BTreeSet<NodeId>;

/// Every node reachable from `id` through epsilon edges, `id` included.
pub fn epsilon_closure(nfa: &Nfa, id: NodeId) -> StateSet {
    let mut states = StateSet::new();
    add_closure(nfa, id, &mut states);
    states
}

// Star fragments form epsilon cycles, so membership in `states` doubles as
// the visited set.
fn add_closure(nfa: &Nfa, id: NodeId, states: &mut StateSet) {
    let mut stack = vec![id];
    while let Some(id) = stack.pop() {
        if !states.insert(id) {
            continue;
        }
        stack.extend(
            nfa.edges(id)
                .iter()
                .filter(|edge| edge.label.is_epsilon())
                .map(|edge| edge.target),
        );
    }
}

/// Follow every edge labelled `c` out of `states`, then close over epsilon
/// edges.
pub fn step(nfa: &Nfa, states: &StateSet, c: char) -> StateSet {
    let mut next = StateSet::new();
    for &id in states {
        for edge in nfa.edges(id) {
            if edge.label.matches(c) {
                add_closure(nfa, edge.target, &mut next);
            }
        }
    }
    next
}

/// Whether the whole of `input` is accepted by `nfa`.
pub fn is_match(nfa: &Nfa, input: &str) -> bool {
    let mut states = epsilon_closure(nfa, nfa.start());
    for c in input.chars() {
        states = step(nfa, &states, c);
        trace!("after {c:?}: {} live states", states.len());
        if states.is_empty() {
            return false;
        }
    }
    states.iter().any(|&id| nfa.is_sink(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nfa::build;
    use crate::parser::parse;

    fn compile(pattern: &str) -> Nfa {
        build(&parse(pattern).unwrap())
    }

    #[test]
    fn closure_contains_the_node_itself() {
        let nfa = compile("ab");
        assert_eq!(epsilon_closure(&nfa, nfa.start()), StateSet::from([nfa.start()]));
    }

    #[test]
    fn closure_follows_epsilon_chains() {
        // start -ε-> middle -ε-> end
        let nfa = compile("a*");
        let closure = epsilon_closure(&nfa, nfa.start());
        assert_eq!(closure, StateSet::from([0, 1, 2]));
    }

    #[test]
    fn closure_terminates_on_epsilon_cycles() {
        let nfa = compile("(|a)*");
        let closure = epsilon_closure(&nfa, nfa.start());
        assert!(closure.contains(&1));
    }

    #[test]
    fn step_consumes_matching_edges_only() {
        let nfa = compile("a|b");
        let start = epsilon_closure(&nfa, nfa.start());
        assert_eq!(step(&nfa, &start, 'a'), StateSet::from([1]));
        assert!(step(&nfa, &start, 'z').is_empty());
    }

    #[test]
    fn accepts_whole_strings_only() {
        let nfa = compile("a*");
        assert!(is_match(&nfa, ""));
        assert!(is_match(&nfa, "aaa"));
        assert!(!is_match(&nfa, "aab"));
    }

    #[test]
    fn prefix_match_is_not_enough() {
        let nfa = compile("ab");
        assert!(!is_match(&nfa, "a"));
        assert!(!is_match(&nfa, "abb"));
    }

    #[test]
    fn matches_multibyte_characters() {
        let nfa = compile("é*ß");
        assert!(is_match(&nfa, "ééß"));
        assert!(!is_match(&nfa, "eß"));
    }
}
