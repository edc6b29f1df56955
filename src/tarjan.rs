use std::cmp::min;

use log::trace;

use crate::dfs::ComponentId;
use crate::graph::{Graph, Node, Successors};
use crate::scc::Components;
use crate::{recurse_st, Frame, FrameState};

const UNVISITED: usize = usize::MAX;

struct State<'g> {
    graph: &'g Graph,
    index: usize,
    indices: Vec<usize>,
    lowlinks: Vec<usize>,
    stack: Vec<Node>,
    on_stack: Vec<bool>,
    labels: Vec<Option<ComponentId>>,
    last: Option<ComponentId>,
}

struct Visit<'g> {
    v: Node,
    successors: Option<Successors<'g>>,
    // The successor whose visit we are waiting for.
    child: Option<Node>,
}

impl Visit<'_> {
    fn enter(v: Node) -> Self {
        Self {
            v,
            successors: None,
            child: None,
        }
    }
}

impl<'g> Frame<State<'g>> for Visit<'g> {
    type Yield = Node;
    type Return = ();

    fn resume(&mut self, s: &mut State<'g>, (): ()) -> FrameState<Node, ()> {
        let node = self.v;
        let v = node.id();
        if let Some(w) = self.child.take() {
            s.lowlinks[v] = min(s.lowlinks[v], s.lowlinks[w.id()]);
        }
        let successors = self.successors.get_or_insert_with(|| {
            s.indices[v] = s.index;
            s.lowlinks[v] = s.index;
            s.index += 1;
            s.stack.push(node);
            s.on_stack[v] = true;
            s.graph.successors(node)
        });

        for w in successors {
            if s.indices[w.id()] == UNVISITED {
                self.child = Some(w);
                return FrameState::Yielded(w);
            } else if s.on_stack[w.id()] {
                s.lowlinks[v] = min(s.lowlinks[v], s.indices[w.id()]);
            }
        }

        if s.lowlinks[v] == s.indices[v] {
            let id = s.last.map_or(ComponentId::FIRST, ComponentId::next);
            s.last = Some(id);
            while let Some(w) = s.stack.pop() {
                s.on_stack[w.id()] = false;
                s.labels[w.id()] = Some(id);
                if w == node {
                    break;
                }
            }
        }
        FrameState::Complete(())
    }
}

/// Computes the strongly connected components of `graph` with Tarjan's
/// algorithm. Components are numbered in the order they are completed, so
/// every component is numbered before all components that reach it.
pub fn tarjan(graph: &Graph) -> Components {
    let n = graph.node_count();
    let mut s = State {
        graph,
        index: 0,
        indices: vec![UNVISITED; n],
        lowlinks: vec![UNVISITED; n],
        stack: Vec::new(),
        on_stack: vec![false; n],
        labels: vec![None; n],
        last: None,
    };
    let dfs = recurse_st(Visit::enter);

    for v in graph.nodes() {
        if s.indices[v.id()] == UNVISITED {
            dfs(v, &mut s);
        }
    }

    let count = s.last.map_or(0, ComponentId::get);
    trace!("tarjan over {} nodes found {} components", n, count);
    Components {
        labels: s.labels.into_iter().flatten().collect(),
        count,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::with_stack_size;

    fn label_ids(components: &Components) -> Vec<usize> {
        components.labels.iter().map(|c| c.get()).collect()
    }

    #[test]
    fn test_simple() {
        let edges = [(0, 1), (1, 2), (1, 3), (2, 1), (2, 4), (3, 2)];
        let graph = Graph::from_edges(5, edges).unwrap();
        let components = tarjan(&graph);

        assert_eq!(components.count, 3);
        assert_eq!(label_ids(&components), vec![3, 2, 2, 2, 1]);
    }

    #[test]
    fn test_self_loop() {
        let graph = Graph::from_edges(2, [(0, 0), (0, 1)]).unwrap();
        assert_eq!(label_ids(&tarjan(&graph)), vec![2, 1]);
    }

    #[test]
    fn test_large() {
        let n = 10000;
        let graph = Graph::from_edges(n, (0..(n - 1)).map(|id| (id, id + 1))).unwrap();
        let components = with_stack_size(64 * 1024, move || tarjan(&graph)).unwrap();

        assert_eq!(components.count, n);
        for id in 0..n {
            assert_eq!(components.labels[id].get(), n - id);
        }
    }
}
