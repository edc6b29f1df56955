//! A full depth-first search over a graph, visiting roots in a given order.
use std::fmt;
use std::num::NonZeroUsize;

use log::trace;
use static_assertions::assert_eq_size;

use crate::graph::{Graph, Node, Successors};
use crate::{recurse_st, Frame, FrameState};

/// The id of a tree in a DFS forest, or of a strongly connected component.
///
/// Ids start at 1. Unvisited nodes are labeled `None`, which takes the place
/// of the sentinel `0`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ComponentId(NonZeroUsize);

assert_eq_size!(Option<ComponentId>, ComponentId);

impl ComponentId {
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    pub fn new(id: usize) -> Option<Self> {
        NonZeroUsize::new(id).map(Self)
    }

    /// The 1-based id.
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// The 0-based position, for indexing per-component arrays.
    pub fn index(self) -> usize {
        self.0.get() - 1
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DfsForest {
    /// The tree of every node.
    pub labels: Vec<ComponentId>,
    /// All nodes by decreasing finishing time.
    pub finish_order: Vec<Node>,
    /// The number of trees.
    pub component_count: usize,
}

struct Pass<'g> {
    graph: &'g Graph,
    labels: Vec<Option<ComponentId>>,
    finish_order: Vec<Node>,
    // Next free slot in `finish_order` is `remaining - 1`.
    remaining: usize,
    current: Option<ComponentId>,
}

struct Visit<'g> {
    node: Node,
    successors: Option<Successors<'g>>,
}

impl Visit<'_> {
    fn enter(node: Node) -> Self {
        Self {
            node,
            successors: None,
        }
    }
}

impl<'g> Frame<Pass<'g>> for Visit<'g> {
    type Yield = Node;
    type Return = ();

    fn resume(&mut self, pass: &mut Pass<'g>, (): ()) -> FrameState<Node, ()> {
        let u = self.node;
        let successors = self.successors.get_or_insert_with(|| {
            pass.labels[u.id()] = pass.current;
            pass.graph.successors(u)
        });

        for v in successors {
            if pass.labels[v.id()].is_none() {
                return FrameState::Yielded(v);
            }
        }

        pass.remaining -= 1;
        pass.finish_order[pass.remaining] = u;
        FrameState::Complete(())
    }
}

/// Runs a depth-first search on `graph`, starting a new tree at every node of
/// `order` that has not been reached yet.
///
/// A node is labeled before any of its successors is looked at, and it is
/// placed into the finishing order once all of them are done. Nothing is kept
/// on the thread stack, so arbitrarily long paths are fine.
///
/// # Panics
///
/// Panics if `order` is not a permutation of the nodes of `graph`.
pub fn dfs_forest(graph: &Graph, order: &[Node]) -> DfsForest {
    let n = graph.node_count();
    assert_eq!(order.len(), n, "visitation order must list every node once");

    let mut pass = Pass {
        graph,
        labels: vec![None; n],
        finish_order: vec![Node::new(0); n],
        remaining: n,
        current: None,
    };
    let visit = recurse_st(Visit::enter);

    for &root in order {
        if pass.labels[root.id()].is_none() {
            pass.current = Some(pass.current.map_or(ComponentId::FIRST, ComponentId::next));
            visit(root, &mut pass);
        }
    }
    assert_eq!(pass.remaining, 0, "visitation order must list every node once");

    let component_count = pass.current.map_or(0, ComponentId::get);
    trace!("dfs pass over {} nodes found {} trees", n, component_count);

    DfsForest {
        labels: pass.labels.into_iter().flatten().collect(),
        finish_order: pass.finish_order,
        component_count,
    }
}
