use std::fmt;
use std::iter::Copied;
use std::slice;

use rand::Rng;

use crate::{Error, Result};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Node {
    id: usize,
}

impl Node {
    pub const fn new(id: usize) -> Self {
        Self { id }
    }

    pub const fn id(self) -> usize {
        self.id
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}

/// The successors of a node, in insertion order.
pub type Successors<'a> = Copied<slice::Iter<'a, Node>>;

/// A directed graph over the nodes `0..n`.
///
/// Parallel edges and self-loops are kept exactly as inserted.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    adjacency: Vec<Vec<Node>>,
    edge_count: usize,
}

impl Graph {
    /// An edgeless graph with `n` nodes.
    pub fn new(n: usize) -> Self {
        let mut adjacency = Vec::with_capacity(n);
        adjacency.resize_with(n, Vec::new);
        Self {
            adjacency,
            edge_count: 0,
        }
    }

    /// Like [`Graph::new`], but fails instead of aborting when `n` nodes do
    /// not fit into memory.
    pub fn try_new(n: usize) -> Result<Self> {
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(n)
            .map_err(|_| Error::TooLarge {
                what: "node count",
                value: u64::try_from(n).unwrap_or(u64::MAX),
            })?;
        adjacency.resize_with(n, Vec::new);
        Ok(Self {
            adjacency,
            edge_count: 0,
        })
    }

    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(n);
        for (u, v) in edges {
            graph.add_edge(Node::new(u), Node::new(v))?;
        }
        Ok(graph)
    }

    /// A graph with `n` nodes and `m` edges whose endpoints are drawn
    /// uniformly at random. `m` is ignored when `n == 0`.
    pub fn random<R: Rng + ?Sized>(n: usize, m: usize, rng: &mut R) -> Self {
        let mut graph = Self::new(n);
        if n > 0 {
            for _ in 0..m {
                let u = rng.gen_range(0..n);
                let v = rng.gen_range(0..n);
                graph.push_edge(Node::new(u), Node::new(v));
            }
        }
        graph
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, node: Node) -> bool {
        node.id < self.node_count()
    }

    /// Appends `v` to the successors of `u`.
    pub fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        for node in [u, v] {
            if !self.contains(node) {
                return Err(Error::NodeOutOfRange {
                    node: i64::try_from(node.id).unwrap_or(i64::MAX),
                    node_count: self.node_count(),
                });
            }
        }
        self.push_edge(u, v);
        Ok(())
    }

    fn push_edge(&mut self, u: Node, v: Node) {
        self.adjacency[u.id].push(v);
        self.edge_count += 1;
    }

    /// # Panics
    ///
    /// Panics if `u` is not a node of the graph.
    pub fn successors(&self, u: Node) -> Successors<'_> {
        self.adjacency[u.id].iter().copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node> {
        (0..self.node_count()).map(Node::new)
    }

    /// All edges `(u, v)`, grouped by `u` in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.nodes().flat_map(move |u| self.successors(u).map(move |v| (u, v)))
    }
}

/// The transpose of `graph`: every edge `(u, v)` becomes `(v, u)`.
pub fn reverse(graph: &Graph) -> Graph {
    let mut reversed = Graph::new(graph.node_count());
    for (u, v) in graph.edges() {
        reversed.push_edge(v, u);
    }
    reversed
}
