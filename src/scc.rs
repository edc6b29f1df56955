use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::dfs::{dfs_forest, ComponentId};
use crate::graph::{reverse, Graph, Node};
use crate::tarjan::tarjan;

/// A labeling of the nodes of a graph with their strongly connected
/// components.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Components {
    /// The component of every node.
    pub labels: Vec<ComponentId>,
    /// The number of components. Labels range over `1..=count`.
    pub count: usize,
}

impl Components {
    pub fn of(&self, node: Node) -> ComponentId {
        self.labels[node.id()]
    }
}

/// Computes the strongly connected components of `graph` with Kosaraju's
/// algorithm.
///
/// The first pass runs on the transpose in the natural order `0, 1, ...` and
/// only contributes its finishing order. The second pass runs on `graph`
/// itself in that order and its trees are exactly the components.
pub fn kosaraju(graph: &Graph) -> Components {
    let natural: Vec<Node> = graph.nodes().collect();
    let first = dfs_forest(&reverse(graph), &natural);
    let second = dfs_forest(graph, &first.finish_order);
    Components {
        labels: second.labels,
        count: second.component_count,
    }
}

/// The number of edges leaving every component, indexed by
/// [`ComponentId::index`]. Parallel edges count separately.
pub fn out_degrees(graph: &Graph, components: &Components) -> Vec<usize> {
    let mut degrees = vec![0; components.count];
    for (u, v) in graph.edges() {
        let cu = components.of(u);
        if cu != components.of(v) {
            degrees[cu.index()] += 1;
        }
    }
    degrees
}

/// Marks the nodes that lie in a component no edge leaves.
pub fn safe_nodes(graph: &Graph, components: &Components) -> Vec<bool> {
    let degrees = out_degrees(graph, components);
    let sinks = degrees.iter().filter(|&&d| d == 0).count();
    debug!("{} of {} components are sinks", sinks, components.count);
    components
        .labels
        .iter()
        .map(|c| degrees[c.index()] == 0)
        .collect()
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Algorithm {
    #[default]
    Kosaraju,
    Tarjan,
}

impl Algorithm {
    pub const NAMES: [&'static str; 2] = ["kosaraju", "tarjan"];

    pub fn components(self, graph: &Graph) -> Components {
        match self {
            Algorithm::Kosaraju => kosaraju(graph),
            Algorithm::Tarjan => tarjan(graph),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Kosaraju => Self::NAMES[0],
            Algorithm::Tarjan => Self::NAMES[1],
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kosaraju" => Ok(Algorithm::Kosaraju),
            "tarjan" => Ok(Algorithm::Tarjan),
            _ => Err(format!("unknown algorithm `{}`", s)),
        }
    }
}

/// Decomposes `graph` into strongly connected components and marks the nodes
/// of all sink components as safe.
pub fn analyze(graph: &Graph, algorithm: Algorithm) -> Vec<bool> {
    let components = algorithm.components(graph);
    debug!(
        "{} found {} strongly connected components",
        algorithm, components.count
    );
    safe_nodes(graph, &components)
}
