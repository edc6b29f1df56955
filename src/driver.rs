use std::io::{BufRead, Write};

use log::info;

use crate::io::{read_graph, write_safe_nodes};
use crate::scc::{analyze, Algorithm};
use crate::Result;

/// Reads a graph from `input`, finds its safe nodes and writes them to
/// `output`.
///
/// The whole input is validated before anything is computed, so `output` is
/// left untouched on error.
pub fn run<R, W>(input: R, mut output: W, algorithm: Algorithm) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let graph = read_graph(input)?;
    info!(
        "read graph with n={}, m={}",
        graph.node_count(),
        graph.edge_count()
    );

    let safe = analyze(&graph, algorithm);
    info!(
        "{} of {} nodes are safe",
        safe.iter().filter(|&&safe| safe).count(),
        safe.len()
    );

    write_safe_nodes(&mut output, &safe)?;
    output.flush()?;
    Ok(())
}
