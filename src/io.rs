//! The line-oriented text format.
//!
//! The first line holds the node count `n` and the edge count `m`. Each of the
//! next `m` lines holds one edge `u v` with `0 <= u, v < n`. Anything after
//! the last edge line is ignored.
use std::io::{BufRead, Write};

use crate::graph::{Graph, Node};
use crate::{Error, Result};

fn parse_pair(line: &str) -> Result<[i64; 2]> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(Error::TokenCount {
            expected: 2,
            found: tokens.len(),
        });
    }
    let mut pair = [0; 2];
    for (slot, token) in pair.iter_mut().zip(tokens) {
        *slot = token.parse().map_err(|source| Error::InvalidInteger {
            token: token.to_owned(),
            source,
        })?;
    }
    Ok(pair)
}

fn count(what: &'static str, value: i64) -> Result<usize> {
    if value < 0 {
        return Err(Error::NegativeCount { what, value });
    }
    usize::try_from(value).map_err(|_| Error::TooLarge {
        what,
        value: value.unsigned_abs(),
    })
}

fn node(value: i64, node_count: usize) -> Result<Node> {
    match usize::try_from(value) {
        Ok(id) if id < node_count => Ok(Node::new(id)),
        _ => Err(Error::NodeOutOfRange {
            node: value,
            node_count,
        }),
    }
}

/// Reads a graph. Any malformed or missing line is an error; no partial
/// graph is ever returned.
pub fn read_graph<R: BufRead>(input: R) -> Result<Graph> {
    let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line));

    let (_, header) = lines.next().ok_or(Error::MissingHeader)?;
    let (n, m) = parse_pair(&header?)
        .and_then(|[n, m]| Ok((count("node count", n)?, count("edge count", m)?)))
        .map_err(|err| err.at_line(1))?;

    let mut graph = Graph::try_new(n).map_err(|err| err.at_line(1))?;
    for found in 0..m {
        let (line, text) = lines.next().ok_or(Error::Truncated { expected: m, found })?;
        let (u, v) = parse_pair(&text?)
            .and_then(|[u, v]| Ok((node(u, n)?, node(v, n)?)))
            .map_err(|err| err.at_line(line))?;
        graph.add_edge(u, v)?;
    }
    Ok(graph)
}

/// Writes the ids of all safe nodes in ascending order, each followed by a
/// space, and terminates the line.
pub fn write_safe_nodes<W: Write>(mut output: W, safe: &[bool]) -> std::io::Result<()> {
    for (id, _) in safe.iter().enumerate().filter(|&(_, &safe)| safe) {
        write!(output, "{} ", id)?;
    }
    writeln!(output)
}

#[cfg(test)]
mod test {
    use super::*;

    fn read(input: &str) -> Result<Graph> {
        read_graph(input.as_bytes())
    }

    fn inner(err: Error) -> (usize, Error) {
        match err {
            Error::AtLine { line, source } => (line, *source),
            err => panic!("expected an error with a line number, got {:?}", err),
        }
    }

    #[test]
    fn test_read() {
        let graph = read("3 4\n0 1\n1 2\n2 0\n2 2\n").unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 4);
        let successors: Vec<_> = graph.successors(Node::new(2)).map(Node::id).collect();
        assert_eq!(successors, vec![0, 2]);
    }

    #[test]
    fn test_read_lenient_whitespace() {
        let graph = read("2 1\r\n 0   1 \r\n").unwrap();
        assert_eq!(graph.edges().count(), 1);
    }

    #[test]
    fn test_read_ignores_trailing_lines() {
        let graph = read("2 1\n0 1\n\ngarbage\n").unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_read_without_final_newline() {
        let graph = read("1 0").unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(read(""), Err(Error::MissingHeader)));
    }

    #[test]
    fn test_bad_header() {
        let (line, err) = inner(read("3\n").unwrap_err());
        assert_eq!(line, 1);
        assert!(matches!(err, Error::TokenCount { expected: 2, found: 1 }));

        let (_, err) = inner(read("3 x\n").unwrap_err());
        assert!(matches!(err, Error::InvalidInteger { ref token, .. } if token == "x"));

        let (_, err) = inner(read("-3 0\n").unwrap_err());
        assert!(matches!(
            err,
            Error::NegativeCount {
                what: "node count",
                value: -3
            }
        ));
    }

    #[test]
    fn test_huge_node_count() {
        let (line, err) = inner(read("9223372036854775807 0\n").unwrap_err());
        assert_eq!(line, 1);
        assert!(matches!(
            err,
            Error::TooLarge {
                what: "node count",
                value: 9223372036854775807
            }
        ));
    }

    #[test]
    fn test_bad_edge() {
        let (line, err) = inner(read("3 2\n0 1\n1 2 0\n").unwrap_err());
        assert_eq!(line, 3);
        assert!(matches!(err, Error::TokenCount { expected: 2, found: 3 }));

        let (line, err) = inner(read("3 2\n0 1\n\n1 2\n").unwrap_err());
        assert_eq!(line, 3);
        assert!(matches!(err, Error::TokenCount { expected: 2, found: 0 }));

        let (_, err) = inner(read("3 1\n0 1.5\n").unwrap_err());
        assert!(matches!(err, Error::InvalidInteger { .. }));
    }

    #[test]
    fn test_node_out_of_range() {
        let (line, err) = inner(read("3 2\n0 1\n1 3\n").unwrap_err());
        assert_eq!(line, 3);
        assert!(matches!(
            err,
            Error::NodeOutOfRange {
                node: 3,
                node_count: 3
            }
        ));

        let (_, err) = inner(read("3 1\n-1 0\n").unwrap_err());
        assert!(matches!(err, Error::NodeOutOfRange { node: -1, .. }));
    }

    #[test]
    fn test_truncated() {
        let err = read("3 3\n0 1\n1 2\n").unwrap_err();
        assert!(matches!(err, Error::Truncated { expected: 3, found: 2 }));
        assert_eq!(err.to_string(), "expected 3 edge lines, found only 2");
    }

    #[test]
    fn test_error_message() {
        let err = read("2 1\n0 7\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: node 7 is outside of [0, 2)");
    }

    #[test]
    fn test_write() {
        let mut output = Vec::new();
        write_safe_nodes(&mut output, &[true, false, true]).unwrap();
        assert_eq!(output, b"0 2 \n");

        let mut output = Vec::new();
        write_safe_nodes(&mut output, &[false, false]).unwrap();
        assert_eq!(output, b"\n");
    }
}
