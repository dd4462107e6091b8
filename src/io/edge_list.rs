//! # EdgeList
//!
//! The EdgeList-Format is a whitespace-separated token stream:
//! ```text
//! G1
//! weighted
//! 1 2 0.5
//! 2 3 1.5
//! ```
//! The first token `G<version>` must carry version `1`, the second is either `weighted` or
//! `unweighted`. It is followed by groups `u v` (or `u v w` for weighted graphs) each describing
//! the edge `Edge(u - 1, v - 1)`. The number of nodes is the largest endpoint that occurs.

use std::io::{BufRead, ErrorKind, Write};

use tracing::debug;

use super::*;
use crate::{ops::*, repr::Graph, *};

const VERSION: u32 = 1;
const WEIGHTED: &str = "weighted";
const UNWEIGHTED: &str = "unweighted";

/// Reader for `G1` edge lists
#[derive(Debug, Clone, Default)]
pub struct EdgeListReader {
    /// Whether edges are read as arcs `u -> v`
    directed: bool,
}

impl EdgeListReader {
    /// Creates a new (default) reader producing undirected graphs
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the graph read is directed
    pub fn directed(mut self, directed: bool) -> EdgeListReader {
        self.directed = directed;
        self
    }
}

/// Parses a 1-indexed endpoint
fn parse_endpoint<'a>(tokens: &mut impl Iterator<Item = &'a str>, name: &str) -> Result<Node> {
    let raw: Node = parse_next_value!(tokens, name);
    raise_error_unless!(
        raw >= 1,
        ErrorKind::InvalidData,
        format!("{name} must be at least 1 as vertices are 1-indexed")
    );
    Ok(raw - 1)
}

impl GraphReader<Graph> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, mut reader: R) -> Result<Graph> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        let mut tokens = input.split_whitespace();

        let tag = tokens
            .next()
            .ok_or_else(|| io_error!(ErrorKind::InvalidData, "Version tag not found"))?;
        let version = tag.strip_prefix('G').and_then(|v| v.parse::<u32>().ok());
        raise_error_unless!(
            version == Some(VERSION),
            ErrorKind::InvalidData,
            format!("Unsupported version tag {tag:?}")
        );

        let weighted = match tokens.next() {
            Some(WEIGHTED) => true,
            Some(UNWEIGHTED) => false,
            marker => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Expected `{WEIGHTED}` or `{UNWEIGHTED}`, found {marker:?}")
                ));
            }
        };

        let mut edges = Vec::new();
        let mut n: NumNodes = 0;
        let mut tokens = tokens.peekable();
        while tokens.peek().is_some() {
            let u = parse_endpoint(&mut tokens, "Source node")?;
            let v = parse_endpoint(&mut tokens, "Target node")?;
            let weight: f64 = if weighted {
                parse_next_value!(tokens, "Edge weight")
            } else {
                1.0
            };

            n = n.max(u + 1).max(v + 1);
            edges.push((u, v, weight));
        }

        let mut graph = if weighted {
            Graph::new_weighted(n, self.directed)
        } else {
            Graph::new(n, self.directed)
        };

        for (u, v, weight) in edges {
            if weighted {
                graph.add_weighted_edge(u, v, weight)?;
            } else {
                graph.add_edge(u, v)?;
            }
        }
        graph.sort_edges();

        debug!(
            n = graph.number_of_nodes(),
            m = graph.number_of_edges(),
            weighted,
            directed = self.directed,
            "read edge list"
        );

        Ok(graph)
    }
}

/// Reads graphs with the default [`EdgeListReader`]
pub trait EdgeListRead: Sized {
    /// Parses an undirected graph from `reader`
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Parses an undirected graph from the file at `path`
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl EdgeListRead for Graph {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// A writer for the EdgeList-Format.
///
/// Each logical edge is written once; for undirected graphs as `u v` with `u <= v`.
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl GraphWriter<Graph> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &Graph, mut writer: W) -> Result<()> {
        let marker = if graph.is_weighted() {
            WEIGHTED
        } else {
            UNWEIGHTED
        };
        writeln!(writer, "G{VERSION}")?;
        writeln!(writer, "{marker}")?;

        for Edge(u, v) in graph.ordered_edges(graph.is_undirected()) {
            if graph.is_weighted() {
                writeln!(writer, "{} {} {}", u + 1, v + 1, graph.weight(u, v))?;
            } else {
                writeln!(writer, "{} {}", u + 1, v + 1)?;
            }
        }

        Ok(())
    }
}

/// Writes graphs with the default [`EdgeListWriter`]
pub trait EdgeListWrite {
    /// Serializes `self` into `writer`
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Serializes `self` into the file at `path`
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(&mut writer)?;
        writer.flush()
    }
}

impl EdgeListWrite for Graph {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::new().try_write_graph(self, writer)
    }
}
