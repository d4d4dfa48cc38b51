//! Map loader and the location network it builds.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::LoadError;
use crate::graph::{EdgeId, Graph, GraphError, VertexId};

/// Location graph with a code index and the distinguished origin.
///
/// Vertex payloads are control codes; edge payloads are travel times in
/// minutes. The origin is always present under the code [`Network::START`].
///
/// # Examples
///
/// ```
/// use u_orienteering::io::Network;
///
/// let mut net = Network::new();
/// let a = net.ensure_vertex("A");
/// net.connect(net.start(), a, 4.0, 6.0).unwrap();
/// assert_eq!(net.vertex("A"), Some(a));
/// assert_eq!(net.graph().num_edges(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Network {
    graph: Graph<String, f64>,
    codes: HashMap<String, VertexId>,
    start: VertexId,
}

impl Network {
    /// Code of the origin vertex.
    pub const START: &'static str = "start";

    /// Creates a network holding only the origin.
    pub fn new() -> Self {
        let mut graph = Graph::new();
        let start = graph.insert_vertex(Self::START.to_string());
        let mut codes = HashMap::new();
        codes.insert(Self::START.to_string(), start);
        Self {
            graph,
            codes,
            start,
        }
    }

    /// The location graph.
    pub fn graph(&self) -> &Graph<String, f64> {
        &self.graph
    }

    /// Consumes the network, returning the graph and the origin.
    pub fn into_parts(self) -> (Graph<String, f64>, VertexId) {
        (self.graph, self.start)
    }

    /// The origin vertex.
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Vertex carrying `code`.
    pub fn vertex(&self, code: &str) -> Option<VertexId> {
        self.codes.get(code).copied()
    }

    /// Vertex carrying `code`, inserted if missing.
    pub fn ensure_vertex(&mut self, code: &str) -> VertexId {
        if let Some(&v) = self.codes.get(code) {
            return v;
        }
        let v = self.graph.insert_vertex(code.to_string());
        self.codes.insert(code.to_string(), v);
        v
    }

    /// Adds a connection as two edges: `from → to` taking `forward` minutes
    /// and `to → from` taking `reverse` minutes.
    pub fn connect(
        &mut self,
        from: VertexId,
        to: VertexId,
        forward: f64,
        reverse: f64,
    ) -> Result<(EdgeId, EdgeId), GraphError> {
        let out = self.graph.insert_edge(from, to, forward)?;
        let back = self.graph.insert_edge(to, from, reverse)?;
        Ok((out, back))
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads a map file, scaling every travel time by `pace`.
pub fn read_map(path: impl AsRef<Path>, pace: f64) -> Result<Network, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_map(BufReader::new(file), pace)
}

/// Parses a map description, scaling every travel time by `pace`.
///
/// The header `controls N c1 .. cN` declares the control vertices (codes past
/// the N-th are ignored). Each following line with exactly four fields,
/// `src dst forward reverse`, becomes a forward and a reverse edge. Lines
/// with any other number of fields are skipped, as are connections naming
/// an undeclared code.
pub fn parse_map<R: BufRead>(reader: R, pace: f64) -> Result<Network, LoadError> {
    if !pace.is_finite() || pace <= 0.0 {
        return Err(LoadError::InvalidPace(pace));
    }

    let mut lines = reader.lines();
    let header = lines.next().transpose()?.unwrap_or_default();
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() < 2 || fields[0] != "controls" {
        return Err(LoadError::MissingHeader {
            line: 1,
            expected: "controls",
            found: header.clone(),
        });
    }
    let declared: usize = fields[1].parse().map_err(|_| LoadError::InvalidNumber {
        line: 1,
        field: "control count",
        value: fields[1].to_string(),
    })?;

    let mut network = Network::new();
    for code in fields.iter().skip(2).take(declared) {
        network.ensure_vertex(code);
    }
    if fields.len() - 2 < declared {
        tracing::warn!(
            declared,
            listed = fields.len() - 2,
            "map header lists fewer codes than declared"
        );
    }

    for (idx, line) in lines.enumerate() {
        let line_no = idx + 2;
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 {
            if !fields.is_empty() {
                tracing::debug!(line = line_no, "skipping map line without four fields");
            }
            continue;
        }

        let forward = parse_time(fields[2], line_no)? * pace;
        let reverse = parse_time(fields[3], line_no)? * pace;
        let (Some(src), Some(dst)) = (network.vertex(fields[0]), network.vertex(fields[1])) else {
            tracing::warn!(
                line = line_no,
                src = fields[0],
                dst = fields[1],
                "skipping connection to an undeclared control"
            );
            continue;
        };

        network
            .connect(src, dst, forward, reverse)
            .map_err(|source| LoadError::Connection {
                line: line_no,
                source,
            })?;
    }

    tracing::debug!(
        vertices = network.graph().num_vertices(),
        edges = network.graph().num_edges(),
        "map loaded"
    );
    Ok(network)
}

fn parse_time(text: &str, line: usize) -> Result<f64, LoadError> {
    let value: f64 = text.parse().map_err(|_| LoadError::InvalidNumber {
        line,
        field: "travel time",
        value: text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(LoadError::InvalidNumber {
            line,
            field: "travel time",
            value: text.to_string(),
        });
    }
    if value < 0.0 {
        return Err(LoadError::NegativeTime { line, value });
    }
    Ok(value)
}
