//! Adjacency-list graph.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::GraphError;

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// Handle to a vertex of a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    graph: u64,
    index: usize,
}

impl VertexId {
    /// Insertion index of this vertex within its graph.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v#{}", self.index)
    }
}

/// Handle to an edge of a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    graph: u64,
    index: usize,
}

impl EdgeId {
    /// Insertion index of this edge within its graph.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e#{}", self.index)
    }
}

/// One entry of a vertex's incidence list, resolved against the graph.
#[derive(Debug, Clone, Copy)]
pub struct Incidence<'a, E> {
    /// The incident edge.
    pub edge: EdgeId,
    /// The endpoint of `edge` that is not the queried vertex.
    pub opposite: VertexId,
    /// `true` if the queried vertex is the first endpoint stored at insertion.
    pub forward: bool,
    /// The edge payload.
    pub payload: &'a E,
}

#[derive(Debug, Clone)]
struct VertexSlot<V> {
    payload: V,
    incident: Vec<EdgeId>,
}

#[derive(Debug, Clone)]
struct EdgeSlot<E> {
    payload: E,
    ends: [VertexId; 2],
}

/// An undirected multigraph backed by per-vertex incidence lists.
///
/// Parallel edges between the same pair of vertices are allowed; self-loops
/// are not. Adjacency queries cost time proportional to the vertex degree.
/// Removed slots are never reused, so a handle to a removed element stays
/// invalid for the lifetime of the graph. A cloned graph shares handles with
/// its source.
///
/// # Examples
///
/// ```
/// use u_orienteering::graph::Graph;
///
/// let mut g: Graph<&str, f64> = Graph::new();
/// let start = g.insert_vertex("start");
/// let a = g.insert_vertex("A");
/// let out = g.insert_edge(start, a, 5.0).unwrap();
/// let back = g.insert_edge(a, start, 7.5).unwrap();
///
/// assert_eq!(g.num_edges(), 2);
/// assert_eq!(g.degree(a).unwrap(), 2);
/// assert_eq!(g.opposite(start, out).unwrap(), a);
/// assert_eq!(*g.edge(back).unwrap(), 7.5);
/// assert!(g.insert_edge(a, a, 1.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    id: u64,
    vertices: Vec<Option<VertexSlot<V>>>,
    edges: Vec<Option<EdgeSlot<E>>>,
    num_vertices: usize,
    num_edges: usize,
}

impl<V, E> Graph<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            vertices: Vec::new(),
            edges: Vec::new(),
            num_vertices: 0,
            num_edges: 0,
        }
    }

    /// Inserts a new vertex carrying `payload`.
    pub fn insert_vertex(&mut self, payload: V) -> VertexId {
        let id = VertexId {
            graph: self.id,
            index: self.vertices.len(),
        };
        self.vertices.push(Some(VertexSlot {
            payload,
            incident: Vec::new(),
        }));
        self.num_vertices += 1;
        id
    }

    /// Inserts a new edge between `v` and `w` carrying `payload`.
    ///
    /// Repeated calls with the same pair create parallel edges.
    pub fn insert_edge(
        &mut self,
        v: VertexId,
        w: VertexId,
        payload: E,
    ) -> Result<EdgeId, GraphError> {
        self.vertex_slot(v)?;
        self.vertex_slot(w)?;
        if v == w {
            return Err(GraphError::SelfLoop(v));
        }

        let id = EdgeId {
            graph: self.id,
            index: self.edges.len(),
        };
        self.edges.push(Some(EdgeSlot {
            payload,
            ends: [v, w],
        }));
        self.vertex_slot_mut(v)?.incident.push(id);
        self.vertex_slot_mut(w)?.incident.push(id);
        self.num_edges += 1;
        Ok(id)
    }

    /// Detaches and discards edge `e`, returning its payload.
    pub fn remove_edge(&mut self, e: EdgeId) -> Result<E, GraphError> {
        let ends = self.edge_slot(e)?.ends;
        for end in ends {
            self.vertex_slot_mut(end)?.incident.retain(|&x| x != e);
        }
        let slot = self.edges[e.index]
            .take()
            .ok_or(GraphError::ForeignEdge(e))?;
        self.num_edges -= 1;
        Ok(slot.payload)
    }

    /// Removes every edge incident to `v`, then `v` itself, returning its payload.
    pub fn remove_vertex(&mut self, v: VertexId) -> Result<V, GraphError> {
        loop {
            let next = self.vertex_slot(v)?.incident.first().copied();
            match next {
                Some(e) => {
                    self.remove_edge(e)?;
                }
                None => break,
            }
        }
        let slot = self.vertices[v.index]
            .take()
            .ok_or(GraphError::ForeignVertex(v))?;
        self.num_vertices -= 1;
        Ok(slot.payload)
    }

    /// Number of vertices currently in the graph.
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of edges currently in the graph.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.num_vertices == 0
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        let graph = self.id;
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(move |(index, _)| VertexId { graph, index })
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        let graph = self.id;
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(move |(index, _)| EdgeId { graph, index })
    }

    /// An arbitrary vertex (the oldest surviving one), or `None` if empty.
    pub fn a_vertex(&self) -> Option<VertexId> {
        self.vertices().next()
    }

    /// Returns `true` if `v` is a live vertex of this graph.
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertex_slot(v).is_ok()
    }

    /// Returns `true` if `e` is a live edge of this graph.
    pub fn contains_edge(&self, e: EdgeId) -> bool {
        self.edge_slot(e).is_ok()
    }

    /// Payload of vertex `v`.
    pub fn vertex(&self, v: VertexId) -> Result<&V, GraphError> {
        Ok(&self.vertex_slot(v)?.payload)
    }

    /// Mutable payload of vertex `v`.
    pub fn vertex_mut(&mut self, v: VertexId) -> Result<&mut V, GraphError> {
        Ok(&mut self.vertex_slot_mut(v)?.payload)
    }

    /// Payload of edge `e`.
    pub fn edge(&self, e: EdgeId) -> Result<&E, GraphError> {
        Ok(&self.edge_slot(e)?.payload)
    }

    /// Mutable payload of edge `e`.
    pub fn edge_mut(&mut self, e: EdgeId) -> Result<&mut E, GraphError> {
        match self.edges.get_mut(e.index) {
            Some(Some(slot)) if e.graph == self.id => Ok(&mut slot.payload),
            _ => Err(GraphError::ForeignEdge(e)),
        }
    }

    /// Number of edges incident to `v`.
    pub fn degree(&self, v: VertexId) -> Result<usize, GraphError> {
        Ok(self.vertex_slot(v)?.incident.len())
    }

    /// Edges incident to `v`, in insertion order.
    pub fn incident_edges(&self, v: VertexId) -> Result<&[EdgeId], GraphError> {
        Ok(&self.vertex_slot(v)?.incident)
    }

    /// Vertices reached from `v` through each incident edge.
    ///
    /// A neighbour appears once per connecting edge.
    pub fn adjacent_vertices(&self, v: VertexId) -> Result<Vec<VertexId>, GraphError> {
        Ok(self.incidences(v)?.map(|inc| inc.opposite).collect())
    }

    /// Incident edges of `v` resolved to their opposite endpoint and payload.
    pub fn incidences(
        &self,
        v: VertexId,
    ) -> Result<impl Iterator<Item = Incidence<'_, E>> + '_, GraphError> {
        let incident = &self.vertex_slot(v)?.incident;
        Ok(incident.iter().filter_map(move |&e| {
            let slot = self.edges.get(e.index)?.as_ref()?;
            let forward = slot.ends[0] == v;
            Some(Incidence {
                edge: e,
                opposite: if forward { slot.ends[1] } else { slot.ends[0] },
                forward,
                payload: &slot.payload,
            })
        }))
    }

    /// Returns `true` if at least one edge joins `v` and `w`.
    pub fn are_adjacent(&self, v: VertexId, w: VertexId) -> Result<bool, GraphError> {
        self.vertex_slot(w)?;
        Ok(self.incidences(v)?.any(|inc| inc.opposite == w))
    }

    /// The two endpoints of `e`, in the order given at insertion.
    pub fn end_vertices(&self, e: EdgeId) -> Result<(VertexId, VertexId), GraphError> {
        let [a, b] = self.edge_slot(e)?.ends;
        Ok((a, b))
    }

    /// The endpoint of `e` that is not `v`.
    pub fn opposite(&self, v: VertexId, e: EdgeId) -> Result<VertexId, GraphError> {
        self.vertex_slot(v)?;
        let [a, b] = self.edge_slot(e)?.ends;
        if a == v {
            Ok(b)
        } else if b == v {
            Ok(a)
        } else {
            Err(GraphError::NotAnEndpoint { vertex: v, edge: e })
        }
    }

    fn vertex_slot(&self, v: VertexId) -> Result<&VertexSlot<V>, GraphError> {
        if v.graph != self.id {
            return Err(GraphError::ForeignVertex(v));
        }
        self.vertices
            .get(v.index)
            .and_then(Option::as_ref)
            .ok_or(GraphError::ForeignVertex(v))
    }

    fn vertex_slot_mut(&mut self, v: VertexId) -> Result<&mut VertexSlot<V>, GraphError> {
        if v.graph != self.id {
            return Err(GraphError::ForeignVertex(v));
        }
        self.vertices
            .get_mut(v.index)
            .and_then(Option::as_mut)
            .ok_or(GraphError::ForeignVertex(v))
    }

    fn edge_slot(&self, e: EdgeId) -> Result<&EdgeSlot<E>, GraphError> {
        if e.graph != self.id {
            return Err(GraphError::ForeignEdge(e));
        }
        self.edges
            .get(e.index)
            .and_then(Option::as_ref)
            .ok_or(GraphError::ForeignEdge(e))
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}
