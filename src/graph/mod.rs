//! Undirected multigraph of locations and timed connections.
//!
//! A single concrete adjacency-list graph, [`Graph`], parametrized over its
//! vertex payload `V` and edge payload `E`. Vertices and edges are addressed
//! through typed handles ([`VertexId`], [`EdgeId`]) that remember which graph
//! issued them, so a handle from another graph (or one whose element was
//! removed) is rejected with a [`GraphError`] instead of silently aliasing.

mod adjacency;
mod error;

pub use adjacency::{EdgeId, Graph, Incidence, VertexId};
pub use error::GraphError;
