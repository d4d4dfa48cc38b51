//! Graph precondition errors.

use thiserror::Error;

use super::{EdgeId, VertexId};

/// An invalid argument passed to a [`Graph`](super::Graph) operation.
///
/// Every variant signals a caller bug (a stale or foreign handle, a
/// self-loop, a vertex that does not touch the given edge). None of them
/// describe a runtime condition worth recovering from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The vertex handle belongs to another graph or was removed.
    #[error("vertex {0} is not part of this graph")]
    ForeignVertex(VertexId),
    /// The edge handle belongs to another graph or was removed.
    #[error("edge {0} is not part of this graph")]
    ForeignEdge(EdgeId),
    /// Both endpoints of a new edge are the same vertex.
    #[error("cannot connect vertex {0} to itself")]
    SelfLoop(VertexId),
    /// The vertex is not one of the edge's two endpoints.
    #[error("vertex {vertex} is not an endpoint of edge {edge}")]
    NotAnEndpoint {
        /// The queried vertex.
        vertex: VertexId,
        /// The edge it was expected to touch.
        edge: EdgeId,
    },
}
