use thiserror::Error;

use super::edge_id::EdgeId;
use super::vertex_id::VertexId;

/// errors raised while building or querying a [`super::graph::Graph`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("vertex {0} not found in graph")]
    VertexNotFound(VertexId),
    #[error("edge {0} not found in graph")]
    EdgeNotFound(EdgeId),
    #[error("edge {edge_id} references vertex {vertex_id} which is out of range")]
    DanglingEdgeEndpoint { edge_id: EdgeId, vertex_id: VertexId },
}
