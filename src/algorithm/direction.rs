use crate::model::network::{Adjacency, EdgeId, Graph, NetworkError, VertexId};

/// which half of a (bidirectional) search is running. selects which
/// adjacency table of the [`Graph`] to walk; the orientation carried on
/// each [`Adjacency`] entry already encodes the real direction of travel,
/// so no separate "invert the profile direction" step is needed the way a
/// single forward-only adjacency table would require (see DESIGN.md).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

impl SearchDirection {
    pub fn incident_edges<'g>(&self, graph: &'g Graph, vertex_id: VertexId) -> Result<&'g [Adjacency], NetworkError> {
        match self {
            SearchDirection::Forward => graph.out_edges(vertex_id),
            SearchDirection::Backward => graph.in_edges(vertex_id),
        }
    }

    pub fn reversed(self) -> SearchDirection {
        match self {
            SearchDirection::Forward => SearchDirection::Backward,
            SearchDirection::Backward => SearchDirection::Forward,
        }
    }
}

/// the edge traversed to reach a vertex, kept alongside the vertex it
/// originated from so a predecessor chain can be unpacked into an edge
/// sequence.
#[derive(Copy, Clone, Debug)]
pub struct TraversedEdge {
    pub edge_id: EdgeId,
    pub from_vertex_id: VertexId,
}
