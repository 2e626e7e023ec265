use super::ch_edge::CHEdge;
use super::ch_edge_data::CHEdgeData;
use super::ch_edge_id::CHEdgeId;
use super::ch_error::CHError;
use crate::model::network::{EdgeId, VertexId};

/// the directed CH meta-graph: original edges plus shortcuts synthesized
/// during contraction, each vertex
/// carrying a level imposed by contraction order. built once by
/// [`super::builder::contract`] and then read-only, like [`crate::model::network::Graph`].
#[derive(Debug)]
pub struct CHGraph {
    /// contraction rank per vertex; index is `VertexId.0`.
    levels: Vec<u32>,
    edges: Box<[CHEdge]>,
    out_adjacency: Vec<Vec<CHEdgeId>>,
    in_adjacency: Vec<Vec<CHEdgeId>>,
    /// the original geometric edge a non-shortcut CH edge corresponds to;
    /// `None` for shortcuts and for entries out of range.
    original_edge: Vec<Option<EdgeId>>,
}

impl CHGraph {
    pub fn new(
        levels: Vec<u32>,
        edges: Vec<CHEdge>,
        original_edge: Vec<Option<EdgeId>>,
    ) -> Result<CHGraph, CHError> {
        let mut out_adjacency: Vec<Vec<CHEdgeId>> = vec![Vec::new(); levels.len()];
        let mut in_adjacency: Vec<Vec<CHEdgeId>> = vec![Vec::new(); levels.len()];

        for edge in &edges {
            let src = edge.src_vertex_id.0;
            let dst = edge.dst_vertex_id.0;
            if src >= levels.len() {
                return Err(CHError::VertexNotFound(edge.src_vertex_id));
            }
            if dst >= levels.len() {
                return Err(CHError::VertexNotFound(edge.dst_vertex_id));
            }
            out_adjacency[src].push(edge.ch_edge_id);
            in_adjacency[dst].push(edge.ch_edge_id);
        }

        Ok(CHGraph {
            levels,
            edges: edges.into_boxed_slice(),
            out_adjacency,
            in_adjacency,
            original_edge,
        })
    }

    pub fn n_vertices(&self) -> usize {
        self.levels.len()
    }

    pub fn level(&self, vertex_id: VertexId) -> Result<u32, CHError> {
        self.levels.get(vertex_id.0).copied().ok_or(CHError::VertexNotFound(vertex_id))
    }

    pub fn get_edge(&self, ch_edge_id: CHEdgeId) -> Result<&CHEdge, CHError> {
        self.edges.get(ch_edge_id.0).ok_or(CHError::EdgeNotFound(ch_edge_id))
    }

    pub fn out_edges(&self, vertex_id: VertexId) -> Result<&[CHEdgeId], CHError> {
        self.out_adjacency
            .get(vertex_id.0)
            .map(Vec::as_slice)
            .ok_or(CHError::VertexNotFound(vertex_id))
    }

    pub fn in_edges(&self, vertex_id: VertexId) -> Result<&[CHEdgeId], CHError> {
        self.in_adjacency
            .get(vertex_id.0)
            .map(Vec::as_slice)
            .ok_or(CHError::VertexNotFound(vertex_id))
    }

    /// the original geometric edge id a non-shortcut CH edge corresponds
    /// to, consulting the meta table.
    pub fn original_edge_id(&self, ch_edge_id: CHEdgeId) -> Result<Option<EdgeId>, CHError> {
        self.original_edge
            .get(ch_edge_id.0)
            .copied()
            .ok_or(CHError::EdgeNotFound(ch_edge_id))
    }

    pub fn data(&self, ch_edge_id: CHEdgeId) -> Result<CHEdgeData, CHError> {
        Ok(self.get_edge(ch_edge_id)?.data)
    }

    pub fn edge_endpoints(&self, ch_edge_id: CHEdgeId) -> Result<(VertexId, VertexId), CHError> {
        let edge = self.get_edge(ch_edge_id)?;
        Ok((edge.src_vertex_id, edge.dst_vertex_id))
    }
}
