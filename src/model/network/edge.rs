use geo::Coord;

use super::edge_data::GeometricEdgeData;
use super::edge_id::EdgeId;
use super::edge_profile_id::EdgeProfileId;
use super::vertex_id::VertexId;
use crate::model::unit::Distance;

/// an edge in the geometric graph. storage is bidirectional: a single
/// record represents one road segment and the
/// `Graph` builds both a forward and reverse adjacency entry from it.
/// whether a search may actually traverse it forward, backward, both, or
/// neither is a property of the [`crate::model::profile::RoutingProfile`]
/// applied at query time, not of this record.
#[derive(Clone, Debug)]
pub struct Edge {
    pub edge_id: EdgeId,
    pub src_vertex_id: VertexId,
    pub dst_vertex_id: VertexId,
    pub data: GeometricEdgeData,
    /// coordinates strictly between `src_vertex_id` and `dst_vertex_id`, in
    /// traversal order from src to dst.
    pub shape: Box<[Coord<f64>]>,
}

impl Edge {
    pub fn new(
        edge_id: usize,
        src_vertex_id: usize,
        dst_vertex_id: usize,
        distance_meters: f64,
        edge_profile_id: EdgeProfileId,
        shape: Vec<Coord<f64>>,
    ) -> Self {
        Self {
            edge_id: EdgeId(edge_id),
            src_vertex_id: VertexId(src_vertex_id),
            dst_vertex_id: VertexId(dst_vertex_id),
            data: GeometricEdgeData::pack(distance_meters, edge_profile_id),
            shape: shape.into_boxed_slice(),
        }
    }

    pub fn distance(&self) -> Distance {
        self.data.distance()
    }

    pub fn edge_profile_id(&self) -> EdgeProfileId {
        self.data.edge_profile_id()
    }
}
