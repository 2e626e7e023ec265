use geo::Coord;
use thiserror::Error;

use super::network::{EdgeId, Graph, NetworkError, Orientation};
use super::profile::{ProfileDictionary, ProfileError, RoutingProfile};
use super::unit::{AsF64, Cost};
use crate::algorithm::FrontierEntry;

#[derive(Error, Debug)]
pub enum RouterPointError {
    #[error("offset {0} is outside the valid range [0, 1]")]
    InvalidOffset(f64),
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// a resolved position on the network: an edge id, an offset in `[0, 1]`
/// along that edge in the edge's own `src -> dst` orientation, and the
/// projected coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RouterPoint {
    pub edge_id: EdgeId,
    pub offset: f64,
    pub coordinate: Coord<f64>,
}

impl RouterPoint {
    pub fn new(edge_id: EdgeId, offset: f64, coordinate: Coord<f64>) -> Result<Self, RouterPointError> {
        if !(0.0..=1.0).contains(&offset) {
            return Err(RouterPointError::InvalidOffset(offset));
        }
        Ok(Self { edge_id, offset, coordinate })
    }

    pub fn same_position(&self, other: &RouterPoint) -> bool {
        self.edge_id == other.edge_id && (self.offset - other.offset).abs() < 1e-9
    }

    /// the virtual path derived when this point is the outgoing source of
    /// a forward search: the vertices directly reachable by walking the
    /// remainder of the point's own edge, seeded with the partial weight
    /// already incurred and the edge itself as the frontier's predecessor
    /// so it is threaded back into the final path.
    pub fn head_frontier(
        &self,
        graph: &Graph,
        profiles: &ProfileDictionary,
        profile: &dyn RoutingProfile,
    ) -> Result<Vec<FrontierEntry>, RouterPointError> {
        self.virtual_frontier(graph, profiles, profile, true)
    }

    /// the virtual path derived when this point is the incoming target of a
    /// backward search: the vertices from which the point is directly
    /// reachable, seeded with the partial weight of the remaining stretch
    /// of the point's own edge.
    pub fn tail_frontier(
        &self,
        graph: &Graph,
        profiles: &ProfileDictionary,
        profile: &dyn RoutingProfile,
    ) -> Result<Vec<FrontierEntry>, RouterPointError> {
        self.virtual_frontier(graph, profiles, profile, false)
    }

    fn virtual_frontier(
        &self,
        graph: &Graph,
        profiles: &ProfileDictionary,
        profile: &dyn RoutingProfile,
        as_source: bool,
    ) -> Result<Vec<FrontierEntry>, RouterPointError> {
        let edge = graph.get_edge(self.edge_id)?;
        let attributes = profiles.get(edge.edge_profile_id())?;
        let factor = profile.factor(attributes);
        let mut frontier = Vec::with_capacity(2);
        if !factor.is_traversable() {
            return Ok(frontier);
        }

        let full = edge.distance().as_f64();
        let (forward_vertex, forward_remaining, backward_vertex, backward_remaining) = if as_source {
            (edge.dst_vertex_id, full * (1.0 - self.offset), edge.src_vertex_id, full * self.offset)
        } else {
            (edge.src_vertex_id, full * self.offset, edge.dst_vertex_id, full * (1.0 - self.offset))
        };

        // a remaining distance of exactly zero means this end of the
        // virtual path sits exactly on a real vertex, with no part of
        // `self.edge_id` actually consumed to get there — omit the edge so
        // it is not threaded into a route that never traverses it.
        if factor.direction.allows(Orientation::Forward) {
            let predecessor_edge = if forward_remaining > 0.0 { Some(self.edge_id) } else { None };
            frontier.push(FrontierEntry::new(forward_vertex, Cost::new(forward_remaining * factor.value), predecessor_edge));
        }
        if factor.direction.allows(Orientation::Backward) {
            let predecessor_edge = if backward_remaining > 0.0 { Some(self.edge_id) } else { None };
            frontier.push(FrontierEntry::new(backward_vertex, Cost::new(backward_remaining * factor.value), predecessor_edge));
        }
        Ok(frontier)
    }
}
