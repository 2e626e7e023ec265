use geo::Coord;

use super::network::EdgeId;
use super::profile::EdgeAttributes;
use super::unit::{Cost, Distance};

/// the profile attribute bag and partial distance contributed by one edge
/// of a [`Route`].
#[derive(Clone, Debug)]
pub struct RouteSegment {
    pub edge_id: EdgeId,
    pub distance: Distance,
    pub attributes: EdgeAttributes,
}

/// a reconstructed geometric route: a polyline, total distance and time,
/// and per-segment attributes.
#[derive(Clone, Debug)]
pub struct Route {
    pub shape: Vec<Coord<f64>>,
    pub distance: Distance,
    pub time: Cost,
    pub segments: Vec<RouteSegment>,
}

impl Route {
    /// a zero-length route at a single coordinate, for the `source ==
    /// target` boundary case.
    pub fn trivial(coordinate: Coord<f64>) -> Self {
        Self {
            shape: vec![coordinate],
            distance: Distance::ZERO,
            time: Cost::ZERO,
            segments: Vec::new(),
        }
    }
}
