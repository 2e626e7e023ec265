use std::fmt::Display;

use geo::{coord, Coord};
use serde::{Deserialize, Serialize};

use super::vertex_id::VertexId;

/// a vertex in the geometric graph: a stable id plus a WGS84 `(lon, lat)`
/// coordinate.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Vertex {
    pub vertex_id: VertexId,
    pub coordinate: Coord<f64>,
}

impl Vertex {
    pub fn new(vertex_id: usize, lon: f64, lat: f64) -> Self {
        Self {
            vertex_id: VertexId(vertex_id),
            coordinate: coord! { x: lon, y: lat },
        }
    }

    pub fn lon(&self) -> f64 {
        self.coordinate.x
    }

    pub fn lat(&self) -> f64 {
        self.coordinate.y
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vertex {} ({}, {})", self.vertex_id, self.lat(), self.lon())
    }
}
