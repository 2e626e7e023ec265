use serde::{Deserialize, Serialize};

use super::edge_profile_id::EdgeProfileId;
use crate::model::unit::Distance;

/// the opaque per-edge data word: distance in meters and an
/// [`EdgeProfileId`], each kept in its own `u32` so neither one's range
/// bounds the other (mirrors [`super::super::ch::CHEdgeData`]'s two-word
/// layout). a `Graph`'s edge list stays a flat `Box<[Edge]>` without an
/// extra heap indirection per edge.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometricEdgeData {
    distance_bits: u32,
    profile_id: u32,
}

impl GeometricEdgeData {
    /// pack a distance (meters) and edge-profile id into one record.
    /// negative distances clamp to zero; everything else round-trips
    /// through `f32` at `f32` precision.
    pub fn pack(distance_meters: f64, edge_profile_id: EdgeProfileId) -> GeometricEdgeData {
        let distance = (distance_meters.max(0.0) as f32).to_bits();
        GeometricEdgeData {
            distance_bits: distance,
            profile_id: edge_profile_id.0 as u32,
        }
    }

    pub fn distance(&self) -> Distance {
        Distance::new(f32::from_bits(self.distance_bits) as f64)
    }

    pub fn edge_profile_id(&self) -> EdgeProfileId {
        EdgeProfileId(self.profile_id as u16)
    }
}
