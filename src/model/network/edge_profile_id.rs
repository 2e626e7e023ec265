use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// id of an interned edge-profile attribute bag in the graph's profile
/// dictionary. stored in its own word of
/// [`super::edge_data::GeometricEdgeData`], so the full `u16` range is
/// representable on an edge.
#[derive(Copy, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct EdgeProfileId(pub u16);

impl Display for EdgeProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
