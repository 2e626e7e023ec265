use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// dense, zero-based index into [`super::ch_graph::CHGraph`]'s edge list.
/// distinct from [`crate::model::network::EdgeId`]: a `CHEdgeId` may name
/// either an original-graph edge or a shortcut synthesized during
/// contraction.
#[derive(Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Default)]
pub struct CHEdgeId(pub usize);

impl Display for CHEdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for CHEdgeId {
    fn from(value: usize) -> Self {
        CHEdgeId(value)
    }
}
