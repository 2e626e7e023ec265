use thiserror::Error;

use super::ch_edge_id::CHEdgeId;
use crate::model::network::VertexId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CHError {
    #[error("vertex {0} not found in CH graph")]
    VertexNotFound(VertexId),
    #[error("CH edge {0} not found in CH graph")]
    EdgeNotFound(CHEdgeId),
    #[error(
        "corrupt contraction hierarchy: shortcut {shortcut} over vertex {contracted_vertex} does not have strictly lower level than its endpoints"
    )]
    CorruptShortcut {
        shortcut: CHEdgeId,
        contracted_vertex: VertexId,
    },
}
