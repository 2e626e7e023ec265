mod edge;
mod edge_data;
mod edge_id;
mod edge_profile_id;
mod graph;
mod network_error;
mod orientation;
mod vertex;
mod vertex_id;

pub use edge::Edge;
pub use edge_data::GeometricEdgeData;
pub use edge_id::EdgeId;
pub use edge_profile_id::EdgeProfileId;
pub use graph::{Adjacency, Graph};
pub use network_error::NetworkError;
pub use orientation::Orientation;
pub use vertex::Vertex;
pub use vertex_id::VertexId;
