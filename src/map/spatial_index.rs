use rstar::{RTree, RTreeObject, AABB};

use crate::model::network::{EdgeId, Graph};

/// an edge's bounding box, entered into the [`RTree`] under its own edge
/// id.
struct EdgeEnvelope {
    edge_id: EdgeId,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for EdgeEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope.clone()
    }
}

/// an R-tree over every edge's bounding box, built once from a [`Graph`]
/// and then read-only, mirroring the graph it indexes. window queries
/// return candidate edge ids; the resolver itself does the precise
/// point-to-polyline projection.
pub struct SpatialIndex {
    tree: RTree<EdgeEnvelope>,
}

impl SpatialIndex {
    pub fn build(graph: &Graph) -> Self {
        let entries = graph
            .edges()
            .iter()
            .map(|edge| {
                let src = graph.get_vertex(edge.src_vertex_id).expect("edge endpoint vertex missing");
                let dst = graph.get_vertex(edge.dst_vertex_id).expect("edge endpoint vertex missing");

                let mut min = [src.lon().min(dst.lon()), src.lat().min(dst.lat())];
                let mut max = [src.lon().max(dst.lon()), src.lat().max(dst.lat())];
                for coord in edge.shape.iter() {
                    min[0] = min[0].min(coord.x);
                    min[1] = min[1].min(coord.y);
                    max[0] = max[0].max(coord.x);
                    max[1] = max[1].max(coord.y);
                }

                EdgeEnvelope {
                    edge_id: edge.edge_id,
                    envelope: AABB::from_corners(min, max),
                }
            })
            .collect();

        Self { tree: RTree::bulk_load(entries) }
    }

    /// edges whose bounding box intersects the square window centered on
    /// `(lon, lat)` and extended by `offset_degrees` in every direction.
    pub fn candidates(&self, lon: f64, lat: f64, offset_degrees: f64) -> Vec<EdgeId> {
        let window = AABB::from_corners([lon - offset_degrees, lat - offset_degrees], [lon + offset_degrees, lat + offset_degrees]);
        self.tree.locate_in_envelope_intersecting(&window).map(|entry| entry.edge_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::{EdgeId, EdgeProfileId};
    use crate::test_support::line_graph;

    #[test]
    fn test_candidates_finds_nearby_edge() {
        let graph = line_graph(5, 100.0, EdgeProfileId(0));
        let index = SpatialIndex::build(&graph);

        let candidates = index.candidates(0.015, 0.0, 0.02);
        assert!(candidates.contains(&EdgeId(1)));
    }

    #[test]
    fn test_candidates_empty_far_from_graph() {
        let graph = line_graph(5, 100.0, EdgeProfileId(0));
        let index = SpatialIndex::build(&graph);

        let candidates = index.candidates(50.0, 50.0, 0.01);
        assert!(candidates.is_empty());
    }
}
