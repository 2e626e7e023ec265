/// which way along an edge's stored `src -> dst` orientation a particular
/// adjacency-list entry travels. distinct from
/// [`crate::model::profile::TraversalDirection`], which is the permission
/// mask a profile grants an edge; `Orientation` is a geometric fact about
/// the entry, `TraversalDirection` is whether that fact is allowed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// traveling from `edge.src_vertex_id` to `edge.dst_vertex_id`.
    Forward,
    /// traveling from `edge.dst_vertex_id` to `edge.src_vertex_id`.
    Backward,
}

impl Orientation {
    pub fn reversed(self) -> Orientation {
        match self {
            Orientation::Forward => Orientation::Backward,
            Orientation::Backward => Orientation::Forward,
        }
    }
}
