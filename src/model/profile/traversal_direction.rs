/// the directions a profile permits an edge to be traversed in (spec
/// section 3, `Factor`). distinct from
/// [`crate::model::network::Orientation`], which describes a concrete
/// adjacency entry rather than a permission.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum TraversalDirection {
    #[default]
    Both,
    Forward,
    Backward,
    None,
}

impl TraversalDirection {
    /// whether a traversal in `orientation` is permitted.
    pub fn allows(self, orientation: crate::model::network::Orientation) -> bool {
        use crate::model::network::Orientation;
        match (self, orientation) {
            (TraversalDirection::Both, _) => true,
            (TraversalDirection::Forward, Orientation::Forward) => true,
            (TraversalDirection::Backward, Orientation::Backward) => true,
            _ => false,
        }
    }
}
