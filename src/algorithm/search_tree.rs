use std::collections::HashMap;

use super::direction::TraversedEdge;
use crate::model::network::{EdgeId, VertexId};
use crate::model::unit::Cost;

/// how a settled vertex was first reached.
#[derive(Copy, Clone, Debug)]
pub enum Predecessor {
    /// a frontier vertex, produced outside the graph search itself (e.g. by
    /// a `RouterPoint`'s virtual path). the edge, if any, is the partial
    /// edge that led here and is not itself part of the settled graph walk.
    Root(Option<EdgeId>),
    /// reached by relaxing an edge from another settled vertex.
    Edge(TraversedEdge),
}

/// one entry of a Dijkstra solution: the shortest cumulative weight found
/// to a vertex, and how it was reached.
#[derive(Copy, Clone, Debug)]
pub struct SearchTreeBranch {
    pub cumulative_weight: Cost,
    pub predecessor: Predecessor,
}

/// the full solution of a single-source Dijkstra pass: every vertex
/// settled, keyed by vertex id.
pub type SearchTree = HashMap<VertexId, SearchTreeBranch>;

/// one member of the initial frontier a search starts from: a vertex, its
/// starting cumulative weight, and the partial edge (if any) that
/// produced it.
#[derive(Copy, Clone, Debug)]
pub struct FrontierEntry {
    pub vertex_id: VertexId,
    pub weight: Cost,
    pub predecessor_edge: Option<EdgeId>,
}

impl FrontierEntry {
    pub fn new(vertex_id: VertexId, weight: Cost, predecessor_edge: Option<EdgeId>) -> Self {
        Self {
            vertex_id,
            weight,
            predecessor_edge,
        }
    }
}

/// walk a tree's predecessor chain from `vertex_id` back to its root
/// frontier entry, collecting edge ids in the order visited (root-most
/// edge last).
fn walk_to_root(tree: &SearchTree, vertex_id: VertexId) -> Vec<EdgeId> {
    let mut edges = Vec::new();
    let mut current = vertex_id;
    loop {
        let Some(branch) = tree.get(&current) else {
            break;
        };
        match branch.predecessor {
            Predecessor::Root(maybe_edge) => {
                if let Some(edge_id) = maybe_edge {
                    edges.push(edge_id);
                }
                break;
            }
            Predecessor::Edge(traversed) => {
                edges.push(traversed.edge_id);
                current = traversed.from_vertex_id;
            }
        }
    }
    edges
}

/// unpack a forward search tree's predecessor chain from `vertex_id` back
/// to its source frontier, returning edge ids in source-to-`vertex_id`
/// order.
pub fn unpack_edge_ids(tree: &SearchTree, vertex_id: VertexId) -> Vec<EdgeId> {
    let mut edges = walk_to_root(tree, vertex_id);
    edges.reverse();
    edges
}

/// unpack a backward search tree's predecessor chain from `vertex_id`
/// forward to its target frontier. each predecessor edge already points
/// toward the target, so — unlike [`unpack_edge_ids`] — no reversal is
/// needed to land in `vertex_id`-to-target order.
pub fn unpack_backward_chain(tree: &SearchTree, vertex_id: VertexId) -> Vec<EdgeId> {
    walk_to_root(tree, vertex_id)
}
