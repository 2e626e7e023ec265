use std::cmp::Reverse;

use super::direction::{SearchDirection, TraversedEdge};
use super::search_error::SearchError;
use super::search_tree::{FrontierEntry, Predecessor, SearchTree, SearchTreeBranch};
use super::termination::CancelToken;
use crate::model::network::Graph;
use crate::model::profile::{ProfileDictionary, RoutingProfile};
use crate::model::unit::{AsF64, Cost, Distance, ReverseCost};
use crate::util::priority_queue::InternalPriorityQueue;

/// priority key: smallest cost pops first, ties broken by smallest vertex
/// id, so relaxation order is deterministic.
type Priority = (ReverseCost, Reverse<usize>);

fn priority(weight: Cost, vertex_id: usize) -> Priority {
    (ReverseCost::from(weight), Reverse(vertex_id))
}

/// one half of a Dijkstra search: its own priority queue and settled-tree,
/// advanced one vertex at a time by [`HalfSearch::step`]. [`super::dijkstra::run`]
/// drives one of these to completion; [`super::bidirectional::run`] drives
/// two of these in lockstep, interleaved by current minimum weight.
pub struct HalfSearch {
    tree: SearchTree,
    queue: InternalPriorityQueue<crate::model::network::VertexId, Priority>,
}

impl HalfSearch {
    pub fn new(frontier: &[FrontierEntry]) -> Self {
        let mut tree = SearchTree::new();
        let mut queue = InternalPriorityQueue::default();
        for entry in frontier {
            tree.insert(
                entry.vertex_id,
                SearchTreeBranch {
                    cumulative_weight: entry.weight,
                    predecessor: Predecessor::Root(entry.predecessor_edge),
                },
            );
            queue.push(entry.vertex_id, priority(entry.weight, entry.vertex_id.0));
        }
        Self { tree, queue }
    }

    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    pub fn into_tree(self) -> SearchTree {
        self.tree
    }

    /// the smallest weight of any unsettled entry still in the queue, or
    /// `None` once it is empty.
    pub fn current_min(&self) -> Option<Cost> {
        self.queue.peek().map(|(_, p)| Cost::from(p.0))
    }

    pub fn weight_of(&self, vertex_id: crate::model::network::VertexId) -> Option<Cost> {
        self.tree.get(&vertex_id).map(|b| b.cumulative_weight)
    }

    /// pop and relax exactly one vertex, returning `(vertex, weight)` for
    /// the vertex settled, or `None` if the queue emptied without settling
    /// one (all remaining entries were stale).
    pub fn step(
        &mut self,
        graph: &Graph,
        profiles: &ProfileDictionary,
        profile: &dyn RoutingProfile,
        direction: SearchDirection,
        cancel: &CancelToken,
    ) -> Result<Option<(crate::model::network::VertexId, Cost)>, SearchError> {
        let (current_vertex_id, current_weight) = loop {
            if cancel.is_canceled() {
                return Err(SearchError::Canceled);
            }
            let Some((vertex_id, p)) = self.queue.pop() else {
                return Ok(None);
            };
            let weight = Cost::from(p.0);
            let recorded_weight = self.weight_of(vertex_id).unwrap_or(Cost::INFINITY);
            // the queue may hold a stale, since-improved entry for a
            // vertex; skip it and keep popping.
            if weight <= recorded_weight {
                break (vertex_id, weight);
            }
        };

        for &(edge_id, neighbor_vertex_id, orientation) in direction.incident_edges(graph, current_vertex_id)? {
            let edge = graph.get_edge(edge_id)?;
            let attributes = profiles.get(edge.edge_profile_id())?;
            let factor = profile.factor(attributes);
            if !factor.is_traversable() || !factor.direction.allows(orientation) {
                continue;
            }

            let edge_weight = Cost::from(Distance::new(edge.distance().as_f64() * factor.value));
            let tentative_weight = current_weight + edge_weight;

            let existing_weight = self.weight_of(neighbor_vertex_id).unwrap_or(Cost::INFINITY);
            if tentative_weight < existing_weight {
                log::trace!(
                    "relax edge {} ({} -> {}): {} improves {}",
                    edge_id,
                    current_vertex_id,
                    neighbor_vertex_id,
                    tentative_weight,
                    existing_weight
                );
                self.tree.insert(
                    neighbor_vertex_id,
                    SearchTreeBranch {
                        cumulative_weight: tentative_weight,
                        predecessor: Predecessor::Edge(TraversedEdge {
                            edge_id,
                            from_vertex_id: current_vertex_id,
                        }),
                    },
                );
                self.queue
                    .push_increase(neighbor_vertex_id, priority(tentative_weight, neighbor_vertex_id.0));
            }
        }

        Ok(Some((current_vertex_id, current_weight)))
    }
}
