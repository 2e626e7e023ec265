use std::cmp::Reverse;
use std::collections::HashMap;

use super::search_error::SearchError;
use super::termination::CancelToken;
use crate::model::ch::{CHEdgeId, CHGraph};
use crate::model::network::{EdgeId, VertexId};
use crate::model::profile::TraversalDirection;
use crate::model::unit::{Cost, ReverseCost};
use crate::util::priority_queue::InternalPriorityQueue;

#[derive(Copy, Clone, Debug)]
enum ChPredecessor {
    Root,
    Edge { ch_edge_id: CHEdgeId, from_vertex_id: VertexId },
}

#[derive(Copy, Clone, Debug)]
struct ChBranch {
    cumulative_weight: Cost,
    predecessor: ChPredecessor,
}

type ChSearchTree = HashMap<VertexId, ChBranch>;

type Priority = (ReverseCost, Reverse<usize>);
fn priority(weight: Cost, vertex_id: usize) -> Priority {
    (ReverseCost::from(weight), Reverse(vertex_id))
}

/// whether a CH edge's direction flag permits a search walking in
/// `forward` order (source-to-meeting, following `out_edges`) versus
/// `backward` order (target-to-meeting, following `in_edges`).
fn allows(direction: TraversalDirection, forward: bool) -> bool {
    match direction {
        TraversalDirection::Both => true,
        TraversalDirection::Forward => forward,
        TraversalDirection::Backward => !forward,
        TraversalDirection::None => false,
    }
}

struct ChHalf {
    tree: ChSearchTree,
    queue: InternalPriorityQueue<VertexId, Priority>,
}

impl ChHalf {
    fn new(root: VertexId) -> Self {
        let mut tree = ChSearchTree::new();
        let mut queue = InternalPriorityQueue::default();
        tree.insert(
            root,
            ChBranch {
                cumulative_weight: Cost::ZERO,
                predecessor: ChPredecessor::Root,
            },
        );
        queue.push(root, priority(Cost::ZERO, root.0));
        Self { tree, queue }
    }

    fn current_min(&self) -> Option<Cost> {
        self.queue.peek().map(|(_, p)| Cost::from(p.0))
    }

    fn weight_of(&self, vertex_id: VertexId) -> Option<Cost> {
        self.tree.get(&vertex_id).map(|b| b.cumulative_weight)
    }

    /// advance one step, upward only: forward search follows `out_edges`
    /// to strictly-higher-level neighbors; backward search follows
    /// `in_edges` symmetrically.
    fn step(&mut self, ch_graph: &CHGraph, forward: bool, cancel: &CancelToken) -> Result<Option<(VertexId, Cost)>, SearchError> {
        let (current_vertex_id, current_weight) = loop {
            if cancel.is_canceled() {
                return Err(SearchError::Canceled);
            }
            let Some((vertex_id, p)) = self.queue.pop() else {
                return Ok(None);
            };
            let weight = Cost::from(p.0);
            let recorded = self.weight_of(vertex_id).unwrap_or(Cost::INFINITY);
            if weight <= recorded {
                break (vertex_id, weight);
            }
        };

        let current_level = ch_graph.level(current_vertex_id)?;
        let incident: &[CHEdgeId] = if forward {
            ch_graph.out_edges(current_vertex_id)?
        } else {
            ch_graph.in_edges(current_vertex_id)?
        };

        for &ch_edge_id in incident {
            let edge = ch_graph.get_edge(ch_edge_id)?;
            let neighbor = if forward { edge.dst_vertex_id } else { edge.src_vertex_id };
            if !allows(edge.data.direction(), forward) {
                continue;
            }
            if ch_graph.level(neighbor)? <= current_level {
                continue;
            }

            let tentative_weight = current_weight + Cost::new(edge.data.weight() as f64);
            let existing_weight = self.weight_of(neighbor).unwrap_or(Cost::INFINITY);
            if tentative_weight < existing_weight {
                self.tree.insert(
                    neighbor,
                    ChBranch {
                        cumulative_weight: tentative_weight,
                        predecessor: ChPredecessor::Edge {
                            ch_edge_id,
                            from_vertex_id: current_vertex_id,
                        },
                    },
                );
                self.queue.push_increase(neighbor, priority(tentative_weight, neighbor.0));
            }
        }

        Ok(Some((current_vertex_id, current_weight)))
    }
}

fn walk_to_root(tree: &ChSearchTree, vertex_id: VertexId) -> Vec<CHEdgeId> {
    let mut edges = Vec::new();
    let mut current = vertex_id;
    loop {
        let Some(branch) = tree.get(&current) else { break };
        match branch.predecessor {
            ChPredecessor::Root => break,
            ChPredecessor::Edge { ch_edge_id, from_vertex_id } => {
                edges.push(ch_edge_id);
                current = from_vertex_id;
            }
        }
    }
    edges
}

/// locate the CH edge `from -> to` added at a strictly lower level than
/// both endpoints, as required to undo a shortcut. a shortcut whose
/// contracted vertex does not have strictly lower level than both
/// endpoints fails with `InvariantViolation`.
fn find_component_edge(ch_graph: &CHGraph, from: VertexId, to: VertexId) -> Result<CHEdgeId, SearchError> {
    ch_graph
        .out_edges(from)?
        .iter()
        .copied()
        .find(|&ch_edge_id| {
            ch_graph
                .get_edge(ch_edge_id)
                .map(|e| e.dst_vertex_id == to)
                .unwrap_or(false)
        })
        .ok_or_else(|| SearchError::InvariantViolation(format!("no CH edge {} -> {} to unpack shortcut with", from, to)))
}

/// recursively expand shortcuts in `edge_ids` into the original-graph CH
/// edges they bypass.
fn unpack_shortcuts(ch_graph: &CHGraph, edge_ids: &[CHEdgeId]) -> Result<Vec<CHEdgeId>, SearchError> {
    let mut result = Vec::new();
    let mut stack: Vec<CHEdgeId> = edge_ids.iter().rev().copied().collect();

    while let Some(ch_edge_id) = stack.pop() {
        let edge = ch_graph.get_edge(ch_edge_id)?;
        match edge.data.contracted_id() {
            None => result.push(ch_edge_id),
            Some(contracted_vertex) => {
                let (src, dst) = (edge.src_vertex_id, edge.dst_vertex_id);
                let contracted_level = ch_graph.level(contracted_vertex)?;
                let src_level = ch_graph.level(src)?;
                let dst_level = ch_graph.level(dst)?;
                if contracted_level >= src_level || contracted_level >= dst_level {
                    return Err(SearchError::InvariantViolation(format!(
                        "shortcut {} over vertex {} does not have strictly lower level than its endpoints",
                        ch_edge_id, contracted_vertex
                    )));
                }
                let edge1 = find_component_edge(ch_graph, src, contracted_vertex)?;
                let edge2 = find_component_edge(ch_graph, contracted_vertex, dst)?;
                stack.push(edge2);
                stack.push(edge1);
            }
        }
    }
    Ok(result)
}

pub struct ChBidirectionalResult {
    pub meeting_vertex_id: VertexId,
    pub weight: Cost,
    pub edge_ids: Vec<EdgeId>,
}

/// bidirectional Dijkstra over a contraction hierarchy: upward searches
/// from `source` and `target`, meeting-weight tracking
/// identical to the plain bidirectional search, then recursive shortcut
/// unpacking and a final mapping back to original geometric edge ids.
pub fn run(ch_graph: &CHGraph, source: VertexId, target: VertexId, cancel: &CancelToken) -> Result<ChBidirectionalResult, SearchError> {
    let mut forward = ChHalf::new(source);
    let mut backward = ChHalf::new(target);

    let mut mu = Cost::INFINITY;
    let mut meeting_vertex_id: Option<VertexId> = None;

    loop {
        let forward_min = forward.current_min();
        let backward_min = backward.current_min();
        if forward_min.is_none() && backward_min.is_none() {
            break;
        }
        let bound = forward_min.unwrap_or(Cost::INFINITY) + backward_min.unwrap_or(Cost::INFINITY);
        if bound >= mu {
            break;
        }

        let advance_forward = match (forward_min, backward_min) {
            (Some(f), Some(b)) => f <= b,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        let settled = if advance_forward {
            forward.step(ch_graph, true, cancel)?
        } else {
            backward.step(ch_graph, false, cancel)?
        };
        let Some((vertex_id, weight)) = settled else { continue };

        let other = if advance_forward { backward.weight_of(vertex_id) } else { forward.weight_of(vertex_id) };
        if let Some(other_weight) = other {
            let candidate = weight + other_weight;
            if candidate < mu {
                mu = candidate;
                meeting_vertex_id = Some(vertex_id);
            }
        }
    }

    let Some(meeting_vertex_id) = meeting_vertex_id else {
        return Err(SearchError::NoMeetingPoint);
    };

    let mut forward_chain = walk_to_root(&forward.tree, meeting_vertex_id);
    forward_chain.reverse();
    let backward_chain = walk_to_root(&backward.tree, meeting_vertex_id);

    // if the meeting vertex lies on both chains' interior (zero-weight
    // shortcuts can make this happen), the two chains may restate the
    // same boundary edge; drop the duplicate rather than traverse it
    // twice.
    if forward_chain.last().is_some() && forward_chain.last() == backward_chain.first() {
        forward_chain.pop();
    }

    let mut ch_edge_ids = forward_chain;
    ch_edge_ids.extend(backward_chain);

    let original_ch_edges = unpack_shortcuts(ch_graph, &ch_edge_ids)?;

    let mut edge_ids = Vec::with_capacity(original_ch_edges.len());
    for ch_edge_id in original_ch_edges {
        let original = ch_graph
            .original_edge_id(ch_edge_id)
            .map_err(|e| SearchError::InvariantViolation(e.to_string()))?
            .ok_or_else(|| SearchError::InvariantViolation(format!("CH edge {} has no originating geometric edge after unpacking", ch_edge_id)))?;
        edge_ids.push(original);
    }

    Ok(ChBidirectionalResult {
        meeting_vertex_id,
        weight: mu,
        edge_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ch::contract;
    use crate::model::network::EdgeProfileId;
    use crate::model::profile::EdgeAttributes;
    use crate::model::profile::ProfileDictionary;
    use crate::test_support::{line_graph, UnitCostProfile};

    fn dictionary_with_default_profile() -> ProfileDictionary {
        let mut dict = ProfileDictionary::new();
        dict.intern(EdgeAttributes::new()).unwrap();
        dict
    }

    #[test]
    fn test_ch_matches_plain_shortest_path_weight() {
        let graph = line_graph(8, 100.0, EdgeProfileId(0));
        let dict = dictionary_with_default_profile();
        let profile = UnitCostProfile;
        let ch = contract(&graph, &dict, &profile).unwrap();

        let result = run(&ch, VertexId(0), VertexId(7), &CancelToken::new()).unwrap();
        assert_eq!(result.weight, Cost::new(700.0));

        let plain = super::super::bidirectional::run(
            &graph,
            &dict,
            &profile,
            &[super::super::search_tree::FrontierEntry::new(VertexId(0), Cost::ZERO, None)],
            &[super::super::search_tree::FrontierEntry::new(VertexId(7), Cost::ZERO, None)],
            &CancelToken::new(),
        )
        .unwrap();
        assert_eq!(plain.weight, result.weight);
        assert_eq!(plain.edge_ids, result.edge_ids);
    }

    #[test]
    fn test_ch_same_source_and_target() {
        let graph = line_graph(3, 100.0, EdgeProfileId(0));
        let dict = dictionary_with_default_profile();
        let profile = UnitCostProfile;
        let ch = contract(&graph, &dict, &profile).unwrap();

        let result = run(&ch, VertexId(1), VertexId(1), &CancelToken::new()).unwrap();
        assert_eq!(result.weight, Cost::ZERO);
        assert!(result.edge_ids.is_empty());
    }
}
