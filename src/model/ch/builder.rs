use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use ordered_float::OrderedFloat;

use super::ch_edge::CHEdge;
use super::ch_edge_data::CHEdgeData;
use super::ch_edge_id::CHEdgeId;
use super::ch_graph::CHGraph;
use crate::algorithm::SearchError;
use crate::model::network::{EdgeId, Graph, Orientation, VertexId};
use crate::model::profile::{ProfileDictionary, RoutingProfile, TraversalDirection};
use crate::model::unit::AsF64;

/// a node/hop-count bound on the local witness search: a bounded Dijkstra
/// capped by the candidate shortcut's weight and this node-count limit.
const WITNESS_SEARCH_NODE_LIMIT: usize = 50;

/// one directed arc during contraction: either an original-graph edge
/// (`orig_edge_id: Some`, `contracted_id: None`) or a shortcut
/// (`orig_edge_id: None`, `contracted_id: Some`).
#[derive(Clone, Copy, Debug)]
struct WorkingEdge {
    other: VertexId,
    weight: f64,
    orig_edge_id: Option<EdgeId>,
    contracted_id: Option<VertexId>,
}

/// build a contraction hierarchy over `graph` for `profile`: rank every
/// vertex by edge-difference, repeatedly contract the lowest-ranked live
/// vertex, and insert a shortcut wherever a witness search fails to find
/// a path around it at least as cheap.
pub fn contract(graph: &Graph, profiles: &ProfileDictionary, profile: &dyn RoutingProfile) -> Result<CHGraph, SearchError> {
    let n = graph.n_vertices();

    let mut out_adj: Vec<Vec<WorkingEdge>> = vec![Vec::new(); n];
    let mut in_adj: Vec<Vec<WorkingEdge>> = vec![Vec::new(); n];
    let mut final_edges: Vec<(VertexId, VertexId, WorkingEdge)> = Vec::new();
    let mut contracted = vec![false; n];

    for edge in graph.edges() {
        let attributes = profiles.get(edge.edge_profile_id())?;
        let factor = profile.factor(attributes);
        if !factor.is_traversable() {
            continue;
        }
        let weight = edge.distance().as_f64() * factor.value;
        for orientation in [Orientation::Forward, Orientation::Backward] {
            if !factor.direction.allows(orientation) {
                continue;
            }
            let (src, dst) = match orientation {
                Orientation::Forward => (edge.src_vertex_id, edge.dst_vertex_id),
                Orientation::Backward => (edge.dst_vertex_id, edge.src_vertex_id),
            };
            let working = WorkingEdge {
                other: dst,
                weight,
                orig_edge_id: Some(edge.edge_id),
                contracted_id: None,
            };
            out_adj[src.0].push(working);
            in_adj[dst.0].push(WorkingEdge {
                other: src,
                ..working
            });
            final_edges.push((src, dst, working));
        }
    }

    let edge_difference = |v: VertexId, out_adj: &[Vec<WorkingEdge>], in_adj: &[Vec<WorkingEdge>], contracted: &[bool]| -> i64 {
        let shortcuts = count_required_shortcuts(v, out_adj, in_adj, contracted);
        let degree = live_edges(&in_adj[v.0], contracted).count() + live_edges(&out_adj[v.0], contracted).count();
        shortcuts as i64 - degree as i64
    };

    let mut queue: BinaryHeap<(Reverse<i64>, Reverse<usize>)> = BinaryHeap::new();
    for v in 0..n {
        let priority = edge_difference(VertexId(v), &out_adj, &in_adj, &contracted);
        queue.push((Reverse(priority), Reverse(v)));
    }

    let mut levels = vec![0u32; n];
    let mut next_level = 0u32;

    while let Some((Reverse(popped_priority), Reverse(v_idx))) = queue.pop() {
        let v = VertexId(v_idx);
        if contracted[v.0] {
            continue;
        }
        let fresh_priority = edge_difference(v, &out_adj, &in_adj, &contracted);
        if fresh_priority > popped_priority {
            // lazy update: this vertex got less attractive since it was
            // queued: reinsert with its current priority instead of
            // contracting it now.
            queue.push((Reverse(fresh_priority), Reverse(v_idx)));
            continue;
        }

        let in_neighbors: Vec<WorkingEdge> = live_edges(&in_adj[v.0], &contracted).collect();
        let out_neighbors: Vec<WorkingEdge> = live_edges(&out_adj[v.0], &contracted).collect();

        for &in_edge in &in_neighbors {
            let u = in_edge.other;
            if u == v {
                continue;
            }
            for &out_edge in &out_neighbors {
                let w = out_edge.other;
                if w == v || w == u {
                    continue;
                }
                let candidate_weight = in_edge.weight + out_edge.weight;
                if witness_exists(u, w, v, candidate_weight, &out_adj, &contracted) {
                    continue;
                }
                let shortcut = WorkingEdge {
                    other: w,
                    weight: candidate_weight,
                    orig_edge_id: None,
                    contracted_id: Some(v),
                };
                out_adj[u.0].push(shortcut);
                in_adj[w.0].push(WorkingEdge { other: u, ..shortcut });
                final_edges.push((u, w, shortcut));
            }
        }

        contracted[v.0] = true;
        levels[v.0] = next_level;
        next_level += 1;
        log::trace!("contracted vertex {} at level {}", v, next_level - 1);
    }

    log::debug!("contraction complete: {} nodes contracted, {} directed edges (incl. shortcuts)", n, final_edges.len());

    let mut ch_edges = Vec::with_capacity(final_edges.len());
    let mut original_edge = Vec::with_capacity(final_edges.len());
    for (i, (src, dst, working)) in final_edges.into_iter().enumerate() {
        let ch_edge_id = CHEdgeId(i);
        let data = CHEdgeData::new(working.weight as f32, TraversalDirection::Both, working.contracted_id);
        ch_edges.push(CHEdge {
            ch_edge_id,
            src_vertex_id: src,
            dst_vertex_id: dst,
            data,
        });
        original_edge.push(working.orig_edge_id);
    }

    CHGraph::new(levels, ch_edges, original_edge).map_err(|e| SearchError::InvariantViolation(e.to_string()))
}

fn live_edges<'a>(edges: &'a [WorkingEdge], contracted: &'a [bool]) -> impl Iterator<Item = WorkingEdge> + 'a {
    edges.iter().copied().filter(move |e| !contracted[e.other.0])
}

fn count_required_shortcuts(v: VertexId, out_adj: &[Vec<WorkingEdge>], in_adj: &[Vec<WorkingEdge>], contracted: &[bool]) -> usize {
    let in_neighbors: Vec<WorkingEdge> = live_edges(&in_adj[v.0], contracted).collect();
    let out_neighbors: Vec<WorkingEdge> = live_edges(&out_adj[v.0], contracted).collect();
    let mut count = 0;
    for in_edge in &in_neighbors {
        let u = in_edge.other;
        if u == v {
            continue;
        }
        for out_edge in &out_neighbors {
            let w = out_edge.other;
            if w == v || w == u {
                continue;
            }
            let candidate_weight = in_edge.weight + out_edge.weight;
            if !witness_exists(u, w, v, candidate_weight, out_adj, contracted) {
                count += 1;
            }
        }
    }
    count
}

/// bounded local Dijkstra from `source` to `target`, skipping `exclude`,
/// checking whether a path of weight `<= max_weight` already exists
/// without the vertex about to be contracted.
fn witness_exists(
    source: VertexId,
    target: VertexId,
    exclude: VertexId,
    max_weight: f64,
    out_adj: &[Vec<WorkingEdge>],
    contracted: &[bool],
) -> bool {
    if source == target {
        return true;
    }
    let mut best: HashMap<VertexId, f64> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>> = BinaryHeap::new();
    best.insert(source, 0.0);
    heap.push(Reverse((OrderedFloat(0.0), source.0)));
    let mut settled = 0usize;

    while let Some(Reverse((OrderedFloat(weight), vertex_idx))) = heap.pop() {
        let vertex = VertexId(vertex_idx);
        if weight > *best.get(&vertex).unwrap_or(&f64::INFINITY) {
            continue;
        }
        if vertex == target {
            return weight <= max_weight + f64::EPSILON;
        }
        if weight > max_weight || settled >= WITNESS_SEARCH_NODE_LIMIT {
            continue;
        }
        settled += 1;

        for edge in live_edges(&out_adj[vertex.0], contracted) {
            if edge.other == exclude {
                continue;
            }
            let tentative = weight + edge.weight;
            if tentative > max_weight + f64::EPSILON {
                continue;
            }
            let existing = best.get(&edge.other).copied().unwrap_or(f64::INFINITY);
            if tentative < existing {
                best.insert(edge.other, tentative);
                heap.push(Reverse((OrderedFloat(tentative), edge.other.0)));
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::EdgeProfileId;
    use crate::model::profile::EdgeAttributes;
    use crate::test_support::{line_graph, UnitCostProfile};

    fn dictionary_with_default_profile() -> ProfileDictionary {
        let mut dict = ProfileDictionary::new();
        dict.intern(EdgeAttributes::new()).unwrap();
        dict
    }

    #[test]
    fn test_contract_assigns_every_vertex_a_distinct_level() {
        let graph = line_graph(6, 100.0, EdgeProfileId(0));
        let dict = dictionary_with_default_profile();
        let profile = UnitCostProfile;

        let ch = contract(&graph, &dict, &profile).unwrap();
        assert_eq!(ch.n_vertices(), 6);

        let mut seen_levels: Vec<u32> = (0..6).map(|v| ch.level(VertexId(v)).unwrap()).collect();
        seen_levels.sort_unstable();
        assert_eq!(seen_levels, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_contract_preserves_original_edges() {
        let graph = line_graph(4, 100.0, EdgeProfileId(0));
        let dict = dictionary_with_default_profile();
        let profile = UnitCostProfile;

        let ch = contract(&graph, &dict, &profile).unwrap();
        let original_edges_found = (0..ch.n_vertices())
            .flat_map(|v| ch.out_edges(VertexId(v)).unwrap().to_vec())
            .filter(|&ch_edge_id| ch.original_edge_id(ch_edge_id).unwrap().is_some())
            .count();
        // every geometric edge is bidirectional under the unit-cost
        // profile, so a line graph of 4 vertices contributes 2 directed
        // original arcs per geometric edge.
        assert_eq!(original_edges_found, graph.n_edges() * 2);
    }
}
