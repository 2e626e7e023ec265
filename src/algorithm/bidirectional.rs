use super::half_search::HalfSearch;
use super::search_error::SearchError;
use super::search_tree::{unpack_backward_chain, unpack_edge_ids};
use super::termination::CancelToken;
use super::SearchDirection;
use crate::model::network::{EdgeId, Graph, VertexId};
use crate::model::profile::RoutingProfile;
use crate::model::profile::ProfileDictionary;
use crate::model::unit::Cost;

use super::search_tree::FrontierEntry;

/// the result of a bidirectional Dijkstra: the meeting vertex, the total
/// weight of the shortest path through it, and the original edge ids from
/// the source frontier to the target frontier, in traversal order.
pub struct BidirectionalResult {
    pub meeting_vertex_id: VertexId,
    pub weight: Cost,
    pub edge_ids: Vec<EdgeId>,
}

/// plain bidirectional Dijkstra: a forward search from `source_frontier`
/// and a backward search from `target_frontier`,
/// interleaved by whichever side has the smaller current minimum,
/// tracking the best known meeting weight `mu` until both sides' minimums
/// sum to at least `mu`.
pub fn run(
    graph: &Graph,
    profiles: &ProfileDictionary,
    profile: &dyn RoutingProfile,
    source_frontier: &[FrontierEntry],
    target_frontier: &[FrontierEntry],
    cancel: &CancelToken,
) -> Result<BidirectionalResult, SearchError> {
    let mut forward = HalfSearch::new(source_frontier);
    let mut backward = HalfSearch::new(target_frontier);

    let mut mu = Cost::INFINITY;
    let mut meeting_vertex_id: Option<VertexId> = None;

    loop {
        let forward_min = forward.current_min();
        let backward_min = backward.current_min();

        match (forward_min, backward_min) {
            (None, None) => break,
            _ => {}
        }
        let bound = forward_min.unwrap_or(Cost::INFINITY) + backward_min.unwrap_or(Cost::INFINITY);
        if bound >= mu {
            break;
        }

        // advance whichever side currently has the smaller minimum weight.
        let advance_forward = match (forward_min, backward_min) {
            (Some(f), Some(b)) => f <= b,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        let settled = if advance_forward {
            forward.step(graph, profiles, profile, SearchDirection::Forward, cancel)?
        } else {
            backward.step(graph, profiles, profile, SearchDirection::Backward, cancel)?
        };

        let Some((vertex_id, weight)) = settled else {
            continue;
        };

        let other_weight = if advance_forward {
            backward.weight_of(vertex_id)
        } else {
            forward.weight_of(vertex_id)
        };
        if let Some(other) = other_weight {
            let candidate = weight + other;
            if candidate < mu {
                mu = candidate;
                meeting_vertex_id = Some(vertex_id);
            }
        }
    }

    let Some(meeting_vertex_id) = meeting_vertex_id else {
        return Err(SearchError::NoMeetingPoint);
    };

    let mut edge_ids = unpack_edge_ids(forward.tree(), meeting_vertex_id);
    edge_ids.extend(unpack_backward_chain(backward.tree(), meeting_vertex_id));

    Ok(BidirectionalResult {
        meeting_vertex_id,
        weight: mu,
        edge_ids,
    })
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
    fn test_finds_shortest_path_on_line_graph() {
        let graph = line_graph(6, 100.0, EdgeProfileId(0));
        let dict = dictionary_with_default_profile();
        let profile = UnitCostProfile;

        let source = [FrontierEntry::new(VertexId(0), Cost::ZERO, None)];
        let target = [FrontierEntry::new(VertexId(5), Cost::ZERO, None)];

        let result = run(&graph, &dict, &profile, &source, &target, &CancelToken::new()).unwrap();
        assert_eq!(result.weight, Cost::new(500.0));
        assert_eq!(result.edge_ids.len(), 5);
        assert_eq!(
            result.edge_ids,
            vec![EdgeId(0), EdgeId(1), EdgeId(2), EdgeId(3), EdgeId(4)]
        );
    }

    #[test]
    fn test_same_source_and_target_meets_immediately() {
        let graph = line_graph(3, 100.0, EdgeProfileId(0));
        let dict = dictionary_with_default_profile();
        let profile = UnitCostProfile;

        let source = [FrontierEntry::new(VertexId(1), Cost::ZERO, None)];
        let target = [FrontierEntry::new(VertexId(1), Cost::ZERO, None)];

        let result = run(&graph, &dict, &profile, &source, &target, &CancelToken::new()).unwrap();
        assert_eq!(result.weight, Cost::ZERO);
        assert!(result.edge_ids.is_empty());
    }

    #[test]
    fn test_unreachable_target_errors() {
        let vertices = vec![
            crate::model::network::Vertex::new(0, 0.0, 0.0),
            crate::model::network::Vertex::new(1, 1.0, 0.0),
        ];
        let graph = Graph::new(vertices, vec![]).unwrap();
        let dict = dictionary_with_default_profile();
        let profile = UnitCostProfile;

        let source = [FrontierEntry::new(VertexId(0), Cost::ZERO, None)];
        let target = [FrontierEntry::new(VertexId(1), Cost::ZERO, None)];

        let result = run(&graph, &dict, &profile, &source, &target, &CancelToken::new());
        assert!(matches!(result, Err(SearchError::NoMeetingPoint)));
    }
}
