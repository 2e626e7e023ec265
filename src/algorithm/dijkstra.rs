use super::direction::SearchDirection;
use super::half_search::HalfSearch;
use super::search_error::SearchError;
use super::search_tree::{FrontierEntry, SearchTree};
use super::termination::{CancelToken, SearchTermination};
use crate::model::network::Graph;
use crate::model::profile::{ProfileDictionary, RoutingProfile};
use crate::model::unit::Cost;

/// single-source Dijkstra over a directed view of the geometric graph.
/// settles vertices in nondecreasing weight order from an initial
/// frontier, under the direction and profile given, stopping when the
/// queue empties or the next weight would exceed `max_weight`.
pub fn run(
    graph: &Graph,
    profiles: &ProfileDictionary,
    profile: &dyn RoutingProfile,
    direction: SearchDirection,
    frontier: &[FrontierEntry],
    max_weight: Cost,
    cancel: &CancelToken,
) -> Result<(SearchTree, SearchTermination), SearchError> {
    let mut search = HalfSearch::new(frontier);
    let mut termination = SearchTermination::default();

    loop {
        match search.current_min() {
            None => break,
            Some(weight) if weight > max_weight => {
                termination.max_reached = true;
                termination.max_weight_seen = weight;
                break;
            }
            _ => {}
        }
        if search.step(graph, profiles, profile, direction, cancel)?.is_none() {
            break;
        }
    }

    Ok((search.into_tree(), termination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::{EdgeProfileId, VertexId};
    use crate::model::profile::EdgeAttributes;
    use crate::test_support::{line_graph, UnitCostProfile};

    fn dictionary_with_default_profile() -> ProfileDictionary {
        let mut dict = ProfileDictionary::new();
        dict.intern(EdgeAttributes::new()).unwrap();
        dict
    }

    #[test]
    fn test_settles_in_nondecreasing_order() {
        let graph = line_graph(4, 100.0, EdgeProfileId(0));
        let dict = dictionary_with_default_profile();
        let profile = UnitCostProfile;
        let frontier = [FrontierEntry::new(VertexId(0), Cost::ZERO, None)];

        let (tree, termination) = run(
            &graph,
            &dict,
            &profile,
            SearchDirection::Forward,
            &frontier,
            Cost::INFINITY,
            &CancelToken::new(),
        )
        .unwrap();

        assert!(!termination.max_reached);
        assert_eq!(tree.get(&VertexId(3)).unwrap().cumulative_weight, Cost::new(300.0));
        assert_eq!(tree.get(&VertexId(1)).unwrap().cumulative_weight, Cost::new(100.0));
    }

    #[test]
    fn test_max_weight_stops_search() {
        let graph = line_graph(10, 100.0, EdgeProfileId(0));
        let dict = dictionary_with_default_profile();
        let profile = UnitCostProfile;
        let frontier = [FrontierEntry::new(VertexId(0), Cost::ZERO, None)];

        let (tree, termination) = run(
            &graph,
            &dict,
            &profile,
            SearchDirection::Forward,
            &frontier,
            Cost::new(250.0),
            &CancelToken::new(),
        )
        .unwrap();

        assert!(termination.max_reached);
        assert!(tree.contains_key(&VertexId(2)));
        assert!(!tree.contains_key(&VertexId(9)));
    }

    #[test]
    fn test_cancel_token_stops_search() {
        let graph = line_graph(5, 100.0, EdgeProfileId(0));
        let dict = dictionary_with_default_profile();
        let profile = UnitCostProfile;
        let frontier = [FrontierEntry::new(VertexId(0), Cost::ZERO, None)];
        let cancel = CancelToken::new();
        cancel.cancel();

        let result = run(
            &graph,
            &dict,
            &profile,
            SearchDirection::Forward,
            &frontier,
            Cost::INFINITY,
            &cancel,
        );
        assert!(matches!(result, Err(SearchError::Canceled)));
    }
}
