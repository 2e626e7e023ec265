use geo::Coord;
use thiserror::Error;

use crate::model::network::{EdgeId, Graph, NetworkError, Orientation, VertexId};
use crate::model::profile::{ProfileDictionary, ProfileError, RoutingProfile};
use crate::model::{Route, RouteSegment, RouterPoint};
use crate::model::unit::{AsF64, Cost, Distance};

#[derive(Error, Debug)]
pub enum RouteBuildError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("edges {0} and {1} do not share an endpoint")]
    NotAPath(EdgeId, EdgeId),
}

/// reconstructs a [`Route`] from origin/target [`RouterPoint`]s and the
/// unpacked sequence of original edge ids a query engine returned.
pub fn build(
    graph: &Graph,
    profiles: &ProfileDictionary,
    profile: &dyn RoutingProfile,
    origin: &RouterPoint,
    target: &RouterPoint,
    edge_ids: &[EdgeId],
) -> Result<Route, RouteBuildError> {
    if origin.same_position(target) {
        return Ok(Route::trivial(origin.coordinate));
    }

    if origin.edge_id == target.edge_id {
        if let Some(route) = same_edge_route(graph, profiles, profile, origin, target)? {
            return Ok(route);
        }
    }

    build_from_edges(graph, profiles, profile, origin, target, edge_ids)
}

/// the short-path branch for two points on the same edge, traveled in a
/// direction the profile permits: a direct partial-edge route that does
/// not invoke either query engine.
fn same_edge_route(
    graph: &Graph,
    profiles: &ProfileDictionary,
    profile: &dyn RoutingProfile,
    origin: &RouterPoint,
    target: &RouterPoint,
) -> Result<Option<Route>, RouteBuildError> {
    let edge = graph.get_edge(origin.edge_id)?;
    let attributes = profiles.get(edge.edge_profile_id())?;
    let factor = profile.factor(attributes);
    if !factor.is_traversable() {
        return Ok(None);
    }

    let required_orientation = if target.offset >= origin.offset { Orientation::Forward } else { Orientation::Backward };
    if !factor.direction.allows(required_orientation) {
        return Ok(None);
    }

    let fraction = (target.offset - origin.offset).abs();
    let distance = Distance::new(edge.distance().as_f64() * fraction);
    let time = Cost::new(distance.as_f64() * factor.value);

    Ok(Some(Route {
        shape: vec![origin.coordinate, target.coordinate],
        distance,
        time,
        segments: vec![RouteSegment {
            edge_id: origin.edge_id,
            distance,
            attributes: attributes.clone(),
        }],
    }))
}

/// the general branch: thread endpoints through the edge sequence, then
/// assemble shape, distance, time, and per-segment attributes, with the
/// first and last edges contributing only their partial distance (spec
/// section 4.6).
fn build_from_edges(
    graph: &Graph,
    profiles: &ProfileDictionary,
    profile: &dyn RoutingProfile,
    origin: &RouterPoint,
    target: &RouterPoint,
    edge_ids: &[EdgeId],
) -> Result<Route, RouteBuildError> {
    let threaded = thread_endpoints(graph, edge_ids)?;
    let last_index = threaded.len().saturating_sub(1);

    let mut shape = vec![origin.coordinate];
    let mut total_distance = Distance::ZERO;
    let mut total_time = Cost::ZERO;
    let mut segments = Vec::with_capacity(threaded.len());

    for (i, &(edge_id, entry, exit)) in threaded.iter().enumerate() {
        let edge = graph.get_edge(edge_id)?;
        let attributes = profiles.get(edge.edge_profile_id())?;
        let factor = profile.factor(attributes);
        let forward = entry == edge.src_vertex_id;
        let full = edge.distance();

        // clip this edge against whichever of origin/target it happens to
        // be (an edge can be both, in the single-edge case), defaulting to
        // its full extent in the direction traveled otherwise. determined
        // by edge identity rather than position, since a point with
        // offset 0 or 1 contributes no virtual frontier edge at all (see
        // `RouterPoint::virtual_frontier`), so the true first/last edge of
        // `edge_ids` is not always `origin.edge_id`/`target.edge_id`.
        let start_fraction = if edge_id == origin.edge_id { origin.offset } else if forward { 0.0 } else { 1.0 };
        let end_fraction = if edge_id == target.edge_id { target.offset } else if forward { 1.0 } else { 0.0 };
        let distance = Distance::new(full.as_f64() * (end_fraction - start_fraction).abs());

        total_distance = total_distance + distance;
        total_time = total_time + Cost::new(distance.as_f64() * factor.value);

        let oriented_shape: Vec<Coord<f64>> = if forward { edge.shape.to_vec() } else { edge.shape.iter().rev().copied().collect() };
        shape.extend(oriented_shape);
        if i != last_index {
            shape.push(graph.get_vertex(exit)?.coordinate);
        }

        segments.push(RouteSegment {
            edge_id,
            distance,
            attributes: attributes.clone(),
        });
    }
    shape.push(target.coordinate);

    Ok(Route {
        shape,
        distance: total_distance,
        time: total_time,
        segments,
    })
}

/// determine each edge's entry/exit vertex by threading the shared
/// endpoint between consecutive edges. fails with
/// [`RouteBuildError::NotAPath`] when two consecutive edges share no
/// endpoint.
fn thread_endpoints(graph: &Graph, edge_ids: &[EdgeId]) -> Result<Vec<(EdgeId, VertexId, VertexId)>, RouteBuildError> {
    if edge_ids.is_empty() {
        return Ok(Vec::new());
    }
    if edge_ids.len() == 1 {
        let (src, dst) = graph.edge_endpoints(edge_ids[0])?;
        return Ok(vec![(edge_ids[0], src, dst)]);
    }

    let (a0, b0) = graph.edge_endpoints(edge_ids[0])?;
    let (a1, b1) = graph.edge_endpoints(edge_ids[1])?;
    let shared = shared_endpoint(a0, b0, a1, b1).ok_or(RouteBuildError::NotAPath(edge_ids[0], edge_ids[1]))?;
    let entry0 = if shared == a0 { b0 } else { a0 };

    let mut result = Vec::with_capacity(edge_ids.len());
    result.push((edge_ids[0], entry0, shared));

    let mut prev_exit = shared;
    let mut prev_edge_id = edge_ids[0];
    for &edge_id in &edge_ids[1..] {
        let (a, b) = graph.edge_endpoints(edge_id)?;
        let exit = if prev_exit == a {
            b
        } else if prev_exit == b {
            a
        } else {
            return Err(RouteBuildError::NotAPath(prev_edge_id, edge_id));
        };
        result.push((edge_id, prev_exit, exit));
        prev_exit = exit;
        prev_edge_id = edge_id;
    }
    Ok(result)
}

fn shared_endpoint(a0: VertexId, b0: VertexId, a1: VertexId, b1: VertexId) -> Option<VertexId> {
    if a0 == a1 || a0 == b1 {
        Some(a0)
    } else if b0 == a1 || b0 == b1 {
        Some(b0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::EdgeProfileId;
    use crate::model::profile::EdgeAttributes;
    use crate::test_support::{line_graph, UnitCostProfile};
    use approx::assert_relative_eq;
    use geo::coord;

    fn dictionary_with_default_profile() -> ProfileDictionary {
        let mut dict = ProfileDictionary::new();
        dict.intern(EdgeAttributes::new()).unwrap();
        dict
    }

    #[test]
    fn test_source_equals_target_yields_trivial_route() {
        let graph = line_graph(3, 100.0, EdgeProfileId(0));
        let dict = dictionary_with_default_profile();
        let profile = UnitCostProfile;

        let point = RouterPoint::new(EdgeId(0), 0.5, coord! { x: 0.005, y: 0.0 }).unwrap();
        let route = build(&graph, &dict, &profile, &point, &point, &[]).unwrap();

        assert_eq!(route.shape.len(), 1);
        assert_eq!(route.distance, Distance::ZERO);
        assert!(route.segments.is_empty());
    }

    #[test]
    fn test_same_edge_short_path() {
        let graph = line_graph(2, 100.0, EdgeProfileId(0));
        let dict = dictionary_with_default_profile();
        let profile = UnitCostProfile;

        let origin = RouterPoint::new(EdgeId(0), 0.2, coord! { x: 0.002, y: 0.0 }).unwrap();
        let target = RouterPoint::new(EdgeId(0), 0.8, coord! { x: 0.008, y: 0.0 }).unwrap();

        let route = build(&graph, &dict, &profile, &origin, &target, &[EdgeId(0), EdgeId(0)]).unwrap();
        assert_relative_eq!(route.distance.as_f64(), 60.0, epsilon = 1e-6);
        assert_eq!(route.segments.len(), 1);
    }

    #[test]
    fn test_multi_edge_route_distance_and_shape() {
        let graph = line_graph(4, 100.0, EdgeProfileId(0));
        let dict = dictionary_with_default_profile();
        let profile = UnitCostProfile;

        let origin = RouterPoint::new(EdgeId(0), 0.5, coord! { x: 0.005, y: 0.0 }).unwrap();
        let target = RouterPoint::new(EdgeId(2), 0.5, coord! { x: 0.025, y: 0.0 }).unwrap();

        let edge_ids = [EdgeId(0), EdgeId(1), EdgeId(2)];
        let route = build(&graph, &dict, &profile, &origin, &target, &edge_ids).unwrap();

        // half of edge 0, all of edge 1, half of edge 2
        assert_relative_eq!(route.distance.as_f64(), 50.0 + 100.0 + 50.0, epsilon = 1e-6);
        assert_eq!(route.segments.len(), 3);
        assert_eq!(route.shape.first().copied().unwrap(), origin.coordinate);
        assert_eq!(route.shape.last().copied().unwrap(), target.coordinate);
    }

    #[test]
    fn test_non_adjacent_edges_fail_as_not_a_path() {
        let graph = line_graph(6, 100.0, EdgeProfileId(0));
        let dict = dictionary_with_default_profile();
        let profile = UnitCostProfile;

        let origin = RouterPoint::new(EdgeId(0), 0.0, coord! { x: 0.0, y: 0.0 }).unwrap();
        let target = RouterPoint::new(EdgeId(4), 1.0, coord! { x: 0.05, y: 0.0 }).unwrap();

        // edges 0 and 3 are not adjacent in this line graph (edge 1, 2 are
        // missing from the path), so threading must fail.
        let edge_ids = [EdgeId(0), EdgeId(3), EdgeId(4)];
        let result = build(&graph, &dict, &profile, &origin, &target, &edge_ids);
        assert!(matches!(result, Err(RouteBuildError::NotAPath(_, _))));
    }

    #[test]
    fn test_boundary_offsets_contribute_full_edge_distance() {
        // origin sits exactly on edge 0's src vertex and target exactly on
        // edge 1's dst vertex, so the search never actually needed either
        // edge as a partial one; both are consumed in full.
        let graph = line_graph(3, 100.0, EdgeProfileId(0));
        let dict = dictionary_with_default_profile();
        let profile = UnitCostProfile;

        let origin = RouterPoint::new(EdgeId(0), 0.0, coord! { x: 0.0, y: 0.0 }).unwrap();
        let target = RouterPoint::new(EdgeId(1), 1.0, coord! { x: 0.02, y: 0.0 }).unwrap();

        let edge_ids = [EdgeId(0), EdgeId(1)];
        let route = build(&graph, &dict, &profile, &origin, &target, &edge_ids).unwrap();
        assert_relative_eq!(route.distance.as_f64(), 200.0, epsilon = 1e-6);
    }
}
