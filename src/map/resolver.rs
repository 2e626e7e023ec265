use geo::Coord;

use super::resolve_error::ResolveError;
use super::spatial_index::SpatialIndex;
use crate::model::network::{Edge, EdgeId, Graph};
use crate::model::profile::{ProfileDictionary, RoutingProfile};
use crate::model::RouterPoint;
use crate::model::unit::{AsF64, Distance};
use crate::util::geo::project_point_onto_polyline;

/// per-call resolver tuning and the traversability predicate it enforces.
pub struct ResolveOptions<'a> {
    pub profiles: &'a [&'a dyn RoutingProfile],
    pub verify_all_stoppable: bool,
    pub search_offset_degrees: f64,
    pub max_distance_meters: f64,
}

/// finds a [`RouterPoint`] nearest to a coordinate, subject to a
/// traversability predicate. the default implementation is
/// [`DefaultResolver`]; [`super::super::router::ResolverKind::Custom`]
/// allows a caller-supplied implementation to replace it entirely.
pub trait Resolver: Send + Sync {
    fn resolve(
        &self,
        graph: &Graph,
        profiles: &ProfileDictionary,
        lon: f64,
        lat: f64,
        options: &ResolveOptions,
    ) -> Result<RouterPoint, ResolveError>;
}

/// the nearest-traversable-edge resolver: a spatial-index window query
/// over candidate edges, a traversability filter, and a
/// closest-projection tiebreak.
pub struct DefaultResolver {
    index: SpatialIndex,
}

impl DefaultResolver {
    pub fn build(graph: &Graph) -> Self {
        Self { index: SpatialIndex::build(graph) }
    }
}

impl Resolver for DefaultResolver {
    fn resolve(
        &self,
        graph: &Graph,
        profiles: &ProfileDictionary,
        lon: f64,
        lat: f64,
        options: &ResolveOptions,
    ) -> Result<RouterPoint, ResolveError> {
        let query = Coord { x: lon, y: lat };
        let candidates = self.index.candidates(lon, lat, options.search_offset_degrees);

        let mut best: Option<(EdgeId, Coord<f64>, f64, Distance)> = None;
        for edge_id in candidates {
            let edge = graph.get_edge(edge_id)?;
            if !edge_qualifies(edge, profiles, options)? {
                continue;
            }

            let src = graph.get_vertex(edge.src_vertex_id)?;
            let dst = graph.get_vertex(edge.dst_vertex_id)?;
            let (projected, offset, distance) = project_point_onto_polyline(query, src.coordinate, &edge.shape, dst.coordinate);
            if distance.as_f64() > options.max_distance_meters {
                continue;
            }

            let is_better = match &best {
                None => true,
                Some((best_edge_id, _, _, best_distance)) => distance < *best_distance || (distance == *best_distance && edge_id.as_usize() < best_edge_id.as_usize()),
            };
            if is_better {
                best = Some((edge_id, projected, offset, distance));
            }
        }

        let (edge_id, projected, offset, _) = best.ok_or(ResolveError::ResolveFailed {
            lon,
            lat,
            max_distance_meters: options.max_distance_meters,
        })?;
        Ok(RouterPoint::new(edge_id, offset, projected)?)
    }
}

fn edge_qualifies(edge: &Edge, profiles: &ProfileDictionary, options: &ResolveOptions) -> Result<bool, ResolveError> {
    let attributes = profiles.get(edge.edge_profile_id())?;
    for profile in options.profiles {
        let factor = profile.factor(attributes);
        if factor.value <= 0.0 {
            return Ok(false);
        }
        if options.verify_all_stoppable && !profile.can_stop(attributes) {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::EdgeProfileId;
    use crate::model::profile::EdgeAttributes;
    use crate::test_support::{grid_graph, line_graph, UnitCostProfile};

    fn dictionary_with_default_profile() -> ProfileDictionary {
        let mut dict = ProfileDictionary::new();
        dict.intern(EdgeAttributes::new()).unwrap();
        dict
    }

    fn default_options<'a>(profiles: &'a [&'a dyn RoutingProfile]) -> ResolveOptions<'a> {
        ResolveOptions {
            profiles,
            verify_all_stoppable: false,
            search_offset_degrees: 0.01,
            max_distance_meters: 50.0,
        }
    }

    #[test]
    fn test_resolves_point_on_nearest_edge() {
        let graph = grid_graph(2, 2, 1000.0, EdgeProfileId(0));
        let dict = dictionary_with_default_profile();
        let resolver = DefaultResolver::build(&graph);
        let profile = UnitCostProfile;
        let profiles: Vec<&dyn RoutingProfile> = vec![&profile];
        let options = default_options(&profiles);

        // just off the edge between vertex 0 (0,0) and vertex 1 (0.01, 0)
        let point = resolver.resolve(&graph, &dict, 0.004, 0.0001, &options).unwrap();
        assert_eq!(point.edge_id, EdgeId(0));
        assert!((0.0..=1.0).contains(&point.offset));
    }

    #[test]
    fn test_resolve_fails_outside_max_distance() {
        let graph = line_graph(3, 100.0, EdgeProfileId(0));
        let dict = dictionary_with_default_profile();
        let resolver = DefaultResolver::build(&graph);
        let profile = UnitCostProfile;
        let profiles: Vec<&dyn RoutingProfile> = vec![&profile];
        let mut options = default_options(&profiles);
        options.max_distance_meters = 1.0;

        let result = resolver.resolve(&graph, &dict, 0.01, 5.0, &options);
        assert!(matches!(result, Err(ResolveError::ResolveFailed { .. })));
    }

    /// traversable everywhere but forbids stopping on edges tagged
    /// `"no_stop" = "yes"`, to exercise `VerifyAllStoppable` independently
    /// of traversability.
    struct NoStopOnTaggedProfile;

    impl RoutingProfile for NoStopOnTaggedProfile {
        fn factor(&self, _attributes: &EdgeAttributes) -> crate::model::profile::FactorResult {
            crate::model::profile::FactorResult::new(1.0, crate::model::profile::TraversalDirection::Both)
        }

        fn can_stop(&self, attributes: &EdgeAttributes) -> bool {
            attributes.get("no_stop") != Some("yes")
        }

        fn name(&self) -> &str {
            "no_stop_on_tagged"
        }
    }

    #[test]
    fn test_resolve_skips_non_stoppable_edge_when_verify_all_stoppable() {
        let mut no_stop_attrs = EdgeAttributes::new();
        no_stop_attrs.insert("no_stop", "yes");
        let mut dict = ProfileDictionary::new();
        let no_stop_id = dict.intern(no_stop_attrs).unwrap();
        let default_id = dict.intern(EdgeAttributes::new()).unwrap();

        let vertices = vec![
            crate::model::network::Vertex::new(0, 0.0, 0.0),
            crate::model::network::Vertex::new(1, 0.01, 0.0),
            crate::model::network::Vertex::new(2, 0.02, 0.0),
        ];
        let edges = vec![
            crate::model::network::Edge::new(0, 0, 1, 100.0, no_stop_id, vec![]),
            crate::model::network::Edge::new(1, 1, 2, 100.0, default_id, vec![]),
        ];
        let graph = Graph::new(vertices, edges).unwrap();
        let resolver = DefaultResolver::build(&graph);
        let profile = NoStopOnTaggedProfile;
        let profiles: Vec<&dyn RoutingProfile> = vec![&profile];
        let mut options = default_options(&profiles);
        options.verify_all_stoppable = true;

        let point = resolver.resolve(&graph, &dict, 0.005, 0.0001, &options).unwrap();
        assert_eq!(point.edge_id, EdgeId(1));
    }
}
