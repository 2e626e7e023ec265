use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use itertools::iproduct;
use rayon::prelude::*;

use crate::algorithm::{run_bidirectional, run_ch_bidirectional, run_dijkstra, CancelToken, FrontierEntry, SearchDirection};
use crate::config::RouterOptions;
use crate::error::RouterError;
use crate::map::{DefaultResolver, ResolveOptions, Resolver};
use crate::model::ch::{contract, CHGraph};
use crate::model::network::Graph;
use crate::model::profile::{ProfileDictionary, RoutingProfile};
use crate::model::{Route, RouterPoint};
use crate::model::unit::Cost;
use crate::model::unit::AsF64;
use crate::route_builder;

/// how a [`Router`] resolves coordinates to [`RouterPoint`]s: the built-in
/// nearest-traversable-edge resolver, or a caller-supplied implementation,
/// chosen once at router construction rather than per query.
pub enum ResolverKind {
    Default(Arc<DefaultResolver>),
    Custom(Arc<dyn Resolver>),
}

impl ResolverKind {
    pub fn default_for(graph: &Graph) -> Self {
        ResolverKind::Default(Arc::new(DefaultResolver::build(graph)))
    }

    fn as_resolver(&self) -> &dyn Resolver {
        match self {
            ResolverKind::Default(resolver) => resolver.as_ref(),
            ResolverKind::Custom(resolver) => resolver.as_ref(),
        }
    }
}

/// the top-level façade over the graph, profile registry, and CH registry.
/// shared read-only state is held behind `Arc`; the CH registry is the one
/// piece of graph-level mutable state, guarded by an `RwLock` so that
/// adding a CH for a new named profile never overlaps any in-flight query.
pub struct Router {
    graph: Arc<Graph>,
    profile_dictionary: Arc<ProfileDictionary>,
    profiles: HashMap<String, Arc<dyn RoutingProfile>>,
    ch_graphs: RwLock<HashMap<String, Arc<CHGraph>>>,
    resolver: ResolverKind,
}

impl Router {
    pub fn new(
        graph: Arc<Graph>,
        profile_dictionary: Arc<ProfileDictionary>,
        profiles: Vec<(String, Arc<dyn RoutingProfile>)>,
        resolver: ResolverKind,
    ) -> Self {
        Self {
            graph,
            profile_dictionary,
            profiles: profiles.into_iter().collect(),
            ch_graphs: RwLock::new(HashMap::new()),
            resolver,
        }
    }

    fn profile(&self, name: &str) -> Result<Arc<dyn RoutingProfile>, RouterError> {
        self.profiles.get(name).cloned().ok_or_else(|| RouterError::ProfileUnsupported(name.to_string()))
    }

    /// contract a CH for `profile_name` and register it, replacing any
    /// prior CH under the same name. an exclusive operation: callers must
    /// not call this concurrently with another `build_ch` for the same
    /// router, though in-flight queries reading the previous CH (or no CH)
    /// are unaffected until this returns.
    pub fn build_ch(&self, profile_name: &str) -> Result<(), RouterError> {
        let profile = self.profile(profile_name)?;
        let ch_graph = contract(&self.graph, &self.profile_dictionary, profile.as_ref())?;
        let mut registry = self.ch_graphs.write().expect("CH registry lock poisoned");
        registry.insert(profile_name.to_string(), Arc::new(ch_graph));
        Ok(())
    }

    /// resolve a `(lon, lat)` coordinate to the nearest point on the
    /// network traversable by at least one of `profile_names`.
    pub fn try_resolve(&self, profile_names: &[&str], lon: f64, lat: f64, options: &RouterOptions) -> Result<RouterPoint, RouterError> {
        let resolved: Vec<Arc<dyn RoutingProfile>> = profile_names.iter().map(|name| self.profile(name)).collect::<Result<_, _>>()?;
        let profile_refs: Vec<&dyn RoutingProfile> = resolved.iter().map(|p| p.as_ref()).collect();
        let resolve_options = ResolveOptions {
            profiles: &profile_refs,
            verify_all_stoppable: options.verify_all_stoppable,
            search_offset_degrees: options.search_offset_degrees,
            max_distance_meters: options.max_distance_meters,
        };
        Ok(self.resolver.as_resolver().resolve(&self.graph, &self.profile_dictionary, lon, lat, &resolve_options)?)
    }

    /// whether the network reachable from `point` extends at least
    /// `radius_weight` out: runs a forward search bounded by
    /// `radius_weight` and reports whether the bound was hit before the
    /// frontier ran out on its own.
    pub fn try_check_connectivity(&self, profile_name: &str, point: &RouterPoint, radius_weight: Cost) -> Result<bool, RouterError> {
        let profile = self.profile(profile_name)?;
        let frontier = point.head_frontier(&self.graph, &self.profile_dictionary, profile.as_ref())?;
        let (_, termination) = run_dijkstra(
            &self.graph,
            &self.profile_dictionary,
            profile.as_ref(),
            SearchDirection::Forward,
            &frontier,
            radius_weight,
            &CancelToken::new(),
        )?;
        Ok(termination.max_reached)
    }

    /// compute the cheapest route from `source` to `target` under
    /// `profile_name`, using a registered CH if one exists for that
    /// profile, falling back to a plain bidirectional search otherwise.
    pub fn try_calculate(&self, profile_name: &str, source: &RouterPoint, target: &RouterPoint) -> Result<Route, RouterError> {
        self.try_calculate_with_cancel(profile_name, source, target, &CancelToken::new())
    }

    pub fn try_calculate_with_cancel(
        &self,
        profile_name: &str,
        source: &RouterPoint,
        target: &RouterPoint,
        cancel: &CancelToken,
    ) -> Result<Route, RouterError> {
        let profile = self.profile(profile_name)?;
        let ch_graph = self.ch_graphs.read().expect("CH registry lock poisoned").get(profile_name).cloned();

        let edge_ids = match ch_graph {
            Some(ch_graph) => self.calculate_ch(&ch_graph, profile.as_ref(), source, target, cancel)?,
            None => self.calculate_plain(profile.as_ref(), source, target, cancel)?,
        };

        route_builder::build(&self.graph, &self.profile_dictionary, profile.as_ref(), source, target, &edge_ids).map_err(RouterError::from)
    }

    fn calculate_plain(
        &self,
        profile: &dyn RoutingProfile,
        source: &RouterPoint,
        target: &RouterPoint,
        cancel: &CancelToken,
    ) -> Result<Vec<crate::model::network::EdgeId>, RouterError> {
        let source_frontier = source.head_frontier(&self.graph, &self.profile_dictionary, profile)?;
        let target_frontier = target.tail_frontier(&self.graph, &self.profile_dictionary, profile)?;
        let result = run_bidirectional(&self.graph, &self.profile_dictionary, profile, &source_frontier, &target_frontier, cancel)?;
        Ok(result.edge_ids)
    }

    /// [`run_ch_bidirectional`] is vertex-to-vertex only, so a
    /// [`RouterPoint`]'s (at most two) head-frontier candidates are each
    /// tried against its (at most two) tail-frontier counterparts; the
    /// cheapest combination wins.
    fn calculate_ch(
        &self,
        ch_graph: &CHGraph,
        profile: &dyn RoutingProfile,
        source: &RouterPoint,
        target: &RouterPoint,
        cancel: &CancelToken,
    ) -> Result<Vec<crate::model::network::EdgeId>, RouterError> {
        let source_frontier = source.head_frontier(&self.graph, &self.profile_dictionary, profile)?;
        let target_frontier = target.tail_frontier(&self.graph, &self.profile_dictionary, profile)?;

        let mut best: Option<(Cost, Vec<crate::model::network::EdgeId>)> = None;
        for source_entry in &source_frontier {
            for target_entry in &target_frontier {
                let result = match run_ch_bidirectional(ch_graph, source_entry.vertex_id, target_entry.vertex_id, cancel) {
                    Ok(result) => result,
                    Err(crate::algorithm::SearchError::NoMeetingPoint) => continue,
                    Err(e) => return Err(e.into()),
                };
                let total_weight = source_entry.weight + result.weight + target_entry.weight;
                let is_better = match &best {
                    None => true,
                    Some((w, _)) => total_weight < *w,
                };
                if is_better {
                    let mut edge_ids = Vec::with_capacity(result.edge_ids.len() + 2);
                    edge_ids.extend(source_entry.predecessor_edge);
                    edge_ids.extend(result.edge_ids);
                    edge_ids.extend(target_entry.predecessor_edge);
                    best = Some((total_weight, edge_ids));
                }
            }
        }

        best.map(|(_, edges)| edges).ok_or(RouterError::RouteNotFound)
    }

    /// compute every (source, target) pair's route independently, fanned
    /// out with `rayon`. returns a full `sources.len()` by `targets.len()`
    /// matrix; one pair's failure does not affect any other's result.
    pub fn try_calculate_many(&self, profile_name: &str, sources: &[RouterPoint], targets: &[RouterPoint]) -> Vec<Vec<Result<Route, RouterError>>> {
        let pairs: Vec<(usize, usize)> = iproduct!(0..sources.len(), 0..targets.len()).collect();
        let results: Vec<((usize, usize), Result<Route, RouterError>)> = pairs
            .into_par_iter()
            .map(|(i, j)| ((i, j), self.try_calculate(profile_name, &sources[i], &targets[j])))
            .collect();

        let mut matrix: Vec<Vec<Option<Result<Route, RouterError>>>> = (0..sources.len()).map(|_| (0..targets.len()).map(|_| None).collect()).collect();
        for ((i, j), result) in results {
            matrix[i][j] = Some(result);
        }
        matrix
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.expect("every (source, target) pair is populated exactly once")).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::EdgeProfileId;
    use crate::model::profile::EdgeAttributes;
    use crate::test_support::{grid_graph, line_graph, UnitCostProfile};
    use geo::coord;

    fn router_with_profile(graph: Graph) -> Router {
        let mut dict = ProfileDictionary::new();
        dict.intern(EdgeAttributes::new()).unwrap();
        let dict = Arc::new(dict);
        let graph = Arc::new(graph);
        let resolver = ResolverKind::default_for(&graph);
        let profiles: Vec<(String, Arc<dyn RoutingProfile>)> = vec![("unit".to_string(), Arc::new(UnitCostProfile))];
        Router::new(graph, dict, profiles, resolver)
    }

    #[test]
    fn test_unknown_profile_name_is_rejected() {
        let graph = line_graph(3, 100.0, EdgeProfileId(0));
        let router = router_with_profile(graph);
        let point = RouterPoint::new(crate::model::network::EdgeId(0), 0.0, coord! { x: 0.0, y: 0.0 }).unwrap();
        let result = router.try_calculate("missing", &point, &point);
        assert!(matches!(result, Err(RouterError::ProfileUnsupported(name)) if name == "missing"));
    }

    #[test]
    fn test_ch_and_plain_agree_on_grid_graph() {
        // a 2x2 grid of vertices (4 vertices), corner-to-corner.
        let graph = grid_graph(2, 2, 1.0, EdgeProfileId(0));
        let router = router_with_profile(graph);
        router.build_ch("unit").unwrap();

        let source = RouterPoint::new(crate::model::network::EdgeId(0), 0.0, coord! { x: 0.0, y: 0.0 }).unwrap();
        let target_edge = crate::model::network::EdgeId(router.graph.n_edges() as usize - 1);
        let target = RouterPoint::new(target_edge, 1.0, coord! { x: 0.0, y: 0.0 }).unwrap();

        let ch_route = router.try_calculate("unit", &source, &target).unwrap();

        // recompute without a CH registered, on an identical but separate router.
        let graph2 = grid_graph(2, 2, 1.0, EdgeProfileId(0));
        let plain_router = router_with_profile(graph2);
        let plain_route = plain_router.try_calculate("unit", &source, &target).unwrap();

        assert_eq!(ch_route.distance, plain_route.distance);
    }

    #[test]
    fn test_check_connectivity_reports_max_reached() {
        let graph = line_graph(10, 100.0, EdgeProfileId(0));
        let router = router_with_profile(graph);
        let point = RouterPoint::new(crate::model::network::EdgeId(0), 0.0, coord! { x: 0.0, y: 0.0 }).unwrap();

        let far = router.try_check_connectivity("unit", &point, Cost::new(50.0)).unwrap();
        assert!(far);
        let near = router.try_check_connectivity("unit", &point, Cost::new(10_000.0)).unwrap();
        assert!(!near);
    }

    #[test]
    fn test_resolve_then_calculate_round_trip() {
        let graph = grid_graph(3, 3, 100.0, EdgeProfileId(0));
        let router = router_with_profile(graph);

        let options = RouterOptions::default();
        let source = router.try_resolve(&["unit"], 0.0005, 0.0, &options).unwrap();
        let target = router.try_resolve(&["unit"], 0.0005, 0.002, &options).unwrap();

        let route = router.try_calculate("unit", &source, &target).unwrap();
        assert!(route.distance.as_f64() > 0.0);
    }

    #[test]
    fn test_calculate_many_produces_full_matrix() {
        let graph = grid_graph(3, 3, 100.0, EdgeProfileId(0));
        let router = router_with_profile(graph);

        let p = |edge_id: usize, offset: f64| RouterPoint::new(crate::model::network::EdgeId(edge_id), offset, coord! { x: 0.0, y: 0.0 }).unwrap();
        let sources = vec![p(0, 0.0), p(1, 0.0)];
        let targets = vec![p(2, 1.0), p(3, 1.0), p(4, 1.0)];

        let matrix = router.try_calculate_many("unit", &sources, &targets);
        assert_eq!(matrix.len(), sources.len());
        for row in &matrix {
            assert_eq!(row.len(), targets.len());
        }
    }
}
