use super::edge_attributes::EdgeAttributes;
use super::factor_result::FactorResult;

/// a user-supplied cost model. a search asks a profile to score every
/// candidate edge; the profile never sees
/// graph topology, only the attribute bag of the edge in question.
///
/// implementations should be cheap to call and side-effect free: a single
/// query may invoke `factor` thousands of times.
pub trait RoutingProfile: Send + Sync {
    /// a multiplier on distance plus the directions the edge may be
    /// traversed in. `value <= 0.0` marks the edge as not traversable.
    fn factor(&self, attributes: &EdgeAttributes) -> FactorResult;

    /// whether a route may start or end partway along an edge with these
    /// attributes.
    fn can_stop(&self, attributes: &EdgeAttributes) -> bool;

    /// stable name used to look the profile up by string.
    fn name(&self) -> &str;
}
