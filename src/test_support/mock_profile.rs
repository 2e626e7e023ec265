use crate::model::profile::{EdgeAttributes, FactorResult, RoutingProfile, TraversalDirection};

/// a profile that accepts every edge with factor 1.0 (weight == distance)
/// and allows stopping anywhere, for tests that only care about graph
/// topology.
pub struct UnitCostProfile;

impl RoutingProfile for UnitCostProfile {
    fn factor(&self, _attributes: &EdgeAttributes) -> FactorResult {
        FactorResult::new(1.0, TraversalDirection::Both)
    }

    fn can_stop(&self, _attributes: &EdgeAttributes) -> bool {
        true
    }

    fn name(&self) -> &str {
        "unit_cost"
    }
}

/// a profile keyed by an attribute, used to exercise direction and
/// not-traversable handling. reads the `"oneway"` attribute (`"forward"`,
/// `"backward"`, or anything else for both) and the `"access"` attribute
/// (`"no"` blocks the edge entirely).
pub struct OnewayProfile;

impl RoutingProfile for OnewayProfile {
    fn factor(&self, attributes: &EdgeAttributes) -> FactorResult {
        if attributes.get("access") == Some("no") {
            return FactorResult::not_traversable();
        }
        let direction = match attributes.get("oneway") {
            Some("forward") => TraversalDirection::Forward,
            Some("backward") => TraversalDirection::Backward,
            _ => TraversalDirection::Both,
        };
        FactorResult::new(1.0, direction)
    }

    fn can_stop(&self, attributes: &EdgeAttributes) -> bool {
        attributes.get("access") != Some("no")
    }

    fn name(&self) -> &str {
        "oneway"
    }
}
