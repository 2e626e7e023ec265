use derive_more::{Add, Div, Mul, Neg, Sum};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{AsF64, Distance};

/// the weight accumulated while traversing a graph edge under some [`crate::model::profile::RoutingProfile`].
/// carries no unit of its own; it is the product of an edge's [`Distance`] and the profile's
/// `Factor` multiplier.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Add, Mul, Div, Sum, Neg, Serialize, Deserialize)]
pub struct Cost(OrderedFloat<f64>);

impl Default for Cost {
    fn default() -> Self {
        Cost::ZERO
    }
}

impl Eq for Cost {}
impl Ord for Cost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl Cost {
    /// represents zero cost, the unit of the addition operation
    pub const ZERO: Cost = Cost(OrderedFloat(0.0));
    /// represents the maximum possible cost, used to seed unsettled distances
    pub const INFINITY: Cost = Cost(OrderedFloat(f64::INFINITY));

    pub fn new(value: f64) -> Cost {
        Cost(OrderedFloat(value))
    }

    pub fn is_finite(&self) -> bool {
        self.0 .0.is_finite()
    }
}

impl AsF64 for Cost {
    fn as_f64(&self) -> f64 {
        self.0 .0
    }
}

impl From<Distance> for Cost {
    fn from(value: Distance) -> Self {
        Cost::new(value.as_f64())
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}", self.0 .0)
    }
}

/// a priority-queue key that sorts smallest-cost-first even though
/// `priority_queue::PriorityQueue` is a max-heap; ties break by the
/// wrapped id ordering performed by the caller (vertex id), keeping
/// search order deterministic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReverseCost(std::cmp::Reverse<OrderedFloat<f64>>);

impl From<Cost> for ReverseCost {
    fn from(value: Cost) -> Self {
        ReverseCost(std::cmp::Reverse(value.0))
    }
}

impl From<ReverseCost> for Cost {
    fn from(value: ReverseCost) -> Self {
        Cost((value.0).0)
    }
}
