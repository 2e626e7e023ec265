use derive_more::{Add, Div, Mul, Neg, Sub, Sum};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::AsF64;

/// a distance, in meters, along the surface of the earth or along an edge.
#[derive(
    Copy, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Add, Sub, Mul, Div, Sum, Neg,
)]
pub struct Distance(OrderedFloat<f64>);

impl Distance {
    pub const ZERO: Distance = Distance(OrderedFloat(0.0));
    pub const ONE: Distance = Distance(OrderedFloat(1.0));

    pub fn new(value: f64) -> Distance {
        Distance(OrderedFloat(value))
    }
}

impl AsF64 for Distance {
    fn as_f64(&self) -> f64 {
        self.0 .0
    }
}
impl AsF64 for &Distance {
    fn as_f64(&self) -> f64 {
        self.0 .0
    }
}

impl From<f64> for Distance {
    fn from(value: f64) -> Self {
        Distance::new(value)
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}m", self.0 .0)
    }
}
