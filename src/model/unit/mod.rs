mod as_f64;
mod cost;
mod distance;

pub use as_f64::AsF64;
pub use cost::{Cost, ReverseCost};
pub use distance::Distance;
