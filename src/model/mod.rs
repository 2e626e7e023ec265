pub mod ch;
pub mod network;
pub mod profile;
pub mod unit;

mod route;
mod router_point;

pub use route::{Route, RouteSegment};
pub use router_point::{RouterPoint, RouterPointError};
