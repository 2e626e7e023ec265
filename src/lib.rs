//! core query engine for a road-network routing library: coordinate
//! resolution, plain and contraction-hierarchy bidirectional Dijkstra,
//! pluggable cost profiles, and route reconstruction. graph providers,
//! OSM import, persisted formats, and networked service layers live
//! outside this crate.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod map;
pub mod model;
pub mod test_support;
pub mod util;

mod route_builder;
mod router;

pub use config::RouterOptions;
pub use error::RouterError;
pub use route_builder::{RouteBuildError, build as build_route};
pub use router::{ResolverKind, Router};
