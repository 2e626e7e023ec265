mod resolve_error;
mod resolver;
mod spatial_index;

pub use resolve_error::ResolveError;
pub use resolver::{DefaultResolver, ResolveOptions, Resolver};
pub use spatial_index::SpatialIndex;
