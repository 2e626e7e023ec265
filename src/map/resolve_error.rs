use thiserror::Error;

use crate::model::network::NetworkError;
use crate::model::profile::ProfileError;
use crate::model::RouterPointError;

/// failures from [`super::resolver::Resolver::resolve`].
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    RouterPoint(#[from] RouterPointError),
    #[error("no edge within {max_distance_meters}m of ({lon}, {lat}) satisfies the requested profiles")]
    ResolveFailed { lon: f64, lat: f64, max_distance_meters: f64 },
}
