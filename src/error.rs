use thiserror::Error;

use crate::algorithm::SearchError;
use crate::map::ResolveError;
use crate::model::profile::ProfileError;
use crate::model::RouterPointError;
use crate::route_builder::RouteBuildError;

/// the top-level failure kind every public [`crate::router::Router`]
/// operation returns, tagging each module error with the kind spec
/// section 7 names rather than exposing the module error directly.
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("no routing profile registered under name '{0}'")]
    ProfileUnsupported(String),
    #[error(transparent)]
    ResolveFailed(#[from] ResolveError),
    #[error("no route found between the given endpoints")]
    RouteNotFound,
    #[error(transparent)]
    RouteBuildFailed(#[from] RouteBuildError),
    #[error("search was canceled")]
    Canceled,
    #[error("corrupt graph: {0}")]
    InvariantViolation(String),
}

impl From<SearchError> for RouterError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Canceled => RouterError::Canceled,
            SearchError::NoMeetingPoint => RouterError::RouteNotFound,
            SearchError::InvariantViolation(msg) => RouterError::InvariantViolation(msg),
            SearchError::Network(e) => RouterError::InvariantViolation(e.to_string()),
            SearchError::Profile(e) => RouterError::InvariantViolation(e.to_string()),
            SearchError::Ch(e) => RouterError::InvariantViolation(e.to_string()),
        }
    }
}

impl From<ProfileError> for RouterError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::UnknownProfileName(name) => RouterError::ProfileUnsupported(name),
            ProfileError::UnknownEdgeProfileId(id) => RouterError::InvariantViolation(format!("unknown edge profile id {}", id)),
            ProfileError::TooManyEdgeProfiles(limit) => RouterError::InvariantViolation(format!("profile dictionary exceeded its {}-entry limit", limit)),
        }
    }
}

impl From<RouterPointError> for RouterError {
    fn from(err: RouterPointError) -> Self {
        RouterError::InvariantViolation(err.to_string())
    }
}
