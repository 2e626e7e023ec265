use thiserror::Error;

use crate::model::ch::CHError;
use crate::model::network::NetworkError;
use crate::model::profile::ProfileError;

/// errors raised while running a Dijkstra (plain or contraction-hierarchy)
/// search. see [`crate::error::RouterError`] for how these surface to
/// callers of the top-level `Router`.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Ch(#[from] CHError),

    #[error("search was canceled")]
    Canceled,

    #[error("no finite meeting weight found between source and target frontiers")]
    NoMeetingPoint,

    #[error("corrupt contraction hierarchy: {0}")]
    InvariantViolation(String),
}
