use thiserror::Error;

use crate::model::network::EdgeProfileId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("edge profile id {0} not present in the profile dictionary")]
    UnknownEdgeProfileId(EdgeProfileId),
    #[error("no routing profile registered under name '{0}'")]
    UnknownProfileName(String),
    #[error("profile dictionary is full: cannot intern more than {0} distinct edge-profile attribute bags")]
    TooManyEdgeProfiles(usize),
}
