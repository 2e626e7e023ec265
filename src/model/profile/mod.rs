mod dictionary;
mod edge_attributes;
mod factor_result;
mod profile_error;
mod routing_profile;
mod traversal_direction;

pub use dictionary::ProfileDictionary;
pub use edge_attributes::EdgeAttributes;
pub use factor_result::FactorResult;
pub use profile_error::ProfileError;
pub use routing_profile::RoutingProfile;
pub use traversal_direction::TraversalDirection;
