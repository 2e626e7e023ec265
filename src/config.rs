use serde::{Deserialize, Serialize};

/// router-wide resolver tunables. a plain in-memory value type, not a
/// file-format loader: a serde-derived struct with a documented
/// `Default`, deserializable from whatever configuration format a caller
/// already uses.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RouterOptions {
    /// when set, the resolver additionally enforces `can_stop` for every
    /// requested profile, not just traversability.
    pub verify_all_stoppable: bool,
    /// half-width, in degrees, of the square spatial-index window queried
    /// around a resolve coordinate.
    pub search_offset_degrees: f64,
    /// a resolved point farther than this from its query coordinate is
    /// rejected with `ResolveFailed`.
    pub max_distance_meters: f64,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            verify_all_stoppable: false,
            search_offset_degrees: 0.01,
            max_distance_meters: 50.0,
        }
    }
}

impl RouterOptions {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_documented_constants() {
        let options = RouterOptions::default();
        assert!(!options.verify_all_stoppable);
        assert_eq!(options.search_offset_degrees, 0.01);
        assert_eq!(options.max_distance_meters, 50.0);
    }

    #[test]
    fn test_from_json_fills_in_defaults_for_missing_fields() {
        let options = RouterOptions::from_json(r#"{"max_distance_meters": 100.0}"#).unwrap();
        assert_eq!(options.max_distance_meters, 100.0);
        assert_eq!(options.search_offset_degrees, 0.01);
    }

    #[test]
    fn test_round_trips_through_json() {
        let mut options = RouterOptions::default();
        options.verify_all_stoppable = true;
        let json = options.to_json().unwrap();
        let parsed = RouterOptions::from_json(&json).unwrap();
        assert_eq!(options, parsed);
    }
}
