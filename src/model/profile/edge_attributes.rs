use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// a bag of key/value attributes describing a road segment: highway class,
/// surface, maxspeed, oneway, and so on. backed by an `IndexMap` so
/// iteration order matches insertion order,
/// which keeps debug output and serialized snapshots stable across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeAttributes(IndexMap<String, String>);

impl EdgeAttributes {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}

impl FromIterator<(String, String)> for EdgeAttributes {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(IndexMap::from_iter(iter))
    }
}
