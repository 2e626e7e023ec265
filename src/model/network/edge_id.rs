use std::{cmp::Ordering, fmt::Display};

use serde::{Deserialize, Serialize};

/// dense, zero-based index into [`super::graph::Graph::edges`]. stable for the
/// lifetime of the graph instance.
#[derive(Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Default)]
pub struct EdgeId(pub usize);

impl PartialOrd for EdgeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl Ord for EdgeId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for EdgeId {
    fn from(value: usize) -> Self {
        EdgeId(value)
    }
}

impl EdgeId {
    pub fn as_usize(&self) -> usize {
        self.0
    }
}
