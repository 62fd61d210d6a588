use serde::{Deserialize, Serialize};

/// A traversal option between two nodes
///
/// Weight is the traversal cost (distance in the logistics exports). The
/// builder rejects negative and non-finite weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    #[serde(alias = "distance_km")]
    pub weight: f64,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
