use serde::{Deserialize, Serialize};

/// Optional descriptive attributes of a logistics location
///
/// Two records for the same node id must agree on these to be merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeAttributes {
    /// Human readable location label (city, region)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Location category: warehouse, hub, customer region, ...
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl std::fmt::Display for NodeAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{location: {}, category: {}}}",
            self.location.as_deref().unwrap_or("-"),
            self.category.as_deref().unwrap_or("-")
        )
    }
}

/// A node of the logistics network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(alias = "node_id")]
    pub id: String,

    #[serde(flatten)]
    pub attributes: NodeAttributes,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: NodeAttributes::default(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.attributes.location = Some(location.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.attributes.category = Some(category.into());
        self
    }
}
