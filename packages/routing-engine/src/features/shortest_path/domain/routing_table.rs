use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Least-cost route between one source and one target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Node ids from source to target, both inclusive
    pub path: Vec<String>,
    /// Sum of edge weights along `path`
    pub cost: f64,
}

impl RouteEntry {
    pub fn new(path: Vec<String>, cost: f64) -> Self {
        Self { path, cost }
    }

    /// Route from a node to itself
    pub fn trivial(node: impl Into<String>) -> Self {
        Self::new(vec![node.into()], 0.0)
    }

    pub fn source(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    pub fn target(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Routes from one source, keyed by target id
pub type Routes = BTreeMap<String, RouteEntry>;

/// All-pairs routing table: source id → target id → route
///
/// A target missing from a source's routes is unreachable from it. Ordered
/// maps keep iteration and serialization deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutingTable {
    routes: BTreeMap<String, Routes>,
}

impl RoutingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes leaving `source`
    pub fn routes_from(&self, source: &str) -> Option<&Routes> {
        self.routes.get(source)
    }

    pub fn route(&self, source: &str, target: &str) -> Option<&RouteEntry> {
        self.routes.get(source)?.get(target)
    }

    pub fn cost(&self, source: &str, target: &str) -> Option<f64> {
        self.route(source, target).map(|entry| entry.cost)
    }

    pub fn path(&self, source: &str, target: &str) -> Option<&[String]> {
        self.route(source, target).map(|entry| entry.path.as_slice())
    }

    pub fn is_reachable(&self, source: &str, target: &str) -> bool {
        self.route(source, target).is_some()
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> + '_ {
        self.routes.keys().map(String::as_str)
    }

    pub fn source_count(&self) -> usize {
        self.routes.len()
    }

    /// Total number of (source, target) entries, self-routes included
    pub fn route_count(&self) -> usize {
        self.routes.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Routes)> + '_ {
        self.routes.iter().map(|(source, routes)| (source.as_str(), routes))
    }

    pub fn as_map(&self) -> &BTreeMap<String, Routes> {
        &self.routes
    }

    pub fn into_inner(self) -> BTreeMap<String, Routes> {
        self.routes
    }
}

impl FromIterator<(String, Routes)> for RoutingTable {
    fn from_iter<I: IntoIterator<Item = (String, Routes)>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RoutingTable {
    type Item = (&'a String, &'a Routes);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Routes>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RoutingTable {
        let mut a = Routes::new();
        a.insert("A".to_string(), RouteEntry::trivial("A"));
        a.insert(
            "B".to_string(),
            RouteEntry::new(vec!["A".to_string(), "B".to_string()], 2.5),
        );
        let mut b = Routes::new();
        b.insert("B".to_string(), RouteEntry::trivial("B"));

        [("A".to_string(), a), ("B".to_string(), b)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_lookups() {
        let table = sample();
        assert_eq!(table.source_count(), 2);
        assert_eq!(table.route_count(), 3);
        assert_eq!(table.cost("A", "B"), Some(2.5));
        assert!(table.is_reachable("A", "B"));
        assert!(!table.is_reachable("B", "A"));
        assert_eq!(table.path("A", "A").unwrap(), ["A".to_string()]);
        assert_eq!(table.sources().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_route_entry_accessors() {
        let entry = RouteEntry::new(
            vec!["A".to_string(), "C".to_string(), "D".to_string()],
            9.0,
        );
        assert_eq!(entry.source(), Some("A"));
        assert_eq!(entry.target(), Some("D"));
        assert_eq!(entry.hops(), 2);
        assert_eq!(RouteEntry::trivial("A").hops(), 0);
    }

    #[test]
    fn test_serializes_as_plain_mapping() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["A"]["B"]["cost"], 2.5);
        assert_eq!(json["A"]["B"]["path"][1], "B");
        assert!(json["B"].get("A").is_none());
    }
}
