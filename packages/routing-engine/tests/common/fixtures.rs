//! Network fixtures

use routing_engine::{build, Edge, Graph, Node, RoutingTable};

/// Node records for the given ids, no attributes
pub fn nodes(ids: &[&str]) -> Vec<Node> {
    ids.iter().map(|id| Node::new(*id)).collect()
}

pub fn edges(list: &[(&str, &str, f64)]) -> Vec<Edge> {
    list.iter()
        .map(|(source, target, weight)| Edge::new(*source, *target, *weight))
        .collect()
}

pub fn graph(ids: &[&str], list: &[(&str, &str, f64)], directed: bool) -> Graph {
    build(&nodes(ids), &edges(list), directed).expect("fixture graph must build")
}

/// Five-node undirected delivery network
///
/// ```text
///   A --5-- B --3-- C --4-- D --2-- E
///   |        \______6_____________/ |
///   +-----------------8-------------+
/// ```
pub fn delivery_network() -> Graph {
    graph(
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 5.0),
            ("B", "C", 3.0),
            ("C", "D", 4.0),
            ("D", "E", 2.0),
            ("A", "E", 8.0),
            ("B", "E", 6.0),
        ],
        false,
    )
}

/// Warehouses, hubs and regions with attributes, directed
pub fn regional_network() -> (Vec<Node>, Vec<Edge>) {
    let nodes = vec![
        Node::new("WH-RENO").with_location("Reno").with_category("warehouse"),
        Node::new("WH-SLC").with_location("Salt Lake City").with_category("warehouse"),
        Node::new("HUB-DEN").with_location("Denver").with_category("hub"),
        Node::new("HUB-PHX").with_location("Phoenix").with_category("hub"),
        Node::new("REG-CO").with_location("Colorado").with_category("region"),
        Node::new("REG-AZ").with_location("Arizona").with_category("region"),
    ];
    let edges = edges(&[
        ("WH-RENO", "HUB-DEN", 1290.0),
        ("WH-RENO", "HUB-PHX", 1180.0),
        ("WH-SLC", "HUB-DEN", 830.0),
        ("WH-SLC", "HUB-PHX", 1050.0),
        ("HUB-DEN", "REG-CO", 40.0),
        ("HUB-PHX", "REG-AZ", 35.0),
        ("HUB-DEN", "HUB-PHX", 1320.0),
    ]);
    (nodes, edges)
}

/// Sum of graph edge weights along `path`, `None` if a hop is missing
pub fn path_cost(graph: &Graph, path: &[String]) -> Option<f64> {
    path.windows(2)
        .try_fold(0.0, |acc, hop| Some(acc + graph.edge_weight(&hop[0], &hop[1])?))
}

pub fn path_of(table: &RoutingTable, source: &str, target: &str) -> Vec<String> {
    table
        .path(source, target)
        .unwrap_or_else(|| panic!("no route {} -> {}", source, target))
        .to_vec()
}
