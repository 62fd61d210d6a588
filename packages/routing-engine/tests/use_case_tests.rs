//! Full routing runs through the JSON adapters

mod common;

use routing_engine::config::ExportConfig;
use routing_engine::features::routing::{
    InMemoryNetworkSource, InMemoryRoutingTableSink, JsonNetworkSource, JsonRoutingTableWriter,
};
use routing_engine::{
    NetworkDocument, RoutingConfig, RoutingInput, RoutingUseCase, RoutingUseCaseImpl,
};
use std::fs;
use tempfile::TempDir;

const NETWORK_JSON: &str = r#"{
  "nodes": [
    {"node_id": "WH-1", "location": "Reno", "type": "warehouse"},
    {"node_id": "HUB-1", "location": "Denver", "type": "hub"},
    {"node_id": "REG-1", "location": "Colorado", "type": "region"}
  ],
  "edges": [
    {"source": "WH-1", "target": "HUB-1", "distance_km": 1290},
    {"source": "HUB-1", "target": "REG-1", "distance_km": 40},
    {"source": "WH-1", "target": "REG-1", "distance_km": 1400}
  ]
}"#;

#[test]
fn test_json_network_to_json_table() {
    let dir = TempDir::new().unwrap();
    let network_path = dir.path().join("network.json");
    let output_path = dir.path().join("routing_table.json");
    fs::write(&network_path, NETWORK_JSON).unwrap();

    let config = RoutingConfig::default();
    let usecase = RoutingUseCaseImpl::from_config(&config);
    let source = JsonNetworkSource::new(&network_path);
    let sink = JsonRoutingTableWriter::new(&output_path, config.export.clone());

    let stats = usecase.run(&source, &sink).unwrap();
    assert_eq!(stats.sources, 3);
    assert_eq!(stats.graph.edge_count, 3);

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(
        written["WH-1"]["REG-1"]["path"],
        serde_json::json!(["WH-1", "HUB-1", "REG-1"])
    );
    assert_eq!(written["WH-1"]["REG-1"]["distance_km"], 1330.0);
    assert!(written["REG-1"].get("WH-1").is_none());
}

#[test]
fn test_undirected_run_in_memory() {
    let doc: NetworkDocument = serde_json::from_str(NETWORK_JSON).unwrap();
    let usecase = RoutingUseCaseImpl::from_config(&RoutingConfig::default().directed(false));
    let sink = InMemoryRoutingTableSink::new();

    usecase
        .run(&InMemoryNetworkSource::from(doc), &sink)
        .unwrap();

    let table = sink.latest().unwrap();
    assert_eq!(table.cost("REG-1", "WH-1"), Some(1330.0));
    assert_eq!(table.route_count(), 9);
}

#[test]
fn test_compute_without_ports() {
    let (nodes, edges) = common::regional_network();
    let output = RoutingUseCaseImpl::default()
        .compute(RoutingInput {
            nodes: &nodes,
            edges: &edges,
        })
        .unwrap();

    assert_eq!(output.stats.graph.node_count, 6);
    assert_eq!(output.stats.sources, 6);
    assert_eq!(output.table.cost("WH-SLC", "REG-AZ"), Some(1085.0));
}

#[test]
fn test_pretty_export_with_custom_cost_field() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("table.json");
    let export = ExportConfig::default().cost_field("cost").pretty(true);

    let (nodes, edges) = common::regional_network();
    let output = RoutingUseCaseImpl::default()
        .compute(RoutingInput {
            nodes: &nodes,
            edges: &edges,
        })
        .unwrap();

    let writer = JsonRoutingTableWriter::new(&output_path, export);
    routing_engine::RoutingTableSink::persist(&writer, &output.table).unwrap();

    let text = fs::read_to_string(&output_path).unwrap();
    assert!(text.contains('\n'));
    let written: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(written["HUB-DEN"]["REG-CO"]["cost"], 40.0);
}

#[test]
fn test_conflicting_records_fail_the_run() {
    let json = r#"{
      "nodes": [
        {"node_id": "A", "type": "hub"},
        {"node_id": "A", "type": "warehouse"}
      ],
      "edges": []
    }"#;
    let doc: NetworkDocument = serde_json::from_str(json).unwrap();
    let sink = InMemoryRoutingTableSink::new();

    let err = RoutingUseCaseImpl::default()
        .run(&InMemoryNetworkSource::from(doc), &sink)
        .unwrap_err();
    assert_eq!(err.kind(), routing_engine::ErrorKind::DuplicateNode);
    assert_eq!(sink.write_count(), 0);
}
