//! JSON adapters
//!
//! Routing table layout:
//!
//! ```json
//! {"WH-1": {"HUB-2": {"path": ["WH-1", "HUB-2"], "distance_km": 12.0}}}
//! ```
//!
//! The cost key comes from `ExportConfig::cost_field`.

use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{ExportConfig, Validatable};
use crate::errors::Result;
use crate::features::routing::domain::{NetworkDocument, NetworkSource, RoutingTableSink};
use crate::features::shortest_path::RoutingTable;
use crate::shared::models::{Edge, Node};

/// Render a table with the configured cost key
pub fn routing_table_to_json(table: &RoutingTable, export: &ExportConfig) -> Value {
    let sources: Map<String, Value> = table
        .iter()
        .map(|(source, routes)| {
            let targets: Map<String, Value> = routes
                .iter()
                .map(|(target, entry)| {
                    let mut route = Map::new();
                    route.insert("path".to_string(), Value::from(entry.path.clone()));
                    route.insert(export.cost_field.clone(), Value::from(entry.cost));
                    (target.clone(), Value::Object(route))
                })
                .collect();
            (source.to_string(), Value::Object(targets))
        })
        .collect();

    Value::Object(sources)
}

/// Network document read from a local JSON file
#[derive(Debug, Clone)]
pub struct JsonNetworkSource {
    path: PathBuf,
}

impl JsonNetworkSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<NetworkDocument> {
        info!("Loading network document: {}", self.path.display());
        let reader = BufReader::new(File::open(&self.path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl NetworkSource for JsonNetworkSource {
    fn load_nodes(&self) -> Result<Vec<Node>> {
        Ok(self.read_document()?.nodes)
    }

    fn load_edges(&self) -> Result<Vec<Edge>> {
        Ok(self.read_document()?.edges)
    }

    fn load_network(&self) -> Result<NetworkDocument> {
        self.read_document()
    }
}

/// Writes the routing table as one JSON document
#[derive(Debug, Clone)]
pub struct JsonRoutingTableWriter {
    destination: PathBuf,
    export: ExportConfig,
}

impl JsonRoutingTableWriter {
    pub fn new(destination: impl Into<PathBuf>, export: ExportConfig) -> Self {
        Self {
            destination: destination.into(),
            export,
        }
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Serialize into any writer
    ///
    /// Fails with `Config` before writing anything if the export settings
    /// are invalid.
    pub fn write_to<W: Write>(&self, table: &RoutingTable, mut writer: W) -> Result<()> {
        self.export.validate()?;
        let document = routing_table_to_json(table, &self.export);
        if self.export.pretty {
            serde_json::to_writer_pretty(&mut writer, &document)?;
        } else {
            serde_json::to_writer(&mut writer, &document)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl RoutingTableSink for JsonRoutingTableWriter {
    fn persist(&self, table: &RoutingTable) -> Result<()> {
        info!("Saving routing table JSON: {}", self.destination.display());
        self.export.validate()?;
        let file = File::create(&self.destination)?;
        self.write_to(table, BufWriter::new(file))
    }
}
