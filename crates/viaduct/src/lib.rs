//! Viaduct - a transit-map diagram model with a type-polymorphic element
//! registry and a legacy save importer.
//!
//! A diagram is a directed multigraph of stations, decorations, and line
//! segments. Every element carries a type tag resolved through the element
//! registry, which supplies its default attributes, editable field schema,
//! and display metadata.

pub mod edit;

mod error;

pub use viaduct_core::{color, field, graph, identifier, line, misc_node, registry, station, theme};

pub use viaduct_core::error::{GraphError, RegistryError};
pub use viaduct_import::ImportError;

pub use error::ViaductError;

use log::{debug, info};

use viaduct_core::graph::DiagramGraph;
use viaduct_import::save::LineSave;

/// An editing session over one diagram graph.
///
/// This is the API surface presentation layers work against: it owns the
/// graph, runs legacy save imports against it, and round-trips the graph as
/// a JSON document.
///
/// # Examples
///
/// ```rust,no_run
/// use viaduct::MapSession;
///
/// let save_json = std::fs::read_to_string("line1.json").expect("Failed to read save");
///
/// let mut session = MapSession::new();
/// session.import_line_save(&save_json).expect("Failed to import");
///
/// let document = session.to_json().expect("Failed to serialize");
/// println!("{document}");
/// ```
#[derive(Debug, Default)]
pub struct MapSession {
    graph: DiagramGraph,
}

impl MapSession {
    /// Creates a session with an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the session's graph.
    pub fn graph(&self) -> &DiagramGraph {
        &self.graph
    }

    /// Mutable access to the session's graph.
    pub fn graph_mut(&mut self) -> &mut DiagramGraph {
        &mut self.graph
    }

    /// Parses a legacy line save and imports it into the graph.
    ///
    /// Stations already on the canvas (matched by primary name) are reused;
    /// every declared adjacency adds a new edge. On an import failure,
    /// elements committed before the failing record stay in the graph.
    ///
    /// # Errors
    ///
    /// Returns `ViaductError` when the JSON cannot be parsed at all, or an
    /// [`ImportError`] naming the offending station record.
    pub fn import_line_save(&mut self, json: &str) -> Result<(), ViaductError> {
        info!("Parsing line save");
        let save: LineSave = serde_json::from_str(json)?;
        debug!(
            style = save.style.to_string(),
            records = save.stn_list.len();
            "Line save parsed"
        );

        viaduct_import::import_line_save(&mut self.graph, &save)?;

        info!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count();
            "Graph updated"
        );
        Ok(())
    }

    /// Serializes the graph as a compact JSON document.
    ///
    /// # Errors
    ///
    /// Returns `ViaductError` if serialization fails.
    pub fn to_json(&self) -> Result<String, ViaductError> {
        Ok(serde_json::to_string(&self.graph)?)
    }

    /// Serializes the graph as a pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns `ViaductError` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ViaductError> {
        Ok(serde_json::to_string_pretty(&self.graph)?)
    }

    /// Restores a session from a JSON document produced by [`Self::to_json`].
    ///
    /// # Errors
    ///
    /// Returns `ViaductError` if the document does not deserialize.
    pub fn from_json(json: &str) -> Result<Self, ViaductError> {
        let graph: DiagramGraph = serde_json::from_str(json)?;
        debug!(nodes = graph.node_count(), edges = graph.edge_count(); "Document loaded");
        Ok(Self { graph })
    }
}
