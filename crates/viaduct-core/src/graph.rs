//! The diagram graph: a directed multigraph of stations, decorations, and
//! line segments.
//!
//! Nodes and edges are addressed by opaque string [`Id`]s that stay unique
//! across the whole graph for their lifetime. Parallel edges between the same
//! node pair are valid (distinct line services sharing a station pair), and
//! every element carries a per-type attribute bag keyed by type tag so that
//! switching an element's type back and forth does not lose previously
//! entered data.
//!
//! The graph assumes a single writer at a time; readers may run concurrently
//! with each other once writes are excluded. No operation suspends or blocks.

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{
    error::{GraphError, RegistryError},
    identifier::Id,
    line::{LinePathAttrs, LinePathType, LineStyleAttrs, LineStyleType},
    misc_node::{MiscNodeAttrs, MiscNodeType},
    station::{StationAttrs, StationType},
};

/// Type tag of a node: a station kind or a miscellaneous-decoration kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Station(StationType),
    Misc(MiscNodeType),
}

impl NodeKind {
    /// Whether this tag names a station type.
    pub fn is_station(self) -> bool {
        matches!(self, NodeKind::Station(_))
    }
}

impl From<NodeKind> for &'static str {
    fn from(val: NodeKind) -> Self {
        match val {
            NodeKind::Station(ty) => ty.into(),
            NodeKind::Misc(ty) => ty.into(),
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

impl std::str::FromStr for NodeKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(station) = s.parse::<StationType>() {
            return Ok(NodeKind::Station(station));
        }
        if let Ok(misc) = s.parse::<MiscNodeType>() {
            return Ok(NodeKind::Misc(misc));
        }
        Err(RegistryError::UnknownType(s.to_string()))
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tag: &'static str = (*self).into();
        serializer.serialize_str(tag)
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KindVisitor;

        impl de::Visitor<'_> for KindVisitor {
            type Value = NodeKind;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a node type tag")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<NodeKind, E> {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(KindVisitor)
    }
}

/// Attribute bag of a node, matching one of the two tag namespaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeAttrs {
    Station(StationAttrs),
    Misc(MiscNodeAttrs),
}

impl NodeAttrs {
    /// The tag this bag belongs to.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeAttrs::Station(attrs) => NodeKind::Station(attrs.station_type()),
            NodeAttrs::Misc(attrs) => NodeKind::Misc(attrs.misc_node_type()),
        }
    }
}

/// A node of the diagram: a station or a canvas decoration.
///
/// `attrs` holds one bag per type the node has ever been; only the entry at
/// `kind` is authoritative. The stale entries are kept so switching a node's
/// type back restores what was entered before.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePayload {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
    pub z_index: i32,
    pub kind: NodeKind,
    pub attrs: IndexMap<NodeKind, NodeAttrs>,
}

impl NodePayload {
    /// A visible station node at the given position, with its attribute
    /// entry populated from `attrs`.
    pub fn station(attrs: StationAttrs, x: f64, y: f64) -> Self {
        let kind = NodeKind::Station(attrs.station_type());
        let mut bags = IndexMap::new();
        bags.insert(kind, NodeAttrs::Station(attrs));
        Self {
            x,
            y,
            visible: true,
            z_index: 0,
            kind,
            attrs: bags,
        }
    }

    /// A visible miscellaneous node at the given position.
    pub fn misc(attrs: MiscNodeAttrs, x: f64, y: f64) -> Self {
        let kind = NodeKind::Misc(attrs.misc_node_type());
        let mut bags = IndexMap::new();
        bags.insert(kind, NodeAttrs::Misc(attrs));
        Self {
            x,
            y,
            visible: true,
            z_index: 0,
            kind,
            attrs: bags,
        }
    }

    /// The authoritative attribute bag, if populated.
    pub fn current_attrs(&self) -> Option<&NodeAttrs> {
        self.attrs.get(&self.kind)
    }

    /// The authoritative station bag, if this node currently is a station.
    pub fn station_attrs(&self) -> Option<&StationAttrs> {
        match self.current_attrs()? {
            NodeAttrs::Station(attrs) => Some(attrs),
            NodeAttrs::Misc(_) => None,
        }
    }

    /// The primary-language display name, if this node currently is a station.
    pub fn primary_name(&self) -> Option<&str> {
        self.station_attrs().map(|attrs| attrs.names()[0].as_str())
    }
}

/// An edge of the diagram: a line segment between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgePayload {
    pub source: Id,
    pub target: Id,
    pub path_kind: LinePathType,
    pub path_attrs: IndexMap<LinePathType, LinePathAttrs>,
    pub style_kind: LineStyleType,
    pub style_attrs: IndexMap<LineStyleType, LineStyleAttrs>,
    /// Stable identity used to match this edge across repeated imports and
    /// edits; the empty string means "unmatched".
    pub reconcile_id: String,
    pub visible: bool,
    pub z_index: i32,
}

impl EdgePayload {
    /// A visible edge with its path and style entries populated.
    pub fn new(source: Id, target: Id, path: LinePathAttrs, style: LineStyleAttrs) -> Self {
        let path_kind = path.path_type();
        let style_kind = style.style_type();
        let mut path_attrs = IndexMap::new();
        path_attrs.insert(path_kind, path);
        let mut style_attrs = IndexMap::new();
        style_attrs.insert(style_kind, style);
        Self {
            source,
            target,
            path_kind,
            path_attrs,
            style_kind,
            style_attrs,
            reconcile_id: String::new(),
            visible: true,
            z_index: 0,
        }
    }

    /// The authoritative path bag, if populated.
    pub fn current_path_attrs(&self) -> Option<&LinePathAttrs> {
        self.path_attrs.get(&self.path_kind)
    }

    /// The authoritative style bag, if populated.
    pub fn current_style_attrs(&self) -> Option<&LineStyleAttrs> {
        self.style_attrs.get(&self.style_kind)
    }
}

/// In-memory directed multigraph for one transit map.
///
/// Node and edge tables are insertion-ordered, so iteration, searches, and
/// serialization are deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagramGraph {
    nodes: IndexMap<Id, NodePayload>,
    edges: IndexMap<Id, EdgePayload>,
}

impl DiagramGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateId`] if the id is already used by any
    /// node or edge in this graph.
    pub fn add_node(&mut self, id: Id, payload: NodePayload) -> Result<(), GraphError> {
        if self.contains(id) {
            return Err(GraphError::DuplicateId(id));
        }
        debug_assert!(
            payload.attrs.contains_key(&payload.kind),
            "node {id} has no attribute bag for its current kind",
        );
        self.nodes.insert(id, payload);
        Ok(())
    }

    /// Adds a directed edge; `payload` names its endpoints.
    ///
    /// Parallel edges between the same node pair are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateId`] if the id is already used, or
    /// [`GraphError::DanglingEndpoint`] if either endpoint is absent.
    pub fn add_edge(&mut self, id: Id, payload: EdgePayload) -> Result<(), GraphError> {
        if self.contains(id) {
            return Err(GraphError::DuplicateId(id));
        }
        for endpoint in [payload.source, payload.target] {
            if !self.nodes.contains_key(&endpoint) {
                return Err(GraphError::DanglingEndpoint {
                    edge: id,
                    node: endpoint,
                });
            }
        }
        self.edges.insert(id, payload);
        Ok(())
    }

    /// Removes a node together with every edge incident to it, returning its
    /// payload.
    ///
    /// The cascade keeps the no-dangling-edges invariant without requiring
    /// callers to order their deletions.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingElement`] if the node does not exist.
    pub fn remove_node(&mut self, id: Id) -> Result<NodePayload, GraphError> {
        if !self.nodes.contains_key(&id) {
            return Err(GraphError::MissingElement(id));
        }
        let incident = self.incident_edges(id);
        debug!(node = id.to_string(), incident_edges = incident.len(); "Removing node");
        for edge_id in incident {
            self.edges.shift_remove(&edge_id);
        }
        self.nodes
            .shift_remove(&id)
            .ok_or(GraphError::MissingElement(id))
    }

    /// Removes an edge, returning its payload.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingElement`] if the edge does not exist.
    pub fn remove_edge(&mut self, id: Id) -> Result<EdgePayload, GraphError> {
        self.edges
            .shift_remove(&id)
            .ok_or(GraphError::MissingElement(id))
    }

    /// Returns the node payload for the given id, if it exists.
    pub fn node(&self, id: Id) -> Option<&NodePayload> {
        self.nodes.get(&id)
    }

    /// Mutable access to a node payload.
    pub fn node_mut(&mut self, id: Id) -> Option<&mut NodePayload> {
        self.nodes.get_mut(&id)
    }

    /// Returns the edge payload for the given id, if it exists.
    pub fn edge(&self, id: Id) -> Option<&EdgePayload> {
        self.edges.get(&id)
    }

    /// Mutable access to an edge payload.
    pub fn edge_mut(&mut self, id: Id) -> Option<&mut EdgePayload> {
        self.edges.get_mut(&id)
    }

    /// Whether any node or edge uses this id.
    pub fn contains(&self, id: Id) -> bool {
        self.nodes.contains_key(&id) || self.edges.contains_key(&id)
    }

    /// Iterates over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (Id, &NodePayload)> {
        self.nodes.iter().map(|(id, payload)| (*id, payload))
    }

    /// Iterates over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (Id, &EdgePayload)> {
        self.edges.iter().map(|(id, payload)| (*id, payload))
    }

    /// The number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Ids of all nodes matching the predicate, in insertion order.
    pub fn find_nodes(&self, predicate: impl Fn(Id, &NodePayload) -> bool) -> Vec<Id> {
        self.nodes
            .iter()
            .filter(|(id, payload)| predicate(**id, payload))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Ids of all edges incident to the given node, in insertion order.
    pub fn incident_edges(&self, id: Id) -> Vec<Id> {
        self.edges
            .iter()
            .filter(|(_, edge)| edge.source == id || edge.target == id)
            .map(|(edge_id, _)| *edge_id)
            .collect()
    }

    /// Nodes adjacent to the given node through any edge, in either
    /// direction, deduplicated in first-seen order.
    pub fn neighbors(&self, id: Id) -> Vec<Id> {
        let mut seen = Vec::new();
        for edge in self.edges.values() {
            let other = if edge.source == id {
                edge.target
            } else if edge.target == id {
                edge.source
            } else {
                continue;
            };
            if !seen.contains(&other) {
                seen.push(other);
            }
        }
        seen
    }
}
