//! Edit operations on diagram elements.
//!
//! Type switching keeps previously entered data two ways: the old type's
//! attribute bag stays cached on the element (so switching back restores it
//! verbatim), and a handful of fields carry over into the new type's
//! defaults. Carry-over is explicit per concrete type pairing: for stations
//! the name pair always transfers, while the color theme, transfer rows,
//! and routing fields only move between types that share their meaning.

use log::debug;

use viaduct_core::{
    error::GraphError,
    graph::{DiagramGraph, NodeAttrs, NodeKind},
    identifier::Id,
    line::{LinePathAttrs, LinePathType, LineStyleAttrs, LineStyleType},
    registry::ElementRegistry,
    station::{StationAttrs, StationType},
};

use crate::error::ViaductError;

/// Switches a station node to another station type.
///
/// If the node already holds a cached bag for the target type, that bag
/// becomes authoritative again unchanged. Otherwise a fresh bag is built
/// from the target type's defaults with the carry-over policy applied.
///
/// # Errors
///
/// Returns [`GraphError::MissingElement`] if the node does not exist, or a
/// registry error if the target type is not registered.
pub fn switch_station_type(
    graph: &mut DiagramGraph,
    node_id: Id,
    to: StationType,
) -> Result<(), ViaductError> {
    let target_kind = NodeKind::Station(to);

    let node = graph
        .node_mut(node_id)
        .ok_or(GraphError::MissingElement(node_id))?;

    if node.kind == target_kind {
        return Ok(());
    }

    if node.attrs.contains_key(&target_kind) {
        debug!(node = node_id.to_string(), station_type = to.to_string(); "Restoring cached bag");
        node.kind = target_kind;
        return Ok(());
    }

    let old = node.station_attrs().cloned();
    let descriptor = ElementRegistry::standard().station(to)?;
    let mut next = descriptor.default_attrs();
    if let Some(old) = &old {
        carry_over(old, &mut next);
    }

    node.attrs.insert(target_kind, NodeAttrs::Station(next));
    node.kind = target_kind;
    debug!(node = node_id.to_string(), station_type = to.to_string(); "Station type switched");
    Ok(())
}

/// Copies matching-named fields from the old bag into the new type's
/// defaults.
///
/// The name pair transfers between every pairing. The color theme transfers
/// only between the types that tint their marker with one, and transfer rows
/// only between the interchange types that share the per-group row shape.
fn carry_over(old: &StationAttrs, next: &mut StationAttrs) {
    next.set_names(old.names().clone());

    match (old, next) {
        (StationAttrs::ShmetroBasic2020(from), StationAttrs::GzmtrBasic(to)) => {
            to.color = from.color.clone();
        }
        (StationAttrs::GzmtrBasic(from), StationAttrs::ShmetroBasic2020(to)) => {
            to.color = from.color.clone();
        }
        (StationAttrs::ShmetroInt(from), StationAttrs::GzmtrInt(to)) => {
            to.transfer = from.transfer.clone();
        }
        (StationAttrs::GzmtrInt(from), StationAttrs::ShmetroInt(to)) => {
            to.transfer = from.transfer.clone();
        }
        _ => {}
    }
}

/// Switches an edge to another path type.
///
/// A cached bag for the target type is restored unchanged; otherwise the
/// target's defaults get the routing fields carried over where both types
/// have them.
///
/// # Errors
///
/// Returns [`GraphError::MissingElement`] if the edge does not exist, or a
/// registry error if the target type is not registered.
pub fn switch_path_type(
    graph: &mut DiagramGraph,
    edge_id: Id,
    to: LinePathType,
) -> Result<(), ViaductError> {
    let edge = graph
        .edge_mut(edge_id)
        .ok_or(GraphError::MissingElement(edge_id))?;

    if edge.path_kind == to {
        return Ok(());
    }

    if edge.path_attrs.contains_key(&to) {
        edge.path_kind = to;
        return Ok(());
    }

    let old = edge.current_path_attrs().cloned();
    let descriptor = ElementRegistry::standard().line_path(to)?;
    let mut next = descriptor.default_attrs();
    if let Some(old) = &old {
        carry_over_path(old, &mut next);
    }

    edge.path_attrs.insert(to, next);
    edge.path_kind = to;
    debug!(edge = edge_id.to_string(), path_type = to.to_string(); "Path type switched");
    Ok(())
}

/// The two bent path types share their routing fields; the straight path
/// has none to carry.
fn carry_over_path(old: &LinePathAttrs, next: &mut LinePathAttrs) {
    match (old, next) {
        (LinePathAttrs::Diagonal(from), LinePathAttrs::Perpendicular(to)) => {
            to.start_from = from.start_from;
            to.offset_from = from.offset_from;
            to.offset_to = from.offset_to;
        }
        (LinePathAttrs::Perpendicular(from), LinePathAttrs::Diagonal(to)) => {
            to.start_from = from.start_from;
            to.offset_from = from.offset_from;
            to.offset_to = from.offset_to;
        }
        _ => {}
    }
}

/// Switches an edge to another drawing style.
///
/// A cached bag for the target type is restored unchanged; otherwise the
/// target's defaults get the color theme carried over where both styles
/// have one.
///
/// # Errors
///
/// Returns [`GraphError::MissingElement`] if the edge does not exist, or a
/// registry error if the target type is not registered.
pub fn switch_style_type(
    graph: &mut DiagramGraph,
    edge_id: Id,
    to: LineStyleType,
) -> Result<(), ViaductError> {
    let edge = graph
        .edge_mut(edge_id)
        .ok_or(GraphError::MissingElement(edge_id))?;

    if edge.style_kind == to {
        return Ok(());
    }

    if edge.style_attrs.contains_key(&to) {
        edge.style_kind = to;
        return Ok(());
    }

    let old = edge.current_style_attrs().cloned();
    let descriptor = ElementRegistry::standard().line_style(to)?;
    let mut next = descriptor.default_attrs();
    if let Some(old) = &old {
        carry_over_style(old, &mut next);
    }

    edge.style_attrs.insert(to, next);
    edge.style_kind = to;
    debug!(edge = edge_id.to_string(), style_type = to.to_string(); "Style type switched");
    Ok(())
}

/// The colored styles share their theme; the virtual-interchange strokes
/// carry nothing.
fn carry_over_style(old: &LineStyleAttrs, next: &mut LineStyleAttrs) {
    match (old, next) {
        (LineStyleAttrs::SingleColor(from), LineStyleAttrs::River(to)) => {
            to.color = from.color.clone();
        }
        (LineStyleAttrs::River(from), LineStyleAttrs::SingleColor(to)) => {
            to.color = from.color.clone();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use viaduct_core::{
        color::Color,
        graph::NodePayload,
        station::gzmtr::GzmtrBasicAttrs,
        theme::{CityCode, MonoColour, Theme},
    };

    use super::*;

    fn graph_with_gzmtr_station(id: Id) -> DiagramGraph {
        let mut attrs = GzmtrBasicAttrs::default();
        attrs.names = ["体育西路".to_string(), "Tiyu Xilu".to_string()];
        attrs.color = Theme::new(
            CityCode::new("guangzhou"),
            "gz3",
            Color::new("#ECA154").unwrap(),
            MonoColour::White,
        );

        let mut graph = DiagramGraph::new();
        graph
            .add_node(id, NodePayload::station(StationAttrs::GzmtrBasic(attrs), 0.0, 0.0))
            .unwrap();
        graph
    }

    #[test]
    fn test_switch_carries_names_and_color() {
        let id = Id::new("stn_switch_1");
        let mut graph = graph_with_gzmtr_station(id);

        switch_station_type(&mut graph, id, StationType::ShmetroBasic2020).unwrap();

        let node = graph.node(id).unwrap();
        assert_eq!(node.kind, NodeKind::Station(StationType::ShmetroBasic2020));
        match node.station_attrs().unwrap() {
            StationAttrs::ShmetroBasic2020(attrs) => {
                assert_eq!(attrs.names[0], "体育西路");
                assert_eq!(attrs.color.background(), Color::new("#ECA154").unwrap());
            }
            other => panic!("unexpected attrs: {other:?}"),
        }
    }

    #[test]
    fn test_switch_to_type_without_color_takes_defaults() {
        let id = Id::new("stn_switch_2");
        let mut graph = graph_with_gzmtr_station(id);

        switch_station_type(&mut graph, id, StationType::ShmetroBasic).unwrap();

        let node = graph.node(id).unwrap();
        match node.station_attrs().unwrap() {
            StationAttrs::ShmetroBasic(attrs) => {
                // Only the name pair carries over.
                assert_eq!(attrs.names[0], "体育西路");
            }
            other => panic!("unexpected attrs: {other:?}"),
        }
    }

    #[test]
    fn test_switch_back_restores_cached_bag() {
        let id = Id::new("stn_switch_3");
        let mut graph = graph_with_gzmtr_station(id);

        switch_station_type(&mut graph, id, StationType::ShmetroBasic).unwrap();
        switch_station_type(&mut graph, id, StationType::GzmtrBasic).unwrap();

        let node = graph.node(id).unwrap();
        match node.station_attrs().unwrap() {
            StationAttrs::GzmtrBasic(attrs) => {
                // The original bag, codes and all, came back untouched.
                assert_eq!(attrs.names[0], "体育西路");
                assert_eq!(attrs.color.background(), Color::new("#ECA154").unwrap());
            }
            other => panic!("unexpected attrs: {other:?}"),
        }
    }

    #[test]
    fn test_switch_missing_node_fails() {
        let mut graph = DiagramGraph::new();
        let id = Id::new("stn_switch_missing");

        let err = switch_station_type(&mut graph, id, StationType::Mtr).unwrap_err();
        assert!(matches!(
            err,
            ViaductError::Graph(GraphError::MissingElement(_))
        ));
    }

    #[test]
    fn test_switch_path_type_carries_routing_fields() {
        use viaduct_core::{
            graph::EdgePayload,
            line::{paths::DiagonalPathAttrs, styles::SingleColorAttrs},
        };

        let a = Id::new("stn_edge_a");
        let b = Id::new("stn_edge_b");
        let mut graph = graph_with_gzmtr_station(a);
        graph
            .add_node(b, NodePayload::station(
                StationAttrs::GzmtrBasic(GzmtrBasicAttrs::default()),
                50.0,
                0.0,
            ))
            .unwrap();

        let edge_id = Id::new("line_edge_1");
        let path = LinePathAttrs::Diagonal(DiagonalPathAttrs {
            offset_from: 3.5,
            ..DiagonalPathAttrs::default()
        });
        let style = LineStyleAttrs::SingleColor(SingleColorAttrs::default());
        graph
            .add_edge(edge_id, EdgePayload::new(a, b, path, style))
            .unwrap();

        switch_path_type(&mut graph, edge_id, LinePathType::Perpendicular).unwrap();

        let edge = graph.edge(edge_id).unwrap();
        assert_eq!(edge.path_kind, LinePathType::Perpendicular);
        match edge.current_path_attrs().unwrap() {
            LinePathAttrs::Perpendicular(attrs) => assert_eq!(attrs.offset_from, 3.5),
            other => panic!("unexpected attrs: {other:?}"),
        }
        // The diagonal bag stays cached for switching back.
        assert!(edge.path_attrs.contains_key(&LinePathType::Diagonal));
    }

    #[test]
    fn test_switch_style_type_carries_theme() {
        use viaduct_core::{
            graph::EdgePayload,
            line::{paths::SimplePathAttrs, styles::SingleColorAttrs},
        };

        let a = Id::new("stn_style_a");
        let b = Id::new("stn_style_b");
        let mut graph = graph_with_gzmtr_station(a);
        graph
            .add_node(b, NodePayload::station(
                StationAttrs::GzmtrBasic(GzmtrBasicAttrs::default()),
                50.0,
                0.0,
            ))
            .unwrap();

        let theme = Theme::new(
            CityCode::new("shanghai"),
            "sh4",
            Color::new("#5F259F").unwrap(),
            MonoColour::White,
        );
        let edge_id = Id::new("line_style_1");
        graph
            .add_edge(
                edge_id,
                EdgePayload::new(
                    a,
                    b,
                    LinePathAttrs::Simple(SimplePathAttrs::default()),
                    LineStyleAttrs::SingleColor(SingleColorAttrs {
                        color: theme.clone(),
                    }),
                ),
            )
            .unwrap();

        switch_style_type(&mut graph, edge_id, LineStyleType::River).unwrap();

        let edge = graph.edge(edge_id).unwrap();
        assert_eq!(edge.style_kind, LineStyleType::River);
        match edge.current_style_attrs().unwrap() {
            LineStyleAttrs::River(attrs) => assert_eq!(attrs.color, theme),
            other => panic!("unexpected attrs: {other:?}"),
        }
    }
}
