//! The line-save importer.
//!
//! Converts a legacy line save into nodes and edges of a [`DiagramGraph`]:
//! infers each station's concrete type from the save's rendering family,
//! synthesizes transfer attributes through the interchange resolver, and
//! wires the declared adjacencies as diagonal single-color edges.

use indexmap::IndexMap;
use log::{debug, info};

use viaduct_core::{
    graph::{DiagramGraph, EdgePayload, NodePayload},
    identifier::Id,
    line::{LinePathType, LineStyleAttrs, styles::SingleColorAttrs},
    registry::ElementRegistry,
    station::{StationAttrs, StationType},
};

use crate::{
    error::ImportError,
    interchange::{interchange_rows, unified_row},
    save::{LineSave, SaveStyle, StationRecord, is_sentinel},
};

/// Panel-type flag selecting the 2020 livery for Shanghai-style saves.
const SH2020_PANEL: &str = "sh2020";

/// Where newly imported stations are placed: a row at a fixed ordinate,
/// stepping right per station, so a fresh line is viewable before any
/// layout pass runs.
const NEW_STATION_X_BASE: f64 = 100.0;
const NEW_STATION_X_STEP: f64 = 50.0;
const NEW_STATION_Y: f64 = 1000.0;

struct PlannedStation<'a> {
    external: &'a str,
    record: &'a StationRecord,
    id: Id,
    existing: bool,
}

/// Imports a legacy line save into the graph.
///
/// Stations whose primary name already appears on a station node are reused
/// instead of duplicated, so re-importing the same line adds no nodes; the
/// declared adjacencies always produce new edges.
///
/// # Errors
///
/// Returns [`ImportError`] naming the offending external id when a record is
/// missing its name pair, has a malformed transfer block, or links to an
/// undefined station. The import stops there: nodes and edges committed by
/// earlier records are **not** rolled back.
pub fn import_line_save(graph: &mut DiagramGraph, save: &LineSave) -> Result<(), ImportError> {
    let registry = ElementRegistry::standard();

    // Map external ids to graph ids, reusing same-named stations already on
    // the canvas. The search runs against the pre-import graph.
    let mut planned: Vec<PlannedStation> = Vec::new();
    for (external, record) in &save.stn_list {
        if is_sentinel(external) {
            continue;
        }
        let matched = record.name.as_ref().and_then(|names| {
            graph
                .find_nodes(|_, node| {
                    node.kind.is_station() && node.primary_name() == Some(names[0].as_str())
                })
                .first()
                .copied()
        });
        planned.push(PlannedStation {
            external,
            record,
            id: matched.unwrap_or_else(Id::fresh_station),
            existing: matched.is_some(),
        });
    }

    // Create the stations that are not on the canvas yet.
    let mut created = 0usize;
    for plan in &planned {
        if plan.existing {
            debug!(external = plan.external; "Station already on canvas, reusing");
            continue;
        }

        let names = plan.record.name.as_ref().ok_or_else(|| ImportError::MissingName {
            station: plan.external.to_string(),
        })?;
        let groups = plan
            .record
            .transfer
            .as_ref()
            .and_then(|transfer| transfer.groups.as_deref())
            .ok_or_else(|| ImportError::MalformedTransfer {
                station: plan.external.to_string(),
            })?;

        let has_interchange = groups.iter().any(|group| !group.lines.is_empty());
        let ty = match save.style {
            SaveStyle::Shmetro if has_interchange => StationType::ShmetroInt,
            SaveStyle::Shmetro if save.info_panel_type.as_deref() == Some(SH2020_PANEL) => {
                StationType::ShmetroBasic2020
            }
            SaveStyle::Shmetro => StationType::ShmetroBasic,
            SaveStyle::Gzmtr if has_interchange => StationType::GzmtrInt,
            SaveStyle::Gzmtr => StationType::GzmtrBasic,
            SaveStyle::Mtr => StationType::Mtr,
        };

        let descriptor = registry.station(ty).map_err(|source| ImportError::Registry {
            station: plan.external.to_string(),
            source,
        })?;

        let mut attrs = descriptor.default_attrs();
        attrs.set_names(names.clone());

        let num = plan.record.num.clone().unwrap_or_default();
        match &mut attrs {
            StationAttrs::ShmetroBasic(_) => {}
            StationAttrs::ShmetroBasic2020(a) => a.color = save.theme.clone(),
            StationAttrs::ShmetroInt(a) => {
                a.transfer = interchange_rows(groups, &save.theme, &save.line_num, &num);
            }
            StationAttrs::GzmtrBasic(a) => {
                a.color = save.theme.clone();
                a.line_code = save.line_num.clone();
                a.station_code = num.clone();
            }
            StationAttrs::GzmtrInt(a) => {
                a.transfer = interchange_rows(groups, &save.theme, &save.line_num, &num);
            }
            StationAttrs::Mtr(a) => a.transfer = unified_row(groups, &save.theme),
        }

        let payload = NodePayload::station(
            attrs,
            NEW_STATION_X_BASE + NEW_STATION_X_STEP * created as f64,
            NEW_STATION_Y,
        );
        graph
            .add_node(plan.id, payload)
            .map_err(|source| ImportError::Graph {
                station: plan.external.to_string(),
                source,
            })?;
        created += 1;
        debug!(external = plan.external, station_type = ty.to_string(); "Station imported");
    }

    // Wire the declared adjacencies. Every adjacency gets a fresh edge even
    // when both endpoints were reused.
    let id_map: IndexMap<&str, Id> = planned
        .iter()
        .map(|plan| (plan.external, plan.id))
        .collect();

    let mut edges = 0usize;
    for plan in &planned {
        for child in &plan.record.children {
            if is_sentinel(child) {
                continue;
            }
            let target =
                *id_map
                    .get(child.as_str())
                    .ok_or_else(|| ImportError::UnknownChild {
                        station: plan.external.to_string(),
                        child: child.clone(),
                    })?;

            let path = registry
                .line_path(LinePathType::Diagonal)
                .map_err(|source| ImportError::Registry {
                    station: plan.external.to_string(),
                    source,
                })?
                .default_attrs();
            let style = LineStyleAttrs::SingleColor(SingleColorAttrs {
                color: save.theme.clone(),
            });

            graph
                .add_edge(Id::fresh_line(), EdgePayload::new(plan.id, target, path, style))
                .map_err(|source| ImportError::Graph {
                    station: plan.external.to_string(),
                    source,
                })?;
            edges += 1;
        }
    }

    info!(
        stations_added = created,
        stations_reused = planned.len() - created,
        edges_added = edges;
        "Line save imported"
    );

    Ok(())
}
