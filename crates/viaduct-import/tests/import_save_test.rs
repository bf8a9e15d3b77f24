//! End-to-end tests for the line-save importer.

use serde_json::json;

use viaduct_core::{
    color::Color,
    graph::{DiagramGraph, NodeKind},
    station::{StationAttrs, StationType},
};
use viaduct_import::{ImportError, import_line_save, save::LineSave};

fn save_from_json(value: serde_json::Value) -> LineSave {
    serde_json::from_value(value).expect("fixture should deserialize")
}

/// A two-station line in the Guangzhou family, red theme.
fn gzmtr_two_station_save() -> LineSave {
    save_from_json(json!({
        "line_num": "2",
        "style": "gzmtr",
        "theme": ["guangzhou", "ln2", "#ff0000", "black"],
        "stn_list": {
            "linestart": {"children": ["a"]},
            "a": {
                "name": ["甲", "A"],
                "num": "03",
                "transfer": {"groups": []},
                "children": ["b"]
            },
            "b": {
                "name": ["乙", "B"],
                "num": "04",
                "transfer": {"groups": []},
                "children": ["lineend"]
            },
            "lineend": {"children": []}
        }
    }))
}

#[test]
fn test_gzmtr_import_creates_stations_and_edge() {
    let mut graph = DiagramGraph::new();
    import_line_save(&mut graph, &gzmtr_two_station_save()).unwrap();

    // Two stations and one edge; the sentinels produce nothing.
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);

    let red = Color::new("#ff0000").unwrap();
    for (_, node) in graph.nodes() {
        assert_eq!(node.kind, NodeKind::Station(StationType::GzmtrBasic));
        match node.station_attrs().unwrap() {
            StationAttrs::GzmtrBasic(attrs) => {
                assert_eq!(attrs.color.background(), red);
                assert_eq!(attrs.line_code, "2");
            }
            other => panic!("unexpected attrs: {other:?}"),
        }
    }

    let a = graph
        .find_nodes(|_, node| node.primary_name() == Some("甲"))[0];
    let b = graph
        .find_nodes(|_, node| node.primary_name() == Some("乙"))[0];
    let (_, edge) = graph.edges().next().unwrap();
    assert_eq!(edge.source, a);
    assert_eq!(edge.target, b);
    assert_eq!(edge.reconcile_id, "");
}

#[test]
fn test_imported_stations_line_up_left_to_right() {
    let mut graph = DiagramGraph::new();
    import_line_save(&mut graph, &gzmtr_two_station_save()).unwrap();

    let positions: Vec<(f64, f64)> = graph.nodes().map(|(_, node)| (node.x, node.y)).collect();
    assert_eq!(positions, vec![(100.0, 1000.0), (150.0, 1000.0)]);
}

#[test]
fn test_reimport_is_node_idempotent_and_edge_additive() {
    let mut graph = DiagramGraph::new();
    let save = gzmtr_two_station_save();

    import_line_save(&mut graph, &save).unwrap();
    import_line_save(&mut graph, &save).unwrap();

    // Stations matched by primary name are reused; adjacencies always add.
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_shmetro_without_interchange_is_basic() {
    let save = save_from_json(json!({
        "line_num": "1",
        "style": "shmetro",
        "theme": ["shanghai", "sh1", "#E3002B", "white"],
        "stn_list": {
            "linestart": {"children": ["a"]},
            "a": {
                "name": ["汉中路", "Hanzhong Road"],
                "num": "08",
                "transfer": {"groups": []},
                "children": ["lineend"]
            },
            "lineend": {"children": []}
        }
    }));

    let mut graph = DiagramGraph::new();
    import_line_save(&mut graph, &save).unwrap();

    let (_, node) = graph.nodes().next().unwrap();
    assert_eq!(node.kind, NodeKind::Station(StationType::ShmetroBasic));
}

#[test]
fn test_shmetro_panel_flag_selects_2020_variant() {
    let save = save_from_json(json!({
        "info_panel_type": "sh2020",
        "line_num": "1",
        "style": "shmetro",
        "theme": ["shanghai", "sh1", "#E3002B", "white"],
        "stn_list": {
            "linestart": {"children": ["a"]},
            "a": {
                "name": ["汉中路", "Hanzhong Road"],
                "num": "08",
                "transfer": {"groups": []},
                "children": ["lineend"]
            },
            "lineend": {"children": []}
        }
    }));

    let mut graph = DiagramGraph::new();
    import_line_save(&mut graph, &save).unwrap();

    let (_, node) = graph.nodes().next().unwrap();
    assert_eq!(node.kind, NodeKind::Station(StationType::ShmetroBasic2020));
    match node.station_attrs().unwrap() {
        StationAttrs::ShmetroBasic2020(attrs) => {
            assert_eq!(attrs.color.background(), Color::new("#E3002B").unwrap());
        }
        other => panic!("unexpected attrs: {other:?}"),
    }
}

#[test]
fn test_shmetro_with_interchange_is_int_with_transfer_rows() {
    let save = save_from_json(json!({
        "line_num": "1",
        "style": "shmetro",
        "theme": ["shanghai", "sh1", "#E3002B", "white"],
        "stn_list": {
            "linestart": {"children": ["a"]},
            "a": {
                "name": ["人民广场", "People's Square"],
                "num": "15",
                "transfer": {"groups": [
                    {"lines": [
                        {"theme": ["shanghai", "sh2", "#97D700", "black"]},
                        {"theme": ["shanghai", "sh8", "#009DD9", "white"]}
                    ]}
                ]},
                "children": ["lineend"]
            },
            "lineend": {"children": []}
        }
    }));

    let mut graph = DiagramGraph::new();
    import_line_save(&mut graph, &save).unwrap();

    let (_, node) = graph.nodes().next().unwrap();
    assert_eq!(node.kind, NodeKind::Station(StationType::ShmetroInt));
    match node.station_attrs().unwrap() {
        StationAttrs::ShmetroInt(attrs) => {
            assert_eq!(attrs.transfer.len(), 1);
            // Own line leads row 0, followed by the two interchange lines.
            assert_eq!(attrs.transfer[0].len(), 3);
            assert_eq!(attrs.transfer[0][0].line_code, "1");
            assert_eq!(attrs.transfer[0][0].station_code, "15");
        }
        other => panic!("unexpected attrs: {other:?}"),
    }
}

#[test]
fn test_gzmtr_interchange_rows_carry_own_codes_first() {
    let save = save_from_json(json!({
        "line_num": "3",
        "style": "gzmtr",
        "theme": ["guangzhou", "gz3", "#ECA154", "white"],
        "stn_list": {
            "linestart": {"children": ["a"]},
            "a": {
                "name": ["体育西路", "Tiyu Xilu"],
                "num": "07",
                "transfer": {"groups": [
                    {"lines": [{"theme": ["guangzhou", "gz1", "#F3D03E", "black"]}]},
                    {"lines": [{"theme": ["guangzhou", "gz5", "#C5003E", "white"]}]}
                ]},
                "children": ["lineend"]
            },
            "lineend": {"children": []}
        }
    }));

    let mut graph = DiagramGraph::new();
    import_line_save(&mut graph, &save).unwrap();

    let (_, node) = graph.nodes().next().unwrap();
    match node.station_attrs().unwrap() {
        StationAttrs::GzmtrInt(attrs) => {
            assert_eq!(attrs.transfer.len(), 2);
            assert_eq!(attrs.transfer[0][0].line_code, "3");
            assert_eq!(attrs.transfer[0][0].station_code, "07");
            // Every other entry takes the placeholder codes.
            assert_eq!(attrs.transfer[0][1].line_code, "1");
            assert_eq!(attrs.transfer[1][0].station_code, "01");
        }
        other => panic!("unexpected attrs: {other:?}"),
    }
}

#[test]
fn test_mtr_transfer_keeps_group_zero_only() {
    let save = save_from_json(json!({
        "line_num": "TWL",
        "style": "mtr",
        "theme": ["hongkong", "twl", "#E2231A", "white"],
        "stn_list": {
            "linestart": {"children": ["a"]},
            "a": {
                "name": ["金钟", "Admiralty"],
                "num": "",
                "transfer": {"groups": [
                    {"lines": [
                        {"theme": ["hongkong", "isl", "#0071CE", "white"]},
                        {"theme": ["hongkong", "sil", "#B5BD00", "black"]}
                    ]},
                    {"lines": [{"theme": ["hongkong", "eal", "#53B7E8", "black"]}]}
                ]},
                "children": ["lineend"]
            },
            "lineend": {"children": []}
        }
    }));

    let mut graph = DiagramGraph::new();
    import_line_save(&mut graph, &save).unwrap();

    let (_, node) = graph.nodes().next().unwrap();
    assert_eq!(node.kind, NodeKind::Station(StationType::Mtr));
    match node.station_attrs().unwrap() {
        StationAttrs::Mtr(attrs) => {
            // One row: own line plus group 0's two lines; group 1 is dropped.
            assert_eq!(attrs.transfer.len(), 1);
            assert_eq!(attrs.transfer[0].len(), 3);
            assert!(attrs.transfer[0].iter().all(|info| info.line_code.is_empty()));
        }
        other => panic!("unexpected attrs: {other:?}"),
    }
}

#[test]
fn test_failed_record_keeps_earlier_commits() {
    let save = save_from_json(json!({
        "line_num": "1",
        "style": "gzmtr",
        "theme": ["guangzhou", "gz1", "#F3D03E", "black"],
        "stn_list": {
            "linestart": {"children": ["s1"]},
            "s1": {"name": ["一", "One"], "num": "01", "transfer": {"groups": []}, "children": ["s2"]},
            "s2": {"name": ["二", "Two"], "num": "02", "transfer": {"groups": []}, "children": ["s3"]},
            "s3": {"num": "03", "transfer": {"groups": []}, "children": ["s4"]},
            "s4": {"name": ["四", "Four"], "num": "04", "transfer": {"groups": []}, "children": ["s5"]},
            "s5": {"name": ["五", "Five"], "num": "05", "transfer": {"groups": []}, "children": ["lineend"]},
            "lineend": {"children": []}
        }
    }));

    let mut graph = DiagramGraph::new();
    let err = import_line_save(&mut graph, &save).unwrap_err();

    assert_eq!(
        err,
        ImportError::MissingName {
            station: "s3".to_string()
        }
    );
    // The two records processed before the failure stay committed.
    assert_eq!(graph.node_count(), 2);
    assert!(!graph.find_nodes(|_, n| n.primary_name() == Some("一")).is_empty());
    assert!(!graph.find_nodes(|_, n| n.primary_name() == Some("二")).is_empty());
}

#[test]
fn test_malformed_transfer_names_offending_station() {
    let save = save_from_json(json!({
        "line_num": "1",
        "style": "mtr",
        "theme": ["hongkong", "twl", "#E2231A", "white"],
        "stn_list": {
            "linestart": {"children": ["a"]},
            "a": {"name": ["金钟", "Admiralty"], "num": "", "children": ["lineend"]},
            "lineend": {"children": []}
        }
    }));

    let mut graph = DiagramGraph::new();
    let err = import_line_save(&mut graph, &save).unwrap_err();

    assert_eq!(
        err,
        ImportError::MalformedTransfer {
            station: "a".to_string()
        }
    );
    assert_eq!(graph.node_count(), 0);
}

#[test]
fn test_unknown_child_names_offending_station() {
    let save = save_from_json(json!({
        "line_num": "1",
        "style": "gzmtr",
        "theme": ["guangzhou", "gz1", "#F3D03E", "black"],
        "stn_list": {
            "linestart": {"children": ["a"]},
            "a": {"name": ["甲", "A"], "num": "01", "transfer": {"groups": []}, "children": ["ghost"]},
            "lineend": {"children": []}
        }
    }));

    let mut graph = DiagramGraph::new();
    let err = import_line_save(&mut graph, &save).unwrap_err();

    assert_eq!(
        err,
        ImportError::UnknownChild {
            station: "a".to_string(),
            child: "ghost".to_string()
        }
    );
    // The station itself was committed before the adjacency failed.
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_import_into_populated_graph_keeps_existing_elements() {
    let mut graph = DiagramGraph::new();
    import_line_save(&mut graph, &gzmtr_two_station_save()).unwrap();

    // A second line sharing station 甲 by name reuses that node.
    let second = save_from_json(json!({
        "line_num": "8",
        "style": "gzmtr",
        "theme": ["guangzhou", "gz8", "#008093", "white"],
        "stn_list": {
            "linestart": {"children": ["x"]},
            "x": {"name": ["甲", "A"], "num": "21", "transfer": {"groups": []}, "children": ["y"]},
            "y": {"name": ["丙", "C"], "num": "22", "transfer": {"groups": []}, "children": ["lineend"]},
            "lineend": {"children": []}
        }
    }));
    import_line_save(&mut graph, &second).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);

    let shared = graph.find_nodes(|_, n| n.primary_name() == Some("甲"));
    assert_eq!(shared.len(), 1);
}
