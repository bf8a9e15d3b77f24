use std::fs;

use tempfile::tempdir;

use viaduct_cli::{Args, run};

const VALID_SAVE: &str = r##"{
    "line_num": "2",
    "style": "gzmtr",
    "theme": ["guangzhou", "ln2", "#ff0000", "black"],
    "stn_list": {
        "linestart": {"children": ["a"]},
        "a": {"name": ["甲", "A"], "num": "03", "transfer": {"groups": []}, "children": ["b"]},
        "b": {"name": ["乙", "B"], "num": "04", "transfer": {"groups": []}, "children": ["lineend"]},
        "lineend": {"children": []}
    }
}"##;

const BROKEN_SAVE: &str = r##"{
    "line_num": "2",
    "style": "gzmtr",
    "theme": ["guangzhou", "ln2", "#ff0000", "black"],
    "stn_list": {
        "linestart": {"children": ["a"]},
        "a": {"num": "03", "transfer": {"groups": []}, "children": ["lineend"]},
        "lineend": {"children": []}
    }
}"##;

fn args_for(input: &std::path::Path, output: &std::path::Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        pretty: false,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_save() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("line2.json");
    let output_path = temp_dir.path().join("map.json");
    fs::write(&input_path, VALID_SAVE).expect("Failed to write save");

    let result = run(&args_for(&input_path, &output_path));
    assert!(result.is_ok(), "Import should succeed: {:?}", result.err());

    let document = fs::read_to_string(&output_path).expect("Output file should exist");
    let parsed: serde_json::Value =
        serde_json::from_str(&document).expect("Output should be valid JSON");

    assert_eq!(parsed["nodes"].as_object().unwrap().len(), 2);
    assert_eq!(parsed["edges"].as_object().unwrap().len(), 1);
}

#[test]
fn e2e_smoke_test_broken_save_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("broken.json");
    let output_path = temp_dir.path().join("map.json");
    fs::write(&input_path, BROKEN_SAVE).expect("Failed to write save");

    let result = run(&args_for(&input_path, &output_path));
    assert!(result.is_err(), "Import of a nameless station should fail");

    // Nothing was written on failure.
    assert!(!output_path.exists());
}

#[test]
fn e2e_smoke_test_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("does-not-exist.json");
    let output_path = temp_dir.path().join("map.json");

    let result = run(&args_for(&input_path, &output_path));
    assert!(result.is_err(), "Missing input file should fail");
}
