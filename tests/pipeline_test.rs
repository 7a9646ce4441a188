//! End-to-end runs over component trees built on disk.

use std::fs;
use std::path::Path;

use component_metadata::{OUTPUT_PATH, Pipeline, ReactExtractor};
use serde_json::{Value, json};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn pipeline(root: &Path) -> Pipeline {
    Pipeline::new(root, Box::new(ReactExtractor::new().unwrap()))
}

fn run(root: &Path) -> Value {
    pipeline(root).run().unwrap();
    let written = fs::read_to_string(root.join(OUTPUT_PATH)).unwrap();
    serde_json::from_str(&written).unwrap()
}

fn records(output: &Value) -> &Vec<Value> {
    output["metadata"].as_array().unwrap()
}

const BUTTON: &str = r#"
import React from 'react';
import PropTypes from 'prop-types';

/** Clickable button. */
const Button = ({ label, appearance = 'primary' }) => <button className={appearance}>{label}</button>;

Button.propTypes = {
  /** Text on the button */
  label: PropTypes.string.isRequired,
  appearance: PropTypes.oneOf(['primary', 'secondary']),
};

export default Button;
"#;

const CARD: &str = r#"
import React from 'react';
import Header from './Header';

/** Content container. */
export default class Card extends React.Component {
  render() {
    return <div><Header /></div>;
  }
}
"#;

const CARD_HEADER: &str = r#"
import React from 'react';
export default () => <header />;
"#;

fn library(root: &Path) {
    write(root, "src/components/atoms/Button.js", BUTTON);
    write(root, "src/components/atoms/Button.md", "# Button\n\nUse it.\n");
    write(root, "src/components/atoms/Link.js", "export default () => <a />;\n");
    write(root, "src/components/atoms/Legacy.md", "# Legacy\n");
    write(root, "src/components/atoms/Broken.js", "export default class {\n");
    write(root, "src/components/atoms/Broken.md", "# Broken docs\n");
    write(root, "src/components/molecules/Card/index.js", CARD);
    write(root, "src/components/molecules/Card/Header.js", CARD_HEADER);
    write(root, "src/components/molecules/Card/Card.md", "# Card\n");
}

#[test]
fn test_empty_tree_writes_empty_metadata() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path());

    assert_eq!(output, json!({ "metadata": [] }));
    let text = fs::read_to_string(temp_dir.path().join(OUTPUT_PATH)).unwrap();
    assert_eq!(text, "{\n  \"metadata\": []\n}");
}

#[test]
fn test_full_library_pairing_and_order() {
    let temp_dir = TempDir::new().unwrap();
    library(temp_dir.path());

    let output = run(temp_dir.path());
    let paths: Vec<_> = records(&output)
        .iter()
        .map(|r| r["filepath"].as_str().unwrap())
        .collect();

    // sources in path order (Broken fails, Header is secondary), then orphans
    assert_eq!(
        paths,
        vec![
            "src/components/atoms/Button.js",
            "src/components/atoms/Link.js",
            "src/components/molecules/Card/index.js",
            "src/components/atoms/Broken.md",
            "src/components/atoms/Legacy.md",
        ]
    );
}

#[test]
fn test_atom_paired_with_documentation() {
    let temp_dir = TempDir::new().unwrap();
    library(temp_dir.path());

    let output = run(temp_dir.path());
    let button = &records(&output)[0];

    assert_eq!(button["displayName"], "Button");
    assert_eq!(button["documentation"], "# Button\n\nUse it.\n");
    assert_eq!(button["description"], "Clickable button.");
    assert_eq!(button["props"]["label"]["required"], true);
    assert_eq!(button["props"]["label"]["description"], "Text on the button");
    assert_eq!(
        button["props"]["appearance"]["defaultValue"],
        json!({ "value": "'primary'", "computed": false })
    );
}

#[test]
fn test_atom_without_documentation_has_no_field() {
    let temp_dir = TempDir::new().unwrap();
    library(temp_dir.path());

    let output = run(temp_dir.path());
    let link = &records(&output)[1];

    assert_eq!(link["filepath"], "src/components/atoms/Link.js");
    assert_eq!(link["displayName"], "Link");
    assert!(link.get("documentation").is_none());
}

#[test]
fn test_molecule_paired_with_directory_named_doc() {
    let temp_dir = TempDir::new().unwrap();
    library(temp_dir.path());

    let output = run(temp_dir.path());
    let card = &records(&output)[2];

    assert_eq!(card["displayName"], "Card");
    assert_eq!(card["description"], "Content container.");
    assert_eq!(card["documentation"], "# Card\n");
}

#[test]
fn test_orphan_documentation_record() {
    let temp_dir = TempDir::new().unwrap();
    library(temp_dir.path());

    let output = run(temp_dir.path());
    let legacy = &records(&output)[4];

    assert_eq!(
        legacy,
        &json!({
            "filepath": "src/components/atoms/Legacy.md",
            "displayName": "Legacy",
            "documentation": "# Legacy\n",
        })
    );
}

#[test]
fn test_every_documentation_file_appears_exactly_once() {
    let temp_dir = TempDir::new().unwrap();
    library(temp_dir.path());

    let output = run(temp_dir.path());
    for doc in ["# Button\n\nUse it.\n", "# Legacy\n", "# Broken docs\n", "# Card\n"] {
        let count = records(&output)
            .iter()
            .filter(|r| r["documentation"] == doc)
            .count();
        assert_eq!(count, 1, "documentation {doc:?} appears {count} times");
    }
}

#[test]
fn test_failed_extraction_excluded_but_run_completes() {
    let temp_dir = TempDir::new().unwrap();
    library(temp_dir.path());

    let summary = pipeline(temp_dir.path()).run().unwrap();
    assert_eq!(summary.components, 3);
    assert_eq!(summary.documented, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.orphans, 2);

    let output: Value = serde_json::from_str(
        &fs::read_to_string(temp_dir.path().join(OUTPUT_PATH)).unwrap(),
    )
    .unwrap();
    assert!(
        records(&output)
            .iter()
            .all(|r| r["filepath"] != "src/components/atoms/Broken.js")
    );
}

#[test]
fn test_rerun_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    library(temp_dir.path());
    let output_path = temp_dir.path().join(OUTPUT_PATH);

    let mut pipeline = pipeline(temp_dir.path());
    pipeline.run().unwrap();
    let first = fs::read(&output_path).unwrap();
    pipeline.run().unwrap();
    let second = fs::read(&output_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_output_overwritten_not_merged() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, OUTPUT_PATH, r#"{"metadata":[{"filepath":"stale.js"}],"extra":1}"#);
    write(root, "src/components/atoms/Legacy.md", "# Legacy\n");

    let output = run(root);
    assert!(output.get("extra").is_none());
    assert_eq!(records(&output).len(), 1);
    assert_eq!(records(&output)[0]["filepath"], "src/components/atoms/Legacy.md");
}

#[test]
fn test_invalid_root_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");

    let err = pipeline(&missing).run().unwrap_err();
    assert!(err.to_string().contains("is not a directory"));
}

#[test]
fn test_non_utf8_documentation_kept_with_replacement() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "src/components/atoms/Button.js", BUTTON);
    let atoms = root.join("src/components/atoms");
    fs::write(atoms.join("Button.md"), b"# Caf\xe9\n").unwrap();
    fs::write(atoms.join("Legacy.md"), b"# Legacy \xff\n").unwrap();

    let output = run(root);
    let records = records(&output);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["filepath"], "src/components/atoms/Button.js");
    assert_eq!(records[0]["documentation"], "# Caf\u{FFFD}\n");
    assert_eq!(records[1]["filepath"], "src/components/atoms/Legacy.md");
    assert_eq!(records[1]["documentation"], "# Legacy \u{FFFD}\n");
}
