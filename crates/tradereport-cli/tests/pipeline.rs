//! End-to-end: config file -> data + template -> JSON output.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;
use std::path::Path;

use serde_json::Value;
use tradereport_cli::{app::ReportApp, config};

const DATA: &str = r#"const data = {
    "currency": "USD",
    "all_trades": {
        "1000": { "group": "trade", "id": 1000, "subgroup": "undefined", "title": "Num. Trades", "value": 1000, "help": "The total number of trades" },
        "1020": { "group": "trade", "id": 1020, "subgroup": "undefined", "title": "Total Net Profit", "value": 1020 },
        "1011": { "group": "trade", "id": 1011, "subgroup": "undefined", "title": "Avg. Net Trade Profit", "value": 1234.5 }
    },
    "long_only": {
        "1011": { "group": "trade", "id": 1011, "subgroup": "undefined", "title": "Avg. Net Trade Profit", "value": -1234.5 }
    },
    "short_only": {}
};
"#;

const TEMPLATE: &str = r#"
elements:
  - classes: [currency]
  - id: "1000_A"
  - id: "help_1000_A"
  - id: "1011_A"
  - id: "1011_L"
  - id: "1020_A_1"
  - id: "1020_A_2"
  - id: "toggle-trade"
    classes: [toggle-img]
    attributes: { data-target: "trade-section" }
    style: { background-image: 'url("img/toggle1.png")' }
  - classes: [trade-section]
"#;

fn write_fixture(dir: &Path, mode: &str) -> std::path::PathBuf {
    fs::write(dir.join("data.js"), DATA).unwrap();
    fs::write(dir.join("template.yaml"), TEMPLATE).unwrap();
    let cfg = format!(
        "version: 1\ninput:\n  data: data.js\n  template: template.yaml\noutput:\n  path: out.json\n  mode: {mode}\n"
    );
    let path = dir.join("tradereport.yaml");
    fs::write(&path, cfg).unwrap();
    path
}

fn text_of<'a>(elements: &'a [Value], id: &str) -> &'a str {
    elements
        .iter()
        .find(|e| e["id"] == id)
        .and_then(|e| e["text"].as_str())
        .unwrap_or_else(|| panic!("no element {id}"))
}

#[test]
fn document_mode_writes_bound_elements() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config::load_from_file(write_fixture(dir.path(), "document")).unwrap();

    let app = ReportApp::new(cfg).unwrap();
    let rendered = app.run().unwrap();
    app.write_output(&rendered).unwrap();

    let out: Value = serde_json::from_str(&fs::read_to_string(dir.path().join("out.json")).unwrap()).unwrap();
    let elements = out["elements"].as_array().unwrap();

    assert_eq!(elements[0]["text"], "USD");
    assert_eq!(text_of(elements, "1000_A"), "1,000.00");
    assert_eq!(text_of(elements, "1011_A"), "1,234.50");
    // long row shows all_trades[1011], not its own -1234.5
    assert_eq!(text_of(elements, "1011_L"), "1,234.50");
    assert_eq!(text_of(elements, "1020_A_1"), "1020");
    assert_eq!(text_of(elements, "1020_A_2"), "");

    let help = elements.iter().find(|e| e["id"] == "help_1000_A").unwrap();
    assert_eq!(help["attributes"]["title"], "The total number of trades");

    assert_eq!(out["summary"]["currency_nodes"], 1);
    assert_eq!(out["summary"]["toggles"], 1);
    assert_eq!(out["summary"]["collections"]["long_only"]["written"], 1);
}

#[test]
fn wired_document_toggles_on_click() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config::load_from_file(write_fixture(dir.path(), "document")).unwrap();
    let app = ReportApp::new(cfg).unwrap();

    let (mut doc, _) = app.render_document().unwrap();
    doc.click_id("toggle-trade").unwrap();

    let last = doc.elements().last().unwrap();
    assert!(last.has_class("hide"));
    let control = doc.elements().iter().find(|e| e.id.as_deref() == Some("toggle-trade")).unwrap();
    assert_eq!(control.style["background-image"], r#"url("img/toggle2.png")"#);
}

#[test]
fn plan_mode_lists_bindings() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config::load_from_file(write_fixture(dir.path(), "plan")).unwrap();
    let app = ReportApp::new(cfg).unwrap();

    let out: Value = serde_json::from_str(&app.run().unwrap()).unwrap();
    assert_eq!(out["currency"], "USD");

    let all = out["collections"]["all_trades"].as_array().unwrap();
    // 1000 and 1011: one text binding each; 1020: one split binding
    assert_eq!(all.len(), 3);
    let trades = all.iter().find(|b| b["id"] == "1000_A").unwrap();
    assert_eq!(trades["op"], "text");
    assert_eq!(trades["help"]["id"], "help_1000_A");
    assert_eq!(trades["help"]["value"], "The total number of trades");
    let split = all.iter().find(|b| b["op"] == "split_text").unwrap();
    assert_eq!(split["ids"][0], "1020_A_1");
    assert_eq!(split["texts"][1], "");

    assert!(out["collections"]["short_only"].as_array().unwrap().is_empty());
}

#[test]
fn missing_data_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "document");
    fs::remove_file(dir.path().join("data.js")).unwrap();

    let cfg = config::load_from_file(path).unwrap();
    let err = ReportApp::new(cfg).err().expect("must fail");
    assert_eq!(err.code().as_str(), "IO");
}
