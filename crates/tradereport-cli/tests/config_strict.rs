#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tradereport_cli::config::{self, OutputMode};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
input:
  data: "data.js"
  template: "template.yaml"
binder:
  hide_clas: "hidden" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
input:
  data: "data.js"
  template: "template.yaml"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.output.mode, OutputMode::Document);
    assert!(cfg.output.path.is_none());
    assert_eq!(cfg.binder.currency_class, "currency");
    assert_eq!(cfg.binder.toggle_class, "toggle-img");
    assert_eq!(cfg.binder.hide_class, "hide");
    assert_eq!(cfg.binder.help_fallback, "not found");
}

#[test]
fn unsupported_version() {
    let bad = r#"
version: 2
input:
  data: "data.js"
output:
  mode: plan
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn document_mode_needs_template() {
    let bad = r#"
version: 1
input:
  data: "data.json"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");

    let ok = r#"
version: 1
input:
  data: "data.json"
output:
  mode: plan
"#;
    assert!(config::load_from_str(ok).is_ok());
}

#[test]
fn binder_names_must_be_single_tokens() {
    let bad = r#"
version: 1
input:
  data: "data.json"
  template: "t.yaml"
binder:
  currency_class: "two words"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}
