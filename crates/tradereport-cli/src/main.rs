//! tradereport: bind a trading-report dataset into a report template.
//!
//! Usage: `tradereport [config.yaml]` (default `tradereport.yaml`).
//! Log level via `RUST_LOG`.

use tracing_subscriber::{fmt, EnvFilter};

use tradereport_cli::{app::ReportApp, config};
use tradereport_core::Result;

fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tradereport.yaml".to_string());

    if let Err(e) = run(&path) {
        tracing::error!(code = e.code().as_str(), error = %e, config = %path, "tradereport failed");
        std::process::exit(1);
    }
}

fn run(path: &str) -> Result<()> {
    let cfg = config::load_from_file(path)?;
    let app = ReportApp::new(cfg)?;
    let rendered = app.run()?;
    app.write_output(&rendered)
}
