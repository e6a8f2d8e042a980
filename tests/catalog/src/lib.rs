//! Shared harness for the catalog tests.
//!
//! Fixtures under `fixtures/` are response bodies captured from the Authlete
//! API, trimmed to the fields the tests look at.

use std::path::PathBuf;
use std::sync::Once;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Installs a test subscriber honouring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Path of a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Reads a fixture as a string.
pub fn fixture(name: &str) -> anyhow::Result<String> {
    let path = fixture_path(name);
    std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
}

/// Reads a fixture as JSON.
pub fn fixture_json(name: &str) -> anyhow::Result<serde_json::Value> {
    let body = fixture(name)?;
    serde_json::from_str(&body).with_context(|| format!("parsing {name}"))
}
