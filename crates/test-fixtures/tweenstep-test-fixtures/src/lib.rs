//! Golden stepping runs shared by the core and driver test suites.
//!
//! Each run fixture names a curve family and phase, the animation parameters,
//! optional curve extras and the exact positions a run must deliver.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    runs: HashMap<String, String>,
}

pub mod runs {
    use serde::de::DeserializeOwned;

    use super::*;

    /// Fixture names in sorted order.
    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.runs.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Raw JSON text of the named run.
    pub fn json(name: &str) -> Result<String> {
        let rel = MANIFEST
            .runs
            .get(name)
            .ok_or_else(|| anyhow!("unknown run fixture '{name}'"))?;
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures").join(rel);
        std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read run fixture at {}", path.display()))
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let text = json(name)?;
        serde_json::from_str(&text).with_context(|| format!("failed to parse run fixture {name}"))
    }
}
