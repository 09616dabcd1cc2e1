//! Config command implementation

use crate::output::OutputWriter;
use crate::output_types::{source_label, ConfigEntry, ConfigOutput};
use anyhow::Result;
use geopin_core::config::LayeredConfig;
use std::path::Path;

pub fn execute(config: &LayeredConfig, path: Option<&Path>, output: &OutputWriter) -> Result<()> {
    let entries: Vec<ConfigEntry> = config
        .to_inspection_list()
        .into_iter()
        .map(|(key, value, source)| ConfigEntry {
            key: key.to_string(),
            value,
            source: source_label(source),
        })
        .collect();

    if output.is_json() {
        return output.result(ConfigOutput {
            path: path.map(|p| p.display().to_string()),
            entries,
        });
    }

    output.section("Configuration");
    match path {
        Some(path) => output.kv("File", path.display()),
        None => output.kv("File", "(none, using defaults and environment)"),
    }
    output.table(entries);
    Ok(())
}
