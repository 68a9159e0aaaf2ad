use serde::Deserialize;
use std::fs;
use std::path::Path;

use anyhow::Context;

/// Options read from a JSON config file, e.g. `{"prettyPrint": true}`
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrinterConfig {
    #[serde(default)]
    pub pretty_print: bool,
    /// Treat the input as an object of message key to message tree
    #[serde(default)]
    pub bundle: bool,
}

impl PrinterConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: PrinterConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Command-line flags only ever switch options on
    pub fn merge_flags(mut self, pretty_print: bool, bundle: bool) -> Self {
        self.pretty_print |= pretty_print;
        self.bundle |= bundle;
        self
    }
}
