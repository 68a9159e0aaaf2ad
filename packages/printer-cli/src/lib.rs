#![deny(clippy::all)]

/**
 * ICU Message Printer CLI
 *
 * Command-line front end that prints parser output as ICU message syntax
 */
pub use icu_message_printer as printer;

pub mod bundle;
pub mod config;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;

use config::PrinterConfig;

/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Read the input file, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

/// Print a single message tree or a bundle, depending on the config
pub fn run(source: &str, config: &PrinterConfig) -> anyhow::Result<String> {
    log::debug!(
        "printing {} (pretty_print: {})",
        if config.bundle { "bundle" } else { "message" },
        config.pretty_print
    );

    if config.bundle {
        bundle::print_bundle_json(source, config.pretty_print)
    } else {
        let printed = printer::print_json(source, config.pretty_print)
            .context("Failed to print message")?;
        Ok(printed)
    }
}
