//! Bundle Printing
//!
//! A bundle is a JSON object of message key to message tree. Printing keeps the
//! input key order.

use icu_message_printer::{print, Message};
use indexmap::IndexMap;
use rayon::prelude::*;

use anyhow::Context;

pub type MessageBundle = IndexMap<String, Message>;

pub fn parse_bundle_json(source: &str) -> anyhow::Result<MessageBundle> {
    let bundle: MessageBundle =
        serde_json::from_str(source).context("Failed to load message bundle")?;
    log::debug!("loaded bundle with {} messages", bundle.len());
    Ok(bundle)
}

pub fn print_bundle(bundle: &MessageBundle, pretty_print: bool) -> IndexMap<String, String> {
    let entries: Vec<(&String, &Message)> = bundle.iter().collect();

    // Collecting an indexed parallel iterator keeps the input order
    let printed: Vec<(String, String)> = entries
        .par_iter()
        .map(|(key, message)| ((*key).clone(), print(message, pretty_print)))
        .collect();

    printed.into_iter().collect()
}

pub fn print_bundle_json(source: &str, pretty_print: bool) -> anyhow::Result<String> {
    let bundle = parse_bundle_json(source)?;
    let printed = print_bundle(&bundle, pretty_print);
    Ok(serde_json::to_string_pretty(&printed)?)
}
