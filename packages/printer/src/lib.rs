#![deny(clippy::all)]

/**
 * ICU Message Printer
 *
 * Serializes a parsed ICU message tree back into message syntax
 */
pub mod argument_type;
pub mod ast;
pub mod error;
pub mod escape;
pub mod printer;

// Re-exports
pub use argument_type::ArgumentType;
pub use ast::{ArgumentElement, ArgumentId, Element, Format, FormatOption, Message, TextElement};
pub use error::{PrintError, Result};
pub use escape::escape_text;
pub use printer::{print, print_message, MessagePrinter};

/// Load a message tree from the parser's JSON output
pub fn parse_message_json(source: &str) -> Result<Message> {
    let message: Message = serde_json::from_str(source)?;
    log::debug!("loaded message with {} elements", message.elements.len());
    Ok(message)
}

/// Load a message tree from JSON and print it
pub fn print_json(source: &str, pretty_print: bool) -> Result<String> {
    let message = parse_message_json(source)?;
    Ok(print(&message, pretty_print))
}
