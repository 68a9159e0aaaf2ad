#![allow(dead_code)]

/**
 * Printer Test Utilities
 *
 * Shorthand builders for message trees
 */
use icu_message_printer::{Element, Format, FormatOption, Message};

pub fn message(elements: Vec<Element>) -> Message {
    Message::new(elements)
}

pub fn text(value: &str) -> Element {
    Element::text(value)
}

pub fn arg(id: &str) -> Element {
    Element::argument(id, None)
}

pub fn formatted(id: &str, format: Format) -> Element {
    Element::argument(id, Some(format))
}

pub fn option(selector: &str, elements: Vec<Element>) -> FormatOption {
    FormatOption::new(selector, Message::new(elements))
}

/// `{count, plural, offset:1,one {1 item}other {# items}}`
pub fn items_plural(ordinal: bool) -> Message {
    let options = vec![
        option("one", vec![text("1 item")]),
        option("other", vec![text("# items")]),
    ];
    let format = if ordinal {
        Format::select_ordinal(Some(1), options)
    } else {
        Format::plural(Some(1), options)
    };
    message(vec![formatted("count", format)])
}
