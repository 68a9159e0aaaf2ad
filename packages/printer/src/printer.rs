//! Message Printer
//!
//! Turns a message AST back into ICU message syntax. Nested option values are
//! printed with the same visitor, always in compact form.

use crate::argument_type::ArgumentType;
use crate::ast::{ArgumentElement, Element, Format, FormatOption, Message, TextElement};
use crate::escape::escape_text;

/// Indentation of option lines in pretty mode
const PRETTY_INDENT: &str = "   ";

/// ICU message printer visitor
#[derive(Debug, Clone, Copy, Default)]
pub struct MessagePrinter {
    pretty_print: bool,
}

impl MessagePrinter {
    pub fn new(pretty_print: bool) -> Self {
        MessagePrinter { pretty_print }
    }

    pub fn visit_message(&self, message: &Message) -> String {
        message
            .elements
            .iter()
            .map(|element| self.visit_element(element))
            .collect()
    }

    pub fn visit_element(&self, element: &Element) -> String {
        match element {
            Element::Text(text) => self.visit_text(text),
            Element::Argument(argument) => self.visit_argument(argument),
        }
    }

    pub fn visit_text(&self, text: &TextElement) -> String {
        escape_text(&text.value).into_owned()
    }

    pub fn visit_argument(&self, argument: &ArgumentElement) -> String {
        let format = match &argument.format {
            Some(format) => format,
            None => return format!("{{{}}}", argument.id),
        };

        let argument_type = format.argument_type();
        log::trace!("printing argument `{}` as {}", argument.id, argument_type);

        if argument_type.is_simple() {
            self.visit_simple_format(argument, format, argument_type)
        } else {
            self.visit_optional_format(argument, format, argument_type)
        }
    }

    /// `{id, type}` or `{id, type, style}`
    pub fn visit_simple_format(
        &self,
        argument: &ArgumentElement,
        format: &Format,
        argument_type: ArgumentType,
    ) -> String {
        match format.style() {
            Some(style) if !style.is_empty() => {
                format!("{{{}, {}, {}}}", argument.id, argument_type, style)
            }
            _ => format!("{{{}, {}}}", argument.id, argument_type),
        }
    }

    /// `{id, type, offset:N,selector {...}...}`, one option per line in pretty mode
    pub fn visit_optional_format(
        &self,
        argument: &ArgumentElement,
        format: &Format,
        argument_type: ArgumentType,
    ) -> String {
        let offset = match format.offset() {
            Some(offset) if offset != 0 => format!(", offset:{}", offset),
            _ => String::new(),
        };

        let options: Vec<String> = format
            .options()
            .iter()
            .map(|option| self.visit_option(option))
            .collect();

        if self.pretty_print {
            let separator = format!("\n{}", PRETTY_INDENT);
            format!(
                "{{{}, {}{},\n{}{}\n}}",
                argument.id,
                argument_type,
                offset,
                PRETTY_INDENT,
                options.join(&separator)
            )
        } else {
            format!(
                "{{{}, {}{},{}}}",
                argument.id,
                argument_type,
                offset,
                options.concat()
            )
        }
    }

    pub fn visit_option(&self, option: &FormatOption) -> String {
        let value = MessagePrinter::new(false).visit_message(&option.value);
        format!("{} {{{}}}", option.selector, value)
    }
}

/// Print a message in ICU syntax, multi-line when `pretty_print` is set
pub fn print(message: &Message, pretty_print: bool) -> String {
    MessagePrinter::new(pretty_print).visit_message(message)
}

/// Print a message in compact ICU syntax
pub fn print_message(message: &Message) -> String {
    print(message, false)
}
