//! Message AST Module
//!
//! Defines the parsed representation of an ICU message as handed over by the
//! message-format parser. The JSON shape mirrors the parser's output: elements and
//! formats are tagged by their `type` field, extra fields such as `location` are ignored.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::argument_type::ArgumentType;

/// An ordered sequence of elements. Used both for the top-level message and for
/// every nested option value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub elements: Vec<Element>,
}

impl Message {
    pub fn new(elements: Vec<Element>) -> Self {
        Message { elements }
    }
}

impl From<Vec<Element>> for Message {
    fn from(elements: Vec<Element>) -> Self {
        Message::new(elements)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::printer::print_message(self))
    }
}

/// Enum representing all possible message element types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Element {
    #[serde(rename = "messageTextElement")]
    Text(TextElement),
    #[serde(rename = "argumentElement")]
    Argument(ArgumentElement),
}

impl Element {
    pub fn text(value: impl Into<String>) -> Self {
        Element::Text(TextElement::new(value))
    }

    pub fn argument(id: impl Into<ArgumentId>, format: Option<Format>) -> Self {
        Element::Argument(ArgumentElement::new(id, format))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub value: String,
}

impl TextElement {
    pub fn new(value: impl Into<String>) -> Self {
        TextElement {
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentElement {
    pub id: ArgumentId,
    /// `None` for a bare `{id}` placeholder
    #[serde(default)]
    pub format: Option<Format>,
}

impl ArgumentElement {
    pub fn new(id: impl Into<ArgumentId>, format: Option<Format>) -> Self {
        ArgumentElement {
            id: id.into(),
            format,
        }
    }
}

/// Placeholder identifier, either a positional index or a name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgumentId {
    Index(u64),
    Name(String),
}

impl fmt::Display for ArgumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentId::Index(index) => write!(f, "{}", index),
            ArgumentId::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for ArgumentId {
    fn from(name: &str) -> Self {
        ArgumentId::Name(name.to_string())
    }
}

impl From<String> for ArgumentId {
    fn from(name: String) -> Self {
        ArgumentId::Name(name)
    }
}

impl From<u64> for ArgumentId {
    fn from(index: u64) -> Self {
        ArgumentId::Index(index)
    }
}

/// Format descriptor attached to an argument.
///
/// `selectordinal` has no variant of its own: it is a `PluralFormat` with `ordinal`
/// set. Use [`Format::argument_type`] to get the externally visible type name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Format {
    NumberFormat {
        #[serde(default)]
        style: Option<String>,
    },
    DateFormat {
        #[serde(default)]
        style: Option<String>,
    },
    TimeFormat {
        #[serde(default)]
        style: Option<String>,
    },
    PluralFormat {
        #[serde(default)]
        ordinal: bool,
        #[serde(default)]
        offset: Option<i64>,
        options: Vec<FormatOption>,
    },
    SelectFormat {
        #[serde(default)]
        offset: Option<i64>,
        options: Vec<FormatOption>,
    },
}

impl Format {
    pub fn number(style: Option<&str>) -> Self {
        Format::NumberFormat {
            style: style.map(str::to_string),
        }
    }

    pub fn date(style: Option<&str>) -> Self {
        Format::DateFormat {
            style: style.map(str::to_string),
        }
    }

    pub fn time(style: Option<&str>) -> Self {
        Format::TimeFormat {
            style: style.map(str::to_string),
        }
    }

    pub fn plural(offset: Option<i64>, options: Vec<FormatOption>) -> Self {
        Format::PluralFormat {
            ordinal: false,
            offset,
            options,
        }
    }

    pub fn select_ordinal(offset: Option<i64>, options: Vec<FormatOption>) -> Self {
        Format::PluralFormat {
            ordinal: true,
            offset,
            options,
        }
    }

    pub fn select(options: Vec<FormatOption>) -> Self {
        Format::SelectFormat {
            offset: None,
            options,
        }
    }

    /// The type name as it appears in message syntax
    pub fn argument_type(&self) -> ArgumentType {
        ArgumentType::of(self)
    }

    /// Style of a `number`, `date` or `time` format
    pub fn style(&self) -> Option<&str> {
        match self {
            Format::NumberFormat { style }
            | Format::DateFormat { style }
            | Format::TimeFormat { style } => style.as_deref(),
            _ => None,
        }
    }

    pub fn offset(&self) -> Option<i64> {
        match self {
            Format::PluralFormat { offset, .. } | Format::SelectFormat { offset, .. } => *offset,
            _ => None,
        }
    }

    /// Branches of a `plural`, `selectordinal` or `select` format; empty for simple kinds
    pub fn options(&self) -> &[FormatOption] {
        match self {
            Format::PluralFormat { options, .. } | Format::SelectFormat { options, .. } => {
                options
            }
            _ => &[],
        }
    }
}

/// One branch of a plural or select argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatOption {
    pub selector: String,
    pub value: Message,
}

impl FormatOption {
    pub fn new(selector: impl Into<String>, value: impl Into<Message>) -> Self {
        FormatOption {
            selector: selector.into(),
            value: value.into(),
        }
    }
}
