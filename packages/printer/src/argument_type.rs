//! Argument Types
//!
//! Maps a format descriptor to the type name printed after the argument id.

use std::fmt;

use crate::ast::Format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentType {
    Number,
    Date,
    Time,
    Plural,
    SelectOrdinal,
    Select,
}

impl ArgumentType {
    /// Derive the type name of a format. Ordinal plurals become `selectordinal`.
    pub fn of(format: &Format) -> Self {
        match format {
            Format::NumberFormat { .. } => ArgumentType::Number,
            Format::DateFormat { .. } => ArgumentType::Date,
            Format::TimeFormat { .. } => ArgumentType::Time,
            Format::PluralFormat { ordinal: true, .. } => ArgumentType::SelectOrdinal,
            Format::PluralFormat { ordinal: false, .. } => ArgumentType::Plural,
            Format::SelectFormat { .. } => ArgumentType::Select,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArgumentType::Number => "number",
            ArgumentType::Date => "date",
            ArgumentType::Time => "time",
            ArgumentType::Plural => "plural",
            ArgumentType::SelectOrdinal => "selectordinal",
            ArgumentType::Select => "select",
        }
    }

    /// `number`, `date` and `time` take at most a style
    pub fn is_simple(&self) -> bool {
        matches!(
            self,
            ArgumentType::Number | ArgumentType::Date | ArgumentType::Time
        )
    }

    /// `plural`, `selectordinal` and `select` carry branches
    pub fn is_optional(&self) -> bool {
        !self.is_simple()
    }
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{FormatOption, Message};

    #[test]
    fn test_simple_types() {
        assert_eq!(ArgumentType::of(&Format::number(None)), ArgumentType::Number);
        assert_eq!(ArgumentType::of(&Format::date(Some("short"))), ArgumentType::Date);
        assert_eq!(ArgumentType::of(&Format::time(None)), ArgumentType::Time);
    }

    #[test]
    fn test_ordinal_flag_selects_selectordinal() {
        let options = vec![FormatOption::new("other", Message::default())];
        assert_eq!(
            Format::select_ordinal(None, options.clone()).argument_type(),
            ArgumentType::SelectOrdinal
        );
        assert_eq!(
            Format::plural(None, options.clone()).argument_type(),
            ArgumentType::Plural
        );
        assert_eq!(Format::select(options).argument_type(), ArgumentType::Select);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ArgumentType::Number.to_string(), "number");
        assert_eq!(ArgumentType::SelectOrdinal.to_string(), "selectordinal");
        assert_eq!(ArgumentType::Select.as_str(), "select");
    }

    #[test]
    fn test_classification() {
        assert!(ArgumentType::Time.is_simple());
        assert!(ArgumentType::Plural.is_optional());
        assert!(ArgumentType::SelectOrdinal.is_optional());
        assert!(!ArgumentType::Select.is_simple());
    }
}
