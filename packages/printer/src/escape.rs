//! Text Escaping
//!
//! Literal text is escaped in a single left-to-right pass so an existing `\#`
//! is kept as is instead of turning into `\\#`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;

static ESCAPED_CHARS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("\\", "\\\\");
    map.insert("\\#", "\\#");
    map.insert("{", "\\{");
    map.insert("}", "\\}");
    map
});

// `\#` comes first so it wins over a lone backslash
static ESCAPE_CHARS_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\#|[{}\\]").unwrap());

/// Escape `{`, `}` and `\` in literal message text. Borrows when nothing needs escaping.
pub fn escape_text(value: &str) -> Cow<'_, str> {
    ESCAPE_CHARS_REGEXP.replace_all(value, |caps: &Captures| {
        let matched = &caps[0];
        match ESCAPED_CHARS.get(matched) {
            Some(replacement) => replacement.to_string(),
            None => matched.to_string(),
        }
    })
}
