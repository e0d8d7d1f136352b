//! Escaping for markup (HTML/XML) output.
//!
//! The renderer calls [`escape`] on every value interpolated into an
//! auto-escaped block. Values that already carry the [`Value::Markup`]
//! tag pass through untouched, so text is never escaped twice.

use std::borrow::Cow;

use crate::value::Value;

/// Replace the five markup-significant characters with character
/// references.
///
/// Returns the input borrowed when nothing needs replacing, so the common
/// all-clean case allocates nothing.
pub fn escape_str(input: &str) -> Cow<'_, str> {
    // First pass: how much longer does the escaped string get?
    let mut grow = 0usize;
    for ch in input.chars() {
        grow += match ch {
            '&' | '\'' => 4,
            '"' => 5,
            '<' | '>' => 3,
            _ => 0,
        };
    }
    if grow == 0 {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + grow);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape a value for markup output.
///
/// - Markup values are returned unchanged.
/// - Numbers, booleans and `None` cannot contain markup; they are rendered
///   and tagged without escaping.
/// - Everything else is rendered to text, escaped, and tagged as markup.
pub fn escape(value: &Value) -> Value {
    match value {
        Value::Markup(_) => value.clone(),
        Value::None | Value::Bool(_) | Value::Int(_) | Value::Float(_) => {
            Value::markup(value.to_string())
        }
        Value::Str(s) => Value::markup(escape_str(s).into_owned()),
        other => Value::markup(escape_str(&other.to_string()).into_owned()),
    }
}
