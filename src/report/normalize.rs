// Recursive cleanup of parsed report data before it is returned to the
// caller. Removes separator artifacts the model draws between sections,
// collapses whitespace, and drops entries that end up empty.

use serde_json::{Map, Value};

/// Characters trimmed from both ends of every cleaned string.
const EDGE_TRIM: &[char] = &[' ', '-', '\n', '\t', '\r'];

/// Recursively clean every string in a JSON-shaped value.
///
/// Strings are cleaned with [`clean_text`]. Sequences recurse into each
/// element and then drop elements that are blank (null, empty string,
/// empty sequence, empty mapping). Mappings recurse into every value and
/// trim surrounding whitespace from keys, preserving insertion order.
/// Numbers, booleans, and null pass through unchanged.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::String(text) => Value::String(clean_text(&text)),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(normalize)
                .filter(|item| !is_blank(item))
                .collect(),
        ),
        Value::Object(entries) => {
            let mut cleaned = Map::new();
            for (key, item) in entries {
                cleaned.insert(key.trim().to_string(), normalize(item));
            }
            Value::Object(cleaned)
        }
        scalar => scalar,
    }
}

/// Clean a single string: strip separator runs, collapse whitespace runs
/// to a single space, and trim stray whitespace and dashes from the ends.
pub fn clean_text(text: &str) -> String {
    let stripped = strip_separator_runs(text);
    let collapsed = collapse_whitespace(&stripped);
    collapsed.trim_matches(EDGE_TRIM).to_string()
}

/// A value that carries no content after cleaning. Scalars other than the
/// empty string are never blank.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
        _ => false,
    }
}

/// Remove every run of two or more consecutive dashes. Single dashes
/// (hyphenated words, numeric ranges like "0.6-1.3") are kept.
fn strip_separator_runs(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut run = 0usize;

    for c in text.chars() {
        if c == '-' {
            run += 1;
            continue;
        }
        if run == 1 {
            result.push('-');
        }
        run = 0;
        result.push(c);
    }
    if run == 1 {
        result.push('-');
    }

    result
}

/// Collapse every run of whitespace (including newlines and tabs) to a
/// single space.
fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for c in text.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                result.push(' ');
            }
            in_whitespace = true;
        } else {
            result.push(c);
            in_whitespace = false;
        }
    }

    result
}
