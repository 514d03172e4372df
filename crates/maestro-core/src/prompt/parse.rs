//! Round-trip restore: extracting field values from a prompt document.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::field::{Field, FieldValue};

use super::{AUTOMATIC_INPUT, AUTOMATIC_INPUTS_MARKER};

/// Matches one `label: "value"` line. Non-greedy, so a value containing an
/// embedded quote truncates at the first closing quote.
const FIELD_LINE_PATTERN: &str = r#"([a-z_]+): "(.*?)""#;

static FIELD_LINE_REGEX: OnceLock<Regex> = OnceLock::new();

fn field_line_regex() -> &'static Regex {
    FIELD_LINE_REGEX.get_or_init(|| Regex::new(FIELD_LINE_PATTERN).expect("invalid regex pattern"))
}

/// Extracts field values from a previously rendered prompt document.
///
/// Only the portion before the `AUTOMATIC_INPUTS:` marker is consulted.
/// The sentinel, the literal string "none" (any case), and an empty value
/// all reconstruct as the field's empty value. The list-typed field strips
/// bracket and quote characters and splits on commas. Labels missing from
/// the document are simply absent from the result, so the caller's prior
/// state for those fields stays untouched; malformed or foreign input never
/// errors.
pub fn parse_prompt(document: &str) -> HashMap<Field, FieldValue> {
    let user_part = document
        .split(AUTOMATIC_INPUTS_MARKER)
        .next()
        .unwrap_or(document);

    let mut restored = HashMap::new();
    for captures in field_line_regex().captures_iter(user_part) {
        let (Some(label), Some(raw)) = (captures.get(1), captures.get(2)) else {
            continue;
        };
        let Some(field) = Field::from_label(label.as_str()) else {
            continue;
        };
        // First occurrence of a label wins.
        if restored.contains_key(&field) {
            continue;
        }
        restored.insert(field, reconstruct(field, raw.as_str().trim()));
    }
    restored
}

fn reconstruct(field: Field, raw: &str) -> FieldValue {
    if raw.contains(AUTOMATIC_INPUT) || raw.eq_ignore_ascii_case("none") || raw.is_empty() {
        return FieldValue::empty_for(field);
    }
    if field.is_list() {
        let cleaned: String = raw
            .chars()
            .filter(|c| !matches!(c, '[' | ']' | '\'' | '"'))
            .collect();
        let items = cleaned
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect();
        return FieldValue::List(items);
    }
    FieldValue::Scalar(raw.to_string())
}
