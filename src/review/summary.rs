// src/review/summary.rs

use serde_json::Value;

use crate::models::question::coerce_text;

/// Renders the filter set a submission was generated with as one display
/// string.
///
/// Current backend versions send an ordered array of
/// `{subject, grade, difficulty}` selections; each renders as
/// `"<subject> (G<grade>, <difficulty>)"` in sequence order. The legacy
/// format was a flat label-to-value object, rendered as its joined values.
/// Anything else, including an absent filter set, renders empty.
pub fn subject_summary(filters: Option<&Value>) -> String {
    match filters {
        Some(Value::Array(selections)) => selections
            .iter()
            .map(render_selection)
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::Object(legacy)) => legacy
            .values()
            .filter_map(coerce_text)
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}

fn render_selection(selection: &Value) -> String {
    let field = |key: &str| {
        selection
            .get(key)
            .and_then(coerce_text)
            .unwrap_or_default()
    };
    format!(
        "{} (G{}, {})",
        field("subject"),
        field("grade"),
        field("difficulty")
    )
}
