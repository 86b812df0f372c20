// src/models/question.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A question exactly as the backend stored it inside a submission.
///
/// The scoring backend's schema changed across versions: depending on which
/// version produced a submission, the identity key may be `id`, `question_id`,
/// `QID`, `qid` or `index`, and the answer key `answer`, `Answer` or
/// `correct_answer`. The record therefore stays a raw JSON map, and every
/// read goes through an explicit candidate list instead of fixed struct
/// fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionRecord(Map<String, Value>);

impl QuestionRecord {
    /// Returns the first candidate field that is present and not JSON null.
    pub fn first_present(&self, candidates: &[&str]) -> Option<&Value> {
        candidates
            .iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| !value.is_null())
    }

    /// Returns the first candidate field that coerces to a non-empty string.
    pub fn first_text(&self, candidates: &[&str]) -> Option<String> {
        candidates
            .iter()
            .filter_map(|key| self.0.get(*key))
            .filter_map(coerce_text)
            .find(|text| !text.is_empty())
    }

    /// Subject label, `"Unknown"` when the record carries none.
    pub fn subject(&self) -> String {
        self.first_text(&["subject"])
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Topic label, `"Unknown"` when the record carries none.
    pub fn topic(&self) -> String {
        self.first_text(&["topic"])
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Difficulty label, display-only. Older question banks stored the
    /// capitalized column name.
    pub fn difficulty(&self) -> String {
        self.first_text(&["difficulty", "Difficulty"])
            .unwrap_or_default()
    }

    /// Question text; the UI shows a placeholder when the record has none.
    pub fn prompt(&self) -> String {
        self.first_text(&["question", "Question"])
            .unwrap_or_else(|| "Question".to_string())
    }
}

/// Coerces a scalar JSON value to its display string.
/// Null, arrays and objects count as absent.
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
