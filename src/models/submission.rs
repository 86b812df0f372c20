// src/models/submission.rs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::question::QuestionRecord;
use crate::review::tally::PerformanceSeries;

/// Recorded answers keyed by resolved question identity.
/// A missing key means the question was never answered.
pub type AnswersMap = HashMap<String, Value>;

/// One row of the submission history list, as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionSummary {
    pub filename: String,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub correct: Option<i64>,
    #[serde(default)]
    pub total: Option<i64>,
    /// Filter set echoed back by the backend; shape varies (see
    /// [`crate::review::summary::subject_summary`]).
    #[serde(default)]
    pub filters: Option<Value>,
}

/// A full submission snapshot as fetched from the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionRecord {
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub correct: Option<i64>,
    #[serde(default)]
    pub total: Option<i64>,
    /// Score fraction in `[0, 1]`.
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub filters: Option<Value>,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
    #[serde(default)]
    pub answers: AnswersMap,
    /// Pre-joined review rows written by some backend versions. When
    /// present they replace the question/answer join for display.
    #[serde(default)]
    pub questions_with_answers: Vec<ReviewedAnswer>,
}

/// Legacy pre-joined row: question, recorded answer and correct answer
/// already matched up by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewedAnswer {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub user_answer: Option<Value>,
    #[serde(default)]
    pub correct_answer: Option<Value>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// One row of the enriched history list served to the UI.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionListRow {
    pub filename: String,
    pub submitted_at: Option<DateTime<Utc>>,
    pub correct: Option<i64>,
    pub total: Option<i64>,
    pub subject_summary: String,
}

/// One row of the per-question review shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionReview {
    pub identity: String,
    pub question: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
    pub subject: String,
    pub topic: String,
    pub difficulty: String,
}

/// Full review payload for one submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReview {
    pub submitted_at: Option<DateTime<Utc>>,
    pub correct: Option<i64>,
    pub total: Option<i64>,
    pub score: Option<f64>,
    pub subject_summary: String,
    pub questions: Vec<QuestionReview>,
    pub performance: PerformanceSeries,
}

/// Accepts an RFC 3339 timestamp and degrades anything else to `None`.
/// Older submission files carried free-form timestamp strings, and the
/// review view must load regardless.
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc)))
}
