// src/review/normalize.rs

use crate::models::question::{QuestionRecord, coerce_text};
use crate::models::submission::AnswersMap;

/// Identity candidates, oldest schema first. `index` is a literal field
/// some backend versions wrote; the caller's positional index is the
/// terminal fallback. The order is load-bearing and must not change.
const IDENTITY_FIELDS: &[&str] = &["id", "question_id", "QID", "qid", "index"];

/// Correct-answer candidates. The first present, non-null field wins,
/// even when its value is an empty string.
const ANSWER_FIELDS: &[&str] = &["answer", "Answer", "correct_answer"];

/// A question joined with its recorded answer and graded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAnswer {
    /// Stable per-question key, never empty.
    pub identity: String,
    /// The user's submitted answer; `None` means the question was never
    /// answered.
    pub user_answer: Option<String>,
    /// Canonical correct answer, `""` when the backend supplied none.
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Resolves the stable identity of a question record.
///
/// Scans the named variants in order and takes the first one that coerces
/// to a non-empty string; records with no usable identity field get the
/// stringified zero-based position. Never fails.
pub fn resolve_identity(question: &QuestionRecord, position: usize) -> String {
    question
        .first_text(IDENTITY_FIELDS)
        .unwrap_or_else(|| position.to_string())
}

/// Resolves the canonical correct answer, `""` when no variant is present.
pub fn resolve_correct_answer(question: &QuestionRecord) -> String {
    question
        .first_present(ANSWER_FIELDS)
        .and_then(coerce_text)
        .unwrap_or_default()
}

/// Case- and whitespace-insensitive answer comparison. No numeric,
/// semantic or fuzzy matching.
pub fn answers_match(user: &str, correct: &str) -> bool {
    user.trim().to_lowercase() == correct.trim().to_lowercase()
}

/// Joins one question with the recorded answers and grades it.
///
/// `position` is the record's zero-based index in the question sequence,
/// used only as the last-resort identity source. An answer entry that is
/// JSON null counts as unanswered, and an unanswered question is always
/// incorrect. Pure; malformed input degrades to defaults instead of
/// failing.
pub fn resolve_answer(
    question: &QuestionRecord,
    answers: &AnswersMap,
    position: usize,
) -> ResolvedAnswer {
    let identity = resolve_identity(question, position);
    let user_answer = answers.get(&identity).and_then(coerce_text);
    let correct_answer = resolve_correct_answer(question);
    let is_correct = user_answer
        .as_deref()
        .is_some_and(|answer| answers_match(answer, &correct_answer));

    ResolvedAnswer {
        identity,
        user_answer,
        correct_answer,
        is_correct,
    }
}
