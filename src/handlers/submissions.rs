// src/handlers/submissions.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    client::BackendClient,
    error::AppError,
    models::{
        question::coerce_text,
        submission::{
            QuestionReview, ReviewedAnswer, SubmissionListRow, SubmissionRecord, SubmissionReview,
        },
    },
    review::{
        normalize::{answers_match, resolve_answer},
        summary::subject_summary,
        tally::performance,
    },
};

/// Lists a user's past submissions, each row enriched with the rendered
/// filter summary.
pub async fn list_submissions(
    State(backend): State<BackendClient>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let submissions = backend.list_submissions(&user_id).await?;

    let rows: Vec<SubmissionListRow> = submissions
        .into_iter()
        .map(|sub| SubmissionListRow {
            subject_summary: subject_summary(sub.filters.as_ref()),
            filename: sub.filename,
            submitted_at: sub.submitted_at,
            correct: sub.correct,
            total: sub.total,
        })
        .collect();

    Ok(Json(rows))
}

/// Fetches one submission and builds the full review payload: metadata,
/// graded per-question rows and the subject/topic performance series.
pub async fn get_submission(
    State(backend): State<BackendClient>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = backend.fetch_submission(&filename).await?;

    let questions = review_rows(&record);

    // Charts always derive from the raw question/answer pair; the
    // pre-joined rows never fed them.
    let report = performance(&record.questions, &record.answers);

    Ok(Json(SubmissionReview {
        submitted_at: record.submitted_at,
        correct: record.correct,
        total: record.total,
        score: record.score,
        subject_summary: subject_summary(record.filters.as_ref()),
        questions,
        performance: report.series(),
    }))
}

/// Per-question review rows. Prefers the backend's pre-joined
/// `questions_with_answers` array when present; otherwise joins
/// `questions` with `answers` through the normalizer.
fn review_rows(record: &SubmissionRecord) -> Vec<QuestionReview> {
    if !record.questions_with_answers.is_empty() {
        return record
            .questions_with_answers
            .iter()
            .enumerate()
            .map(|(position, row)| review_prejoined(row, position))
            .collect();
    }

    record
        .questions
        .iter()
        .enumerate()
        .map(|(position, question)| {
            let resolved = resolve_answer(question, &record.answers, position);
            QuestionReview {
                identity: resolved.identity,
                question: question.prompt(),
                user_answer: resolved.user_answer,
                correct_answer: resolved.correct_answer,
                is_correct: resolved.is_correct,
                subject: question.subject(),
                topic: question.topic(),
                difficulty: question.difficulty(),
            }
        })
        .collect()
}

fn review_prejoined(row: &ReviewedAnswer, position: usize) -> QuestionReview {
    let user_answer = row.user_answer.as_ref().and_then(coerce_text);
    let correct_answer = row
        .correct_answer
        .as_ref()
        .and_then(coerce_text)
        .unwrap_or_default();
    let is_correct = user_answer
        .as_deref()
        .is_some_and(|answer| answers_match(answer, &correct_answer));

    QuestionReview {
        identity: position.to_string(),
        question: row
            .question
            .clone()
            .unwrap_or_else(|| "Question".to_string()),
        user_answer,
        correct_answer,
        is_correct,
        // The pre-joined rows showed blanks, not "Unknown", for missing
        // labels; kept for display parity.
        subject: row.subject.clone().unwrap_or_default(),
        topic: row.topic.clone().unwrap_or_default(),
        difficulty: row.difficulty.clone().unwrap_or_default(),
    }
}
