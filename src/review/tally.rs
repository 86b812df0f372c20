// src/review/tally.rs

use serde::Serialize;

use crate::models::question::QuestionRecord;
use crate::models::submission::AnswersMap;
use crate::review::normalize::resolve_answer;

/// Correct/incorrect counts for one subject or topic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub correct: u32,
    pub incorrect: u32,
}

/// An ordered tally collection. Keys appear in the order they are first
/// seen while scanning the question sequence, never sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TallyBook {
    entries: Vec<(String, Tally)>,
}

impl TallyBook {
    fn bucket(&mut self, key: String) -> &mut Tally {
        if let Some(index) = self.entries.iter().position(|(k, _)| *k == key) {
            &mut self.entries[index].1
        } else {
            self.entries.push((key, Tally::default()));
            let last = self.entries.len() - 1;
            &mut self.entries[last].1
        }
    }

    fn record(&mut self, key: String, correct: bool) {
        let tally = self.bucket(key);
        if correct {
            tally.correct += 1;
        } else {
            tally.incorrect += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<Tally> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, tally)| *tally)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Tally)> {
        self.entries.iter().map(|(key, tally)| (key.as_str(), *tally))
    }

    /// Exports the parallel label/correct/incorrect vectors the stacked
    /// bar chart consumes.
    pub fn series(&self) -> ChartSeries {
        let mut series = ChartSeries::default();
        for (key, tally) in &self.entries {
            series.labels.push(key.clone());
            series.correct.push(tally.correct);
            series.incorrect.push(tally.incorrect);
        }
        series
    }
}

/// The chart sink contract: three parallel sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub correct: Vec<u32>,
    pub incorrect: Vec<u32>,
}

/// Subject- and topic-wise performance for one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerformanceReport {
    pub subjects: TallyBook,
    pub topics: TallyBook,
}

impl PerformanceReport {
    pub fn series(&self) -> PerformanceSeries {
        PerformanceSeries {
            subjects: self.subjects.series(),
            topics: self.topics.series(),
        }
    }
}

/// Chart-ready rendering of a [`PerformanceReport`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PerformanceSeries {
    pub subjects: ChartSeries,
    pub topics: ChartSeries,
}

/// Folds the question sequence into subject and topic tallies.
///
/// A single left-to-right pass: each question is graded once and lands in
/// exactly one bucket of each book, `"Unknown"` when the record names no
/// subject or topic. Deterministic for a fixed input; an empty sequence
/// yields two empty books.
pub fn performance(questions: &[QuestionRecord], answers: &AnswersMap) -> PerformanceReport {
    let mut report = PerformanceReport::default();

    for (position, question) in questions.iter().enumerate() {
        let resolved = resolve_answer(question, answers, position);
        report
            .subjects
            .record(question.subject(), resolved.is_correct);
        report.topics.record(question.topic(), resolved.is_correct);
    }

    report
}
