use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{QuestionSet, ScoreBand};
use crate::quiz::QuizState;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutcomeError {
    #[error("finished_at is before started_at")]
    InvalidTimeRange,

    #[error("quiz has {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },
}

/// Scored result of a completed quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    score: u32,
    band: ScoreBand,
    max_score: u32,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
}

impl QuizOutcome {
    /// Scores a completed quiz.
    ///
    /// # Errors
    ///
    /// Returns `OutcomeError::Incomplete` if any question is unanswered.
    /// Returns `OutcomeError::InvalidTimeRange` if `finished_at` is before `started_at`.
    pub fn from_state(
        state: &QuizState,
        questions: &QuestionSet,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Result<Self, OutcomeError> {
        if finished_at < started_at {
            return Err(OutcomeError::InvalidTimeRange);
        }
        if !state.is_completed() {
            return Err(OutcomeError::Incomplete {
                answered: state.answered_count(),
                total: state.question_count(),
            });
        }

        let score = state.compute_score(questions);
        Ok(Self {
            score,
            band: ScoreBand::classify(score),
            max_score: questions.max_score(),
            started_at,
            finished_at,
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        self.band
    }

    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }
}
