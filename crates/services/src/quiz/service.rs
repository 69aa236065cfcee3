use std::sync::Arc;

use chrono::{DateTime, Utc};
use quiz_core::model::{OptionIndex, QuestionIndex, QuestionSet, QuizOutcome};
use quiz_core::{Clock, QuizSnapshot, QuizState};

use super::progress::QuizProgress;
use super::result::QuizResult;
use crate::error::QuizServiceError;

//
// ─── READ MODELS ───────────────────────────────────────────────────────────────
//

/// The question under the cursor, with everything needed to draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentQuestion {
    pub index: QuestionIndex,
    pub total: usize,
    pub text: String,
    pub options: Vec<String>,
    pub selected: Option<OptionIndex>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub is_completed: bool,
}

/// What a selection did to the quiz as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Every question is answered; the quiz can be finished.
    Completed,
    /// Questions remain; the user is somewhere before the last question.
    Pending,
    /// The last question was answered but an earlier one was skipped.
    SkippedBeforeLast { first_unanswered: QuestionIndex },
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Quiz controller: owns one `QuizState` over a shared question set.
pub struct QuizService {
    questions: Arc<QuestionSet>,
    state: QuizState,
    clock: Clock,
    started_at: DateTime<Utc>,
}

impl QuizService {
    #[must_use]
    pub fn new(questions: Arc<QuestionSet>, clock: Clock) -> Self {
        let state = QuizState::new(&questions);
        tracing::info!(questions = questions.len(), "quiz started");
        Self {
            questions,
            state,
            started_at: clock.now(),
            clock,
        }
    }

    /// Resume a quiz from a snapshot taken by `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Snapshot` if the snapshot does not fit the question set.
    pub fn restore(
        questions: Arc<QuestionSet>,
        clock: Clock,
        snapshot: QuizSnapshot,
    ) -> Result<Self, QuizServiceError> {
        let state = QuizState::restore(snapshot, &questions)?;
        tracing::debug!(
            index = state.current_index().value(),
            answered = state.answered_count(),
            "quiz restored"
        );
        Ok(Self {
            questions,
            state,
            started_at: clock.now(),
            clock,
        })
    }

    /// # Errors
    ///
    /// Returns `QuizServiceError::SnapshotJson` for malformed JSON and
    /// `QuizServiceError::Snapshot` for a snapshot that does not fit.
    pub fn restore_json(
        questions: Arc<QuestionSet>,
        clock: Clock,
        raw: &str,
    ) -> Result<Self, QuizServiceError> {
        let snapshot: QuizSnapshot = serde_json::from_str(raw)?;
        Self::restore(questions, clock, snapshot)
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    #[must_use]
    pub fn current_question(&self) -> CurrentQuestion {
        let index = self.state.current_index();
        let (text, options) = self
            .questions
            .question(index)
            .map(|question| {
                (
                    question.text().to_string(),
                    question.options().iter().map(ToString::to_string).collect(),
                )
            })
            .unwrap_or_default();

        CurrentQuestion {
            index,
            total: self.questions.len(),
            text,
            options,
            selected: self.state.selected_option(index),
            can_go_previous: self.state.can_go_previous(),
            can_go_next: self.state.can_go_next(),
            is_completed: self.state.is_completed(),
        }
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress::new(self.state.question_count(), self.state.answered_count())
    }

    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` at the first question.
    pub fn previous(&mut self) -> Result<QuestionIndex, QuizServiceError> {
        Ok(self.state.go_to_previous()?)
    }

    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` at the last question.
    pub fn next(&mut self) -> Result<QuestionIndex, QuizServiceError> {
        Ok(self.state.go_to_next()?)
    }

    /// Select an option for the question under the cursor.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the cursor is somehow out of range.
    pub fn select(&mut self, option: OptionIndex) -> Result<SelectionOutcome, QuizServiceError> {
        let index = self.state.current_index();
        self.state.select_option(index, option)?;

        if self.state.is_completed() {
            tracing::debug!("all questions answered");
            return Ok(SelectionOutcome::Completed);
        }
        if self.state.is_last_question() {
            if let Some(first_unanswered) = self.state.unanswered().first().copied() {
                return Ok(SelectionOutcome::SkippedBeforeLast { first_unanswered });
            }
        }
        Ok(SelectionOutcome::Pending)
    }

    /// Score the quiz. The state is kept so a dismissed result leaves the
    /// answers in place.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Incomplete` while any question is unanswered.
    pub fn finish(&self) -> Result<QuizResult, QuizServiceError> {
        if !self.state.is_completed() {
            return Err(QuizServiceError::Incomplete {
                answered: self.state.answered_count(),
                total: self.state.question_count(),
            });
        }

        let finished_at = self.clock.now().max(self.started_at);
        let outcome =
            QuizOutcome::from_state(&self.state, &self.questions, self.started_at, finished_at)?;
        let result = QuizResult::new(outcome);
        tracing::info!(
            score = result.score(),
            band = result.band().key(),
            "quiz finished"
        );
        Ok(result)
    }

    /// Start over from the first question with all answers cleared.
    pub fn restart(&mut self) {
        self.state.restart();
        self.started_at = self.clock.now();
        tracing::info!("quiz restarted");
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.state.snapshot()
    }

    /// # Errors
    ///
    /// Returns `QuizServiceError::SnapshotJson` if serialization fails.
    pub fn snapshot_json(&self) -> Result<String, QuizServiceError> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }
}

#[cfg(test)]
mod tests {
    use quiz_core::model::ScoreBand;
    use quiz_core::time::fixed_clock;
    use quiz_core::{Boundary, QuizError};

    use super::*;
    use crate::catalog::bundled_question_set;

    fn service() -> QuizService {
        QuizService::new(Arc::new(bundled_question_set().unwrap()), fixed_clock())
    }

    fn answer_all_with(service: &mut QuizService, pick: impl Fn(&CurrentQuestion) -> OptionIndex) {
        loop {
            let current = service.current_question();
            service.select(pick(&current)).unwrap();
            if !current.can_go_next {
                break;
            }
            service.next().unwrap();
        }
    }

    #[test]
    fn current_question_starts_at_first() {
        let service = service();
        let current = service.current_question();
        assert_eq!(current.index, QuestionIndex::FIRST);
        assert_eq!(current.total, 18);
        assert_eq!(current.options.len(), 3);
        assert!(current.selected.is_none());
        assert!(!current.can_go_previous);
        assert!(current.can_go_next);
        assert!(!current.is_completed);
    }

    #[test]
    fn previous_at_first_question_is_rejected() {
        let mut service = service();
        let err = service.previous().unwrap_err();
        assert!(matches!(
            err,
            QuizServiceError::Quiz(QuizError::OutOfRange(Boundary::First))
        ));
    }

    #[test]
    fn finish_requires_completion() {
        let mut service = service();
        service.select(OptionIndex::First).unwrap();
        let err = service.finish().unwrap_err();
        assert!(matches!(
            err,
            QuizServiceError::Incomplete {
                answered: 1,
                total: 18
            }
        ));
    }

    #[test]
    fn answering_last_with_gaps_points_at_first_gap() {
        let mut service = service();
        for _ in 0..17 {
            service.next().unwrap();
        }
        let outcome = service.select(OptionIndex::Second).unwrap();
        assert_eq!(
            outcome,
            SelectionOutcome::SkippedBeforeLast {
                first_unanswered: QuestionIndex::FIRST
            }
        );
    }

    #[test]
    fn third_options_score_below_average() {
        let mut service = service();
        answer_all_with(&mut service, |_| OptionIndex::Third);
        let result = service.finish().unwrap();
        assert_eq!(result.score(), 30);
        assert_eq!(result.band(), ScoreBand::BelowAverage);
        assert!(result.message.body.contains("is below average."));
    }

    #[test]
    fn finishing_again_after_a_change_rescores() {
        let mut service = service();
        answer_all_with(&mut service, |_| OptionIndex::First);
        assert_eq!(service.finish().unwrap().score(), 36);

        // Question 18 weighs [2, 3, 1].
        service.select(OptionIndex::Second).unwrap();
        assert_eq!(service.finish().unwrap().score(), 37);
    }

    #[test]
    fn restart_returns_to_a_clean_first_question() {
        let mut service = service();
        answer_all_with(&mut service, |_| OptionIndex::First);
        service.finish().unwrap();

        service.restart();

        let current = service.current_question();
        assert_eq!(current.index, QuestionIndex::FIRST);
        assert_eq!(service.progress().answered, 0);
        assert!(service.finish().is_err());
    }

    #[test]
    fn snapshot_json_round_trip() {
        let mut service = service();
        service.select(OptionIndex::Third).unwrap();
        service.next().unwrap();
        service.next().unwrap();
        service.select(OptionIndex::First).unwrap();

        let json = service.snapshot_json().unwrap();
        let restored =
            QuizService::restore_json(Arc::new(bundled_question_set().unwrap()), fixed_clock(), &json)
                .unwrap();

        assert_eq!(restored.state(), service.state());
        assert_eq!(restored.current_question(), service.current_question());
    }

    #[test]
    fn restore_json_rejects_garbage() {
        let err = QuizService::restore_json(
            Arc::new(bundled_question_set().unwrap()),
            fixed_clock(),
            "not json",
        )
        .err()
        .unwrap();
        assert!(matches!(err, QuizServiceError::SnapshotJson(_)));
    }
}
