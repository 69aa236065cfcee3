use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{OptionIndex, QuestionSet};
use services::{QuizService, SelectionOutcome};

use crate::views::ViewError;
use crate::vm::{ResultVm, map_result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(OptionIndex),
    Previous,
    Next,
    Finish,
    ConfirmRestart,
    DismissResult,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: OptionIndex,
    pub label: String,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub number_label: String,
    pub progress_label: String,
    pub text: String,
    pub options: Vec<OptionVm>,
    pub show_previous: bool,
    pub show_next: bool,
    pub show_finish: bool,
}

/// Binds the quiz screen to one `QuizService`.
pub struct QuizVm {
    quiz: QuizService,
    notice: Option<String>,
    dialog: Option<ResultVm>,
}

impl QuizVm {
    #[must_use]
    pub fn new(quiz: QuizService) -> Self {
        Self {
            quiz,
            notice: None,
            dialog: None,
        }
    }

    /// Resume from a saved snapshot, or start fresh when there is none or it
    /// no longer fits the question set.
    #[must_use]
    pub fn resume(questions: Arc<QuestionSet>, clock: Clock, saved: Option<&str>) -> Self {
        let quiz = match saved {
            Some(raw) => match QuizService::restore_json(Arc::clone(&questions), clock, raw) {
                Ok(quiz) => quiz,
                Err(err) => {
                    tracing::warn!(error = %err, "discarding saved quiz");
                    QuizService::new(questions, clock)
                }
            },
            None => QuizService::new(questions, clock),
        };
        Self::new(quiz)
    }

    #[must_use]
    pub fn question(&self) -> QuestionVm {
        let current = self.quiz.current_question();
        let progress = self.quiz.progress();
        let options = current
            .options
            .iter()
            .zip(OptionIndex::ALL)
            .map(|(label, index)| OptionVm {
                index,
                label: label.clone(),
                checked: current.selected == Some(index),
            })
            .collect();

        QuestionVm {
            number_label: format!("Question {} of {}", current.index.number(), current.total),
            progress_label: format!("{} of {} answered", progress.answered, progress.total),
            text: current.text,
            options,
            show_previous: current.can_go_previous,
            show_next: current.can_go_next,
            show_finish: current.is_completed,
        }
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn dialog(&self) -> Option<&ResultVm> {
        self.dialog.as_ref()
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when the service rejects the intent, and
    /// `ViewError::Incomplete` when finishing with unanswered questions.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<(), ViewError> {
        match intent {
            QuizIntent::Select(option) => {
                let outcome = self.quiz.select(option).map_err(|_| ViewError::Unknown)?;
                self.notice = match outcome {
                    SelectionOutcome::SkippedBeforeLast { first_unanswered } => Some(format!(
                        "You skipped some questions. Question {} still needs an answer.",
                        first_unanswered.number()
                    )),
                    SelectionOutcome::Completed | SelectionOutcome::Pending => None,
                };
            }
            QuizIntent::Previous => {
                self.quiz.previous().map_err(|_| ViewError::Unknown)?;
                self.notice = None;
            }
            QuizIntent::Next => {
                self.quiz.next().map_err(|_| ViewError::Unknown)?;
                self.notice = None;
            }
            QuizIntent::Finish => {
                let result = self.quiz.finish().map_err(|err| match err {
                    services::QuizServiceError::Incomplete { .. } => ViewError::Incomplete,
                    _ => ViewError::Unknown,
                })?;
                self.dialog = Some(map_result(&result));
            }
            QuizIntent::ConfirmRestart => {
                self.quiz.restart();
                self.notice = None;
                self.dialog = None;
            }
            QuizIntent::DismissResult => {
                self.dialog = None;
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn snapshot_json(&self) -> Option<String> {
        match self.quiz.snapshot_json() {
            Ok(json) => Some(json),
            Err(err) => {
                tracing::warn!(error = %err, "failed to snapshot quiz");
                None
            }
        }
    }
}
