use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    AnswerMatrix, AnswerMatrixError, OPTION_COUNT, OptionIndex, QuestionIndex, QuestionSet,
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// End of the question sequence a navigation step ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    First,
    Last,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::First => f.write_str("first"),
            Boundary::Last => f.write_str("last"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("already at the {0} question")]
    OutOfRange(Boundary),

    #[error(transparent)]
    Answers(#[from] AnswerMatrixError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SnapshotError {
    #[error("snapshot index {index} is out of range ({len} questions)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("snapshot has {actual} answer rows, expected {expected}")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Answers(#[from] AnswerMatrixError),
}

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Transient state kept across a rebuild of the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSnapshot {
    pub index: usize,
    pub answers: Vec<[bool; OPTION_COUNT]>,
}

//
// ─── STATE MACHINE ─────────────────────────────────────────────────────────────
//

/// Cursor plus answer matrix for one pass through the question set.
///
/// The index always points at an existing question and every answer row has
/// at most one selected option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    index: QuestionIndex,
    answers: AnswerMatrix,
}

impl QuizState {
    /// Fresh state positioned at the first question with nothing selected.
    #[must_use]
    pub fn new(questions: &QuestionSet) -> Self {
        Self {
            index: QuestionIndex::FIRST,
            answers: AnswerMatrix::new(questions.len()),
        }
    }

    #[must_use]
    pub fn current_index(&self) -> QuestionIndex {
        self.index
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerMatrix {
        &self.answers
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.index.value() > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.index.value() + 1 < self.question_count()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        !self.can_go_next()
    }

    /// # Errors
    ///
    /// Returns `QuizError::OutOfRange` at the first question.
    pub fn go_to_previous(&mut self) -> Result<QuestionIndex, QuizError> {
        if !self.can_go_previous() {
            return Err(QuizError::OutOfRange(Boundary::First));
        }
        self.index = QuestionIndex::new(self.index.value() - 1);
        Ok(self.index)
    }

    /// # Errors
    ///
    /// Returns `QuizError::OutOfRange` at the last question.
    pub fn go_to_next(&mut self) -> Result<QuestionIndex, QuizError> {
        if !self.can_go_next() {
            return Err(QuizError::OutOfRange(Boundary::Last));
        }
        self.index = QuestionIndex::new(self.index.value() + 1);
        Ok(self.index)
    }

    /// # Errors
    ///
    /// Returns `QuizError::Answers` if `question` does not exist.
    pub fn select_option(
        &mut self,
        question: QuestionIndex,
        option: OptionIndex,
    ) -> Result<(), QuizError> {
        self.answers.select(question, option)?;
        Ok(())
    }

    #[must_use]
    pub fn selected_option(&self, question: QuestionIndex) -> Option<OptionIndex> {
        self.answers.selected(question)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.answered_count()
    }

    #[must_use]
    pub fn unanswered(&self) -> Vec<QuestionIndex> {
        self.answers.unanswered()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.answered_count() == self.question_count()
    }

    /// Sum of the selected options' weights. Unanswered questions add nothing.
    #[must_use]
    pub fn compute_score(&self, questions: &QuestionSet) -> u32 {
        questions
            .iter()
            .enumerate()
            .filter_map(|(index, question)| {
                self.selected_option(QuestionIndex::new(index))
                    .map(|option| u32::from(question.weight(option).value()))
            })
            .sum()
    }

    /// Back to the first question with every answer cleared.
    pub fn restart(&mut self) {
        self.index = QuestionIndex::FIRST;
        self.answers.clear();
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            index: self.index.value(),
            answers: self.answers.rows().to_vec(),
        }
    }

    /// Rebuilds a state from a snapshot taken against the same question set.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError` if the row count differs from the question set,
    /// the index is out of range, or a row has more than one selection.
    pub fn restore(snapshot: QuizSnapshot, questions: &QuestionSet) -> Result<Self, SnapshotError> {
        if snapshot.answers.len() != questions.len() {
            return Err(SnapshotError::RowCountMismatch {
                expected: questions.len(),
                actual: snapshot.answers.len(),
            });
        }
        if snapshot.index >= questions.len() {
            return Err(SnapshotError::IndexOutOfRange {
                index: snapshot.index,
                len: questions.len(),
            });
        }

        Ok(Self {
            index: QuestionIndex::new(snapshot.index),
            answers: AnswerMatrix::from_rows(snapshot.answers)?,
        })
    }
}
