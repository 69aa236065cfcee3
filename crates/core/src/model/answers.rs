use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{OPTION_COUNT, OptionIndex, QuestionIndex};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerMatrixError {
    #[error("question {index} is out of range ({len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("question {index} has more than one option selected")]
    MultipleSelections { index: usize },
}

/// Per-question radio selection. Each row holds at most one `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<[bool; OPTION_COUNT]>", into = "Vec<[bool; OPTION_COUNT]>")]
pub struct AnswerMatrix {
    rows: Vec<[bool; OPTION_COUNT]>,
}

impl AnswerMatrix {
    /// An empty matrix with no selections.
    #[must_use]
    pub fn new(question_count: usize) -> Self {
        Self {
            rows: vec![[false; OPTION_COUNT]; question_count],
        }
    }

    /// # Errors
    ///
    /// Returns `AnswerMatrixError::MultipleSelections` for the first row with
    /// more than one option selected.
    pub fn from_rows(rows: Vec<[bool; OPTION_COUNT]>) -> Result<Self, AnswerMatrixError> {
        if let Some(index) = rows
            .iter()
            .position(|row| row.iter().filter(|checked| **checked).count() > 1)
        {
            return Err(AnswerMatrixError::MultipleSelections { index });
        }
        Ok(Self { rows })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn rows(&self) -> &[[bool; OPTION_COUNT]] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, question: QuestionIndex) -> Option<[bool; OPTION_COUNT]> {
        self.rows.get(question.value()).copied()
    }

    /// Checks `option` and unchecks the other two options of `question`.
    ///
    /// # Errors
    ///
    /// Returns `AnswerMatrixError::QuestionOutOfRange` for an unknown question.
    pub fn select(
        &mut self,
        question: QuestionIndex,
        option: OptionIndex,
    ) -> Result<(), AnswerMatrixError> {
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(question.value())
            .ok_or(AnswerMatrixError::QuestionOutOfRange {
                index: question.value(),
                len,
            })?;
        *row = [false; OPTION_COUNT];
        row[option.position()] = true;
        Ok(())
    }

    #[must_use]
    pub fn selected(&self, question: QuestionIndex) -> Option<OptionIndex> {
        let row = self.rows.get(question.value())?;
        row.iter()
            .position(|checked| *checked)
            .and_then(OptionIndex::from_position)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.iter().any(|checked| *checked))
            .count()
    }

    #[must_use]
    pub fn unanswered(&self) -> Vec<QuestionIndex> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.iter().any(|checked| *checked))
            .map(|(index, _)| QuestionIndex::new(index))
            .collect()
    }

    pub fn clear(&mut self) {
        self.rows.fill([false; OPTION_COUNT]);
    }
}

impl TryFrom<Vec<[bool; OPTION_COUNT]>> for AnswerMatrix {
    type Error = AnswerMatrixError;

    fn try_from(rows: Vec<[bool; OPTION_COUNT]>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<AnswerMatrix> for Vec<[bool; OPTION_COUNT]> {
    fn from(matrix: AnswerMatrix) -> Self {
        matrix.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_is_radio_exclusive_for_every_question() {
        let mut matrix = AnswerMatrix::new(18);
        for index in 0..18 {
            let question = QuestionIndex::new(index);
            for option in OptionIndex::ALL {
                matrix.select(question, option).unwrap();
                let row = matrix.row(question).unwrap();
                for other in OptionIndex::ALL {
                    assert_eq!(row[other.position()], other == option);
                }
                assert_eq!(matrix.selected(question), Some(option));
            }
        }
        assert_eq!(matrix.answered_count(), 18);
    }

    #[test]
    fn select_rejects_unknown_question() {
        let mut matrix = AnswerMatrix::new(18);
        let err = matrix
            .select(QuestionIndex::new(18), OptionIndex::First)
            .unwrap_err();
        assert_eq!(
            err,
            AnswerMatrixError::QuestionOutOfRange { index: 18, len: 18 }
        );
    }

    #[test]
    fn unanswered_lists_gaps_in_order() {
        let mut matrix = AnswerMatrix::new(4);
        matrix
            .select(QuestionIndex::new(1), OptionIndex::Second)
            .unwrap();
        matrix
            .select(QuestionIndex::new(3), OptionIndex::Third)
            .unwrap();
        assert_eq!(
            matrix.unanswered(),
            vec![QuestionIndex::new(0), QuestionIndex::new(2)]
        );
        matrix.clear();
        assert_eq!(matrix.answered_count(), 0);
        assert_eq!(matrix.len(), 4);
    }

    #[test]
    fn from_rows_rejects_double_selection() {
        let rows = vec![[true, false, false], [true, true, false]];
        let err = AnswerMatrix::from_rows(rows).unwrap_err();
        assert_eq!(err, AnswerMatrixError::MultipleSelections { index: 1 });
    }

    #[test]
    fn deserialize_validates_rows() {
        let err = serde_json::from_str::<AnswerMatrix>("[[true,false,true]]");
        assert!(err.is_err());
        let ok: AnswerMatrix = serde_json::from_str("[[false,false,true]]").unwrap();
        assert_eq!(ok.selected(QuestionIndex::FIRST), Some(OptionIndex::Third));
    }
}
