use thiserror::Error;

use crate::model::ids::{OPTION_COUNT, OptionIndex, QuestionIndex};
use crate::model::text::{OptionLabel, QuestionText, TextError};

/// Number of questions in a quiz. The question set never varies in shape.
pub const QUESTION_COUNT: usize = 18;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WeightError {
    #[error("option weight must be between 1 and 3, got {0}")]
    OutOfRange(u8),
}

/// Configuration errors raised while loading the question tables.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("expected {expected} questions, found {actual}")]
    QuestionCount { expected: usize, actual: usize },

    #[error("option table has {actual} rows for {expected} questions")]
    OptionTableLength { expected: usize, actual: usize },

    #[error("weight table has {actual} rows for {expected} questions")]
    WeightTableLength { expected: usize, actual: usize },

    #[error("question {question} has {actual} options, expected 3")]
    OptionCount { question: usize, actual: usize },

    #[error("question {question} has {actual} weights, expected 3")]
    WeightCount { question: usize, actual: usize },

    #[error("question {question} text: {source}")]
    QuestionText { question: usize, source: TextError },

    #[error("question {question} option {option} label: {source}")]
    OptionLabel {
        question: usize,
        option: usize,
        source: TextError,
    },

    #[error("question {question}: {source}")]
    Weight { question: usize, source: WeightError },
}

//
// ─── WEIGHT ────────────────────────────────────────────────────────────────────
//

/// Score contribution of a single option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Weight(u8);

impl Weight {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    /// # Errors
    ///
    /// Returns `WeightError::OutOfRange` outside `1..=3`.
    pub fn new(value: u8) -> Result<Self, WeightError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(WeightError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: QuestionText,
    options: [OptionLabel; OPTION_COUNT],
    weights: [Weight; OPTION_COUNT],
}

impl Question {
    #[must_use]
    pub fn new(
        text: QuestionText,
        options: [OptionLabel; OPTION_COUNT],
        weights: [Weight; OPTION_COUNT],
    ) -> Self {
        Self {
            text,
            options,
            weights,
        }
    }

    #[must_use]
    pub fn text(&self) -> &QuestionText {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[OptionLabel; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, option: OptionIndex) -> &OptionLabel {
        &self.options[option.position()]
    }

    #[must_use]
    pub fn weight(&self, option: OptionIndex) -> Weight {
        self.weights[option.position()]
    }

    /// The option worth the most points. Ties resolve to the earliest option.
    #[must_use]
    pub fn heaviest_option(&self) -> OptionIndex {
        OptionIndex::ALL
            .into_iter()
            .fold(OptionIndex::First, |best, option| {
                if self.weight(option) > self.weight(best) {
                    option
                } else {
                    best
                }
            })
    }
}

//
// ─── QUESTION SET ──────────────────────────────────────────────────────────────
//

/// The immutable, validated sequence of quiz questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// # Errors
    ///
    /// Returns `QuestionSetError::QuestionCount` unless exactly `QUESTION_COUNT`
    /// questions are given.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        if questions.len() != QUESTION_COUNT {
            return Err(QuestionSetError::QuestionCount {
                expected: QUESTION_COUNT,
                actual: questions.len(),
            });
        }
        Ok(Self { questions })
    }

    /// Builds the set from parallel question, option and weight tables.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSetError` when table lengths disagree, a row has the
    /// wrong number of entries, a text is blank or a weight is outside `1..=3`.
    pub fn from_tables(
        questions: Vec<String>,
        options: Vec<Vec<String>>,
        weights: Vec<Vec<u8>>,
    ) -> Result<Self, QuestionSetError> {
        if questions.len() != QUESTION_COUNT {
            return Err(QuestionSetError::QuestionCount {
                expected: QUESTION_COUNT,
                actual: questions.len(),
            });
        }
        if options.len() != questions.len() {
            return Err(QuestionSetError::OptionTableLength {
                expected: questions.len(),
                actual: options.len(),
            });
        }
        if weights.len() != questions.len() {
            return Err(QuestionSetError::WeightTableLength {
                expected: questions.len(),
                actual: weights.len(),
            });
        }

        let mut parsed = Vec::with_capacity(questions.len());
        let rows = questions.into_iter().zip(options).zip(weights);
        for (question, ((text, labels), row_weights)) in rows.enumerate() {
            let text = QuestionText::parse(text)
                .map_err(|source| QuestionSetError::QuestionText { question, source })?;

            let labels: [String; OPTION_COUNT] =
                labels
                    .try_into()
                    .map_err(|rejected: Vec<String>| QuestionSetError::OptionCount {
                        question,
                        actual: rejected.len(),
                    })?;
            let [a, b, c] = labels;
            let label = |option: usize, value: String| {
                OptionLabel::parse(value).map_err(|source| QuestionSetError::OptionLabel {
                    question,
                    option,
                    source,
                })
            };
            let labels = [label(0, a)?, label(1, b)?, label(2, c)?];

            let row_weights: [u8; OPTION_COUNT] =
                row_weights
                    .try_into()
                    .map_err(|rejected: Vec<u8>| QuestionSetError::WeightCount {
                        question,
                        actual: rejected.len(),
                    })?;
            let weight = |value: u8| {
                Weight::new(value).map_err(|source| QuestionSetError::Weight { question, source })
            };
            let row_weights = [
                weight(row_weights[0])?,
                weight(row_weights[1])?,
                weight(row_weights[2])?,
            ];

            parsed.push(Question::new(text, labels, row_weights));
        }

        Self::new(parsed)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn question(&self, index: QuestionIndex) -> Option<&Question> {
        self.questions.get(index.value())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Highest score reachable by picking the heaviest option everywhere.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.questions
            .iter()
            .map(|q| u32::from(q.weight(q.heaviest_option()).value()))
            .sum()
    }
}
