mod answers;
mod band;
mod ids;
mod outcome;
mod question;
mod text;

pub use answers::{AnswerMatrix, AnswerMatrixError};
pub use band::ScoreBand;
pub use ids::{OPTION_COUNT, OptionIndex, QuestionIndex};
pub use outcome::{OutcomeError, QuizOutcome};
pub use question::{QUESTION_COUNT, Question, QuestionSet, QuestionSetError, Weight, WeightError};
pub use text::{OptionLabel, QuestionText, Text, TextError};

#[cfg(test)]
pub(crate) use question::fixtures;
