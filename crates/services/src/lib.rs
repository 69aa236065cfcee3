#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod quiz;

pub use quiz_core::Clock;

pub use catalog::{QuestionTables, bundled_question_set, load_question_set};
pub use error::{CatalogError, QuizServiceError};
pub use quiz::{
    CurrentQuestion, QuizProgress, QuizResult, QuizService, ResultMessage, SelectionOutcome,
};
