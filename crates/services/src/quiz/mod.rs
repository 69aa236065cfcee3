mod progress;
mod result;
mod service;

// Public API of the quiz subsystem.
pub use crate::error::QuizServiceError;
pub use progress::QuizProgress;
pub use result::{QuizResult, ResultMessage};
pub use service::{CurrentQuestion, QuizService, SelectionOutcome};
