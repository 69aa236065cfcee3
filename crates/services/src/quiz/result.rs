use quiz_core::model::{QuizOutcome, ScoreBand};

pub const RESULT_TITLE: &str = "Test result";
pub const RESULT_PREFIX: &str = "Your level of self-education is ";
pub const TAKE_AGAIN: &str = "Would you like to take the test again?";
pub const CONFIRM_LABEL: &str = "OK";
pub const CANCEL_LABEL: &str = "Cancel";

/// Text shown in the result dialog.
///
/// Confirming restarts the quiz; cancelling only closes the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultMessage {
    pub title: String,
    pub body: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ResultMessage {
    #[must_use]
    pub fn for_band(band: ScoreBand) -> Self {
        Self {
            title: RESULT_TITLE.to_string(),
            body: format!("{RESULT_PREFIX}{}.\n\n{TAKE_AGAIN}", band.label()),
            confirm_label: CONFIRM_LABEL.to_string(),
            cancel_label: CANCEL_LABEL.to_string(),
        }
    }
}

/// Outcome of a finished quiz together with the message describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub outcome: QuizOutcome,
    pub message: ResultMessage,
}

impl QuizResult {
    #[must_use]
    pub fn new(outcome: QuizOutcome) -> Self {
        let message = ResultMessage::for_band(outcome.band());
        Self { outcome, message }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.outcome.score()
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        self.outcome.band()
    }
}
