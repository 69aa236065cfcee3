use services::QuizResult;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub score_label: String,
    pub finished_at_str: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl From<&QuizResult> for ResultVm {
    fn from(result: &QuizResult) -> Self {
        Self {
            title: result.message.title.clone(),
            paragraphs: result
                .message
                .body
                .split("\n\n")
                .map(ToString::to_string)
                .collect(),
            score_label: format!(
                "Score: {} of {}",
                result.score(),
                result.outcome.max_score()
            ),
            finished_at_str: format_datetime(result.outcome.finished_at()),
            confirm_label: result.message.confirm_label.clone(),
            cancel_label: result.message.cancel_label.clone(),
        }
    }
}

#[must_use]
pub fn map_result(result: &QuizResult) -> ResultVm {
    ResultVm::from(result)
}
