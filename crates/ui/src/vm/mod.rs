mod quiz_vm;
mod result_vm;
mod time_fmt;

pub use quiz_vm::{OptionVm, QuestionVm, QuizIntent, QuizVm};
pub use result_vm::{ResultVm, map_result};
