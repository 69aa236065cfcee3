use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ResultDialog, ViewError};
use crate::vm::{QuizIntent, QuizVm};

/// Signals and the intent dispatcher behind the quiz screen.
#[derive(Clone, Copy)]
pub(crate) struct QuizController {
    pub vm: Signal<QuizVm>,
    pub error: Signal<Option<ViewError>>,
    pub dispatch: Callback<QuizIntent>,
}

/// Resumes from the context's snapshot slot and keeps it in step with every intent.
pub(crate) fn use_quiz_controller() -> QuizController {
    let ctx = use_context::<AppContext>();
    let slot = ctx.snapshot_slot();
    let mut vm = use_signal(|| {
        let saved = slot.load();
        QuizVm::resume(ctx.question_set(), ctx.clock(), saved.as_deref())
    });
    let mut error = use_signal(|| None::<ViewError>);

    let dispatch = use_callback(move |intent: QuizIntent| {
        let snapshot = {
            let mut quiz = vm.write();
            match quiz.dispatch(intent) {
                Ok(()) => error.set(None),
                Err(err) => {
                    tracing::debug!(?intent, ?err, "quiz intent rejected");
                    error.set(Some(err));
                }
            }
            quiz.snapshot_json()
        };

        if intent == QuizIntent::ConfirmRestart {
            slot.clear();
        } else if let Some(snapshot) = snapshot {
            slot.store(snapshot);
        }
    });

    QuizController {
        vm,
        error,
        dispatch,
    }
}

#[component]
pub fn QuizView() -> Element {
    let QuizController {
        vm,
        error,
        dispatch,
    } = use_quiz_controller();

    let (question, notice, dialog) = {
        let quiz = vm.read();
        (
            quiz.question(),
            quiz.notice().map(ToString::to_string),
            quiz.dialog().cloned(),
        )
    };

    rsx! {
        div { class: "page quiz",
            p { class: "quiz-number", "{question.number_label}" }
            h2 { class: "quiz-question", "{question.text}" }

            div { class: "quiz-options", role: "radiogroup",
                for option in question.options {
                    button {
                        key: "{option.index.position()}",
                        class: if option.checked { "quiz-option is-checked" } else { "quiz-option" },
                        r#type: "button",
                        role: "radio",
                        aria_checked: "{option.checked}",
                        onclick: move |_| dispatch.call(QuizIntent::Select(option.index)),
                        "{option.label}"
                    }
                }
            }

            p { class: "quiz-progress", "{question.progress_label}" }

            if let Some(notice) = notice {
                p { class: "quiz-notice", role: "status", "{notice}" }
            }
            if let Some(err) = error() {
                p { class: "quiz-error", "{err.message()}" }
            }

            div { class: "quiz-nav",
                if question.show_previous {
                    button {
                        id: "quiz-previous",
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Previous),
                        "Previous"
                    }
                }
                if question.show_next {
                    button {
                        id: "quiz-next",
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Next),
                        "Next"
                    }
                }
                if question.show_finish {
                    button {
                        id: "quiz-finish",
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Finish),
                        "Finish"
                    }
                }
            }

            if let Some(result) = dialog {
                ResultDialog {
                    result,
                    on_confirm: move |_| dispatch.call(QuizIntent::ConfirmRestart),
                    on_dismiss: move |_| dispatch.call(QuizIntent::DismissResult),
                }
            }
        }
    }
}
