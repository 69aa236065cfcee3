use dioxus::prelude::*;

use crate::vm::ResultVm;

#[component]
pub fn ResultDialog(result: ResultVm, on_confirm: Callback<()>, on_dismiss: Callback<()>) -> Element {
    rsx! {
        div {
            class: "quiz-modal-overlay",
            onclick: move |_| on_dismiss.call(()),
            div {
                class: "quiz-modal",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "quiz-modal-title", "{result.title}" }
                for paragraph in result.paragraphs.iter() {
                    p { class: "quiz-modal-body", "{paragraph}" }
                }
                p { class: "quiz-modal-meta", "{result.score_label} · {result.finished_at_str}" }
                div { class: "quiz-modal-actions",
                    button {
                        class: "btn quiz-modal-cancel",
                        r#type: "button",
                        onclick: move |_| on_dismiss.call(()),
                        "{result.cancel_label}"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_confirm.call(()),
                        "{result.confirm_label}"
                    }
                }
            }
        }
    }
}
